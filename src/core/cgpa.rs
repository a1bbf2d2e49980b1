//! CGPA calculator
//!
//! `CGPA = Σ(credits_i × points_i) / Σ(credits_i)`, a credit-weighted mean of
//! grade points. Callers pre-filter invalid entries; an empty input or a zero
//! credit total yields exactly `0.0`, never `NaN`.

use crate::core::grading::Grade;
use crate::core::models::SubjectEntry;
use serde::Serialize;
use std::fmt;

/// Anything carrying a credit weight and a grade
pub trait Graded {
    /// Credit weight
    fn credits(&self) -> u32;

    /// Grade awarded
    fn grade(&self) -> Grade;
}

impl Graded for SubjectEntry {
    fn credits(&self) -> u32 {
        self.credits
    }

    fn grade(&self) -> Grade {
        self.grade
    }
}

impl Graded for (u32, Grade) {
    fn credits(&self) -> u32 {
        self.0
    }

    fn grade(&self) -> Grade {
        self.1
    }
}

impl<T: Graded + ?Sized> Graded for &T {
    fn credits(&self) -> u32 {
        (**self).credits()
    }

    fn grade(&self) -> Grade {
        (**self).grade()
    }
}

/// Sum of credits and of credit-weighted points
fn weighted_totals<'a, E, I>(entries: I) -> (u64, f64)
where
    E: Graded + 'a,
    I: IntoIterator<Item = &'a E>,
{
    entries
        .into_iter()
        .fold((0_u64, 0.0_f64), |(credits, points), entry| {
            (
                credits + u64::from(entry.credits()),
                points + f64::from(entry.credits()) * f64::from(entry.grade().points()),
            )
        })
}

#[allow(clippy::cast_precision_loss)]
fn mean(credits: u64, points: f64) -> f64 {
    if credits == 0 {
        0.0
    } else {
        points / credits as f64
    }
}

/// Credit-weighted CGPA of `entries`, or `0.0` when there is nothing to average
#[must_use]
pub fn calculate_cgpa<E: Graded>(entries: &[E]) -> f64 {
    let (credits, points) = weighted_totals(entries);
    mean(credits, points)
}

/// CGPA of several entry groups taken as one concatenated sequence
#[must_use]
pub fn calculate_combined_cgpa<E: Graded>(groups: &[&[E]]) -> f64 {
    let (credits, points) = weighted_totals(groups.iter().flat_map(|group| group.iter()));
    mean(credits, points)
}

/// Sum of credits over `entries`
#[must_use]
pub fn total_credits<E: Graded>(entries: &[E]) -> u32 {
    entries.iter().map(Graded::credits).sum()
}

/// Sum of `credits × points` over `entries`
#[must_use]
pub fn total_grade_points<E: Graded>(entries: &[E]) -> f64 {
    weighted_totals(entries).1
}

/// Qualitative band for a CGPA value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Standing {
    /// 9.0 and above
    Outstanding,
    /// 8.0 to below 9.0
    Excellent,
    /// 7.0 to below 8.0
    VeryGood,
    /// 6.0 to below 7.0
    Good,
    /// 5.0 to below 6.0
    Average,
    /// Above zero, below 5.0
    BelowAverage,
    /// No data
    NotAvailable,
}

impl Standing {
    /// Band containing `cgpa`
    #[must_use]
    pub fn of(cgpa: f64) -> Self {
        if cgpa >= 9.0 {
            Self::Outstanding
        } else if cgpa >= 8.0 {
            Self::Excellent
        } else if cgpa >= 7.0 {
            Self::VeryGood
        } else if cgpa >= 6.0 {
            Self::Good
        } else if cgpa >= 5.0 {
            Self::Average
        } else if cgpa > 0.0 {
            Self::BelowAverage
        } else {
            Self::NotAvailable
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding",
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
            Self::NotAvailable => "N/A",
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// CGPA together with the data it was computed from
///
/// `subjects == 0` distinguishes "no data" from a genuine CGPA of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CgpaSummary {
    /// Credit-weighted average
    pub cgpa: f64,
    /// Total credits counted
    pub credits: u32,
    /// Number of entries counted
    pub subjects: usize,
}

impl CgpaSummary {
    /// Summarize already-filtered entries
    #[must_use]
    pub fn of<E: Graded>(entries: &[E]) -> Self {
        Self {
            cgpa: calculate_cgpa(entries),
            credits: total_credits(entries),
            subjects: entries.len(),
        }
    }

    /// Summarize several groups as one
    #[must_use]
    pub fn combined<E: Graded>(groups: &[&[E]]) -> Self {
        Self {
            cgpa: calculate_combined_cgpa(groups),
            credits: groups.iter().map(|&g| total_credits(g)).sum(),
            subjects: groups.iter().map(|g| g.len()).sum(),
        }
    }

    /// Whether any entry was counted
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.subjects > 0
    }

    /// Band for this CGPA
    #[must_use]
    pub fn standing(&self) -> Standing {
        Standing::of(self.cgpa)
    }

    /// CGPA formatted to two decimals, or an em dash without data
    #[must_use]
    pub fn display_cgpa(&self) -> String {
        if self.has_data() && self.cgpa > 0.0 {
            format!("{:.2}", self.cgpa)
        } else {
            "—".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Pair = (u32, Grade);

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn cgpa_of(pairs: &[Pair]) -> f64 {
        calculate_cgpa(pairs)
    }

    #[test]
    fn test_empty_input_is_zero() {
        let none: [Pair; 0] = [];
        assert!(approx(calculate_cgpa(&none), 0.0));
        assert!(!calculate_cgpa(&none).is_nan());
    }

    #[test]
    fn test_zero_credit_total_is_zero() {
        let entries: [Pair; 2] = [(0, Grade::S), (0, Grade::A)];
        let cgpa = calculate_cgpa(&entries);
        assert!(!cgpa.is_nan());
        assert!(approx(cgpa, 0.0));
    }

    #[test]
    fn test_single_entry() {
        assert!(approx(cgpa_of(&[(4, Grade::S)]), 10.0));
    }

    #[test]
    fn test_weighted_mean() {
        assert!(approx(cgpa_of(&[(4, Grade::S), (4, Grade::U)]), 5.0));
        // (4×9 + 3×8) / 7
        assert!(approx(
            cgpa_of(&[(4, Grade::A), (3, Grade::B)]),
            60.0 / 7.0
        ));
    }

    #[test]
    fn test_order_independence() {
        let forward: [Pair; 4] = [(4, Grade::S), (3, Grade::C), (2, Grade::E), (4, Grade::U)];
        let mut reversed = forward;
        reversed.reverse();
        let mut rotated = forward;
        rotated.rotate_left(2);
        let base = calculate_cgpa(&forward);
        assert!(approx(base, calculate_cgpa(&reversed)));
        assert!(approx(base, calculate_cgpa(&rotated)));
    }

    #[test]
    fn test_combined_matches_concatenation() {
        let a: [Pair; 2] = [(4, Grade::S), (3, Grade::B)];
        let b: [Pair; 3] = [(4, Grade::D), (2, Grade::A), (4, Grade::U)];
        let concat: Vec<Pair> = a.iter().chain(b.iter()).copied().collect();
        assert!(approx(
            calculate_combined_cgpa(&[&a[..], &b[..]]),
            calculate_cgpa(&concat)
        ));
        assert!(approx(calculate_combined_cgpa(&[&a[..], &[][..]]), calculate_cgpa(&a)));
    }

    #[test]
    fn test_result_within_scale() {
        for grade in Grade::ALL {
            let cgpa = cgpa_of(&[(3, grade), (4, Grade::S), (1, Grade::U)]);
            assert!((0.0..=10.0).contains(&cgpa));
        }
    }

    #[test]
    fn test_totals() {
        let entries: [Pair; 2] = [(4, Grade::A), (3, Grade::B)];
        assert_eq!(total_credits(&entries), 7);
        assert!(approx(total_grade_points(&entries), 60.0));
    }

    #[test]
    fn test_standing_bands() {
        assert_eq!(Standing::of(9.0), Standing::Outstanding);
        assert_eq!(Standing::of(8.99), Standing::Excellent);
        assert_eq!(Standing::of(7.5), Standing::VeryGood);
        assert_eq!(Standing::of(6.0), Standing::Good);
        assert_eq!(Standing::of(5.2), Standing::Average);
        assert_eq!(Standing::of(0.5), Standing::BelowAverage);
        assert_eq!(Standing::of(0.0), Standing::NotAvailable);
        assert_eq!(Standing::VeryGood.to_string(), "Very Good");
    }

    #[test]
    fn test_summary_distinguishes_no_data_from_failing() {
        let none: [Pair; 0] = [];
        let failing: [Pair; 1] = [(4, Grade::U)];
        let empty = CgpaSummary::of(&none);
        let failed = CgpaSummary::of(&failing);
        assert!(approx(empty.cgpa, failed.cgpa));
        assert!(!empty.has_data());
        assert!(failed.has_data());
        assert_eq!(failed.credits, 4);
    }

    #[test]
    fn test_combined_summary() {
        let a: [Pair; 1] = [(4, Grade::S)];
        let b: [Pair; 2] = [(4, Grade::U), (2, Grade::B)];
        let summary = CgpaSummary::combined(&[&a[..], &b[..]]);
        assert_eq!(summary.subjects, 3);
        assert_eq!(summary.credits, 10);
        assert!(approx(summary.cgpa, 56.0 / 10.0));
        assert_eq!(summary.display_cgpa(), "5.60");
    }
}

//! Subject entry model

use super::Subject;
use crate::core::grading::Grade;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Smallest credit value an entry may carry
pub const MIN_CREDITS: u32 = 1;

/// Largest credit value an entry may carry
pub const MAX_CREDITS: u32 = 12;

/// Credit value of a freshly created entry
pub const DEFAULT_CREDITS: u32 = 4;

/// Clamp a user-supplied credit value into `[MIN_CREDITS, MAX_CREDITS]`
#[must_use]
pub fn clamp_credits(value: i64) -> u32 {
    let clamped = value.clamp(i64::from(MIN_CREDITS), i64::from(MAX_CREDITS));
    u32::try_from(clamped).unwrap_or(MIN_CREDITS)
}

/// What an entry refers to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectRef {
    /// No subject chosen yet
    #[default]
    Unselected,
    /// A subject outside the catalog, named by the entry itself
    Custom,
    /// A catalog subject by id (e.g., "ds-f-1")
    Catalog(String),
}

impl SubjectRef {
    /// Catalog id, if this refers to a catalog subject
    #[must_use]
    pub fn catalog_id(&self) -> Option<&str> {
        match self {
            Self::Catalog(id) => Some(id.as_str()),
            _ => None,
        }
    }
}

/// A single field edit applied to an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryUpdate {
    /// Replace the subject reference
    Subject(SubjectRef),
    /// Replace the display name
    Name(String),
    /// Replace the credit value (clamped on apply)
    Credits(i64),
    /// Replace the grade
    Grade(Grade),
}

/// One course instance entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectEntry {
    /// Opaque identifier, stable for the entry's lifetime
    pub id: Uuid,

    /// Subject reference
    #[serde(default)]
    pub subject: SubjectRef,

    /// Display name; authoritative only for custom subjects
    #[serde(default)]
    pub subject_name: String,

    /// Credit weight
    pub credits: u32,

    /// Awarded or expected grade
    #[serde(default)]
    pub grade: Grade,
}

impl SubjectEntry {
    /// Create an empty placeholder entry with a fresh id
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: SubjectRef::Unselected,
            subject_name: String::new(),
            credits: DEFAULT_CREDITS,
            grade: Grade::default(),
        }
    }

    /// Create an entry for a catalog subject, copying its name and credits
    #[must_use]
    pub fn for_subject(subject: &Subject, grade: Grade) -> Self {
        let mut entry = Self::empty();
        entry.select_subject(subject);
        entry.grade = grade;
        entry
    }

    /// Create a custom entry outside the catalog
    #[must_use]
    pub fn custom(name: &str, credits: i64, grade: Grade) -> Self {
        let mut entry = Self::empty();
        entry.subject = SubjectRef::Custom;
        entry.subject_name = name.to_string();
        entry.credits = clamp_credits(credits);
        entry.grade = grade;
        entry
    }

    /// Whether the entry counts toward calculations
    ///
    /// An entry is valid when it refers to a catalog subject, or to a custom
    /// subject with a non-blank name, and carries positive credits.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let has_subject = match &self.subject {
            SubjectRef::Unselected => false,
            SubjectRef::Custom => !self.subject_name.trim().is_empty(),
            SubjectRef::Catalog(id) => !id.is_empty(),
        };
        has_subject && self.credits > 0
    }

    /// Point the entry at a catalog subject, mirroring its name and credits
    pub fn select_subject(&mut self, subject: &Subject) {
        self.subject = SubjectRef::Catalog(subject.id.to_string());
        self.subject_name = subject.name.to_string();
        self.credits = subject.credits;
    }

    /// Turn the entry into an unnamed custom subject with default credits
    pub fn select_custom(&mut self) {
        self.subject = SubjectRef::Custom;
        self.subject_name.clear();
        self.credits = DEFAULT_CREDITS;
    }

    /// Apply one field edit
    ///
    /// Name and credits of a catalog subject mirror the catalog, so they can
    /// only be edited on custom subjects.
    ///
    /// # Errors
    ///
    /// Returns an error if the edit would break the catalog mirror
    pub fn apply(&mut self, update: EntryUpdate) -> Result<(), String> {
        match update {
            EntryUpdate::Subject(SubjectRef::Custom) => self.select_custom(),
            EntryUpdate::Subject(SubjectRef::Unselected) => {
                self.subject = SubjectRef::Unselected;
                self.subject_name.clear();
            }
            EntryUpdate::Subject(SubjectRef::Catalog(id)) => {
                return Err(format!(
                    "Catalog subject '{id}' must be selected from the catalog"
                ));
            }
            EntryUpdate::Name(_) | EntryUpdate::Credits(_) if self.subject != SubjectRef::Custom => {
                return Err(format!(
                    "Name and credits of '{}' follow the catalog; only custom subjects can change them",
                    self.display_name()
                ));
            }
            EntryUpdate::Name(name) => self.subject_name = name,
            EntryUpdate::Credits(credits) => self.credits = clamp_credits(credits),
            EntryUpdate::Grade(grade) => self.grade = grade,
        }
        Ok(())
    }

    /// First eight characters of the id, enough to address an entry from the CLI
    #[must_use]
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    /// Name to show for this entry
    #[must_use]
    pub fn display_name(&self) -> &str {
        match (&self.subject, self.subject_name.trim().is_empty()) {
            (SubjectRef::Unselected, _) => "(no subject selected)",
            (SubjectRef::Custom, true) => "(unnamed custom subject)",
            (SubjectRef::Catalog(id), true) => id.as_str(),
            _ => self.subject_name.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Level;

    const STATS: Subject = Subject::new(
        "ds-f-2",
        "Statistics for Data Science I",
        4,
        Level::Foundation,
        "Statistics",
    );

    #[test]
    fn test_empty_entry_defaults() {
        let entry = SubjectEntry::empty();
        assert_eq!(entry.subject, SubjectRef::Unselected);
        assert!(entry.subject_name.is_empty());
        assert_eq!(entry.credits, DEFAULT_CREDITS);
        assert_eq!(entry.grade, Grade::S);
        assert!(!entry.is_valid());
    }

    #[test]
    fn test_fresh_ids_are_distinct() {
        let a = SubjectEntry::empty();
        let b = SubjectEntry::empty();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_select_subject_mirrors_catalog() {
        let mut entry = SubjectEntry::empty();
        entry.select_subject(&STATS);
        assert_eq!(entry.subject.catalog_id(), Some("ds-f-2"));
        assert_eq!(entry.subject_name, "Statistics for Data Science I");
        assert_eq!(entry.credits, 4);
        assert!(entry.is_valid());
    }

    #[test]
    fn test_custom_entry_needs_a_name() {
        let mut entry = SubjectEntry::empty();
        entry.select_custom();
        assert!(!entry.is_valid());

        entry.apply(EntryUpdate::Name("   ".to_string())).unwrap();
        assert!(!entry.is_valid());

        entry
            .apply(EntryUpdate::Name("Summer Internship".to_string()))
            .unwrap();
        assert!(entry.is_valid());
    }

    #[test]
    fn test_credits_are_clamped() {
        let mut entry = SubjectEntry::custom("Elective", 4, Grade::B);
        for (input, expected) in [(0, MIN_CREDITS), (-7, MIN_CREDITS), (40, MAX_CREDITS), (3, 3)] {
            entry.apply(EntryUpdate::Credits(input)).unwrap();
            assert_eq!(entry.credits, expected);
        }
    }

    #[test]
    fn test_catalog_entry_keeps_catalog_name_and_credits() {
        let mut entry = SubjectEntry::for_subject(&STATS, Grade::A);

        assert!(entry.apply(EntryUpdate::Credits(1)).is_err());
        assert!(entry
            .apply(EntryUpdate::Name("Renamed".to_string()))
            .is_err());
        assert_eq!(entry.subject_name, "Statistics for Data Science I");
        assert_eq!(entry.credits, 4);

        entry.apply(EntryUpdate::Grade(Grade::C)).unwrap();
        assert_eq!(entry.grade, Grade::C);
    }

    #[test]
    fn test_placeholder_rejects_name_and_credits() {
        let mut entry = SubjectEntry::empty();
        assert!(entry.apply(EntryUpdate::Credits(2)).is_err());
        assert_eq!(entry.credits, DEFAULT_CREDITS);
    }

    #[test]
    fn test_subject_reference_edits() {
        let mut entry = SubjectEntry::for_subject(&STATS, Grade::A);
        assert!(entry
            .apply(EntryUpdate::Subject(SubjectRef::Catalog("ds-f-1".to_string())))
            .is_err());
        assert_eq!(entry.subject.catalog_id(), Some("ds-f-2"));

        entry.apply(EntryUpdate::Subject(SubjectRef::Custom)).unwrap();
        assert_eq!(entry.subject, SubjectRef::Custom);
        assert_eq!(entry.credits, DEFAULT_CREDITS);
        assert!(entry.subject_name.is_empty());
    }

    #[test]
    fn test_zero_credit_entry_is_invalid() {
        let mut entry = SubjectEntry::for_subject(&STATS, Grade::A);
        entry.credits = 0;
        assert!(!entry.is_valid());
    }

    #[test]
    fn test_short_id_is_prefix_of_id() {
        let entry = SubjectEntry::empty();
        let short = entry.short_id();
        assert_eq!(short.len(), 8);
        assert!(entry.id.simple().to_string().starts_with(&short));
    }

    #[test]
    fn test_display_name() {
        let mut entry = SubjectEntry::empty();
        assert_eq!(entry.display_name(), "(no subject selected)");
        entry.select_subject(&STATS);
        assert_eq!(entry.display_name(), "Statistics for Data Science I");
    }
}

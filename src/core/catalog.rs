//! Static subject catalog for each domain
//!
//! Read-only reference data used to list selectable subjects and to fill in
//! name and credits when an entry picks a catalog subject.

use crate::core::models::{Domain, Level, Subject};

use crate::core::models::Level::{Degree, Diploma, Foundation};

const DS_SUBJECTS: &[Subject] = &[
    Subject::new("ds-f-1", "Mathematics for Data Science I", 4, Foundation, "Mathematics"),
    Subject::new("ds-f-2", "Statistics for Data Science I", 4, Foundation, "Statistics"),
    Subject::new("ds-f-3", "Computational Thinking", 4, Foundation, "Programming"),
    Subject::new("ds-f-4", "English I", 4, Foundation, "English"),
    Subject::new("ds-f-5", "Mathematics for Data Science II", 4, Foundation, "Mathematics"),
    Subject::new("ds-f-6", "Statistics for Data Science II", 4, Foundation, "Statistics"),
    Subject::new("ds-f-7", "English II", 4, Foundation, "English"),
    Subject::new("ds-f-8", "Introduction to Python Programming", 4, Foundation, "Programming"),
    // Diploma in Programming
    Subject::new("ds-dp-1", "Database Management Systems", 4, Diploma, "Programming"),
    Subject::new(
        "ds-dp-2",
        "Programming Data Structures and Algorithms using Python",
        4,
        Diploma,
        "Programming",
    ),
    Subject::new("ds-dp-3", "Modern Application Development I", 4, Diploma, "Programming"),
    Subject::new("ds-dp-4", "Modern Application Development II", 4, Diploma, "Programming"),
    Subject::new("ds-dp-5", "Programming Concepts using Java", 4, Diploma, "Programming"),
    Subject::new("ds-dp-6", "System Commands", 3, Diploma, "Programming"),
    // Diploma in Data Science
    Subject::new("ds-dd-1", "Machine Learning Foundations", 4, Diploma, "Data Science"),
    Subject::new("ds-dd-2", "Machine Learning Techniques", 4, Diploma, "Data Science"),
    Subject::new("ds-dd-3", "Machine Learning Practice", 4, Diploma, "Data Science"),
    Subject::new("ds-dd-4", "Business Data Management", 4, Diploma, "Data Science"),
    Subject::new("ds-dd-5", "Business Analytics", 4, Diploma, "Data Science"),
    Subject::new("ds-dd-6", "Tools in Data Science", 4, Diploma, "Data Science"),
    Subject::new("ds-deg-1", "Software Engineering", 4, Degree, "Core"),
    Subject::new("ds-deg-2", "Software Testing", 4, Degree, "Core"),
    Subject::new("ds-deg-3", "Deep Learning", 4, Degree, "Core"),
    Subject::new(
        "ds-deg-4",
        "Artificial Intelligence: Search Methods for Problem Solving",
        4,
        Degree,
        "Core",
    ),
    Subject::new("ds-deg-5", "Natural Language Processing", 4, Degree, "Elective"),
    Subject::new("ds-deg-6", "Computer Vision", 4, Degree, "Elective"),
    Subject::new("ds-deg-7", "Big Data Architecture", 4, Degree, "Elective"),
    Subject::new("ds-deg-8", "Data Visualization Design", 4, Degree, "Elective"),
    Subject::new("ds-deg-9", "Reinforcement Learning", 4, Degree, "Elective"),
    Subject::new("ds-deg-10", "Speech Technology", 4, Degree, "Elective"),
    Subject::new("ds-deg-11", "Strategies for Professional Growth", 3, Degree, "Core"),
    Subject::new("ds-deg-12", "Industry 4.0", 3, Degree, "Elective"),
    Subject::new("ds-deg-13", "Capstone Project", 4, Degree, "Project"),
];

const ES_SUBJECTS: &[Subject] = &[
    Subject::new("es-f-1", "Mathematics for Data Science I", 4, Foundation, "Mathematics"),
    Subject::new("es-f-2", "Statistics for Data Science I", 4, Foundation, "Statistics"),
    Subject::new("es-f-3", "Computational Thinking", 4, Foundation, "Programming"),
    Subject::new("es-f-4", "English I", 4, Foundation, "English"),
    Subject::new("es-f-5", "Mathematics for Data Science II", 4, Foundation, "Mathematics"),
    Subject::new("es-f-6", "Statistics for Data Science II", 4, Foundation, "Statistics"),
    Subject::new("es-f-7", "English II", 4, Foundation, "English"),
    Subject::new("es-f-8", "Introduction to Python Programming", 4, Foundation, "Programming"),
    Subject::new("es-dp-1", "Electronic Circuits Analysis", 4, Diploma, "Electronics"),
    Subject::new("es-dp-2", "Signals and Systems", 4, Diploma, "Electronics"),
    Subject::new("es-dp-3", "Introduction to Embedded Systems Design", 4, Diploma, "Electronics"),
    Subject::new("es-dp-4", "Digital Systems Design", 4, Diploma, "Electronics"),
    Subject::new("es-dp-5", "Analog Electronics", 4, Diploma, "Electronics"),
    Subject::new("es-dp-6", "Digital Communication Systems", 4, Diploma, "Electronics"),
    Subject::new("es-dp-7", "Introduction to Internet of Things", 4, Diploma, "Electronics"),
    Subject::new("es-dp-8", "Linear Algebra and Applications", 4, Diploma, "Mathematics"),
    Subject::new("es-dp-9", "Electromagnetic Field Theory", 4, Diploma, "Electronics"),
    Subject::new("es-deg-1", "Control Systems", 4, Degree, "Core"),
    Subject::new("es-deg-2", "VLSI Design", 4, Degree, "Core"),
    Subject::new("es-deg-3", "Microprocessors and Microcontrollers", 4, Degree, "Core"),
    Subject::new("es-deg-4", "Digital Signal Processing", 4, Degree, "Core"),
    Subject::new("es-deg-5", "Wireless Communication", 4, Degree, "Elective"),
    Subject::new("es-deg-6", "Antenna Theory and Design", 4, Degree, "Elective"),
    Subject::new("es-deg-7", "RF Circuit Design", 4, Degree, "Elective"),
    Subject::new("es-deg-8", "Power Electronics", 4, Degree, "Elective"),
    Subject::new("es-deg-9", "Robotics", 4, Degree, "Elective"),
    Subject::new("es-deg-10", "Capstone Project", 4, Degree, "Project"),
];

/// All catalog subjects of a domain, in curriculum order
#[must_use]
pub const fn subjects(domain: Domain) -> &'static [Subject] {
    match domain {
        Domain::Ds => DS_SUBJECTS,
        Domain::Es => ES_SUBJECTS,
    }
}

/// Catalog subjects of a domain at one level
pub fn subjects_at_level(domain: Domain, level: Level) -> impl Iterator<Item = &'static Subject> {
    subjects(domain).iter().filter(move |s| s.level == level)
}

/// Look up a catalog subject by id within a domain
#[must_use]
pub fn find(domain: Domain, id: &str) -> Option<&'static Subject> {
    subjects(domain).iter().find(|s| s.id == id)
}

/// Level of a catalog subject, if the id belongs to the domain's catalog
#[must_use]
pub fn level_of(domain: Domain, id: &str) -> Option<Level> {
    find(domain, id).map(|s| s.level)
}

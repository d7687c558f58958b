//! Roster inputs: teacher availability and student enrollment.
//!
//! Both are flat pair lists, mirroring how the data typically arrives
//! from registrar exports. A teacher appears once per time label they
//! can teach at; a student appears once per subject they take. Input
//! order is preserved everywhere downstream, so the same roster always
//! produces the same candidate enumeration.

use serde::{Deserialize, Serialize};

/// Declares that a teacher can teach at a given time label.
///
/// A given (teacher, time) pair should appear at most once; duplicate
/// pairs are flagged by input validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherAvailability {
    /// Teacher identifier.
    pub teacher: String,
    /// Time label the teacher is available at.
    pub time: String,
}

impl TeacherAvailability {
    /// Creates a new availability entry.
    pub fn new(teacher: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            teacher: teacher.into(),
            time: time.into(),
        }
    }
}

/// Declares that a student is enrolled in a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSubject {
    /// Student identifier.
    pub student: String,
    /// Subject the student is enrolled in.
    pub subject: String,
}

impl StudentSubject {
    /// Creates a new enrollment entry.
    pub fn new(student: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            student: student.into(),
            subject: subject.into(),
        }
    }
}

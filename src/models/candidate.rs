//! Candidate assignment model.
//!
//! A candidate is one feasible (room, teacher, student-group) triple
//! for a single time slot. Candidates are enumerated once by the
//! domain builder; propagation and search only ever narrow the set,
//! never invent new triples.

use serde::{Deserialize, Serialize};

/// A feasible assignment for one time slot.
///
/// The student list is a function of the slot's subject (everyone
/// enrolled in it, in enrollment order) and the room is guaranteed by
/// construction to seat them all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateAssignment {
    /// Assigned room identifier.
    pub room_id: String,
    /// Assigned teacher identifier.
    pub teacher_id: String,
    /// Students attending, in enrollment order.
    pub students: Vec<String>,
}

impl CandidateAssignment {
    /// Creates a new candidate.
    pub fn new(
        room_id: impl Into<String>,
        teacher_id: impl Into<String>,
        students: Vec<String>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            teacher_id: teacher_id.into(),
            students,
        }
    }

    /// Pairwise compatibility between two candidates.
    ///
    /// Two candidates can coexist in a timetable only if they use
    /// different teachers and different rooms. The test is symmetric.
    /// Note this is deliberately global: it forbids sharing a teacher
    /// or room across any two slots, even ones whose time labels
    /// differ.
    pub fn is_compatible_with(&self, other: &CandidateAssignment) -> bool {
        self.teacher_id != other.teacher_id && self.room_id != other.room_id
    }
}

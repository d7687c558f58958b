//! Schedule (solution) model.
//!
//! A schedule is an assignment of time slots to candidate triples. It
//! is partial while the search is running and complete on success.
//! The search pushes a tentative assignment before recursing and pops
//! it on every failing return path, so the assignment list always
//! mirrors the current search prefix.

use serde::{Deserialize, Serialize};

use super::{CandidateAssignment, TimeSlot};

/// One scheduled slot: the slot plus the chosen candidate, flattened
/// for query convenience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// The slot being filled.
    pub slot: TimeSlot,
    /// Chosen room identifier.
    pub room_id: String,
    /// Chosen teacher identifier.
    pub teacher_id: String,
    /// Students attending, in enrollment order.
    pub students: Vec<String>,
}

impl SlotAssignment {
    /// Creates an assignment from a slot and a chosen candidate.
    pub fn new(slot: TimeSlot, candidate: CandidateAssignment) -> Self {
        Self {
            slot,
            room_id: candidate.room_id,
            teacher_id: candidate.teacher_id,
            students: candidate.students,
        }
    }
}

/// A (possibly partial) timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Slot assignments, in the order they were made.
    pub assignments: Vec<SlotAssignment>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn push(&mut self, assignment: SlotAssignment) {
        self.assignments.push(assignment);
    }

    /// Removes and returns the most recent assignment.
    pub fn pop(&mut self) -> Option<SlotAssignment> {
        self.assignments.pop()
    }

    /// Finds the assignment for a given slot.
    pub fn assignment_for_slot(&self, slot: &TimeSlot) -> Option<&SlotAssignment> {
        self.assignments.iter().find(|a| &a.slot == slot)
    }

    /// Room identifiers currently in use, in assignment order.
    pub fn rooms_in_use(&self) -> Vec<&str> {
        self.assignments.iter().map(|a| a.room_id.as_str()).collect()
    }

    /// Teacher identifiers currently in use, in assignment order.
    pub fn teachers_in_use(&self) -> Vec<&str> {
        self.assignments
            .iter()
            .map(|a| a.teacher_id.as_str())
            .collect()
    }

    /// Whether every given slot has an assignment.
    pub fn is_complete(&self, time_slots: &[TimeSlot]) -> bool {
        time_slots
            .iter()
            .all(|slot| self.assignment_for_slot(slot).is_some())
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no slot has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.push(SlotAssignment::new(
            TimeSlot::new("Monday 9AM", "Math"),
            CandidateAssignment::new("Room1", "Teacher1", vec!["Student1".into()]),
        ));
        s.push(SlotAssignment::new(
            TimeSlot::new("Monday 10AM", "Science"),
            CandidateAssignment::new("Room2", "Teacher2", vec!["Student2".into()]),
        ));
        s
    }

    #[test]
    fn test_push_pop_mirrors_search_order() {
        let mut s = sample_schedule();
        assert_eq!(s.len(), 2);

        let undone = s.pop().unwrap();
        assert_eq!(undone.slot, TimeSlot::new("Monday 10AM", "Science"));
        assert_eq!(s.len(), 1);
        assert!(s.assignment_for_slot(&undone.slot).is_none());
    }

    #[test]
    fn test_assignment_for_slot() {
        let s = sample_schedule();
        let a = s
            .assignment_for_slot(&TimeSlot::new("Monday 9AM", "Math"))
            .unwrap();
        assert_eq!(a.room_id, "Room1");
        assert_eq!(a.teacher_id, "Teacher1");
        assert!(s
            .assignment_for_slot(&TimeSlot::new("Friday 9AM", "Math"))
            .is_none());
    }

    #[test]
    fn test_rooms_and_teachers_in_use() {
        let s = sample_schedule();
        assert_eq!(s.rooms_in_use(), vec!["Room1", "Room2"]);
        assert_eq!(s.teachers_in_use(), vec!["Teacher1", "Teacher2"]);
    }

    #[test]
    fn test_is_complete() {
        let s = sample_schedule();
        let slots = vec![
            TimeSlot::new("Monday 9AM", "Math"),
            TimeSlot::new("Monday 10AM", "Science"),
        ];
        assert!(s.is_complete(&slots));

        let mut more = slots.clone();
        more.push(TimeSlot::new("Monday 11AM", "Art"));
        assert!(!s.is_complete(&more));
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert!(s.is_complete(&[]));
    }

    #[test]
    fn test_schedule_serde_round_trip() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}

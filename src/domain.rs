//! Domain construction.
//!
//! Enumerates, for every time slot, the candidate (room, teacher,
//! student-group) triples that satisfy the per-slot constraints:
//! the teacher is available at the slot's time and the room seats
//! everyone enrolled in the slot's subject. Cross-slot constraints are
//! not checked here; that is the job of propagation and search.
//!
//! Enumeration order is fixed by input order (slots, then rooms, then
//! availability declarations), so identical inputs always produce an
//! identical table. Search consumes candidates in this order.

use std::collections::HashMap;

use log::{debug, trace};

use crate::models::{CandidateAssignment, Room, StudentSubject, TeacherAvailability, TimeSlot};

/// An owned, indexable table mapping each slot to its remaining
/// candidates.
///
/// Slot order is insertion order. Per-slot candidate order is
/// insertion order as well; propagation only ever replaces a slot's
/// list with a filtered copy, never reorders it.
#[derive(Debug, Clone, Default)]
pub struct DomainTable {
    slots: Vec<TimeSlot>,
    candidates: HashMap<TimeSlot, Vec<CandidateAssignment>>,
}

impl DomainTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a slot with its candidate list.
    ///
    /// Re-inserting an existing slot replaces its candidates and keeps
    /// its original position.
    pub fn insert(&mut self, slot: TimeSlot, candidates: Vec<CandidateAssignment>) {
        if !self.candidates.contains_key(&slot) {
            self.slots.push(slot.clone());
        }
        self.candidates.insert(slot, candidates);
    }

    /// Slots in insertion order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Remaining candidates for a slot (empty for unknown slots).
    pub fn candidates(&self, slot: &TimeSlot) -> &[CandidateAssignment] {
        self.candidates.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replaces a slot's candidate list with a filtered copy.
    ///
    /// No-op for slots not present in the table.
    pub fn replace_candidates(&mut self, slot: &TimeSlot, candidates: Vec<CandidateAssignment>) {
        if let Some(entry) = self.candidates.get_mut(slot) {
            *entry = candidates;
        }
    }

    /// Number of slots in the table.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether the table holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total candidate count across all slots.
    pub fn total_candidates(&self) -> usize {
        self.candidates.values().map(Vec::len).sum()
    }
}

/// Teachers available at a given time label, in declaration order.
pub fn available_teachers<'a>(
    time: &str,
    teacher_availability: &'a [TeacherAvailability],
) -> Vec<&'a str> {
    teacher_availability
        .iter()
        .filter(|a| a.time == time)
        .map(|a| a.teacher.as_str())
        .collect()
}

/// Students enrolled in a subject, in enrollment order.
pub fn students_for_subject(subject: &str, student_subjects: &[StudentSubject]) -> Vec<String> {
    student_subjects
        .iter()
        .filter(|e| e.subject == subject)
        .map(|e| e.student.clone())
        .collect()
}

/// Builds the initial domain table from the raw input collections.
///
/// For each slot, the student group is everyone enrolled in the slot's
/// subject; one candidate is emitted per (room, available teacher)
/// combination where the room seats the whole group. A subject with no
/// enrollment yields an empty student group, which any room seats.
pub fn build_domains(
    rooms: &[Room],
    subjects: &[String],
    time_slots: &[TimeSlot],
    teacher_availability: &[TeacherAvailability],
    student_subjects: &[StudentSubject],
) -> DomainTable {
    debug!(
        "building domains: {} slots, {} subjects, {} rooms, {} availability entries",
        time_slots.len(),
        subjects.len(),
        rooms.len(),
        teacher_availability.len()
    );

    let mut table = DomainTable::new();
    for slot in time_slots {
        let students = students_for_subject(&slot.subject, student_subjects);
        let mut candidates = Vec::new();
        for room in rooms {
            if !room.fits(students.len()) {
                continue;
            }
            for teacher in available_teachers(&slot.time, teacher_availability) {
                candidates.push(CandidateAssignment::new(
                    room.id.clone(),
                    teacher,
                    students.clone(),
                ));
            }
        }
        trace!("slot {slot}: {} candidate(s)", candidates.len());
        table.insert(slot.clone(), candidates);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> (
        Vec<Room>,
        Vec<String>,
        Vec<TimeSlot>,
        Vec<TeacherAvailability>,
        Vec<StudentSubject>,
    ) {
        let rooms = vec![Room::new("Room1", 30), Room::new("Room2", 20)];
        let subjects = vec!["Math".to_string(), "Science".to_string()];
        let time_slots = vec![
            TimeSlot::new("Monday 9AM", "Math"),
            TimeSlot::new("Monday 10AM", "Science"),
        ];
        let teacher_availability = vec![
            TeacherAvailability::new("Teacher1", "Monday 9AM"),
            TeacherAvailability::new("Teacher2", "Monday 10AM"),
        ];
        let student_subjects = vec![
            StudentSubject::new("Student1", "Math"),
            StudentSubject::new("Student2", "Science"),
        ];
        (rooms, subjects, time_slots, teacher_availability, student_subjects)
    }

    #[test]
    fn test_build_domains_covers_every_slot() {
        let (rooms, subjects, slots, availability, enrollment) = sample_inputs();
        let table = build_domains(&rooms, &subjects, &slots, &availability, &enrollment);

        assert_eq!(table.slot_count(), 2);
        assert_eq!(table.slots(), slots.as_slice());
        for slot in &slots {
            assert!(!table.candidates(slot).is_empty());
        }
    }

    #[test]
    fn test_candidate_enumeration_order() {
        let (rooms, subjects, slots, availability, enrollment) = sample_inputs();
        let table = build_domains(&rooms, &subjects, &slots, &availability, &enrollment);

        // Rooms outer, teachers inner, both in input order.
        let math = table.candidates(&slots[0]);
        assert_eq!(
            math,
            &[
                CandidateAssignment::new("Room1", "Teacher1", vec!["Student1".into()]),
                CandidateAssignment::new("Room2", "Teacher1", vec!["Student1".into()]),
            ]
        );
    }

    #[test]
    fn test_zero_capacity_room_excluded() {
        let (mut rooms, subjects, slots, availability, enrollment) = sample_inputs();
        rooms.push(Room::new("Closet", 0));
        let table = build_domains(&rooms, &subjects, &slots, &availability, &enrollment);

        for slot in &slots {
            assert!(table
                .candidates(slot)
                .iter()
                .all(|c| c.room_id != "Closet"));
        }
    }

    #[test]
    fn test_unenrolled_subject_yields_empty_group() {
        let (rooms, mut subjects, mut slots, mut availability, enrollment) = sample_inputs();
        subjects.push("Art".to_string());
        slots.push(TimeSlot::new("Monday 11AM", "Art"));
        availability.push(TeacherAvailability::new("Teacher1", "Monday 11AM"));
        let table = build_domains(&rooms, &subjects, &slots, &availability, &enrollment);

        let art = table.candidates(&slots[2]);
        assert!(!art.is_empty());
        assert!(art.iter().all(|c| c.students.is_empty()));
    }

    #[test]
    fn test_slot_without_teacher_gets_empty_domain() {
        let (rooms, subjects, slots, _, enrollment) = sample_inputs();
        let availability = vec![TeacherAvailability::new("Teacher1", "Monday 9AM")];
        let table = build_domains(&rooms, &subjects, &slots, &availability, &enrollment);

        assert!(!table.candidates(&slots[0]).is_empty());
        assert!(table.candidates(&slots[1]).is_empty());
    }

    #[test]
    fn test_available_teachers() {
        let availability = vec![
            TeacherAvailability::new("Teacher1", "Monday 9AM"),
            TeacherAvailability::new("Teacher2", "Monday 10AM"),
            TeacherAvailability::new("Teacher3", "Monday 9AM"),
        ];
        assert_eq!(
            available_teachers("Monday 9AM", &availability),
            vec!["Teacher1", "Teacher3"]
        );
        assert!(available_teachers("Friday 9AM", &availability).is_empty());
    }

    #[test]
    fn test_students_for_subject() {
        let enrollment = vec![
            StudentSubject::new("Student1", "Math"),
            StudentSubject::new("Student2", "Science"),
            StudentSubject::new("Student3", "Math"),
        ];
        assert_eq!(
            students_for_subject("Math", &enrollment),
            vec!["Student1".to_string(), "Student3".to_string()]
        );
        assert!(students_for_subject("History", &enrollment).is_empty());
    }

    #[test]
    fn test_replace_candidates_keeps_slot_order() {
        let (rooms, subjects, slots, availability, enrollment) = sample_inputs();
        let mut table = build_domains(&rooms, &subjects, &slots, &availability, &enrollment);

        let kept = vec![table.candidates(&slots[0])[1].clone()];
        table.replace_candidates(&slots[0], kept);

        assert_eq!(table.slots(), slots.as_slice());
        assert_eq!(table.candidates(&slots[0]).len(), 1);
        assert_eq!(table.candidates(&slots[0])[0].room_id, "Room2");
    }
}

//! Validation for timetabling inputs and schedules.
//!
//! Two layers:
//! - `validate_input` checks structural integrity of the raw input
//!   collections (duplicate IDs, duplicate pairs, unknown subjects)
//!   and collects every problem it finds.
//! - The schedule predicates (`validate` and its parts) audit a
//!   possibly partial `Schedule`. The search runs `validate` over the
//!   whole accumulated schedule at every assignment step, and callers
//!   can run it standalone on a schedule they built elsewhere.

use std::collections::{HashMap, HashSet};

use crate::models::{Room, Schedule, StudentSubject, TeacherAvailability, TimeSlot};

/// Input validation result.
pub type InputValidationResult = Result<(), Vec<InputError>>;

/// An input integrity error.
#[derive(Debug, Clone, PartialEq)]
pub struct InputError {
    /// Error category.
    pub kind: InputErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of input integrity errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputErrorKind {
    /// Two rooms share the same ID.
    DuplicateRoomId,
    /// The same (time, subject) slot appears twice.
    DuplicateTimeSlot,
    /// The same (teacher, time) availability pair appears twice.
    DuplicateAvailability,
    /// The same (student, subject) enrollment pair appears twice.
    DuplicateEnrollment,
    /// A slot references a subject missing from the subject list.
    UnknownSubject,
}

impl InputError {
    fn new(kind: InputErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the raw input collections.
///
/// Checks:
/// 1. No duplicate room IDs
/// 2. No duplicate time slots
/// 3. No duplicate (teacher, time) availability pairs
/// 4. No duplicate (student, subject) enrollment pairs
/// 5. Every slot's subject appears in the subject list
///
/// The engine itself never requires this pass; duplicate pairs merely
/// inflate candidate enumeration in surprising ways, so callers are
/// encouraged to run it on untrusted input.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    rooms: &[Room],
    subjects: &[String],
    time_slots: &[TimeSlot],
    teacher_availability: &[TeacherAvailability],
    student_subjects: &[StudentSubject],
) -> InputValidationResult {
    let mut errors = Vec::new();

    let mut room_ids = HashSet::new();
    for room in rooms {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(InputError::new(
                InputErrorKind::DuplicateRoomId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }
    }

    let subject_set: HashSet<&str> = subjects.iter().map(String::as_str).collect();

    let mut seen_slots = HashSet::new();
    for slot in time_slots {
        if !seen_slots.insert((slot.time.as_str(), slot.subject.as_str())) {
            errors.push(InputError::new(
                InputErrorKind::DuplicateTimeSlot,
                format!("Duplicate time slot: {slot}"),
            ));
        }
        if !subject_set.contains(slot.subject.as_str()) {
            errors.push(InputError::new(
                InputErrorKind::UnknownSubject,
                format!("Slot '{slot}' references unknown subject '{}'", slot.subject),
            ));
        }
    }

    let mut seen_availability = HashSet::new();
    for entry in teacher_availability {
        if !seen_availability.insert((entry.teacher.as_str(), entry.time.as_str())) {
            errors.push(InputError::new(
                InputErrorKind::DuplicateAvailability,
                format!(
                    "Duplicate availability: teacher '{}' at '{}'",
                    entry.teacher, entry.time
                ),
            ));
        }
    }

    let mut seen_enrollment = HashSet::new();
    for entry in student_subjects {
        if !seen_enrollment.insert((entry.student.as_str(), entry.subject.as_str())) {
            errors.push(InputError::new(
                InputErrorKind::DuplicateEnrollment,
                format!(
                    "Duplicate enrollment: student '{}' in '{}'",
                    entry.student, entry.subject
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether every scheduled slot's room seats its student group.
///
/// Capacity is re-derived by looking the room up in the room list;
/// an assignment naming an unknown room is invalid.
pub fn validate_room_capacity(schedule: &Schedule, rooms: &[Room]) -> bool {
    schedule.assignments.iter().all(|a| {
        rooms
            .iter()
            .find(|r| r.id == a.room_id)
            .is_some_and(|r| r.fits(a.students.len()))
    })
}

/// Whether every scheduled slot's teacher is available at its time.
pub fn validate_teacher_availability(
    schedule: &Schedule,
    teacher_availability: &[TeacherAvailability],
) -> bool {
    schedule.assignments.iter().all(|a| {
        teacher_availability
            .iter()
            .any(|entry| entry.teacher == a.teacher_id && entry.time == a.slot.time)
    })
}

/// Whether no student is recorded twice for the same slot.
///
/// Accumulates per-student slot lists across the whole schedule. A
/// schedule built by the search holds one assignment per slot and can
/// never trip this; a hand-built schedule with duplicate entries for a
/// slot can.
pub fn validate_student_schedule(schedule: &Schedule) -> bool {
    let mut student_slots: HashMap<&str, Vec<&TimeSlot>> = HashMap::new();
    for a in &schedule.assignments {
        for student in &a.students {
            let slots = student_slots.entry(student.as_str()).or_default();
            if slots.contains(&&a.slot) {
                return false;
            }
            slots.push(&a.slot);
        }
    }
    true
}

/// Whether no teacher and no room is used by two scheduled slots.
///
/// This is the cross-slot exclusivity rule the pairwise compatibility
/// predicate prunes by; checking it here keeps finished schedules
/// conflict-free even where propagation alone only guarantees pairwise
/// support. Deliberately global: time labels are not consulted.
pub fn validate_no_double_booking(schedule: &Schedule) -> bool {
    let a = &schedule.assignments;
    for i in 0..a.len() {
        for j in (i + 1)..a.len() {
            if a[i].teacher_id == a[j].teacher_id || a[i].room_id == a[j].room_id {
                return false;
            }
        }
    }
    true
}

/// Whether a (possibly partial) schedule satisfies every constraint.
///
/// The conjunction of room capacity, teacher availability, student
/// schedule, and double-booking checks. Pure predicate; usable
/// standalone to audit an externally constructed schedule.
pub fn validate(
    schedule: &Schedule,
    rooms: &[Room],
    teacher_availability: &[TeacherAvailability],
) -> bool {
    validate_room_capacity(schedule, rooms)
        && validate_teacher_availability(schedule, teacher_availability)
        && validate_student_schedule(schedule)
        && validate_no_double_booking(schedule)
}

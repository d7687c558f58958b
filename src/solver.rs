//! Backtracking search over pruned domains.
//!
//! Chronological depth-first search: slots are assigned in the order
//! the caller supplied them, candidates are tried in domain order, and
//! every failing path undoes its tentative assignment before returning.
//! No ordering heuristics, no backjumping, no learning; the AC-3 pass
//! that runs first is the only search-space reduction. Exponential
//! worst case is expected and accepted.
//!
//! # Reference
//!
//! Russell & Norvig (2021), "Artificial Intelligence: A Modern
//! Approach", Ch. 6.3

use std::error::Error;
use std::fmt;

use log::{debug, info, trace};

use crate::domain::DomainTable;
use crate::models::{Room, Schedule, SlotAssignment, TeacherAvailability, TimeSlot};
use crate::propagation::propagate;
use crate::validation::validate;

/// Why no timetable could be produced.
///
/// Both kinds are terminal for the attempt; no partial schedule is
/// ever returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Propagation emptied some slot's domain before search began:
    /// the constraint graph is provably unsatisfiable.
    PropagationFailure,
    /// Propagation succeeded but the search exhausted every candidate
    /// combination without finding a valid schedule.
    SearchExhausted,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::PropagationFailure => {
                write!(
                    f,
                    "no valid timetable found: constraint propagation emptied a slot's domain"
                )
            }
            SolveError::SearchExhausted => {
                write!(
                    f,
                    "no valid timetable found: backtracking search exhausted every candidate"
                )
            }
        }
    }
}

impl Error for SolveError {}

/// Generates a timetable from a freshly built domain table.
///
/// Runs AC-3 first; if propagation wipes out a domain the search is
/// never attempted. Otherwise slots are assigned depth-first, with the
/// full accumulated schedule re-validated at every step.
///
/// # Example
///
/// ```
/// use u_timetable::domain::build_domains;
/// use u_timetable::models::{Room, StudentSubject, TeacherAvailability, TimeSlot};
/// use u_timetable::solver::generate_schedule;
///
/// let rooms = vec![Room::new("Room1", 30), Room::new("Room2", 20)];
/// let subjects = vec!["Math".to_string(), "Science".to_string()];
/// let slots = vec![
///     TimeSlot::new("Monday 9AM", "Math"),
///     TimeSlot::new("Monday 10AM", "Science"),
/// ];
/// let availability = vec![
///     TeacherAvailability::new("Teacher1", "Monday 9AM"),
///     TeacherAvailability::new("Teacher2", "Monday 10AM"),
/// ];
/// let enrollment = vec![
///     StudentSubject::new("Student1", "Math"),
///     StudentSubject::new("Student2", "Science"),
/// ];
///
/// let domains = build_domains(&rooms, &subjects, &slots, &availability, &enrollment);
/// let schedule = generate_schedule(domains, &slots, &rooms, &availability).unwrap();
/// assert_eq!(schedule.len(), 2);
/// ```
pub fn generate_schedule(
    mut domains: DomainTable,
    time_slots: &[TimeSlot],
    rooms: &[Room],
    teacher_availability: &[TeacherAvailability],
) -> Result<Schedule, SolveError> {
    info!(
        "generating timetable: {} slots, {} candidates",
        time_slots.len(),
        domains.total_candidates()
    );

    if !propagate(&mut domains) {
        return Err(SolveError::PropagationFailure);
    }
    debug!(
        "search starting with {} candidates after propagation",
        domains.total_candidates()
    );

    let mut schedule = Schedule::new();
    if assign_from(
        &mut schedule,
        &domains,
        time_slots,
        rooms,
        teacher_availability,
        0,
    ) {
        info!("timetable found: {} assignments", schedule.len());
        Ok(schedule)
    } else {
        Err(SolveError::SearchExhausted)
    }
}

/// Assigns slots from `index` onward, backtracking on failure.
///
/// Pushes a tentative assignment before recursing and pops it on every
/// failing path, so the schedule always holds exactly the accepted
/// prefix when a frame returns.
fn assign_from(
    schedule: &mut Schedule,
    domains: &DomainTable,
    time_slots: &[TimeSlot],
    rooms: &[Room],
    teacher_availability: &[TeacherAvailability],
    index: usize,
) -> bool {
    if index >= time_slots.len() {
        return true;
    }

    let slot = &time_slots[index];
    for candidate in domains.candidates(slot) {
        schedule.push(SlotAssignment::new(slot.clone(), candidate.clone()));
        if validate(schedule, rooms, teacher_availability)
            && assign_from(
                schedule,
                domains,
                time_slots,
                rooms,
                teacher_availability,
                index + 1,
            )
        {
            return true;
        }
        trace!("backtracking off {slot} at depth {index}");
        schedule.pop();
    }

    false
}

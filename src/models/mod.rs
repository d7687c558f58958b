//! Timetabling domain models.
//!
//! Plain value types for the constraint-satisfaction formulation:
//! time slots are the variables, candidate assignments are the values,
//! and a schedule is a (possibly partial) mapping between them. Rooms,
//! teacher availability, and student enrollment are the raw inputs the
//! candidates are enumerated from.

mod candidate;
mod room;
mod roster;
mod schedule;
mod slot;

pub use candidate::CandidateAssignment;
pub use room::Room;
pub use roster::{StudentSubject, TeacherAvailability};
pub use schedule::{Schedule, SlotAssignment};
pub use slot::TimeSlot;

//! Timetabling constraint-satisfaction engine.
//!
//! Assigns a fixed set of subject/time slots to compatible
//! (room, teacher, student-group) triples so that room capacity,
//! teacher availability, and cross-slot exclusivity all hold at once.
//! Slots are the variables of the CSP, candidate triples are the
//! values. The engine finds *a* valid assignment, not an optimal one.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Room`, `TimeSlot`,
//!   `TeacherAvailability`, `StudentSubject`, `CandidateAssignment`,
//!   `Schedule`
//! - **`domain`**: Candidate enumeration per slot (`DomainTable`,
//!   `build_domains`)
//! - **`propagation`**: AC-3 arc-consistency pruning over the complete
//!   slot graph
//! - **`validation`**: Input integrity checks and schedule predicates
//! - **`solver`**: Chronological backtracking search
//!
//! # Pipeline
//!
//! `build_domains` enumerates feasible candidates per slot,
//! `propagate` prunes them in place, and `generate_schedule` runs the
//! backtracking search over whatever survives, re-validating the
//! accumulated schedule at every step.
//!
//! # References
//!
//! - Mackworth (1977), "Consistency in Networks of Relations"
//! - Russell & Norvig (2021), "Artificial Intelligence: A Modern
//!   Approach", Ch. 6
//! - Dechter (2003), "Constraint Processing"

pub mod domain;
pub mod models;
pub mod propagation;
pub mod solver;
pub mod validation;

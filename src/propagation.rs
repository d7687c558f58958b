//! Arc-consistency propagation (AC-3).
//!
//! Prunes each slot's domain down to candidates that still have at
//! least one compatible partner in every other slot's domain. The
//! constraint graph is complete: every ordered pair of distinct slots
//! is an arc, because any two slots may clash on a shared teacher or
//! room.
//!
//! Arc consistency is a local property. Surviving candidates are
//! pairwise supportable, but a joint assignment across three or more
//! slots may still not exist; the backtracking search settles that.
//!
//! # Algorithm
//!
//! 1. Seed a worklist with every ordered pair of distinct slots.
//! 2. Pop an arc (s1, s2) and revise s1 against s2.
//! 3. If the revision removed candidates and s1's domain is now empty,
//!    the problem is unsatisfiable: stop.
//! 4. Otherwise re-enqueue (s3, s1) for every other slot s3, since a
//!    candidate of s3 may have lost its last support in s1.
//!
//! # Reference
//!
//! - Mackworth (1977), "Consistency in Networks of Relations"
//! - Russell & Norvig (2021), "Artificial Intelligence: A Modern
//!   Approach", Ch. 6.2

use std::collections::VecDeque;

use log::{debug, trace};

use crate::domain::DomainTable;
use crate::models::TimeSlot;

/// Revises `slot1`'s domain against `slot2`'s.
///
/// Removes every candidate of `slot1` with no compatible candidate
/// left in `slot2`'s domain. The surviving candidates are collected
/// into a fresh list and swapped in, preserving their relative order.
/// Returns whether anything was removed.
pub fn revise(table: &mut DomainTable, slot1: &TimeSlot, slot2: &TimeSlot) -> bool {
    let before = table.candidates(slot1).len();
    let kept: Vec<_> = table
        .candidates(slot1)
        .iter()
        .filter(|v1| {
            table
                .candidates(slot2)
                .iter()
                .any(|v2| v1.is_compatible_with(v2))
        })
        .cloned()
        .collect();

    if kept.len() == before {
        return false;
    }
    trace!(
        "revise: pruned {} candidate(s) from {}",
        before - kept.len(),
        slot1
    );
    table.replace_candidates(slot1, kept);
    true
}

/// Runs AC-3 over the table, pruning in place.
///
/// Returns `false` as soon as some slot's domain becomes empty, which
/// proves no schedule can be built from the table. Returns `true` once
/// the worklist drains; candidates are only ever removed, never added.
pub fn propagate(table: &mut DomainTable) -> bool {
    let slots: Vec<TimeSlot> = table.slots().to_vec();

    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    for i in 0..slots.len() {
        for j in 0..slots.len() {
            if i != j {
                queue.push_back((i, j));
            }
        }
    }
    debug!(
        "propagating: {} slots, {} initial arcs, {} candidates",
        slots.len(),
        queue.len(),
        table.total_candidates()
    );

    while let Some((i, j)) = queue.pop_front() {
        if revise(table, &slots[i], &slots[j]) {
            if table.candidates(&slots[i]).is_empty() {
                debug!("domain wiped out for {}", slots[i]);
                return false;
            }
            // Arcs connect distinct slots, so the revised slot itself
            // is not a neighbor of itself.
            for k in 0..slots.len() {
                if k != i && k != j {
                    queue.push_back((k, i));
                }
            }
        }
    }

    debug!(
        "propagation done: {} candidates remain",
        table.total_candidates()
    );
    true
}

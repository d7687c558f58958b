//! Room model.
//!
//! Rooms are the physical spaces classes are held in. Each room has a
//! seating capacity that bounds how many enrolled students a class
//! assigned to it may have.

use serde::{Deserialize, Serialize};

/// A room with a fixed seating capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Number of seats. A capacity of zero is legal and simply means
    /// the room can only host classes with no enrolled students.
    pub capacity: usize,
}

impl Room {
    /// Creates a new room.
    pub fn new(id: impl Into<String>, capacity: usize) -> Self {
        Self {
            id: id.into(),
            capacity,
        }
    }

    /// Whether a class of `count` students fits in this room.
    pub fn fits(&self, count: usize) -> bool {
        count <= self.capacity
    }
}

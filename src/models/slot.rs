//! Time slot model.
//!
//! A time slot pairs an opaque time label with a subject label and is
//! the unit being scheduled. The engine treats time labels as atoms;
//! it never parses or orders them. The order of the slot list supplied
//! by the caller fixes the order in which slots are assigned.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (time, subject) pair to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Opaque time label (e.g., "Monday 9AM").
    pub time: String,
    /// Subject taught during this slot (e.g., "Math").
    pub subject: String,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(time: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            subject: subject.into(),
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time, self.subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_slot_new() {
        let s = TimeSlot::new("Monday 9AM", "Math");
        assert_eq!(s.time, "Monday 9AM");
        assert_eq!(s.subject, "Math");
    }

    #[test]
    fn test_slot_as_map_key() {
        let mut map = HashMap::new();
        map.insert(TimeSlot::new("Monday 9AM", "Math"), 1);
        assert_eq!(map.get(&TimeSlot::new("Monday 9AM", "Math")), Some(&1));
        assert_eq!(map.get(&TimeSlot::new("Monday 9AM", "Science")), None);
    }

    #[test]
    fn test_slot_display() {
        let s = TimeSlot::new("Monday 10AM", "Science");
        assert_eq!(s.to_string(), "Monday 10AM Science");
    }
}

//! Time-slot labels.
//!
//! A slot is compared by its exact label, never by clock interval: a
//! two-hour lab label never equals a one-hour lecture label even where
//! the hours overlap.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hourly lecture slots. These are also the timetable grid rows.
pub const LECTURE_SLOTS: [&str; 9] = [
    "8:00 - 9:00",
    "9:00 - 10:00",
    "10:00 - 11:00",
    "11:00 - 12:00",
    "12:00 - 1:00",
    "1:00 - 2:00",
    "2:00 - 3:00",
    "3:00 - 4:00",
    "4:00 - 5:00",
];

/// Two-hour lab blocks.
pub const LAB_SLOTS: [&str; 4] = ["8:00 - 10:00", "10:00 - 12:00", "1:00 - 3:00", "3:00 - 5:00"];

/// The two lunch-hour lecture slots. At least one must stay free on an
/// instructor's roster.
pub const LUNCH_SLOTS: [&str; 2] = ["12:00 - 1:00", "1:00 - 2:00"];

/// Lecture slot assigned when a record does not name one.
pub const DEFAULT_LECTURE_SLOT: &str = "10:00 - 11:00";

/// Lab slot assigned when a lab record does not name one. Not a member of
/// [`LAB_SLOTS`]; kept for compatibility with existing course data.
pub const DEFAULT_LAB_SLOT: &str = "2:00 - 4:00";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot(String);

impl TimeSlot {
    pub fn new(label: impl Into<String>) -> Self {
        TimeSlot(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    pub fn is_lecture_slot(&self) -> bool {
        LECTURE_SLOTS.contains(&self.0.as_str())
    }

    pub fn is_lab_slot(&self) -> bool {
        LAB_SLOTS.contains(&self.0.as_str())
    }

    pub fn is_lunch_slot(&self) -> bool {
        LUNCH_SLOTS.contains(&self.0.as_str())
    }

    /// For a lunch slot, the other lunch slot.
    pub fn other_lunch_slot(&self) -> Option<TimeSlot> {
        match self.0.as_str() {
            "12:00 - 1:00" => Some(TimeSlot::new("1:00 - 2:00")),
            "1:00 - 2:00" => Some(TimeSlot::new("12:00 - 1:00")),
            _ => None,
        }
    }

    /// Grid row for this label, if it is one of the hourly lecture slots.
    pub fn row_index(&self) -> Option<usize> {
        LECTURE_SLOTS.iter().position(|slot| *slot == self.0)
    }
}

impl From<&str> for TimeSlot {
    fn from(label: &str) -> Self {
        TimeSlot::new(label)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Scheduling core: day patterns, time slots, conflict detection and the
//! weekly grid.
//!
//! Course records are normalized through [`DayPattern`], validated with
//! [`find_first_conflict`] before they are added to a roster, and rendered
//! with [`project`].

mod conflict;
mod days;
mod grid;
mod slot;

pub use conflict::{check_lunch_constraint, conflicts, ensure_no_conflict, find_first_conflict};
pub use days::{format_token, full_name, short_name, DayPattern, WEEKDAYS};
pub use grid::{project, Timetable, TimetableRow};
pub use slot::{
    TimeSlot, DEFAULT_LAB_SLOT, DEFAULT_LECTURE_SLOT, LAB_SLOTS, LECTURE_SLOTS, LUNCH_SLOTS,
};

//! Course scheduling for an academic timetable portal.
//!
//! The core is [`schedule`]: day-pattern decoding, pairwise conflict
//! detection and projection onto the weekly grid. [`portal`] drives the
//! admin, instructor and student workflows over in-memory [`roster`]s.

pub mod config;
pub mod course;
pub mod error;
pub mod import;
pub mod portal;
pub mod roster;
pub mod schedule;

pub use config::PortalConfig;
pub use course::{Course, LabSession};
pub use error::TimetableError;
pub use portal::{CourseForm, DashboardStats, LecturePattern, Portal, Role, Session};
pub use roster::{CourseRepository, Roster, RosterEvent, RosterKind};
pub use schedule::{conflicts, find_first_conflict, project, DayPattern, TimeSlot, Timetable};

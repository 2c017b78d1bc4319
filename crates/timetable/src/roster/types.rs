/// Roster identities and change events
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which actor's list a roster holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RosterKind {
    /// Every course visible to students
    Catalog,
    /// Courses the instructor teaches
    Teaching,
    /// Courses the student is enrolled in
    Enrolled,
    /// Courses awaiting admin approval
    Pending,
}

impl fmt::Display for RosterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RosterKind::Catalog => "catalog",
            RosterKind::Teaching => "teaching",
            RosterKind::Enrolled => "enrolled",
            RosterKind::Pending => "pending",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterEventKind {
    Added,
    Removed,
}

/// A committed roster mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEvent {
    pub kind: RosterEventKind,
    pub roster: RosterKind,
    pub course_code: String,
    pub at: DateTime<Utc>,
}

impl RosterEvent {
    pub fn new(kind: RosterEventKind, roster: RosterKind, course_code: &str) -> Self {
        Self {
            kind,
            roster,
            course_code: course_code.to_string(),
            at: Utc::now(),
        }
    }
}

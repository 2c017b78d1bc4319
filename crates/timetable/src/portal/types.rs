/// Types for portal sessions and workflows
use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TimetableError;
use crate::schedule::DayPattern;

/// The three portal roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Instructor,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Instructor => "Instructor",
            Role::Student => "Student",
        }
    }
}

impl FromStr for Role {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "instructor" => Ok(Role::Instructor),
            "student" => Ok(Role::Student),
            _ => Err(TimetableError::validation(format!("unknown role {s:?}"))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logged-in user. Credentials are never checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    pub username: String,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn dashboard_title(&self) -> String {
        format!("{} Dashboard", self.role)
    }
}

/// Lecture day choices offered on the course creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LecturePattern {
    /// Monday-Wednesday-Friday
    Mwf,
    /// Tuesday-Thursday
    TueThu,
}

impl LecturePattern {
    pub fn days(&self) -> DayPattern {
        match self {
            LecturePattern::Mwf => DayPattern::decode("MWF"),
            LecturePattern::TueThu => DayPattern::decode("TTh"),
        }
    }
}

/// Input of the instructor's "Add Course" form.
///
/// An empty `lab_section` means the course has no lab; lab days and lab
/// time are then ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseForm {
    pub course_code: String,
    pub course_name: String,
    pub instructor_name: String,
    pub lecture_section: String,
    pub lecture_pattern: LecturePattern,
    pub lecture_time: String,
    #[serde(default)]
    pub lab_section: String,
    #[serde(default)]
    pub lab_days: Vec<Weekday>,
    #[serde(default)]
    pub lab_time: String,
}

/// Admin verdict on a pending course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Approved,
    Declined,
}

/// Record of an approve/decline action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub course_code: String,
    pub course_name: String,
    pub verdict: Verdict,
    pub decided_at: DateTime<Utc>,
}

/// Figures shown on a role's dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub courses: usize,
    pub lectures_per_week: u32,
    pub labs_per_week: usize,
}

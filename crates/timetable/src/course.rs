/// Course records and their weekly schedule
use serde::{Deserialize, Serialize};

use crate::schedule::{DayPattern, TimeSlot, DEFAULT_LAB_SLOT, DEFAULT_LECTURE_SLOT};

/// Instructor recorded when a course record does not name one.
pub const DEFAULT_INSTRUCTOR: &str = "Dr. Instructor";

/// Lab meeting attached to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabSession {
    pub section: String,
    pub days: DayPattern,
    pub time: TimeSlot,
}

impl LabSession {
    pub fn new(section: impl Into<String>, days: DayPattern, time: impl Into<TimeSlot>) -> Self {
        Self {
            section: section.into(),
            days,
            time: time.into(),
        }
    }

    /// Lab using the legacy defaults (Tuesday, `2:00 - 4:00`).
    pub fn with_defaults(section: impl Into<String>) -> Self {
        Self::new(section, DayPattern::decode("T"), DEFAULT_LAB_SLOT)
    }
}

/// A course offering. Read-only once created.
///
/// Lab data only exists when the course has a lab, so a lab-less course
/// can never carry lab days or a lab slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course_code: String,
    pub course_name: String,
    pub lecture_section: String,
    pub lecture_count: u32,
    pub lecture_days: DayPattern,
    pub lecture_time: TimeSlot,
    #[serde(default = "default_instructor")]
    pub instructor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab: Option<LabSession>,
}

fn default_instructor() -> String {
    DEFAULT_INSTRUCTOR.to_string()
}

impl Course {
    /// Creates a lecture-only course on the default schedule
    /// (`MWF`, `10:00 - 11:00`).
    pub fn new(
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        lecture_section: impl Into<String>,
        lecture_count: u32,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            course_name: course_name.into(),
            lecture_section: lecture_section.into(),
            lecture_count,
            lecture_days: DayPattern::decode("MWF"),
            lecture_time: TimeSlot::new(DEFAULT_LECTURE_SLOT),
            instructor_name: default_instructor(),
            lab: None,
        }
    }

    /// Sets the lecture meeting.
    pub fn lectures(mut self, days: DayPattern, time: impl Into<TimeSlot>) -> Self {
        self.lecture_days = days;
        self.lecture_time = time.into();
        self
    }

    pub fn taught_by(mut self, instructor: impl Into<String>) -> Self {
        self.instructor_name = instructor.into();
        self
    }

    pub fn with_lab(mut self, lab: LabSession) -> Self {
        self.lab = Some(lab);
        self
    }

    pub fn has_lab(&self) -> bool {
        self.lab.is_some()
    }

    /// Lab section label, empty for lecture-only courses.
    pub fn lab_section(&self) -> &str {
        self.lab.as_ref().map(|lab| lab.section.as_str()).unwrap_or("")
    }

    /// Human-readable lecture schedule, e.g. `"Mon/Wed/Fri 10:00 - 11:00"`.
    pub fn schedule_summary(&self) -> String {
        format!("{} {}", self.lecture_days.display_names(), self.lecture_time)
    }
}

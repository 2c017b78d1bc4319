//! Error types for the timetable portal.

use thiserror::Error;

/// Errors that can occur while building or editing a timetable.
///
/// Every error is local to a single user action. A rejected action leaves
/// all rosters unchanged, so nothing here is retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimetableError {
    /// A required field is empty or a selection is missing
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// The candidate collides with a course already on the roster
    #[error("Scheduling conflict with {code} - {name} ({schedule})")]
    ScheduleConflict {
        code: String,
        name: String,
        schedule: String,
    },

    /// Both lunch slots would be occupied on the instructor's roster
    #[error(
        "Cannot schedule {requested}: {code} already uses {occupied}, one lunch slot must stay free"
    )]
    LunchConstraint {
        requested: String,
        occupied: String,
        code: String,
    },

    /// The student already holds this course
    #[error("Already enrolled in {code}")]
    AlreadyEnrolled { code: String },

    /// A day-pattern token contained a character outside M/T/W/Th/F
    #[error("Malformed day pattern {token:?}: unexpected {offending:?}")]
    MalformedPattern { token: String, offending: char },

    /// The CSV source could not be read at all
    #[error("Import error: {message}")]
    Import { message: String },

    /// The configuration file could not be loaded
    #[error("Config error: {message}")]
    Config { message: String },
}

impl TimetableError {
    /// Shorthand for a [`TimetableError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        TimetableError::Validation {
            message: message.into(),
        }
    }

    /// Returns true if this error was raised by a schedule check
    /// (pairwise conflict or lunch constraint).
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            TimetableError::ScheduleConflict { .. } | TimetableError::LunchConstraint { .. }
        )
    }

    /// Returns true if this error came from form or input validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TimetableError::Validation { .. }
                | TimetableError::AlreadyEnrolled { .. }
                | TimetableError::MalformedPattern { .. }
        )
    }
}

impl From<csv::Error> for TimetableError {
    fn from(err: csv::Error) -> Self {
        TimetableError::Import {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for TimetableError {
    fn from(err: std::io::Error) -> Self {
        TimetableError::Import {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TimetableError {
    fn from(err: serde_json::Error) -> Self {
        TimetableError::Config {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_classification() {
        let conflict = TimetableError::ScheduleConflict {
            code: "CS201".to_string(),
            name: "Data Structures".to_string(),
            schedule: "Mon/Wed/Fri 10:00 - 11:00".to_string(),
        };
        assert!(conflict.is_conflict());
        assert!(!conflict.is_validation());

        let lunch = TimetableError::LunchConstraint {
            requested: "1:00 - 2:00".to_string(),
            occupied: "12:00 - 1:00".to_string(),
            code: "CS301".to_string(),
        };
        assert!(lunch.is_conflict());

        assert!(TimetableError::validation("Course ID cannot be empty").is_validation());
    }

    #[test]
    fn test_conflict_message_names_course() {
        let err = TimetableError::ScheduleConflict {
            code: "CS201".to_string(),
            name: "Data Structures".to_string(),
            schedule: "Mon/Wed/Fri 10:00 - 11:00".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Scheduling conflict with CS201 - Data Structures (Mon/Wed/Fri 10:00 - 11:00)"
        );
    }
}

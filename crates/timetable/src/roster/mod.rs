/// In-memory course rosters and their change events
mod types;

pub use types::{RosterEvent, RosterEventKind, RosterKind};

use crate::course::Course;

/// Storage for an ordered list of courses.
///
/// Mutations hand back a [`RosterEvent`] describing the change instead of
/// notifying registered listeners; callers react to the returned event.
pub trait CourseRepository {
    /// Appends a course to the end of the roster.
    fn add(&mut self, course: Course) -> RosterEvent;

    /// All courses, in insertion order.
    fn list(&self) -> &[Course];

    /// Checks if a course with the given code is on the roster
    fn exists(&self, course_code: &str) -> bool {
        self.list().iter().any(|c| c.course_code == course_code)
    }

    /// First course with the given code
    fn get(&self, course_code: &str) -> Option<&Course> {
        self.list().iter().find(|c| c.course_code == course_code)
    }
}

/// Ordered, in-memory roster scoped to one actor (or the global catalog).
#[derive(Debug, Clone)]
pub struct Roster {
    kind: RosterKind,
    courses: Vec<Course>,
}

impl Roster {
    pub fn new(kind: RosterKind) -> Self {
        Self {
            kind,
            courses: Vec::new(),
        }
    }

    /// Creates a roster pre-filled with seed courses.
    pub fn with_courses(kind: RosterKind, courses: Vec<Course>) -> Self {
        Self { kind, courses }
    }

    pub fn kind(&self) -> RosterKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Removes every course matching both code and name.
    ///
    /// Returns `None` when nothing matched, leaving the roster untouched.
    pub fn remove(&mut self, course_code: &str, course_name: &str) -> Option<RosterEvent> {
        let before = self.courses.len();
        self.courses
            .retain(|c| !(c.course_code == course_code && c.course_name == course_name));

        if self.courses.len() == before {
            None
        } else {
            Some(RosterEvent::new(
                RosterEventKind::Removed,
                self.kind,
                course_code,
            ))
        }
    }
}

impl CourseRepository for Roster {
    fn add(&mut self, course: Course) -> RosterEvent {
        let event = RosterEvent::new(RosterEventKind::Added, self.kind, &course.course_code);
        self.courses.push(course);
        event
    }

    fn list(&self) -> &[Course] {
        &self.courses
    }
}

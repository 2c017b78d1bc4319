//! Role workflows over the course rosters.
//!
//! Every mutating operation is a single synchronous transaction: all
//! checks run before any roster is touched, so a rejected action leaves
//! every roster as it was.

mod types;

pub use types::*;

use chrono::Utc;
use std::io::Read;
use tracing::{info, warn};

use crate::config::PortalConfig;
use crate::course::{Course, LabSession};
use crate::error::TimetableError;
use crate::import::{self, ImportSummary};
use crate::roster::{CourseRepository, Roster, RosterEvent, RosterKind};
use crate::schedule::{check_lunch_constraint, ensure_no_conflict, DayPattern, TimeSlot, Timetable};

/// Portal state for one interactive session: the global catalog plus the
/// instructor's, student's and admin's lists.
pub struct Portal {
    catalog: Roster,
    teaching: Roster,
    enrolled: Roster,
    pending: Roster,
}

impl Portal {
    /// Creates a portal with no courses.
    pub fn new() -> Self {
        Self::from_config(&PortalConfig::empty())
    }

    /// Creates a portal seeded from configuration. CSV imports listed in
    /// the config are not run here, see [`Portal::import_csv_file`].
    pub fn from_config(config: &PortalConfig) -> Self {
        Self {
            catalog: Roster::with_courses(RosterKind::Catalog, config.catalog.clone()),
            teaching: Roster::with_courses(RosterKind::Teaching, config.teaching.clone()),
            enrolled: Roster::with_courses(RosterKind::Enrolled, config.enrolled.clone()),
            pending: Roster::with_courses(RosterKind::Pending, config.pending.clone()),
        }
    }

    /// Logs a user in. Any credentials are accepted.
    pub fn login(&self, role: Role, username: &str, _password: &str) -> Session {
        info!(role = %role, username = %username, "User logged in");
        Session {
            role,
            username: username.to_string(),
            logged_in_at: Utc::now(),
        }
    }

    pub fn catalog(&self) -> &[Course] {
        self.catalog.list()
    }

    pub fn teaching(&self) -> &[Course] {
        self.teaching.list()
    }

    pub fn enrolled(&self) -> &[Course] {
        self.enrolled.list()
    }

    pub fn pending(&self) -> &[Course] {
        self.pending.list()
    }

    /// Enrolls the student in a catalog course.
    ///
    /// The code is looked up with [`CourseRepository::get`], so when an
    /// import has appended a duplicate code the earliest catalog entry is
    /// enrolled.
    ///
    /// # Returns
    /// * `Ok(RosterEvent)` - The course was appended to the enrolled list
    /// * `Err` - Unknown course, already enrolled, or a schedule conflict
    pub fn enroll(&mut self, course_code: &str) -> Result<RosterEvent, TimetableError> {
        let course = self
            .catalog
            .get(course_code)
            .cloned()
            .ok_or_else(|| {
                TimetableError::validation(format!("no course {course_code} in catalog"))
            })?;

        if self.enrolled.exists(course_code) {
            warn!(course = %course_code, "Rejected enrollment: already enrolled");
            return Err(TimetableError::AlreadyEnrolled {
                code: course_code.to_string(),
            });
        }

        if let Err(e) = ensure_no_conflict(&course, self.enrolled.list()) {
            warn!(course = %course_code, error = %e, "Rejected enrollment");
            return Err(e);
        }

        let event = self.enrolled.add(course);
        info!(course = %course_code, "Student enrolled");
        Ok(event)
    }

    /// Creates a course from the instructor's form.
    ///
    /// Checks run in order: form validation, the lunch-slot rule, then the
    /// pairwise conflict scan against the instructor's roster. On success
    /// the course is added to both the teaching list and the catalog.
    pub fn create_course(&mut self, form: &CourseForm) -> Result<Vec<RosterEvent>, TimetableError> {
        let course = match self.course_from_form(form) {
            Ok(course) => course,
            Err(e) => {
                warn!(course = %form.course_code, error = %e, "Rejected course creation");
                return Err(e);
            }
        };

        let checked = check_lunch_constraint(&course.lecture_time, self.teaching.list())
            .and_then(|_| ensure_no_conflict(&course, self.teaching.list()));
        if let Err(e) = checked {
            warn!(course = %course.course_code, error = %e, "Rejected course creation");
            return Err(e);
        }

        info!(
            course = %course.course_code,
            schedule = %course.schedule_summary(),
            has_lab = course.has_lab(),
            "Instructor created course"
        );
        let events = vec![self.teaching.add(course.clone()), self.catalog.add(course)];
        Ok(events)
    }

    /// Validates the form and builds the course it describes.
    fn course_from_form(&self, form: &CourseForm) -> Result<Course, TimetableError> {
        let code = form.course_code.trim();
        let name = form.course_name.trim();
        let instructor = form.instructor_name.trim();

        if code.is_empty() || name.is_empty() || instructor.is_empty() {
            return Err(TimetableError::validation(
                "Course ID, Course Name, and Instructor Name cannot be empty",
            ));
        }

        if self.catalog.exists(code) || self.teaching.exists(code) {
            return Err(TimetableError::validation(format!(
                "course {code} already exists"
            )));
        }

        let lecture_time = TimeSlot::new(form.lecture_time.as_str());
        if !lecture_time.is_lecture_slot() {
            return Err(TimetableError::validation(format!(
                "{lecture_time} is not a lecture slot"
            )));
        }

        let lecture_days = form.lecture_pattern.days();
        let mut course = Course::new(
            code,
            name,
            form.lecture_section.as_str(),
            lecture_days.len() as u32,
        )
        .lectures(lecture_days, lecture_time)
        .taught_by(instructor);

        let lab_section = form.lab_section.trim();
        if !lab_section.is_empty() {
            let lab_days: DayPattern = form.lab_days.iter().copied().collect();
            if lab_days.is_empty() {
                return Err(TimetableError::validation(
                    "Please select at least one day for lab",
                ));
            }

            let lab_time = TimeSlot::new(form.lab_time.as_str());
            if !lab_time.is_lab_slot() {
                return Err(TimetableError::validation(format!(
                    "{lab_time} is not a lab slot"
                )));
            }

            course = course.with_lab(LabSession::new(lab_section, lab_days, lab_time));
        }

        Ok(course)
    }

    /// Approves a pending course, removing it from the pending list.
    pub fn approve(
        &mut self,
        course_code: &str,
        course_name: &str,
    ) -> Result<Decision, TimetableError> {
        self.decide(course_code, course_name, Verdict::Approved)
    }

    /// Declines a pending course, removing it from the pending list.
    pub fn decline(
        &mut self,
        course_code: &str,
        course_name: &str,
    ) -> Result<Decision, TimetableError> {
        self.decide(course_code, course_name, Verdict::Declined)
    }

    fn decide(
        &mut self,
        course_code: &str,
        course_name: &str,
        verdict: Verdict,
    ) -> Result<Decision, TimetableError> {
        if self.pending.remove(course_code, course_name).is_none() {
            return Err(TimetableError::validation(format!(
                "{course_code} - {course_name} is not pending"
            )));
        }

        info!(course = %course_code, verdict = ?verdict, "Pending course decided");
        Ok(Decision {
            course_code: course_code.to_string(),
            course_name: course_name.to_string(),
            verdict,
            decided_at: Utc::now(),
        })
    }

    /// Imports CSV course data into the catalog.
    ///
    /// Malformed rows are skipped and listed in the summary. Codes already
    /// in the catalog are still appended, but only the first entry for a
    /// code can be enrolled.
    pub fn import_csv<R: Read>(&mut self, source: R) -> Result<ImportSummary, TimetableError> {
        let batch = import::read_courses(source)?;
        Ok(self.add_imported(batch))
    }

    /// Imports a CSV file into the catalog. See [`Portal::import_csv`].
    pub fn import_csv_file(
        &mut self,
        path: &std::path::Path,
    ) -> Result<ImportSummary, TimetableError> {
        let batch = import::read_courses_from_path(path)?;
        info!(path = %path.display(), "Importing courses");
        Ok(self.add_imported(batch))
    }

    fn add_imported(&mut self, batch: import::ImportBatch) -> ImportSummary {
        let imported = batch.courses.len();
        for course in batch.courses {
            if self.catalog.exists(&course.course_code) {
                // enrollment resolves a code to its first catalog entry
                warn!(
                    course = %course.course_code,
                    "Imported course code is already in the catalog"
                );
            }
            self.catalog.add(course);
        }

        info!(imported = imported, skipped = batch.skipped.len(), "CSV import finished");
        ImportSummary {
            imported,
            skipped: batch.skipped,
        }
    }

    /// Weekly grid for the role's own roster. Admins have no timetable.
    pub fn timetable(&self, role: Role) -> Option<Timetable> {
        match role {
            Role::Student => Some(Timetable::project(self.enrolled.list())),
            Role::Instructor => Some(Timetable::project(self.teaching.list())),
            Role::Admin => None,
        }
    }

    /// Dashboard figures. For admins, computed over the pending list.
    pub fn stats(&self, role: Role) -> DashboardStats {
        let courses = match role {
            Role::Student => self.enrolled.list(),
            Role::Instructor => self.teaching.list(),
            Role::Admin => self.pending.list(),
        };

        DashboardStats {
            courses: courses.len(),
            lectures_per_week: courses.iter().map(|c| c.lecture_count).sum(),
            labs_per_week: courses.iter().filter(|c| c.has_lab()).count(),
        }
    }
}

impl Default for Portal {
    fn default() -> Self {
        Self::from_config(&PortalConfig::default())
    }
}

//! CSV course import.
//!
//! Column order:
//! `code,name,lectureSection,labSection,hasLab,lectures[,lectureDays,lectureTime,instructorName[,labDays,labTime]]`
//!
//! The first row is a header. Rows that cannot be mapped are skipped and
//! reported; they never abort the import.

use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::course::{Course, LabSession};
use crate::error::TimetableError;
use crate::schedule::DayPattern;

const MIN_COLUMNS: usize = 6;
const SCHEDULE_COLUMNS: usize = 9;
const LAB_COLUMNS: usize = 11;

/// A row that was not imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based line in the source file
    pub line: u64,
    pub reason: String,
}

/// Courses read from one CSV source.
#[derive(Debug, Clone, Default)]
pub struct ImportBatch {
    pub courses: Vec<Course>,
    pub skipped: Vec<SkippedRow>,
}

/// Outcome reported to the admin after an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Reads courses from CSV data.
///
/// # Returns
/// * `Ok(ImportBatch)` - Mapped courses plus the rows that were skipped
/// * `Err` - If the source is empty or the underlying reader fails
pub fn read_courses<R: Read>(source: R) -> Result<ImportBatch, TimetableError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    if reader.headers()?.is_empty() {
        return Err(TimetableError::Import {
            message: "CSV file is empty".to_string(),
        });
    }

    let mut batch = ImportBatch::default();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                let reason = e.to_string();
                warn!(line = line, reason = %reason, "Skipping unreadable CSV row");
                batch.skipped.push(SkippedRow { line, reason });
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        match course_from_record(&record) {
            Ok(course) => batch.courses.push(course),
            Err(reason) => {
                warn!(line = line, reason = %reason, "Skipping CSV row");
                batch.skipped.push(SkippedRow { line, reason });
            }
        }
    }

    info!(
        courses = batch.courses.len(),
        skipped = batch.skipped.len(),
        "Read courses from CSV"
    );

    Ok(batch)
}

/// Reads courses from a CSV file on disk.
pub fn read_courses_from_path(path: &Path) -> Result<ImportBatch, TimetableError> {
    let file = File::open(path)?;
    read_courses(file)
}

/// Maps one record onto a course, or explains why it cannot be.
fn course_from_record(record: &csv::StringRecord) -> Result<Course, String> {
    if record.len() < MIN_COLUMNS {
        return Err(format!(
            "expected at least {MIN_COLUMNS} columns, found {}",
            record.len()
        ));
    }

    let field = |i: usize| record.get(i).unwrap_or("");

    let has_lab = field(4).trim().eq_ignore_ascii_case("true");
    let lectures: u32 = field(5)
        .trim()
        .parse()
        .map_err(|_| format!("invalid lecture count {:?}", field(5)))?;

    let mut course = Course::new(field(0), field(1), field(2), lectures);

    if record.len() >= SCHEDULE_COLUMNS {
        course = course
            .lectures(DayPattern::decode(field(6)), field(7))
            .taught_by(field(8));
    }

    if has_lab {
        let lab = if record.len() >= LAB_COLUMNS {
            LabSession::new(field(3), DayPattern::decode(field(9)), field(10))
        } else {
            LabSession::with_defaults(field(3))
        };
        course = course.with_lab(lab);
    }

    Ok(course)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::DEFAULT_INSTRUCTOR;
    use crate::schedule::DEFAULT_LAB_SLOT;

    const HEADER: &str = "code,name,lectureSection,labSection,hasLab,lectures,\
                          lectureDays,lectureTime,instructorName,labDays,labTime\n";

    #[test]
    fn test_full_rows() {
        let data = format!(
            "{HEADER}CS401,Compilers,L1,LB1,true,3,MWF,9:00 - 10:00,Dr. Rao,Th,1:00 - 3:00\n\
             CS402,Networks,L2,,false,2,TTh,11:00 - 12:00,Dr. Sen\n"
        );
        let batch = read_courses(data.as_bytes()).unwrap();
        assert!(batch.skipped.is_empty());
        assert_eq!(batch.courses.len(), 2);

        let compilers = &batch.courses[0];
        assert_eq!(compilers.lecture_days.encode(), "MWF");
        assert_eq!(compilers.instructor_name, "Dr. Rao");
        let lab = compilers.lab.as_ref().unwrap();
        assert_eq!(lab.section, "LB1");
        assert_eq!(lab.days.encode(), "Th");
        assert_eq!(lab.time.label(), "1:00 - 3:00");

        let networks = &batch.courses[1];
        assert!(!networks.has_lab());
        assert_eq!(networks.lecture_time.label(), "11:00 - 12:00");
    }

    #[test]
    fn test_short_rows_use_defaults() {
        let data = format!("{HEADER}CS101,Intro,L1,LB2,TRUE,3\n");
        let batch = read_courses(data.as_bytes()).unwrap();
        let course = &batch.courses[0];
        assert_eq!(course.lecture_days.encode(), "MWF");
        assert_eq!(course.instructor_name, DEFAULT_INSTRUCTOR);
        let lab = course.lab.as_ref().unwrap();
        assert_eq!(lab.days.encode(), "T");
        assert_eq!(lab.time.label(), DEFAULT_LAB_SLOT);
    }

    #[test]
    fn test_lab_columns_ignored_without_lab() {
        let data =
            format!("{HEADER}CS102,Logic,L1,LB1,false,2,TTh,8:00 - 9:00,Dr. X,M,8:00 - 10:00\n");
        let batch = read_courses(data.as_bytes()).unwrap();
        assert!(batch.courses[0].lab.is_none());
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let data = format!(
            "{HEADER}CS103,Bad Count,L1,,false,three\n\
             CS104,Too Short,L1\n\
             CS105,Fine,L1,,false,1\n"
        );
        let batch = read_courses(data.as_bytes()).unwrap();
        assert_eq!(batch.courses.len(), 1);
        assert_eq!(batch.courses[0].course_code, "CS105");
        assert_eq!(batch.skipped.len(), 2);
        assert_eq!(batch.skipped[0].line, 2);
        assert!(batch.skipped[0].reason.contains("lecture count"));
        assert_eq!(batch.skipped[1].line, 3);
    }

    #[test]
    fn test_invalid_utf8_row_is_skipped() {
        let mut data = HEADER.as_bytes().to_vec();
        data.extend_from_slice(b"CS1,First,L1,,false,3\n");
        data.extend_from_slice(b"CS2,Bad\xFF,L1,,false,2\n");
        data.extend_from_slice(b"CS3,Third,L1,,false,2\n");

        let batch = read_courses(data.as_slice()).unwrap();
        let codes: Vec<_> = batch.courses.iter().map(|c| c.course_code.as_str()).collect();
        assert_eq!(codes, vec!["CS1", "CS3"]);
        assert_eq!(batch.skipped.len(), 1);
        assert_eq!(batch.skipped[0].line, 3);
    }

    #[test]
    fn test_empty_source_is_an_error() {
        let err = read_courses("".as_bytes()).unwrap_err();
        assert!(matches!(err, TimetableError::Import { .. }));
    }
}

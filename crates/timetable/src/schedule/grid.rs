//! Projection of a roster onto the fixed weekly grid.

use chrono::Weekday;
use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::days::{full_name, DayPattern, WEEKDAYS};
use super::slot::{TimeSlot, LECTURE_SLOTS};
use crate::course::Course;

const ROWS: usize = LECTURE_SLOTS.len();
const COLS: usize = WEEKDAYS.len();

/// A rendered week: rows are the hourly lecture slots, columns Monday
/// through Friday. Built fresh from a roster on every view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timetable {
    cells: [[Option<String>; COLS]; ROWS],
}

/// One grid row with its slot label.
#[derive(Debug, Clone, Copy)]
pub struct TimetableRow<'a> {
    pub slot: &'static str,
    pub cells: &'a [Option<String>; COLS],
}

fn column_of(day: Weekday) -> Option<usize> {
    WEEKDAYS.iter().position(|d| *d == day)
}

impl Timetable {
    pub fn empty() -> Self {
        Self {
            cells: Default::default(),
        }
    }

    /// Places every course of the roster on the grid.
    ///
    /// Lectures go to the row whose label equals the lecture slot; labs go
    /// to the row whose label equals the lab slot, so two-hour lab labels
    /// are never placed. Later courses overwrite earlier ones in the same
    /// cell.
    pub fn project(courses: &[Course]) -> Self {
        let mut grid = Self::empty();

        for course in courses {
            let lecture = format!("{}\n{}", course.course_code, course.course_name);
            if !grid.place(&course.lecture_time, &course.lecture_days, &lecture) {
                debug!(
                    course = %course.course_code,
                    slot = %course.lecture_time,
                    "Lecture slot is not a grid row, skipping"
                );
            }

            if let Some(lab) = &course.lab {
                let label = format!("{} (Lab)\n{}", course.course_code, lab.section);
                if !grid.place(&lab.time, &lab.days, &label) {
                    debug!(
                        course = %course.course_code,
                        slot = %lab.time,
                        "Lab slot is not a grid row, skipping"
                    );
                }
            }
        }

        grid
    }

    /// Writes `content` into every day of `days` on the row for `slot`.
    /// Returns false if the slot has no row.
    fn place(&mut self, slot: &TimeSlot, days: &DayPattern, content: &str) -> bool {
        let Some(row) = slot.row_index() else {
            return false;
        };
        for day in days.iter() {
            if let Some(col) = column_of(day) {
                self.cells[row][col] = Some(content.to_string());
            }
        }
        true
    }

    /// Content of one cell, if the slot is a grid row and the cell is filled.
    pub fn cell(&self, slot: &str, day: Weekday) -> Option<&str> {
        let row = LECTURE_SLOTS.iter().position(|s| *s == slot)?;
        let col = column_of(day)?;
        self.cells[row][col].as_deref()
    }

    pub fn rows(&self) -> impl Iterator<Item = TimetableRow<'_>> {
        LECTURE_SLOTS
            .into_iter()
            .zip(self.cells.iter())
            .map(|(slot, cells)| TimetableRow { slot, cells })
    }

    /// Filled cells as `(slot, day, content)`, row by row.
    pub fn occupied_cells(&self) -> Vec<(&'static str, Weekday, &str)> {
        self.rows()
            .flat_map(|row| {
                WEEKDAYS
                    .into_iter()
                    .zip(row.cells.iter())
                    .filter_map(move |(day, cell)| {
                        cell.as_deref().map(|content| (row.slot, day, content))
                    })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }
}

impl Default for Timetable {
    fn default() -> Self {
        Self::empty()
    }
}

/// Plain-text table: one line per slot, multi-line cells flattened with " / ".
impl fmt::Display for Timetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 22;

        write!(f, "{:<15}", "Time")?;
        for day in WEEKDAYS {
            write!(f, "| {:<width$}", full_name(day), width = WIDTH)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(15 + COLS * (WIDTH + 2)))?;

        for row in self.rows() {
            write!(f, "{:<15}", row.slot)?;
            for cell in row.cells {
                let text = cell.as_deref().unwrap_or("").replace('\n', " / ");
                let text: String = text.chars().take(WIDTH).collect();
                write!(f, "| {:<width$}", text, width = WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Projects a roster onto the weekly grid. See [`Timetable::project`].
pub fn project(courses: &[Course]) -> Timetable {
    Timetable::project(courses)
}

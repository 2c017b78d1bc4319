//! Pairwise conflict detection and the instructor lunch-hour rule.

use tracing::debug;

use super::slot::TimeSlot;
use crate::course::Course;
use crate::error::TimetableError;

/// Returns true if the two courses collide.
///
/// Lectures collide when their day sets intersect and their slot labels
/// are identical. If both courses have a lab, their labs are compared the
/// same way. A lecture is never compared against a lab.
pub fn conflicts(a: &Course, b: &Course) -> bool {
    let lectures_collide =
        a.lecture_days.intersects(&b.lecture_days) && a.lecture_time == b.lecture_time;
    if lectures_collide {
        return true;
    }

    match (&a.lab, &b.lab) {
        (Some(lab_a), Some(lab_b)) => {
            lab_a.days.intersects(&lab_b.days) && lab_a.time == lab_b.time
        }
        _ => false,
    }
}

/// First course on the roster, in roster order, that conflicts with the
/// candidate.
pub fn find_first_conflict<'a>(candidate: &Course, roster: &'a [Course]) -> Option<&'a Course> {
    let found = roster.iter().find(|existing| conflicts(candidate, existing));
    if let Some(existing) = found {
        debug!(
            candidate = %candidate.course_code,
            existing = %existing.course_code,
            "Found scheduling conflict"
        );
    }
    found
}

/// Like [`find_first_conflict`], but as an error naming the conflicting
/// course.
pub fn ensure_no_conflict(candidate: &Course, roster: &[Course]) -> Result<(), TimetableError> {
    match find_first_conflict(candidate, roster) {
        Some(existing) => Err(TimetableError::ScheduleConflict {
            code: existing.course_code.clone(),
            name: existing.course_name.clone(),
            schedule: existing.schedule_summary(),
        }),
        None => Ok(()),
    }
}

/// Checks that scheduling a lecture at `lecture_time` keeps one lunch slot
/// free across the instructor's roster.
///
/// Only lunch-slot candidates are constrained; the first roster course
/// already lecturing in the other lunch slot is reported.
pub fn check_lunch_constraint(
    lecture_time: &TimeSlot,
    roster: &[Course],
) -> Result<(), TimetableError> {
    let Some(other) = lecture_time.other_lunch_slot() else {
        return Ok(());
    };

    match roster.iter().find(|course| course.lecture_time == other) {
        Some(blocking) => Err(TimetableError::LunchConstraint {
            requested: lecture_time.to_string(),
            occupied: other.to_string(),
            code: blocking.course_code.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::LabSession;
    use crate::schedule::DayPattern;
    use proptest::prelude::*;

    fn course(code: &str, days: &str, time: &str) -> Course {
        Course::new(code, format!("{code} name"), "L1", 3).lectures(DayPattern::decode(days), time)
    }

    fn with_lab(course: Course, days: &str, time: &str) -> Course {
        course.with_lab(LabSession::new("LB1", DayPattern::decode(days), time))
    }

    #[test]
    fn test_disjoint_days_do_not_conflict() {
        let a = course("A", "MWF", "10:00 - 11:00");
        let b = course("B", "TTh", "10:00 - 11:00");
        assert!(!conflicts(&a, &b));
    }

    #[test]
    fn test_shared_day_same_slot_conflicts() {
        let a = course("A", "MWF", "10:00 - 11:00");
        let c = course("C", "MW", "10:00 - 11:00");
        assert!(conflicts(&a, &c));
    }

    #[test]
    fn test_same_days_different_slot_do_not_conflict() {
        let a = course("A", "MWF", "10:00 - 11:00");
        let b = course("B", "MWF", "11:00 - 12:00");
        assert!(!conflicts(&a, &b));
    }

    #[test]
    fn test_thursday_does_not_collide_with_tuesday() {
        let a = course("A", "T", "9:00 - 10:00");
        let b = course("B", "Th", "9:00 - 10:00");
        assert!(!conflicts(&a, &b));
    }

    #[test]
    fn test_lab_conflicts_need_both_labs() {
        let a = with_lab(course("A", "MWF", "8:00 - 9:00"), "T", "1:00 - 3:00");
        let b = with_lab(course("B", "TTh", "9:00 - 10:00"), "TTh", "1:00 - 3:00");
        assert!(conflicts(&a, &b));

        let lecture_only = course("C", "TTh", "9:00 - 10:00");
        assert!(!conflicts(&a, &lecture_only));
    }

    #[test]
    fn test_lecture_never_compared_with_lab() {
        // a's lab and b's lecture share Tuesday and the same label
        let a = with_lab(course("A", "MWF", "8:00 - 9:00"), "T", "2:00 - 3:00");
        let b = course("B", "TTh", "2:00 - 3:00");
        assert!(!conflicts(&a, &b));
        assert!(!conflicts(&b, &a));
    }

    #[test]
    fn test_overlapping_clock_time_is_not_a_conflict() {
        let a = with_lab(course("A", "MWF", "8:00 - 9:00"), "M", "8:00 - 10:00");
        let b = with_lab(course("B", "TTh", "8:00 - 9:00"), "M", "10:00 - 12:00");
        assert!(!conflicts(&a, &b));
    }

    #[test]
    fn test_find_first_conflict_returns_earliest() {
        let roster = vec![
            course("X", "TTh", "10:00 - 11:00"),
            course("Y", "M", "10:00 - 11:00"),
            course("Z", "F", "10:00 - 11:00"),
        ];
        let candidate = course("N", "MWF", "10:00 - 11:00");
        let found = find_first_conflict(&candidate, &roster).unwrap();
        assert_eq!(found.course_code, "Y");

        let free = course("F", "MWF", "3:00 - 4:00");
        assert!(find_first_conflict(&free, &roster).is_none());
        assert!(find_first_conflict(&candidate, &[]).is_none());
    }

    #[test]
    fn test_ensure_no_conflict_reports_course() {
        let roster = vec![course("CS201", "MWF", "10:00 - 11:00")];
        let err = ensure_no_conflict(&course("N", "W", "10:00 - 11:00"), &roster).unwrap_err();
        assert_eq!(
            err,
            TimetableError::ScheduleConflict {
                code: "CS201".to_string(),
                name: "CS201 name".to_string(),
                schedule: "Mon/Wed/Fri 10:00 - 11:00".to_string(),
            }
        );
    }

    #[test]
    fn test_lunch_constraint_blocks_second_lunch_slot() {
        let roster = vec![course("CS201", "MWF", "12:00 - 1:00")];
        let err = check_lunch_constraint(&TimeSlot::from("1:00 - 2:00"), &roster).unwrap_err();
        assert_eq!(
            err,
            TimetableError::LunchConstraint {
                requested: "1:00 - 2:00".to_string(),
                occupied: "12:00 - 1:00".to_string(),
                code: "CS201".to_string(),
            }
        );
    }

    #[test]
    fn test_lunch_constraint_allows_same_or_other_slots() {
        let roster = vec![course("CS201", "MWF", "12:00 - 1:00")];
        // same lunch slot on other days is left to the pairwise check
        assert!(check_lunch_constraint(&TimeSlot::from("12:00 - 1:00"), &roster).is_ok());
        assert!(check_lunch_constraint(&TimeSlot::from("2:00 - 3:00"), &roster).is_ok());
        assert!(check_lunch_constraint(&TimeSlot::from("1:00 - 2:00"), &[]).is_ok());
    }

    fn arb_course() -> impl Strategy<Value = Course> {
        let days = "(M|T|W|Th|F){0,3}";
        let lecture = prop::sample::select(vec!["9:00 - 10:00", "10:00 - 11:00", "1:00 - 2:00"]);
        let lab_time = prop::sample::select(vec!["8:00 - 10:00", "1:00 - 3:00"]);
        (days, lecture, prop::option::of((days, lab_time))).prop_map(|(d, t, lab)| {
            let base = course("P", &d, t);
            match lab {
                Some((ld, lt)) => with_lab(base, &ld, lt),
                None => base,
            }
        })
    }

    proptest! {
        #[test]
        fn prop_conflicts_is_symmetric(a in arb_course(), b in arb_course()) {
            prop_assert_eq!(conflicts(&a, &b), conflicts(&b, &a));
        }
    }
}

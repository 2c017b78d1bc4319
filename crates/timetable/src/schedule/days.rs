//! Compact day-pattern tokens ("MWF", "TTh") and the weekday sets they denote.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

use crate::error::TimetableError;

/// The teaching week, in grid column order.
pub const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Three-letter display name ("Mon", "Thu", ...).
pub fn short_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Full display name, used for timetable column headers.
pub fn full_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Token letter(s) for a weekday. Weekend days have no token.
fn token_of(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "M",
        Weekday::Tue => "T",
        Weekday::Wed => "W",
        Weekday::Thu => "Th",
        Weekday::Fri => "F",
        Weekday::Sat | Weekday::Sun => "",
    }
}

/// Left-to-right scanner over a day-pattern token.
///
/// Yields `Ok(day)` for each recognized letter and `Err(ch)` for anything
/// else. A `T` followed by `h` is consumed as a single Thursday; a `T`
/// followed by anything else is Tuesday.
struct DayTokens<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> DayTokens<'a> {
    fn new(token: &'a str) -> Self {
        Self {
            chars: token.chars().peekable(),
        }
    }
}

impl Iterator for DayTokens<'_> {
    type Item = Result<Weekday, char>;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.chars.next()?;
        let day = match ch {
            'M' => Weekday::Mon,
            'T' => {
                if self.chars.peek() == Some(&'h') {
                    self.chars.next();
                    Weekday::Thu
                } else {
                    Weekday::Tue
                }
            }
            'W' => Weekday::Wed,
            'F' => Weekday::Fri,
            other => return Some(Err(other)),
        };
        Some(Ok(day))
    }
}

/// A set of teaching days drawn from Monday through Friday.
///
/// Stored as a five-bit set, bit 0 = Monday. Serializes as its canonical
/// token ("MWF"); deserialization is strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayPattern(u8);

impl DayPattern {
    /// The empty pattern.
    pub const fn empty() -> Self {
        DayPattern(0)
    }

    fn bit(day: Weekday) -> Option<u8> {
        match day.num_days_from_monday() {
            n @ 0..=4 => Some(1 << n),
            _ => None,
        }
    }

    /// Decodes a token leniently: unrecognized characters are dropped.
    ///
    /// `"Th"` is Thursday, never Tuesday plus a stray `h`.
    pub fn decode(token: &str) -> Self {
        DayTokens::new(token).filter_map(Result::ok).collect()
    }

    /// Encodes the set as a canonical token, Monday first.
    pub fn encode(&self) -> String {
        self.iter().map(token_of).collect()
    }

    /// Adds a day. Returns false for weekend days, which cannot be held.
    pub fn insert(&mut self, day: Weekday) -> bool {
        match Self::bit(day) {
            Some(bit) => {
                self.0 |= bit;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, day: Weekday) -> bool {
        Self::bit(day).is_some_and(|bit| self.0 & bit != 0)
    }

    /// True if the two patterns share at least one day.
    pub fn intersects(&self, other: &DayPattern) -> bool {
        self.0 & other.0 != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Days in the set, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEKDAYS.into_iter().filter(move |day| self.contains(*day))
    }

    /// Display names of the set, e.g. `"Tue/Thu"`.
    pub fn display_names(&self) -> String {
        self.iter().map(short_name).collect::<Vec<_>>().join("/")
    }
}

/// Formats a raw token for display, in token order: `"MWF"` becomes
/// `"Mon/Wed/Fri"`. Unrecognized characters contribute nothing.
pub fn format_token(token: &str) -> String {
    DayTokens::new(token)
        .filter_map(Result::ok)
        .map(short_name)
        .collect::<Vec<_>>()
        .join("/")
}

impl FromIterator<Weekday> for DayPattern {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut pattern = DayPattern::empty();
        for day in iter {
            pattern.insert(day);
        }
        pattern
    }
}

impl FromStr for DayPattern {
    type Err = TimetableError;

    /// Strict parse: the first unrecognized character is an error.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut pattern = DayPattern::empty();
        for day in DayTokens::new(token) {
            match day {
                Ok(day) => {
                    pattern.insert(day);
                }
                Err(offending) => {
                    return Err(TimetableError::MalformedPattern {
                        token: token.to_string(),
                        offending,
                    })
                }
            }
        }
        Ok(pattern)
    }
}

impl TryFrom<String> for DayPattern {
    type Error = TimetableError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<DayPattern> for String {
    fn from(pattern: DayPattern) -> Self {
        pattern.encode()
    }
}

impl fmt::Display for DayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

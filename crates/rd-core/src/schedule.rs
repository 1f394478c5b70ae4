// crates/rd-core/src/schedule.rs - Schedule Token Parsing
//
// Turns the human-written `day[@time]` token from `rd add` into a concrete
// calendar day plus an optional clock time.
//
// DAY FORMS:
// - MM/DD        12/25 (a day already past this year means next year)
// - +N           +3 (three days from today)
// - today, tomorrow
// - weekdays     mon, tuesday, ... (next occurrence, today included)
//
// TIME FORMS (after '@'):
// - 2am, 5pm, 12am (midnight), 12pm (noon), 9:30am
// - 15, 15:45    no suffix means 24-hour clock
//
// Parsing is relative to a caller-supplied `today` so results are
// deterministic under test.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, warn};

/// Dates this far in the past are probably typos rather than next year
const RECENT_PAST_DAYS: i64 = 30;

static MONTH_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})$").expect("valid month/day regex"));

static CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?::(\d{2}))?(am|pm)?$").expect("valid clock regex")
});

/// Errors produced while parsing a `day[@time]` token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Empty schedule token")]
    Empty,

    #[error("More than one '@' in schedule token: {0}")]
    TooManyAt(String),

    #[error("Unrecognized day: {0}")]
    UnknownDay(String),

    #[error("No such calendar date: {0}")]
    InvalidDate(String),

    #[error("Unrecognized time of day: {0}")]
    InvalidTime(String),
}

/// When a reminder becomes relevant
///
/// The time is kept optional so that "12/25" and "12/25@8am" stay
/// distinguishable after a round-trip through the store, even though both
/// fall due at the same moment under the default configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub day: NaiveDate,
    pub time: Option<NaiveTime>,
}

impl Schedule {
    pub fn new(day: NaiveDate, time: Option<NaiveTime>) -> Self {
        Self { day, time }
    }

    /// Parse a `day[@time]` token relative to `today`
    pub fn parse(token: &str, today: NaiveDate) -> Result<Self, ScheduleError> {
        let token = token.trim().to_ascii_lowercase();
        if token.is_empty() {
            return Err(ScheduleError::Empty);
        }

        let mut parts = token.split('@');
        let day_str = parts.next().unwrap_or_default();
        let time_str = parts.next();
        if parts.next().is_some() {
            return Err(ScheduleError::TooManyAt(token.clone()));
        }

        let day = parse_day(day_str, today)?;
        let time = time_str.map(parse_time).transpose()?;

        Ok(Self { day, time })
    }

    /// The moment this schedule falls due, using `default_time` when no
    /// clock time was given
    pub fn due_at(&self, default_time: NaiveTime) -> NaiveDateTime {
        self.day.and_time(self.time.unwrap_or(default_time))
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time {
            Some(time) => write!(f, "{} {}", self.day, time.format("%H:%M")),
            None => write!(f, "{}", self.day),
        }
    }
}

/// Parse the day half of a schedule token
fn parse_day(day_str: &str, today: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    match day_str {
        "" => return Err(ScheduleError::Empty),
        "today" => return Ok(today),
        "tomorrow" => return Ok(today + Duration::days(1)),
        _ => {}
    }

    if let Some(offset) = day_str.strip_prefix('+') {
        let days: u32 = offset
            .parse()
            .map_err(|_| ScheduleError::UnknownDay(day_str.to_string()))?;
        return today
            .checked_add_signed(Duration::days(i64::from(days)))
            .ok_or_else(|| ScheduleError::InvalidDate(day_str.to_string()));
    }

    if let Ok(weekday) = Weekday::from_str(day_str) {
        let ahead = (7 + weekday.num_days_from_monday()
            - today.weekday().num_days_from_monday())
            % 7;
        return Ok(today + Duration::days(i64::from(ahead)));
    }

    if let Some(captures) = MONTH_DAY.captures(day_str) {
        let month: u32 = captures[1]
            .parse()
            .map_err(|_| ScheduleError::InvalidDate(day_str.to_string()))?;
        let day: u32 = captures[2]
            .parse()
            .map_err(|_| ScheduleError::InvalidDate(day_str.to_string()))?;
        return resolve_month_day(month, day, today)
            .ok_or_else(|| ScheduleError::InvalidDate(day_str.to_string()));
    }

    Err(ScheduleError::UnknownDay(day_str.to_string()))
}

/// Pick the year for a bare month/day: this year, or next year if that
/// day has already gone by
fn resolve_month_day(month: u32, day: u32, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(candidate) = NaiveDate::from_ymd_opt(today.year(), month, day) {
        if candidate >= today {
            return Some(candidate);
        }
        if today - Duration::days(RECENT_PAST_DAYS) < candidate {
            warn!("Interpreting {:02}/{:02} as next year", month, day);
        } else {
            debug!("Interpreting {:02}/{:02} as next year", month, day);
        }
    }
    NaiveDate::from_ymd_opt(today.year() + 1, month, day)
}

/// Parse the time half of a schedule token
fn parse_time(time_str: &str) -> Result<NaiveTime, ScheduleError> {
    let invalid = || ScheduleError::InvalidTime(time_str.to_string());

    let captures = CLOCK.captures(time_str).ok_or_else(invalid)?;
    let hour: u32 = captures[1].parse().map_err(|_| invalid())?;
    let minute: u32 = match captures.get(2) {
        Some(m) => m.as_str().parse().map_err(|_| invalid())?,
        None => 0,
    };

    let hour = match captures.get(3).map(|m| m.as_str()) {
        Some(suffix) => {
            if !(1..=12).contains(&hour) {
                return Err(invalid());
            }
            let hour = hour % 12;
            if suffix == "pm" { hour + 12 } else { hour }
        }
        None => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

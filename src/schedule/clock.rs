//! Day index and rollover countdown
//!
//! Days are counted in the reference timezone with the boundary at a fixed
//! local hour rather than midnight. All arithmetic is done on local wall-clock
//! time, so DST transitions never move the boundary off the configured hour.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use std::fmt;
use thiserror::Error;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;

/// Launch date of the daily puzzle (day index 0)
pub const LAUNCH_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2026, 2, 8) {
    Some(date) => date,
    None => panic!("invalid launch date"),
};

/// Local hour at which a new word becomes active
pub const ROLLOVER_HOUR: u32 = 6;

const ROLLOVER_TIME: NaiveTime = match NaiveTime::from_hms_opt(ROLLOVER_HOUR, 0, 0) {
    Some(time) => time,
    None => panic!("invalid rollover hour"),
};

/// Seed shared by every player for the word order
pub const SHUFFLE_SEED: u32 = 31337;

/// Reference timezone for the rollover boundary
pub const REFERENCE_TZ: Tz = chrono_tz::America::New_York;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("rollover hour must be in 0..24, got {0}")]
    InvalidRolloverHour(u32),

    #[error("vocabulary is empty")]
    EmptyVocabulary,
}

/// Scheduling parameters shared by every player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    launch_date: NaiveDate,
    rollover: NaiveTime,
    timezone: Tz,
    seed: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            launch_date: LAUNCH_DATE,
            rollover: ROLLOVER_TIME,
            timezone: REFERENCE_TZ,
            seed: SHUFFLE_SEED,
        }
    }
}

impl ScheduleConfig {
    /// # Errors
    /// Returns `ScheduleError::InvalidRolloverHour` if `rollover_hour >= 24`.
    pub fn new(
        launch_date: NaiveDate,
        rollover_hour: u32,
        timezone: Tz,
        seed: u32,
    ) -> Result<Self, ScheduleError> {
        let rollover = NaiveTime::from_hms_opt(rollover_hour, 0, 0)
            .ok_or(ScheduleError::InvalidRolloverHour(rollover_hour))?;

        Ok(Self {
            launch_date,
            rollover,
            timezone,
            seed,
        })
    }

    #[must_use]
    pub const fn launch_date(&self) -> NaiveDate {
        self.launch_date
    }

    #[must_use]
    pub fn rollover_hour(&self) -> u32 {
        self.rollover.hour()
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    fn rollover_offset(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.rollover_hour()))
    }
}

/// Number of whole rollover periods between launch and `now`
///
/// Both instants are taken as wall-clock time in the reference timezone, shifted
/// back by the rollover hour, and the millisecond difference is floor-divided by
/// one day. Negative results mean "before launch".
#[must_use]
pub fn day_index(config: &ScheduleConfig, now: DateTime<Utc>) -> i64 {
    let offset = config.rollover_offset();
    let shifted_now = now.with_timezone(&config.timezone).naive_local() - offset;
    let shifted_launch = config.launch_date.and_time(config.rollover) - offset;

    let diff_ms = (shifted_now - shifted_launch).num_milliseconds();
    diff_ms.div_euclid(MS_PER_DAY)
}

/// Time remaining until the next rollover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub total_ms: u64,
}

impl Countdown {
    #[must_use]
    pub const fn from_millis(total_ms: u64) -> Self {
        Self {
            hours: total_ms / MS_PER_HOUR,
            minutes: (total_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (total_ms % MS_PER_MINUTE) / 1000,
            total_ms,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Time until the next rollover instant at or after `now`
///
/// The next rollover is today at the rollover hour when the local hour is still
/// before it, otherwise tomorrow.
#[must_use]
pub fn time_until_next_rollover(config: &ScheduleConfig, now: DateTime<Utc>) -> Countdown {
    let local = now.with_timezone(&config.timezone);
    let today = local.date_naive();
    let date = if local.hour() < config.rollover_hour() {
        today
    } else {
        today.succ_opt().unwrap_or(today)
    };
    let next_local = date.and_time(config.rollover);

    let total_ms = match config.timezone.from_local_datetime(&next_local).earliest() {
        Some(next) => (next.with_timezone(&Utc) - now).num_milliseconds(),
        // Rollover hour skipped by a DST gap; fall back to wall-clock distance
        None => (next_local - local.naive_local()).num_milliseconds(),
    };

    Countdown::from_millis(u64::try_from(total_ms).unwrap_or(0))
}

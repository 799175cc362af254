//! The picker's working copy of the host's date value.
//!
//! Wall-clock components only; no timezone is attached or converted.
//! Months are 0-based (0 = January) on this API, chrono's 1-based months
//! stay inside this module.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

use crate::error::{PickerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectedDate(NaiveDateTime);

impl SelectedDate {
    /// Builds a date from raw components. Out-of-range values are rejected,
    /// never rolled over into the neighbouring month or day.
    pub fn from_parts(
        year:   i32,
        month:  u32,
        day:    u32,
        hour:   u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        let date = ymd(year, month, day)
            .ok_or(PickerError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or(PickerError::InvalidTime { hour, minute, second })?;
        Ok(Self(date.and_time(time)))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::from_parts(year, month, day, 0, 0, 0)
    }

    pub fn year(&self)   -> i32 { self.0.year() }
    pub fn month(&self)  -> u32 { self.0.month0() }
    pub fn day(&self)    -> u32 { self.0.day() }
    pub fn hour(&self)   -> u32 { self.0.hour() }
    pub fn minute(&self) -> u32 { self.0.minute() }
    pub fn second(&self) -> u32 { self.0.second() }

    pub fn date(&self) -> NaiveDate { self.0.date() }
    pub fn naive(&self) -> NaiveDateTime { self.0 }

    /// Moves to another calendar day in one step, keeping the time of day.
    pub fn with_ymd(&self, year: i32, month: u32, day: u32) -> Result<Self> {
        let date = ymd(year, month, day)
            .ok_or(PickerError::InvalidDate { year, month, day })?;
        Ok(Self(date.and_time(self.0.time())))
    }

    pub(crate) fn with_hour(&self, hour: u32) -> Self {
        // hour is always reduced mod 24 by the caller
        Self(self.0.with_hour(hour).unwrap_or(self.0))
    }

    pub(crate) fn with_minute(&self, minute: u32) -> Self {
        Self(self.0.with_minute(minute).unwrap_or(self.0))
    }
}

impl From<NaiveDateTime> for SelectedDate {
    fn from(dt: NaiveDateTime) -> Self { Self(dt) }
}

impl From<NaiveDate> for SelectedDate {
    fn from(d: NaiveDate) -> Self { Self(d.and_time(NaiveTime::default())) }
}

impl From<SelectedDate> for NaiveDateTime {
    fn from(d: SelectedDate) -> Self { d.0 }
}

impl fmt::Display for SelectedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

fn ymd(year: i32, month0: u32, day: u32) -> Option<NaiveDate> {
    if month0 > 11 { return None; }
    NaiveDate::from_ymd_opt(year, month0 + 1, day)
}

// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;

#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike};

use crate::error::{Result, ZipError};

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#446
// https://learn.microsoft.com/en-us/windows/win32/api/oleauto/nf-oleauto-dosdatetimetovarianttime

/// The first year the MS-DOS date representation can hold.
pub const MIN_YEAR: i32 = 1980;
/// The last year the MS-DOS date representation can hold (7 bits of offset from 1980).
pub const MAX_YEAR: i32 = 2107;

/// A date and time stored as per the MS-DOS representation used by ZIP files.
///
/// No time zone is attached: the components are taken as the caller's wall clock.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ZipDateTime {
    pub(crate) date: u16,
    pub(crate) time: u16,
}

impl ZipDateTime {
    /// Packs the given calendar components, failing if any falls outside the MS-DOS representation.
    ///
    /// Seconds are stored in two-second steps, so odd values are rounded down.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ZipError::DateTimeOutOfRange("year"));
        }
        if !(1..=12).contains(&month) {
            return Err(ZipError::DateTimeOutOfRange("month"));
        }
        if !(1..=31).contains(&day) {
            return Err(ZipError::DateTimeOutOfRange("day"));
        }
        if hour > 23 {
            return Err(ZipError::DateTimeOutOfRange("hour"));
        }
        if minute > 59 {
            return Err(ZipError::DateTimeOutOfRange("minute"));
        }
        if second > 59 {
            return Err(ZipError::DateTimeOutOfRange("second"));
        }

        Ok(Self { date: pack_date(year, month, day), time: pack_time(hour, minute, second) })
    }

    /// Constructs this date & time from raw MS-DOS date and time words.
    pub fn from_dos(date: u16, time: u16) -> Self {
        Self { date, time }
    }

    /// Returns the packed MS-DOS date word.
    pub fn dos_date(&self) -> u16 {
        self.date
    }

    /// Returns the packed MS-DOS time word.
    pub fn dos_time(&self) -> u16 {
        self.time
    }

    /// Returns the year of this date & time.
    pub fn year(&self) -> i32 {
        (((self.date & 0xFE00) >> 9) + 1980).into()
    }

    /// Returns the month of this date & time.
    pub fn month(&self) -> u32 {
        ((self.date & 0x1E0) >> 5).into()
    }

    /// Returns the day of this date & time.
    pub fn day(&self) -> u32 {
        (self.date & 0x1F).into()
    }

    /// Returns the hour of this date & time.
    pub fn hour(&self) -> u32 {
        ((self.time & 0xF800) >> 11).into()
    }

    /// Returns the minute of this date & time.
    pub fn minute(&self) -> u32 {
        ((self.time & 0x7E0) >> 5).into()
    }

    /// Returns the second of this date & time.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds.
    pub fn second(&self) -> u32 {
        ((self.time & 0x1F) << 1).into()
    }

    /// Constructs chrono's [`NaiveDateTime`] representation of this date & time.
    ///
    /// Returns `None` if the packed words don't describe a real calendar date (eg. the zeroed default).
    ///
    /// Note that this requires the `chrono` feature.
    #[cfg(feature = "chrono")]
    pub fn as_chrono(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), self.day())?.and_hms_opt(
            self.hour(),
            self.minute(),
            self.second(),
        )
    }
}

// Day in bits 0-4, month in bits 5-8, years since 1980 in bits 9-15.
pub(crate) fn pack_date(year: i32, month: u32, day: u32) -> u16 {
    let year = (((year - 1980) << 9) & 0xFE00) as u16;
    let month = ((month << 5) & 0x1E0) as u16;
    let day = (day & 0x1F) as u16;

    year | month | day
}

// Second halves in bits 0-4, minute in bits 5-10, hour in bits 11-15.
pub(crate) fn pack_time(hour: u32, minute: u32, second: u32) -> u16 {
    let hour = ((hour << 11) & 0xF800) as u16;
    let minute = ((minute << 5) & 0x7E0) as u16;
    let second = ((second >> 1) & 0x1F) as u16;

    hour | minute | second
}

#[cfg(feature = "chrono")]
impl TryFrom<&NaiveDateTime> for ZipDateTime {
    type Error = ZipError;

    fn try_from(value: &NaiveDateTime) -> Result<Self> {
        ZipDateTime::new(value.year(), value.month(), value.day(), value.hour(), value.minute(), value.second())
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<NaiveDateTime> for ZipDateTime {
    type Error = ZipError;

    fn try_from(value: NaiveDateTime) -> Result<Self> {
        (&value).try_into()
    }
}

// Uses the wall clock of the value's own zone; no conversion to UTC takes place.
#[cfg(feature = "chrono")]
impl<Tz: TimeZone> TryFrom<&DateTime<Tz>> for ZipDateTime {
    type Error = ZipError;

    fn try_from(value: &DateTime<Tz>) -> Result<Self> {
        (&value.naive_local()).try_into()
    }
}

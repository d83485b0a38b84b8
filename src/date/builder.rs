// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::date::ZipDateTime;
use crate::error::Result;

/// A builder for [`ZipDateTime`].
///
/// Unset components default to the MS-DOS epoch, 1980-01-01 00:00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZipDateTimeBuilder {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl From<ZipDateTime> for ZipDateTimeBuilder {
    fn from(date: ZipDateTime) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: date.hour(),
            minute: date.minute(),
            second: date.second(),
        }
    }
}

impl Default for ZipDateTimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipDateTimeBuilder {
    /// Constructs a new builder set to the MS-DOS epoch.
    pub fn new() -> Self {
        Self { year: 1980, month: 1, day: 1, hour: 0, minute: 0, second: 0 }
    }

    /// Sets the date and time's year.
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the date and time's month.
    pub fn month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    /// Sets the date and time's day.
    pub fn day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    /// Sets the date and time's hour.
    pub fn hour(mut self, hour: u32) -> Self {
        self.hour = hour;
        self
    }

    /// Sets the date and time's minute.
    pub fn minute(mut self, minute: u32) -> Self {
        self.minute = minute;
        self
    }

    /// Sets the date and time's second.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds.
    pub fn second(mut self, second: u32) -> Self {
        self.second = second;
        self
    }

    /// Consumes this builder and returns a final [`ZipDateTime`].
    ///
    /// This fails if any component falls outside what the MS-DOS representation can hold:
    /// ```
    /// # use zip_records::ZipDateTimeBuilder;
    /// #
    /// assert!(ZipDateTimeBuilder::new().year(2024).month(3).day(2).build().is_ok());
    /// assert!(ZipDateTimeBuilder::new().year(1979).build().is_err());
    /// ```
    pub fn build(self) -> Result<ZipDateTime> {
        ZipDateTime::new(self.year, self.month, self.day, self.hour, self.minute, self.second)
    }
}

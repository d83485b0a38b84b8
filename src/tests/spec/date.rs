// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

#[cfg(feature = "chrono")]
use chrono::{NaiveDate, TimeZone, Utc};

use crate::error::ZipError;
use crate::{ZipDateTime, ZipDateTimeBuilder};

#[test]
fn date_packing_matches_dos_layout() {
    let dt = ZipDateTime::new(2020, 1, 1, 0, 0, 0).unwrap();

    assert_eq!(dt.dos_date(), 1 + (1 << 5) + ((2020 - 1980) << 9));
    assert_eq!(dt.dos_date(), 0x5021);
    assert_eq!(dt.dos_time(), 0x0000);
}

#[test]
fn year_occupies_high_seven_bits() {
    let dt = ZipDateTime::new(2020, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(dt.dos_date() >> 9, 40);
    assert_eq!(dt.dos_date() & 0x1FF, (1 << 5) | 1);

    // 0x2821 carries a year offset of 20, not 40.
    assert_eq!(ZipDateTime::from_dos(0x2821, 0).year(), 2000);
}

#[test]
fn time_packing_matches_dos_layout() {
    let dt = ZipDateTime::new(1980, 1, 1, 23, 59, 58).unwrap();

    assert_eq!(dt.dos_time(), (23 << 11) | (59 << 5) | 29);
}

#[test]
fn odd_seconds_round_down() {
    let dt = ZipDateTime::new(2001, 2, 3, 4, 5, 59).unwrap();
    assert_eq!(dt.second(), 58);
}

#[test]
fn date_conversion_test() {
    let year = 2000;
    let month = 9;
    let day = 8;
    let hour = 7;
    let minute = 5;
    let second = 4;

    let built = ZipDateTimeBuilder::new()
        .year(year)
        .month(month)
        .day(day)
        .hour(hour)
        .minute(minute)
        .second(second)
        .build()
        .expect("in range");

    assert_eq!(year, built.year());
    assert_eq!(month, built.month());
    assert_eq!(day, built.day());
    assert_eq!(hour, built.hour());
    assert_eq!(minute, built.minute());
    assert_eq!(second, built.second());

    assert_eq!(ZipDateTimeBuilder::from(built).build().unwrap(), built);
}

#[test]
fn builder_defaults_to_dos_epoch() {
    let built = ZipDateTimeBuilder::default().build().unwrap();

    assert_eq!(built, ZipDateTime::new(1980, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(built.dos_date(), 0x0021);
    assert_eq!(built.dos_time(), 0);
}

#[test]
fn from_dos_round_trips() {
    let dt = ZipDateTime::from_dos(0x5021, 0x6B2F);

    assert_eq!(dt.year(), 2020);
    assert_eq!(dt.month(), 1);
    assert_eq!(dt.day(), 1);
    assert_eq!(dt.hour(), 13);
    assert_eq!(dt.minute(), 25);
    assert_eq!(dt.second(), 30);
    assert_eq!(ZipDateTime::new(2020, 1, 1, 13, 25, 30).unwrap(), dt);
}

#[test]
fn out_of_range_components_are_rejected() {
    let cases = [
        (1979, 12, 31, 23, 59, 58, "year"),
        (2108, 1, 1, 0, 0, 0, "year"),
        (2000, 0, 1, 0, 0, 0, "month"),
        (2000, 13, 1, 0, 0, 0, "month"),
        (2000, 1, 0, 0, 0, 0, "day"),
        (2000, 1, 32, 0, 0, 0, "day"),
        (2000, 1, 1, 24, 0, 0, "hour"),
        (2000, 1, 1, 0, 60, 0, "minute"),
        (2000, 1, 1, 0, 0, 60, "second"),
    ];

    for (year, month, day, hour, minute, second, component) in cases {
        match ZipDateTime::new(year, month, day, hour, minute, second) {
            Err(ZipError::DateTimeOutOfRange(actual)) => assert_eq!(actual, component),
            other => panic!("expected {component} to be rejected, got {other:?}"),
        }
    }

    assert!(ZipDateTime::new(2107, 12, 31, 23, 59, 58).is_ok());
}

#[test]
#[cfg(feature = "chrono")]
fn date_conversion_test_chrono() {
    let original = NaiveDate::from_ymd_opt(2022, 10, 23).unwrap().and_hms_opt(17, 35, 2).unwrap();
    let zip_dt = ZipDateTime::try_from(&original).unwrap();

    assert_eq!(zip_dt.as_chrono(), Some(original));
}

#[test]
#[cfg(feature = "chrono")]
fn chrono_date_time_uses_wall_clock() {
    let original = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let zip_dt = ZipDateTime::try_from(&original).unwrap();

    assert_eq!(zip_dt.dos_date(), 0x5021);
    assert_eq!(zip_dt.dos_time(), 0);
}

#[test]
#[cfg(feature = "chrono")]
fn chrono_before_1980_is_rejected() {
    let original = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

    assert!(matches!(ZipDateTime::try_from(original), Err(ZipError::DateTimeOutOfRange("year"))));
    assert_eq!(ZipDateTime::default().as_chrono(), None);
}

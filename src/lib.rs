//! # Waqt
//!
//! Daily Islamic prayer times (Fajr, Shuruq, Dhuhr, Asr, Sunset, Maghrib,
//! Isha) computed from geographic coordinates and a calendar date with a
//! low-precision solar ephemeris.
//!
//! The computation is a pure function: no state, no I/O, no caching. All
//! times are decimal hours in `[0, 24)` referenced to the Greenwich
//! meridian; timezone and DST handling are deliberately out of scope.
//!
//! ## Usage
//!
//! ```rust
//! use waqt::prelude::*;
//!
//! let times = waqt::prayer_times(21.4225, 39.8262, "2024-06-21").unwrap();
//! assert!(times.fajr < times.shuruq && times.shuruq < times.dhuhr);
//! ```

pub mod astronomy;
pub mod calendar;
pub mod extension;
pub mod types;

pub use astronomy::{SolarParameters, calculate_prayer_times, hour_angle, solar_parameters};
pub use calendar::{J2000_EPOCH, WaqtError, julian_date, parse_date};
pub use extension::PrayerDateExt;
pub use types::{GeoCoordinate, Prayer, PrayerParams, PrayerTimeSet, format_time24};

pub mod prelude {
    pub use crate::astronomy::calculate_prayer_times;
    pub use crate::extension::PrayerDateExt;
    pub use crate::types::*;
    pub use crate::{WaqtError, prayer_times, schedule};
}

use chrono::NaiveDate;

/// Calculates prayer times from raw coordinates and a `YYYY-MM-DD` string.
///
/// Convenience wrapper over [`calculate_prayer_times`]: parses the date,
/// validates the coordinates, and computes the seven times. Malformed
/// input is rejected before any computation runs.
///
/// # Errors
/// `InvalidDate` for an unparseable date string, `LatitudeOutOfRange` /
/// `LongitudeOutOfRange` for coordinates outside [-90, 90] / [-180, 180],
/// and `SunNeverReachesElevation` for polar date/latitude combinations.
pub fn prayer_times(
    latitude: f64,
    longitude: f64,
    date: &str,
) -> Result<PrayerTimeSet, WaqtError> {
    let date = parse_date(date)?;
    calculate_prayer_times(
        date,
        GeoCoordinate::new(latitude, longitude),
        &PrayerParams::default(),
    )
}

/// Iterator for generating a prayer schedule over a date range lazily.
pub struct ScheduleIterator {
    current: NaiveDate,
    end: NaiveDate,
    coord: GeoCoordinate,
    params: PrayerParams,
}

impl Iterator for ScheduleIterator {
    type Item = Result<(NaiveDate, PrayerTimeSet), WaqtError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current > self.end {
            return None;
        }
        let date = self.current;
        match self.current.succ_opt() {
            Some(next) => self.current = next,
            // Ran off the supported calendar: mark the iterator exhausted,
            // but still emit this final day.
            None => self.end = NaiveDate::MIN,
        }
        Some(calculate_prayer_times(date, self.coord, &self.params).map(|times| (date, times)))
    }
}

/// Generates prayer times for every date in `[start, end]`.
///
/// Days are independent: each yields its own `Result`, so a polar-night
/// failure mid-range surfaces for that day without poisoning the rest.
pub fn schedule(
    start: NaiveDate,
    end: NaiveDate,
    coord: GeoCoordinate,
    params: PrayerParams,
) -> ScheduleIterator {
    ScheduleIterator { current: start, end, coord, params }
}

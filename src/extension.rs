//! Extension trait for `NaiveDate`.

use chrono::NaiveDate;

use crate::astronomy::prayer::calculate_prayer_times;
use crate::calendar::WaqtError;
use crate::types::{GeoCoordinate, PrayerParams, PrayerTimeSet};

/// Extends `NaiveDate` with prayer time calculation.
pub trait PrayerDateExt {
    /// Returns the prayer times at `coord` with default parameters.
    fn prayer_times(&self, coord: GeoCoordinate) -> Result<PrayerTimeSet, WaqtError>;

    /// Returns the prayer times at `coord` with custom parameters.
    fn prayer_times_with(
        &self,
        coord: GeoCoordinate,
        params: &PrayerParams,
    ) -> Result<PrayerTimeSet, WaqtError>;
}

impl PrayerDateExt for NaiveDate {
    fn prayer_times(&self, coord: GeoCoordinate) -> Result<PrayerTimeSet, WaqtError> {
        calculate_prayer_times(*self, coord, &PrayerParams::default())
    }

    fn prayer_times_with(
        &self,
        coord: GeoCoordinate,
        params: &PrayerParams,
    ) -> Result<PrayerTimeSet, WaqtError> {
        calculate_prayer_times(*self, coord, params)
    }
}

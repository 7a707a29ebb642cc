//! Prayer time assembly.
//!
//! Orchestrates the solar ephemeris and the hour-angle computation into
//! the seven named times for one date and location.

use chrono::NaiveDate;

use super::solar::{frac24, hour_angle, solar_parameters};
use crate::calendar::{WaqtError, julian_date};
use crate::types::{GeoCoordinate, PrayerParams, PrayerTimeSet};

/// Twilight elevation threshold for Fajr and Isha, degrees below horizon.
pub const TWILIGHT_ELEVATION_DEG: f64 = -15.0;

/// Elevation of apparent sunrise/sunset: atmospheric refraction plus the
/// solar semi-diameter.
pub const HORIZON_ELEVATION_DEG: f64 = -0.833;

fn validate(coord: GeoCoordinate) -> Result<(), WaqtError> {
    // NaN fails both range checks, so non-finite input is rejected here too.
    if !(-90.0..=90.0).contains(&coord.lat) {
        return Err(WaqtError::LatitudeOutOfRange { value: coord.lat });
    }
    if !(-180.0..=180.0).contains(&coord.lng) {
        return Err(WaqtError::LongitudeOutOfRange { value: coord.lng });
    }
    Ok(())
}

/// Calculates prayer times for a given civic date and location.
///
/// All times are decimal hours in `[0, 24)` referenced to the Greenwich
/// meridian (solar noon lands at `12 - eqt - lng/15`); no timezone or DST
/// adjustment is applied. Declination and the equation of time come from a
/// single Julian Date anchored at local noon, so the seven outputs are
/// mutually consistent.
///
/// Asr follows the Hanafi convention (shadow length twice the gnomon plus
/// its noon shadow).
///
/// # Errors
/// Rejects out-of-range coordinates before computing anything, and
/// propagates [`WaqtError::SunNeverReachesElevation`] from the hour-angle
/// step for polar dates on which a threshold is never crossed.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use waqt::{GeoCoordinate, PrayerParams};
/// use waqt::astronomy::prayer::calculate_prayer_times;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
/// let mecca = GeoCoordinate::new(21.4225, 39.8262);
/// let times = calculate_prayer_times(date, mecca, &PrayerParams::default()).unwrap();
/// assert!(times.fajr < times.shuruq && times.shuruq < times.dhuhr);
/// ```
pub fn calculate_prayer_times(
    date: NaiveDate,
    coord: GeoCoordinate,
    params: &PrayerParams,
) -> Result<PrayerTimeSet, WaqtError> {
    validate(coord)?;

    let jd = julian_date(date);
    let sun = solar_parameters(jd);

    let noon = frac24(12.0 - sun.equation_of_time - coord.lng / 15.0);

    // Hour angles in hours east/west of solar noon.
    let ha_twilight =
        hour_angle(coord.lat, sun.declination, TWILIGHT_ELEVATION_DEG)?.to_degrees() / 15.0;
    let ha_horizon =
        hour_angle(coord.lat, sun.declination, HORIZON_ELEVATION_DEG)?.to_degrees() / 15.0;

    // Hanafi Asr: elevation at which the shadow is twice the gnomon plus
    // its noon shadow.
    let asr_elevation_deg = (1.0
        / (2.0 + (coord.lat.to_radians() - sun.declination).abs().tan()))
    .atan()
    .to_degrees();
    let ha_asr = hour_angle(coord.lat, sun.declination, asr_elevation_deg)?.to_degrees() / 15.0;

    let sunset = frac24(noon + ha_horizon);

    Ok(PrayerTimeSet {
        fajr: frac24(noon - ha_twilight),
        shuruq: frac24(noon - ha_horizon),
        dhuhr: noon,
        asr: frac24(noon + ha_asr),
        sunset,
        maghrib: frac24(sunset + params.maghrib_offset_minutes / 60.0),
        isha: frac24(noon + ha_twilight),
    })
}

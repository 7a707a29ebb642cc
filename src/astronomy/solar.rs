//! Low-precision solar ephemeris.
//!
//! Closed-form approximation of the sun's apparent position, accurate to a
//! few arc-minutes over the modern era. Good enough for prayer times; not
//! an ephemeris for telescope pointing.

use serde::{Serialize, Deserialize};

use crate::calendar::{J2000_EPOCH, WaqtError};

/// The sun's position parameters for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarParameters {
    /// Angle of the sun above/below the celestial equator, in radians.
    /// Bounded by the obliquity of the ecliptic (about +/-0.409 rad).
    pub declination: f64,
    /// Apparent minus mean solar time, in hours. Always strictly inside
    /// (-12, 12); in practice under +/-0.3.
    pub equation_of_time: f64,
}

/// Reduces an angle in degrees into `[0, 360)`.
pub(crate) fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Reduces decimal hours into `[0, 24)`.
pub(crate) fn frac24(hours: f64) -> f64 {
    hours.rem_euclid(24.0)
}

/// Computes the sun's declination and the equation of time for a Julian
/// Date.
///
/// Position-like quantities (mean anomaly, mean longitude, ecliptic
/// longitude, right ascension) are normalized into `[0, 360)` before any
/// trigonometric use. The equation of time is a small signed *difference*
/// of two already-normalized quantities and is folded into `(-12, 12]` by
/// whole-day steps instead; wrapping it modulo 24 corrupts results near
/// date boundaries.
pub fn solar_parameters(jd: f64) -> SolarParameters {
    let d = jd - J2000_EPOCH;

    // Mean anomaly and mean longitude of the sun.
    let g = normalize_degrees(357.529 + 0.98560028 * d).to_radians();
    let q = normalize_degrees(280.459 + 0.98564736 * d);
    // Ecliptic longitude, corrected for orbital eccentricity.
    let l = normalize_degrees(q + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()).to_radians();

    let epsilon = (23.439 - 0.000_000_36 * d).to_radians();

    let ra_deg = normalize_degrees((epsilon.cos() * l.sin()).atan2(l.cos()).to_degrees());
    let declination = (epsilon.sin() * l.sin()).asin();

    let mut equation_of_time = q / 15.0 - ra_deg / 15.0;
    while equation_of_time > 12.0 {
        equation_of_time -= 24.0;
    }
    while equation_of_time <= -12.0 {
        equation_of_time += 24.0;
    }

    SolarParameters { declination, equation_of_time }
}

/// Computes the hour angle at which the sun reaches `elevation_deg`.
///
/// The result is in radians, in `[0, pi]`: the angular time east or west
/// of solar noon at which the sun crosses the given elevation. Negative
/// elevations denote twilight thresholds below the horizon.
///
/// # Errors
/// Returns [`WaqtError::SunNeverReachesElevation`] when the arc-cosine
/// argument falls outside `[-1, 1]`: at high latitudes the sun may never
/// reach the requested elevation on a given date. The invalid value is
/// surfaced, never clamped or propagated as NaN.
pub fn hour_angle(
    latitude_deg: f64,
    declination: f64,
    elevation_deg: f64,
) -> Result<f64, WaqtError> {
    let lat = latitude_deg.to_radians();
    let elevation = elevation_deg.to_radians();

    let cos_ha =
        (elevation.sin() - lat.sin() * declination.sin()) / (lat.cos() * declination.cos());
    if !(-1.0..=1.0).contains(&cos_ha) {
        return Err(WaqtError::SunNeverReachesElevation {
            latitude: latitude_deg,
            elevation_deg,
        });
    }
    Ok(cos_ha.acos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::julian_date;
    use chrono::NaiveDate;

    #[test]
    fn test_declination_bounded_by_obliquity() {
        let obliquity = 23.45_f64.to_radians();
        for day in 0..730 {
            let sun = solar_parameters(J2000_EPOCH + f64::from(day));
            assert!(
                sun.declination.abs() <= obliquity,
                "declination {} out of bounds on day {}",
                sun.declination,
                day
            );
        }
    }

    #[test]
    fn test_declination_near_solstice() {
        let jd = julian_date(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        let sun = solar_parameters(jd);
        // Within a tenth of a degree of the axial tilt at the June solstice.
        assert!((sun.declination.to_degrees() - 23.44).abs() < 0.1);
    }

    #[test]
    fn test_equation_of_time_small_and_bounded() {
        for day in 0..3660 {
            let sun = solar_parameters(J2000_EPOCH + f64::from(day) + 0.25);
            assert!(sun.equation_of_time > -12.0 && sun.equation_of_time < 12.0);
            // Physically the offset stays under ~17 minutes.
            assert!(sun.equation_of_time.abs() < 0.3);
        }
    }

    #[test]
    fn test_equation_of_time_matches_naive_modulo_path() {
        // The naive rendition wraps the right ascension and the final
        // difference with mod-24 arithmetic. Both paths must describe the
        // same instant modulo a whole day; the folded path is authoritative.
        fn naive_equation_of_time(jd: f64) -> f64 {
            let d = jd - J2000_EPOCH;
            let g = normalize_degrees(357.529 + 0.98560028 * d).to_radians();
            let q = normalize_degrees(280.459 + 0.98564736 * d);
            let l =
                normalize_degrees(q + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()).to_radians();
            let epsilon = (23.439 - 0.000_000_36 * d).to_radians();
            let ra_hours =
                frac24(normalize_degrees((epsilon.cos() * l.sin()).atan2(l.cos()).to_degrees()) / 15.0);
            frac24(q / 15.0 - ra_hours)
        }

        for day in 30..330 {
            let jd = julian_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()) + f64::from(day);
            let folded = solar_parameters(jd).equation_of_time;
            let naive = naive_equation_of_time(jd);
            let diff = (naive - folded).rem_euclid(24.0);
            assert!(
                diff < 1e-6 || diff > 24.0 - 1e-6,
                "paths diverge at jd {}: folded {} naive {}",
                jd,
                folded,
                naive
            );
        }
    }

    #[test]
    fn test_hour_angle_zenith_symmetry() {
        // At the equator on an equinox-like declination of zero, the sun
        // spends six hours either side of noon above the horizon.
        let ha = hour_angle(0.0, 0.0, 0.0).unwrap();
        assert!((ha - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_hour_angle_undefined_in_polar_night() {
        // At 70N near the winter solstice the sun tops out around -3.4
        // degrees: it still crosses the -15 twilight threshold, but never
        // the apparent horizon.
        let jd = julian_date(NaiveDate::from_ymd_opt(2024, 12, 21).unwrap());
        let sun = solar_parameters(jd);
        assert!(hour_angle(70.0, sun.declination, -15.0).is_ok());
        let result = hour_angle(70.0, sun.declination, -0.833);
        assert!(matches!(
            result,
            Err(WaqtError::SunNeverReachesElevation { latitude, .. }) if latitude == 70.0
        ));
    }

    #[test]
    fn test_hour_angle_undefined_in_midnight_sun() {
        // Midsummer at 70N the sun never sets low enough for -15 twilight.
        let jd = julian_date(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        let sun = solar_parameters(jd);
        assert!(hour_angle(70.0, sun.declination, -15.0).is_err());
    }

    #[test]
    fn test_hour_angle_never_nan() {
        let jd = julian_date(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        let sun = solar_parameters(jd);
        for lat in [-89.0, -70.0, 0.0, 70.0, 89.0] {
            match hour_angle(lat, sun.declination, -15.0) {
                Ok(ha) => {
                    assert!(ha.is_finite());
                    assert!((0.0..=std::f64::consts::PI).contains(&ha));
                }
                Err(WaqtError::SunNeverReachesElevation { .. }) => {}
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }
    }
}

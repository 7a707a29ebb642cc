use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// The Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_EPOCH: f64 = 2451545.0;

/// Errors from waqt operations.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum WaqtError {
    /// Date string that does not parse as `YYYY-MM-DD`.
    #[error("Invalid date string {input:?}, expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// Latitude outside [-90, 90] degrees.
    #[error("Latitude {value} is outside [-90, 90] degrees")]
    LatitudeOutOfRange { value: f64 },

    /// Longitude outside [-180, 180] degrees.
    #[error("Longitude {value} is outside [-180, 180] degrees")]
    LongitudeOutOfRange { value: f64 },

    /// The sun never reaches the requested elevation on this date at this
    /// latitude (polar night / midnight sun regimes).
    #[error("Sun never reaches elevation {elevation_deg} deg at latitude {latitude} deg on this date")]
    SunNeverReachesElevation { latitude: f64, elevation_deg: f64 },
}

impl WaqtError {
    /// Creates an `InvalidDate` error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate { input: input.into() }
    }
}

/// Parses a `YYYY-MM-DD` civic date string.
///
/// The string carries no time or zone; waqt interprets it as the local
/// civic date and anchors all solar arithmetic at local noon of that date.
///
/// # Errors
/// Returns `InvalidDate` if the string does not parse.
pub fn parse_date(input: &str) -> Result<NaiveDate, WaqtError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| WaqtError::invalid_date(input))
}

/// Converts a civic date to the Julian Date of its local noon.
///
/// Uses the Meeus Gregorian-calendar algorithm. The result is anchored at
/// noon, so `2000-01-01` maps exactly onto [`J2000_EPOCH`]; the solar
/// parameters derived from it correspond to local solar noon of the date.
/// Callers depend on this anchoring: shifting it shifts every output time
/// by the same day fraction.
pub fn julian_date(date: NaiveDate) -> f64 {
    let mut year = f64::from(date.year());
    let mut month = f64::from(date.month());
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    let jd_midnight = (365.25 * (year + 4716.0)).floor()
        + (30.6001 * (month + 1.0)).floor()
        + f64::from(date.day())
        + b
        - 1524.5;
    jd_midnight + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_epoch_is_noon() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(julian_date(date), J2000_EPOCH);
    }

    #[test]
    fn test_known_julian_dates() {
        // Noon-anchored values for dates on both sides of a leap day.
        let solstice = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        assert_eq!(julian_date(solstice), 2460483.0);
        let jan = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let mar = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(julian_date(mar) - julian_date(jan), 30.0);
    }

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("2024-06-21").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(
            parse_date("21/06/2024"),
            Err(WaqtError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_date("2024-13-01"),
            Err(WaqtError::InvalidDate { .. })
        ));
        assert!(parse_date("").is_err());
    }
}

use serde::{Serialize, Deserialize};
use std::fmt;

/// Geographic position of the observer in degrees (east-positive longitude).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl GeoCoordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The seven named daily times, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Shuruq,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 7] = [
        Prayer::Fajr,
        Prayer::Shuruq,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Sunset,
        Prayer::Maghrib,
        Prayer::Isha,
    ];
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Prayer::Fajr => "Fajr",
            Prayer::Shuruq => "Shuruq",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Sunset => "Sunset",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        };
        write!(f, "{}", s)
    }
}

/// Prayer times for one date and location, as decimal hours in `[0, 24)`.
///
/// All seven fields are always populated; a date/location pair for which
/// any time is undefined fails as a whole with
/// [`WaqtError::SunNeverReachesElevation`](crate::WaqtError::SunNeverReachesElevation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrayerTimeSet {
    pub fajr: f64,
    pub shuruq: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub sunset: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl PrayerTimeSet {
    /// Returns the time for a single prayer.
    pub fn get(&self, prayer: Prayer) -> f64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Shuruq => self.shuruq,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Sunset => self.sunset,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Iterates over the seven times in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, f64)> + '_ {
        Prayer::ALL.iter().map(move |&p| (p, self.get(p)))
    }
}

impl fmt::Display for PrayerTimeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (prayer, time) in self.iter() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}: {}", prayer, format_time24(time))?;
            first = false;
        }
        Ok(())
    }
}

/// Formats decimal hours as a 24h clock string, rounded to the minute.
pub fn format_time24(time: f64) -> String {
    // Half a minute forward so truncation rounds to the nearest minute.
    let time = (time + 0.5 / 60.0).rem_euclid(24.0);
    let hours = time.floor();
    let minutes = ((time - hours) * 60.0).floor();
    format!("{:02}:{:02}", hours as u32, minutes as u32)
}

/// Tunable calculation parameters.
///
/// The Maghrib offset is a provisional stand-in for a jurisprudential
/// definition and is therefore kept overridable rather than hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrayerParams {
    /// Minutes after sunset at which Maghrib begins.
    pub maghrib_offset_minutes: f64,
}

/// Default Maghrib delay after sunset, in minutes.
pub const DEFAULT_MAGHRIB_OFFSET_MINUTES: f64 = 3.0;

impl PrayerParams {
    pub fn new(maghrib_offset_minutes: f64) -> Self {
        Self { maghrib_offset_minutes }
    }

    /// Builder-style override of the Maghrib offset.
    pub fn maghrib_offset_minutes(mut self, minutes: f64) -> Self {
        self.maghrib_offset_minutes = minutes;
        self
    }
}

impl Default for PrayerParams {
    fn default() -> Self {
        Self { maghrib_offset_minutes: DEFAULT_MAGHRIB_OFFSET_MINUTES }
    }
}

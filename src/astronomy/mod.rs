//! Solar-position astronomy: ephemeris approximation and the hour-angle
//! pipeline that turns it into named prayer times.

pub mod prayer;
pub mod solar;

pub use prayer::calculate_prayer_times;
pub use solar::{SolarParameters, hour_angle, solar_parameters};

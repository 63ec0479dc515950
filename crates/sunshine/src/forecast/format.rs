//! Unit-aware formatting of temperatures and wind.
//!
//! Forecast values are stored in metric units (Celsius, km/h) and converted
//! only for presentation.

use crate::settings::Units;

/// Degree sign appended to temperatures.
pub const DEGREE_SIGN: char = '\u{00B0}';

const KMH_TO_MPH: f64 = 0.621371192237334;

/// Converts Celsius to Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Rounds to a whole number, halves away from zero (`{:.0}` rounds them to even).
fn whole(value: f64) -> f64 {
    value.round()
}

/// Formats a temperature given in Celsius, e.g. `"21°"`.
///
/// Tenths of a degree are dropped; 22.5 shows as 23.
pub fn format_temperature(celsius: f64, units: Units) -> String {
    let value = match units {
        Units::Metric => celsius,
        Units::Imperial => celsius_to_fahrenheit(celsius),
    };
    format!("{}{DEGREE_SIGN}", whole(value))
}

/// Formats a high/low pair, e.g. `"24° / 13°"`.
pub fn format_high_low(high_celsius: f64, low_celsius: f64, units: Units) -> String {
    format!(
        "{} / {}",
        format_temperature(high_celsius, units),
        format_temperature(low_celsius, units)
    )
}

/// Returns the 8-point compass direction for a bearing in degrees.
///
/// North covers everything at or above 337.5 and everything below 22.5,
/// including negative bearings. NaN yields `"Unknown"`.
pub fn compass_direction(degrees: f64) -> &'static str {
    if degrees.is_nan() {
        return "Unknown";
    }
    if degrees >= 337.5 || degrees < 22.5 {
        return "N";
    }
    const SECTORS: [&str; 7] = ["NE", "E", "SE", "S", "SW", "W", "NW"];
    SECTORS[((degrees - 22.5) / 45.0) as usize]
}

/// Formats wind speed (given in km/h) and bearing, e.g. `"Wind: 12 km/h NW"`.
pub fn format_wind(speed_kmh: f64, degrees: f64, units: Units) -> String {
    let direction = compass_direction(degrees);
    match units {
        Units::Metric => format!("Wind: {} km/h {direction}", whole(speed_kmh)),
        Units::Imperial => format!("Wind: {} mph {direction}", whole(speed_kmh * KMH_TO_MPH)),
    }
}

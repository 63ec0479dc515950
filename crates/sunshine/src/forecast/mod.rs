//! Forecast presentation helpers.
//!
//! Pure functions that turn stored forecast values into display text:
//! condition categories and asset names, unit-aware temperature and wind
//! strings, friendly day labels and weather alert text.

pub mod alert;
pub mod condition;
pub mod dates;
pub mod format;

pub use alert::WeatherAlert;
pub use condition::{WeatherCondition, describe};
pub use dates::{day_name, friendly_day, full_friendly_day, month_day};
pub use format::{compass_direction, format_high_low, format_temperature, format_wind};

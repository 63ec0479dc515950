//! Weather alert text from push message payloads.
//!
//! Only the text is produced here; delivering it to the user is left to the
//! embedding application.

use std::collections::HashMap;
use std::fmt;

use sunshine_core::logging::targets;

use crate::settings::DisplaySettings;

/// Payload key holding the weather description.
pub const WEATHER_KEY: &str = "weather";

/// Payload key holding the location name.
pub const LOCATION_KEY: &str = "location";

/// Title shown above alert text.
pub const ALERT_TITLE: &str = "Weather Alert!";

/// A weather alert ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherAlert {
    weather: String,
    location: String,
}

impl WeatherAlert {
    /// Creates an alert directly.
    pub fn new(weather: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            weather: weather.into(),
            location: location.into(),
        }
    }

    /// Builds an alert from a push message.
    ///
    /// Returns `None` when no sender is configured, when `from` is not the
    /// configured sender, or when the payload lacks either key.
    pub fn from_message(
        from: &str,
        data: &HashMap<String, String>,
        settings: &DisplaySettings,
    ) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        let Some(sender) = settings.alert_sender_id.as_deref() else {
            tracing::warn!(target: targets::FORECAST, "alert sender id is not configured, ignoring message");
            return None;
        };
        if sender != from {
            tracing::debug!(target: targets::FORECAST, from, "ignoring message from unknown sender");
            return None;
        }

        match (data.get(WEATHER_KEY), data.get(LOCATION_KEY)) {
            (Some(weather), Some(location)) => Some(Self::new(weather.as_str(), location.as_str())),
            _ => {
                tracing::debug!(
                    target: targets::FORECAST,
                    keys = ?data.keys().collect::<Vec<_>>(),
                    "alert payload is missing weather or location"
                );
                None
            }
        }
    }

    /// The weather description.
    pub fn weather(&self) -> &str {
        &self.weather
    }

    /// The location name.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Alert title.
    pub fn title(&self) -> &'static str {
        ALERT_TITLE
    }

    /// Alert body, e.g. `"Heads up: Hail in Denver!"`.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WeatherAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Heads up: {} in {}!", self.weather, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> DisplaySettings {
        DisplaySettings {
            alert_sender_id: Some("sender-42".to_string()),
            ..DisplaySettings::default()
        }
    }

    fn payload(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_alert_from_configured_sender() {
        let data = payload(&[("weather", "Hail"), ("location", "Denver")]);
        let alert = WeatherAlert::from_message("sender-42", &data, &settings()).unwrap();

        assert_eq!(alert.weather(), "Hail");
        assert_eq!(alert.location(), "Denver");
        assert_eq!(alert.title(), "Weather Alert!");
        assert_eq!(alert.text(), "Heads up: Hail in Denver!");
    }

    #[test]
    fn test_alert_from_other_sender_ignored() {
        let data = payload(&[("weather", "Hail"), ("location", "Denver")]);
        assert_eq!(WeatherAlert::from_message("someone-else", &data, &settings()), None);
    }

    #[test]
    fn test_alert_without_sender_config_ignored() {
        let data = payload(&[("weather", "Hail"), ("location", "Denver")]);
        let settings = DisplaySettings::default();
        assert_eq!(WeatherAlert::from_message("sender-42", &data, &settings), None);
    }

    #[test]
    fn test_incomplete_payload_ignored() {
        let settings = settings();
        assert_eq!(WeatherAlert::from_message("sender-42", &HashMap::new(), &settings), None);

        let data = payload(&[("weather", "Hail")]);
        assert_eq!(WeatherAlert::from_message("sender-42", &data, &settings), None);
    }
}

//! Display preferences.
//!
//! [`DisplaySettings`] holds the user-facing preferences that influence how
//! forecasts are presented: the location string, the unit system, and the
//! artwork pack. Settings are read from TOML; every field has a default so a
//! partial (or empty) file is valid.
//!
//! ```ignore
//! use sunshine::settings::DisplaySettings;
//!
//! let settings = DisplaySettings::load("sunshine.toml")?;
//! if settings.units.is_metric() {
//!     // ...
//! }
//! ```
//!
//! # File format
//!
//! ```toml
//! location = "Mountain View, CA"
//! units = "imperial"
//! art_pack = "https://example.com/art/%s.png"
//! min_location_length = 2
//! alert_sender_id = "1234567890"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use sunshine_core::logging::targets;

use crate::error::{SettingsError, SettingsResult};
use crate::forecast::WeatherCondition;

/// Art pack value meaning "use the bundled artwork".
pub const LOCAL_ART_PACK: &str = "sunshine";

/// Placeholder in an art pack URL template replaced by the art name.
pub const ART_NAME_PLACEHOLDER: &str = "%s";

/// Default location preference.
pub const DEFAULT_LOCATION: &str = "94043";

/// Unit system for temperatures and wind speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius and km/h. Forecast data is stored in these units.
    #[default]
    Metric,
    /// Fahrenheit and mph.
    Imperial,
}

impl Units {
    /// Returns `true` for [`Units::Metric`].
    pub fn is_metric(self) -> bool {
        self == Self::Metric
    }
}

/// User display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Location query (city name or postal code).
    pub location: String,
    /// Unit system used when formatting values.
    pub units: Units,
    /// Either [`LOCAL_ART_PACK`] or a URL template containing `%s`.
    pub art_pack: String,
    /// Minimum number of characters for an acceptable location.
    pub min_location_length: usize,
    /// Sender that weather alerts must come from. Alerts are ignored when unset.
    pub alert_sender_id: Option<String>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            units: Units::Metric,
            art_pack: LOCAL_ART_PACK.to_string(),
            min_location_length: 2,
            alert_sender_id: None,
        }
    }
}

impl DisplaySettings {
    /// Parses and validates settings from TOML text.
    pub fn from_toml_str(text: &str) -> SettingsResult<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;
        let settings = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: targets::SETTINGS,
            path = %path.display(),
            units = ?settings.units,
            local_art = settings.using_local_graphics(),
            "display settings loaded"
        );
        Ok(settings)
    }

    /// Checks field values that the TOML schema alone cannot enforce.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.min_location_length == 0 {
            return Err(SettingsError::invalid(
                "min_location_length",
                "must be at least 1",
            ));
        }
        if !self.accepts_location(&self.location) {
            return Err(SettingsError::invalid(
                "location",
                format!(
                    "must have at least {} characters",
                    self.min_location_length
                ),
            ));
        }
        if !self.using_local_graphics() && !self.art_pack.contains(ART_NAME_PLACEHOLDER) {
            return Err(SettingsError::invalid(
                "art_pack",
                format!("expected '{LOCAL_ART_PACK}' or a URL template containing '{ART_NAME_PLACEHOLDER}'"),
            ));
        }
        if self
            .alert_sender_id
            .as_deref()
            .is_some_and(|id| id.trim().is_empty())
        {
            return Err(SettingsError::invalid("alert_sender_id", "must not be blank"));
        }
        Ok(())
    }

    /// Returns `true` if `location` is long enough to be accepted as the
    /// location preference.
    pub fn accepts_location(&self, location: &str) -> bool {
        location.trim().chars().count() >= self.min_location_length
    }

    /// Returns `true` when the bundled artwork should be used.
    pub fn using_local_graphics(&self) -> bool {
        self.art_pack == LOCAL_ART_PACK
    }

    /// Returns the artwork URL for `condition`, or `None` when the bundled
    /// artwork is in use.
    pub fn art_url(&self, condition: WeatherCondition) -> Option<String> {
        if self.using_local_graphics() {
            return None;
        }
        Some(self.art_pack.replace(ART_NAME_PLACEHOLDER, condition.art_name()))
    }
}

static_assertions::assert_impl_all!(DisplaySettings: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.location, "94043");
        assert!(settings.units.is_metric());
        assert!(settings.using_local_graphics());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = DisplaySettings::from_toml_str("").unwrap();
        assert_eq!(settings, DisplaySettings::default());
    }

    #[test]
    fn test_partial_file() {
        let settings = DisplaySettings::from_toml_str(
            r#"
            units = "imperial"
            art_pack = "https://cdn.example.com/%s.png"
            "#,
        )
        .unwrap();

        assert_eq!(settings.units, Units::Imperial);
        assert_eq!(settings.location, DEFAULT_LOCATION);
        assert_eq!(
            settings.art_url(WeatherCondition::LightClouds).as_deref(),
            Some("https://cdn.example.com/light_clouds.png")
        );
    }

    #[test]
    fn test_local_graphics_have_no_url() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.art_url(WeatherCondition::Storm), None);
    }

    #[test]
    fn test_unknown_units_rejected() {
        let err = DisplaySettings::from_toml_str(r#"units = "kelvin""#).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_art_pack_without_placeholder_rejected() {
        let err = DisplaySettings::from_toml_str(r#"art_pack = "https://example.com/a.png""#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { ref field, .. } if field == "art_pack"));
    }

    #[test]
    fn test_short_location_rejected() {
        let err = DisplaySettings::from_toml_str(r#"location = " x ""#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { ref field, .. } if field == "location"));
    }

    #[test]
    fn test_blank_alert_sender_rejected() {
        let err = DisplaySettings::from_toml_str(r#"alert_sender_id = "  ""#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { ref field, .. } if field == "alert_sender_id"));
    }

    #[test]
    fn test_accepts_location() {
        let settings = DisplaySettings {
            min_location_length: 3,
            ..DisplaySettings::default()
        };
        assert!(settings.accepts_location("Oslo"));
        assert!(settings.accepts_location("  NYC "));
        assert!(!settings.accepts_location("LA"));
        assert!(!settings.accepts_location(""));
    }
}

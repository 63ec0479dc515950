//! Weather conditions from OpenWeatherMap condition codes.

use serde::{Deserialize, Serialize};

/// Weather condition categories used to pick icons and artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Storm,
    LightRain,
    Rain,
    Snow,
    Fog,
    Clear,
    LightClouds,
    Clouds,
}

impl WeatherCondition {
    /// All conditions, in code order.
    pub const ALL: [WeatherCondition; 8] = [
        Self::Storm,
        Self::LightRain,
        Self::Rain,
        Self::Snow,
        Self::Fog,
        Self::Clear,
        Self::LightClouds,
        Self::Clouds,
    ];

    /// Maps an OpenWeatherMap condition code to a category.
    ///
    /// See <https://openweathermap.org/weather-conditions>. Returns `None`
    /// for codes without artwork (762, 771, the 9xx extreme/additional
    /// groups, and anything unassigned).
    pub fn from_owm_id(id: i32) -> Option<Self> {
        let condition = match id {
            200..=232 => Self::Storm,
            300..=321 => Self::LightRain,
            500..=504 => Self::Rain,
            511 => Self::Snow,
            520..=531 => Self::Rain,
            600..=622 => Self::Snow,
            701..=761 => Self::Fog,
            781 => Self::Storm,
            800 => Self::Clear,
            801 => Self::LightClouds,
            802..=804 => Self::Clouds,
            _ => return None,
        };
        Some(condition)
    }

    /// Name of the small list icon for this condition.
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Storm => "ic_storm",
            Self::LightRain => "ic_light_rain",
            Self::Rain => "ic_rain",
            Self::Snow => "ic_snow",
            Self::Fog => "ic_fog",
            Self::Clear => "ic_clear",
            Self::LightClouds => "ic_light_clouds",
            Self::Clouds => "ic_cloudy",
        }
    }

    /// Name of the large artwork for this condition, also used in art pack
    /// URL templates.
    pub fn art_name(self) -> &'static str {
        match self {
            Self::Storm => "storm",
            Self::LightRain => "light_rain",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Fog => "fog",
            Self::Clear => "clear",
            Self::LightClouds => "light_clouds",
            Self::Clouds => "clouds",
        }
    }
}

/// Returns the human-readable description of a condition code, if known.
pub fn description(id: i32) -> Option<&'static str> {
    let text = match id {
        200..=232 => "Storm",
        300..=321 => "Drizzle",
        500 => "Light Rain",
        501 => "Moderate Rain",
        502 => "Heavy Rain",
        503 => "Intense Rain",
        504 => "Extreme Rain",
        511 => "Freezing Rain",
        520 => "Light Shower",
        531 => "Ragged Shower",
        600 => "Light Snow",
        601 => "Snow",
        602 => "Heavy Snow",
        611 => "Sleet",
        612 => "Shower Sleet",
        615 => "Light Rain and Snow",
        616 => "Rain and Snow",
        620 => "Light Shower Snow",
        621 => "Shower Snow",
        622 => "Heavy Shower Snow",
        701 => "Mist",
        711 => "Smoke",
        721 => "Haze",
        731 => "Sand, Dust",
        741 => "Fog",
        751 => "Sand",
        761 => "Dust",
        762 => "Volcanic Ash",
        771 => "Squalls",
        781 => "Tornado",
        800 => "Clear",
        801 => "Mostly Clear",
        802 => "Scattered Clouds",
        803 => "Broken Clouds",
        804 => "Overcast Clouds",
        900 => "Tornado",
        901 => "Tropical Storm",
        902 => "Hurricane",
        903 => "Cold",
        904 => "Hot",
        905 => "Windy",
        906 => "Hail",
        951 => "Calm",
        952 => "Light Breeze",
        953 => "Gentle Breeze",
        954 => "Breeze",
        955 => "Fresh Breeze",
        956 => "Strong Breeze",
        957 => "High Wind",
        958 => "Gale",
        959 => "Severe Gale",
        960 => "Storm",
        961 => "Violent Storm",
        962 => "Hurricane",
        _ => return None,
    };
    Some(text)
}

/// Returns the description of a condition code, or `"Unknown (<id>)"`.
pub fn describe(id: i32) -> String {
    description(id).map_or_else(|| format!("Unknown ({id})"), str::to_string)
}

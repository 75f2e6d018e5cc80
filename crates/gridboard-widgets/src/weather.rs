#![forbid(unsafe_code)]

//! Weather view with simulated readings.

use std::fmt;

use crate::rng::SeededRng;

/// Sky condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Condition {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    PartlyCloudy,
}

impl Condition {
    /// Glyph shown next to the temperature.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Sunny => "☀️",
            Self::Cloudy => "☁️",
            Self::Rainy => "🌧️",
            Self::PartlyCloudy => "🌤️",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::PartlyCloudy => "Partly Cloudy",
        })
    }
}

/// Temperature range drawn on refresh, in °C.
pub const TEMPERATURE_RANGE: (u32, u32) = (18, 33);
/// Humidity range drawn on refresh, in percent.
pub const HUMIDITY_RANGE: (u32, u32) = (50, 90);
/// Wind range drawn on refresh, in km/h.
pub const WIND_RANGE: (u32, u32) = (5, 25);

/// Current weather reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReading {
    pub temperature_c: i32,
    pub condition: Condition,
    pub humidity_pct: u32,
    pub wind_kmh: u32,
}

impl Default for WeatherReading {
    fn default() -> Self {
        Self {
            temperature_c: 22,
            condition: Condition::Sunny,
            humidity_pct: 65,
            wind_kmh: 12,
        }
    }
}

impl WeatherReading {
    /// Draw fresh temperature, humidity and wind. The condition is kept.
    pub fn refresh(&mut self, rng: &mut SeededRng) {
        let (lo, hi) = TEMPERATURE_RANGE;
        self.temperature_c = i32::try_from(rng.next_inclusive(lo, hi)).unwrap_or(22);
        self.humidity_pct = rng.next_inclusive(HUMIDITY_RANGE.0, HUMIDITY_RANGE.1);
        self.wind_kmh = rng.next_inclusive(WIND_RANGE.0, WIND_RANGE.1);
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("{} {}°C", self.condition.icon(), self.temperature_c),
            self.condition.to_string(),
            format!("Humidity {}%", self.humidity_pct),
            format!("Wind {} km/h", self.wind_kmh),
        ]
    }
}

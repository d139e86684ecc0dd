use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

pub const FORECAST_DAYS: usize = 5;

/// Current conditions as reported for a location.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Stormy,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::PartlyCloudy,
        Condition::Stormy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Stormy => "Stormy",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Sunny => "☀️",
            Condition::Cloudy => "☁️",
            Condition::Rainy => "🌧️",
            Condition::PartlyCloudy => "⛅",
            Condition::Stormy => "⛈️",
        }
    }
}

impl Distribution<Condition> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Condition {
        Condition::ALL[rng.random_range(0..Condition::ALL.len())]
    }
}

/// Conditions a forecast day can take. Storms are only ever reported for the
/// current conditions.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum ForecastCondition {
    Sunny,
    Cloudy,
    Rainy,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
}

impl ForecastCondition {
    pub const ALL: [ForecastCondition; 4] = [
        ForecastCondition::Sunny,
        ForecastCondition::Cloudy,
        ForecastCondition::Rainy,
        ForecastCondition::PartlyCloudy,
    ];

    pub fn label(&self) -> &'static str {
        Condition::from(*self).label()
    }

    pub fn icon(&self) -> &'static str {
        Condition::from(*self).icon()
    }
}

impl From<ForecastCondition> for Condition {
    fn from(condition: ForecastCondition) -> Self {
        match condition {
            ForecastCondition::Sunny => Condition::Sunny,
            ForecastCondition::Cloudy => Condition::Cloudy,
            ForecastCondition::Rainy => Condition::Rainy,
            ForecastCondition::PartlyCloudy => Condition::PartlyCloudy,
        }
    }
}

impl Distribution<ForecastCondition> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ForecastCondition {
        ForecastCondition::ALL[rng.random_range(0..ForecastCondition::ALL.len())]
    }
}

/// Day label of a forecast entry. The label is bound to the position in the
/// forecast, not to the calendar.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    pub const ALL: [Weekday; FORECAST_DAYS] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct ForecastDay {
    pub day: Weekday,
    pub high: i32,
    pub low: i32,
    pub condition: ForecastCondition,
}

/// Coordinates exactly as they were given in the request. They are never
/// parsed as numbers.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Coordinates {
    pub lat: String,
    pub lon: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub city: String,
    pub temperature: i32,
    pub condition: Condition,
    pub humidity: u8,
    /// km/h
    pub wind_speed: u8,
    pub feels_like: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub forecast: [ForecastDay; FORECAST_DAYS],
}

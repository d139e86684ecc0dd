use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::weather::{Coordinates, ForecastDay, WeatherRecord, Weekday};

pub const TEMPERATURE_RANGE: RangeInclusive<i32> = 10..=39;
pub const FEELS_LIKE_RANGE: RangeInclusive<i32> = 10..=39;
pub const HUMIDITY_RANGE: RangeInclusive<u8> = 40..=79;
pub const WIND_SPEED_RANGE: RangeInclusive<u8> = 5..=24;
pub const FORECAST_HIGH_RANGE: RangeInclusive<i32> = 20..=34;
pub const FORECAST_LOW_RANGE: RangeInclusive<i32> = 10..=19;

pub const CURRENT_LOCATION: &str = "Current Location";

/// Generates a record for a free-text city name.
///
/// The name is only capitalized, see [`capitalize_first`].
pub fn generate_for_city<R: Rng + ?Sized>(rng: &mut R, city: &str) -> WeatherRecord {
    generate(rng, capitalize_first(city), None)
}

/// Generates a record for a coordinate lookup. The coordinates are echoed
/// back untouched.
pub fn generate_for_coordinates<R: Rng + ?Sized>(
    rng: &mut R,
    lat: &str,
    lon: &str,
) -> WeatherRecord {
    let coordinates = Coordinates {
        lat: lat.to_string(),
        lon: lon.to_string(),
    };
    generate(rng, CURRENT_LOCATION.to_string(), Some(coordinates))
}

/// Upper-cases the first character and leaves the rest as it is, so
/// `"neW york"` becomes `"NeW york"`.
pub fn capitalize_first(city: &str) -> String {
    let mut chars = city.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    city: String,
    coordinates: Option<Coordinates>,
) -> WeatherRecord {
    WeatherRecord {
        city,
        temperature: rng.random_range(TEMPERATURE_RANGE),
        condition: rng.random(),
        humidity: rng.random_range(HUMIDITY_RANGE),
        wind_speed: rng.random_range(WIND_SPEED_RANGE),
        feels_like: rng.random_range(FEELS_LIKE_RANGE),
        coordinates,
        forecast: Weekday::ALL.map(|day| ForecastDay {
            day,
            high: rng.random_range(FORECAST_HIGH_RANGE),
            low: rng.random_range(FORECAST_LOW_RANGE),
            condition: rng.random(),
        }),
    }
}

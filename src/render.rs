use crate::models::weather::WeatherRecord;

/// Renders a record as plain text for a terminal.
pub fn render_record(record: &WeatherRecord) -> String {
    let mut lines = vec![record.city.clone()];
    if let Some(coordinates) = &record.coordinates {
        lines.push(format!("{}, {}", coordinates.lat, coordinates.lon));
    }
    lines.push(format!(
        "{} {}° {}",
        record.condition.icon(),
        record.temperature,
        record.condition.label()
    ));
    lines.push(format!("Feels like {}°", record.feels_like));
    lines.push(format!(
        "Humidity {}%  Wind Speed {} km/h",
        record.humidity, record.wind_speed
    ));
    lines.push(String::new());
    lines.push("5-Day Forecast".to_string());
    lines.extend(record.forecast.iter().map(|day| {
        format!(
            "{} {} {:>3}° {:>3}°  {}",
            day.day.label(),
            day.condition.icon(),
            day.high,
            day.low,
            day.condition.label()
        )
    }));
    lines.join("\n")
}

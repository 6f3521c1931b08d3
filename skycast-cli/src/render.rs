//! Human-friendly output formatting for the held weather model.
//!
//! Both reports are pure functions from the model to text; floats are fixed
//! at one decimal place, integer fields stay bare.

use skycast_core::Weather;

pub fn current_report(weather: &Weather) -> String {
    format!(
        "\n=== Current Weather in {}, {} ===\n\
         Temperature: {:.1}°C\n\
         Condition: {}\n\
         Humidity: {}%\n\
         Wind: {:.1} km/h from {}\n",
        weather.location.name,
        weather.location.country,
        weather.current.temperature_c,
        weather.current.condition,
        weather.current.humidity_pct,
        weather.current.wind_kph,
        weather.current.wind_dir,
    )
}

pub fn forecast_report(weather: &Weather) -> String {
    let mut report = format!("\n=== Weather Forecast for {} ===\n", weather.location.name);

    for day in &weather.forecast {
        report.push_str(&format!("\nDate: {}\n", day.date));
        report.push_str(&format!("  Max Temperature: {:.1}°C\n", day.max_temp_c));
        report.push_str(&format!("  Min Temperature: {:.1}°C\n", day.min_temp_c));
        report.push_str(&format!("  Condition: {}\n", day.condition));
        report.push_str(&format!("  Max Wind: {:.1} km/h\n", day.max_wind_kph));
        report.push_str(&format!("  Precipitation: {:.1} mm\n", day.total_precip_mm));
        report.push_str(&format!("  Average Humidity: {:.1}%\n", day.avg_humidity_pct));
    }

    report
}

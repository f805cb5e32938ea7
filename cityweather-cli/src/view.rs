//! Pure mapping from search session state to terminal output.

use chrono::NaiveDate;
use cityweather_core::{Config, SearchSession, WeatherReport};

/// Placeholder shown in the interactive search prompt.
pub const SEARCH_PLACEHOLDER: &str = "Search by City, Country Code";

const LOADING_INDICATOR: &str = "Loading...";

/// Render the session as it stands right now.
pub fn render(session: &SearchSession, config: &Config) -> String {
    snapshot(
        session.report(),
        session.is_loading(),
        chrono::Local::now().date_naive(),
        config,
    )
}

/// Render one snapshot of display state. The date is passed in so output
/// is reproducible.
///
/// Line order follows the widget layout: date, place, icon, condition,
/// current temperature, highs, lows, loading indicator, error message.
/// Absent fields render as gaps (their line is omitted).
pub fn snapshot(
    report: Option<&WeatherReport>,
    loading: bool,
    date: NaiveDate,
    config: &Config,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    // The date renders unconditionally.
    lines.push(date.format("%-m/%-d/%Y").to_string());

    if let Some(report) = report {
        if let Some(location) = report.location_label() {
            lines.push(location);
        }
        if let Some(icon) = report.icon.as_deref() {
            lines.push(config.icon_image_url(icon));
        }
        if let Some(weather) = report.weather.as_deref() {
            lines.push(capitalize(weather));
        }
        if let Some(line) = temp_line(report.temp, "") {
            lines.push(line);
        }
        if let Some(line) = temp_line(report.temp_max, "Max: ") {
            lines.push(line);
        }
        if let Some(line) = temp_line(report.temp_min, "Min: ") {
            lines.push(line);
        }
    }

    if loading {
        lines.push(LOADING_INDICATOR.to_string());
    }

    if let Some(message) = report.and_then(WeatherReport::error_message) {
        lines.push(message.to_string());
    }

    lines.join("\n")
}

/// "16°C": rounded to the nearest whole degree, or nothing when absent.
/// Each temperature field rounds independently.
fn temp_line(temp: Option<f64>, prefix: &str) -> Option<String> {
    temp.map(|t| format!("{prefix}{}°C", t.round() as i64))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

use serde::{Deserialize, Serialize};

/// The full shape of data received from the backend for one query.
///
/// Every field is optional at the wire level: the backend omits what it
/// does not know, and absent fields surface as display gaps rather than
/// errors. A report is replaced wholesale on each new query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub name: Option<String>,
    pub country: Option<String>,
    pub weather: Option<String>,
    pub icon: Option<String>,
    pub temp: Option<f64>,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub error: Option<String>,
}

impl WeatherReport {
    /// Placeholder stored when a fetch attempt fails outright: every
    /// display field absent except the failure message.
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Error text to surface, if any. Empty strings count as no error.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|msg| !msg.is_empty())
    }

    /// "London, GB": the place name with the region label appended when
    /// both are present, just the place name otherwise.
    pub fn location_label(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        Some(match self.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{name}, {country}"),
            _ => name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_response() {
        let json = r#"{
            "name": "London", "country": "GB", "weather": "Clear",
            "icon": "01d", "temp": 15.6, "temp_max": 18.2, "temp_min": 12.1
        }"#;

        let report: WeatherReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.name.as_deref(), Some("London"));
        assert_eq!(report.temp, Some(15.6));
        assert_eq!(report.error, None);
    }

    #[test]
    fn absent_fields_are_gaps_not_errors() {
        let report: WeatherReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report, WeatherReport::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let report: WeatherReport =
            serde_json::from_str(r#"{"name": "Oslo", "pressure": 1013}"#).unwrap();
        assert_eq!(report.name.as_deref(), Some("Oslo"));
    }

    #[test]
    fn location_label_joins_name_and_country() {
        let report: WeatherReport =
            serde_json::from_str(r#"{"name": "London", "country": "GB"}"#).unwrap();
        assert_eq!(report.location_label().as_deref(), Some("London, GB"));
    }

    #[test]
    fn location_label_without_country() {
        let report: WeatherReport = serde_json::from_str(r#"{"name": "Tokyo"}"#).unwrap();
        assert_eq!(report.location_label().as_deref(), Some("Tokyo"));
        assert_eq!(WeatherReport::default().location_label(), None);
    }

    #[test]
    fn from_error_populates_only_the_message() {
        let report = WeatherReport::from_error("city not found");
        assert_eq!(report.error_message(), Some("city not found"));
        assert_eq!(report.temp, None);
        assert_eq!(report.name, None);
    }

    #[test]
    fn empty_error_string_is_not_an_error() {
        let report: WeatherReport = serde_json::from_str(r#"{"error": ""}"#).unwrap();
        assert_eq!(report.error_message(), None);
    }
}

use serde::Deserialize;

/// Image host the embed thumbnails have always pointed at.
const ICON_BASE: &str = "http://openweathermap.org/img/wn";

/// The slice of OpenWeatherMap's current-weather payload we care about.
///
/// <https://openweathermap.org/current> documents the full shape; everything
/// else in the response is ignored.
#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    pub main: Measurements,
    pub weather: Vec<Condition>,
    pub rain: Option<Rain>,
}

#[derive(Debug, Deserialize)]
pub struct Measurements {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

/// Rain volume block. OpenWeatherMap omits the whole object when there was
/// no rain, and may also omit the `1h` key inside it.
#[derive(Debug, Deserialize)]
pub struct Rain {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
}

/// Request-scoped view of a provider response, flattened for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub description: String,
    pub icon: String,
    /// Rain volume over the last hour in millimeters, 0 when the provider
    /// sent no rain data.
    pub rain_1h_mm: f64,
}

impl WeatherReport {
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE}/{}.png", self.icon)
    }
}

impl CurrentWeather {
    /// Flatten into a [`WeatherReport`].
    ///
    /// Returns `None` when the `weather` array is empty, which the API never
    /// sends for a successful lookup; callers treat that as a malformed
    /// payload.
    pub fn into_report(self) -> Option<WeatherReport> {
        let condition = self.weather.into_iter().next()?;

        Some(WeatherReport {
            temperature_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            humidity_pct: self.main.humidity,
            description: condition.description,
            icon: condition.icon,
            rain_1h_mm: self.rain.and_then(|rain| rain.one_hour).unwrap_or(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> CurrentWeather {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn deserializes_a_typical_response() {
        let report = parse(
            r#"{
                "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
                "main": {"temp": 20.0, "feels_like": 19.0, "pressure": 1013, "humidity": 50},
                "name": "Madrid"
            }"#,
        )
        .into_report()
        .unwrap();

        assert_eq!(report.temperature_c, 20.0);
        assert_eq!(report.feels_like_c, 19.0);
        assert_eq!(report.humidity_pct, 50);
        assert_eq!(report.description, "clear sky");
        assert_eq!(report.icon, "01d");
        assert_eq!(report.rain_1h_mm, 0.0);
    }

    #[test]
    fn rain_volume_is_carried_through() {
        let report = parse(
            r#"{
                "weather": [{"description": "light rain", "icon": "10d"}],
                "main": {"temp": 11.3, "feels_like": 10.8, "humidity": 87},
                "rain": {"1h": 2.5}
            }"#,
        )
        .into_report()
        .unwrap();

        assert_eq!(report.rain_1h_mm, 2.5);
    }

    #[test]
    fn rain_object_without_volume_defaults_to_zero() {
        let report = parse(
            r#"{
                "weather": [{"description": "light rain", "icon": "10d"}],
                "main": {"temp": 11.3, "feels_like": 10.8, "humidity": 87},
                "rain": {}
            }"#,
        )
        .into_report()
        .unwrap();

        assert_eq!(report.rain_1h_mm, 0.0);
    }

    #[test]
    fn empty_weather_array_yields_no_report() {
        let payload = parse(
            r#"{"weather": [], "main": {"temp": 1.0, "feels_like": 1.0, "humidity": 10}}"#,
        );
        assert!(payload.into_report().is_none());
    }

    #[test]
    fn icon_url_points_at_the_provider_image_host() {
        let report = parse(
            r#"{
                "weather": [{"description": "clear sky", "icon": "01d"}],
                "main": {"temp": 20.0, "feels_like": 19.0, "humidity": 50}
            }"#,
        )
        .into_report()
        .unwrap();

        assert_eq!(report.icon_url(), "http://openweathermap.org/img/wn/01d.png");
    }
}

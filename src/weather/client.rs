use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::weather::model::{CurrentWeather, WeatherReport};

/// Production OpenWeatherMap endpoint. Tests point the client elsewhere.
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// How much of an error body we keep around for diagnostics.
const MAX_ERROR_BODY: usize = 200;

/// Everything that can go wrong between us and OpenWeatherMap.
///
/// The user-facing notice does not currently distinguish the variants (see
/// [`WeatherError::user_message`]); the classification exists for logs and
/// for callers that want to.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("failed to reach OpenWeatherMap: {0}")]
    Network(#[from] reqwest::Error),

    #[error("OpenWeatherMap does not know any city named {0:?}")]
    CityNotFound(String),

    #[error("unexpected OpenWeatherMap payload: {0}")]
    Malformed(String),

    #[error("OpenWeatherMap request failed with status {status}: {body}")]
    Api { status: StatusCode, body: String },
}

impl WeatherError {
    /// The ephemeral notice shown to the invoking user.
    ///
    /// Every variant resolves to the same generic text. This match is the
    /// place to pick per-cause wording if that ever changes.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) | Self::CityNotFound(_) | Self::Malformed(_) | Self::Api { .. } => {
                "No se pudo obtener la información del clima. Inténtalo de nuevo más tarde."
            }
        }
    }
}

/// Thin client over the current-weather endpoint. One instance is built at
/// startup and shared by every command invocation.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Like [`WeatherClient::new`], but against a custom endpoint.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch the current weather for `city`, in metric units.
    pub async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let response = self
            .http
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        debug!("OpenWeatherMap answered {status} for {city:?}");

        // The provider answers 404 for cities it cannot resolve.
        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound(city.to_string()));
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(WeatherError::Api {
                status,
                body: truncate_body(&body),
            });
        }

        let payload: CurrentWeather = serde_json::from_str(&body)
            .map_err(|source| WeatherError::Malformed(source.to_string()))?;

        payload
            .into_report()
            .ok_or_else(|| WeatherError::Malformed("payload had no weather entries".to_string()))
    }
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((index, _)) => format!("{}...", &body[..index]),
        None => body.to_string(),
    }
}

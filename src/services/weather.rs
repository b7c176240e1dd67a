//! Weather service: resolves a city name and fetches its current conditions.

use crate::{
    config::OpenWeatherConfig,
    error::WeatherError,
    models::{CurrentWeather, WeatherReport},
    services::{metrics::AppMetrics, openweather::OpenWeatherClient},
};

/// Sequences the geocoding and current-weather calls for one city.
///
/// Holds only read-only state, so a single instance is shared by all workers.
#[derive(Clone)]
pub struct WeatherService {
    client: OpenWeatherClient,
    metrics: Option<AppMetrics>,
}

impl WeatherService {
    /// Create a new weather service instance
    pub fn new(config: OpenWeatherConfig, metrics: Option<AppMetrics>) -> Result<Self, reqwest::Error> {
        let client = OpenWeatherClient::new(config, metrics.clone())?;
        Ok(Self { client, metrics })
    }

    pub fn client(&self) -> &OpenWeatherClient {
        &self.client
    }

    /// Current weather for a city.
    ///
    /// The weather call is only made once geocoding produced a match.
    pub async fn get_weather(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let result = self.lookup(city).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        if let Some(metrics) = &self.metrics {
            metrics.record_lookup(outcome);
        }

        result
    }

    async fn lookup(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::InvalidCity);
        }

        let location = self
            .client
            .geocode(city)
            .await?
            .ok_or_else(|| WeatherError::CityNotFound(city.to_string()))?;

        tracing::debug!(
            city = %city,
            resolved = %location.name,
            country = %location.country,
            state = ?location.state,
            lat = location.latitude,
            lon = location.longitude,
            "City resolved"
        );

        let current = self
            .client
            .current_weather(location.latitude, location.longitude)
            .await?;

        project_report(city, current)
    }
}

/// Reduce the upstream payload to the four exposed fields
fn project_report(city: &str, current: CurrentWeather) -> Result<WeatherReport, WeatherError> {
    let humidity = current.main.humidity;
    if humidity > 100 {
        return Err(WeatherError::MalformedResponse(format!(
            "humidity out of range: {humidity}"
        )));
    }

    let description = current
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| WeatherError::MalformedResponse("missing weather conditions".to_string()))?;

    Ok(WeatherReport {
        city: city.to_string(),
        temperature: current.main.temp,
        humidity,
        description,
    })
}

//! HTTP client for the OpenWeatherMap geocoding and current-weather APIs.
//!
//! Each call is issued exactly once: there is no retry and no caching. Every
//! call is bounded by the configured timeout, logged, and recorded in the
//! upstream metrics when a collector is attached.

use crate::{
    config::{GEOCODING_LIMIT, LANGUAGE, OpenWeatherConfig, UNITS},
    error::WeatherError,
    models::{CurrentWeather, GeoLocation, GeocodingParams, UpstreamErrorBody, WeatherParams},
    services::metrics::AppMetrics,
};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Upstream endpoint, used as a log field and metrics label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Geocoding,
    Weather,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Geocoding => "geocoding",
            Endpoint::Weather => "weather",
        }
    }
}

/// OpenWeatherMap API client
#[derive(Clone)]
pub struct OpenWeatherClient {
    http: Client,
    config: OpenWeatherConfig,
    metrics: Option<AppMetrics>,
}

impl OpenWeatherClient {
    /// Create a new client; the underlying connection pool is shared by clones
    pub fn new(config: OpenWeatherConfig, metrics: Option<AppMetrics>) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            http,
            config,
            metrics,
        })
    }

    pub fn config(&self) -> &OpenWeatherConfig {
        &self.config
    }

    /// Resolve a city name to its best geocoding match.
    ///
    /// Returns `Ok(None)` when the provider answers with an empty list.
    pub async fn geocode(&self, city: &str) -> Result<Option<GeoLocation>, WeatherError> {
        let params = GeocodingParams {
            q: city,
            limit: GEOCODING_LIMIT,
            appid: &self.config.api_key,
        };
        let request = self.http.get(&self.config.geocoding_url).query(&params);

        let locations: Vec<GeoLocation> = self.fetch_json(Endpoint::Geocoding, request).await?;
        Ok(locations.into_iter().next())
    }

    /// Fetch current conditions for a coordinate pair, in metric units and Spanish
    pub async fn current_weather(&self, lat: f64, lon: f64) -> Result<CurrentWeather, WeatherError> {
        let params = WeatherParams {
            lat,
            lon,
            appid: &self.config.api_key,
            units: UNITS,
            lang: LANGUAGE,
        };
        let request = self.http.get(&self.config.weather_url).query(&params);

        self.fetch_json(Endpoint::Weather, request).await
    }

    /// Send a request once and decode a successful JSON body
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T, WeatherError> {
        let start = Instant::now();
        let result = self.send(endpoint, request).await;

        let result = match result {
            Ok(response) => response.json::<T>().await.map_err(WeatherError::from),
            Err(e) => Err(e),
        };

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        if let Some(metrics) = &self.metrics {
            metrics.record_upstream(endpoint.as_str(), outcome, start.elapsed());
        }

        result
    }

    /// Execute the request and classify the response status
    async fn send(&self, endpoint: Endpoint, request: RequestBuilder) -> Result<Response, WeatherError> {
        let start = Instant::now();

        // The client timeout covers the body too; this bounds the whole exchange
        let response = match tokio::time::timeout(self.config.timeout(), request.send()).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                // The request URL carries the API key
                let e = e.without_url();
                warn!(
                    endpoint = endpoint.as_str(),
                    error = %e,
                    duration_ms = start.elapsed().as_millis(),
                    "OpenWeatherMap request failed"
                );
                return Err(WeatherError::from(e));
            }
            Err(_) => {
                warn!(
                    endpoint = endpoint.as_str(),
                    timeout_seconds = self.config.timeout_seconds,
                    "OpenWeatherMap request timed out"
                );
                return Err(WeatherError::Timeout);
            }
        };

        let status = response.status();
        if status.is_success() {
            info!(
                endpoint = endpoint.as_str(),
                status = status.as_u16(),
                duration_ms = start.elapsed().as_millis(),
                "OpenWeatherMap request completed"
            );
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let parsed: UpstreamErrorBody = serde_json::from_str(&body).unwrap_or_else(|_| {
            debug!(endpoint = endpoint.as_str(), body = %truncate_body(&body), "Unparseable error body");
            UpstreamErrorBody::default()
        });

        let error = WeatherError::from_upstream(
            status_code(status),
            parsed.cod.map(|c| c.to_string()),
            parsed.message,
        );
        warn!(
            endpoint = endpoint.as_str(),
            status = status.as_u16(),
            kind = error.kind(),
            duration_ms = start.elapsed().as_millis(),
            "OpenWeatherMap returned an error"
        );
        Err(error)
    }
}

/// reqwest and actix-web pin different `http` crate versions
fn status_code(status: reqwest::StatusCode) -> actix_web::http::StatusCode {
    actix_web::http::StatusCode::from_u16(status.as_u16())
        .unwrap_or(actix_web::http::StatusCode::BAD_GATEWAY)
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

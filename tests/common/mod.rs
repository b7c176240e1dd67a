//! Shared fixtures: a fake OpenWeatherMap backed by wiremock.

#![allow(dead_code)]

use clima_api::OpenWeatherConfig;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";
pub const GEOCODING_PATH: &str = "/geo/1.0/direct";
pub const WEATHER_PATH: &str = "/data/2.5/weather";

/// Configuration pointing both endpoints at the mock server
pub fn config_for(server: &MockServer) -> OpenWeatherConfig {
    OpenWeatherConfig::new(
        API_KEY,
        format!("{}{}", server.uri(), GEOCODING_PATH),
        format!("{}{}", server.uri(), WEATHER_PATH),
    )
}

pub fn bogota_geocoding() -> Value {
    json!([{
        "name": "Bogotá",
        "local_names": {"es": "Bogotá", "en": "Bogota"},
        "lat": 4.6097,
        "lon": -74.0817,
        "country": "CO",
        "state": "Bogota"
    }])
}

pub fn bogota_weather() -> Value {
    json!({
        "coord": {"lon": -74.0817, "lat": 4.6097},
        "weather": [{"id": 802, "main": "Clouds", "description": "nubes dispersas", "icon": "03d"}],
        "base": "stations",
        "main": {
            "temp": 18.5,
            "feels_like": 18.2,
            "temp_min": 17.0,
            "temp_max": 19.9,
            "pressure": 1027,
            "humidity": 72
        },
        "visibility": 10000,
        "wind": {"speed": 3.6, "deg": 160},
        "clouds": {"all": 40},
        "dt": 1736784000,
        "sys": {"country": "CO", "sunrise": 1736765520, "sunset": 1736808360},
        "timezone": -18000,
        "id": 3688689,
        "name": "Bogota",
        "cod": 200
    })
}

/// Geocoding mock for `city` answering `body`, expected to be hit `times` times
pub async fn mount_geocoding(server: &MockServer, city: &str, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(GEOCODING_PATH))
        .and(query_param("q", city))
        .and(query_param("limit", "1"))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Weather mock requiring metric units and Spanish descriptions
pub async fn mount_weather(server: &MockServer, response: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("lat", "4.6097"))
        .and(query_param("lon", "-74.0817"))
        .and(query_param("appid", API_KEY))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "es"))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

/// Upstream error response in the provider's `{cod, message}` shape
pub fn upstream_error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "cod": status,
        "message": message
    }))
}

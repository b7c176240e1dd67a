//! OpenWeatherMap request parameters and response payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Query string for `GET /geo/1.0/direct`
#[derive(Debug, Serialize)]
pub struct GeocodingParams<'a> {
    pub q: &'a str,
    pub limit: u8,
    pub appid: &'a str,
}

/// Query string for `GET /data/2.5/weather`
#[derive(Debug, Serialize)]
pub struct WeatherParams<'a> {
    pub lat: f64,
    pub lon: f64,
    pub appid: &'a str,
    pub units: &'a str,
    pub lang: &'a str,
}

/// A single geocoding match
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoLocation {
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    /// ISO 3166 country code
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// Current weather payload. Only the fields the service reads are modelled.
#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub name: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub sys: Option<CountryInfo>,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct CountryInfo {
    pub country: Option<String>,
}

/// Error code as sent by the provider; both `401` and `"404"` occur in practice
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UpstreamCode {
    Number(i64),
    Text(String),
}

impl fmt::Display for UpstreamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamCode::Number(code) => write!(f, "{code}"),
            UpstreamCode::Text(code) => f.write_str(code),
        }
    }
}

/// Body of a non-2xx response
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamErrorBody {
    pub cod: Option<UpstreamCode>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoding_result_parsing() {
        let body = r#"[{"name":"Bogotá","local_names":{"es":"Bogotá"},"lat":4.6533816,"lon":-74.0836331,"country":"CO","state":"Bogota"}]"#;
        let locations: Vec<GeoLocation> = serde_json::from_str(body).unwrap();

        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].country, "CO");
        assert_eq!(locations[0].latitude, 4.6533816);
        assert_eq!(locations[0].state.as_deref(), Some("Bogota"));
    }

    #[test]
    fn test_geocoding_result_without_state() {
        let body = r#"[{"name":"Madrid","lat":40.4167,"lon":-3.7033,"country":"ES"}]"#;
        let locations: Vec<GeoLocation> = serde_json::from_str(body).unwrap();
        assert_eq!(locations[0].state, None);
    }

    #[test]
    fn test_current_weather_ignores_unused_fields() {
        let body = r#"{
            "coord": {"lon": -74.08, "lat": 4.61},
            "weather": [{"id": 802, "main": "Clouds", "description": "nubes dispersas", "icon": "03d"}],
            "main": {"temp": 18.5, "feels_like": 18.1, "pressure": 1027, "humidity": 72},
            "wind": {"speed": 3.6},
            "sys": {"country": "CO"},
            "name": "Bogota",
            "cod": 200
        }"#;
        let current: CurrentWeather = serde_json::from_str(body).unwrap();

        assert_eq!(current.main.temp, 18.5);
        assert_eq!(current.main.humidity, 72);
        assert_eq!(current.weather[0].description, "nubes dispersas");
        assert_eq!(current.sys.unwrap().country.as_deref(), Some("CO"));
    }

    #[test]
    fn test_upstream_code_accepts_number_or_string() {
        let numeric: UpstreamErrorBody =
            serde_json::from_str(r#"{"cod":401,"message":"Invalid API key"}"#).unwrap();
        let text: UpstreamErrorBody =
            serde_json::from_str(r#"{"cod":"404","message":"city not found"}"#).unwrap();

        assert_eq!(numeric.cod.unwrap().to_string(), "401");
        assert_eq!(text.cod.unwrap().to_string(), "404");
        assert_eq!(text.message.as_deref(), Some("city not found"));
    }
}

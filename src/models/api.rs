//! API response models for standard endpoints.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Response model for the welcome endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct WelcomeResponse {
    pub message: String,
    /// Where the OpenAPI document is served
    pub docs: String,
    pub version: String,
}

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Path parameters for the weather endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct CityPath {
    /// City name (e.g., "Bogota", "Buenos Aires")
    pub city: String,
}

/// Current conditions for a city, reduced to the fields the API exposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherReport {
    /// City name as queried (e.g., "Bogota")
    pub city: String,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity percentage, 0 to 100
    pub humidity: u8,
    /// Localized description (e.g., "nubes dispersas")
    pub description: String,
}

/// Body returned for every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

//! Weather endpoint handler.

use crate::{
    middleware::RequestId,
    models::{CityPath, WeatherReport},
    services::weather::WeatherService,
};
use actix_web::{Error, HttpMessage, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;

/// Current weather for a city
///
/// Resolves the city through OpenWeatherMap geocoding and returns its current
/// conditions in Celsius with a Spanish description. Failures are returned as
/// `{"detail": "..."}`.
#[api_v2_operation(
    summary = "Current Weather Endpoint",
    description = "Returns temperature (Celsius), humidity (%) and a Spanish description of the current weather in the given city. Upstream failures are mapped rather than passed through: 401 and 429 are kept, 500 and 503 become 503, any other upstream error becomes 502.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = WeatherReport),
        (status = 400, description = "Bad Request - Empty city name"),
        (status = 401, description = "Unauthorized - OpenWeatherMap rejected the API key"),
        (status = 404, description = "Not Found - City not found"),
        (status = 429, description = "Too Many Requests - OpenWeatherMap rate limit reached"),
        (status = 502, description = "Bad Gateway - OpenWeatherMap returned an error or an invalid response"),
        (status = 503, description = "Service Unavailable - OpenWeatherMap unavailable or unreachable"),
        (status = 504, description = "Gateway Timeout - OpenWeatherMap did not answer in time")
    )
)]
pub async fn weather(
    req: HttpRequest,
    path: web::Path<CityPath>,
) -> Result<web::Json<WeatherReport>, Error> {
    let service = match req.app_data::<web::Data<WeatherService>>() {
        Some(service) => service,
        None => {
            return Err(actix_web::error::ErrorInternalServerError(
                "Weather service not configured",
            ));
        }
    };

    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();

    match service.get_weather(&path.city).await {
        Ok(report) => {
            tracing::debug!(
                request_id = %request_id,
                city = %report.city,
                temperature = report.temperature,
                humidity = report.humidity,
                "Weather lookup succeeded"
            );
            Ok(web::Json(report))
        }
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                city = %path.city,
                kind = e.kind(),
                error = %e,
                "Weather lookup failed"
            );
            Err(e.into())
        }
    }
}

//! Weather lookup error types and their HTTP mapping.

use crate::models::ErrorDetail;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Failures of a city weather lookup.
///
/// Every variant renders as `{"detail": ...}` with the status from
/// [`ResponseError::status_code`].
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("El nombre de la ciudad no puede estar vacío.")]
    InvalidCity,

    #[error("Ciudad '{0}' no encontrada. Verifica el nombre e intenta de nuevo.")]
    CityNotFound(String),

    #[error("Credenciales inválidas para la API de OpenWeather: {message}")]
    InvalidCredentials { message: String },

    #[error("Se excedió el límite de peticiones a la API de OpenWeather. Intenta de nuevo más tarde. ({message})")]
    RateLimited { message: String },

    #[error("La API de OpenWeather no está disponible en este momento (código {status}).")]
    UpstreamUnavailable { status: u16 },

    #[error("Error de la API de OpenWeather (código {code}): {message}")]
    Upstream { code: String, message: String },

    #[error("La API de OpenWeather no respondió a tiempo.")]
    Timeout,

    #[error("No se pudo contactar la API de OpenWeather.")]
    Transport(#[source] reqwest::Error),

    #[error("Respuesta inválida de la API de OpenWeather: {0}")]
    MalformedResponse(String),
}

impl WeatherError {
    /// Classify a non-success upstream status.
    ///
    /// `code` and `message` come from the provider's `{cod, message}` body
    /// when it could be parsed.
    pub fn from_upstream(status: StatusCode, code: Option<String>, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        match status.as_u16() {
            401 => WeatherError::InvalidCredentials { message },
            429 => WeatherError::RateLimited { message },
            500 | 503 => WeatherError::UpstreamUnavailable {
                status: status.as_u16(),
            },
            _ => WeatherError::Upstream {
                code: code.unwrap_or_else(|| status.as_u16().to_string()),
                message,
            },
        }
    }

    /// Short label used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            WeatherError::InvalidCity => "invalid_city",
            WeatherError::CityNotFound(_) => "not_found",
            WeatherError::InvalidCredentials { .. } => "invalid_credentials",
            WeatherError::RateLimited { .. } => "rate_limited",
            WeatherError::UpstreamUnavailable { .. } => "upstream_unavailable",
            WeatherError::Upstream { .. } => "upstream_error",
            WeatherError::Timeout => "timeout",
            WeatherError::Transport(_) => "transport_failure",
            WeatherError::MalformedResponse(_) => "malformed_response",
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        // Never keep the request URL: its query string holds the API key
        let err = err.without_url();
        if err.is_timeout() {
            WeatherError::Timeout
        } else if err.is_decode() {
            WeatherError::MalformedResponse(err.to_string())
        } else {
            WeatherError::Transport(err)
        }
    }
}

impl ResponseError for WeatherError {
    fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::InvalidCity => StatusCode::BAD_REQUEST,
            WeatherError::CityNotFound(_) => StatusCode::NOT_FOUND,
            WeatherError::InvalidCredentials { .. } => StatusCode::UNAUTHORIZED,
            WeatherError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            WeatherError::UpstreamUnavailable { .. } | WeatherError::Transport(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            WeatherError::Upstream { .. } | WeatherError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            WeatherError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorDetail::new(self.to_string()))
    }
}

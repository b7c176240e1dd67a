//! Clima API - current weather for a city, backed by OpenWeatherMap
//!
//! A thin Actix Web service that answers `GET /api/weather/{city}` by chaining
//! two OpenWeatherMap calls:
//! 1. the geocoding API resolves the city name to coordinates
//! 2. the current weather API returns conditions for those coordinates
//!
//! and reducing the result to `{city, temperature, humidity, description}`.
//! Upstream failures are translated into `{"detail": ...}` responses with a
//! matching HTTP status.
//!
//! ## Architecture
//!
//! - `models/` - Response models and OpenWeatherMap payloads
//! - `handlers/` - HTTP request handlers and the app factory
//! - `middleware/` - Request ID logging and metrics collection
//! - `services/` - OpenWeatherMap client, lookup orchestration, metrics
//! - `utils/` - Request inspection helpers
//! - `config/` - Configuration structures and environment loading
//! - `error` - Lookup error taxonomy and its HTTP mapping
//!
//! ## Quick Start
//!
//! ```no_run
//! use actix_web::HttpServer;
//! use clima_api::{AppContext, create_base_app};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let context = AppContext::from_env().expect("invalid configuration");
//!     HttpServer::new(move || create_base_app(&context))
//!         .bind("127.0.0.1:8080")?
//!         .run()
//!         .await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{ConfigError, MetricsConfig, OpenWeatherConfig, ServerConfig};
pub use error::WeatherError;
pub use handlers::{
    AppContext, StartupError, create_base_app, create_openapi_spec, get_metrics, health, home,
    version, weather,
};
pub use middleware::{MetricsMiddleware, RequestId, RequestIdMiddleware};
pub use models::{
    CityPath, ErrorDetail, GeoLocation, HealthResponse, VersionResponse, WeatherReport,
    WelcomeResponse,
};
pub use services::{AppMetrics, Endpoint, OpenWeatherClient, WeatherService};
pub use utils::{extract_client_ip, extract_route_pattern, extract_user_agent};

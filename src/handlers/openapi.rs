//! OpenAPI specification generation and app factory.

use crate::{
    config::{ConfigError, MetricsConfig, OpenWeatherConfig},
    handlers::{get_metrics, health, home, version, weather},
    middleware::{MetricsMiddleware, RequestIdMiddleware},
    services::{AppMetrics, WeatherService},
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Errors raised while assembling the application state
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to create metrics: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Shared state handed to every worker.
///
/// Built once at startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppContext {
    pub weather: web::Data<WeatherService>,
    pub metrics: web::Data<AppMetrics>,
    pub metrics_config: web::Data<MetricsConfig>,
}

impl AppContext {
    pub fn new(
        openweather: OpenWeatherConfig,
        metrics_config: MetricsConfig,
    ) -> Result<Self, StartupError> {
        let metrics = AppMetrics::new()?;
        let weather = WeatherService::new(openweather, Some(metrics.clone()))?;

        Ok(Self {
            weather: web::Data::new(weather),
            metrics: web::Data::new(metrics),
            metrics_config: web::Data::new(metrics_config),
        })
    }

    /// Load every configuration section from the environment
    pub fn from_env() -> Result<Self, StartupError> {
        Self::new(OpenWeatherConfig::from_env()?, MetricsConfig::from_env())
    }
}

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Clima API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Current weather for any city in the world, backed by OpenWeatherMap.\n\n\
                ## Lookup\n\
                `GET /api/weather/{city}` resolves the city with the OpenWeatherMap geocoding API \
                and then queries the current weather API for its coordinates. The response contains \
                the temperature in Celsius, the relative humidity and a description in Spanish:\n\
                ```json\n\
                {\"city\": \"Bogota\", \"temperature\": 18.5, \"humidity\": 72, \"description\": \"nubes dispersas\"}\n\
                ```\n\
                \n\
                ## Errors\n\
                Every failure is returned as `{\"detail\": \"...\"}`:\n\
                - `400` empty city name\n\
                - `404` city not found\n\
                - `401` OpenWeatherMap rejected the API key\n\
                - `429` OpenWeatherMap rate limit reached\n\
                - `502` OpenWeatherMap returned an error or an invalid response\n\
                - `503` OpenWeatherMap unavailable or unreachable\n\
                - `504` OpenWeatherMap did not answer in time\n\
                \n\
                ## Configuration\n\
                - `OPENWEATHER_API_KEY`, `OPENWEATHER_GEOCODING_URL`, `OPENWEATHER_WEATHER_URL` (required)\n\
                - `OPENWEATHER_TIMEOUT_SECONDS` (default: 10)\n\
                - `METRICS_ENABLED` (default: true)".into()
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the app with all routes, middleware and shared state.
///
/// Used both by `main` and by the integration tests.
pub fn create_base_app(
    context: &AppContext,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .wrap(RequestIdMiddleware)
        .wrap(MetricsMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(context.weather.clone())
        .app_data(context.metrics.clone())
        .app_data(context.metrics_config.clone())
        .service(web::resource("/").route(web::get().to(home)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/weather/{city}").route(web::get().to(weather)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}

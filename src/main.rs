use actix_web::HttpServer;
use clima_api::{AppContext, ServerConfig, create_base_app};
use tracing_subscriber::EnvFilter;

/// Set up structured logging. `RUST_LOG` controls the filter (default `info`);
/// `LOG_FORMAT=json` switches to JSON lines for log shippers.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    // A missing API key or endpoint URL is fatal
    let context = match AppContext::from_env() {
        Ok(context) => context,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration, shutting down");
            std::process::exit(1);
        }
    };

    let server_config = ServerConfig::from_env();
    let openweather = context.weather.client().config();
    tracing::info!(
        bind_address = %server_config.bind_address,
        geocoding_url = %openweather.geocoding_url,
        weather_url = %openweather.weather_url,
        timeout_seconds = openweather.timeout_seconds,
        metrics_enabled = context.metrics_config.enabled,
        "Starting Clima API"
    );

    HttpServer::new(move || create_base_app(&context))
        .bind(&server_config.bind_address)?
        .run()
        .await
}

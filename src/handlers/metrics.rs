//! Metrics endpoint handler.

use crate::{config::MetricsConfig, services::AppMetrics};
use actix_web::{Error, HttpRequest, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

/// Prometheus metrics endpoint
///
/// Exposes inbound request, OpenWeatherMap call and lookup outcome metrics
/// for scraping.
#[api_v2_operation(
    summary = "Prometheus Metrics Endpoint",
    description = "Returns Prometheus-formatted metrics for API requests, OpenWeatherMap calls and weather lookups.",
    tags("Metrics"),
    responses(
        (status = 200, description = "Prometheus metrics in text format", content_type = "text/plain"),
        (status = 503, description = "Metrics collection disabled")
    )
)]
pub async fn get_metrics(req: HttpRequest) -> Result<HttpResponse, Error> {
    if let Some(config) = req.app_data::<web::Data<MetricsConfig>>() {
        if !config.enabled {
            return Ok(HttpResponse::ServiceUnavailable()
                .content_type("text/plain")
                .body("Metrics collection is disabled"));
        }
    }

    let metrics = match req.app_data::<web::Data<AppMetrics>>() {
        Some(metrics) => metrics,
        None => {
            return Err(actix_web::error::ErrorServiceUnavailable(
                "Metrics not available",
            ));
        }
    };

    metrics.update_uptime();
    let output = metrics.render().map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Failed to render metrics: {e}"))
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4; charset=utf-8")
        .body(output))
}

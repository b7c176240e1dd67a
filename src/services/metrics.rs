//! Metrics collection and Prometheus integration service.

use prometheus::{CounterVec, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::time::{Duration, Instant};

/// Build metadata emitted by `build.rs`; absent outside a git checkout
pub const BUILD_COMMIT: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

pub const BUILD_TIMESTAMP: &str = match option_env!("VERGEN_BUILD_TIMESTAMP") {
    Some(ts) => ts,
    None => "unknown",
};

/// Application metrics collector for Prometheus integration
#[derive(Clone)]
pub struct AppMetrics {
    pub registry: Registry,
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub upstream_requests_total: CounterVec,
    pub upstream_request_duration_seconds: HistogramVec,
    pub weather_lookups_total: CounterVec,
    pub app_uptime_seconds: Gauge,
    pub app_info: CounterVec,
    pub start_time: Instant,
}

impl AppMetrics {
    /// Create a new metrics collector with its own registry
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        // Inbound HTTP requests by method, status, and route
        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "status", "route"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(vec![
                0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ]),
            &["method", "route"],
        )?;

        // Calls to OpenWeatherMap by endpoint (geocoding/weather) and outcome
        let upstream_requests_total = CounterVec::new(
            Opts::new(
                "upstream_requests_total",
                "Total OpenWeatherMap requests by endpoint and outcome",
            ),
            &["endpoint", "outcome"],
        )?;

        let upstream_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "upstream_request_duration_seconds",
                "Duration of OpenWeatherMap requests",
            )
            .buckets(vec![
                0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0,
            ]),
            &["endpoint"],
        )?;

        let weather_lookups_total = CounterVec::new(
            Opts::new(
                "weather_lookups_total",
                "City weather lookups by outcome",
            ),
            &["outcome"],
        )?;

        let app_uptime_seconds = Gauge::new("app_uptime_seconds", "Application uptime in seconds")?;

        let app_info = CounterVec::new(
            Opts::new("app_info", "Application information"),
            &["version", "commit", "build_time"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(upstream_requests_total.clone()))?;
        registry.register(Box::new(upstream_request_duration_seconds.clone()))?;
        registry.register(Box::new(weather_lookups_total.clone()))?;
        registry.register(Box::new(app_uptime_seconds.clone()))?;
        registry.register(Box::new(app_info.clone()))?;

        app_info
            .with_label_values(&[env!("CARGO_PKG_VERSION"), BUILD_COMMIT, BUILD_TIMESTAMP])
            .inc();

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            upstream_requests_total,
            upstream_request_duration_seconds,
            weather_lookups_total,
            app_uptime_seconds,
            app_info,
            start_time: Instant::now(),
        })
    }

    /// Record an HTTP request with method, route, status, and duration
    pub fn record_request(&self, method: &str, route: &str, status: u16, duration: Duration) {
        if route == "/api/metrics" {
            // Scrapes would otherwise dominate the counters
            return;
        }

        let status = status.to_string();
        self.http_requests_total
            .with_label_values(&[method, status.as_str(), route])
            .inc();

        self.http_request_duration_seconds
            .with_label_values(&[method, route])
            .observe(duration.as_secs_f64());
    }

    /// Record one OpenWeatherMap call
    pub fn record_upstream(&self, endpoint: &str, outcome: &str, duration: Duration) {
        self.upstream_requests_total
            .with_label_values(&[endpoint, outcome])
            .inc();

        self.upstream_request_duration_seconds
            .with_label_values(&[endpoint])
            .observe(duration.as_secs_f64());
    }

    /// Record the outcome of a full city lookup
    pub fn record_lookup(&self, outcome: &str) {
        self.weather_lookups_total
            .with_label_values(&[outcome])
            .inc();
    }

    /// Update the application uptime gauge
    pub fn update_uptime(&self) {
        let uptime = self.start_time.elapsed().as_secs_f64();
        self.app_uptime_seconds.set(uptime);
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder.encode_to_string(&metric_families)
    }
}

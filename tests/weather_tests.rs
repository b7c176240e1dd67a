//! Weather lookup tests against a fake OpenWeatherMap.

mod common;

use clima_api::{AppMetrics, OpenWeatherConfig, WeatherError, WeatherReport, WeatherService};
use common::*;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> WeatherService {
    WeatherService::new(config_for(server), None).expect("Failed to create weather service")
}

#[tokio::test]
async fn test_lookup_success_projects_report() {
    let server = MockServer::start().await;
    mount_geocoding(&server, "Bogota", bogota_geocoding(), 1).await;
    mount_weather(&server, ResponseTemplate::new(200).set_body_json(bogota_weather()), 1).await;

    let report = service_for(&server).get_weather("Bogota").await.unwrap();

    assert_eq!(
        report,
        WeatherReport {
            city: "Bogota".to_string(),
            temperature: 18.5,
            humidity: 72,
            description: "nubes dispersas".to_string(),
        }
    );
}

#[tokio::test]
async fn test_geocoding_precedes_weather_call() {
    let server = MockServer::start().await;
    mount_geocoding(&server, "Bogota", bogota_geocoding(), 1).await;
    mount_weather(&server, ResponseTemplate::new(200).set_body_json(bogota_weather()), 1).await;

    service_for(&server).get_weather("Bogota").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
    assert_eq!(paths, vec![GEOCODING_PATH, WEATHER_PATH]);
}

#[tokio::test]
async fn test_city_name_is_trimmed() {
    let server = MockServer::start().await;
    mount_geocoding(&server, "Bogota", bogota_geocoding(), 1).await;
    mount_weather(&server, ResponseTemplate::new(200).set_body_json(bogota_weather()), 1).await;

    let report = service_for(&server).get_weather("  Bogota ").await.unwrap();
    assert_eq!(report.city, "Bogota");
}

#[tokio::test]
async fn test_empty_geocoding_result_skips_weather_call() {
    let server = MockServer::start().await;
    mount_geocoding(&server, "Atlantis", json!([]), 1).await;
    mount_weather(&server, ResponseTemplate::new(200).set_body_json(bogota_weather()), 0).await;

    let err = service_for(&server).get_weather("Atlantis").await.unwrap_err();

    assert!(matches!(&err, WeatherError::CityNotFound(city) if city == "Atlantis"));
    assert_eq!(
        err.to_string(),
        "Ciudad 'Atlantis' no encontrada. Verifica el nombre e intenta de nuevo."
    );
}

#[tokio::test]
async fn test_weather_401_forwards_upstream_message() {
    let server = MockServer::start().await;
    mount_geocoding(&server, "Bogota", bogota_geocoding(), 1).await;
    mount_weather(&server, upstream_error(401, "Invalid API key."), 1).await;

    let err = service_for(&server).get_weather("Bogota").await.unwrap_err();

    assert!(matches!(
        &err,
        WeatherError::InvalidCredentials { message } if message == "Invalid API key."
    ));
    assert!(err.to_string().contains("Invalid API key."));
}

#[tokio::test]
async fn test_weather_429_is_rate_limited() {
    let server = MockServer::start().await;
    mount_geocoding(&server, "Bogota", bogota_geocoding(), 1).await;
    mount_weather(&server, upstream_error(429, "Your account is temporary blocked"), 1).await;

    let err = service_for(&server).get_weather("Bogota").await.unwrap_err();
    assert!(matches!(err, WeatherError::RateLimited { .. }));
}

#[tokio::test]
async fn test_weather_5xx_is_upstream_unavailable() {
    for status in [500u16, 503] {
        let server = MockServer::start().await;
        mount_geocoding(&server, "Bogota", bogota_geocoding(), 1).await;
        mount_weather(&server, upstream_error(status, "Internal error"), 1).await;

        let err = service_for(&server).get_weather("Bogota").await.unwrap_err();
        assert!(
            matches!(err, WeatherError::UpstreamUnavailable { status: s } if s == status),
            "status {status} should map to UpstreamUnavailable"
        );
    }
}

#[tokio::test]
async fn test_other_status_forwards_string_code() {
    let server = MockServer::start().await;
    mount_geocoding(&server, "Bogota", bogota_geocoding(), 1).await;
    mount_weather(
        &server,
        ResponseTemplate::new(400).set_body_json(json!({"cod": "400", "message": "wrong latitude"})),
        1,
    )
    .await;

    let err = service_for(&server).get_weather("Bogota").await.unwrap_err();

    assert!(matches!(
        &err,
        WeatherError::Upstream { code, message } if code == "400" && message == "wrong latitude"
    ));
}

#[tokio::test]
async fn test_geocoding_401_stops_before_weather_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GEOCODING_PATH))
        .respond_with(upstream_error(401, "Invalid API key."))
        .expect(1)
        .mount(&server)
        .await;
    mount_weather(&server, ResponseTemplate::new(200).set_body_json(bogota_weather()), 0).await;

    let err = service_for(&server).get_weather("Bogota").await.unwrap_err();
    assert!(matches!(err, WeatherError::InvalidCredentials { .. }));
}

#[tokio::test]
async fn test_weather_payload_without_conditions_is_malformed() {
    let server = MockServer::start().await;
    mount_geocoding(&server, "Bogota", bogota_geocoding(), 1).await;
    mount_weather(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "main": {"temp": 18.5, "humidity": 72},
            "weather": []
        })),
        1,
    )
    .await;

    let err = service_for(&server).get_weather("Bogota").await.unwrap_err();
    assert!(matches!(err, WeatherError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_geocoding_non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GEOCODING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = service_for(&server).get_weather("Bogota").await.unwrap_err();
    assert!(matches!(err, WeatherError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_transport_failure() {
    // Nothing listens on the discard port
    let config = OpenWeatherConfig::new(
        API_KEY,
        "http://127.0.0.1:9/geo/1.0/direct",
        "http://127.0.0.1:9/data/2.5/weather",
    );
    let service = WeatherService::new(config, None).unwrap();

    let err = service.get_weather("Bogota").await.unwrap_err();
    assert!(matches!(err, WeatherError::Transport(_)), "got {err:?}");
    assert!(!format!("{err:?}").contains(API_KEY));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GEOCODING_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(bogota_geocoding())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.timeout_seconds = 1;
    let service = WeatherService::new(config, None).unwrap();

    let err = service.get_weather("Bogota").await.unwrap_err();
    assert!(matches!(err, WeatherError::Timeout), "got {err:?}");
}

#[tokio::test]
async fn test_lookup_outcomes_are_counted() {
    let server = MockServer::start().await;
    mount_geocoding(&server, "Bogota", bogota_geocoding(), 1).await;
    mount_geocoding(&server, "Atlantis", json!([]), 1).await;
    mount_weather(&server, ResponseTemplate::new(200).set_body_json(bogota_weather()), 1).await;

    let metrics = AppMetrics::new().unwrap();
    let service = WeatherService::new(config_for(&server), Some(metrics.clone())).unwrap();

    service.get_weather("Bogota").await.unwrap();
    service.get_weather("Atlantis").await.unwrap_err();

    let lookups = |outcome: &str| metrics.weather_lookups_total.with_label_values(&[outcome]).get();
    assert_eq!(lookups("success"), 1.0);
    assert_eq!(lookups("not_found"), 1.0);

    let upstream = |endpoint: &str| {
        metrics
            .upstream_requests_total
            .with_label_values(&[endpoint, "success"])
            .get()
    };
    assert_eq!(upstream("geocoding"), 2.0);
    assert_eq!(upstream("weather"), 1.0);
}

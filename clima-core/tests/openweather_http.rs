use std::time::Duration;

use clima_core::{HttpTransport, JokeClient, LookupError, TransportError, WeatherLookup};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn weather_endpoint(server: &MockServer) -> String {
    format!("{}/data/2.5/weather", server.uri())
}

#[tokio::test]
async fn lookup_reshapes_a_live_response() {
    let mock_server = MockServer::start().await;

    let body = json!({
        "main": {"temp": 21.4, "humidity": 65},
        "weather": [{"description": "scattered clouds"}]
    });

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Lisboa"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let lookup =
        WeatherLookup::new("test-key".to_string()).with_base_url(weather_endpoint(&mock_server));

    let report = lookup.lookup("Lisboa").await.unwrap().expect("report");

    assert_eq!(report.temperature, json!(65));
    assert_eq!(report.description, json!("scattered clouds"));
    assert_eq!(report.humidity, json!(65));
}

#[tokio::test]
async fn lookup_maps_not_found_to_absence() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "city not found"})),
        )
        .mount(&mock_server)
        .await;

    let lookup =
        WeatherLookup::new("test-key".to_string()).with_base_url(weather_endpoint(&mock_server));

    let result = lookup.lookup("Nowhere").await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn transport_timeout_surfaces_as_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .expect("client");

    let lookup =
        WeatherLookup::with_transport("test-key".to_string(), HttpTransport::with_client(client))
            .with_base_url(weather_endpoint(&mock_server));

    let err = lookup.lookup("Lisboa").await.unwrap_err();

    assert!(matches!(
        err,
        LookupError::Transport(TransportError::Timeout)
    ));
}

#[tokio::test]
async fn joke_fetches_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/random_joke"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "type": "general",
            "setup": "Why do programmers prefer dark mode?",
            "punchline": "Because light attracts bugs."
        })))
        .mount(&mock_server)
        .await;

    let client =
        JokeClient::new().with_base_url(format!("{}/random_joke", mock_server.uri()));

    let joke = client.fetch().await.unwrap().expect("joke");

    assert_eq!(joke.setup, "Why do programmers prefer dark mode?");
    assert_eq!(joke.punchline, "Because light attracts bugs.");
}

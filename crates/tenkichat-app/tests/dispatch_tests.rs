use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tenkichat::{input, run_turn, AppConfig, TenkiChat};

const MODEL: &str = "gemini-2.5-flash";

fn gemini_path() -> String {
    format!("/v1beta/models/{}:generateContent", MODEL)
}

fn config_for(gemini: &MockServer, geocode: &MockServer, forecast: &MockServer) -> AppConfig {
    AppConfig {
        api_key: "test-key".to_string(),
        model: MODEL.to_string(),
        api_url: gemini.uri(),
        geocode_url: geocode.uri(),
        forecast_url: forecast.uri(),
        verbose: false,
    }
}

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]}
        }]
    }))
}

fn function_call_response(name: &str, args: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"functionCall": {"name": name, "args": args}}]
            }
        }]
    }))
}

async fn mount_tokyo_weather(geocode: &MockServer, forecast: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"lat": "35.6768601", "lon": "139.7638947"}
        ])))
        .expect(1)
        .mount(geocode)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "daily": {
                "weathercode": [1, 3],
                "temperature_2m_max": [30.1, 28.0],
                "temperature_2m_min": [22.4, 21.9]
            }
        })))
        .expect(1)
        .mount(forecast)
        .await;
}

async fn mount_unused(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn empty_submission_never_reaches_the_model() {
    let gemini = MockServer::start().await;
    let geocode = MockServer::start().await;
    let forecast = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&gemini)
        .await;

    let config = config_for(&gemini, &geocode, &forecast);
    tenkichat::run_ask_mode(config, "").await.unwrap();

    gemini.verify().await;
}

#[tokio::test]
async fn weather_question_runs_the_full_function_round_trip() {
    let gemini = MockServer::start().await;
    let geocode = MockServer::start().await;
    let forecast = MockServer::start().await;

    // Second request: must carry the weather report as a function response
    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .and(body_string_contains("functionResponse"))
        .and(body_string_contains("晴れ"))
        .and(body_string_contains("maxTemp"))
        .respond_with(text_response("今日の東京は晴れ、最高気温は30.1度です。"))
        .expect(1)
        .mount(&gemini)
        .await;

    // First request: the model asks for the weather tool
    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .respond_with(function_call_response("fetchWeather", json!({"location": "東京"})))
        .expect(1)
        .mount(&gemini)
        .await;

    mount_tokyo_weather(&geocode, &forecast).await;

    let config = config_for(&gemini, &geocode, &forecast);
    let mut chat = TenkiChat::new(&config, false);

    let answer = run_turn(&mut chat, "東京の天気は？").await.unwrap();

    assert!(!answer.is_empty());
    assert_ne!(answer, input::THINKING);
    assert_eq!(answer, "今日の東京は晴れ、最高気温は30.1度です。");

    // user, model function call, function response, model answer
    assert_eq!(chat.session.len(), 4);
    assert_eq!(chat.session.contents()[0].role, "user");
    assert_eq!(chat.session.contents()[2].role, "function");
}

#[tokio::test]
async fn small_talk_answers_directly_without_fetches() {
    let gemini = MockServer::start().await;
    let geocode = MockServer::start().await;
    let forecast = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .respond_with(text_response("こんにちは！何かお手伝いできることはありますか？"))
        .expect(1)
        .mount(&gemini)
        .await;

    mount_unused(&geocode).await;
    mount_unused(&forecast).await;

    let config = config_for(&gemini, &geocode, &forecast);
    let mut chat = TenkiChat::new(&config, false);

    let answer = run_turn(&mut chat, "こんにちは").await.unwrap();
    assert_eq!(answer, "こんにちは！何かお手伝いできることはありますか？");
    assert_eq!(chat.session.len(), 2);

    geocode.verify().await;
    forecast.verify().await;
}

#[tokio::test]
async fn unrecognized_function_name_is_relayed_as_an_error_result() {
    let gemini = MockServer::start().await;
    let geocode = MockServer::start().await;
    let forecast = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .and(body_string_contains("functionResponse"))
        .and(body_string_contains("Tool 'checkTraffic' not found"))
        .respond_with(text_response("すみません、交通情報は調べられません。"))
        .expect(1)
        .mount(&gemini)
        .await;

    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .respond_with(function_call_response("checkTraffic", json!({"road": "1号線"})))
        .expect(1)
        .mount(&gemini)
        .await;

    mount_unused(&geocode).await;
    mount_unused(&forecast).await;

    let config = config_for(&gemini, &geocode, &forecast);
    let mut chat = TenkiChat::new(&config, false);

    let answer = run_turn(&mut chat, "1号線は混んでいますか？").await.unwrap();
    assert_eq!(answer, "すみません、交通情報は調べられません。");

    geocode.verify().await;
    forecast.verify().await;
}

#[tokio::test]
async fn chained_function_calls_are_rejected() {
    let gemini = MockServer::start().await;
    let geocode = MockServer::start().await;
    let forecast = MockServer::start().await;

    // The model keeps asking for functions; the round-trip contract
    // allows exactly one, so the second request must fail the turn.
    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .and(body_string_contains("functionResponse"))
        .respond_with(function_call_response("fetchWeather", json!({"location": "大阪"})))
        .expect(1)
        .mount(&gemini)
        .await;

    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .respond_with(function_call_response("fetchWeather", json!({"location": "東京"})))
        .expect(1)
        .mount(&gemini)
        .await;

    mount_tokyo_weather(&geocode, &forecast).await;

    let config = config_for(&gemini, &geocode, &forecast);
    let mut chat = TenkiChat::new(&config, false);

    let err = run_turn(&mut chat, "東京の天気は？").await.unwrap_err();
    assert!(
        err.to_string().contains("another function call"),
        "got: {}",
        err
    );
}

#[tokio::test]
async fn simple_mode_sends_statelessly_without_tools() {
    let gemini = MockServer::start().await;
    let geocode = MockServer::start().await;
    let forecast = MockServer::start().await;

    // Tool declarations must never appear on the wire in simple mode
    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .and(body_string_contains("functionDeclarations"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&gemini)
        .await;

    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .respond_with(text_response("晴れの日は散歩がおすすめです。"))
        .expect(2)
        .mount(&gemini)
        .await;

    let config = config_for(&gemini, &geocode, &forecast);
    let mut chat = TenkiChat::new(&config, true);

    let first = run_turn(&mut chat, "散歩に良い天気は？").await.unwrap();
    let second = run_turn(&mut chat, "ありがとう").await.unwrap();
    assert_eq!(first, second);

    // Stateless mode never grows a session
    assert!(chat.session.is_empty());

    gemini.verify().await;
}

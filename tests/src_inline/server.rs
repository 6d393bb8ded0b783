use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;
use crate::fixtures::{dataset, record, record_with_prediction};

fn state(mode: RankingMode) -> AppState {
    let data = dataset(&[
        record_with_prediction(0, "age", 0.4, "High risk", Some(0.73)),
        record_with_prediction(0, "income", -0.3, "High risk", Some(0.73)),
        record(1, "bmi", -0.2),
    ]);
    AppState::new(data, mode)
}

#[tokio::test]
async fn test_index_defaults_to_first_scenario() {
    let query = Query(ScenarioQuery::default());
    let Html(page) = index_handler(State(state(RankingMode::TopTen)), query).await;
    assert!(page.contains("<option value=\"0\" selected>Scenario 1</option>"));
    assert!(page.contains("73%"));
}

#[tokio::test]
async fn test_index_honours_scenario_query() {
    let query = ScenarioQuery { scenario: Some(1) };
    let Html(page) = index_handler(State(state(RankingMode::TopTen)), Query(query)).await;
    assert!(page.contains("<option value=\"1\" selected>Scenario 2</option>"));
}

#[tokio::test]
async fn test_fragment_for_known_and_unknown_scenarios() {
    let Html(known) = fragment_handler(State(state(RankingMode::TopTen)), Path(0)).await;
    assert!(known.contains("Top 10 Influential Factors for Scenario 1"));
    assert!(known.contains("The model prediction is"));
    assert!(!known.contains("<html"));

    let Html(unknown) = fragment_handler(State(state(RankingMode::TopTen)), Path(12)).await;
    assert!(unknown.contains("No data for this scenario."));
}

#[tokio::test]
async fn test_json_endpoints() {
    let Json(options) = scenarios_handler(State(state(RankingMode::TopTen))).await;
    assert_eq!(options.len(), 2);
    assert_eq!(options[1].label, "Scenario 2");

    let Json(view) = scenario_json_handler(State(state(RankingMode::Full)), Path(0)).await;
    assert_eq!(view.features.len(), 2);
    assert_eq!(view.features[0].feature, "age");
    assert!(view.summary.is_none());

    let Json(health) = health_handler(State(state(RankingMode::TopTen))).await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.scenarios, 2);
}

async fn fetch(uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router(state(RankingMode::TopTen))
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_router_serves_every_route() {
    let (status, page) = fetch("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<option value=\"0\" selected>Scenario 1</option>"));

    let (status, page) = fetch("/?scenario=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<option value=\"1\" selected>Scenario 2</option>"));

    let (status, fragment) = fetch("/view/0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(fragment.contains("Top 10 Influential Factors for Scenario 1"));

    let (status, fragment) = fetch("/view/99").await;
    assert_eq!(status, StatusCode::OK);
    assert!(fragment.contains("No data for this scenario."));

    let (status, body) = fetch("/api/scenarios").await;
    assert_eq!(status, StatusCode::OK);
    let options: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(options.as_array().map(Vec::len), Some(2));
    assert_eq!(options[0]["label"], "Scenario 1");

    let (status, body) = fetch("/api/scenarios/0").await;
    assert_eq!(status, StatusCode::OK);
    let view: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(view["instance"], 0);
    assert_eq!(view["features"][0]["feature"], "income");

    let (status, body) = fetch("/api/scenarios/7").await;
    assert_eq!(status, StatusCode::OK);
    let view: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(view["features"].as_array().map(Vec::len), Some(0));

    let (status, body) = fetch("/health").await;
    assert_eq!(status, StatusCode::OK);
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["scenarios"], 2);
}

#[tokio::test]
async fn test_non_integer_ids_are_bad_requests() {
    for uri in ["/view/abc", "/api/scenarios/1.5", "/?scenario=x"] {
        let (status, _) = fetch(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = fetch("/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bind_failure_is_reported() {
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap();
    let config = ServerConfig {
        bind_addr: addr,
        mode: RankingMode::TopTen,
    };
    let err = run_server(dataset(&[record(0, "a", 0.1)]), config)
        .await
        .unwrap_err();
    assert!(matches!(err, ServeError::Bind { .. }));
}

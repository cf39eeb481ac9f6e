//! Integration tests for the HTTP API.
//!
//! Spins up an actual server on an OS-assigned port and drives it with a
//! real HTTP client, the way the tutorial page does.

use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use chess_tutor::api::router::create_router;
use chess_tutor::api::state::AppState;
use chess_tutor::config::AppConfig;

/// Helper: start the server with `config`, return its base URL.
async fn start_server_with(config: AppConfig) -> String {
    let state = AppState::new(config);
    let app = create_router(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", addr.port())
}

async fn start_server() -> String {
    start_server_with(AppConfig::default()).await
}

async fn post(base: &str, path: &str, body: Value) -> (StatusCode, Value) {
    let resp = reqwest::Client::new()
        .post(format!("{base}{path}"))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

async fn get(base: &str, path: &str) -> (StatusCode, Value) {
    let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

/// Helper: create a session via REST, return its id.
async fn create_session(base: &str, body: Value) -> String {
    let (status, json) = post(base, "/api/sessions", body).await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_str().unwrap().to_string()
}

fn squares(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|c| c["square"].as_str().unwrap())
        .collect()
}

// =====================================================================
// Health & reference text
// =====================================================================

#[tokio::test]
async fn health_reports_ok() {
    let base = start_server().await;
    let (status, json) = get(&base, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["engine"], "chess-tutor");
    assert_eq!(json["sessions"], 0);
}

#[tokio::test]
async fn piece_guides_cover_all_kinds() {
    let base = start_server().await;
    let (status, json) = get(&base, "/api/pieces").await;
    assert_eq!(status, StatusCode::OK);
    let kinds: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, ["king", "queen", "rook", "bishop", "knight", "pawn"]);
}

#[tokio::test]
async fn single_piece_guide_and_unknown_kind() {
    let base = start_server().await;
    let (status, json) = get(&base, "/api/pieces/knight").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], 3);
    assert_eq!(json["glyphs"]["white"], "♘");

    let (status, json) = get(&base, "/api/pieces/dragon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn special_moves_listed() {
    let base = start_server().await;
    let (status, json) = get(&base, "/api/special-moves").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["castling", "promotion"]);
}

// =====================================================================
// Stateless move generation
// =====================================================================

#[tokio::test]
async fn moves_on_standard_board() {
    let base = start_server().await;
    let (status, json) = post(&base, "/api/moves", json!({"row": 6, "col": 4})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["piece"]["type"], "pawn");
    assert_eq!(json["piece"]["color"], "white");
    assert_eq!(squares(&json["moves"]), ["e3", "e4", "d3", "f3"]);
}

#[tokio::test]
async fn moves_with_placement_and_square() {
    let base = start_server().await;
    let (status, json) = post(
        &base,
        "/api/moves",
        json!({"placement": "8/8/8/8/8/8/8/N7", "square": "a1"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(squares(&json["moves"]), ["c2", "b3"]);
}

#[tokio::test]
async fn moves_errors() {
    let base = start_server().await;

    let (status, json) = post(&base, "/api/moves", json!({"row": 4, "col": 4})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "EMPTY_ORIGIN");

    let (status, json) = post(&base, "/api/moves", json!({"row": 8, "col": 0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "OUT_OF_BOUNDS");

    let (status, json) = post(
        &base,
        "/api/moves",
        json!({"placement": "not/a/board", "row": 0, "col": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_PLACEMENT");

    let (status, json) = post(&base, "/api/moves", json!({"row": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_REQUEST");
}

// =====================================================================
// Sessions
// =====================================================================

#[tokio::test]
async fn session_lifecycle() {
    let base = start_server().await;
    let id = create_session(&base, json!({})).await;

    let (status, json) = get(&base, &format!("/api/sessions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["scenario"], "standard");
    assert_eq!(json["board"][0][0]["type"], "rook");
    assert_eq!(json["board"][0][0]["color"], "black");
    assert!(json["board"][4][4].is_null());
    assert!(json.get("selection").is_none());

    let (_, health) = get(&base, "/health").await;
    assert_eq!(health["sessions"], 1);

    let resp = reqwest::Client::new()
        .delete(format!("{base}/api/sessions/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let (status, json) = get(&base, &format!("/api/sessions/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn select_then_click_empty_square() {
    let base = start_server().await;
    let id = create_session(&base, json!({})).await;
    let path = format!("/api/sessions/{id}/select");

    let (status, json) = post(&base, &path, json!({"row": 7, "col": 0})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["selection"]["origin"]["square"], "a1");
    assert_eq!(squares(&json["selection"]["moves"]), ["b1", "a2"]);

    let (status, json) = post(&base, &path, json!({"square": "e4"})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.get("selection").is_none());

    let (status, json) = post(&base, &path, json!({"row": -1, "col": 3})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "OUT_OF_BOUNDS");
}

#[tokio::test]
async fn castling_demo_for_black() {
    let base = start_server().await;
    let (status, json) = post(
        &base,
        "/api/sessions",
        json!({"scenario": "castling", "side": "black"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["scenario"], "castling");
    assert_eq!(squares(&json["highlighted"]), ["e8", "h8", "a8"]);
    assert_eq!(squares(&json["targets"]), ["g8", "f8", "c8", "d8"]);
    assert_eq!(json["board"][0][4]["type"], "king");
}

#[tokio::test]
async fn promotion_demo_then_clear_and_reset() {
    let base = start_server().await;
    let id = create_session(&base, json!({})).await;

    let (status, json) = post(
        &base,
        &format!("/api/sessions/{id}/scenario"),
        json!({"scenario": "promotion"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["scenario"], "promotion");
    assert_eq!(squares(&json["targets"]), ["e8"]);
    let options: Vec<(&str, &str)> = json["promotionOptions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| (o["square"].as_str().unwrap(), o["piece"].as_str().unwrap()))
        .collect();
    assert_eq!(
        options,
        [("c8", "queen"), ("d8", "rook"), ("f8", "bishop"), ("g8", "knight")]
    );

    let (_, json) = post(&base, &format!("/api/sessions/{id}/clear"), json!({})).await;
    assert!(json["targets"].as_array().unwrap().is_empty());
    assert!(json["promotionOptions"].as_array().unwrap().is_empty());
    assert_eq!(json["board"][1][4]["type"], "pawn");

    let (_, json) = post(&base, &format!("/api/sessions/{id}/reset"), json!({})).await;
    assert_eq!(json["scenario"], "standard");
    assert_eq!(
        json["placement"],
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    );
}

#[tokio::test]
async fn isolation_demo_shows_queen_pattern() {
    let base = start_server().await;
    let (_, json) = post(&base, "/api/sessions", json!({"scenario": "queen"})).await;
    assert_eq!(json["scenario"], "queen");
    assert_eq!(json["targets"].as_array().unwrap().len(), 27);
    assert_eq!(json["board"][3][3]["type"], "queen");
}

#[tokio::test]
async fn bad_scenario_and_side_are_rejected() {
    let base = start_server().await;
    let (status, json) = post(&base, "/api/sessions", json!({"scenario": "en-passant"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "unknown scenario: en-passant");

    let (status, json) = post(
        &base,
        "/api/sessions",
        json!({"scenario": "castling", "side": "green"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn unknown_session_is_404() {
    let base = start_server().await;
    let (status, json) = post(
        &base,
        "/api/sessions/nope/select",
        json!({"row": 0, "col": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn session_limit_is_enforced() {
    let base = start_server_with(AppConfig {
        max_sessions: 2,
        ..AppConfig::default()
    })
    .await;
    create_session(&base, json!({})).await;
    create_session(&base, json!({})).await;

    let (status, json) = post(&base, "/api/sessions", json!({})).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "TOO_MANY_SESSIONS");
}

// =====================================================================
// Malformed bodies
// =====================================================================

async fn post_raw(base: &str, path: &str, body: &'static str) -> (StatusCode, Value) {
    let resp = reqwest::Client::new()
        .post(format!("{base}{path}"))
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn mistyped_fields_get_a_json_error() {
    let base = start_server().await;
    let (status, json) = post(&base, "/api/moves", json!({"row": "six", "col": 4})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_REQUEST");
    assert!(!json["error"]["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn broken_json_gets_a_json_error_on_every_body_route() {
    let base = start_server().await;
    let id = create_session(&base, json!({})).await;

    let paths = [
        "/api/moves".to_string(),
        "/api/sessions".to_string(),
        format!("/api/sessions/{id}/select"),
        format!("/api/sessions/{id}/scenario"),
    ];
    for path in &paths {
        let (status, json) = post_raw(&base, path, "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(json["error"]["code"], "INVALID_REQUEST", "{path}");
    }
}

#[tokio::test]
async fn session_can_be_created_without_a_body() {
    let base = start_server().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/sessions"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["scenario"], "standard");
}

#[tokio::test]
async fn moves_on_empty_square_of_custom_placement() {
    let base = start_server().await;
    let (status, json) = post(
        &base,
        "/api/moves",
        json!({"placement": "8/8/8/8/8/8/8/N7", "square": "b1"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "EMPTY_ORIGIN");
    assert_eq!(json["error"]["message"], "no piece at (7, 1) to generate moves from");
}

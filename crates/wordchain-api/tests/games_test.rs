//! Integration tests for the game routes.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use wordchain_test_support::SequenceRng;

#[tokio::test]
async fn test_full_game_round_trip() {
    let app = common::build_test_app_with(
        &["kitob", "bola", "ata"],
        SequenceRng::new(vec![2, 0]),
    );

    // POST /start
    let (status, json) = common::post_json(
        app.clone(),
        "/api/v1/games/start",
        &json!({ "session_id": "777" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["current_word"], "kitob");

    // POST /word — accepted, bot answers.
    let (status, json) = common::post_json(
        app.clone(),
        "/api/v1/games/word",
        &json!({ "session_id": "777", "text": "bola" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"], "continue");
    assert_eq!(json["current_word"], "ata");

    // Rejections, in validation order.
    for (text, code) in [
        ("bola", "wrong_start_letter"),
        ("ata", "word_already_used"),
        ("azot", "unknown_word"),
    ] {
        let (status, json) = common::post_json(
            app.clone(),
            "/api/v1/games/word",
            &json!({ "session_id": "777", "text": text }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["outcome"], "rejected");
        assert_eq!(json["reason"]["code"], code);
    }

    // GET /{session_id} — state unchanged by rejections.
    let (status, json) = common::get_json(app.clone(), "/api/v1/games/777").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["player_score"], 1);
    assert_eq!(json["bot_score"], 1);
    assert_eq!(json["total_words"], 3);
    assert_eq!(json["last_mover"], "bot");

    // POST /stop, then the game is gone.
    let (status, json) = common::post_json(
        app.clone(),
        "/api/v1/games/stop",
        &json!({ "session_id": "777" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"], "stopped");
    assert_eq!(json["final_scores"]["player_score"], 1);

    let (status, json) = common::get_json(app, "/api/v1/games/777").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "session_not_found");
}

#[tokio::test]
async fn test_player_win_is_retained_until_next_start() {
    // Sorted: bola, kitob. Draw 1 opens with kitob; nothing starts with 'a'.
    let app = common::build_test_app_with(&["kitob", "bola"], SequenceRng::new(vec![1]));

    common::post_json(
        app.clone(),
        "/api/v1/games/start",
        &json!({ "session_id": "win" }),
    )
    .await;
    let (status, json) = common::post_json(
        app.clone(),
        "/api/v1/games/word",
        &json!({ "session_id": "win", "text": "bola" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"], "player_win");
    assert_eq!(json["total_words"], 2);
    assert_eq!(json["elapsed_seconds"], 0);

    let (status, json) = common::get_json(app.clone(), "/api/v1/games/win").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ended_player_win");

    let (_, json) = common::get_json(app.clone(), "/api/v1/games").await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    let (_, json) = common::get_json(app, "/api/v1/games/stats").await;
    assert_eq!(json["games_started"], 1);
    assert_eq!(json["player_wins"], 1);
    assert_eq!(json["longest_chain"], 2);
}

#[tokio::test]
async fn test_active_games_lists_started_sessions() {
    let app = common::build_test_app_with(
        &["kitob", "bola", "ata"],
        SequenceRng::new(vec![0, 1]),
    );

    for key in ["a", "b"] {
        let (status, _) = common::post_json(
            app.clone(),
            "/api/v1/games/start",
            &json!({ "session_id": key }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) = common::get_json(app.clone(), "/api/v1/games").await;
    assert_eq!(status, StatusCode::OK);
    let games = json.as_array().unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0]["session_id"], "a");
    assert_eq!(games[0]["current_word"], "ata");
    assert_eq!(games[1]["current_word"], "bola");

    let (_, json) = common::get_json(app, "/api/v1/games/stats").await;
    assert_eq!(json["active_games"], 2);
}

#[tokio::test]
async fn test_stop_without_game_is_rejected() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app,
        "/api/v1/games/stop",
        &json!({ "session_id": "nobody" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"], "rejected");
    assert_eq!(json["reason"]["code"], "no_active_session");
}

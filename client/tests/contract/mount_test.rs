//! Contract Test: サーバー側マウントヘルパー
//!
//! 宣言された形に合わないリクエストはハンドラーに届く前に400になる。

use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use r38_client::routes::{RouteDraftList, RoutePick, RouteUserInfo};
use r38_client::server::mount;
use r38_client::ApiError;
use r38_common::types::{DraftList, NoParams, PickQuery, PostedPick, UserInfo};
use serde_json::Value;
use tower::ServiceExt;

use crate::support::sample_source_data;

type Recorder = Arc<Mutex<Vec<(PickQuery, PostedPick)>>>;

fn pick_app() -> (Router, Recorder) {
    let recorder: Recorder = Arc::new(Mutex::new(Vec::new()));
    let app = mount::<RoutePick, _, _, _>(
        Router::new(),
        |state: Recorder, query: PickQuery, body: PostedPick| async move {
            state.lock().unwrap().push((query, body));
            Ok::<_, ApiError>(sample_source_data(query.as_user.unwrap_or(1)))
        },
    )
    .with_state(recorder.clone());
    (app, recorder)
}

fn pick_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// 正常系: クエリとボディがデコードされてハンドラーに渡る
#[tokio::test]
async fn test_mount_pick_success() {
    let (app, recorder) = pick_app();

    let response = app
        .oneshot(pick_request("/api/pick/?as=2", r#"{"cards":[1]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["user"], 2);
    assert_eq!(body["draft"]["draftId"], 7);

    let calls = recorder.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0.as_user, Some(2));
    assert_eq!(calls[0].1.cards, vec![1]);
}

/// 異常系: cardsがないボディは400でハンドラーは呼ばれない
#[tokio::test]
async fn test_mount_pick_missing_cards() {
    let (app, recorder) = pick_app();

    let response = app
        .oneshot(pick_request("/api/pick/", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("cards"));
    assert!(recorder.lock().unwrap().is_empty());
}

/// 異常系: 整数でないasは400
#[tokio::test]
async fn test_mount_pick_invalid_as() {
    let (app, recorder) = pick_app();

    let response = app
        .oneshot(pick_request("/api/pick/?as=two", r#"{"cards":[1]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(recorder.lock().unwrap().is_empty());
}

/// 異常系: JSONとして壊れたボディは400
#[tokio::test]
async fn test_mount_pick_malformed_json() {
    let (app, _recorder) = pick_app();

    let response = app
        .oneshot(pick_request("/api/pick/", r#"{"cards":[1"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// 宣言と異なるメソッドは405
#[tokio::test]
async fn test_mount_pick_wrong_method() {
    let (app, _recorder) = pick_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/pick/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// ルートは末尾スラッシュまで一致が必要
#[tokio::test]
async fn test_mount_pick_requires_trailing_slash() {
    let (app, _recorder) = pick_app();

    let response = app
        .oneshot(pick_request("/api/pick", r#"{"cards":[1]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// ハンドラーのNotFoundは外部向けメッセージで返る
#[tokio::test]
async fn test_mount_handler_not_found() {
    let app = mount::<RouteDraftList, _, _, _>(Router::new(), |_: (), _: NoParams, _: NoParams| async {
        Err::<DraftList, _>(ApiError::NotFound("draft table empty".to_string()))
    })
    .with_state(());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/draftlist/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Not found");
}

/// ハンドラーの内部エラーは詳細を隠して500
#[tokio::test]
async fn test_mount_handler_internal_error() {
    let app = mount::<RouteUserInfo, _, _, _>(Router::new(), |_: (), _: NoParams, _: NoParams| async {
        Err::<UserInfo, _>(ApiError::Internal("session store at 10.0.0.3 refused".to_string()))
    })
    .with_state(());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/userinfo/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Internal server error");
}

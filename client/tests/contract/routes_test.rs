//! Contract Test: join / draftlist / userinfo

use crate::support::{client_for, sample_source_data};
use r38_common::types::{DraftList, DraftListEntry, UserInfo};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// POST /api/join/ - ボディにドラフトIDを載せる
#[tokio::test]
async fn test_join_draft() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/join/"))
        .and(body_json(json!({"id": 7})))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_source_data(3)))
        .expect(1)
        .mount(&mock)
        .await;

    let client = client_for(&mock.uri());
    let data = client.join(7).await.unwrap();
    assert_eq!(data.draft.draft_id, 7);
}

/// GET /api/draftlist/ - ボディを送らない
#[tokio::test]
async fn test_draft_list() {
    let mock = MockServer::start().await;
    let expected = DraftList {
        drafts: vec![DraftListEntry {
            id: 1,
            name: "cube".to_string(),
            available_seats: 3,
            status: "joinable".to_string(),
        }],
    };

    Mock::given(method("GET"))
        .and(path("/api/draftlist/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&expected))
        .expect(1)
        .mount(&mock)
        .await;

    let client = client_for(&mock.uri());
    let list = client.draft_list().await.unwrap();
    assert_eq!(list, expected);

    let requests = mock.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
    assert_eq!(requests[0].url.query(), None);
}

/// GET /api/userinfo/
#[tokio::test]
async fn test_user_info() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/userinfo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "alice",
            "picture": "https://example.com/alice.png",
            "userId": 11
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let client = client_for(&mock.uri());
    let info = client.user_info().await.unwrap();
    assert_eq!(
        info,
        UserInfo {
            name: "alice".to_string(),
            picture: "https://example.com/alice.png".to_string(),
            id: 11,
        }
    );
}

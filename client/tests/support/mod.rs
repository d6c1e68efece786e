//! テスト共通ユーティリティ


use r38_client::ApiClient;
use r38_common::types::{DraftEvent, DraftJson, Perspective, SourceData};

/// テスト用のリプレイデータ
pub fn sample_source_data(user: i64) -> SourceData {
    Perspective {
        user,
        draft: DraftJson {
            draft_id: 7,
            draft_name: "test cube".to_string(),
            events: vec![DraftEvent {
                position: 0,
                cards: vec![3],
                round: 1,
                kind: "Pick".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        },
    }
}

/// 指定URLを向いたクライアント
pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::with_client(reqwest::Client::new(), base_url)
}

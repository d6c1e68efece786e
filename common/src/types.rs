//! REST APIのワイヤ型
//!
//! ドラフトサーバーとクライアントがやり取りするJSON/クエリの形

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 1ドラフトあたりの座席数
pub const SEATS_PER_DRAFT: usize = 8;

/// 1座席あたりのパック数
pub const PACKS_PER_SEAT: usize = 3;

/// 1パックあたりのカード枚数
pub const CARDS_PER_PACK: usize = 15;

/// クエリ・ボディを持たないエンドポイント用の空の形
///
/// クエリ文字列としては空文字列、JSONとしては `{}` になる。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoParams {}

/// `POST /api/pick/` のクエリパラメータ
///
/// `as` は別ユーザーの視点で操作するためのユーザーID。
/// 未指定のときはクエリ文字列から省略される（`as=0` は送らない）。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PickQuery {
    /// 代理ユーザーID
    #[serde(rename = "as", default, skip_serializing_if = "Option::is_none")]
    pub as_user: Option<i64>,
}

impl PickQuery {
    /// 指定ユーザーの視点でピックするクエリ
    pub fn as_user(user_id: i64) -> Self {
        Self {
            as_user: Some(user_id),
        }
    }
}

/// ピック時にクライアントから送られるJSON
///
/// `cards` は必須フィールドで、省略した構築はコンパイルエラーになる。
///
/// ```compile_fail
/// use r38_common::types::PostedPick;
///
/// let pick = PostedPick {};
/// ```
///
/// `Default` も実装しないので、`cards` を書かずに埋めることもできない。
///
/// ```compile_fail
/// use r38_common::types::PostedPick;
///
/// let pick = PostedPick {
///     ..Default::default()
/// };
/// ```
///
/// ```compile_fail
/// use r38_common::types::PostedPick;
///
/// let pick = PostedPick::default();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostedPick {
    /// ピックするカードID
    pub cards: Vec<i64>,
}

impl PostedPick {
    /// カードIDの列からピックを作成
    pub fn new(cards: impl Into<Vec<i64>>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

/// ドラフト参加時にクライアントから送られるJSON
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostedJoin {
    /// 参加するドラフトID
    pub id: i64,
}

/// ピック/参加APIが返すリプレイデータ
///
/// クライアント側のパーサーが受け取る `SourceData` そのもの。
pub type SourceData = Perspective;

/// どのユーザーの視点のリプレイデータかを示す
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Perspective {
    /// 視点ユーザーID
    pub user: i64,
    /// ドラフト本体
    pub draft: DraftJson,
}

/// リプレイビューアー向けのドラフト記述
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftJson {
    /// ドラフトID
    pub draft_id: i64,
    /// ドラフト名
    pub draft_name: String,
    /// 座席
    pub seats: [Seat; SEATS_PER_DRAFT],
    /// イベント列
    pub events: Vec<DraftEvent>,
}

/// 座席
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    /// パック内容（カードの中身はクライアントがそのまま扱う）
    pub packs: [[Value; CARDS_PER_PACK]; PACKS_PER_SEAT],
    /// プレイヤー名
    pub player_name: String,
    /// プレイヤーID
    pub player_id: i64,
    /// プレイヤー画像URL
    pub player_image: String,
}

/// ドラフトイベント
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DraftEvent {
    /// 座席位置
    pub position: i64,
    /// アナウンス
    pub announcements: Vec<String>,
    /// 対象カード
    pub cards: Vec<i64>,
    /// 変更したプレイヤー
    pub player_modified: i64,
    /// ドラフト全体の変更番号
    pub draft_modified: i64,
    /// ラウンド
    pub round: i64,
    /// Librarian効果によるピックか
    pub librarian: bool,
    /// イベント種別
    #[serde(rename = "type")]
    pub kind: String,
}

/// ドラフト一覧
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DraftList {
    /// ドラフト
    pub drafts: Vec<DraftListEntry>,
}

/// ドラフト一覧の1行
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DraftListEntry {
    /// ドラフトID
    pub id: i64,
    /// ドラフト名
    pub name: String,
    /// 空き座席数
    pub available_seats: i64,
    /// 状態（"joinable" 等、サーバーが決める文字列）
    pub status: String,
}

/// ログイン中ユーザーの情報
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    /// 表示名
    pub name: String,
    /// アバター画像URL
    pub picture: String,
    /// ユーザーID
    #[serde(rename = "userId")]
    pub id: i64,
}

/// エラー時にサーバーが返すJSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// エラーメッセージ
    pub error: String,
}

impl JsonError {
    /// メッセージからエラーボディを作成
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

//! エンドポイント記述子
//!
//! ルートパス・HTTPメソッド・クエリ/ボディ/レスポンスの型を1か所で宣言し、
//! クライアント呼び出しとサーバー側の検証の両方から参照する。

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ClientError, ClientResult};

/// エンドポイントのHTTPメソッド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl Method {
    /// メソッド名（大文字）
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// リクエストボディを送るメソッドか
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// reqwest用のメソッドに変換
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }

    /// axumのルーティング用フィルタに変換
    pub fn to_filter(self) -> axum::routing::MethodFilter {
        use axum::routing::MethodFilter;

        match self {
            Self::Get => MethodFilter::GET,
            Self::Post => MethodFilter::POST,
            Self::Put => MethodFilter::PUT,
            Self::Patch => MethodFilter::PATCH,
            Self::Delete => MethodFilter::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ルートとメソッドの組
///
/// モジュールロード時に `const` として作られ、以後変更されない。
/// ルートは末尾スラッシュを含めてそのまま使われる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteDescriptor {
    /// URLパス（例: "/api/pick/"）
    pub route: &'static str,
    /// HTTPメソッド
    pub method: Method,
}

impl RouteDescriptor {
    /// 記述子を作成
    pub const fn new(method: Method, route: &'static str) -> Self {
        Self { route, method }
    }
}

impl std::fmt::Display for RouteDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.route)
    }
}

/// 型付きエンドポイント
///
/// 実装型そのものは値を持たないマーカーで、関連型がクエリ・ボディ・
/// レスポンスの形を固定する。
pub trait Endpoint: Send + Sync + 'static {
    /// クエリパラメータの形
    type Query: Serialize + DeserializeOwned + Send + Sync + 'static;
    /// リクエストボディの形
    type Body: Serialize + DeserializeOwned + Send + Sync + 'static;
    /// レスポンスの形
    type Response: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// ルートとメソッド
    const DESCRIPTOR: RouteDescriptor;
}

/// ベースURLとクエリからリクエストURLを組み立てる
///
/// エンコード結果が空のときは `?` を付けない。
pub fn request_url<E: Endpoint>(base_url: &str, query: &E::Query) -> ClientResult<String> {
    let mut url = format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        E::DESCRIPTOR.route
    );
    let encoded = serde_urlencoded::to_string(query)?;
    if !encoded.is_empty() {
        url.push('?');
        url.push_str(&encoded);
    }
    reqwest::Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;
    Ok(url)
}

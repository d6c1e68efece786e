//! サーバー側マウントヘルパー
//!
//! エンドポイント記述子をaxumの `Router` に登録し、受信したクエリとボディを
//! 宣言された形で検証してからハンドラーへ渡す。

use std::future::Future;

use axum::{
    body::Bytes,
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    routing::on,
    Json, Router,
};
use tracing::debug;

use crate::endpoint::Endpoint;
use crate::error::ApiError;

/// エンドポイント `E` をルーターに登録する
///
/// クエリ文字列は `E::Query`、ボディを持つメソッドではリクエスト本文が
/// `E::Body` としてデコードされる。デコードに失敗した場合ハンドラーは
/// 呼ばれず、`400 {"error": "..."}` を返す。
pub fn mount<E, S, H, Fut>(router: Router<S>, handler: H) -> Router<S>
where
    E: Endpoint,
    S: Clone + Send + Sync + 'static,
    H: Fn(S, E::Query, E::Body) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<E::Response, ApiError>> + Send + 'static,
{
    let desc = E::DESCRIPTOR;
    debug!(route = %desc, "Mounting endpoint");

    router.route(
        desc.route,
        on(
            desc.method.to_filter(),
            move |State(state): State<S>, uri: Uri, body: Bytes| async move {
                dispatch::<E, S, H, Fut>(handler, state, uri, body).await
            },
        ),
    )
}

async fn dispatch<E, S, H, Fut>(handler: H, state: S, uri: Uri, body: Bytes) -> Response
where
    E: Endpoint,
    H: Fn(S, E::Query, E::Body) -> Fut,
    Fut: Future<Output = Result<E::Response, ApiError>>,
{
    let query = match decode_query::<E>(&uri) {
        Ok(query) => query,
        Err(e) => return e.into_response(),
    };
    let body = match decode_body::<E>(&body) {
        Ok(body) => body,
        Err(e) => return e.into_response(),
    };

    match handler(state, query, body).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => e.into_response(),
    }
}

/// クエリ文字列を `E::Query` としてデコードする
pub fn decode_query<E: Endpoint>(uri: &Uri) -> Result<E::Query, ApiError> {
    serde_urlencoded::from_str(uri.query().unwrap_or_default())
        .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))
}

/// リクエスト本文を `E::Body` としてデコードする
///
/// ボディを持たないメソッドでは本文を無視し、空オブジェクトとして扱う。
pub fn decode_body<E: Endpoint>(body: &[u8]) -> Result<E::Body, ApiError> {
    let raw: &[u8] = if E::DESCRIPTOR.method.has_body() {
        body
    } else {
        b"{}"
    };
    serde_json::from_slice(raw)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))
}

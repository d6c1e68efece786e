//! ドラフトサーバーAPIクライアント
//!
//! エンドポイント記述子からリクエストを組み立て、型付きレスポンスを返す

use std::marker::PhantomData;
use std::time::Duration;

use r38_common::config::ClientConfig;
use r38_common::types::{
    DraftList, JsonError, NoParams, PickQuery, PostedJoin, PostedPick, SourceData, UserInfo,
};
use reqwest::Client;
use tracing::{debug, warn};

use crate::endpoint::{request_url, Endpoint, RouteDescriptor};
use crate::error::{ClientError, ClientResult};
use crate::routes::{RouteDraftList, RouteJoin, RoutePick, RouteUserInfo};

/// ドラフトサーバーAPIクライアント
///
/// 内部の `reqwest::Client` はクローン間で共有され、接続プーリングが効く。
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    /// 設定からクライアントを作成
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self::with_client(http_client, &config.base_url))
    }

    /// 既存のHTTPクライアントを使って作成
    pub fn with_client(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// ベースURL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// エンドポイントに束縛した呼び出しハンドルを返す
    pub fn endpoint<E: Endpoint>(&self) -> EndpointCall<'_, E> {
        EndpointCall {
            client: self,
            _endpoint: PhantomData,
        }
    }

    /// エンドポイントを1回呼び出す
    ///
    /// ボディはボディを持つメソッドのときだけJSONで送る。
    /// 2xx以外は `ClientError::Status`、本文が宣言した形でなければ
    /// `ClientError::Decode` を返す。
    pub async fn call<E: Endpoint>(
        &self,
        query: &E::Query,
        body: &E::Body,
    ) -> ClientResult<E::Response> {
        let desc = E::DESCRIPTOR;
        let url = request_url::<E>(&self.base_url, query)?;

        debug!(method = %desc.method, url = %url, "Sending API request");

        let mut request = self.http_client.request(desc.method.to_reqwest(), &url);
        if desc.method.has_body() {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<JsonError>(&bytes)
                .map(|e| e.error)
                .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());
            warn!(
                method = %desc.method,
                url = %url,
                status = status.as_u16(),
                "API request failed: {}",
                message
            );
            return Err(ClientError::Status { status, message });
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(route = %desc, "Failed to decode response: {}", e);
            ClientError::Decode(e)
        })
    }

    /// カードをピックする
    ///
    /// `as_user` を指定すると、そのユーザーの視点でピックする。
    pub async fn pick(&self, cards: Vec<i64>, as_user: Option<i64>) -> ClientResult<SourceData> {
        self.call::<RoutePick>(&PickQuery { as_user }, &PostedPick { cards })
            .await
    }

    /// ドラフトに参加する
    pub async fn join(&self, draft_id: i64) -> ClientResult<SourceData> {
        self.call::<RouteJoin>(&NoParams {}, &PostedJoin { id: draft_id })
            .await
    }

    /// ドラフト一覧を取得
    pub async fn draft_list(&self) -> ClientResult<DraftList> {
        self.call::<RouteDraftList>(&NoParams {}, &NoParams {}).await
    }

    /// ログイン中ユーザーの情報を取得
    pub async fn user_info(&self) -> ClientResult<UserInfo> {
        self.call::<RouteUserInfo>(&NoParams {}, &NoParams {}).await
    }
}

/// 1つのエンドポイントに束縛された呼び出しハンドル
pub struct EndpointCall<'a, E> {
    client: &'a ApiClient,
    _endpoint: PhantomData<fn() -> E>,
}

impl<E: Endpoint> EndpointCall<'_, E> {
    /// 束縛しているエンドポイントの記述子
    pub fn descriptor(&self) -> RouteDescriptor {
        E::DESCRIPTOR
    }

    /// リクエストURLを組み立てる（送信はしない）
    pub fn url(&self, query: &E::Query) -> ClientResult<String> {
        request_url::<E>(self.client.base_url(), query)
    }

    /// エンドポイントを呼び出す
    pub async fn call(&self, query: &E::Query, body: &E::Body) -> ClientResult<E::Response> {
        self.client.call::<E>(query, body).await
    }
}

//! プロバイダAPIのモックサーバー
//!
//! httpmockでSerpAPIとNewsAPIを模倣し、外部通信を遮断した統合テスト環境を提供します。

#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use riskboard::app::NewsClients;
use riskboard::infra::api::http::ReqwestHttpClient;
use riskboard::infra::api::newsapi::NewsApiClient;
use riskboard::infra::api::serpapi::SerpApiClient;
use serde_json::{json, Value};

pub const SERP_KEY: &str = "serp-test-key";
pub const NEWS_KEY: &str = "news-test-key";

/// SerpAPIとNewsAPIのモックサーバー
pub struct ProviderMockServer {
    server: MockServer,
}

impl ProviderMockServer {
    /// 空きポートでモックサーバーを開始
    pub async fn start() -> Self {
        Self {
            server: MockServer::start_async().await,
        }
    }

    /// SerpAPIのニュース検索成功をモック
    pub async fn mock_serpapi_success(&self, query: &str, num: usize, body: Value) -> Mock<'_> {
        self.server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search.json")
                    .query_param("engine", "google")
                    .query_param("q", query)
                    .query_param("api_key", SERP_KEY)
                    .query_param("tbm", "nws")
                    .query_param("num", num.to_string());
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(body);
            })
            .await
    }

    /// NewsAPIの検索成功をモック
    pub async fn mock_newsapi_success(&self, query: &str, page_size: usize, body: Value) -> Mock<'_> {
        self.server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/everything")
                    .query_param("q", query)
                    .query_param("language", "en")
                    .query_param("pageSize", page_size.to_string())
                    .query_param("apiKey", NEWS_KEY);
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(body);
            })
            .await
    }

    /// NewsAPIの認証エラー（401）をモック
    pub async fn mock_newsapi_unauthorized(&self) -> Mock<'_> {
        self.server
            .mock_async(|when, then| {
                when.method(GET).path("/v2/everything");
                then.status(401)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "status": "error",
                        "code": "apiKeyInvalid",
                        "message": "Your API key is invalid or incorrect."
                    }));
            })
            .await
    }

    /// SerpAPIのサーバーエラー（500）をモック
    pub async fn mock_serpapi_server_error(&self) -> Mock<'_> {
        self.server
            .mock_async(|when, then| {
                when.method(GET).path("/search.json");
                then.status(500).body("internal error");
            })
            .await
    }

    /// SerpAPIがペイロードでエラーを返すケースをモック
    pub async fn mock_serpapi_payload_error(&self, message: &str) -> Mock<'_> {
        self.server
            .mock_async(|when, then| {
                when.method(GET).path("/search.json");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({ "error": message }));
            })
            .await
    }

    /// モックサーバーのベースURL取得
    pub fn url(&self) -> String {
        self.server.base_url()
    }

    /// モックサーバーに向けたクライアント一式を作成
    pub fn clients(&self) -> NewsClients<ReqwestHttpClient> {
        self.clients_with_keys(Some(SERP_KEY), Some(NEWS_KEY))
    }

    /// APIキーを指定してクライアント一式を作成
    pub fn clients_with_keys(
        &self,
        serp_key: Option<&str>,
        news_key: Option<&str>,
    ) -> NewsClients<ReqwestHttpClient> {
        NewsClients {
            serpapi: SerpApiClient::new(
                ReqwestHttpClient::new(),
                serp_key.map(str::to_string),
                &self.url(),
                5,
            ),
            newsapi: NewsApiClient::new(
                ReqwestHttpClient::new(),
                news_key.map(str::to_string),
                &self.url(),
                5,
            ),
        }
    }
}

/// mock/配下のJSONフィクスチャを読み込む
pub fn fixture(path: &str) -> Value {
    let text = std::fs::read_to_string(path).expect("フィクスチャの読み込みに失敗");
    serde_json::from_str(&text).expect("フィクスチャのJSONが不正")
}

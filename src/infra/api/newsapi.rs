use super::http::{HttpClient, QueryParams};
use crate::types::{ConfigError, InfraError};
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

/// NewsAPIの本番エンドポイント
pub const NEWSAPI_BASE_URL: &str = "https://newsapi.org";
/// APIキーを格納する環境変数名
pub const NEWS_API_KEY_ENV: &str = "NEWS_API_KEY";

/// NewsAPI（`/v2/everything`）のクライアント
pub struct NewsApiClient<H: HttpClient> {
    http: H,
    api_key: Option<String>,
    base_url: String,
    timeout_secs: u64,
}

impl<H: HttpClient> NewsApiClient<H> {
    /// 新しいクライアントを作成
    pub fn new(http: H, api_key: Option<String>, base_url: &str, timeout_secs: u64) -> Self {
        Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        }
    }

    /// 内部のHTTPクライアント
    pub fn http_client(&self) -> &H {
        &self.http
    }

    /// 英語記事を検索し、レスポンスのJSONを返す
    pub async fn get_everything(&self, query: &str, page_size: usize) -> Result<Value> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| InfraError::from(ConfigError::missing_credential(NEWS_API_KEY_ENV)))?;

        let url = format!("{}/v2/everything", self.base_url);
        let params: QueryParams = vec![
            ("q", query.to_string()),
            ("language", "en".to_string()),
            ("pageSize", page_size.to_string()),
            ("apiKey", api_key.to_string()),
        ];

        debug!(query, page_size, "NewsAPIへリクエスト");
        let payload = self
            .http
            .get_json(&url, &params, self.timeout_secs)
            .await
            .context("NewsAPIの検索に失敗")?;

        if payload.get("status").and_then(Value::as_str) == Some("error") {
            let message = payload
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("不明なエラー");
            return Err(InfraError::provider("NewsAPI", message).into());
        }

        Ok(payload)
    }
}

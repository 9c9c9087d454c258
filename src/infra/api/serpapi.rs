use super::http::{HttpClient, QueryParams};
use crate::types::{ConfigError, InfraError};
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

/// SerpAPIの本番エンドポイント
pub const SERPAPI_BASE_URL: &str = "https://serpapi.com";
/// APIキーを格納する環境変数名
pub const SERP_API_KEY_ENV: &str = "SERP_API_KEY";

/// SerpAPI（Googleニュース検索）のクライアント
///
/// 生のJSONペイロードを返すだけで、レコードへの変換は`core::news`で行う。
pub struct SerpApiClient<H: HttpClient> {
    http: H,
    api_key: Option<String>,
    base_url: String,
    timeout_secs: u64,
}

impl<H: HttpClient> SerpApiClient<H> {
    /// 新しいクライアントを作成
    ///
    /// APIキーが無くても作成でき、不足は検索時にエラーとなる。
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

    /// `tbm=nws`でニュース検索を行い、レスポンスのJSONを返す
    pub async fn search_news(&self, query: &str, num_results: usize) -> Result<Value> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| InfraError::from(ConfigError::missing_credential(SERP_API_KEY_ENV)))?;

        let url = format!("{}/search.json", self.base_url);
        let params: QueryParams = vec![
            ("engine", "google".to_string()),
            ("q", query.to_string()),
            ("api_key", api_key.to_string()),
            ("tbm", "nws".to_string()),
            ("num", num_results.to_string()),
        ];

        debug!(query, num_results, "SerpAPIへリクエスト");
        let payload = self
            .http
            .get_json(&url, &params, self.timeout_secs)
            .await
            .context("SerpAPIの検索に失敗")?;

        if let Some(message) = payload.get("error").and_then(Value::as_str) {
            return Err(InfraError::provider("SerpAPI", message).into());
        }

        Ok(payload)
    }
}

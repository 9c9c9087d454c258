use crate::types::InfraError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Mutex;
use std::time::Duration;

/// クエリパラメータの並び（キー, 値）
pub type QueryParams = Vec<(&'static str, String)>;

/// HTTPクライアントの抽象化トレイト
///
/// このトレイトは、実際のHTTP通信とモック実装の両方を
/// 統一的に扱えるようにするためのインターフェースです。
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// 指定されたURLにGETリクエストを送り、JSONレスポンスを取得する
    ///
    /// # Arguments
    /// * `url` - 取得対象のURL
    /// * `params` - クエリパラメータ
    /// * `timeout_secs` - タイムアウト時間（秒）
    async fn get_json(&self, url: &str, params: &QueryParams, timeout_secs: u64) -> Result<Value>;
}

/// `reqwest` を使用した本番用のHTTPクライアント実装
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// 新しいHTTPクライアントを作成
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get_json(&self, url: &str, params: &QueryParams, timeout_secs: u64) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .query(params)
            .timeout(Duration::from_secs(timeout_secs))
            .send()
            .await
            .map_err(|e| InfraError::http_request(url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| InfraError::http_request(url, e))?;

        if !status.is_success() {
            return Err(InfraError::http_status(url, status.as_u16(), body).into());
        }

        let payload = serde_json::from_str(&body)
            .map_err(|e| InfraError::serialization(format!("レスポンスJSON: {}", url), e))?;
        Ok(payload)
    }
}

/// モッククライアントが受け取ったリクエストの記録
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    /// 指定キーのクエリパラメータ値を取得
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// テスト用のモックHTTPクライアント
///
/// この実装はテスト時にDIされ、実際のHTTPリクエストを行わずに
/// 定義済みのレスポンスやエラーを返します。
pub struct MockHttpClient {
    /// モック時に返すレスポンス内容
    pub mock_response: Value,
    /// モック時に返すステータス（成功/失敗の制御）
    pub should_succeed: bool,
    /// エラー時に返すメッセージ
    pub error_message: Option<String>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockHttpClient {
    /// 成功レスポンスを返すモッククライアントを作成
    pub fn new_success(mock_response: Value) -> Self {
        Self {
            mock_response,
            should_succeed: true,
            error_message: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// エラーレスポンスを返すモッククライアントを作成
    pub fn new_error(error_message: &str) -> Self {
        Self {
            mock_response: Value::Null,
            should_succeed: false,
            error_message: Some(error_message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// これまでに受け取ったリクエストの一覧
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get_json(&self, url: &str, params: &QueryParams, _timeout_secs: u64) -> Result<Value> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                url: url.to_string(),
                params: params
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            });
        }

        if self.should_succeed {
            Ok(self.mock_response.clone())
        } else {
            let error_msg = self
                .error_message
                .as_deref()
                .unwrap_or("Mock HTTP error");
            Err(anyhow::anyhow!("モックHTTPエラー: {}", error_msg))
                .context(format!("リクエスト失敗: {}", url))
        }
    }
}

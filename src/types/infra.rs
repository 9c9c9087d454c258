use crate::types::ConfigError;
use thiserror::Error;

/// インフラストラクチャ層のエラー型
/// HTTP通信、ファイルシステム、シリアライゼーションなど基盤的なエラーを定義
#[derive(Error, Debug)]
pub enum InfraError {
    /// ファイルシステムエラー
    #[error("ファイルシステムエラー: {path} - {source}")]
    FileSystem {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP通信エラー（接続失敗、タイムアウトなど）
    #[error("HTTP通信エラー: {url} - {source}")]
    HttpRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTPステータスが成功以外
    #[error("HTTPステータスエラー: {url} - {status}: {body}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },

    /// プロバイダがペイロード内でエラーを返した
    #[error("プロバイダエラー: {provider} - {message}")]
    Provider { provider: String, message: String },

    /// シリアライゼーションエラー
    #[error("シリアライゼーションエラー: {context} - {source}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// 設定エラー
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl InfraError {
    /// ファイルシステムエラーを作成
    pub fn file_system<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// HTTP通信エラーを作成
    pub fn http_request<U: Into<String>>(url: U, source: reqwest::Error) -> Self {
        Self::HttpRequest {
            url: url.into(),
            source,
        }
    }

    /// HTTPステータスエラーを作成
    pub fn http_status<U: Into<String>, B: Into<String>>(url: U, status: u16, body: B) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// プロバイダエラーを作成
    pub fn provider<P: Into<String>, M: Into<String>>(provider: P, message: M) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// シリアライゼーションエラーを作成
    pub fn serialization<C: Into<String>>(context: C, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }
}

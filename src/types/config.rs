use thiserror::Error;

/// 設定関連のエラー型
/// APIキー、設定ファイル、ユーザー入力値の検証に関するエラーを定義
#[derive(Error, Debug)]
pub enum ConfigError {
    /// プロバイダのAPIキーが設定されていない（呼び出し時に判明する）
    #[error("APIキーが設定されていません: 環境変数 {name}")]
    MissingCredential { name: String },

    /// 設定値や入力値が許容範囲外
    #[error("設定値が不正です: {reason}")]
    InvalidValue { reason: String },

    /// --configで指定した設定ファイルが存在しない
    #[error("設定ファイルが見つかりません: {path}")]
    MissingConfigFile { path: String },
}

impl ConfigError {
    /// APIキー不足エラーを作成
    pub fn missing_credential<N: Into<String>>(name: N) -> Self {
        Self::MissingCredential { name: name.into() }
    }

    /// 不正な設定値エラーを作成
    pub fn invalid_value<R: Into<String>>(reason: R) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// 設定ファイル不足エラーを作成
    pub fn missing_config_file<P: Into<String>>(path: P) -> Self {
        Self::MissingConfigFile { path: path.into() }
    }
}

/// 設定エラーのResult型エイリアス
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

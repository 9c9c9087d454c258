use crate::infra::api::newsapi::{NEWSAPI_BASE_URL, NEWS_API_KEY_ENV};
use crate::infra::api::serpapi::{SERPAPI_BASE_URL, SERP_API_KEY_ENV};
use crate::infra::storage::file::load_yaml_from_file;
use crate::types::{ConfigError, ConfigResult, InfraError};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::ErrorKind;
use std::path::Path;

/// 結果件数の下限と上限
pub const MIN_NUM_RESULTS: usize = 1;
pub const MAX_NUM_RESULTS: usize = 10;

/// プロバイダAPIの認証情報
///
/// 起動時には存在チェックを行わない。不足は該当プロバイダの呼び出し時に判明する。
#[derive(Debug, Clone, Default)]
pub struct ApiCredentials {
    pub serp_api_key: Option<String>,
    pub news_api_key: Option<String>,
}

impl ApiCredentials {
    /// 環境変数から認証情報を読み込む
    /// `.env`の読み込みは呼び出し側で先に行っておくこと
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 変数名から値を引く関数で認証情報を組み立てる
    ///
    /// 空白のみの値は未設定として扱う。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            serp_api_key: read(SERP_API_KEY_ENV),
            news_api_key: read(NEWS_API_KEY_ENV),
        }
    }
}

/// ダッシュボードの設定値
///
/// YAMLで一部のキーだけ指定した場合、残りは既定値になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_query: String,
    pub default_num_results: usize,
    pub papers_path: String,
    pub serpapi_base_url: String,
    pub newsapi_base_url: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_query: "climate risk insurance".to_string(),
            default_num_results: 5,
            papers_path: "data/research_papers.json".to_string(),
            serpapi_base_url: SERPAPI_BASE_URL.to_string(),
            newsapi_base_url: NEWSAPI_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Settings {
    /// YAMLファイルから設定を読み込む
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let settings: Settings =
            load_yaml_from_file(path).map_err(|e| settings_load_error(e, path))?;
        settings.validate()?;
        Ok(settings)
    }

    /// 設定値の整合性を検証する
    pub fn validate(&self) -> ConfigResult<()> {
        validate_num_results(self.default_num_results)?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid_value("timeout_secsは1以上である必要があります"));
        }
        Ok(())
    }
}

/// ファイルが存在しない場合は`MissingConfigFile`に置き換える
fn settings_load_error(err: anyhow::Error, path: &Path) -> anyhow::Error {
    let not_found = matches!(
        err.downcast_ref::<InfraError>(),
        Some(InfraError::FileSystem { source, .. }) if source.kind() == ErrorKind::NotFound
    );
    if not_found {
        ConfigError::missing_config_file(path.display().to_string()).into()
    } else {
        err.context(format!("設定ファイルの読み込みに失敗: {}", path.display()))
    }
}

/// 結果件数が許容範囲内か検証する
pub fn validate_num_results(num_results: usize) -> ConfigResult<usize> {
    if (MIN_NUM_RESULTS..=MAX_NUM_RESULTS).contains(&num_results) {
        Ok(num_results)
    } else {
        Err(ConfigError::invalid_value(format!(
            "結果件数は{}〜{}の範囲で指定してください: {}",
            MIN_NUM_RESULTS, MAX_NUM_RESULTS, num_results
        )))
    }
}

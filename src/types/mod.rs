//! 型定義モジュール
//!
//! アプリケーション全体で使用される共通的な型定義を管理します。
//! - エラー型: 設定エラー、インフラエラー
//! - 処理結果型: 1回の描画パスの集計

pub mod config;
pub mod infra;
pub mod result;

// 便利な再エクスポート
pub use config::{ConfigError, ConfigResult};
pub use infra::InfraError;
pub use result::PassSummary;

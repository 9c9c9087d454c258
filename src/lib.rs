//! 気候リスク・保険ダッシュボード
//!
//! 2つのニュース検索API（SerpAPI、NewsAPI）とローカルの論文ファイルから
//! レコードを集め、タグ一覧の作成とタグによる絞り込みを行う。

pub mod app;
pub mod cli;
pub mod core;
pub mod infra;
pub mod types;

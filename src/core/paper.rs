use crate::core::tag::Tagged;
use crate::infra::storage::file::load_json_from_file;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use tracing::info;

/// 論文の著者欄（文字列または文字列の配列）
///
/// どちらでもない値は`Other`にそのまま保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Authors {
    Text(String),
    List(Vec<String>),
    Other(Value),
}

impl Authors {
    /// 表示できる著者名が無いか
    pub fn is_empty(&self) -> bool {
        match self {
            Authors::Text(text) => text.trim().is_empty(),
            Authors::List(names) => names.iter().all(|n| n.trim().is_empty()),
            Authors::Other(value) => value.is_null(),
        }
    }
}

impl Default for Authors {
    fn default() -> Self {
        Authors::List(Vec::new())
    }
}

impl fmt::Display for Authors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authors::Text(text) => write!(f, "{}", text),
            Authors::List(names) => write!(f, "{}", names.join(", ")),
            Authors::Other(Value::Null) => Ok(()),
            Authors::Other(value) => write!(f, "{}", value),
        }
    }
}

/// タグ付け済みの研究論文
///
/// スキーマは検証しない。欠けた表示用フィールドは空のまま読み込み、描画時に補う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchPaper {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Authors,
    #[serde(default)]
    pub date: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Tagged for ResearchPaper {
    fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }
}

/// JSON配列の論文ファイルを読み込む
///
/// ファイルが無い、またはJSON配列として読めない場合はエラーを返す。
/// 個々の論文のフィールド欠けはエラーにしない。
pub fn load_research_papers<P: AsRef<Path>>(file_path: P) -> Result<Vec<ResearchPaper>> {
    let file_path = file_path.as_ref();
    let papers: Vec<ResearchPaper> = load_json_from_file(file_path)
        .with_context(|| format!("論文ファイルの読み込みに失敗: {}", file_path.display()))?;
    info!(count = papers.len(), path = %file_path.display(), "論文を読み込み");
    Ok(papers)
}

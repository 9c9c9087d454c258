use crate::app::DashboardRequest;
use crate::infra::config::{validate_num_results, Settings};
use crate::types::ConfigResult;
use clap::Parser;

/// 気候リスクと保険に関するニュースと研究論文をタグで絞り込んで表示する
#[derive(Parser, Debug)]
#[command(name = "riskboard", version, about)]
pub struct Cli {
    /// ニュースの検索語（未指定時は設定ファイルの既定値）
    #[arg(short, long)]
    pub query: Option<String>,

    /// プロバイダごとの取得件数（1〜10）
    #[arg(short = 'n', long)]
    pub num_results: Option<usize>,

    /// Google検索 (SerpAPI) を使わない
    #[arg(long)]
    pub no_serpapi: bool,

    /// NewsAPIを使わない
    #[arg(long)]
    pub no_newsapi: bool,

    /// 絞り込むタグ（未指定時はタグ一覧の先頭）
    #[arg(short, long)]
    pub tag: Option<String>,

    /// 研究論文のJSONファイル
    #[arg(long, env = "RISKBOARD_PAPERS")]
    pub papers: Option<String>,

    /// 設定ファイル（YAML）
    #[arg(long, env = "RISKBOARD_CONFIG")]
    pub config: Option<String>,

    /// タグ一覧だけを表示する
    #[arg(long)]
    pub list_tags: bool,
}

impl Cli {
    /// 設定値を既定としてユーザー入力を組み立てる
    pub fn to_request(&self, settings: &Settings) -> ConfigResult<DashboardRequest> {
        let num_results = validate_num_results(self.num_results.unwrap_or(settings.default_num_results))?;
        Ok(DashboardRequest {
            query: self
                .query
                .clone()
                .unwrap_or_else(|| settings.default_query.clone()),
            num_results,
            use_serpapi: !self.no_serpapi,
            use_newsapi: !self.no_newsapi,
            selected_tag: self.tag.clone(),
        })
    }

    /// 論文ファイルのパス（引数が優先）
    pub fn papers_path(&self, settings: &Settings) -> String {
        self.papers
            .clone()
            .unwrap_or_else(|| settings.papers_path.clone())
    }
}

use crate::{
    core::{
        news::{fetch_newsapi_news, fetch_serpapi_news, NewsRecord},
        paper::{load_research_papers, ResearchPaper},
        tag::{filter_by_tag, get_all_tags, select_tag},
    },
    infra::{
        api::{http::HttpClient, newsapi::NewsApiClient, serpapi::SerpApiClient},
        config::validate_num_results,
    },
    types::PassSummary,
};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// 1回の描画パスに対するユーザー入力
#[derive(Debug, Clone)]
pub struct DashboardRequest {
    pub query: String,
    pub num_results: usize,
    pub use_serpapi: bool,
    pub use_newsapi: bool,
    pub selected_tag: Option<String>,
}

/// 描画パスで使うプロバイダクライアント一式
pub struct NewsClients<H: HttpClient> {
    pub serpapi: SerpApiClient<H>,
    pub newsapi: NewsApiClient<H>,
}

/// 描画パスの結果（フィルタ済みのコレクション）
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub all_tags: Vec<String>,
    pub selected_tag: Option<String>,
    pub news: Vec<NewsRecord>,
    pub papers: Vec<ResearchPaper>,
    pub summary: PassSummary,
}

/// ニュースを有効なプロバイダから順に取得する
///
/// SerpAPI、NewsAPIの順に追加する。どちらかが失敗した時点でエラーを返す。
pub async fn collect_news<H: HttpClient>(
    clients: &NewsClients<H>,
    request: &DashboardRequest,
) -> Result<Vec<NewsRecord>> {
    let mut news_articles = Vec::new();

    if request.use_serpapi {
        let records = fetch_serpapi_news(&clients.serpapi, &request.query, request.num_results)
            .await
            .context("Google検索 (SerpAPI) からのニュース取得に失敗")?;
        news_articles.extend(records);
    }

    if request.use_newsapi {
        let records = fetch_newsapi_news(&clients.newsapi, &request.query, request.num_results)
            .await
            .context("NewsAPIからのニュース取得に失敗")?;
        news_articles.extend(records);
    }

    Ok(news_articles)
}

/// 描画パスのメイン実行関数（依存性を注入）
///
/// 1. 有効なプロバイダからニュースを取得
/// 2. 論文ファイルを読み込み
/// 3. 全コレクションからタグカタログを作成し、タグを選択
/// 4. 各コレクションを選択タグで絞り込み
pub async fn run_dashboard_pass<H: HttpClient, P: AsRef<Path>>(
    clients: &NewsClients<H>,
    request: &DashboardRequest,
    papers_path: P,
) -> Result<DashboardView> {
    validate_num_results(request.num_results)?;
    info!(
        query = %request.query,
        num_results = request.num_results,
        serpapi = request.use_serpapi,
        newsapi = request.use_newsapi,
        "描画パス開始"
    );

    let news_articles = collect_news(clients, request).await?;
    let research_papers = load_research_papers(papers_path)?;

    let all_tags = get_all_tags(&[&news_articles, &research_papers]);
    let selected_tag = select_tag(&all_tags, request.selected_tag.as_deref());

    let (news, papers) = match selected_tag.as_deref() {
        Some(tag) => (
            filter_by_tag(&news_articles, tag),
            filter_by_tag(&research_papers, tag),
        ),
        None => {
            warn!("選択できるタグがありません");
            (Vec::new(), Vec::new())
        }
    };

    let summary = PassSummary::new(
        news_articles.len(),
        research_papers.len(),
        news.len(),
        papers.len(),
    );
    info!("{}", summary);

    Ok(DashboardView {
        all_tags,
        selected_tag,
        news,
        papers,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::api::http::MockHttpClient;
    use serde_json::json;

    const MOCK_PAPERS: &str = "mock/papers/research_papers.json";

    fn request(use_serpapi: bool, use_newsapi: bool, tag: Option<&str>) -> DashboardRequest {
        DashboardRequest {
            query: "climate risk insurance".to_string(),
            num_results: 5,
            use_serpapi,
            use_newsapi,
            selected_tag: tag.map(str::to_string),
        }
    }

    fn clients(serp: MockHttpClient, news: MockHttpClient) -> NewsClients<MockHttpClient> {
        NewsClients {
            serpapi: SerpApiClient::new(serp, Some("serp".to_string()), "https://mock.serp", 10),
            newsapi: NewsApiClient::new(news, Some("news".to_string()), "https://mock.news", 10),
        }
    }

    fn serp_ok() -> MockHttpClient {
        MockHttpClient::new_success(json!({
            "news_results": [{"title": "serp-1"}, {"title": "serp-2"}]
        }))
    }

    fn news_ok() -> MockHttpClient {
        MockHttpClient::new_success(json!({
            "status": "ok",
            "articles": [{"title": "news-1", "source": {"name": "BBC"}}]
        }))
    }

    #[tokio::test]
    async fn test_pass_with_both_providers() -> Result<(), anyhow::Error> {
        let clients = clients(serp_ok(), news_ok());

        let view = run_dashboard_pass(&clients, &request(true, true, None), MOCK_PAPERS).await?;

        assert_eq!(view.all_tags, vec!["climate", "flood", "insurance", "wildfire"]);
        // 未指定の場合はカタログ先頭のタグ
        assert_eq!(view.selected_tag.as_deref(), Some("climate"));
        let titles: Vec<_> = view.news.iter().filter_map(|n| n.title.as_deref()).collect();
        assert_eq!(titles, vec!["serp-1", "serp-2", "news-1"]);
        assert_eq!(view.papers.len(), 2);
        assert_eq!(view.summary, PassSummary::new(3, 4, 3, 2));
        Ok(())
    }

    #[tokio::test]
    async fn test_pass_with_tag_only_in_papers() -> Result<(), anyhow::Error> {
        let clients = clients(serp_ok(), news_ok());

        let view =
            run_dashboard_pass(&clients, &request(true, true, Some("flood")), MOCK_PAPERS).await?;

        assert!(view.news.is_empty(), "ニュースは固定タグのみなので一致しない");
        assert_eq!(view.papers.len(), 1);
        assert_eq!(view.papers[0].title, "Pricing Flood Risk Under Climate Change");
        Ok(())
    }

    #[tokio::test]
    async fn test_pass_with_providers_disabled() -> Result<(), anyhow::Error> {
        let clients = clients(serp_ok(), news_ok());

        for tag in [None, Some("climate"), Some("insurance")] {
            let view = run_dashboard_pass(&clients, &request(false, false, tag), MOCK_PAPERS).await?;

            // カタログは論文のタグのみから作られる
            assert_eq!(view.all_tags, vec!["climate", "flood", "insurance", "wildfire"]);
            assert!(view.news.is_empty());
            assert_eq!(view.summary.news_fetched, 0);
        }

        // 無効なプロバイダには通信しない
        assert!(clients.serpapi.http_client().requests().is_empty());
        assert!(clients.newsapi.http_client().requests().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_pass_aborts_when_provider_fails() {
        let clients = clients(serp_ok(), MockHttpClient::new_error("認証失敗"));

        let result = run_dashboard_pass(&clients, &request(true, true, None), MOCK_PAPERS).await;

        let err = result.expect_err("プロバイダの失敗でパス全体が失敗するべき");
        let message = format!("{:#}", err);
        assert!(message.contains("NewsAPIからのニュース取得に失敗"));
        assert!(message.contains("認証失敗"));
    }

    #[tokio::test]
    async fn test_pass_aborts_when_papers_missing() {
        let clients = clients(serp_ok(), news_ok());

        let result =
            run_dashboard_pass(&clients, &request(true, true, None), "mock/papers/none.json").await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_pass_rejects_out_of_range_num_results() {
        let clients = clients(serp_ok(), news_ok());
        let mut req = request(true, true, None);
        req.num_results = 11;

        let result = run_dashboard_pass(&clients, &req, MOCK_PAPERS).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_pass_tolerates_paper_with_missing_fields() -> Result<(), anyhow::Error> {
        let clients = clients(serp_ok(), news_ok());

        let view = run_dashboard_pass(
            &clients,
            &request(false, false, Some("climate")),
            "mock/papers/incomplete.json",
        )
        .await?;

        // abstractの無い論文があってもパスは中断しない
        assert_eq!(view.all_tags, vec!["climate", "flood", "heat"]);
        assert_eq!(view.summary.papers_loaded, 3);
        assert_eq!(view.papers.len(), 2);
        assert_eq!(view.papers[0].title, "Heat Stress and Crop Insurance Losses");

        let view = run_dashboard_pass(
            &clients,
            &request(false, false, Some("flood")),
            "mock/papers/incomplete.json",
        )
        .await?;
        assert_eq!(view.papers.len(), 1);
        assert_eq!(view.papers[0].abstract_text, "");
        Ok(())
    }

    #[tokio::test]
    async fn test_pass_with_empty_catalog() -> Result<(), anyhow::Error> {
        let clients = clients(serp_ok(), news_ok());

        let view =
            run_dashboard_pass(&clients, &request(false, false, None), "mock/papers/untagged.json")
                .await?;

        assert!(view.all_tags.is_empty());
        assert_eq!(view.selected_tag, None);
        assert!(view.papers.is_empty());
        assert_eq!(view.summary.papers_loaded, 1);
        Ok(())
    }
}

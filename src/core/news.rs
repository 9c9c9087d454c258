use crate::core::tag::Tagged;
use crate::infra::api::http::HttpClient;
use crate::infra::api::newsapi::NewsApiClient;
use crate::infra::api::serpapi::SerpApiClient;
use anyhow::Result;
use serde_json::Value;
use std::fmt;
use tracing::info;

/// ニュースレコードに一律で付与するタグ
///
/// 記事内容から導出したものではなく、全レコードに同じ値を付ける。
pub const STATIC_NEWS_TAGS: [&str; 2] = ["climate", "insurance"];

/// レコードを生成したプロバイダ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsProvider {
    SerpApi,
    NewsApi,
}

impl fmt::Display for NewsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsProvider::SerpApi => write!(f, "Google検索 (SerpAPI)"),
            NewsProvider::NewsApi => write!(f, "NewsAPI"),
        }
    }
}

/// プロバイダ間で共通のニュースレコード
///
/// 日付はプロバイダの書式のまま保持する。
#[derive(Debug, Clone, PartialEq)]
pub struct NewsRecord {
    pub title: Option<String>,
    pub source: Option<String>,
    pub date: Option<String>,
    pub snippet: Option<String>,
    pub link: Option<String>,
    pub tags: Vec<String>,
    pub provider: NewsProvider,
}

impl Tagged for NewsRecord {
    fn tags(&self) -> Option<&[String]> {
        Some(&self.tags)
    }
}

fn static_tags() -> Vec<String> {
    STATIC_NEWS_TAGS.iter().map(|t| t.to_string()).collect()
}

fn str_field(item: &Value, key: &str) -> Option<String> {
    item.get(key).and_then(Value::as_str).map(str::to_string)
}

fn result_items<'a>(payload: &'a Value, key: &str) -> &'a [Value] {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// SerpAPIのレスポンスから`news_results`をニュースレコードに変換する
///
/// `source`は文字列と`{"name": ...}`形式のどちらも受け付ける。
pub fn normalize_serpapi_results(payload: &Value, limit: usize) -> Vec<NewsRecord> {
    result_items(payload, "news_results")
        .iter()
        .take(limit)
        .map(|item| NewsRecord {
            title: str_field(item, "title"),
            source: str_field(item, "source").or_else(|| {
                item.get("source")
                    .and_then(|source| str_field(source, "name"))
            }),
            date: str_field(item, "date"),
            snippet: str_field(item, "snippet"),
            link: str_field(item, "link"),
            tags: static_tags(),
            provider: NewsProvider::SerpApi,
        })
        .collect()
}

/// NewsAPIのレスポンスから`articles`をニュースレコードに変換する
pub fn normalize_newsapi_articles(payload: &Value, limit: usize) -> Vec<NewsRecord> {
    result_items(payload, "articles")
        .iter()
        .take(limit)
        .map(|item| NewsRecord {
            title: str_field(item, "title"),
            source: item
                .get("source")
                .and_then(|source| str_field(source, "name")),
            date: str_field(item, "publishedAt"),
            snippet: str_field(item, "description"),
            link: str_field(item, "url"),
            tags: static_tags(),
            provider: NewsProvider::NewsApi,
        })
        .collect()
}

/// SerpAPIでニュースを検索してレコードに変換する
pub async fn fetch_serpapi_news<H: HttpClient>(
    client: &SerpApiClient<H>,
    query: &str,
    num_results: usize,
) -> Result<Vec<NewsRecord>> {
    let payload = client.search_news(query, num_results).await?;
    let records = normalize_serpapi_results(&payload, num_results);
    info!(count = records.len(), "SerpAPIからニュースを取得");
    Ok(records)
}

/// NewsAPIでニュースを検索してレコードに変換する
pub async fn fetch_newsapi_news<H: HttpClient>(
    client: &NewsApiClient<H>,
    query: &str,
    num_results: usize,
) -> Result<Vec<NewsRecord>> {
    let payload = client.get_everything(query, num_results).await?;
    let records = normalize_newsapi_articles(&payload, num_results);
    info!(count = records.len(), "NewsAPIからニュースを取得");
    Ok(records)
}

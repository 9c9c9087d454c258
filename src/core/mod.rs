pub mod news;
pub mod paper;
pub mod tag;

// 公開APIの再エクスポート
pub use news::{
    fetch_newsapi_news, fetch_serpapi_news, normalize_newsapi_articles, normalize_serpapi_results,
    NewsProvider, NewsRecord, STATIC_NEWS_TAGS,
};
pub use paper::{load_research_papers, Authors, ResearchPaper};
pub use tag::{filter_by_tag, get_all_tags, select_tag, TagSource, Tagged};

pub mod http;
pub mod newsapi;
pub mod serpapi;

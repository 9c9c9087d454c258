use anyhow::Result;
use clap::Parser;
use riskboard::{
    app::{render_dashboard, render_tag_list, run_dashboard_pass, NewsClients},
    cli::Cli,
    infra::{
        api::{http::ReqwestHttpClient, newsapi::NewsApiClient, serpapi::SerpApiClient},
        config::{ApiCredentials, Settings},
        logging::init_logging,
    },
};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // 環境変数を読み込み（.envファイルがあれば使用）
    let _ = dotenvy::dotenv();
    init_logging();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("描画パスが失敗しました: {:#}", e);
            eprintln!("エラー: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let settings = match cli.config.as_deref() {
        Some(path) => Settings::from_yaml_file(path)?,
        None => Settings::default(),
    };
    let request = cli.to_request(&settings)?;
    let credentials = ApiCredentials::from_env();

    let clients = NewsClients {
        serpapi: SerpApiClient::new(
            ReqwestHttpClient::new(),
            credentials.serp_api_key,
            &settings.serpapi_base_url,
            settings.timeout_secs,
        ),
        newsapi: NewsApiClient::new(
            ReqwestHttpClient::new(),
            credentials.news_api_key,
            &settings.newsapi_base_url,
            settings.timeout_secs,
        ),
    };

    let view = run_dashboard_pass(&clients, &request, cli.papers_path(&settings)).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.list_tags {
        render_tag_list(&view.all_tags, &mut out)?;
    } else {
        render_dashboard(&view, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

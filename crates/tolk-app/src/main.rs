use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tolk_app::controller::TranslateController;
use tolk_app::events::{ChannelSet, event_loop};
use tolk_app::ui::ui_loop;
use tolk_config::Config;
use tolk_translator::LibreTranslateClient;

#[derive(Parser, Debug)]
#[command(name = "tolk", about = "Terminal client for a LibreTranslate server")]
struct Args {
    /// Override the translation server base URL
    #[arg(long)]
    api_url: Option<String>,
    /// Override the translation API key
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::new();
    if let Some(api_url) = args.api_url {
        config.api.base_url = api_url;
    }
    if let Some(api_key) = args.api_key {
        config.api.api_key = api_key;
    }

    let client =
        LibreTranslateClient::new(config.api.base_url.clone(), config.api.api_key.clone());

    let channels = ChannelSet::new();
    let controller = Arc::new(TranslateController::new(
        client,
        channels.app_to_ui.0.clone(),
    ));

    let cancel_token = CancellationToken::new();
    let mut tasks = JoinSet::new();
    tasks.spawn(event_loop(controller, channels.ui_to_app.1.clone()));
    tasks.spawn(ui_loop(
        channels.app_to_ui.1.clone(),
        channels.ui_to_app.0.clone(),
        cancel_token.child_token(),
    ));

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    cancel_token.cancel();
    Ok(())
}

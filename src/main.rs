use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use subtext::application::services::ExtractionService;
use subtext::infrastructure::observability::{TracingConfig, init_tracing};
use subtext::infrastructure::ytdlp::{DEFAULT_BINARY, YtDlpFetcher};
use subtext::presentation::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let port: u16 = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    init_tracing(TracingConfig::default(), port);

    let ytdlp_path = std::env::var("YTDLP_PATH").unwrap_or_else(|_| DEFAULT_BINARY.to_string());
    let fetcher = Arc::new(YtDlpFetcher::new(ytdlp_path));
    let extraction_service = Arc::new(ExtractionService::new(fetcher));

    let state = AppState { extraction_service };
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

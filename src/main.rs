use clap::Parser;
use simscan_api::RestApi;
use simscan_engine::SimilarityEngine;
use simscan_judge::{GeminiClient, GeminiConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Document similarity scanning service
#[derive(Parser, Debug)]
#[command(name = "simscan")]
#[command(about = "A document similarity scanning service", long_about = None)]
struct Args {
    /// HTTP API port
    #[arg(long, default_value_t = 7171)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Generative model used by the semantic judge
    #[arg(long, default_value = simscan_judge::DEFAULT_MODEL)]
    model: String,

    /// Base URL of the generative model API
    #[arg(long, default_value = simscan_judge::DEFAULT_BASE_URL)]
    model_base_url: String,

    /// API key for the generative model; falls back to GEMINI_API_KEY
    #[arg(long)]
    api_key: Option<String>,

    /// Wall clock budget for one model call, in seconds
    #[arg(long, default_value_t = 30)]
    judge_timeout_secs: u64,

    /// Number of comparisons kept in flight during a scan
    #[arg(long, default_value_t = 8)]
    scan_concurrency: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting simscan v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP API port: {}", args.http_port);

    let api_key = args
        .api_key
        .clone()
        .or_else(|| std::env::var("GEMINI_API_KEY").ok())
        .filter(|key| !key.is_empty());

    let mut engine = SimilarityEngine::new()
        .with_judge_timeout(Duration::from_secs(args.judge_timeout_secs))
        .with_scan_concurrency(args.scan_concurrency);

    match api_key {
        Some(key) => {
            let config = GeminiConfig::new(key)
                .with_model(args.model.clone())
                .with_base_url(args.model_base_url.clone());
            let client = Arc::new(GeminiClient::new(config)?);
            engine = engine
                .with_judge(client.clone())
                .with_topic_model(client);
            info!("Semantic judge enabled (model: {})", args.model);
        }
        None => {
            warn!("No API key configured; semantic judging is disabled and all comparisons run degraded");
        }
    }

    let engine = Arc::new(engine);

    let engine_http = engine.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(engine_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("simscan started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}

mod config;
mod extract;
mod fetch;
mod handler;
mod limiter;
mod model;
mod storage;

use config::{AppConfig, load_config};
use extract::TableExtractor;
use fetch::ChromeFetcher;
use storage::SqliteStore;

use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {panic_info:?}");
    }));

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config: AppConfig = if Path::new(&config_path).exists() {
        match load_config(&config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        info!("No config file at {config_path}, using defaults");
        AppConfig::default()
    };

    let fetcher = ChromeFetcher::new(
        Duration::from_secs(config.render_timeout_secs),
        Duration::from_secs(config.render_settle_secs),
    );
    let extractor = TableExtractor::new();

    let mut store = match SqliteStore::new(&config.db_path, &config.table_name) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize storage: {:?}", e);
            std::process::exit(1);
        }
    };

    info!("Starting scrape of {}", config.source_url);
    let response = handler::handle(
        &serde_json::Value::Null,
        &fetcher,
        &extractor,
        &mut store,
        &config,
    )
    .await;

    match serde_json::to_string(&response) {
        Ok(out) => println!("{out}"),
        Err(e) => error!("Failed to serialize response: {}", e),
    }

    if response.status_code == 500 {
        std::process::exit(1);
    }
}

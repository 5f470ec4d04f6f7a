use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_source_url")]
    pub source_url: String,
    #[serde(default = "default_table_name")]
    pub table_name: String,
    #[serde(default = "default_db_path")]
    pub db_path: String,
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
    #[serde(default = "default_render_timeout_secs")]
    pub render_timeout_secs: u64,
    #[serde(default = "default_render_settle_secs")]
    pub render_settle_secs: u64,
}

fn default_source_url() -> String {
    "https://ultimosismo.igp.gob.pe/ultimo-sismo/sismos-reportados".to_string()
}

fn default_table_name() -> String {
    "TablaWebScrapping".to_string()
}

fn default_db_path() -> String {
    "data.db".to_string()
}

fn default_max_rows() -> usize {
    10
}

fn default_render_timeout_secs() -> u64 {
    20
}

fn default_render_settle_secs() -> u64 {
    2
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            table_name: default_table_name(),
            db_path: default_db_path(),
            max_rows: default_max_rows(),
            render_timeout_secs: default_render_timeout_secs(),
            render_settle_secs: default_render_settle_secs(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

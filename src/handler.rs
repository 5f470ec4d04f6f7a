// Top-level boundary: runs the fetch → extract → limit → sync pipeline and
// maps each stage's error to its response code.
use crate::config::AppConfig;
use crate::extract::Extractor;
use crate::fetch::Fetcher;
use crate::limiter;
use crate::model::{ExtractError, Record, Response, Row};
use crate::storage::SqliteStore;

use tracing::info;
use uuid::Uuid;

pub const TABLE_NOT_FOUND: &str = "No se encontró la tabla";
pub const NO_HEADERS: &str = "La tabla no tiene encabezados";

/// Tags each row with its 1-based scrape position and a fresh UUID.
fn number_rows(rows: Vec<Row>) -> Vec<Record> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| Record {
            seq: i as u32 + 1,
            id: Uuid::new_v4().to_string(),
            row,
        })
        .collect()
}

fn internal_error(err: &dyn std::fmt::Debug, message: String) -> Response {
    // Full error detail goes to the process log; clients only see the message.
    tracing::error!("pipeline failure: {err:?}");
    Response::error(500, &message)
}

/// One scrape-and-sync invocation. The trigger's event payload carries no
/// information the pipeline uses.
pub async fn handle(
    _event: &serde_json::Value,
    fetcher: &dyn Fetcher,
    extractor: &dyn Extractor,
    store: &mut SqliteStore,
    config: &AppConfig,
) -> Response {
    info!("Fetching rendered page: {}", config.source_url);
    let html = match fetcher.fetch(&config.source_url).await {
        Ok(html) => html,
        Err(e) => return internal_error(&e, e.to_string()),
    };

    info!("Extracting table rows...");
    let rows = match extractor.extract(&html) {
        Ok(rows) => rows,
        Err(ExtractError::TableNotFound) => return Response::error(404, TABLE_NOT_FOUND),
        Err(ExtractError::NoHeaders) => return Response::error(400, NO_HEADERS),
        Err(e) => return internal_error(&e, e.to_string()),
    };

    let rows = limiter::truncate(rows, config.max_rows);
    let records = number_rows(rows);

    info!(
        "Replacing snapshot in {} with {} rows...",
        config.table_name,
        records.len()
    );
    if let Err(e) = store.replace_snapshot(&records) {
        return internal_error(&e, e.to_string());
    }

    match serde_json::to_string(&records) {
        Ok(body) => Response::new(200, body),
        Err(e) => internal_error(&e, e.to_string()),
    }
}

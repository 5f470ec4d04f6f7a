// Core structs: Row, Record, Response, per-stage errors
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One extracted table entry: `(column header, trimmed cell text)` pairs in
/// header order. A row may hold fewer pairs than the table has headers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub fields: Vec<(String, String)>,
}

impl Row {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

/// A row as stored and returned: the scraped fields plus a 1-based sequence
/// number (`#`) and a freshly generated id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub seq: u32,
    pub id: String,
    pub row: Row,
}

// Flat JSON object: row fields first (in header order), then "#" and "id",
// mirroring the shape callers of the endpoint already consume.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.row.fields.len() + 2))?;
        for (name, value) in &self.row.fields {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry("#", &self.seq)?;
        map.serialize_entry("id", &self.id)?;
        map.end()
    }
}

/// Lambda-style invocation result.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl Response {
    pub fn new(status_code: u16, body: String) -> Self {
        Self { status_code, body }
    }

    /// Error response with a `{"error": ...}` JSON body.
    pub fn error(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("browser error: {0}")]
    Browser(String),
    #[error("render task failed: {0}")]
    RenderTask(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("no table element in document")]
    TableNotFound,
    #[error("table has no header cells")]
    NoHeaders,
    #[error("invalid selector: {0}")]
    Selector(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

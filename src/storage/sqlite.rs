use crate::model::{Record, StorageError};
use rusqlite::{Connection, params, params_from_iter};

// Upper bound on ids per DELETE statement during a wipe.
const DELETE_BATCH_SIZE: usize = 25;

/// Key-value table holding the current snapshot: one item per row, keyed by
/// the generated `id`, with the full record stored as a JSON blob.
pub struct SqliteStore {
    conn: Connection,
    table: String,
}

impl SqliteStore {
    /// Opens the database and ensures the destination table exists.
    pub fn new(db_path: &str, table: &str) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path)?;
        Self::with_connection(conn, table)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory(table: &str) -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, table)
    }

    fn with_connection(conn: Connection, table: &str) -> Result<Self, StorageError> {
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS \"{table}\" (
                id TEXT PRIMARY KEY,
                item TEXT NOT NULL
            );"
        ))?;

        Ok(Self {
            conn,
            table: table.to_string(),
        })
    }

    /// Returns the ids of every stored item.
    pub fn scan_ids(&self) -> Result<Vec<String>, StorageError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT id FROM \"{}\"", self.table))?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<_, _>>()?;
        Ok(ids)
    }

    /// Returns every stored item as its JSON value, in insertion order.
    pub fn scan_items(&self) -> Result<Vec<serde_json::Value>, StorageError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT item FROM \"{}\" ORDER BY rowid", self.table))?;
        let raw: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<_, _>>()?;

        raw.iter()
            .map(|item| serde_json::from_str(item).map_err(StorageError::from))
            .collect()
    }

    /// Inserts one record as an independent item.
    pub fn put_record(&self, record: &Record) -> Result<(), StorageError> {
        let item = serde_json::to_string(record)?;
        self.conn.execute(
            &format!("INSERT INTO \"{}\" (id, item) VALUES (?1, ?2)", self.table),
            params![&record.id, &item],
        )?;
        Ok(())
    }

    /// Deletes the given ids, batched into IN-list statements.
    fn delete_batch(&mut self, ids: &[String]) -> Result<(), StorageError> {
        if ids.is_empty() {
            return Ok(());
        }

        let tx = self.conn.transaction()?;
        for chunk in ids.chunks(DELETE_BATCH_SIZE) {
            let placeholders = chunk.iter().map(|_| "?").collect::<Vec<_>>().join(",");
            let sql = format!(
                "DELETE FROM \"{}\" WHERE id IN ({placeholders})",
                self.table
            );
            tx.execute(&sql, params_from_iter(chunk.iter()))?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Wipes all previously stored items, then inserts the new snapshot.
    ///
    /// The wipe commits before the inserts begin, so a failure in between
    /// leaves the table empty or partially populated. That matches the
    /// source system: there is no transactional link between the phases.
    pub fn replace_snapshot(&mut self, records: &[Record]) -> Result<(), StorageError> {
        let existing = self.scan_ids()?;
        self.delete_batch(&existing)?;

        for record in records {
            self.put_record(record)?;
        }
        Ok(())
    }
}

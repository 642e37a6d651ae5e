use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use super::models::{GameResult, CSV_HEADERS};
use super::LedgerError;

/// Persistence seam for the score ledger. The table is append-only: rows are
/// never edited or deleted by the system.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Creates the backing table with the correct column schema when it is
    /// missing or unreadable. Idempotent; safe to call before every read.
    async fn ensure_initialized(&self) -> Result<(), LedgerError>;

    /// Every parseable row, in storage order. Read and parse failures
    /// degrade to an empty or partial result, never an error.
    async fn read_all(&self) -> Result<Vec<GameResult>, LedgerError>;

    /// Adds one row. Write failures propagate so a lost save is visible.
    async fn append(&self, result: GameResult) -> Result<(), LedgerError>;
}

/// Flat CSV file ledger, one row per game under the header
/// `player,origin_title,destination_title,jump_count,points,timestamp`.
///
/// Appends are a read-whole/add-row/write-whole cycle with no file locking,
/// so concurrent writers race and the last one wins. Accepted at this scale
/// (two players, one shared machine); swap the implementation behind
/// `LedgerRepository` if that ever changes.
pub struct CsvLedgerRepository {
    path: PathBuf,
}

impl CsvLedgerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_empty(&self) -> Result<(), LedgerError> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(CSV_HEADERS)?;
        writer.flush()?;
        Ok(())
    }

    /// Raw data rows, preserving fields we cannot interpret so that a
    /// rewrite never drops them. Rows the reader itself cannot decode are
    /// skipped with a warning.
    fn read_raw_records(&self) -> Result<Vec<csv::StringRecord>, LedgerError> {
        let mut reader = match csv::ReaderBuilder::new().flexible(true).from_path(&self.path) {
            Ok(reader) => reader,
            Err(error) => {
                warn!(%error, path = %self.path.display(), "ledger unreadable, reinitializing");
                self.write_empty()?;
                return Ok(Vec::new());
            }
        };

        if reader.headers().is_err() {
            warn!(path = %self.path.display(), "ledger header unreadable, reinitializing");
            self.write_empty()?;
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for (row, record) in reader.records().enumerate() {
            match record {
                Ok(record) => records.push(record),
                Err(error) => warn!(%error, row, "skipping undecodable ledger row"),
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl LedgerRepository for CsvLedgerRepository {
    async fn ensure_initialized(&self) -> Result<(), LedgerError> {
        if !self.path.exists() {
            return self.write_empty();
        }

        let readable = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map(|mut reader| reader.headers().is_ok())
            .unwrap_or(false);

        if readable {
            Ok(())
        } else {
            warn!(path = %self.path.display(), "ledger corrupt, recreating empty");
            self.write_empty()
        }
    }

    async fn read_all(&self) -> Result<Vec<GameResult>, LedgerError> {
        self.ensure_initialized().await?;

        let mut results = Vec::new();
        for (row, record) in self.read_raw_records()?.iter().enumerate() {
            match GameResult::from_record(record) {
                Ok(result) => results.push(result),
                Err(reason) => warn!(row, %reason, "dropping unparseable ledger row"),
            }
        }
        Ok(results)
    }

    async fn append(&self, result: GameResult) -> Result<(), LedgerError> {
        self.ensure_initialized().await?;

        // Read-whole/add/write-whole, as the ledger contract documents.
        // Existing rows are carried over verbatim, parseable or not.
        let mut records = self.read_raw_records()?;
        records.push(result.to_record());

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        writer.write_record(CSV_HEADERS)?;
        for record in &records {
            writer.write_record(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// In-memory ledger for tests and handler wiring that needs no file.
#[derive(Debug, Default)]
pub struct InMemoryLedgerRepository {
    rows: Arc<RwLock<Vec<GameResult>>>,
}

impl InMemoryLedgerRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl LedgerRepository for InMemoryLedgerRepository {
    async fn ensure_initialized(&self) -> Result<(), LedgerError> {
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<GameResult>, LedgerError> {
        Ok(self.rows.read().await.clone())
    }

    async fn append(&self, result: GameResult) -> Result<(), LedgerError> {
        self.rows.write().await.push(result);
        Ok(())
    }
}

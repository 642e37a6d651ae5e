use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage format error: {0}")]
    Csv(#[from] csv::Error),
}

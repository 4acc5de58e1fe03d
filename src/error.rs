use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClimateError>;

#[derive(Error, Debug)]
pub enum ClimateError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Station {station} not found")]
    StationNotFound { station: String },

    #[error("Station {station} is defined more than once")]
    DuplicateStation { station: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Dataset is empty: {0}")]
    EmptyDataset(String),

    #[error("Integrity check failed: {0}")]
    Integrity(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

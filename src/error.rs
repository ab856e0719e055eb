use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Catalog invariant violated: {0}")]
    CatalogInvariant(String),

    #[error("Invalid time '{0}': expected HH:MM on a 24-hour clock")]
    InvalidTime(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;

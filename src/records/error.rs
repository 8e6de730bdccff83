use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to open material list {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse material list: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: missing value for {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("Line {line}: quantity {value:?} is not a non-negative integer")]
    InvalidQuantity { line: usize, value: String },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write CSV output: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

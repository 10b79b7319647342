use thiserror::Error;

#[derive(Error, Debug)]
pub enum TireError {
    #[error("Invalid tire width: {width}. Must be between {min} and {max}.")]
    InvalidInput { width: f64, min: f64, max: f64 },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type TireResult<T> = Result<T, TireError>;

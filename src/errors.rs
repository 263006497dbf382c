// src/errors.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("CSV_INVALID: {0}")]
    Csv(String),
    #[error("STORAGE_FAILURE: {0}")]
    Storage(String),
    #[error("HTTP_FAILURE: {0}")]
    Http(String),
    #[error("IO_FAILURE: {0}")]
    Io(String),
    #[error("POLICY_DENIED: {0}")]
    Policy(String),
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(value.to_string())
    }
}

impl From<ureq::Error> for AppError {
    fn from(value: ureq::Error) -> Self {
        Self::Http(value.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

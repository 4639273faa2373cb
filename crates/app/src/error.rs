use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("read {path}: {source}")]
    ReadData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {path}: {source}")]
    ParseData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Message(String),
}

impl AppError {
    /// True when the data source could not supply a series.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::ReadData { .. } | Self::ParseData { .. })
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let (status, code) = match err {
            AppError::InvalidInput(_) => (400, Some("invalid_input".to_string())),
            AppError::NotFound(_) => (404, Some("not_found".to_string())),
            AppError::ReadData { .. } | AppError::ParseData { .. } => {
                (500, Some("data_unavailable".to_string()))
            }
            AppError::Io(_) | AppError::Serde(_) | AppError::Message(_) => (500, None),
        };
        Self {
            status,
            message: err.to_string(),
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        let api = ApiError::from(AppError::InvalidInput("bad date".to_string()));
        assert_eq!(api.status, 400);
        assert_eq!(api.code.as_deref(), Some("invalid_input"));
        assert_eq!(api.message, "bad date");

        let missing = AppError::ReadData {
            path: PathBuf::from("data.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(missing.is_data_unavailable());
        let api = ApiError::from(missing);
        assert_eq!(api.status, 500);
        assert_eq!(api.code.as_deref(), Some("data_unavailable"));
        assert!(api.message.starts_with("read data.json"));
    }
}

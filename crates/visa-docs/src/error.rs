use crate::config::ConfigError;
use crate::documents::{
    AssetLoadError, BatchError, RenderError, RequiredField, UnknownDocumentType,
};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Asset(AssetLoadError),
    UnknownDocument(UnknownDocumentType),
    Render(RenderError),
    Batch(BatchError),
    InvalidCase(serde_json::Error),
    IncompleteCase(Vec<RequiredField>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Asset(err) => write!(f, "font asset error: {}", err),
            AppError::UnknownDocument(err) => write!(f, "{}", err),
            AppError::Render(err) => write!(f, "render error: {}", err),
            AppError::Batch(err) => write!(f, "render error: {}", err),
            AppError::InvalidCase(err) => write!(f, "invalid case record: {}", err),
            AppError::IncompleteCase(missing) => {
                let labels: Vec<&str> = missing.iter().map(|field| field.label()).collect();
                write!(
                    f,
                    "case record is missing required fields: {}",
                    labels.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Asset(err) => Some(err),
            AppError::UnknownDocument(err) => Some(err),
            AppError::Render(err) => Some(err),
            AppError::Batch(err) => Some(err),
            AppError::InvalidCase(err) => Some(err),
            AppError::IncompleteCase(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::IncompleteCase(missing) = &self {
            let body = Json(json!({
                "error": self.to_string(),
                "missing": missing,
            }));
            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }

        let status = match self {
            AppError::UnknownDocument(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCase(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Asset(_)
            | AppError::Render(_)
            | AppError::Batch(_)
            | AppError::IncompleteCase(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<AssetLoadError> for AppError {
    fn from(value: AssetLoadError) -> Self {
        Self::Asset(value)
    }
}

impl From<UnknownDocumentType> for AppError {
    fn from(value: UnknownDocumentType) -> Self {
        Self::UnknownDocument(value)
    }
}

impl From<RenderError> for AppError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

impl From<BatchError> for AppError {
    fn from(value: BatchError) -> Self {
        Self::Batch(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidCase(value)
    }
}

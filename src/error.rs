//! Error types for the attribute store console and web viewer.

use thiserror::Error;

/// One entry of the structured error list a store service attaches to a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceErrorDetail {
    pub code: String,
    pub message: String,
}

impl std::fmt::Display for ServiceErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Failures reported by a `DatabaseClient`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}", join_details(.errors))]
    Service {
        errors: Vec<ServiceErrorDetail>,
        request: Option<String>,
        response: Option<String>,
    },

    #[error("The specified domain does not exist: {0}")]
    NoSuchDomain(String),

    #[error("Invalid query expression: {message}")]
    InvalidQuery {
        message: String,
        request: Option<String>,
    },
}

impl StoreError {
    /// Structured error entries, empty when the failure carried none.
    pub fn details(&self) -> &[ServiceErrorDetail] {
        match self {
            StoreError::Service { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Raw request text, when the client kept it for debugging.
    pub fn raw_request(&self) -> Option<&str> {
        match self {
            StoreError::Service { request, .. } | StoreError::InvalidQuery { request, .. } => {
                request.as_deref()
            }
            _ => None,
        }
    }

    /// Raw response text, when the client kept it for debugging.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            StoreError::Service { response, .. } => response.as_deref(),
            _ => None,
        }
    }
}

fn join_details(errors: &[ServiceErrorDetail]) -> String {
    if errors.is_empty() {
        return "Store request failed".to_string();
    }
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Application-level errors: startup, configuration, I/O and rendering. Store failures
/// never reach this type; the console and web viewer turn them into text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    MissingCredential(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Fixture error: {0}")]
    FixtureError(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::TemplateError(err.to_string())
    }
}

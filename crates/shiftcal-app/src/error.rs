use thiserror::Error;

/// Application-level errors (portal and file layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] shiftcal_service::error::ServiceError),

    #[error(transparent)]
    CoreError(#[from] shiftcal_core::error::CoreError),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Extraction task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Invalid CSS selector: '{0}'")]
    InvalidSelector(&'static str),

    #[error("Session cookie is not a valid header value")]
    InvalidSessionCookie,
}

pub type AppResult<T> = std::result::Result<T, AppError>;

use thiserror::Error;

use crate::schedule::GridError;

/// Service layer errors - failures that end an extraction run
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Grid unavailable: {0}")]
    GridUnavailable(#[source] GridError),

    #[error("Not authenticated against the scheduling portal")]
    NotAuthenticated,

    #[error("No calendar grid could be retrieved for any of the {requested} requested months")]
    NoGridAvailable { requested: usize },

    #[error(transparent)]
    RfcError(#[from] shiftcal_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] shiftcal_core::error::CoreError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

use thiserror::Error;

use crate::ical::timezone::ConversionError;

/// Errors raised while building calendar documents.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Timezone conversion failed: {0}")]
    Conversion(#[from] ConversionError),
}

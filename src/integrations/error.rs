use thiserror::Error;

use crate::store::error::StoreError;

#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    MissingArgument(String),

    #[error("{0}")]
    InconsistentArguments(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

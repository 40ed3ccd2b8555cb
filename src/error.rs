use std::io::Error as IoError;

use figment::Error as ConfigError;
use thiserror::Error;

use crate::store::StoreError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end the program. Anything the user can fix by typing something else is an
/// [`crate::model::election::ElectionError`] instead and never reaches this type.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Terminal I/O failed: {0}")]
    Console(#[from] IoError),
}

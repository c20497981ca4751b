//! Error types for album-registry

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Album not found: {0}")]
    AlbumNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::AlbumNotFound(id.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Error::InvalidRequest(msg.into())
    }
}

//! album-registry - a small HTTP API over an in-memory album catalogue
//!
//! - `GET /albums` lists every album in insertion order
//! - `GET /albums/:id` fetches the first album with a matching id
//! - `POST /create` appends a new album

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};

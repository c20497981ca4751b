//! In-memory album store

use tokio::sync::RwLock;

use crate::types::{seed_albums, Album};
use crate::{Error, Result};

/// AlbumStore owns the ordered album sequence
///
/// Reads take the shared lock; `create` takes the exclusive lock for the
/// append only. Insertion order is preserved and ids are not required to be
/// unique.
#[derive(Debug, Default)]
pub struct AlbumStore {
    albums: RwLock<Vec<Album>>,
}

impl AlbumStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given albums, in order
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Create a store holding the startup catalogue
    pub fn seeded() -> Self {
        Self::with_albums(seed_albums())
    }

    /// Snapshot of every album in insertion order
    pub async fn list(&self) -> Vec<Album> {
        let albums = self.albums.read().await;
        albums.clone()
    }

    /// Get the first album whose id matches
    pub async fn get(&self, id: &str) -> Result<Album> {
        let albums = self.albums.read().await;
        albums
            .iter()
            .find(|album| album.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    /// Append an album and return it as stored
    pub async fn create(&self, album: Album) -> Album {
        let mut albums = self.albums.write().await;
        albums.push(album.clone());
        album
    }

    /// Number of albums currently stored
    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    /// Whether the store holds no albums
    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}

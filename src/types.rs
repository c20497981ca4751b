//! Core types for album-registry

use serde::{Deserialize, Serialize};

/// Album identifier, supplied by the caller on creation
pub type AlbumId = String;

/// A single album record
///
/// Missing fields decode to their defaults; no field is validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    pub fn new(
        id: impl Into<AlbumId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}

/// Albums present when the server starts
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new(
            "3",
            "Sarah Vaughan and Clifford Brown",
            "Sarah Vaughan",
            39.99,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_json_shape() {
        let album = Album::new("10", "Test Album", "Tester", 9.99);
        let value = serde_json::to_value(&album).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": "10",
                "title": "Test Album",
                "artist": "Tester",
                "price": 9.99
            })
        );
    }

    #[test]
    fn test_album_missing_fields_default() {
        let album: Album = serde_json::from_str(r#"{"id": "1", "title": "x"}"#).unwrap();
        assert_eq!(album, Album::new("1", "x", "", 0.0));
    }

    #[test]
    fn test_album_rejects_wrong_types() {
        let result: Result<Album, _> = serde_json::from_str(r#"{"id": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_seed_order() {
        let ids: Vec<_> = seed_albums().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}

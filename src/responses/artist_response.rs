use entities::artist::Artist;
use serde::Serialize;

use super::Locator;

#[derive(Serialize, Clone, Debug)]
pub struct ArtistResponse {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) age: i64,
    pub(crate) albums: String,
    pub(crate) tracks: String,
    #[serde(rename = "self")]
    pub(crate) self_url: String,
}

impl ArtistResponse {
    pub fn from_artist(artist: Artist, locator: &Locator) -> Self {
        Self {
            albums: locator.artist_albums(&artist.id),
            tracks: locator.artist_tracks(&artist.id),
            self_url: locator.artist(&artist.id),
            id: artist.id,
            name: artist.name,
            age: artist.age,
        }
    }

    pub fn from_artists(artists: Vec<Artist>, locator: &Locator) -> Vec<Self> {
        artists
            .into_iter()
            .map(|artist| Self::from_artist(artist, locator))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_links() {
        let artist = Artist {
            id: "RGFmdCBQdW5r".to_string(),
            name: "Daft Punk".to_string(),
            age: 50,
        };
        let value =
            serde_json::to_value(ArtistResponse::from_artist(artist, &Locator::new("http://h"))).unwrap();
        assert_eq!(value["self"], "http://h/artists/RGFmdCBQdW5r");
        assert_eq!(value["albums"], "http://h/artists/RGFmdCBQdW5r/albums");
        assert_eq!(value["tracks"], "http://h/artists/RGFmdCBQdW5r/tracks");
        assert_eq!(value["age"], 50);
    }
}

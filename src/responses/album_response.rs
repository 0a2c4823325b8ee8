use entities::album::Album;
use serde::Serialize;

use super::Locator;

#[derive(Serialize, Clone, Debug)]
pub struct AlbumResponse {
    pub(crate) id: String,
    pub(crate) artist_id: String,
    pub(crate) name: String,
    pub(crate) genre: String,
    pub(crate) artist: String,
    pub(crate) tracks: String,
    #[serde(rename = "self")]
    pub(crate) self_url: String,
}

impl AlbumResponse {
    pub fn from_album(album: Album, locator: &Locator) -> Self {
        Self {
            artist: locator.artist(&album.artist_id),
            tracks: locator.album_tracks(&album.id),
            self_url: locator.album(&album.id),
            id: album.id,
            artist_id: album.artist_id,
            name: album.name,
            genre: album.genre,
        }
    }

    pub fn from_albums(albums: Vec<Album>, locator: &Locator) -> Vec<Self> {
        albums
            .into_iter()
            .map(|album| Self::from_album(album, locator))
            .collect()
    }
}

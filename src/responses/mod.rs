use serde::Serialize;

pub mod album_response;
pub mod artist_response;
pub mod track_response;

/// Builds the absolute locator links embedded in every representation.
#[derive(Clone, Debug)]
pub struct Locator {
    base_url: String,
}

impl Locator {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn artist(&self, artist_id: &str) -> String {
        format!("{}/artists/{}", self.base_url, artist_id)
    }

    pub fn artist_albums(&self, artist_id: &str) -> String {
        format!("{}/artists/{}/albums", self.base_url, artist_id)
    }

    pub fn artist_tracks(&self, artist_id: &str) -> String {
        format!("{}/artists/{}/tracks", self.base_url, artist_id)
    }

    pub fn album(&self, album_id: &str) -> String {
        format!("{}/albums/{}", self.base_url, album_id)
    }

    pub fn album_tracks(&self, album_id: &str) -> String {
        format!("{}/albums/{}/tracks", self.base_url, album_id)
    }

    pub fn track(&self, track_id: &str) -> String {
        format!("{}/tracks/{}", self.base_url, track_id)
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct PlayResponse {
    pub(crate) message: String,
    pub(crate) tracks_played: u64,
}

impl PlayResponse {
    pub fn new(message: &str, tracks_played: u64) -> Self {
        Self {
            message: message.to_string(),
            tracks_played,
        }
    }
}

use entities::track::TrackSqlxModel;
use serde::Serialize;

use super::Locator;

#[derive(Serialize, Clone, Debug)]
pub struct TrackResponse {
    pub(crate) id: String,
    pub(crate) album_id: String,
    pub(crate) name: String,
    pub(crate) duration: f64,
    pub(crate) times_played: i64,
    pub(crate) artist: String,
    pub(crate) album: String,
    #[serde(rename = "self")]
    pub(crate) self_url: String,
}

impl TrackResponse {
    pub fn from_track(track: TrackSqlxModel, locator: &Locator) -> Self {
        Self {
            artist: locator.artist(&track.artist_id),
            album: locator.album(&track.album_id),
            self_url: locator.track(&track.id),
            id: track.id,
            album_id: track.album_id,
            name: track.name,
            duration: track.duration,
            times_played: track.times_played,
        }
    }

    pub fn from_tracks(tracks: Vec<TrackSqlxModel>, locator: &Locator) -> Vec<Self> {
        tracks
            .into_iter()
            .map(|track| Self::from_track(track, locator))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_link_comes_from_album_owner() {
        let track = TrackSqlxModel {
            id: "t".to_string(),
            name: "One More Time".to_string(),
            duration: 320.5,
            times_played: 3,
            album_id: "al".to_string(),
            artist_id: "ar".to_string(),
        };
        let value =
            serde_json::to_value(TrackResponse::from_track(track, &Locator::new("http://h"))).unwrap();
        assert_eq!(value["artist"], "http://h/artists/ar");
        assert_eq!(value["album"], "http://h/albums/al");
        assert_eq!(value["self"], "http://h/tracks/t");
        assert_eq!(value["times_played"], 3);
        assert_eq!(value["duration"], 320.5);
    }
}

use serde::Serialize;
use sqlx::FromRow;

/// A row of the `track` table.
#[derive(Clone, Debug, PartialEq, FromRow, Serialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub duration: f64,
    pub times_played: i64,
    pub album_id: String,
}

/// A track joined with the artist owning its album.
#[derive(Clone, Debug, PartialEq, FromRow, Serialize)]
pub struct TrackSqlxModel {
    pub id: String,
    pub name: String,
    pub duration: f64,
    pub times_played: i64,
    pub album_id: String,
    pub artist_id: String,
}

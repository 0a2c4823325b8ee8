use serde::Serialize;
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, FromRow, Hash, Serialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub genre: String,
    pub artist_id: String,
}

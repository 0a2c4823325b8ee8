use serde::Serialize;
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, FromRow, Hash, Serialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub age: i64,
}

use std::str::FromStr;

use entities::{album::Album, artist::Artist, track::Track, track::TrackSqlxModel};
use log::{error, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("parent {0} doesn't exist")]
    MissingParent(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Result of a create-if-absent insert.
#[derive(Debug, PartialEq)]
pub enum InsertOutcome<T> {
    Created(T),
    /// The id was already taken; carries the stored row, untouched.
    Existing(T),
}

const TRACK_SELECT: &str = r#"select track.id as id, track.name as name, track.duration as duration,
    track.times_played as times_played, track.album_id as album_id, album.artist_id as artist_id
from track inner join album on track.album_id = album.id"#;

/// Opens a pool with foreign keys enforced on every connection.
///
/// In-memory databases live and die with their connection, so they get a
/// single connection that is never recycled.
pub async fn connect(url: &str, max_connections: u32) -> Result<Pool<Sqlite>, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let in_memory = url.contains(":memory:");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };
    pool_options.connect_with(options).await
}

enum InsertFailure {
    Duplicate,
    MissingParent(sqlx::Error),
    Other(sqlx::Error),
}

fn classify(err: sqlx::Error) -> InsertFailure {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return InsertFailure::Duplicate;
        }
        if db_err.is_foreign_key_violation() {
            return InsertFailure::MissingParent(err);
        }
    }
    InsertFailure::Other(err)
}

// Artists

pub async fn artist_exists(pool: &Pool<Sqlite>, artist_id: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("select 1 from artist where id = ?")
        .bind(artist_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn get_artist_by_id(
    pool: &Pool<Sqlite>,
    artist_id: &str,
) -> Result<Option<Artist>, sqlx::Error> {
    sqlx::query_as("select id, name, age from artist where id = ?")
        .bind(artist_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_all_artists(pool: &Pool<Sqlite>) -> Result<Vec<Artist>, sqlx::Error> {
    sqlx::query_as("select id, name, age from artist order by rowid")
        .fetch_all(pool)
        .await
}

pub async fn add_artist(
    pool: &Pool<Sqlite>,
    artist: &Artist,
) -> Result<InsertOutcome<Artist>, StoreError> {
    let ret = sqlx::query("insert into artist (id, name, age) values (?, ?, ?)")
        .bind(&artist.id)
        .bind(&artist.name)
        .bind(artist.age)
        .execute(pool)
        .await;
    match ret.map_err(classify) {
        Ok(_) => Ok(InsertOutcome::Created(artist.to_owned())),
        Err(InsertFailure::Duplicate) => {
            warn!("Artist {} already exists", artist.id);
            let existing = get_artist_by_id(pool, &artist.id)
                .await?
                .ok_or(sqlx::Error::RowNotFound)?;
            Ok(InsertOutcome::Existing(existing))
        }
        Err(InsertFailure::MissingParent(e) | InsertFailure::Other(e)) => Err(e.into()),
    }
}

/// Deletes the artist together with its albums and their tracks.
pub async fn delete_artist_by_id(pool: &Pool<Sqlite>, artist_id: &str) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query(
        "delete from track where album_id in (select id from album where artist_id = ?)",
    )
    .bind(artist_id)
    .execute(&mut *tx)
    .await?;
    sqlx::query("delete from album where artist_id = ?")
        .bind(artist_id)
        .execute(&mut *tx)
        .await?;
    let ret = sqlx::query("delete from artist where id = ?")
        .bind(artist_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(ret.rows_affected() > 0)
}

// Albums

pub async fn album_exists(pool: &Pool<Sqlite>, album_id: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("select 1 from album where id = ?")
        .bind(album_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn album_exists_for_artist(
    pool: &Pool<Sqlite>,
    artist_id: &str,
    album_id: &str,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("select 1 from album where id = ? and artist_id = ?")
        .bind(album_id)
        .bind(artist_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn get_album_by_id(
    pool: &Pool<Sqlite>,
    album_id: &str,
) -> Result<Option<Album>, sqlx::Error> {
    sqlx::query_as("select id, name, genre, artist_id from album where id = ?")
        .bind(album_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_all_albums(pool: &Pool<Sqlite>) -> Result<Vec<Album>, sqlx::Error> {
    sqlx::query_as("select id, name, genre, artist_id from album order by rowid")
        .fetch_all(pool)
        .await
}

pub async fn get_albums_by_artist_id(
    pool: &Pool<Sqlite>,
    artist_id: &str,
) -> Result<Vec<Album>, sqlx::Error> {
    sqlx::query_as("select id, name, genre, artist_id from album where artist_id = ? order by rowid")
        .bind(artist_id)
        .fetch_all(pool)
        .await
}

pub async fn add_album(pool: &Pool<Sqlite>, album: &Album) -> Result<InsertOutcome<Album>, StoreError> {
    let ret = sqlx::query("insert into album (id, name, genre, artist_id) values (?, ?, ?, ?)")
        .bind(&album.id)
        .bind(&album.name)
        .bind(&album.genre)
        .bind(&album.artist_id)
        .execute(pool)
        .await;
    match ret.map_err(classify) {
        Ok(_) => Ok(InsertOutcome::Created(album.to_owned())),
        Err(InsertFailure::Duplicate) => {
            warn!("Album {} already exists", album.id);
            let existing = get_album_by_id(pool, &album.id)
                .await?
                .ok_or(sqlx::Error::RowNotFound)?;
            Ok(InsertOutcome::Existing(existing))
        }
        Err(InsertFailure::MissingParent(_)) => {
            error!("Artist {} vanished before album {} was stored", album.artist_id, album.id);
            Err(StoreError::MissingParent(album.artist_id.to_owned()))
        }
        Err(InsertFailure::Other(e)) => Err(e.into()),
    }
}

/// Deletes the album together with its tracks.
pub async fn delete_album_by_id(pool: &Pool<Sqlite>, album_id: &str) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("delete from track where album_id = ?")
        .bind(album_id)
        .execute(&mut *tx)
        .await?;
    let ret = sqlx::query("delete from album where id = ?")
        .bind(album_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(ret.rows_affected() > 0)
}

// Tracks

pub async fn track_exists(pool: &Pool<Sqlite>, track_id: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("select 1 from track where id = ?")
        .bind(track_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn track_exists_for_album(
    pool: &Pool<Sqlite>,
    album_id: &str,
    track_id: &str,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("select 1 from track where id = ? and album_id = ?")
        .bind(track_id)
        .bind(album_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn get_track_by_id(
    pool: &Pool<Sqlite>,
    track_id: &str,
) -> Result<Option<TrackSqlxModel>, sqlx::Error> {
    sqlx::query_as(&format!("{TRACK_SELECT} where track.id = ?"))
        .bind(track_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_all_tracks(pool: &Pool<Sqlite>) -> Result<Vec<TrackSqlxModel>, sqlx::Error> {
    sqlx::query_as(&format!("{TRACK_SELECT} order by track.rowid"))
        .fetch_all(pool)
        .await
}

pub async fn get_tracks_by_album_id(
    pool: &Pool<Sqlite>,
    album_id: &str,
) -> Result<Vec<TrackSqlxModel>, sqlx::Error> {
    sqlx::query_as(&format!(
        "{TRACK_SELECT} where track.album_id = ? order by track.rowid"
    ))
    .bind(album_id)
    .fetch_all(pool)
    .await
}

/// Every track of every album of the artist, flattened.
pub async fn get_tracks_by_artist_id(
    pool: &Pool<Sqlite>,
    artist_id: &str,
) -> Result<Vec<TrackSqlxModel>, sqlx::Error> {
    sqlx::query_as(&format!(
        "{TRACK_SELECT} where album.artist_id = ? order by album.rowid, track.rowid"
    ))
    .bind(artist_id)
    .fetch_all(pool)
    .await
}

pub async fn add_track(
    pool: &Pool<Sqlite>,
    track: &Track,
) -> Result<InsertOutcome<TrackSqlxModel>, StoreError> {
    let ret = sqlx::query(
        "insert into track (id, name, duration, times_played, album_id) values (?, ?, ?, ?, ?)",
    )
    .bind(&track.id)
    .bind(&track.name)
    .bind(track.duration)
    .bind(track.times_played)
    .bind(&track.album_id)
    .execute(pool)
    .await;
    let created = match ret.map_err(classify) {
        Ok(_) => true,
        Err(InsertFailure::Duplicate) => {
            warn!("Track {} already exists", track.id);
            false
        }
        Err(InsertFailure::MissingParent(_)) => {
            error!("Album {} vanished before track {} was stored", track.album_id, track.id);
            return Err(StoreError::MissingParent(track.album_id.to_owned()));
        }
        Err(InsertFailure::Other(e)) => return Err(e.into()),
    };
    let stored = get_track_by_id(pool, &track.id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;
    if created {
        Ok(InsertOutcome::Created(stored))
    } else {
        Ok(InsertOutcome::Existing(stored))
    }
}

pub async fn delete_track_by_id(pool: &Pool<Sqlite>, track_id: &str) -> Result<bool, sqlx::Error> {
    let ret = sqlx::query("delete from track where id = ?")
        .bind(track_id)
        .execute(pool)
        .await?;
    Ok(ret.rows_affected() > 0)
}

// Play counters. Each is one statement, so a bulk play either touches every
// track or none.

/// Returns false when the track doesn't exist.
pub async fn play_track(pool: &Pool<Sqlite>, track_id: &str) -> Result<bool, sqlx::Error> {
    let ret = sqlx::query("update track set times_played = times_played + 1 where id = ?")
        .bind(track_id)
        .execute(pool)
        .await?;
    Ok(ret.rows_affected() > 0)
}

/// Returns the number of tracks played.
pub async fn play_album_tracks(pool: &Pool<Sqlite>, album_id: &str) -> Result<u64, sqlx::Error> {
    let ret = sqlx::query("update track set times_played = times_played + 1 where album_id = ?")
        .bind(album_id)
        .execute(pool)
        .await?;
    Ok(ret.rows_affected())
}

/// Returns the number of tracks played.
pub async fn play_artist_tracks(pool: &Pool<Sqlite>, artist_id: &str) -> Result<u64, sqlx::Error> {
    let ret = sqlx::query(
        r#"update track set times_played = times_played + 1
where album_id in (select id from album where artist_id = ?)"#,
    )
    .bind(artist_id)
    .execute(pool)
    .await?;
    Ok(ret.rows_affected())
}

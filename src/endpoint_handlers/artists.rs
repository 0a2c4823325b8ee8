use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use entities::album::Album;
use entities::artist::Artist;
use log::info;
use queries::InsertOutcome;

use crate::error::{ApiError, Result};
use crate::identity;
use crate::responses::album_response::AlbumResponse;
use crate::responses::artist_response::ArtistResponse;
use crate::responses::track_response::TrackResponse;
use crate::responses::PlayResponse;
use crate::validation::{AlbumPayload, ArtistPayload, Validate};
use crate::DatabaseState;

async fn abort_if_artist_doesnt_exist(
    state: &DatabaseState,
    artist_id: &str,
) -> Result<()> {
    if !queries::artist_exists(&state.pool, artist_id).await? {
        return Err(ApiError::NotFound(format!(
            "Artist {} doesn't exist",
            artist_id
        )));
    }
    Ok(())
}

pub async fn get_artists(State(state): State<DatabaseState>) -> Result<Json<Vec<ArtistResponse>>> {
    let artists = queries::get_all_artists(&state.pool).await?;
    Ok(Json(ArtistResponse::from_artists(artists, &state.locator)))
}

pub async fn create_artist(
    State(state): State<DatabaseState>,
    payload: std::result::Result<Json<ArtistPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ArtistResponse>)> {
    let Json(payload) = payload?;
    let draft = payload.validate()?;
    let artist = Artist {
        id: identity::artist_id(&draft.name),
        name: draft.name,
        age: draft.age,
    };
    match queries::add_artist(&state.pool, &artist).await? {
        InsertOutcome::Created(artist) => {
            info!("Created artist {} with id {}", artist.name, artist.id);
            Ok((
                StatusCode::CREATED,
                Json(ArtistResponse::from_artist(artist, &state.locator)),
            ))
        }
        InsertOutcome::Existing(existing) => Err(ApiError::conflict(&ArtistResponse::from_artist(
            existing,
            &state.locator,
        ))),
    }
}

pub async fn get_artist(
    Path(artist_id): Path<String>,
    State(state): State<DatabaseState>,
) -> Result<Json<ArtistResponse>> {
    let artist = queries::get_artist_by_id(&state.pool, &artist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Artist {} doesn't exist", artist_id)))?;
    Ok(Json(ArtistResponse::from_artist(artist, &state.locator)))
}

pub async fn delete_artist(
    Path(artist_id): Path<String>,
    State(state): State<DatabaseState>,
) -> Result<StatusCode> {
    if !queries::delete_artist_by_id(&state.pool, &artist_id).await? {
        return Err(ApiError::NotFound(format!(
            "Artist {} doesn't exist",
            artist_id
        )));
    }
    info!("Deleted artist {} with its albums and tracks", artist_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_artist_albums(
    Path(artist_id): Path<String>,
    State(state): State<DatabaseState>,
) -> Result<Json<Vec<AlbumResponse>>> {
    abort_if_artist_doesnt_exist(&state, &artist_id).await?;
    let albums = queries::get_albums_by_artist_id(&state.pool, &artist_id).await?;
    Ok(Json(AlbumResponse::from_albums(albums, &state.locator)))
}

pub async fn create_artist_album(
    Path(artist_id): Path<String>,
    State(state): State<DatabaseState>,
    payload: std::result::Result<Json<AlbumPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<AlbumResponse>)> {
    if !queries::artist_exists(&state.pool, &artist_id).await? {
        return Err(ApiError::ParentMissing(format!(
            "Artist {} doesn't exist",
            artist_id
        )));
    }
    let Json(payload) = payload?;
    let draft = payload.validate()?;
    let album = Album {
        id: identity::album_id(&draft.name, &artist_id),
        name: draft.name,
        genre: draft.genre,
        artist_id,
    };
    match queries::add_album(&state.pool, &album).await? {
        InsertOutcome::Created(album) => {
            info!("Created album {} with id {}", album.name, album.id);
            Ok((
                StatusCode::CREATED,
                Json(AlbumResponse::from_album(album, &state.locator)),
            ))
        }
        InsertOutcome::Existing(existing) => Err(ApiError::conflict(&AlbumResponse::from_album(
            existing,
            &state.locator,
        ))),
    }
}

pub async fn get_artist_tracks(
    Path(artist_id): Path<String>,
    State(state): State<DatabaseState>,
) -> Result<Json<Vec<TrackResponse>>> {
    abort_if_artist_doesnt_exist(&state, &artist_id).await?;
    let tracks = queries::get_tracks_by_artist_id(&state.pool, &artist_id).await?;
    Ok(Json(TrackResponse::from_tracks(tracks, &state.locator)))
}

pub async fn play_artist_tracks(
    Path(artist_id): Path<String>,
    State(state): State<DatabaseState>,
) -> Result<Json<PlayResponse>> {
    abort_if_artist_doesnt_exist(&state, &artist_id).await?;
    let played = queries::play_artist_tracks(&state.pool, &artist_id).await?;
    info!("Played {} tracks of artist {}", played, artist_id);
    Ok(Json(PlayResponse::new(
        "all tracks from artist were played",
        played,
    )))
}

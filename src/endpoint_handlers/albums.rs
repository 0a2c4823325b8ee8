use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use entities::track::Track;
use log::info;
use queries::InsertOutcome;

use crate::error::{ApiError, Result};
use crate::identity;
use crate::responses::album_response::AlbumResponse;
use crate::responses::track_response::TrackResponse;
use crate::responses::PlayResponse;
use crate::validation::{TrackPayload, Validate};
use crate::DatabaseState;

fn album_not_found(album_id: &str) -> ApiError {
    ApiError::NotFound(format!("Album {} doesn't exist", album_id))
}

pub async fn get_albums(State(state): State<DatabaseState>) -> Result<Json<Vec<AlbumResponse>>> {
    let albums = queries::get_all_albums(&state.pool).await?;
    Ok(Json(AlbumResponse::from_albums(albums, &state.locator)))
}

pub async fn get_album(
    Path(album_id): Path<String>,
    State(state): State<DatabaseState>,
) -> Result<Json<AlbumResponse>> {
    let album = queries::get_album_by_id(&state.pool, &album_id)
        .await?
        .ok_or_else(|| album_not_found(&album_id))?;
    Ok(Json(AlbumResponse::from_album(album, &state.locator)))
}

pub async fn delete_album(
    Path(album_id): Path<String>,
    State(state): State<DatabaseState>,
) -> Result<StatusCode> {
    if !queries::delete_album_by_id(&state.pool, &album_id).await? {
        return Err(album_not_found(&album_id));
    }
    info!("Deleted album {} with its tracks", album_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_album_tracks(
    Path(album_id): Path<String>,
    State(state): State<DatabaseState>,
) -> Result<Json<Vec<TrackResponse>>> {
    if !queries::album_exists(&state.pool, &album_id).await? {
        return Err(album_not_found(&album_id));
    }
    let tracks = queries::get_tracks_by_album_id(&state.pool, &album_id).await?;
    Ok(Json(TrackResponse::from_tracks(tracks, &state.locator)))
}

pub async fn create_album_track(
    Path(album_id): Path<String>,
    State(state): State<DatabaseState>,
    payload: std::result::Result<Json<TrackPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<TrackResponse>)> {
    if !queries::album_exists(&state.pool, &album_id).await? {
        return Err(ApiError::ParentMissing(format!(
            "Album {} doesn't exist",
            album_id
        )));
    }
    let Json(payload) = payload?;
    let draft = payload.validate()?;
    let track = Track {
        id: identity::track_id(&draft.name, &album_id),
        name: draft.name,
        duration: draft.duration,
        times_played: 0,
        album_id,
    };
    match queries::add_track(&state.pool, &track).await? {
        InsertOutcome::Created(track) => {
            info!("Created track {} with id {}", track.name, track.id);
            Ok((
                StatusCode::CREATED,
                Json(TrackResponse::from_track(track, &state.locator)),
            ))
        }
        InsertOutcome::Existing(existing) => Err(ApiError::conflict(&TrackResponse::from_track(
            existing,
            &state.locator,
        ))),
    }
}

pub async fn play_album_tracks(
    Path(album_id): Path<String>,
    State(state): State<DatabaseState>,
) -> Result<Json<PlayResponse>> {
    if !queries::album_exists(&state.pool, &album_id).await? {
        return Err(album_not_found(&album_id));
    }
    let played = queries::play_album_tracks(&state.pool, &album_id).await?;
    info!("Played {} tracks of album {}", played, album_id);
    Ok(Json(PlayResponse::new(
        "all tracks from album were played",
        played,
    )))
}

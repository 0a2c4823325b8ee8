use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use log::info;

use crate::error::{ApiError, Result};
use crate::responses::track_response::TrackResponse;
use crate::responses::PlayResponse;
use crate::DatabaseState;

fn track_not_found(track_id: &str) -> ApiError {
    ApiError::NotFound(format!("Track {} doesn't exist", track_id))
}

pub async fn get_tracks(State(state): State<DatabaseState>) -> Result<Json<Vec<TrackResponse>>> {
    let tracks = queries::get_all_tracks(&state.pool).await?;
    Ok(Json(TrackResponse::from_tracks(tracks, &state.locator)))
}

pub async fn get_track(
    Path(track_id): Path<String>,
    State(state): State<DatabaseState>,
) -> Result<Json<TrackResponse>> {
    let track = queries::get_track_by_id(&state.pool, &track_id)
        .await?
        .ok_or_else(|| track_not_found(&track_id))?;
    Ok(Json(TrackResponse::from_track(track, &state.locator)))
}

pub async fn delete_track(
    Path(track_id): Path<String>,
    State(state): State<DatabaseState>,
) -> Result<StatusCode> {
    if !queries::delete_track_by_id(&state.pool, &track_id).await? {
        return Err(track_not_found(&track_id));
    }
    info!("Deleted track {}", track_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn play_track(
    Path(track_id): Path<String>,
    State(state): State<DatabaseState>,
) -> Result<Json<PlayResponse>> {
    if !queries::play_track(&state.pool, &track_id).await? {
        return Err(track_not_found(&track_id));
    }
    info!("Played track {}", track_id);
    Ok(Json(PlayResponse::new("track was played", 1)))
}

use axum::routing::{get, put};
use axum::Router;
use sqlx::{Pool, Sqlite};
use tower_http::cors::CorsLayer;

use crate::endpoint_handlers::{albums, artists, tracks};
use crate::responses::Locator;

pub mod config;
pub mod endpoint_handlers;
pub mod error;
pub mod identity;
pub mod responses;
pub mod validation;

/// Handle passed to every handler: the store and the link builder.
#[derive(Clone)]
pub struct DatabaseState {
    pub pool: Pool<Sqlite>,
    pub locator: Locator,
}

impl DatabaseState {
    pub fn new(pool: Pool<Sqlite>, public_url: &str) -> Self {
        Self {
            pool,
            locator: Locator::new(public_url),
        }
    }
}

pub fn app(state: DatabaseState) -> Router {
    Router::new()
        // Artists
        .route(
            "/artists",
            get(artists::get_artists).post(artists::create_artist),
        )
        .route(
            "/artists/:artist_id",
            get(artists::get_artist).delete(artists::delete_artist),
        )
        .route(
            "/artists/:artist_id/albums",
            get(artists::get_artist_albums).post(artists::create_artist_album),
        )
        .route("/artists/:artist_id/tracks", get(artists::get_artist_tracks))
        .route(
            "/artists/:artist_id/albums/play",
            put(artists::play_artist_tracks),
        )
        // Albums
        .route("/albums", get(albums::get_albums))
        .route(
            "/albums/:album_id",
            get(albums::get_album).delete(albums::delete_album),
        )
        .route(
            "/albums/:album_id/tracks",
            get(albums::get_album_tracks).post(albums::create_album_track),
        )
        .route("/albums/:album_id/tracks/play", put(albums::play_album_tracks))
        // Tracks
        .route("/tracks", get(tracks::get_tracks))
        .route(
            "/tracks/:track_id",
            get(tracks::get_track).delete(tracks::delete_track),
        )
        .route("/tracks/:track_id/play", put(tracks::play_track))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

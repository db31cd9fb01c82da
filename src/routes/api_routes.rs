//! Protected API routes.
//!
//! Everything registered here sits behind the auth middleware; the
//! route_layer is applied in [`crate::routes::router`].

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::albums::handlers as albums;
use crate::artists::handlers as artists;
use crate::auth::{add_user, delete_user, list_users, update_password};
use crate::favorites::handlers as favorites;
use crate::server::state::AppState;
use crate::tracks::handlers as tracks;

/// Add the token-protected routes to the router.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Artists
        .route("/api/v1/artists", get(artists::list_artists))
        .route("/api/v1/artists/add-artist", post(artists::add_artist))
        .route(
            "/api/v1/artists/{id}",
            get(artists::get_artist)
                .put(artists::update_artist)
                .delete(artists::delete_artist),
        )
        // Albums
        .route("/api/v1/albums", get(albums::list_albums))
        .route("/api/v1/albums/add-album", post(albums::add_album))
        .route(
            "/api/v1/albums/{id}",
            get(albums::get_album)
                .put(albums::update_album)
                .delete(albums::delete_album),
        )
        // Tracks
        .route("/api/v1/tracks", get(tracks::list_tracks))
        .route("/api/v1/tracks/add-track", post(tracks::add_track))
        .route(
            "/api/v1/tracks/{id}",
            get(tracks::get_track)
                .put(tracks::update_track)
                .delete(tracks::delete_track),
        )
        // Favorites (always scoped to the token bearer)
        .route(
            "/api/v1/favorites/add-favorite",
            post(favorites::add_favorite),
        )
        .route(
            "/api/v1/favorites/remove-favorite/{id}",
            delete(favorites::remove_favorite),
        )
        .route(
            "/api/v1/favorites/{category}",
            get(favorites::list_favorites),
        )
        // User administration (Admin only, enforced by the policy table)
        .route("/api/v1/users", get(list_users))
        .route("/api/v1/users/add-user", post(add_user))
        .route("/api/v1/users/update-password", put(update_password))
        .route("/api/v1/users/{id}", delete(delete_user))
}

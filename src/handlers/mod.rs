pub mod artists;
pub mod errors;
pub mod extract;
pub mod flash;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))

        // Venues
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route(
            "/venues/:id",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(venues::edit_venue_form).post(venues::edit_venue_submission),
        )

        // Artists
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route("/artists/:id", get(artists::show_artist))
        .route(
            "/artists/:id/edit",
            get(artists::edit_artist_form).post(artists::edit_artist_submission),
        )

        // Shows
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show_submission),
        )
}

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};

use super::flash::FlashQuery;
use crate::{
    db::repositories::{ArtistRepository, ShowRepository, VenueRepository},
    error::Result,
    forms::{FormPairs, ShowFields},
    state::AppState,
    templates::{home_page, show_form_page, shows_page, Flash},
};

pub async fn list_shows(
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>> {
    let shows = ShowRepository::new(state.db.clone()).list_all().await?;

    Ok(Html(shows_page(&shows, flash.into_flash().as_ref()).into_string()))
}

async fn render_show_form(
    state: &AppState,
    fields: &ShowFields,
    problems: &[String],
) -> Result<String> {
    let venues = VenueRepository::new(state.db.clone()).list_all().await?;
    let artists = ArtistRepository::new(state.db.clone()).list_all().await?;

    Ok(show_form_page(fields, problems, &venues, &artists, None).into_string())
}

pub async fn create_show_form(State(state): State<AppState>) -> Result<Html<String>> {
    Ok(Html(
        render_show_form(&state, &ShowFields::default(), &[]).await?,
    ))
}

/// Venue and artist ids are not checked up front; a dangling id fails on
/// the foreign key and surfaces as the generic failure message.
pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(pairs): Form<FormPairs>,
) -> Result<Response> {
    let fields = ShowFields::from_pairs(&pairs);
    let form = match fields.validate() {
        Ok(form) => form,
        Err(problems) => {
            tracing::debug!(?problems, "Rejected show submission");
            let markup = render_show_form(&state, &fields, &problems).await?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(markup)).into_response());
        }
    };

    let flash = match ShowRepository::new(state.db.clone()).create(&form).await {
        Ok(_) => Flash::success("Show was successfully listed!"),
        Err(e) => {
            tracing::error!(
                venue_id = form.venue_id,
                artist_id = form.artist_id,
                error = %e,
                "Failed to create show"
            );
            Flash::error("An error occurred. Show could not be listed.")
        }
    };

    Ok(Html(home_page(Some(&flash)).into_string()).into_response())
}

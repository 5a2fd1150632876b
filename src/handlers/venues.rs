use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use chrono::Utc;

use super::extract::RecordId;
use super::flash::{flash_location, redirect_with_flash, FlashQuery};
use crate::{
    db::repositories::{SearchResults, ShowRepository, VenueRepository},
    error::{AppError, Result},
    forms::{FormPairs, ProfileFields, SearchForm},
    services::ShowSchedule,
    state::AppState,
    templates::{
        home_page, notification, search_results_page, venue_detail_page, venue_form_page,
        venues_page, Flash, FormMode, SearchHit, SearchKind, VenueDetail,
    },
};

/// Venues grouped by city
pub async fn list_venues(
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>> {
    let areas = VenueRepository::new(state.db.clone())
        .list_grouped_by_city()
        .await?;

    Ok(Html(venues_page(&areas, flash.into_flash().as_ref()).into_string()))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let term = form.term();
    let results = VenueRepository::new(state.db.clone())
        .search_by_name(term)
        .await?;

    tracing::debug!(term, count = results.count, "Venue search");

    let hits = SearchResults::new(results.items.into_iter().map(SearchHit::from).collect());
    Ok(Html(
        search_results_page(SearchKind::Venues, term, &hits).into_string(),
    ))
}

/// Venue detail page with upcoming and past shows
pub async fn show_venue(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>> {
    let venue = VenueRepository::new(state.db.clone()).get(id).await?;
    let genres = venue.genre_list()?;

    let shows = ShowRepository::new(state.db.clone()).for_venue(id).await?;
    let schedule = ShowSchedule::partition(Utc::now(), shows);

    let detail = VenueDetail {
        venue,
        genres,
        schedule,
    };
    Ok(Html(
        venue_detail_page(&detail, flash.into_flash().as_ref()).into_string(),
    ))
}

pub async fn create_venue_form() -> Html<String> {
    Html(venue_form_page(FormMode::Create, &ProfileFields::default(), &[]).into_string())
}

pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(pairs): Form<FormPairs>,
) -> Response {
    let fields = ProfileFields::from_pairs(&pairs);
    let form = match fields.validate_venue() {
        Ok(form) => form,
        Err(problems) => {
            tracing::debug!(?problems, "Rejected venue submission");
            let markup = venue_form_page(FormMode::Create, &fields, &problems);
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(markup.into_string())).into_response();
        }
    };

    let flash = match VenueRepository::new(state.db.clone()).create(&form).await {
        Ok(venue) => Flash::success(format!("Venue {} was successfully listed!", venue.name)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create venue");
            Flash::error(format!(
                "An error occurred. Venue {} could not be listed.",
                form.name
            ))
        }
    };

    Html(home_page(Some(&flash)).into_string()).into_response()
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Html<String>> {
    let venue = VenueRepository::new(state.db.clone()).get(id).await?;
    let fields = ProfileFields::from_venue(&venue);

    Ok(Html(
        venue_form_page(FormMode::Edit(id), &fields, &[]).into_string(),
    ))
}

pub async fn edit_venue_submission(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Form(pairs): Form<FormPairs>,
) -> Response {
    let fields = ProfileFields::from_pairs(&pairs);
    let form = match fields.validate_venue() {
        Ok(form) => form,
        Err(problems) => {
            tracing::debug!(venue_id = id, ?problems, "Rejected venue edit");
            let markup = venue_form_page(FormMode::Edit(id), &fields, &problems);
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(markup.into_string())).into_response();
        }
    };

    let flash = match VenueRepository::new(state.db.clone()).update(id, &form).await {
        Ok(venue) => Flash::success(format!("Venue {} was successfully updated!", venue.name)),
        Err(AppError::NotFound(msg)) => return AppError::NotFound(msg).into_response(),
        Err(e) => {
            tracing::error!(venue_id = id, error = %e, "Failed to update venue");
            Flash::error(format!(
                "An error occurred. Venue {} could not be updated!",
                form.name
            ))
        }
    };

    redirect_with_flash(&format!("/venues/{}", id), &flash).into_response()
}

/// Called through HTMX; a successful delete navigates the browser back to the
/// venue list via `HX-Redirect`.
pub async fn delete_venue(State(state): State<AppState>, RecordId(id): RecordId) -> Response {
    match VenueRepository::new(state.db.clone()).delete(id).await {
        Ok(()) => {
            let flash = Flash::success("Venue was successfully deleted");
            (
                [("HX-Redirect", flash_location("/venues", &flash))],
                Html(notification(&flash.message, flash.level.as_str()).into_string()),
            )
                .into_response()
        }
        Err(e) => {
            match &e {
                AppError::NotFound(_) => tracing::warn!(venue_id = id, "Delete of unknown venue"),
                _ => tracing::error!(venue_id = id, error = %e, "Failed to delete venue"),
            }
            Html(notification("Something went wrong. The venue could not be deleted.", "error").into_string())
                .into_response()
        }
    }
}

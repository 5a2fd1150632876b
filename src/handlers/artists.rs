use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use chrono::Utc;

use super::extract::RecordId;
use super::flash::{redirect_with_flash, FlashQuery};
use crate::{
    db::repositories::{ArtistRepository, SearchResults, ShowRepository},
    error::{AppError, Result},
    forms::{FormPairs, ProfileFields, SearchForm},
    services::ShowSchedule,
    state::AppState,
    templates::{
        artist_detail_page, artist_form_page, artists_page, home_page, search_results_page,
        ArtistDetail, Flash, FormMode, SearchHit, SearchKind,
    },
};

pub async fn list_artists(
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>> {
    let artists = ArtistRepository::new(state.db.clone()).list_all().await?;

    Ok(Html(
        artists_page(&artists, flash.into_flash().as_ref()).into_string(),
    ))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let term = form.term();
    let results = ArtistRepository::new(state.db.clone())
        .search_by_name(term)
        .await?;

    tracing::debug!(term, count = results.count, "Artist search");

    let hits = SearchResults::new(results.items.into_iter().map(SearchHit::from).collect());
    Ok(Html(
        search_results_page(SearchKind::Artists, term, &hits).into_string(),
    ))
}

pub async fn show_artist(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>> {
    let artist = ArtistRepository::new(state.db.clone()).get(id).await?;
    let genres = artist.genre_list()?;

    let shows = ShowRepository::new(state.db.clone()).for_artist(id).await?;
    let schedule = ShowSchedule::partition(Utc::now(), shows);

    let detail = ArtistDetail {
        artist,
        genres,
        schedule,
    };
    Ok(Html(
        artist_detail_page(&detail, flash.into_flash().as_ref()).into_string(),
    ))
}

pub async fn create_artist_form() -> Html<String> {
    Html(artist_form_page(FormMode::Create, &ProfileFields::default(), &[]).into_string())
}

pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(pairs): Form<FormPairs>,
) -> Response {
    let fields = ProfileFields::from_pairs(&pairs);
    let form = match fields.validate_artist() {
        Ok(form) => form,
        Err(problems) => {
            tracing::debug!(?problems, "Rejected artist submission");
            let markup = artist_form_page(FormMode::Create, &fields, &problems);
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(markup.into_string())).into_response();
        }
    };

    let flash = match ArtistRepository::new(state.db.clone()).create(&form).await {
        Ok(artist) => Flash::success(format!("Artist {} was successfully listed!", artist.name)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create artist");
            Flash::error(format!(
                "An error occurred. Artist {} could not be listed.",
                form.name
            ))
        }
    };

    Html(home_page(Some(&flash)).into_string()).into_response()
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Html<String>> {
    let artist = ArtistRepository::new(state.db.clone()).get(id).await?;
    let fields = ProfileFields::from_artist(&artist);

    Ok(Html(
        artist_form_page(FormMode::Edit(id), &fields, &[]).into_string(),
    ))
}

pub async fn edit_artist_submission(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Form(pairs): Form<FormPairs>,
) -> Response {
    let fields = ProfileFields::from_pairs(&pairs);
    let form = match fields.validate_artist() {
        Ok(form) => form,
        Err(problems) => {
            tracing::debug!(artist_id = id, ?problems, "Rejected artist edit");
            let markup = artist_form_page(FormMode::Edit(id), &fields, &problems);
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(markup.into_string())).into_response();
        }
    };

    let flash = match ArtistRepository::new(state.db.clone()).update(id, &form).await {
        Ok(artist) => Flash::success(format!("Artist {} was successfully updated!", artist.name)),
        Err(AppError::NotFound(msg)) => return AppError::NotFound(msg).into_response(),
        Err(e) => {
            tracing::error!(artist_id = id, error = %e, "Failed to update artist");
            Flash::error(format!(
                "An error occurred. Artist {} could not be updated!",
                form.name
            ))
        }
    };

    redirect_with_flash(&format!("/artists/{}", id), &flash).into_response()
}

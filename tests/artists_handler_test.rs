//! Integration tests for artist handler routes

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use sea_orm::EntityTrait;
use tower::util::ServiceExt;

use gigbook::db::entities::artist;
use gigbook::handlers;
use gigbook::state::AppState;
use gigbook::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .merge(handlers::html_routes())
        .fallback(handlers::errors::not_found)
        .with_state(state.clone())
}

async fn body_string(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_list_artists() {
    let state = setup_test_app_state().await;
    create_test_artist(&state.db, "Guns N Petals").await;
    create_test_artist(&state.db, "Matt Quevedo").await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/artists")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("Matt Quevedo"));
    assert!(body.contains(r#"href="/artists/2""#));
}

#[tokio::test]
async fn test_show_artist_lists_venues_played() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    create_test_show(&state.db, venue.id, artist.id, Utc::now() - Duration::days(90)).await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(get(&format!("/artists/{}", artist.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("0 Upcoming Shows"));
    assert!(body.contains("1 Past Show<"));
    assert!(body.contains(&format!(r#"href="/venues/{}""#, venue.id)));
    assert!(body.contains("Rock n Roll"));
}

#[tokio::test]
async fn test_show_artist_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/artists/3")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_artist_success() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post(
            "/artists/create",
            "name=The+Wild+Sax+Band&city=San+Francisco&state=CA&phone=432-325-5432\
             &genres=Jazz&genres=Classical&facebook_link=&image_link=",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response)
        .await
        .contains("Artist The Wild Sax Band was successfully listed!"));

    let artists = artist::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].phone, Some("432-325-5432".to_string()));
    assert_eq!(
        artists[0].genre_list().unwrap(),
        vec!["Jazz".to_string(), "Classical".to_string()]
    );
}

#[tokio::test]
async fn test_create_artist_without_genres_is_rejected() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post(
            "/artists/create",
            "name=The+Wild+Sax+Band&city=San+Francisco&state=CA",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_string(response).await.contains("Select at least one genre"));
    assert!(artist::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_artist_submission_redirects_with_flash() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post(
            &format!("/artists/{}/edit", artist.id),
            "name=Guns+N+Roses&city=Los+Angeles&state=CA&genres=Rock+n+Roll",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        &format!(
            "/artists/{}?flash=Artist%20Guns%20N%20Roses%20was%20successfully%20updated%21&level=success",
            artist.id
        )
    );

    let updated = artist::Entity::find_by_id(artist.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Guns N Roses");
    assert_eq!(updated.city, "Los Angeles");
}

#[tokio::test]
async fn test_edit_missing_artist_is_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post(
            "/artists/41/edit",
            "name=Nobody&city=Austin&state=TX&genres=Jazz",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::LOCATION).is_none());
    assert!(artist::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_numeric_artist_id_is_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/artists/guns-n-petals")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("404"));
}

#[tokio::test]
async fn test_edit_artist_form_prefilled() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(get(&format!("/artists/{}/edit", artist.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#"value="Guns N Petals""#));
    assert!(body.contains(r#"<option value="Rock n Roll" selected>"#));
    assert!(!body.contains(r#"name="address""#));
}

#[tokio::test]
async fn test_search_artists_counts_matches() {
    let state = setup_test_app_state().await;
    create_test_artist(&state.db, "Guns N Petals").await;
    create_test_artist(&state.db, "Matt Quevedo").await;
    create_test_artist(&state.db, "The Wild Sax Band").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post("/artists/search", "search_term=A"))
        .await
        .unwrap();

    let body = body_string(response).await;
    assert!(body.contains(r#"<span class="result-count">3</span>"#));

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_post("/artists/search", "search_term=band"))
        .await
        .unwrap();

    let body = body_string(response).await;
    assert!(body.contains(r#"<span class="result-count">1</span>"#));
    assert!(body.contains("The Wild Sax Band"));
}

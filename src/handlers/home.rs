use axum::{extract::Query, response::Html};

use super::flash::FlashQuery;
use crate::templates::home_page;

pub async fn index(Query(flash): Query<FlashQuery>) -> Html<String> {
    Html(home_page(flash.into_flash().as_ref()).into_string())
}

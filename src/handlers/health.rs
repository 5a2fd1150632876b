use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{error::Result, state::AppState};

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>> {
    state.db.ping().await?;
    Ok(Json(json!({ "status": "ok" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_app_state;

    #[tokio::test]
    async fn reports_ok_when_database_answers() {
        let state = setup_test_app_state().await;
        let Json(body) = health_check(State(state)).await.unwrap();
        assert_eq!(body, json!({ "status": "ok" }));
    }
}

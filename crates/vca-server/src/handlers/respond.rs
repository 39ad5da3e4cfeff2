//! Query/response endpoint

use axum::extract::State;
use axum::Json;

use vca_application::use_cases::AssistRequest;

use crate::error::ApiError;
use crate::models::{ChatResponseBody, QueryRequestBody};
use crate::state::AppState;

/// `POST /get_response/`
///
/// Minimal query surface: both fields are required, the answer comes back
/// under the single `response` key.
pub async fn get_response(
    State(state): State<AppState>,
    Json(body): Json<QueryRequestBody>,
) -> Result<Json<ChatResponseBody>, ApiError> {
    let response = state
        .assist
        .respond(AssistRequest {
            message: body.query,
            species: Some(body.species),
            ..Default::default()
        })
        .await?;

    Ok(Json(ChatResponseBody { response }))
}

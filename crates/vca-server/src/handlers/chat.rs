//! Veterinary chat endpoint

use axum::extract::State;
use axum::Json;

use vca_application::use_cases::AssistRequest;
use vca_domain::error::Error;

use crate::error::ApiError;
use crate::models::{ChatRequestBody, ChatResponseBody};
use crate::state::AppState;

/// `POST /veterinary-chat`
///
/// JSON chat without an upload; callers that already ran an image analysis
/// can pass its summary through `image_analysis`.
pub async fn veterinary_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequestBody>,
) -> Result<Json<ChatResponseBody>, ApiError> {
    let message = body
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| Error::validation("No message provided"))?;

    let response = state
        .assist
        .respond(AssistRequest {
            message,
            species: body.species,
            image_analysis: body.image_analysis,
            session: body.session,
        })
        .await?;

    Ok(Json(ChatResponseBody { response }))
}

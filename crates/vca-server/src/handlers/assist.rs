//! Combined chat + upload endpoint

use axum::extract::{Multipart, Request, State};
use axum::http::header;
use axum::{Json, RequestExt};

use vca_application::use_cases::AssistRequest;
use vca_domain::constants::IMAGE_ONLY_DEFAULT_MESSAGE;
use vca_domain::error::Error;

use crate::error::ApiError;
use crate::image_analysis::analyze_image;
use crate::models::{AssistRequestBody, AssistResponseBody};
use crate::state::AppState;

/// `POST /veterinary-assist`
///
/// Accepts either a JSON body or `multipart/form-data` with an optional
/// `image` part. With an image attached the message becomes optional (a
/// fixed default asks the model to discuss the analysis); with neither
/// message nor image the request is rejected with 400.
pub async fn veterinary_assist(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<AssistResponseBody>, ApiError> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));

    let (fields, image_bytes) = if is_multipart {
        parse_multipart(request).await?
    } else {
        let Json(body) = request
            .extract::<Json<AssistRequestBody>, _>()
            .await
            .map_err(|_| Error::validation("invalid request body"))?;
        (body, None)
    };

    let analysis = match &image_bytes {
        Some(bytes) => Some(analyze_image(bytes)?),
        None => None,
    };

    let message = match fields.message.filter(|m| !m.trim().is_empty()) {
        Some(message) => message,
        // An attached image stands in for a missing message.
        None if analysis.is_some() => IMAGE_ONLY_DEFAULT_MESSAGE.to_string(),
        None => return Err(Error::validation("No message provided").into()),
    };

    let response = state
        .assist
        .respond(AssistRequest {
            message,
            species: fields.species,
            image_analysis: analysis.clone(),
            session: fields.session,
        })
        .await?;

    Ok(Json(AssistResponseBody { analysis, response }))
}

/// Read message/species/session fields and the optional image part
async fn parse_multipart(
    request: Request,
) -> Result<(AssistRequestBody, Option<Vec<u8>>), ApiError> {
    let mut multipart = request
        .extract::<Multipart, _>()
        .await
        .map_err(|_| Error::validation("invalid multipart body"))?;

    let mut fields = AssistRequestBody {
        message: None,
        species: None,
        session: None,
    };
    let mut image_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::validation(format!("malformed multipart field: {e}")))?
    {
        let read_error = |e| Error::validation(format!("unreadable multipart field: {e}"));
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("message") => fields.message = Some(field.text().await.map_err(read_error)?),
            Some("species") => fields.species = Some(field.text().await.map_err(read_error)?),
            Some("session") => fields.session = Some(field.text().await.map_err(read_error)?),
            Some("image") => {
                image_bytes = Some(field.bytes().await.map_err(read_error)?.to_vec());
            }
            _ => {}
        }
    }

    Ok((fields, image_bytes))
}

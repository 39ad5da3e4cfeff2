//! Request/response bodies

use serde::{Deserialize, Serialize};

/// Body of `POST /veterinary-chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequestBody {
    /// The user's message; required
    pub message: Option<String>,
    /// Target species; defaults to "general"
    pub species: Option<String>,
    /// Pre-computed image analysis summary, if the caller ran one
    pub image_analysis: Option<String>,
    /// Session id scoping the conversation history
    pub session: Option<String>,
}

/// Body of `POST /get_response/`
#[derive(Debug, Deserialize)]
pub struct QueryRequestBody {
    /// The user's query
    pub query: String,
    /// Target species
    pub species: String,
}

/// JSON body of `POST /veterinary-assist`
#[derive(Debug, Deserialize)]
pub struct AssistRequestBody {
    /// The user's message; required when no image is attached
    pub message: Option<String>,
    /// Target species; defaults to "general"
    pub species: Option<String>,
    /// Session id scoping the conversation history
    pub session: Option<String>,
}

/// Response of the chat endpoints
#[derive(Debug, Serialize)]
pub struct ChatResponseBody {
    /// The generated answer (or the fixed fallback text)
    pub response: String,
}

/// Response of `POST /veterinary-assist`
#[derive(Debug, Serialize)]
pub struct AssistResponseBody {
    /// Image analysis summary; null when no image was attached
    pub analysis: Option<String>,
    /// The generated answer (or the fixed fallback text)
    pub response: String,
}

/// Structured error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error description
    pub error: String,
}

/// Response of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthBody {
    /// Always "healthy" while the process serves requests
    pub status: &'static str,
}

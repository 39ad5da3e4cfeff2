//! Shared request state

use std::sync::Arc;

use vca_application::use_cases::AssistService;

/// State shared by every request handler
///
/// Built once at startup; handlers clone the `Arc`s, never the services.
#[derive(Clone)]
pub struct AppState {
    /// The assist pipeline service
    pub assist: Arc<AssistService>,
}

//! Request handlers

/// `POST /veterinary-assist`
pub mod assist;
/// `POST /veterinary-chat`
pub mod chat;
/// `GET /health`
pub mod health;
/// `POST /get_response/`
pub mod respond;

pub use assist::veterinary_assist;
pub use chat::veterinary_chat;
pub use health::health_check;
pub use respond::get_response;

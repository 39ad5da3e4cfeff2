//! Provider implementations for the veterinary chat assistant
//!
//! Concrete adapters for the domain ports: embedding encoders, the flat
//! nearest-neighbor index, conversation memory, chat completion backends,
//! and clocks. Each provider registers itself into the linkme registries
//! declared by `vca-application`; binaries force-link this crate with
//! `extern crate vca_providers` to complete the registration.

/// Chat completion providers
pub mod chat;
/// Clock implementations
pub mod clock;
/// Provider-level constants
pub mod constants;
/// Embedding providers
pub mod embedding;
/// Vector index implementations
pub mod index;
/// Conversation memory implementations
pub mod memory;
/// Shared utilities
pub mod utils;

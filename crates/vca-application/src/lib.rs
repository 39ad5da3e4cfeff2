//! Application layer for the veterinary chat assistant
//!
//! Orchestrates the retrieval-augmented answer pipeline over the domain
//! ports: embed the query, look up corpus context, replay conversation
//! history, assemble the prompt, and drive the retrying generation engine.
//!
//! Provider implementations register themselves into the linkme registries
//! declared under [`ports::registry`]; this crate never depends on concrete
//! providers.

/// Domain services: prompt assembly, language detection, generation engine
pub mod domain_services;
/// Registry ports for provider auto-registration
pub mod ports;
/// Use cases
pub mod use_cases;

pub use use_cases::{AssistRequest, AssistService};

//! Consultation orchestrator.
//!
//! Wires the crisis gate, emotion classifier, retrieval engine, and
//! generation fallback chain around a shared storage engine, and runs
//! the per-message pipeline with partial-failure tolerance.

pub mod bootstrap;
pub mod engine;

pub use bootstrap::build_engine;
pub use engine::{ConsultEngine, SERVICE_UNAVAILABLE_RESPONSE};

//! # solace-classify
//!
//! Message screening: the Crisis Gate (pattern-based, runs first on every
//! message, no I/O) and the hybrid emotion classifier (keyword tier plus
//! an optional remote model tier with silent fallback).

pub mod emotion;
pub mod safety;

pub use emotion::EmotionClassifier;
pub use safety::{CrisisGate, GateResult, EMERGENCY_RESPONSE};

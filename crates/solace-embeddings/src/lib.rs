//! # solace-embeddings
//!
//! Query-time embedding generation. One remote provider (Gemini
//! `embedContent`) behind the `IEmbeddingProvider` trait; the produced
//! dimensionality must equal the index's, validated on every call and
//! again at retrieval-engine construction.

mod gemini;
mod validate;

pub use gemini::GeminiEmbedder;
pub use validate::validate_dimensions;

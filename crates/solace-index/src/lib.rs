//! # solace-index
//!
//! Flat vector index over the ingested document corpus. Vectors live in
//! a single little-endian file; a vector's id is its position. Search is
//! a brute-force cosine scan: the corpus is a few thousand chunks, so a
//! linear pass beats the operational cost of an ANN service.
//!
//! Search returns exactly `k` slots, padded with [`NO_MATCH_ID`] when the
//! index holds fewer vectors, mirroring the contract of the ingestion
//! tooling's index library. Callers discard the sentinels.

mod flat;
mod similarity;

pub use flat::FlatIndex;
pub use solace_core::constants::NO_MATCH_ID;

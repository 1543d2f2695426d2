//! # solace-retrieval
//!
//! RetrievalEngine: embed the query, search the vector index, join the
//! hits against the chunk metadata store, preserve rank order.

mod engine;

pub use engine::RetrievalEngine;

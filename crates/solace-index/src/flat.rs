//! The flat index: load, save, search.

use std::io::Read;
use std::path::Path;

use solace_core::constants::NO_MATCH_ID;
use solace_core::errors::{RetrievalError, SolaceResult};
use solace_core::traits::IVectorIndex;
use tracing::debug;

use crate::similarity::cosine_similarity;

/// File magic, followed by dimensions (u32 LE), vector count (u32 LE),
/// then `count * dims` f32 LE values.
const MAGIC: &[u8; 4] = b"SLIX";

/// An immutable flat vector index. Id = position in the file.
#[derive(Debug)]
pub struct FlatIndex {
    dimensions: usize,
    /// Row-major: vector `i` occupies `[i*dims, (i+1)*dims)`.
    data: Vec<f32>,
}

impl FlatIndex {
    /// Load an index from disk. An absent or unreadable file is the
    /// distinguishable `IndexUnavailable` condition; callers degrade to
    /// citation-free responses rather than failing the turn.
    pub fn open(path: &Path) -> SolaceResult<Self> {
        let unavailable = |reason: String| RetrievalError::IndexUnavailable {
            path: path.display().to_string(),
            reason,
        };

        let mut file = std::fs::File::open(path).map_err(|e| unavailable(e.to_string()))?;
        let mut raw = Vec::new();
        file.read_to_end(&mut raw)
            .map_err(|e| unavailable(e.to_string()))?;

        Self::from_bytes(&raw).map_err(|reason| unavailable(reason).into())
    }

    fn from_bytes(raw: &[u8]) -> Result<Self, String> {
        if raw.len() < 12 || &raw[0..4] != MAGIC {
            return Err("not a flat index file".to_string());
        }
        let dimensions = u32::from_le_bytes([raw[4], raw[5], raw[6], raw[7]]) as usize;
        let count = u32::from_le_bytes([raw[8], raw[9], raw[10], raw[11]]) as usize;
        if dimensions == 0 {
            return Err("zero dimensions in header".to_string());
        }

        let expected = 12 + count * dimensions * 4;
        if raw.len() != expected {
            return Err(format!(
                "truncated index: expected {expected} bytes, found {}",
                raw.len()
            ));
        }

        let mut data = Vec::with_capacity(count * dimensions);
        for chunk in raw[12..].chunks_exact(4) {
            data.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }

        debug!(vectors = count, dimensions, "flat index loaded");
        Ok(Self { dimensions, data })
    }

    /// Build an in-memory index from row vectors. Every row must match
    /// `dimensions`; used by ingestion tooling and tests.
    pub fn from_vectors(dimensions: usize, rows: &[Vec<f32>]) -> SolaceResult<Self> {
        let mut data = Vec::with_capacity(rows.len() * dimensions);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dimensions {
                return Err(RetrievalError::SearchFailed {
                    reason: format!(
                        "vector {i} has {} dimensions, index expects {dimensions}",
                        row.len()
                    ),
                }
                .into());
            }
            data.extend_from_slice(row);
        }
        Ok(Self { dimensions, data })
    }

    /// Serialize to the on-disk form.
    pub fn save(&self, path: &Path) -> SolaceResult<()> {
        let mut raw = Vec::with_capacity(12 + self.data.len() * 4);
        raw.extend_from_slice(MAGIC);
        raw.extend_from_slice(&(self.dimensions as u32).to_le_bytes());
        raw.extend_from_slice(&(self.len() as u32).to_le_bytes());
        for value in &self.data {
            raw.extend_from_slice(&value.to_le_bytes());
        }
        std::fs::write(path, raw).map_err(|e| {
            RetrievalError::SearchFailed {
                reason: format!("cannot write index {}: {e}", path.display()),
            }
            .into()
        })
    }

    fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.dimensions..(i + 1) * self.dimensions]
    }
}

impl IVectorIndex for FlatIndex {
    /// Top-`k` by cosine similarity, best first, padded to exactly `k`
    /// entries with the sentinel id when the index is smaller than `k`.
    fn search(&self, query: &[f32], k: usize) -> SolaceResult<Vec<(i64, f32)>> {
        if query.len() != self.dimensions {
            return Err(RetrievalError::SearchFailed {
                reason: format!(
                    "query has {} dimensions, index expects {}",
                    query.len(),
                    self.dimensions
                ),
            }
            .into());
        }

        let mut scored: Vec<(i64, f32)> = (0..self.len())
            .map(|i| (i as i64, cosine_similarity(query, self.row(i))))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        while scored.len() < k {
            scored.push((NO_MATCH_ID, f32::NEG_INFINITY));
        }

        Ok(scored)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn len(&self) -> usize {
        if self.dimensions == 0 {
            0
        } else {
            self.data.len() / self.dimensions
        }
    }
}

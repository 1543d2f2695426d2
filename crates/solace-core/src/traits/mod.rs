//! Seam traits between the pipeline and its collaborators.

mod embedding;
mod generative;
mod index;
mod storage;

pub use embedding::IEmbeddingProvider;
pub use generative::IGenerativeModel;
pub use index::IVectorIndex;
pub use storage::{IChunkStore, IEmotionStore, IMessageStore};

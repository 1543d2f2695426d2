use crate::errors::SolaceResult;
use crate::models::GenerationRequest;

/// A remote generative model service.
///
/// One implementation serves every model id; the fallback chain decides
/// which id to try next. Each id fails independently.
#[async_trait::async_trait]
pub trait IGenerativeModel: Send + Sync {
    /// Invoke the service with one model id. Any failure (quota,
    /// availability, policy block, transport) is an error for that id
    /// only.
    async fn generate(&self, model_id: &str, request: &GenerationRequest)
        -> SolaceResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}

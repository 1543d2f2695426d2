/// Model-tier classification errors.
///
/// Never escape the classifier: any of these downgrades the result to
/// the keyword tier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("classification request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("malformed classification reply: {reason}")]
    MalformedReply { reason: String },
}

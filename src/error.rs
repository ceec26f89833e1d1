/// Errors that abort a single relay invocation.
///
/// An alarm state outside the known set is not an error: it is mapped to a
/// default color by the payload builder.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The envelope is not valid JSON, has no record, or its record cannot
    /// be decoded.
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The webhook POST failed before a status code was received.
    #[error("Slack delivery failed: {0}")]
    Delivery(#[from] reqwest::Error),
}

impl RelayError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, RelayError::MalformedEnvelope(_))
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;

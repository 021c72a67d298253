use thiserror::Error;

#[derive(Debug, Error)]
pub enum VcAnalyticsError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for VcAnalyticsError {
    fn from(e: serde_json::Error) -> Self {
        VcAnalyticsError::SerializationError(e.to_string())
    }
}

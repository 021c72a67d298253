pub mod error;
pub mod irr;
pub mod types;

#[cfg(feature = "fund")]
pub mod fund;

#[cfg(feature = "company")]
pub mod company;

#[cfg(feature = "pipeline")]
pub mod pipeline;

#[cfg(feature = "risk")]
pub mod risk;

pub use error::VcAnalyticsError;
pub use types::*;

/// Standard result type for all analytics operations
pub type VcAnalyticsResult<T> = Result<T, VcAnalyticsError>;

//! Error types for language profile configuration
//!
//! Segmentation itself never fails; every input yields a (possibly empty)
//! sentence sequence. The only fallible surface is parsing and validating
//! profile configuration.

use thiserror::Error;

/// Errors raised while loading a language profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// TOML deserialization failure
    #[error("failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),

    /// Structurally valid configuration with unusable contents
    #[error("invalid profile for '{code}': {reason}")]
    Invalid {
        /// Language code of the offending profile
        code: String,
        /// Human-readable description of the problem
        reason: String,
    },
}

/// Result type for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;

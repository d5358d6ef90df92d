//! Error types for store operations

use thiserror::Error;

use crate::timer::ConfigError;

/// Errors while loading, saving or updating the timer store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to load timer store")]
    Load(#[source] confy::ConfyError),

    #[error("failed to save timer store")]
    Save(#[source] confy::ConfyError),

    #[error("invalid timer configuration")]
    Invalid(#[from] ConfigError),
}

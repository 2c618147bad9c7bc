//! Build errors for mode stack builders.

use thiserror::Error;

/// Errors that can occur when building a mode stack.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial mode not specified. Call .initial(mode) before .build()")]
    MissingInitialMode,
}

//! Error types for funcplot.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! Expression errors live in [`crate::expr`] and are wrapped here.

use crate::expr::ParseErr;
use thiserror::Error;

/// Result type alias for funcplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur in funcplot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Invalid configuration value.
    #[error("Invalid configuration: {field}: {reason}")]
    Config {
        /// Name of the offending setting.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Expression failed to compile.
    #[error("Expression error: {0}")]
    Expr(#[from] ParseErr),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create a Config error.
    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Config {
            field,
            reason: reason.into(),
        }
    }
}

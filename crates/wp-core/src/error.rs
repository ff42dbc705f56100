//! Framework error type.
//!
//! Sub-crates define their own error enums (`PathError`, `MotionError`, …)
//! and wrap `WpError` as one variant where they need to surface it.

use thiserror::Error;

/// The top-level error type for `wp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WpError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `wp-*` crates.
pub type WpResult<T> = Result<T, WpError>;

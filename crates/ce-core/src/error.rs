//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The base error type for `ce-core` and a common building block for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `ce-core`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Fail with [`CoreError::Config`] unless `p` is a finite probability in `[0, 1]`.
///
/// Shared by every parameter struct's `validate()` so the error wording is
/// identical across crates.
pub fn check_probability(name: &str, p: f64) -> CoreResult<()> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{name} must be a probability in [0, 1], got {p}")))
    }
}

//! Error types for the effect system.
//!
//! Effects fail for three reasons: an operand that does not satisfy the
//! action (too few arguments for its template), a malformed template, or the
//! effect's own output failing.

use thiserror::Error;

use super::template::TemplateError;
use crate::typeclass::MonadError;

/// Errors raised while building or performing an effectful action.
///
/// # Examples
///
/// ```rust
/// use seqmonad::effect::{EffectError, TemplateError};
///
/// let error = EffectError::from(TemplateError::UnmatchedClose { position: 3 });
/// assert_eq!(
///     error.to_string(),
///     "invalid format template: unmatched `}` at byte 3"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EffectError {
    /// The action rejected its input or arguments.
    #[error(transparent)]
    Operand(#[from] MonadError),
    /// The action's format template could not be parsed or rendered.
    #[error("invalid format template: {0}")]
    Template(#[from] TemplateError),
    /// Writing the action's output failed.
    #[error("failed to emit effect output: {0}")]
    Emit(#[from] std::io::Error),
}

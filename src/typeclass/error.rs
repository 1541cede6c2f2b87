//! Error types for monadic composition.
//!
//! Absence of a value is never an error in this crate: it is modelled by a
//! zero-length monad such as [`Maybe::nothing`](super::Maybe::nothing).
//! The errors here describe operands that break the composition contract and
//! are reported when a step is built, never deferred to iteration.

use thiserror::Error;

/// Errors raised while composing monadic values.
///
/// # Examples
///
/// ```rust
/// use seqmonad::typeclass::MonadError;
///
/// let error = MonadError::InvalidOperand {
///     operand: "Step::applied",
///     reason: "expected 1 argument(s), got 0".to_string(),
/// };
/// assert_eq!(
///     format!("{error}"),
///     "invalid operand for Step::applied: expected 1 argument(s), got 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonadError {
    /// The right-hand side of a bind cannot be used as a step.
    #[error("invalid operand for {operand}: {reason}")]
    InvalidOperand {
        /// The operation that rejected the operand.
        operand: &'static str,
        /// Why the operand was rejected.
        reason: String,
    },
}

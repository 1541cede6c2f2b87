//! Right-hand operands of a bind.
//!
//! A bind can be given a plain transformation, a transformation with extra
//! leading arguments, or a constant monadic value. [`Step`] makes that choice
//! an explicit tag that [`Monad::bind`](super::Monad::bind) matches on.

use std::fmt;
use std::rc::Rc;

use super::argument::{Argument, Arguments};
use super::error::MonadError;
use super::monad::Monad;

/// How many extra arguments an applied step accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// This many arguments or more.
    AtLeast(usize),
    /// Any number of arguments, including none.
    Any,
}

impl Arity {
    /// Returns whether `count` arguments satisfy this arity.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(expected) => count == expected,
            Self::AtLeast(minimum) => count >= minimum,
            Self::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(expected) => write!(formatter, "{expected}"),
            Self::AtLeast(minimum) => write!(formatter, "at least {minimum}"),
            Self::Any => write!(formatter, "any number of"),
        }
    }
}

/// A transformation from `T` to a monad of `U`.
pub type Transform<T, U> = Rc<dyn Fn(T) -> Monad<U>>;

/// A transformation that also receives the step's extra arguments.
pub type AppliedTransform<T, U> = Rc<dyn Fn(T, &[Argument]) -> Monad<U>>;

/// The right-hand side of a bind.
///
/// # Examples
///
/// ```rust
/// use seqmonad::typeclass::{Argument, Arity, Maybe, Step};
///
/// let multiply = Step::applied(
///     Arity::Exact(1),
///     |value: i64, arguments: &[Argument]| {
///         arguments[0]
///             .as_integer()
///             .map_or_else(Maybe::nothing, |factor| Maybe::just(value * factor))
///     },
///     [Argument::from(11)],
/// )
/// .unwrap();
///
/// let result = Maybe::just(12_i64).bind(multiply);
/// assert_eq!(result.to_vec(), vec![132]);
/// ```
pub enum Step<T, U> {
    /// Bind every value through a function.
    Transform(Transform<T, U>),
    /// Bind every value through a function, passing extra arguments after it.
    Applied {
        /// The function receiving the value and the arguments.
        function: AppliedTransform<T, U>,
        /// The arguments bound when the step was built.
        arguments: Arguments,
    },
    /// Ignore every value and emit the same monad for each of them.
    Constant(Monad<U>),
}

impl<T, U> Step<T, U> {
    /// Creates a step from a plain transformation.
    pub fn transform<F>(function: F) -> Self
    where
        F: Fn(T) -> Monad<U> + 'static,
    {
        Self::Transform(Rc::new(function))
    }

    /// Creates a step that discards the bound value and replays `monad`.
    #[inline]
    pub const fn constant(monad: Monad<U>) -> Self {
        Self::Constant(monad)
    }

    /// Creates a step that calls `function(value, arguments)`.
    ///
    /// The argument count is checked against `arity` now, so a mismatched
    /// step is rejected before anything is composed with it.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::InvalidOperand`] if `arguments` does not satisfy
    /// `arity`.
    pub fn applied<F, I>(arity: Arity, function: F, arguments: I) -> Result<Self, MonadError>
    where
        F: Fn(T, &[Argument]) -> Monad<U> + 'static,
        I: IntoIterator<Item = Argument>,
    {
        let arguments: Arguments = arguments.into_iter().collect();
        if !arity.accepts(arguments.len()) {
            return Err(MonadError::InvalidOperand {
                operand: "Step::applied",
                reason: format!("expected {arity} argument(s), got {}", arguments.len()),
            });
        }
        Ok(Self::Applied {
            function: Rc::new(function),
            arguments,
        })
    }
}

impl<T, U> From<Monad<U>> for Step<T, U> {
    fn from(monad: Monad<U>) -> Self {
        Self::Constant(monad)
    }
}

impl<T, U> Clone for Step<T, U> {
    fn clone(&self) -> Self {
        match self {
            Self::Transform(function) => Self::Transform(Rc::clone(function)),
            Self::Applied {
                function,
                arguments,
            } => Self::Applied {
                function: Rc::clone(function),
                arguments: arguments.clone(),
            },
            Self::Constant(monad) => Self::Constant(monad.clone()),
        }
    }
}

impl<T, U> fmt::Debug for Step<T, U> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform(_) => formatter.write_str("Transform(<function>)"),
            Self::Applied { arguments, .. } => formatter
                .debug_struct("Applied")
                .field("arguments", &arguments.as_slice())
                .finish_non_exhaustive(),
            Self::Constant(monad) => write!(formatter, "Constant({})", monad.variant()),
        }
    }
}

//! IO Monad - side effects captured as replayable results.
//!
//! An effectful monad performs its [`Action`] synchronously, exactly once,
//! when it is built. The result of the action is captured and the monad
//! then behaves like a one-element optional monad: iterating it, forking it
//! or binding over it only replays the captured result and never runs the
//! action again.
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::effect::{FnAction, IO};
//! use seqmonad::typeclass::Argument;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&runs);
//! let mut action = FnAction::new(move |value: i32, _: &[Argument]| {
//!     counter.set(counter.get() + 1);
//!     Ok(value)
//! });
//!
//! let io = IO::perform(&mut action, 42, &[]).unwrap();
//! assert_eq!(runs.get(), 1); // performed at construction
//!
//! assert_eq!(io.to_vec(), vec![42]);
//! assert_eq!(io.to_vec(), vec![42]);
//! assert_eq!(runs.get(), 1); // iteration only replays the result
//! ```

use std::cell::RefCell;

use super::error::EffectError;
use crate::control::LazySequence;
use crate::typeclass::{Argument, Arguments, Arity, Maybe, Monad, Step, Variant};

/// A side effect that produces one result from an input and extra arguments.
///
/// Anything implementing this trait can back an effectful monad. The
/// arguments are only borrowed for the duration of [`perform`](Self::perform).
pub trait Action<T> {
    /// The name shown in the textual representation of the resulting monad.
    fn name(&self) -> &'static str {
        "IO"
    }

    /// Checks that `arguments` are usable before the action is performed.
    ///
    /// # Errors
    ///
    /// Returns an [`EffectError`] describing the unusable operand.
    fn validate(&self, arguments: &[Argument]) -> Result<(), EffectError> {
        let _ = arguments;
        Ok(())
    }

    /// Performs the side effect and returns its result.
    ///
    /// # Errors
    ///
    /// Returns an [`EffectError`] if the side effect fails.
    fn perform(&mut self, input: T, arguments: &[Argument]) -> Result<T, EffectError>;
}

/// An [`Action`] backed by a closure.
///
/// # Examples
///
/// ```rust
/// use seqmonad::effect::{FnAction, IO};
/// use seqmonad::typeclass::Argument;
///
/// let mut shout = FnAction::named("Shout", |text: String, _: &[Argument]| Ok(text.to_uppercase()));
/// let io = IO::perform(&mut shout, "hi".to_string(), &[]).unwrap();
/// assert_eq!(io.to_string(), "Shout(HI)");
/// ```
#[derive(Debug, Clone)]
pub struct FnAction<F> {
    name: &'static str,
    function: F,
}

impl<F> FnAction<F> {
    /// Wraps `function` as an action named `IO`.
    #[inline]
    pub fn new<T>(function: F) -> Self
    where
        F: FnMut(T, &[Argument]) -> Result<T, EffectError>,
    {
        Self::named("IO", function)
    }

    /// Wraps `function` as an action with the given name.
    #[inline]
    pub fn named<T>(name: &'static str, function: F) -> Self
    where
        F: FnMut(T, &[Argument]) -> Result<T, EffectError>,
    {
        Self { name, function }
    }
}

impl<T, F> Action<T> for FnAction<F>
where
    F: FnMut(T, &[Argument]) -> Result<T, EffectError>,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn perform(&mut self, input: T, arguments: &[Argument]) -> Result<T, EffectError> {
        (self.function)(input, arguments)
    }
}

/// Constructors for effectful monads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IO;

impl IO {
    /// Performs `action` on `input` now and captures its result.
    ///
    /// The returned monad yields the captured result exactly once per
    /// iteration and is rendered with the action's name.
    ///
    /// # Errors
    ///
    /// Returns an [`EffectError`] if the arguments are rejected by the action,
    /// in which case nothing is performed, or if the action itself fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::effect::{FormatConfig, IO, PrintAction};
    ///
    /// let mut print = PrintAction::with_writer(&FormatConfig::default(), Vec::<u8>::new()).unwrap();
    /// let io = IO::perform(&mut print, "Hello, world!".to_string(), &[]).unwrap();
    ///
    /// assert_eq!(print.writer().as_slice(), b"Hello, world!\n");
    /// assert_eq!(io.to_vec(), vec!["Hello, world!".to_string()]);
    /// ```
    pub fn perform<T, A>(
        action: &mut A,
        input: T,
        arguments: &[Argument],
    ) -> Result<Monad<T>, EffectError>
    where
        T: 'static,
        A: Action<T> + ?Sized,
    {
        action.validate(arguments)?;
        tracing::debug!(
            action = action.name(),
            arguments = arguments.len(),
            "performing effect"
        );
        let result = action.perform(input, arguments)?;
        Ok(Monad::with_variant(
            Variant::Effect(action.name()),
            LazySequence::once(result),
        ))
    }

    /// Builds a step that performs `action` on every value it is bound to.
    ///
    /// The arguments are validated now. Each bound value is passed to
    /// [`IO::perform`] when the composed monad is first iterated; replays
    /// of that monad do not perform the action again.
    ///
    /// # Failures
    ///
    /// A value whose action fails (for example a write error) is logged at
    /// `error` level and dropped: the step yields `Nothing` for it. The
    /// composed monad therefore cannot tell a failed action from a value
    /// that was filtered out. Use [`IO::step_or_else`] to observe or
    /// replace failures.
    ///
    /// # Errors
    ///
    /// Returns an [`EffectError`] if the action rejects `arguments`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::effect::{FnAction, IO};
    /// use seqmonad::typeclass::{Argument, ListM};
    ///
    /// let double = IO::step(FnAction::new(|x: i32, _: &[Argument]| Ok(x * 2)), []).unwrap();
    /// let doubled = ListM::from_vec(vec![1, 2]).bind(double);
    /// assert_eq!(doubled.to_vec(), vec![2, 4]);
    /// ```
    pub fn step<T, A, I>(action: A, arguments: I) -> Result<Step<T, T>, EffectError>
    where
        T: 'static,
        A: Action<T> + 'static,
        I: IntoIterator<Item = Argument>,
    {
        let name = action.name();
        Self::step_or_else(action, arguments, move |error| {
            tracing::error!(action = name, %error, "effect failed inside a step");
            Maybe::nothing()
        })
    }

    /// Builds a step like [`IO::step`], handing every failure to `on_error`.
    ///
    /// Whatever monad `on_error` returns takes the failed value's place in
    /// the composed monad, so a failure can be recorded, replaced by a
    /// fallback value, or dropped.
    ///
    /// # Errors
    ///
    /// Returns an [`EffectError`] if the action rejects `arguments`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::effect::{EffectError, FnAction, IO};
    /// use seqmonad::typeclass::{Argument, ListM, Maybe};
    ///
    /// let checked = FnAction::new(|x: i32, _: &[Argument]| {
    ///     if x < 0 {
    ///         Err(EffectError::from(std::io::Error::other("negative")))
    ///     } else {
    ///         Ok(x)
    ///     }
    /// });
    /// let step = IO::step_or_else(checked, [], |_| Maybe::just(0)).unwrap();
    ///
    /// let clamped = ListM::from_vec(vec![3, -1, 5]).bind(step);
    /// assert_eq!(clamped.to_vec(), vec![3, 0, 5]);
    /// ```
    pub fn step_or_else<T, A, I, H>(
        action: A,
        arguments: I,
        on_error: H,
    ) -> Result<Step<T, T>, EffectError>
    where
        T: 'static,
        A: Action<T> + 'static,
        I: IntoIterator<Item = Argument>,
        H: Fn(EffectError) -> Monad<T> + 'static,
    {
        let arguments: Arguments = arguments.into_iter().collect();
        action.validate(&arguments)?;
        let action = RefCell::new(action);
        let step = Step::applied(
            Arity::Any,
            move |value: T, arguments: &[Argument]| {
                IO::perform(&mut *action.borrow_mut(), value, arguments).unwrap_or_else(&on_error)
            },
            arguments,
        )?;
        Ok(step)
    }
}

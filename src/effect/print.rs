//! The printing action.
//!
//! [`PrintAction`] renders its input through a [`Template`] and writes one
//! line per invocation. Its monads are rendered as `PrintM`.

use std::fmt;
use std::io::{self, Write};

use super::config::FormatConfig;
use super::error::EffectError;
use super::io::Action;
use super::template::{Template, TemplateError};
use crate::typeclass::{Argument, MonadError};

/// An [`Action`] that writes its formatted input as a line.
///
/// Placeholder `{0}` is the input, `{k}` is the `k`-th extra argument.
///
/// # Examples
///
/// ```rust
/// use seqmonad::effect::{FormatConfig, IO, PrintAction};
/// use seqmonad::typeclass::Argument;
///
/// let config = FormatConfig::new("{0} <- {1}");
/// let mut print = PrintAction::with_writer(&config, Vec::<u8>::new()).unwrap();
///
/// let io = IO::perform(&mut print, -12, &[Argument::from("Negative number")]).unwrap();
/// assert_eq!(print.writer().as_slice(), b"-12 <- Negative number\n");
/// assert_eq!(io.to_string(), "PrintM(-12)");
/// ```
pub struct PrintAction<W = io::Stdout> {
    template: Template,
    writer: W,
}

impl PrintAction<io::Stdout> {
    /// Creates an action printing to standard output.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the configured template is malformed.
    pub fn stdout(config: &FormatConfig) -> Result<Self, TemplateError> {
        Self::with_writer(config, io::stdout())
    }
}

impl<W: Write> PrintAction<W> {
    /// Creates an action writing to `writer`.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the configured template is malformed.
    pub fn with_writer(config: &FormatConfig, writer: W) -> Result<Self, TemplateError> {
        Ok(Self {
            template: config.parse()?,
            writer,
        })
    }

    /// Returns the parsed template.
    #[inline]
    pub const fn template(&self) -> &Template {
        &self.template
    }

    /// Returns the writer.
    #[inline]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the action and returns the writer.
    #[inline]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<T: fmt::Display, W: Write> Action<T> for PrintAction<W> {
    fn name(&self) -> &'static str {
        "PrintM"
    }

    fn validate(&self, arguments: &[Argument]) -> Result<(), EffectError> {
        let required = self.template.required_arguments();
        if arguments.len() < required {
            return Err(MonadError::InvalidOperand {
                operand: "PrintM",
                reason: format!(
                    "template `{}` needs {required} extra argument(s), got {}",
                    self.template,
                    arguments.len()
                ),
            }
            .into());
        }
        Ok(())
    }

    fn perform(&mut self, input: T, arguments: &[Argument]) -> Result<T, EffectError> {
        let line = self.template.render(&input, arguments)?;
        writeln!(self.writer, "{line}")?;
        Ok(input)
    }
}

impl<W> fmt::Debug for PrintAction<W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PrintAction")
            .field("template", &self.template.source())
            .finish_non_exhaustive()
    }
}

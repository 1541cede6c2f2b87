//! Positional format templates.
//!
//! A [`Template`] is parsed once, when an action is built, and rendered each
//! time the action runs. Placeholder `{0}` is the value the action is applied
//! to, and `{k}` is the `k`-th extra argument (1-based).
//!
//! Supported syntax:
//!
//! - `{n}`: explicit positional placeholder
//! - `{}`: automatic numbering, starting at `{0}`
//! - `{{` and `}}`: literal braces
//! - `{n:[[fill]align][width][.precision]}`: padding and precision, where
//!   `align` is `<`, `>` or `^`
//!
//! Without an explicit alignment, numeric arguments are right-aligned and
//! everything else (including the input value) is left-aligned. Precision
//! rounds floats and truncates text, and is ignored by integers.
//!
//! Any other format specification (sign, `#`, `0`, grouping, type letters,
//! `=` alignment or `!` conversions) is rejected.
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::effect::Template;
//! use seqmonad::typeclass::Argument;
//!
//! let template = Template::parse("[{0:<6}|{1:*^7}|{2:.2}]").unwrap();
//! let arguments = [Argument::from("ok"), Argument::from(1.2345)];
//! assert_eq!(template.render("id", &arguments).unwrap(), "[id    |**ok***|1.23]");
//! ```

use std::fmt;

use thiserror::Error;

use crate::typeclass::Argument;

/// Errors raised while parsing or rendering a [`Template`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{` was never closed.
    #[error("unclosed `{{` at byte {position}")]
    Unclosed {
        /// Byte offset of the opening brace.
        position: usize,
    },
    /// A `}` appeared without a matching `{`.
    #[error("unmatched `}}` at byte {position}")]
    UnmatchedClose {
        /// Byte offset of the closing brace.
        position: usize,
    },
    /// A placeholder was neither empty nor an index.
    #[error("invalid placeholder `{{{placeholder}}}`")]
    InvalidPlaceholder {
        /// The text between the braces.
        placeholder: String,
    },
    /// A placeholder carried a format specification outside
    /// `[[fill]align][width][.precision]`.
    #[error("format specification in `{{{placeholder}}}` is not supported")]
    UnsupportedSpec {
        /// The text between the braces.
        placeholder: String,
    },
    /// Automatic and explicit numbering were mixed.
    #[error("cannot mix automatic `{{}}` and explicit `{{n}}` placeholders")]
    MixedNumbering,
    /// Rendering referenced an argument that was not supplied.
    #[error("placeholder {{{index}}} needs argument {index}, only {available} supplied")]
    MissingArgument {
        /// The placeholder index.
        index: usize,
        /// How many extra arguments were supplied.
        available: usize,
    },
}

// =============================================================================
// Format Options
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    Left,
    Right,
    Center,
}

impl Alignment {
    const fn from_char(character: char) -> Option<Self> {
        match character {
            '<' => Some(Self::Left),
            '>' => Some(Self::Right),
            '^' => Some(Self::Center),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormatOptions {
    fill: char,
    align: Option<Alignment>,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            width: None,
            precision: None,
        }
    }
}

impl FormatOptions {
    /// Parses `[[fill]align][width][.precision]`. Returns `None` for
    /// anything else.
    fn parse(specification: &str) -> Option<Self> {
        let mut options = Self::default();
        let mut characters = specification.chars();
        let first = characters.next();
        let second = characters.next();

        let mut rest = specification;
        match (first, second.and_then(Alignment::from_char)) {
            (Some(fill), Some(align)) => {
                options.fill = fill;
                options.align = Some(align);
                rest = &specification[fill.len_utf8() + 1..];
            }
            _ => {
                if let Some(align) = first.and_then(Alignment::from_char) {
                    options.align = Some(align);
                    rest = &specification[1..];
                }
            }
        }

        // a leading zero is the zero-padding flag, not part of the width
        if rest.starts_with('0')
            && rest[1..].starts_with(|character: char| character.is_ascii_digit())
        {
            return None;
        }
        let (width, rest) = Self::leading_number(rest)?;
        options.width = width;

        let rest = match rest.strip_prefix('.') {
            Some(after_dot) => {
                let (precision, rest) = Self::leading_number(after_dot)?;
                options.precision = Some(precision?);
                rest
            }
            None => rest,
        };

        rest.is_empty().then_some(options)
    }

    /// Splits off leading ASCII digits. Fails only when they overflow.
    fn leading_number(text: &str) -> Option<(Option<usize>, &str)> {
        let end = text
            .find(|character: char| !character.is_ascii_digit())
            .unwrap_or(text.len());
        let (digits, rest) = text.split_at(end);
        if digits.is_empty() {
            return Some((None, rest));
        }
        digits.parse().ok().map(|number| (Some(number), rest))
    }

    fn apply<T>(self, value: &T, numeric: bool) -> String
    where
        T: fmt::Display + ?Sized,
    {
        let text = match self.precision {
            Some(precision) => format!("{value:.precision$}"),
            None => value.to_string(),
        };
        let Some(width) = self.width else {
            return text;
        };
        let length = text.chars().count();
        if length >= width {
            return text;
        }

        let padding = width - length;
        let default_align = if numeric {
            Alignment::Right
        } else {
            Alignment::Left
        };
        let (before, after) = match self.align.unwrap_or(default_align) {
            Alignment::Left => (0, padding),
            Alignment::Right => (padding, 0),
            Alignment::Center => (padding / 2, padding - padding / 2),
        };

        let mut output = String::with_capacity(text.len() + padding * self.fill.len_utf8());
        output.extend(std::iter::repeat_n(self.fill, before));
        output.push_str(&text);
        output.extend(std::iter::repeat_n(self.fill, after));
        output
    }
}

// =============================================================================
// Template
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder {
        index: usize,
        options: FormatOptions,
    },
}

/// A parsed positional format template.
///
/// # Examples
///
/// ```rust
/// use seqmonad::effect::Template;
/// use seqmonad::typeclass::Argument;
///
/// let template = Template::parse("{0} <- {1}").unwrap();
/// assert_eq!(template.required_arguments(), 1);
/// assert_eq!(
///     template.render(&-12, &[Argument::from("negative")]).unwrap(),
///     "-12 <- negative"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Numbering {
    Unknown,
    Automatic(usize),
    Explicit,
}

impl Template {
    /// Parses `source`.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] describing the first malformed placeholder.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut numbering = Numbering::Unknown;
        let mut characters = source.char_indices().peekable();

        while let Some((position, character)) = characters.next() {
            match character {
                '{' if characters.next_if(|&(_, next)| next == '{').is_some() => {
                    literal.push('{');
                }
                '}' if characters.next_if(|&(_, next)| next == '}').is_some() => {
                    literal.push('}');
                }
                '}' => return Err(TemplateError::UnmatchedClose { position }),
                '{' => {
                    let mut placeholder = String::new();
                    let mut closed = false;
                    for (_, inner) in characters.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        placeholder.push(inner);
                    }
                    if !closed {
                        return Err(TemplateError::Unclosed { position });
                    }
                    let segment = Self::placeholder(placeholder, &mut numbering)?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    fn placeholder(
        placeholder: String,
        numbering: &mut Numbering,
    ) -> Result<Segment, TemplateError> {
        let (field, specification) = placeholder
            .split_once(':')
            .unwrap_or((placeholder.as_str(), ""));
        if field.contains('!') {
            return Err(TemplateError::UnsupportedSpec { placeholder });
        }
        let Some(options) = FormatOptions::parse(specification) else {
            return Err(TemplateError::UnsupportedSpec { placeholder });
        };

        let field = field.trim();
        let index = if field.is_empty() {
            let next = match *numbering {
                Numbering::Unknown => 0,
                Numbering::Automatic(next) => next,
                Numbering::Explicit => return Err(TemplateError::MixedNumbering),
            };
            *numbering = Numbering::Automatic(next + 1);
            next
        } else {
            if matches!(numbering, Numbering::Automatic(_)) {
                return Err(TemplateError::MixedNumbering);
            }
            *numbering = Numbering::Explicit;
            match field.parse() {
                Ok(index) => index,
                Err(_) => return Err(TemplateError::InvalidPlaceholder { placeholder }),
            }
        };

        Ok(Segment::Placeholder { index, options })
    }

    /// Returns the template text as written.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the number of extra arguments the template refers to.
    ///
    /// This is the highest placeholder index, since `{0}` is the input.
    pub fn required_arguments(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder { index, .. } => Some(*index),
                Segment::Literal(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Renders the template with `input` as `{0}` and `arguments` as `{1}..`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingArgument`] if a placeholder refers past
    /// the end of `arguments`.
    pub fn render<T>(&self, input: &T, arguments: &[Argument]) -> Result<String, TemplateError>
    where
        T: fmt::Display + ?Sized,
    {
        let mut output = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder { index: 0, options } => {
                    output.push_str(&options.apply(input, false));
                }
                Segment::Placeholder { index, options } => {
                    let argument =
                        arguments
                            .get(index - 1)
                            .ok_or(TemplateError::MissingArgument {
                                index: *index,
                                available: arguments.len(),
                            })?;
                    output.push_str(&options.apply(argument, argument.is_numeric()));
                }
            }
        }
        Ok(output)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("{0}", "42")]
    #[case("value: {}", "value: 42")]
    #[case("{{{0}}}", "{42}")]
    #[case("{ 0 }!", "42!")]
    #[case("plain", "plain")]
    fn renders_input(#[case] source: &str, #[case] expected: &str) {
        let template = Template::parse(source).unwrap();
        assert_eq!(template.render(&42, &[]).unwrap(), expected);
    }

    #[rstest]
    fn renders_arguments_after_input() {
        let template = Template::parse("{2}-{0}-{1}").unwrap();
        let arguments = [Argument::from("a"), Argument::from(true)];
        assert_eq!(template.render("x", &arguments).unwrap(), "true-x-a");
        assert_eq!(template.required_arguments(), 2);
    }

    #[rstest]
    fn automatic_numbering_counts_up() {
        let template = Template::parse("{} {}").unwrap();
        assert_eq!(template.required_arguments(), 1);
        assert_eq!(
            template.render(&1, &[Argument::from(2)]).unwrap(),
            "1 2"
        );
    }

    #[rstest]
    #[case("{0:>4}", "  42")]
    #[case("{0:<4}|", "42  |")]
    #[case("{0:^6}", "  42  ")]
    #[case("{0:*^7}", "**42***")]
    #[case("{0::>5}", ":::42")]
    #[case("{0:4}|", "42  |")]
    #[case("{0:1}", "42")]
    #[case("{:>3}", " 42")]
    fn pads_the_input(#[case] source: &str, #[case] expected: &str) {
        let template = Template::parse(source).unwrap();
        assert_eq!(template.render(&42, &[]).unwrap(), expected);
    }

    #[rstest]
    #[case("{1:.2}", Argument::from(2.0 / 3.0), "0.67")]
    #[case("{1:8.3}", Argument::from(1.5), "   1.500")]
    #[case("{1:5}", Argument::from(7), "    7")]
    #[case("{1:5}", Argument::from("ab"), "ab   ")]
    #[case("{1:.3}", Argument::from("abcdef"), "abc")]
    #[case("{1:-<6.2}", Argument::from("abcdef"), "ab----")]
    fn formats_arguments(
        #[case] source: &str,
        #[case] argument: Argument,
        #[case] expected: &str,
    ) {
        let template = Template::parse(source).unwrap();
        assert_eq!(template.render(&0, &[argument]).unwrap(), expected);
    }

    #[rstest]
    fn precision_applies_to_the_input() {
        let template = Template::parse("{0:.1}").unwrap();
        assert_eq!(template.render(&2.26_f64, &[]).unwrap(), "2.3");
    }

    #[rstest]
    #[case("{0", TemplateError::Unclosed { position: 0 })]
    #[case("a}b", TemplateError::UnmatchedClose { position: 1 })]
    #[case("{x}", TemplateError::InvalidPlaceholder { placeholder: "x".to_string() })]
    #[case("{0:+4}", TemplateError::UnsupportedSpec { placeholder: "0:+4".to_string() })]
    #[case("{0:04}", TemplateError::UnsupportedSpec { placeholder: "0:04".to_string() })]
    #[case("{0:>4x}", TemplateError::UnsupportedSpec { placeholder: "0:>4x".to_string() })]
    #[case("{0:.}", TemplateError::UnsupportedSpec { placeholder: "0:.".to_string() })]
    #[case(
        "{0:99999999999999999999999}",
        TemplateError::UnsupportedSpec { placeholder: "0:99999999999999999999999".to_string() }
    )]
    #[case("{0!r}", TemplateError::UnsupportedSpec { placeholder: "0!r".to_string() })]
    #[case("{} {1}", TemplateError::MixedNumbering)]
    #[case("{1} {}", TemplateError::MixedNumbering)]
    fn rejects_malformed_templates(#[case] source: &str, #[case] expected: TemplateError) {
        assert_eq!(Template::parse(source), Err(expected));
    }

    #[rstest]
    fn render_reports_missing_arguments() {
        let template = Template::parse("{0} {3:>2}").unwrap();
        assert_eq!(template.required_arguments(), 3);
        assert_eq!(
            template.render(&0, &[Argument::from(1)]),
            Err(TemplateError::MissingArgument {
                index: 3,
                available: 1
            })
        );
    }

    #[rstest]
    fn display_is_the_source() {
        let template = Template::parse("{0:>4} <- Negative number").unwrap();
        assert_eq!(template.to_string(), "{0:>4} <- Negative number");
    }
}

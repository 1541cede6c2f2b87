//! Configuration for effectful actions.

use super::template::{Template, TemplateError};

/// The template used when none is configured: the input value on its own.
pub const DEFAULT_TEMPLATE: &str = "{0}";

/// Rendering options for [`PrintAction`](super::PrintAction).
///
/// The configuration is passed explicitly when an action is built; there is
/// no global default that can be changed at runtime.
///
/// # Examples
///
/// ```rust
/// use seqmonad::effect::FormatConfig;
///
/// assert_eq!(FormatConfig::default().template, "{0}");
///
/// let config = FormatConfig::new("{0} <- Negative number");
/// assert_eq!(config.parse().unwrap().required_arguments(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatConfig {
    /// The positional format template, see [`Template`].
    pub template: String,
}

impl FormatConfig {
    /// Creates a configuration with the given template.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Parses the configured template.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the template is malformed.
    pub fn parse(&self) -> Result<Template, TemplateError> {
        Template::parse(&self.template)
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

//! Configuration of the accessor pass.

use ecow::EcoString;

/// Text prepended to every rewritten value unless a marker overrides it.
pub const DEFAULT_PREFIX: &str = "Hello ";

/// Library class whose operations the string builder synthesis calls.
pub const DEFAULT_BUILDER_CLASS: &str = "StringBuilder";

/// Which nodes of a target getter's body get rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RewriteMode {
    /// Every field read in the body.
    #[default]
    FieldRead,

    /// The value of every return statement in the body.
    ReturnValue,
}

/// How the prefixed value is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Synthesis {
    /// `StringBuilder().append(prefix).append(value).toString()`
    #[default]
    StringBuilder,

    /// A concatenation node `prefix + value`.
    Concatenation,
}

/// Configuration options for one pass.
///
/// # Example
///
/// ```
/// use accessor_core::{PassConfig, RewriteMode, Synthesis};
///
/// let config = PassConfig {
///     mode: RewriteMode::ReturnValue,
///     synthesis: Synthesis::Concatenation,
///     ..PassConfig::default()
/// };
/// assert_eq!(config.prefix, "Hello ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassConfig {
    /// Text prepended to the getter's value.
    ///
    /// Default: `"Hello "`
    pub prefix: EcoString,

    /// Default: [`RewriteMode::FieldRead`]
    pub mode: RewriteMode,

    /// Default: [`Synthesis::StringBuilder`]
    pub synthesis: Synthesis,

    /// Annotation a getter must carry to be rewritten.
    ///
    /// Default: None (every string getter is a target)
    pub marker: Option<EcoString>,

    /// Library class resolved for [`Synthesis::StringBuilder`].
    ///
    /// Default: `"StringBuilder"`
    pub builder_class: EcoString,
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.into(),
            mode: RewriteMode::default(),
            synthesis: Synthesis::default(),
            marker: None,
            builder_class: DEFAULT_BUILDER_CLASS.into(),
        }
    }
}

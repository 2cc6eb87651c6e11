//! Errors surfaced to the host compiler.

use accessor_core::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The library does not declare the builder operations the pass needs.
    #[error("accessor-modifier cannot run: {0}")]
    #[diagnostic(
        code(accessor_modifier::config),
        help(
            "declare the builder class with a zero-argument constructor, exactly one `append(Any?)` and `toString()`, or pass `synthesis=concatenation`"
        )
    )]
    Config(#[from] ConfigError),

    #[error("invalid value `{value}` for option `{key}`")]
    #[diagnostic(code(accessor_modifier::option::invalid), help("expected {expected}"))]
    InvalidOption {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("unknown option `{key}`")]
    #[diagnostic(
        code(accessor_modifier::option::unknown),
        help("known options are enabled, prefix, mode, synthesis, marker and builder-class")
    )]
    UnknownOption { key: String },

    #[error("malformed plugin option `{arg}`")]
    #[diagnostic(
        code(accessor_modifier::option::malformed),
        help("plugin options are written `plugin:<plugin id>:<key>=<value>`")
    )]
    MalformedOption { arg: String },
}

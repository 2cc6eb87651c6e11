//! Pass configuration errors.
//!
//! These are raised while constructing a pass, before any node is touched.
//! They mean the host's library does not have the shape the pass relies on,
//! so the whole unit's pass is aborted.

use core::fmt;
use ecow::EcoString;

/// Library operation the string builder synthesis needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Zero-argument constructor of the builder.
    Construct,
    /// Single-argument `append` accepting `Any?`.
    Append,
    /// Zero-argument `toString`.
    Stringify,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Construct => "constructor()",
            Operation::Append => "append(Any?)",
            Operation::Stringify => "toString()",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The builder class is not declared in the symbol table.
    #[error("library class `{class}` is not declared")]
    UnknownClass { class: EcoString },

    /// No member of the builder class has the required shape.
    #[error("`{class}` has no `{operation}` operation")]
    MissingOperation {
        class: EcoString,
        operation: Operation,
    },

    /// Several members of the builder class have the required shape.
    #[error("`{class}` has {candidates} candidates for `{operation}`, expected exactly one")]
    AmbiguousOperation {
        class: EcoString,
        operation: Operation,
        candidates: usize,
    },
}

//! Errors raised while interpreting accessor bodies.
//!
//! Trees produced by the pass never raise these when run against an object
//! holding every field they read. They flag hand-built trees that use
//! constructs the evaluator does not model, or objects missing state.

use accessor_types::Callee;
use ecow::EcoString;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("class `{class}` has no property `{property}`")]
    UnknownProperty { class: EcoString, property: EcoString },

    #[error("property `{property}` has no {accessor}")]
    MissingAccessor {
        property: EcoString,
        accessor: &'static str,
    },

    #[error("object of class `{class}` has no field `{field}`")]
    UnknownField { class: EcoString, field: EcoString },

    #[error("`{name}` is not bound")]
    UnboundValue { name: EcoString },

    #[error("call to `{callee}` is not supported")]
    UnsupportedCall { callee: Callee },

    #[error("receiver of `{callee}` is not a builder")]
    NotABuilder { callee: Callee },

    #[error("`{function}` expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        function: EcoString,
        expected: usize,
        actual: usize,
    },

    #[error("`{function}` has no body")]
    ExternalFunction { function: EcoString },

    #[error("`{function}` finished without returning a value")]
    MissingReturn { function: EcoString },

    #[error("`return` inside a block expression")]
    ReturnInBlock,

    #[error("evaluation exceeded the maximum depth of {max_depth}")]
    StackOverflow { max_depth: usize },
}

//! Reference interpreter for accessor bodies.
//!
//! Runs getters and setters of a unit against an [`Object`] so the effect
//! of a rewrite can be observed as a value rather than as a tree shape. It
//! understands the constructs the pass produces: field reads and writes,
//! locals, blocks, concatenation, and the string builder operations of the
//! configured builder class. Other calls are rejected.
//!
//! ## Example
//!
//! ```
//! use accessor_core::evaluator::{Evaluator, EvaluatorOptions, Object, Value};
//! use accessor_types::{ClassDecl, PropertyDecl, Ty};
//!
//! let class = ClassDecl::new("Person").with_decl(PropertyDecl::backed("name", Ty::string(), true));
//! let mut person = Object::new("Person").with_field("name", Value::string("World"));
//!
//! let mut evaluator = Evaluator::new(EvaluatorOptions::default());
//! let name = evaluator.get(&class, "name", &mut person).unwrap();
//! assert_eq!(evaluator.render(&name), "World");
//! ```

mod error;
mod eval;


pub use error::EvalError;
pub use eval::Evaluator;

use crate::config::DEFAULT_BUILDER_CLASS;
use accessor_types::Literal;
use ecow::EcoString;
use hashbrown::HashMap;

/// Limits and library bindings of an [`Evaluator`].
///
/// # Example
///
/// ```
/// use accessor_core::evaluator::EvaluatorOptions;
///
/// let options = EvaluatorOptions {
///     max_depth: 64,
///     ..EvaluatorOptions::default()
/// };
/// assert_eq!(options.builder_class, "StringBuilder");
/// ```
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Maximum nesting of expressions and calls.
    ///
    /// Default: 256
    pub max_depth: usize,

    /// Class whose `<init>`, `append` and `toString` calls are interpreted.
    ///
    /// Default: `"StringBuilder"`
    pub builder_class: EcoString,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: 256,
            builder_class: DEFAULT_BUILDER_CLASS.into(),
        }
    }
}

/// Index of a live builder inside its [`Evaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuilderId(usize);

/// Runtime value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Unit,
    Null,
    Bool(bool),
    Int(i64),
    Str(EcoString),
    Builder(BuilderId),
}

impl Value {
    pub fn string(value: impl Into<EcoString>) -> Self {
        Value::Str(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Null => Value::Null,
            Literal::Bool(value) => Value::Bool(*value),
            Literal::Int(value) => Value::Int(*value),
            Literal::Str(value) => Value::Str(value.clone()),
        }
    }
}

/// Instance whose fields accessor bodies read and write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
    pub class: EcoString,
    fields: HashMap<EcoString, Value>,
}

impl Object {
    pub fn new(class: impl Into<EcoString>) -> Self {
        Self {
            class: class.into(),
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<EcoString>, value: Value) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: impl Into<EcoString>, value: Value) {
        self.fields.insert(name.into(), value);
    }
}

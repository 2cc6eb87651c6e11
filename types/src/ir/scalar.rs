//! Scalar type variants of the host language.

use core::fmt;

/// Scalar type variants.
///
/// The host language models every type as either one of these built-ins or
/// a named class. Nullability is not part of the scalar; it lives in the
/// type flags of the surrounding [`Ty`](super::Ty).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    /// The unit type, returned by functions without a value.
    Unit,

    /// Boolean type
    Bool,

    /// Integer type
    Int,

    /// String type
    Str,

    /// Top type; every value conforms to it.
    Any,
}

impl Scalar {
    /// Returns true if this scalar is the string type.
    pub fn is_str(&self) -> bool {
        matches!(self, Scalar::Str)
    }

    /// Returns true if this scalar is the top type.
    pub fn is_any(&self) -> bool {
        matches!(self, Scalar::Any)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scalar::Unit => "Unit",
            Scalar::Bool => "Boolean",
            Scalar::Int => "Int",
            Scalar::Str => "String",
            Scalar::Any => "Any",
        };
        f.write_str(name)
    }
}

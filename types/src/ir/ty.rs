use super::Scalar;
use core::fmt;
use ecow::EcoString;

use bitflags::bitflags;

bitflags! {
    /// Flags indicating properties of a type that are orthogonal to its kind.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct TypeFlags: u8 {
        /// The type admits `null`.
        const NULLABLE = 1;
    }
}

/// Logical structure of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Built-in scalar type (Unit, Boolean, Int, String, Any)
    Scalar(Scalar),

    /// Named class type, e.g. `StringBuilder`.
    Class(EcoString),
}

/// Static type descriptor attached to declarations and expressions.
///
/// A type is a kind plus flags. `String` and `String?` share the kind
/// `Scalar(Str)` and differ only in [`TypeFlags::NULLABLE`].
///
/// # Example
///
/// ```
/// use accessor_types::Ty;
///
/// let ty = Ty::string().nullable();
/// assert!(ty.is_nullable_string());
/// assert!(!ty.is_string());
/// assert_eq!(ty.to_string(), "String?");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ty {
    kind: TypeKind,
    flags: TypeFlags,
}

impl Ty {
    /// Create a type from its parts.
    pub fn new(kind: TypeKind, flags: TypeFlags) -> Self {
        Self { kind, flags }
    }

    pub fn scalar(scalar: Scalar) -> Self {
        Self::new(TypeKind::Scalar(scalar), TypeFlags::empty())
    }

    pub fn unit() -> Self {
        Self::scalar(Scalar::Unit)
    }

    pub fn bool() -> Self {
        Self::scalar(Scalar::Bool)
    }

    pub fn int() -> Self {
        Self::scalar(Scalar::Int)
    }

    pub fn string() -> Self {
        Self::scalar(Scalar::Str)
    }

    pub fn any() -> Self {
        Self::scalar(Scalar::Any)
    }

    pub fn class(name: impl Into<EcoString>) -> Self {
        Self::new(TypeKind::Class(name.into()), TypeFlags::empty())
    }

    /// The nullable variant of this type (`T?`).
    pub fn nullable(mut self) -> Self {
        self.flags |= TypeFlags::NULLABLE;
        self
    }

    /// The non-null variant of this type (`T`).
    pub fn non_null(mut self) -> Self {
        self.flags -= TypeFlags::NULLABLE;
        self
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn flags(&self) -> TypeFlags {
        self.flags
    }

    /// Check if this type admits `null`.
    pub fn is_nullable(&self) -> bool {
        self.flags.contains(TypeFlags::NULLABLE)
    }

    /// Check if this is the given scalar, ignoring nullability.
    pub fn is_scalar(&self, scalar: Scalar) -> bool {
        matches!(self.kind, TypeKind::Scalar(s) if s == scalar)
    }

    /// Check if this is the non-null `String` type.
    pub fn is_string(&self) -> bool {
        self.is_scalar(Scalar::Str) && !self.is_nullable()
    }

    /// Check if this is exactly `String?`.
    pub fn is_nullable_string(&self) -> bool {
        self.is_scalar(Scalar::Str) && self.is_nullable()
    }

    /// Check if this is exactly `Any?`, the type every value conforms to.
    pub fn is_nullable_any(&self) -> bool {
        self.is_scalar(Scalar::Any) && self.is_nullable()
    }

    /// Check if this is the class with the given name, ignoring nullability.
    pub fn is_class(&self, name: &str) -> bool {
        matches!(&self.kind, TypeKind::Class(class) if class.as_str() == name)
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Scalar(scalar) => write!(f, "{}", scalar)?,
            TypeKind::Class(name) => write!(f, "{}", name)?,
        }
        if self.is_nullable() {
            f.write_str("?")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ty({})", self)
    }
}

//! Intermediate Representation (IR) of a typed translation unit.
//!
//! This module contains the already-resolved tree a host compiler hands to a
//! lowering pass: declarations, statements and expressions, each expression
//! carrying its static type.
//!
//! ## Structure
//!
//! - **Types**: `Ty`, `TypeKind`, `Scalar` - static type descriptors
//! - **Nodes**: `Unit`, `Decl`, `FunctionDecl`, `Stmt`, `Expr` - the tree
//! - **Walker**: `walk` - in-place pre-order traversal with replacement
//! - **Visitor**: `TreeVisitor` - read-only traversal for analyses
//! - **Display**: `TreeFormatter` - indented dump of a tree

pub mod display;
pub mod node;
pub mod scalar;
pub mod ty;
pub mod visit;
pub mod walk;

pub use display::TreeFormatter;
pub use node::{
    Annotation, Callee, ClassDecl, Decl, Expr, ExprKind, FieldDecl, FunctionDecl, FunctionFlags,
    Literal, Local, Param, PropertyDecl, Stmt, Unit,
};
pub use scalar::Scalar;
pub use ty::{Ty, TypeFlags, TypeKind};
pub use visit::TreeVisitor;
pub use walk::{NodeMut, Walk, walk, walk_function, walk_stmts};

//! Typed tree IR for accessor lowering passes.
//!
//! This crate provides the tree a host compiler hands to a pass, a generic
//! in-place walker over it, a read-only visitor and a dump formatter.
//!
//! # Example
//!
//! ```
//! use accessor_types::{ClassDecl, PropertyDecl, Ty, Unit};
//!
//! let unit = Unit::new("Greeting.kt").with_decl(
//!     ClassDecl::new("Greeting")
//!         .with_constructor([])
//!         .with_decl(PropertyDecl::backed("name", Ty::string().nullable(), true)),
//! );
//! assert!(unit.class("Greeting").is_some());
//! ```

#![no_std]
extern crate alloc;

// Intermediate Representation - the typed tree
pub mod ir;

// Re-export IR types for convenience
pub use ir::{
    Annotation, Callee, ClassDecl, Decl, Expr, ExprKind, FieldDecl, FunctionDecl, FunctionFlags,
    Literal, Local, NodeMut, Param, PropertyDecl, Scalar, Stmt, TreeFormatter, TreeVisitor, Ty,
    TypeFlags, TypeKind, Unit, Walk, walk, walk_function, walk_stmts,
};

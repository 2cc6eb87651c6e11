//! In-place tree walker.
//!
//! One generic, stateless traversal over every node of a unit. The caller's
//! visit closure sees each node before its children and may overwrite it
//! through the mutable reference; the walker then descends into whatever
//! now occupies that slot.
//!
//! # Example
//!
//! ```
//! use accessor_types::{Expr, NodeMut, PropertyDecl, Ty, Unit, Walk, walk};
//!
//! let mut unit = Unit::new("Main.kt").with_decl(PropertyDecl::backed("name", Ty::string(), false));
//!
//! // Replace every field read with a literal.
//! walk(&mut unit, |node| match node {
//!     NodeMut::Expr(expr) if expr.is_field_read() => {
//!         *expr = Expr::string("constant");
//!         Walk::Skip
//!     }
//!     _ => Walk::Continue,
//! });
//! ```

use super::{ClassDecl, Decl, Expr, ExprKind, FieldDecl, FunctionDecl, PropertyDecl, Stmt, Unit};

/// Mutable handle to the node currently being visited.
#[derive(Debug)]
pub enum NodeMut<'a> {
    Class(&'a mut ClassDecl),
    Property(&'a mut PropertyDecl),
    Field(&'a mut FieldDecl),
    Function(&'a mut FunctionDecl),
    Stmt(&'a mut Stmt),
    Expr(&'a mut Expr),
}

/// What the walker does after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Descend into the children of the node now in the slot.
    Continue,

    /// Leave the node's children alone.
    Skip,
}

/// Walk every declaration of `unit` in pre-order.
pub fn walk<F>(unit: &mut Unit, visit: F)
where
    F: FnMut(NodeMut<'_>) -> Walk,
{
    Walker { visit }.decls(&mut unit.decls);
}

/// Walk a single function: the function node, then its body.
pub fn walk_function<F>(function: &mut FunctionDecl, visit: F)
where
    F: FnMut(NodeMut<'_>) -> Walk,
{
    Walker { visit }.function(function);
}

/// Walk a sequence of statements, e.g. a function body.
pub fn walk_stmts<F>(stmts: &mut [Stmt], visit: F)
where
    F: FnMut(NodeMut<'_>) -> Walk,
{
    Walker { visit }.stmts(stmts);
}

struct Walker<F> {
    visit: F,
}

impl<F> Walker<F>
where
    F: FnMut(NodeMut<'_>) -> Walk,
{
    fn decls(&mut self, decls: &mut [Decl]) {
        for decl in decls {
            self.decl(decl);
        }
    }

    fn decl(&mut self, decl: &mut Decl) {
        match decl {
            Decl::Class(class) => self.class(class),
            Decl::Property(property) => self.property(property),
            Decl::Field(field) => {
                (self.visit)(NodeMut::Field(field));
            }
            Decl::Function(function) => self.function(function),
        }
    }

    fn class(&mut self, class: &mut ClassDecl) {
        if (self.visit)(NodeMut::Class(&mut *class)) == Walk::Skip {
            return;
        }
        for constructor in &mut class.constructors {
            self.function(constructor);
        }
        self.decls(&mut class.decls);
    }

    fn property(&mut self, property: &mut PropertyDecl) {
        if (self.visit)(NodeMut::Property(&mut *property)) == Walk::Skip {
            return;
        }
        if let Some(field) = &mut property.field {
            (self.visit)(NodeMut::Field(field));
        }
        if let Some(getter) = &mut property.getter {
            self.function(getter);
        }
        if let Some(setter) = &mut property.setter {
            self.function(setter);
        }
    }

    fn function(&mut self, function: &mut FunctionDecl) {
        if (self.visit)(NodeMut::Function(&mut *function)) == Walk::Skip {
            return;
        }
        if let Some(body) = &mut function.body {
            self.stmts(body);
        }
    }

    fn stmts(&mut self, stmts: &mut [Stmt]) {
        for stmt in stmts {
            self.stmt(stmt);
        }
    }

    fn stmt(&mut self, stmt: &mut Stmt) {
        if (self.visit)(NodeMut::Stmt(&mut *stmt)) == Walk::Skip {
            return;
        }
        match stmt {
            Stmt::Expr(expr) | Stmt::Return(expr) => self.expr(expr),
            Stmt::Local(local) => self.expr(&mut local.init),
            Stmt::Decl(decl) => self.decl(decl),
        }
    }

    fn expr(&mut self, expr: &mut Expr) {
        if (self.visit)(NodeMut::Expr(&mut *expr)) == Walk::Skip {
            return;
        }
        match &mut expr.kind {
            ExprKind::Const(_) | ExprKind::GetField { .. } | ExprKind::GetValue(_) => {}
            ExprKind::SetField { value, .. } => self.expr(value),
            ExprKind::Call { receiver, args, .. } => {
                if let Some(receiver) = receiver {
                    self.expr(receiver);
                }
                for arg in args {
                    self.expr(arg);
                }
            }
            ExprKind::Block { statements, value } => {
                self.stmts(statements);
                self.expr(value);
            }
            ExprKind::Concat(operands) => {
                for operand in operands {
                    self.expr(operand);
                }
            }
        }
    }
}

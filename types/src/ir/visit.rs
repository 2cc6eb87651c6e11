use super::{Decl, Expr, ExprKind, FunctionDecl, Stmt, Unit};

/// Trait for visiting a tree without mutation.
///
/// Implement this trait to analyze a unit. The default implementation
/// handles recursion automatically; override a `visit_*` method and call
/// the matching `super_visit_*` to keep descending.
///
/// # Example
///
/// ```
/// use accessor_types::{FunctionDecl, PropertyDecl, Ty, TreeVisitor, Unit};
///
/// struct GetterCounter {
///     count: usize,
/// }
///
/// impl TreeVisitor for GetterCounter {
///     fn visit_function(&mut self, function: &FunctionDecl) {
///         if function.is_getter() {
///             self.count += 1;
///         }
///         self.super_visit_function(function);
///     }
/// }
///
/// let unit = Unit::new("Main.kt")
///     .with_decl(PropertyDecl::backed("name", Ty::string(), true))
///     .with_decl(PropertyDecl::backed("age", Ty::int(), false));
///
/// let mut counter = GetterCounter { count: 0 };
/// counter.visit_unit(&unit);
/// assert_eq!(counter.count, 2);
/// ```
pub trait TreeVisitor {
    fn visit_unit(&mut self, unit: &Unit) {
        self.super_visit_unit(unit)
    }

    fn super_visit_unit(&mut self, unit: &Unit) {
        for decl in &unit.decls {
            self.visit_decl(decl);
        }
    }

    fn visit_decl(&mut self, decl: &Decl) {
        self.super_visit_decl(decl)
    }

    fn super_visit_decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Class(class) => {
                for constructor in &class.constructors {
                    self.visit_function(constructor);
                }
                for decl in &class.decls {
                    self.visit_decl(decl);
                }
            }
            Decl::Property(property) => {
                if let Some(getter) = &property.getter {
                    self.visit_function(getter);
                }
                if let Some(setter) = &property.setter {
                    self.visit_function(setter);
                }
            }
            Decl::Field(_) => {}
            Decl::Function(function) => self.visit_function(function),
        }
    }

    fn visit_function(&mut self, function: &FunctionDecl) {
        self.super_visit_function(function)
    }

    fn super_visit_function(&mut self, function: &FunctionDecl) {
        for stmt in function.statements() {
            self.visit_stmt(stmt);
        }
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        self.super_visit_stmt(stmt)
    }

    fn super_visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(expr) | Stmt::Return(expr) => self.visit_expr(expr),
            Stmt::Local(local) => self.visit_expr(&local.init),
            Stmt::Decl(decl) => self.visit_decl(decl),
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        self.super_visit_expr(expr)
    }

    fn super_visit_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            // Leaves
            ExprKind::Const(_) | ExprKind::GetField { .. } | ExprKind::GetValue(_) => {}

            ExprKind::SetField { value, .. } => self.visit_expr(value),

            ExprKind::Call { receiver, args, .. } => {
                if let Some(receiver) = receiver {
                    self.visit_expr(receiver);
                }
                for arg in args {
                    self.visit_expr(arg);
                }
            }

            ExprKind::Block { statements, value } => {
                for stmt in statements {
                    self.visit_stmt(stmt);
                }
                self.visit_expr(value);
            }

            ExprKind::Concat(operands) => {
                for operand in operands {
                    self.visit_expr(operand);
                }
            }
        }
    }
}

use super::{Decl, Expr, ExprKind, FunctionDecl, Stmt, TreeVisitor, Unit};
use alloc::string::String;
use core::fmt::{self, Write};

/// Visitor that renders a tree as an indented dump, one node per line.
///
/// # Example
///
/// ```
/// use accessor_types::{PropertyDecl, TreeFormatter, Ty, Unit};
///
/// let unit = Unit::new("Main.kt").with_decl(PropertyDecl::backed("name", Ty::string(), false));
/// assert_eq!(
///     TreeFormatter::format(&unit),
///     "UNIT name=Main.kt\n\
///     \x20 PROPERTY name=name\n\
///     \x20   FIELD name=name type=String\n\
///     \x20   GETTER name=<get-name> returns=String\n\
///     \x20     RETURN\n\
///     \x20       GET_FIELD name=name type=String\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct TreeFormatter {
    output: String,
    depth: usize,
}

impl TreeFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(unit: &Unit) -> String {
        let mut formatter = Self::new();
        formatter.visit_unit(unit);
        formatter.output
    }

    pub fn format_function(function: &FunctionDecl) -> String {
        let mut formatter = Self::new();
        formatter.visit_function(function);
        formatter.output
    }

    pub fn format_expr(expr: &Expr) -> String {
        let mut formatter = Self::new();
        formatter.visit_expr(expr);
        formatter.output
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        for _ in 0..self.depth {
            self.output.push_str("  ");
        }
        let _ = self.output.write_fmt(args);
        self.output.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }
}

impl TreeVisitor for TreeFormatter {
    fn visit_unit(&mut self, unit: &Unit) {
        self.line(format_args!("UNIT name={}", unit.name));
        self.nested(|f| f.super_visit_unit(unit));
    }

    fn visit_decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Class(class) => {
                self.line(format_args!("CLASS name={}", class.name));
                self.nested(|f| f.super_visit_decl(decl));
            }
            Decl::Property(property) => {
                self.line(format_args!("PROPERTY name={}", property.name));
                self.nested(|f| {
                    if let Some(field) = &property.field {
                        f.line(format_args!("FIELD name={} type={}", field.name, field.ty));
                    }
                    f.super_visit_decl(decl);
                });
            }
            Decl::Field(field) => {
                self.line(format_args!("FIELD name={} type={}", field.name, field.ty));
            }
            Decl::Function(_) => self.super_visit_decl(decl),
        }
    }

    fn visit_function(&mut self, function: &FunctionDecl) {
        let kind = if function.is_getter() {
            "GETTER"
        } else if function.is_setter() {
            "SETTER"
        } else if function.is_constructor() {
            "CONSTRUCTOR"
        } else {
            "FUN"
        };

        let mut header = String::new();
        let _ = write!(
            header,
            "{} name={} returns={}",
            kind, function.name, function.return_type
        );
        if !function.params.is_empty() {
            header.push_str(" params=(");
            for (i, param) in function.params.iter().enumerate() {
                if i > 0 {
                    header.push_str(", ");
                }
                let _ = write!(header, "{}: {}", param.name, param.ty);
            }
            header.push(')');
        }
        if function.body.is_none() {
            header.push_str(" external");
        }
        self.line(format_args!("{}", header));

        self.nested(|f| {
            for annotation in &function.annotations {
                let mut line = String::new();
                let _ = write!(line, "ANNOTATION name={}", annotation.name);
                for (name, value) in &annotation.args {
                    let _ = write!(line, " {}={}", name, value);
                }
                f.line(format_args!("{}", line));
            }
            f.super_visit_function(function);
        });
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Return(_) => {
                self.line(format_args!("RETURN"));
                self.nested(|f| f.super_visit_stmt(stmt));
            }
            Stmt::Local(local) => {
                self.line(format_args!("VAR name={} type={}", local.name, local.ty));
                self.nested(|f| f.super_visit_stmt(stmt));
            }
            Stmt::Expr(_) | Stmt::Decl(_) => self.super_visit_stmt(stmt),
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Const(literal) => {
                self.line(format_args!("CONST {} type={}", literal, expr.ty));
            }
            ExprKind::GetField { field } => {
                self.line(format_args!("GET_FIELD name={} type={}", field, expr.ty));
            }
            ExprKind::SetField { field, .. } => {
                self.line(format_args!("SET_FIELD name={}", field));
                self.nested(|f| f.super_visit_expr(expr));
            }
            ExprKind::GetValue(name) => {
                self.line(format_args!("GET_VAR name={} type={}", name, expr.ty));
            }
            ExprKind::Call {
                callee,
                receiver,
                args,
            } => {
                self.line(format_args!("CALL {} type={}", callee, expr.ty));
                self.nested(|f| {
                    if let Some(receiver) = receiver {
                        f.line(format_args!("RECEIVER"));
                        f.nested(|f| f.visit_expr(receiver));
                    }
                    for arg in args {
                        f.visit_expr(arg);
                    }
                });
            }
            ExprKind::Block { .. } => {
                self.line(format_args!("BLOCK type={}", expr.ty));
                self.nested(|f| f.super_visit_expr(expr));
            }
            ExprKind::Concat(_) => {
                self.line(format_args!("STRING_CONCAT type={}", expr.ty));
                self.nested(|f| f.super_visit_expr(expr));
            }
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TreeFormatter::format(self))
    }
}

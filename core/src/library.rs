//! Library classes and resolution of the operations the pass calls.

use crate::{
    config::DEFAULT_BUILDER_CLASS,
    error::{ConfigError, Operation},
};
use accessor_types::{Callee, ClassDecl, Expr, FunctionDecl, Param, Ty};
use ecow::EcoString;
use hashbrown::HashMap;

/// Library classes visible to a pass, by name.
#[derive(Debug, Clone, Default)]
pub struct Symbols {
    classes: HashMap<EcoString, ClassDecl>,
}

impl Symbols {
    /// An empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A symbol table holding the standard `StringBuilder`.
    pub fn with_builtins() -> Self {
        let mut symbols = Self::new();
        symbols.insert(string_builder_class());
        symbols
    }

    /// Declare a class, returning the declaration it replaces.
    pub fn insert(&mut self, class: ClassDecl) -> Option<ClassDecl> {
        self.classes.insert(class.name.clone(), class)
    }

    pub fn class(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.get(name)
    }
}

/// The standard string builder.
///
/// Declares several constructor and `append` overloads, so resolution has
/// to pick the zero-argument constructor and the `Any?` overload.
pub fn string_builder_class() -> ClassDecl {
    let class = ClassDecl::new(DEFAULT_BUILDER_CLASS);
    let builder = class.ty();
    let append = |ty: Ty| {
        FunctionDecl::new("append", builder.clone()).with_param(Param::new("value", ty))
    };

    class
        .with_constructor([])
        .with_constructor([Param::new("capacity", Ty::int())])
        .with_constructor([Param::new("content", Ty::string())])
        .with_decl(append(Ty::string().nullable()))
        .with_decl(append(Ty::any().nullable()))
        .with_decl(append(Ty::int()))
        .with_decl(append(Ty::bool()))
        .with_decl(FunctionDecl::new("toString", Ty::string()))
}

/// Resolved reference to one library operation.
///
/// Immutable once resolved; cheap to clone and safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpHandle {
    callee: Callee,
    return_type: Ty,
}

impl OpHandle {
    pub fn callee(&self) -> &Callee {
        &self.callee
    }

    pub fn return_type(&self) -> &Ty {
        &self.return_type
    }

    /// Build a call to this operation.
    pub fn call(&self, receiver: Option<Expr>, args: Vec<Expr>) -> Expr {
        Expr::call(
            self.callee.clone(),
            receiver,
            args,
            self.return_type.clone(),
        )
    }
}

/// The three operations of the string builder synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryOps {
    pub construct: OpHandle,
    pub append: OpHandle,
    pub stringify: OpHandle,
}

impl LibraryOps {
    /// Resolve the operations of the class named `class` in `symbols`.
    pub fn resolve(symbols: &Symbols, class: &str) -> Result<Self, ConfigError> {
        let decl = symbols.class(class).ok_or_else(|| ConfigError::UnknownClass {
            class: class.into(),
        })?;
        Self::resolve_in(decl)
    }

    /// Resolve the operations declared by `class`.
    ///
    /// Each operation must match exactly one member.
    pub fn resolve_in(class: &ClassDecl) -> Result<Self, ConfigError> {
        let construct = single(
            class,
            Operation::Construct,
            class.constructors.iter().enumerate(),
            |constructor| constructor.params.is_empty(),
        )?;

        let append = single(
            class,
            Operation::Append,
            overloads(class, "append"),
            |function| {
                function.params.len() == 1 && function.params[0].ty.is_nullable_any()
            },
        )?;

        let stringify = single(
            class,
            Operation::Stringify,
            overloads(class, "toString"),
            |function| function.params.is_empty(),
        )?;

        Ok(Self {
            construct,
            append,
            stringify,
        })
    }
}

/// Members named `name`, paired with their overload index.
fn overloads<'a>(
    class: &'a ClassDecl,
    name: &'a str,
) -> impl Iterator<Item = (usize, &'a FunctionDecl)> {
    class
        .functions()
        .filter(move |function| function.name.as_str() == name)
        .enumerate()
}

fn single<'a>(
    class: &ClassDecl,
    operation: Operation,
    candidates: impl Iterator<Item = (usize, &'a FunctionDecl)>,
    accepts: impl Fn(&FunctionDecl) -> bool,
) -> Result<OpHandle, ConfigError> {
    let matches: Vec<(usize, &FunctionDecl)> = candidates
        .filter(|&(_, function)| accepts(function))
        .collect();

    match matches.as_slice() {
        [(overload, function)] => Ok(OpHandle {
            callee: Callee {
                class: class.name.clone(),
                member: function.name.clone(),
                overload: *overload,
            },
            return_type: function.return_type.clone(),
        }),
        [] => Err(ConfigError::MissingOperation {
            class: class.name.clone(),
            operation,
        }),
        _ => Err(ConfigError::AmbiguousOperation {
            class: class.name.clone(),
            operation,
            candidates: matches.len(),
        }),
    }
}

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

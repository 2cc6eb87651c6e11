//! Declarations, statements and expressions of a typed translation unit.
//!
//! Every node owns its children. Rewrites replace a child in place through
//! a mutable reference, so a pass never rebuilds the parts of the tree it
//! does not touch.

use super::Ty;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use ecow::EcoString;

use bitflags::bitflags;

bitflags! {
    /// How a function declaration came to exist.
    ///
    /// Accessors carry `PROPERTY_ACCESSOR` plus exactly one of `GETTER` or
    /// `SETTER`. Hosts may hand over other combinations; consumers must not
    /// assume they are well-formed.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct FunctionFlags: u8 {
        const PROPERTY_ACCESSOR = 1;
        const GETTER = 1 << 1;
        const SETTER = 1 << 2;
        const CONSTRUCTOR = 1 << 3;
    }
}

/// A translation unit: one file's worth of declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub name: EcoString,
    pub decls: Vec<Decl>,
}

impl Unit {
    pub fn new(name: impl Into<EcoString>) -> Self {
        Self {
            name: name.into(),
            decls: Vec::new(),
        }
    }

    pub fn with_decl(mut self, decl: impl Into<Decl>) -> Self {
        self.decls.push(decl.into());
        self
    }

    /// Find a top-level class by name.
    pub fn class(&self, name: &str) -> Option<&ClassDecl> {
        self.decls.iter().find_map(|decl| match decl {
            Decl::Class(class) if class.name.as_str() == name => Some(class),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Class(ClassDecl),
    Property(PropertyDecl),
    Field(FieldDecl),
    Function(FunctionDecl),
}

impl From<ClassDecl> for Decl {
    fn from(class: ClassDecl) -> Self {
        Decl::Class(class)
    }
}

impl From<PropertyDecl> for Decl {
    fn from(property: PropertyDecl) -> Self {
        Decl::Property(property)
    }
}

impl From<FieldDecl> for Decl {
    fn from(field: FieldDecl) -> Self {
        Decl::Field(field)
    }
}

impl From<FunctionDecl> for Decl {
    fn from(function: FunctionDecl) -> Self {
        Decl::Function(function)
    }
}

/// A class with its constructors and members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: EcoString,
    pub constructors: Vec<FunctionDecl>,
    pub decls: Vec<Decl>,
}

impl ClassDecl {
    pub fn new(name: impl Into<EcoString>) -> Self {
        Self {
            name: name.into(),
            constructors: Vec::new(),
            decls: Vec::new(),
        }
    }

    /// Add a constructor taking the given parameters.
    pub fn with_constructor(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        let constructor = FunctionDecl::constructor(self.name.clone()).with_params(params);
        self.constructors.push(constructor);
        self
    }

    pub fn with_decl(mut self, decl: impl Into<Decl>) -> Self {
        self.decls.push(decl.into());
        self
    }

    /// The type of instances of this class.
    pub fn ty(&self) -> Ty {
        Ty::class(self.name.clone())
    }

    /// Member functions, in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Function(function) => Some(function),
            _ => None,
        })
    }

    /// Find a member property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDecl> {
        self.decls.iter().find_map(|decl| match decl {
            Decl::Property(property) if property.name.as_str() == name => Some(property),
            _ => None,
        })
    }
}

/// A property: an optional backing field plus optional accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    pub name: EcoString,
    pub field: Option<FieldDecl>,
    pub getter: Option<FunctionDecl>,
    pub setter: Option<FunctionDecl>,
}

impl PropertyDecl {
    pub fn new(name: impl Into<EcoString>) -> Self {
        Self {
            name: name.into(),
            field: None,
            getter: None,
            setter: None,
        }
    }

    /// A property with a backing field and the default accessors.
    ///
    /// The getter returns the field; the setter (if `mutable`) stores its
    /// `value` parameter into the field.
    pub fn backed(name: impl Into<EcoString>, ty: Ty, mutable: bool) -> Self {
        let name = name.into();
        let getter = FunctionDecl::getter(&name, ty.clone())
            .with_body([Stmt::ret(Expr::get_field(name.clone(), ty.clone()))]);
        let setter = mutable.then(|| {
            FunctionDecl::setter(&name, ty.clone()).with_body([Stmt::expr(Expr::set_field(
                name.clone(),
                Expr::get_value("value", ty.clone()),
            ))])
        });

        Self {
            field: Some(FieldDecl::new(name.clone(), ty)),
            getter: Some(getter),
            setter,
            name,
        }
    }

    pub fn with_field(mut self, ty: Ty) -> Self {
        self.field = Some(FieldDecl::new(self.name.clone(), ty));
        self
    }

    pub fn with_getter(mut self, getter: FunctionDecl) -> Self {
        self.getter = Some(getter);
        self
    }

    pub fn with_setter(mut self, setter: FunctionDecl) -> Self {
        self.setter = Some(setter);
        self
    }
}

/// Storage slot of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: EcoString,
    pub ty: Ty,
}

impl FieldDecl {
    pub fn new(name: impl Into<EcoString>, ty: Ty) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: EcoString,
    pub ty: Ty,
}

impl Param {
    pub fn new(name: impl Into<EcoString>, ty: Ty) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// An annotation with named literal arguments, e.g. `@Greet(prefix = "Hi ")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: EcoString,
    pub args: Vec<(EcoString, Literal)>,
}

impl Annotation {
    pub fn new(name: impl Into<EcoString>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<EcoString>, value: Literal) -> Self {
        self.args.push((name.into(), value));
        self
    }
}

/// A function declaration.
///
/// `body` is `None` for functions implemented outside the unit, such as the
/// members of library classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: EcoString,
    pub flags: FunctionFlags,
    pub params: Vec<Param>,
    pub return_type: Ty,
    pub annotations: Vec<Annotation>,
    pub body: Option<Vec<Stmt>>,
}

impl FunctionDecl {
    /// A plain function without a body.
    pub fn new(name: impl Into<EcoString>, return_type: Ty) -> Self {
        Self {
            name: name.into(),
            flags: FunctionFlags::empty(),
            params: Vec::new(),
            return_type,
            annotations: Vec::new(),
            body: None,
        }
    }

    /// The getter of `property`, named `<get-property>`.
    pub fn getter(property: &str, return_type: Ty) -> Self {
        Self::new(EcoString::from(alloc::format!("<get-{}>", property)), return_type)
            .with_flags(FunctionFlags::PROPERTY_ACCESSOR | FunctionFlags::GETTER)
    }

    /// The setter of `property`, named `<set-property>`, taking `value`.
    pub fn setter(property: &str, value_type: Ty) -> Self {
        Self::new(EcoString::from(alloc::format!("<set-{}>", property)), Ty::unit())
            .with_flags(FunctionFlags::PROPERTY_ACCESSOR | FunctionFlags::SETTER)
            .with_param(Param::new("value", value_type))
    }

    /// A constructor of `class`, named `<init>`.
    pub fn constructor(class: impl Into<EcoString>) -> Self {
        Self::new("<init>", Ty::class(class)).with_flags(FunctionFlags::CONSTRUCTOR)
    }

    pub fn with_flags(mut self, flags: FunctionFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_body(mut self, statements: impl IntoIterator<Item = Stmt>) -> Self {
        self.body = Some(statements.into_iter().collect());
        self
    }

    pub fn is_property_accessor(&self) -> bool {
        self.flags.contains(FunctionFlags::PROPERTY_ACCESSOR)
    }

    pub fn is_getter(&self) -> bool {
        self.flags.contains(FunctionFlags::GETTER)
    }

    pub fn is_setter(&self) -> bool {
        self.flags.contains(FunctionFlags::SETTER)
    }

    pub fn is_constructor(&self) -> bool {
        self.flags.contains(FunctionFlags::CONSTRUCTOR)
    }

    /// Body statements; empty for external functions.
    pub fn statements(&self) -> &[Stmt] {
        self.body.as_deref().unwrap_or_default()
    }

    /// Find an annotation by name.
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations
            .iter()
            .find(|annotation| annotation.name.as_str() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Expression evaluated for its effect.
    Expr(Expr),

    /// Return from the enclosing function.
    Return(Expr),

    /// Temporary variable binding.
    Local(Local),

    /// Nested declaration, e.g. a local function.
    Decl(Decl),
}

impl Stmt {
    pub fn expr(expr: Expr) -> Self {
        Stmt::Expr(expr)
    }

    pub fn ret(expr: Expr) -> Self {
        Stmt::Return(expr)
    }

    /// Bind `init` to a new local named `name`, typed like `init`.
    pub fn local(name: impl Into<EcoString>, init: Expr) -> Self {
        Stmt::Local(Local {
            name: name.into(),
            ty: init.ty.clone(),
            init,
        })
    }

    pub fn decl(decl: impl Into<Decl>) -> Self {
        Stmt::Decl(decl.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Local {
    pub name: EcoString,
    pub ty: Ty,
    pub init: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Str(EcoString),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Bool(value) => write!(f, "{}", value),
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Str(value) => write!(f, "{:?}", value.as_str()),
        }
    }
}

/// Resolved reference to a function of a class.
///
/// `overload` is the position among the class members sharing `member` as
/// their name, in declaration order. Constructors use the member name
/// `<init>` and count among the class constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Callee {
    pub class: EcoString,
    pub member: EcoString,
    pub overload: usize,
}

impl fmt::Display for Callee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}#{}", self.class, self.member, self.overload)
    }
}

/// A typed expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: Ty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    Const(Literal),

    /// Read a field of the receiver object.
    GetField { field: EcoString },

    /// Store into a field of the receiver object. Evaluates to unit.
    SetField { field: EcoString, value: Box<Expr> },

    /// Read a local or a parameter.
    GetValue(EcoString),

    Call {
        callee: Callee,
        receiver: Option<Box<Expr>>,
        args: Vec<Expr>,
    },

    /// Run `statements`, then evaluate to `value`.
    Block {
        statements: Vec<Stmt>,
        value: Box<Expr>,
    },

    /// String concatenation of the rendered operands.
    Concat(Vec<Expr>),
}

impl Expr {
    pub fn new(kind: ExprKind, ty: Ty) -> Self {
        Self { kind, ty }
    }

    pub fn literal(literal: Literal, ty: Ty) -> Self {
        Self::new(ExprKind::Const(literal), ty)
    }

    pub fn string(value: impl Into<EcoString>) -> Self {
        Self::literal(Literal::Str(value.into()), Ty::string())
    }

    pub fn int(value: i64) -> Self {
        Self::literal(Literal::Int(value), Ty::int())
    }

    pub fn bool(value: bool) -> Self {
        Self::literal(Literal::Bool(value), Ty::bool())
    }

    /// `null`, typed as the nullable variant of `ty`.
    pub fn null(ty: Ty) -> Self {
        Self::literal(Literal::Null, ty.nullable())
    }

    pub fn get_field(field: impl Into<EcoString>, ty: Ty) -> Self {
        Self::new(
            ExprKind::GetField {
                field: field.into(),
            },
            ty,
        )
    }

    pub fn set_field(field: impl Into<EcoString>, value: Expr) -> Self {
        Self::new(
            ExprKind::SetField {
                field: field.into(),
                value: Box::new(value),
            },
            Ty::unit(),
        )
    }

    pub fn get_value(name: impl Into<EcoString>, ty: Ty) -> Self {
        Self::new(ExprKind::GetValue(name.into()), ty)
    }

    pub fn call(callee: Callee, receiver: Option<Expr>, args: Vec<Expr>, ty: Ty) -> Self {
        Self::new(
            ExprKind::Call {
                callee,
                receiver: receiver.map(Box::new),
                args,
            },
            ty,
        )
    }

    /// Block expression typed like its value.
    pub fn block(statements: Vec<Stmt>, value: Expr) -> Self {
        let ty = value.ty.clone();
        Self::new(
            ExprKind::Block {
                statements,
                value: Box::new(value),
            },
            ty,
        )
    }

    /// Concatenation of `operands`, typed `String`.
    pub fn concat(operands: Vec<Expr>) -> Self {
        Self::new(ExprKind::Concat(operands), Ty::string())
    }

    pub fn is_field_read(&self) -> bool {
        matches!(self.kind, ExprKind::GetField { .. })
    }

    /// Move this expression out, leaving a `null` of the same type behind.
    ///
    /// Used to rebuild a node around its old value in place.
    pub fn take(&mut self) -> Expr {
        let placeholder = Expr::null(self.ty.clone());
        core::mem::replace(self, placeholder)
    }
}

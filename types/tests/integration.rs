//! Integration tests for accessor-types.
//!
//! These tests verify that the tree, the walker, the visitor and the
//! formatter work together on realistic units.

use accessor_types::{
    Annotation, ClassDecl, Decl, Expr, ExprKind, FunctionDecl, Literal, NodeMut, Param,
    PropertyDecl, Stmt, TreeFormatter, TreeVisitor, Ty, Unit, Walk, walk, walk_stmts,
};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn greeting_unit() -> Unit {
    Unit::new("Greeting.kt").with_decl(
        ClassDecl::new("Greeting")
            .with_constructor([])
            .with_decl(PropertyDecl::backed("name", Ty::string().nullable(), true))
            .with_decl(PropertyDecl::backed("age", Ty::int(), false)),
    )
}

#[derive(Default)]
struct Trace {
    labels: Vec<String>,
}

fn label(node: &NodeMut<'_>) -> String {
    match node {
        NodeMut::Class(class) => format!("class {}", class.name),
        NodeMut::Property(property) => format!("property {}", property.name),
        NodeMut::Field(field) => format!("field {}", field.name),
        NodeMut::Function(function) => format!("fun {}", function.name),
        NodeMut::Stmt(Stmt::Return(_)) => "return".to_string(),
        NodeMut::Stmt(Stmt::Expr(_)) => "stmt".to_string(),
        NodeMut::Stmt(Stmt::Local(local)) => format!("local {}", local.name),
        NodeMut::Stmt(Stmt::Decl(_)) => "decl".to_string(),
        NodeMut::Expr(expr) => match &expr.kind {
            ExprKind::GetField { field } => format!("get {}", field),
            ExprKind::SetField { field, .. } => format!("set {}", field),
            ExprKind::GetValue(name) => format!("value {}", name),
            ExprKind::Const(literal) => format!("const {}", literal),
            ExprKind::Call { callee, .. } => format!("call {}", callee),
            ExprKind::Block { .. } => "block".to_string(),
            ExprKind::Concat(_) => "concat".to_string(),
        },
    }
}

#[test]
fn test_type_queries() {
    let string = Ty::string();
    let nullable_string = Ty::string().nullable();
    let nullable_any = Ty::any().nullable();

    assert!(string.is_string());
    assert!(!string.is_nullable_string());
    assert!(nullable_string.is_nullable_string());
    assert!(!nullable_string.is_string());
    assert!(nullable_any.is_nullable_any());
    assert!(!Ty::any().is_nullable_any());
    assert!(!Ty::int().nullable().is_nullable_string());
    assert_eq!(nullable_string.clone().non_null(), string);
    assert!(Ty::class("StringBuilder").is_class("StringBuilder"));
}

#[test]
fn test_type_display() {
    assert_eq!(Ty::string().to_string(), "String");
    assert_eq!(Ty::string().nullable().to_string(), "String?");
    assert_eq!(Ty::any().nullable().to_string(), "Any?");
    assert_eq!(Ty::bool().to_string(), "Boolean");
    assert_eq!(Ty::class("StringBuilder").to_string(), "StringBuilder");
}

#[test]
fn test_walk_visits_in_declaration_order() {
    let mut unit = greeting_unit();
    let mut trace = Trace::default();

    walk(&mut unit, |node| {
        trace.labels.push(label(&node));
        Walk::Continue
    });

    assert_eq!(
        trace.labels,
        vec![
            "class Greeting",
            "fun <init>",
            "property name",
            "field name",
            "fun <get-name>",
            "return",
            "get name",
            "fun <set-name>",
            "stmt",
            "set name",
            "value value",
            "property age",
            "field age",
            "fun <get-age>",
            "return",
            "get age",
        ]
    );
}

#[test]
fn test_walk_skip_leaves_children_unvisited() {
    let mut unit = greeting_unit();
    let mut functions = 0;
    let mut exprs = 0;

    walk(&mut unit, |node| match node {
        NodeMut::Function(_) => {
            functions += 1;
            Walk::Skip
        }
        NodeMut::Expr(_) => {
            exprs += 1;
            Walk::Continue
        }
        _ => Walk::Continue,
    });

    assert_eq!(functions, 4);
    assert_eq!(exprs, 0);
}

#[test]
fn test_walk_descends_into_replacement() {
    let mut body = vec![Stmt::ret(Expr::get_field("name", Ty::string()))];
    let mut seen = Vec::new();

    walk_stmts(&mut body, |node| {
        seen.push(label(&node));
        if let NodeMut::Expr(expr) = node {
            if expr.is_field_read() {
                *expr = Expr::concat(vec![Expr::string("a"), Expr::get_value("x", Ty::string())]);
            }
        }
        Walk::Continue
    });

    // The walker descends into the concat that now occupies the slot.
    assert_eq!(seen, vec!["return", "get name", "const \"a\"", "value x"]);
    assert!(matches!(&body[0], Stmt::Return(Expr { kind: ExprKind::Concat(_), .. })));
}

#[test]
fn test_walk_reaches_nested_declarations() {
    let local = FunctionDecl::new("helper", Ty::string())
        .with_body([Stmt::ret(Expr::string("inner"))]);
    let getter = FunctionDecl::getter("name", Ty::string())
        .with_body([Stmt::decl(local), Stmt::ret(Expr::string("outer"))]);
    let mut unit = Unit::new("Nested.kt").with_decl(PropertyDecl::new("name").with_getter(getter));

    let mut names = Vec::new();
    walk(&mut unit, |node| {
        if let NodeMut::Function(function) = node {
            names.push(function.name.to_string());
        }
        Walk::Continue
    });

    assert_eq!(names, vec!["<get-name>", "helper"]);
}

#[test]
fn test_visitor_counts_field_reads() {
    struct FieldReads(usize);

    impl TreeVisitor for FieldReads {
        fn visit_expr(&mut self, expr: &Expr) {
            if expr.is_field_read() {
                self.0 += 1;
            }
            self.super_visit_expr(expr);
        }
    }

    let mut reads = FieldReads(0);
    reads.visit_unit(&greeting_unit());
    assert_eq!(reads.0, 2);
}

#[test]
fn test_formatter_dumps_unit() {
    let expected = indoc! {r#"
        UNIT name=Greeting.kt
          CLASS name=Greeting
            CONSTRUCTOR name=<init> returns=Greeting external
            PROPERTY name=name
              FIELD name=name type=String?
              GETTER name=<get-name> returns=String?
                RETURN
                  GET_FIELD name=name type=String?
              SETTER name=<set-name> returns=Unit params=(value: String?)
                SET_FIELD name=name
                  GET_VAR name=value type=String?
            PROPERTY name=age
              FIELD name=age type=Int
              GETTER name=<get-age> returns=Int
                RETURN
                  GET_FIELD name=age type=Int
    "#};

    assert_eq!(greeting_unit().to_string(), expected);
}

#[test]
fn test_formatter_dumps_calls_and_annotations() {
    let callee = accessor_types::Callee {
        class: "StringBuilder".into(),
        member: "append".into(),
        overload: 1,
    };
    let getter = FunctionDecl::getter("title", Ty::string())
        .with_annotation(Annotation::new("Greet").with_arg("prefix", Literal::Str("Hi ".into())))
        .with_body([Stmt::ret(Expr::call(
            callee,
            Some(Expr::get_value("sb", Ty::class("StringBuilder"))),
            vec![Expr::null(Ty::any())],
            Ty::class("StringBuilder"),
        ))]);

    let expected = indoc! {r#"
        GETTER name=<get-title> returns=String
          ANNOTATION name=Greet prefix="Hi "
          RETURN
            CALL StringBuilder.append#1 type=StringBuilder
              RECEIVER
                GET_VAR name=sb type=StringBuilder
              CONST null type=Any?
    "#};

    assert_eq!(TreeFormatter::format_function(&getter), expected);
}

#[test]
fn test_backed_property_shape() {
    let property = PropertyDecl::backed("name", Ty::string(), true);

    let getter = property.getter.as_ref().unwrap();
    assert!(getter.is_property_accessor());
    assert!(getter.is_getter());
    assert!(!getter.is_setter());

    let setter = property.setter.as_ref().unwrap();
    assert!(setter.is_property_accessor());
    assert!(setter.is_setter());
    assert_eq!(setter.params, vec![Param::new("value", Ty::string())]);
    assert_eq!(setter.return_type, Ty::unit());

    assert!(PropertyDecl::backed("id", Ty::int(), false).setter.is_none());
}

#[test]
fn test_class_lookups() {
    let unit = greeting_unit();
    let class = unit.class("Greeting").unwrap();

    assert!(class.property("name").is_some());
    assert!(class.property("missing").is_none());
    assert_eq!(class.functions().count(), 0);
    assert!(matches!(unit.decls[0], Decl::Class(_)));
    assert!(unit.class("Missing").is_none());
}

#[test]
fn test_take_leaves_typed_null() {
    let mut expr = Expr::get_field("name", Ty::string());
    let original = expr.take();

    assert!(original.is_field_read());
    assert_eq!(expr, Expr::null(Ty::string()));
    assert_eq!(expr.ty, Ty::string().nullable());
}

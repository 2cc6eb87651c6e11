use super::*;
use crate::library::{Symbols, string_builder_class};
use accessor_types::{ExprKind, TreeFormatter, Ty};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn builder() -> Synthesizer {
    let ops = LibraryOps::resolve(&Symbols::with_builtins(), "StringBuilder").unwrap();
    Synthesizer::builder(ops)
}

#[test]
fn test_builder_block_shape() {
    let mut synthesizer = builder();
    let expr = synthesizer.synthesize("Hello ", Expr::get_field("name", Ty::string().nullable()));

    let expected = indoc! {r#"
        BLOCK type=String
          VAR name=$tmp0 type=StringBuilder
            CALL StringBuilder.<init>#0 type=StringBuilder
          CALL StringBuilder.append#1 type=StringBuilder
            RECEIVER
              GET_VAR name=$tmp0 type=StringBuilder
            CONST "Hello " type=String
          CALL StringBuilder.append#1 type=StringBuilder
            RECEIVER
              GET_VAR name=$tmp0 type=StringBuilder
            GET_FIELD name=name type=String?
          CALL StringBuilder.toString#0 type=String
            RECEIVER
              GET_VAR name=$tmp0 type=StringBuilder
    "#};
    assert_eq!(TreeFormatter::format_expr(&expr), expected);
}

#[test]
fn test_builder_numbers_temporaries() {
    let mut synthesizer = builder();
    let first = synthesizer.synthesize("a", Expr::string("x"));
    let second = synthesizer.synthesize("b", Expr::string("y"));

    let temp_name = |expr: &Expr| match &expr.kind {
        ExprKind::Block { statements, .. } => match &statements[0] {
            Stmt::Local(local) => local.name.to_string(),
            other => panic!("expected a local, got {:?}", other),
        },
        other => panic!("expected a block, got {:?}", other),
    };

    assert_eq!(temp_name(&first), "$tmp0");
    assert_eq!(temp_name(&second), "$tmp1");
}

#[test]
fn test_builder_uses_class_of_resolved_ops() {
    let mut class = string_builder_class();
    class.name = "TextBuffer".into();
    let ops = LibraryOps::resolve_in(&class).unwrap();

    let expr = Synthesizer::builder(ops).synthesize("Hello ", Expr::string("x"));
    assert_eq!(expr.ty, Ty::string());
    assert!(TreeFormatter::format_expr(&expr).contains("CALL TextBuffer.append#1"));
}

#[test]
fn test_concatenation_shape() {
    let mut synthesizer = Synthesizer::concatenation();
    let expr = synthesizer.synthesize("Hello ", Expr::get_field("name", Ty::string()));

    assert_eq!(
        expr,
        Expr::concat(vec![
            Expr::string("Hello "),
            Expr::get_field("name", Ty::string()),
        ])
    );
    assert_eq!(expr.ty, Ty::string());
}

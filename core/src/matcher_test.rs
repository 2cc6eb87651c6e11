use super::*;
use accessor_types::{Annotation, Expr, FunctionFlags, PropertyDecl, Stmt, Ty};
use pretty_assertions::assert_eq;

fn getter(ty: Ty) -> FunctionDecl {
    FunctionDecl::getter("name", ty.clone()).with_body([Stmt::ret(Expr::get_field("name", ty))])
}

fn marked(config_marker: &str) -> Matcher {
    Matcher::new(&PassConfig {
        marker: Some(config_marker.into()),
        ..PassConfig::default()
    })
}

#[test]
fn test_string_getters_are_targets() {
    assert!(is_target(&getter(Ty::string())));
    assert!(is_target(&getter(Ty::string().nullable())));
}

#[test]
fn test_non_string_getters_are_not_targets() {
    assert!(!is_target(&getter(Ty::int())));
    assert!(!is_target(&getter(Ty::any().nullable())));
    assert!(!is_target(&getter(Ty::class("StringBuilder"))));
}

#[test]
fn test_setters_are_not_targets() {
    let property = PropertyDecl::backed("name", Ty::string(), true);
    assert!(!is_target(property.setter.as_ref().unwrap()));
}

#[test]
fn test_getter_flag_without_accessor_is_not_a_target() {
    let function = FunctionDecl::new("<get-name>", Ty::string()).with_flags(FunctionFlags::GETTER);
    assert!(!is_target(&function));

    let plain = FunctionDecl::new("describe", Ty::string());
    assert!(!is_target(&plain));
}

#[test]
fn test_classify_without_marker_uses_configured_prefix() {
    let matcher = Matcher::new(&PassConfig {
        prefix: "Hey ".into(),
        ..PassConfig::default()
    });

    assert_eq!(
        matcher.classify(&getter(Ty::string())),
        Verdict::Target {
            prefix: "Hey ".into()
        }
    );
    assert_eq!(
        matcher.classify(&getter(Ty::int())),
        Verdict::Skip(SkipReason::Shape)
    );
}

#[test]
fn test_classify_requires_marker_when_configured() {
    let matcher = marked("Greet");

    assert_eq!(
        matcher.classify(&getter(Ty::string())),
        Verdict::Skip(SkipReason::Unmarked)
    );
    assert_eq!(
        matcher.classify(&getter(Ty::string()).with_annotation(Annotation::new("Other"))),
        Verdict::Skip(SkipReason::Unmarked)
    );
    assert_eq!(
        matcher.classify(&getter(Ty::string()).with_annotation(Annotation::new("Greet"))),
        Verdict::Target {
            prefix: "Hello ".into()
        }
    );
}

#[test]
fn test_marker_prefix_argument_overrides_prefix() {
    let function = getter(Ty::string())
        .with_annotation(Annotation::new("Greet").with_arg("prefix", Literal::Str("Hi ".into())));

    assert_eq!(
        marked("Greet").classify(&function),
        Verdict::Target {
            prefix: "Hi ".into()
        }
    );
}

#[test]
fn test_malformed_marker_arguments_skip() {
    let cases = [
        Annotation::new("Greet").with_arg("prefix", Literal::Int(3)),
        Annotation::new("Greet").with_arg("suffix", Literal::Str("!".into())),
        Annotation::new("Greet")
            .with_arg("prefix", Literal::Str("Hi ".into()))
            .with_arg("prefix", Literal::Str("Yo ".into())),
    ];

    for annotation in cases {
        let function = getter(Ty::string()).with_annotation(annotation);
        assert_eq!(
            marked("Greet").classify(&function),
            Verdict::Skip(SkipReason::MalformedMarker)
        );
    }
}

#[test]
fn test_repeated_marker_is_malformed() {
    let function = getter(Ty::string())
        .with_annotation(Annotation::new("Greet"))
        .with_annotation(Annotation::new("Greet"));

    assert_eq!(
        marked("Greet").classify(&function),
        Verdict::Skip(SkipReason::MalformedMarker)
    );
}

#[test]
fn test_shape_is_checked_before_marker() {
    let function = getter(Ty::int()).with_annotation(Annotation::new("Greet"));
    assert_eq!(
        marked("Greet").classify(&function),
        Verdict::Skip(SkipReason::Shape)
    );
}

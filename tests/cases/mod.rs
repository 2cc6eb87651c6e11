#![allow(dead_code)]

use accessor_modifier::evaluator::{EvalError, Evaluator, EvaluatorOptions, Object, Value};
use accessor_modifier::{
    AccessorModifier, ClassDecl, LogSink, PluginOptions, PropertyDecl, TransformReport, Ty, Unit,
};

/// A unit holding one class `Person` with a single backed `name` property.
pub fn person_unit(ty: Ty) -> Unit {
    Unit::new("Person.kt")
        .with_decl(ClassDecl::new("Person").with_decl(PropertyDecl::backed("name", ty, true)))
}

pub fn plugin(pairs: &[(&'static str, &'static str)]) -> AccessorModifier {
    let options = PluginOptions::from_pairs(pairs.iter().copied()).unwrap();
    AccessorModifier::new(options).with_sink(LogSink::none())
}

pub fn generate(unit: &mut Unit, pairs: &[(&'static str, &'static str)]) -> TransformReport {
    plugin(pairs).generate(unit).unwrap()
}

/// Read `property` of an object of `class` whose fields are `fields`.
pub fn read(
    unit: &Unit,
    class: &str,
    property: &str,
    fields: &[(&str, Value)],
) -> Result<Value, EvalError> {
    let class = unit.class(class).unwrap();
    let mut object = fields
        .iter()
        .fold(Object::new(class.name.clone()), |object, (name, value)| {
            object.with_field(*name, value.clone())
        });
    Evaluator::new(EvaluatorOptions::default()).get(class, property, &mut object)
}

/// Rewrites a one-property unit with the given options and checks what the
/// getter returns for the given field value.
#[macro_export]
macro_rules! rewrite_case {
    (
        $name:ident,
        ty: $ty:expr,
        field: $field:expr,
        options: $options:expr,
        expected: $expected:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let mut unit = $crate::cases::person_unit($ty);
            $crate::cases::generate(&mut unit, &$options);
            pretty_assertions::assert_eq!(
                $crate::cases::read(&unit, "Person", "name", &[("name", $field)]),
                Ok($expected)
            );
        }
    };
}

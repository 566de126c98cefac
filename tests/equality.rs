use std::any::Any;

use bigdecimal::BigDecimal;
use deep_compare::value::{builtin, Array, Class, Object};
use deep_compare::{
    equals, equals_case, equals_ignore_case, equals_ignore_case_prefix, equals_prefix,
    equals_with_epsilon, equals_with_options, EqualityOptions, Value,
};

static POINT: Class = Class::new("Point", &builtin::OBJECT);
static LABEL: Class = Class::new("Label", &builtin::OBJECT);

#[derive(Debug, PartialEq)]
struct Point(i32, i32);

impl Object for Point {
    fn class(&self) -> &'static Class {
        &POINT
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn natural_eq(&self, other: &dyn Object) -> bool {
        other.as_any().downcast_ref::<Point>() == Some(self)
    }
}

#[derive(Debug)]
struct Label(&'static str);

impl Object for Label {
    fn class(&self) -> &'static Class {
        &LABEL
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn case_insensitive_strings_and_chars() {
    assert!(equals_ignore_case(&"abc".into(), &"ABC".into()).unwrap());
    assert!(!equals(&"abc".into(), &"ABC".into()).unwrap());

    let l = Value::from(vec!['a', 'B', 'c']);
    let r = Value::from(vec!['A', 'b', 'C']);
    assert!(equals_ignore_case(&l, &r).unwrap());
    assert!(equals_case(&l, &r, true).unwrap());
    assert!(!equals_case(&l, &r, false).unwrap());
}

#[test]
fn epsilon_and_case_compose() {
    let l = Value::sequence(vec![1.0.into(), "North".into(), 3.into()]);
    let r = Value::sequence(vec![1.001.into(), "NORTH".into(), 3.into()]);
    let both = EqualityOptions {
        epsilon: Some(0.01),
        ignore_case: true,
    };
    assert!(equals_with_options(&l, &r, &both).unwrap());
    assert!(!equals_with_epsilon(&l, &r, 0.01).unwrap());
    assert!(!equals_ignore_case(&l, &r).unwrap());

    let ints = Value::sequence(vec![3.into()]);
    let other = Value::sequence(vec![4.into()]);
    assert!(!equals_with_epsilon(&ints, &other, 10.0).unwrap());
}

#[test]
fn floating_leaves() {
    let nan = Value::from(f32::NAN);
    assert!(equals(&nan, &nan).unwrap());
    assert!(equals_with_epsilon(&nan, &nan, 1.0).unwrap());
    assert!(!equals_with_epsilon(&nan, &Value::from(f32::INFINITY), f64::INFINITY).unwrap());
    assert!(equals_with_epsilon(&Value::from(-0.0f32), &Value::from(0.0f32), 0.0).unwrap());
    assert!(!equals(&Value::from(-0.0f32), &Value::from(0.0f32)).unwrap());
}

#[test]
fn nested_arrays_short_circuit_on_any_leaf() {
    let grid = |corner: bool| {
        Value::Array(Array::of(vec![
            Value::Array(Array::of(vec![
                Value::from(vec![true, false]),
                Value::from(vec![false, corner]),
            ])),
            Value::Array(Array::of(vec![Value::from(vec![true])])),
        ]))
    };
    assert!(equals(&grid(true), &grid(true)).unwrap());
    assert!(!equals(&grid(true), &grid(false)).unwrap());
}

#[test]
fn rank_and_length_mismatches_are_unequal() {
    let flat = Value::from(vec![1, 2]);
    let nested = Value::Array(Array::of(vec![flat.clone()]));
    assert!(!equals(&flat, &nested).unwrap());
    assert!(!equals(&flat, &Value::from(vec![1, 2, 3])).unwrap());
    assert!(!equals(&Value::from(1), &flat).unwrap());
    assert!(equals(&flat, &Value::sequence(vec![1.into(), 2.into()])).unwrap());
}

#[test]
fn nulls() {
    assert!(equals(&Value::Null, &Value::Null).unwrap());
    assert!(!equals(&Value::Null, &Value::from(0)).unwrap());

    let holes = Value::sequence(vec![Value::Null, "x".into()]);
    assert!(equals(&holes, &holes.clone()).unwrap());
    assert!(!equals(&holes, &Value::sequence(vec!["x".into(), Value::Null])).unwrap());
}

#[test]
fn objects() {
    let a = Value::object(Point(1, 2));
    assert!(equals(&a, &Value::object(Point(1, 2))).unwrap());
    assert!(!equals(&a, &Value::object(Point(2, 1))).unwrap());

    let label = Value::object(Label("tag"));
    assert!(equals(&label, &label.clone()).unwrap());
    assert!(!equals(&label, &Value::object(Label("tag"))).unwrap());
    assert!(!equals(&label, &a).unwrap());
}

#[test]
fn big_decimals_compare_numerically() {
    let l: BigDecimal = "1.50".parse().unwrap();
    let r: BigDecimal = "1.5".parse().unwrap();
    assert!(equals(&l.into(), &r.into()).unwrap());
}

#[test]
fn prefixes() {
    let l = Value::from(vec!["Alpha", "beta", "gamma"]);
    let r = Value::from(vec!["ALPHA", "BETA"]);
    assert!(equals_ignore_case_prefix(&l, 2, &r, 2).unwrap());
    assert!(!equals_ignore_case_prefix(&l, 3, &r, 2).unwrap());
    assert!(!equals_prefix(&l, 2, &r, 2).unwrap());
    assert!(equals_prefix(&l, 0, &r, 0).unwrap());
    assert!(equals_prefix(&l, 3, &r, 3).is_err());
}

//! Deep ordering of values.
//!
//! Results are signed `i64`: negative when the left operand sorts first,
//! zero when equal, positive otherwise. Null sorts below everything. How much
//! of the distance the result carries depends on the kind, see
//! [`Kind::magnitude`](crate::value::Kind::magnitude).

pub mod epsilon;
pub mod mismatch;
pub mod scalar;
pub(crate) mod sequence;

use std::fmt;

use log::debug;

use crate::{
    error::Result,
    value::{Object, Value},
};

pub type ObjectComparator<'a> = dyn Fn(&dyn Object, &dyn Object) -> i64 + 'a;

/// Modifiers applied to the leaves of a comparison.
#[derive(Clone, Copy, Default)]
pub struct CompareOptions<'a> {
    /// Tolerance for `Float` and `Double` leaves.
    pub epsilon: Option<f64>,
    /// Fold case of `Char` and `String` leaves.
    pub ignore_case: bool,
    /// Replaces natural ordering and class resolution between objects.
    pub comparator: Option<&'a ObjectComparator<'a>>,
}

impl CompareOptions<'_> {
    pub fn with_epsilon(epsilon: f64) -> Self {
        CompareOptions {
            epsilon: Some(epsilon),
            ..Default::default()
        }
    }

    pub fn ignoring_case() -> Self {
        CompareOptions {
            ignore_case: true,
            ..Default::default()
        }
    }
}

impl<'a> CompareOptions<'a> {
    pub fn with_comparator(comparator: &'a ObjectComparator<'a>) -> Self {
        CompareOptions {
            comparator: Some(comparator),
            ..Default::default()
        }
    }
}

impl fmt::Debug for CompareOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompareOptions")
            .field("epsilon", &self.epsilon)
            .field("ignore_case", &self.ignore_case)
            .field("comparator", &self.comparator.is_some())
            .finish()
    }
}

pub fn compare(l: &Value, r: &Value) -> Result<i64> {
    compare_with_options(l, r, &CompareOptions::default())
}

pub fn compare_with_epsilon(l: &Value, r: &Value, epsilon: f64) -> Result<i64> {
    compare_with_options(l, r, &CompareOptions::with_epsilon(epsilon))
}

pub fn compare_with<F>(l: &Value, r: &Value, comparator: F) -> Result<i64>
where
    F: Fn(&dyn Object, &dyn Object) -> i64,
{
    compare_with_options(l, r, &CompareOptions::with_comparator(&comparator))
}

pub fn compare_ignore_case(l: &Value, r: &Value) -> Result<i64> {
    compare_with_options(l, r, &CompareOptions::ignoring_case())
}

pub fn compare_with_options(l: &Value, r: &Value, options: &CompareOptions) -> Result<i64> {
    compare_values(l, r, options)
}

/// Compares only the first `l_len` and `r_len` elements of two composites.
pub fn compare_prefix(l: &Value, l_len: usize, r: &Value, r_len: usize) -> Result<i64> {
    compare_prefix_with_options(l, l_len, r, r_len, &CompareOptions::default())
}

pub fn compare_prefix_with_epsilon(
    l: &Value,
    l_len: usize,
    r: &Value,
    r_len: usize,
    epsilon: f64,
) -> Result<i64> {
    compare_prefix_with_options(l, l_len, r, r_len, &CompareOptions::with_epsilon(epsilon))
}

pub fn compare_prefix_with<F>(
    l: &Value,
    l_len: usize,
    r: &Value,
    r_len: usize,
    comparator: F,
) -> Result<i64>
where
    F: Fn(&dyn Object, &dyn Object) -> i64,
{
    let options = CompareOptions::with_comparator(&comparator);
    compare_prefix_with_options(l, l_len, r, r_len, &options)
}

pub fn compare_ignore_case_prefix(
    l: &Value,
    l_len: usize,
    r: &Value,
    r_len: usize,
) -> Result<i64> {
    compare_prefix_with_options(l, l_len, r, r_len, &CompareOptions::ignoring_case())
}

pub fn compare_prefix_with_options(
    l: &Value,
    l_len: usize,
    r: &Value,
    r_len: usize,
    options: &CompareOptions,
) -> Result<i64> {
    if let Some(order) = null_order(l, r) {
        return Ok(order);
    }
    sequence::compare_composites(l, Some(l_len), r, Some(r_len), options)
}

fn null_order(l: &Value, r: &Value) -> Option<i64> {
    match (l.is_null(), r.is_null()) {
        (true, true) => Some(0),
        (true, false) => Some(-1),
        (false, true) => Some(1),
        (false, false) => None,
    }
}

pub(crate) fn compare_values(l: &Value, r: &Value, options: &CompareOptions) -> Result<i64> {
    if let Some(order) = null_order(l, r) {
        return Ok(order);
    }

    let order = match (l, r) {
        (Value::Boolean(l), Value::Boolean(r)) => scalar::compare_bool(*l, *r),
        (Value::Char(l), Value::Char(r)) if options.ignore_case => {
            scalar::compare_char_ignore_case(*l, *r)
        }
        (Value::Char(l), Value::Char(r)) => scalar::compare_char(*l, *r),
        (Value::Byte(l), Value::Byte(r)) => scalar::difference(*l as i64, *r as i64),
        (Value::Short(l), Value::Short(r)) => scalar::difference(*l as i64, *r as i64),
        (Value::Int(l), Value::Int(r)) => scalar::difference(*l as i64, *r as i64),
        (Value::Long(l), Value::Long(r)) => scalar::signum(l.cmp(r)),
        (Value::Float(l), Value::Float(r)) => match options.epsilon {
            Some(e) => epsilon::compare_f32(*l, *r, e as f32),
            None => scalar::compare_f32(*l, *r),
        },
        (Value::Double(l), Value::Double(r)) => match options.epsilon {
            Some(e) => epsilon::compare_f64(*l, *r, e),
            None => scalar::compare_f64(*l, *r),
        },
        (Value::BigInteger(l), Value::BigInteger(r)) => scalar::signum(l.cmp(r)),
        (Value::BigDecimal(l), Value::BigDecimal(r)) => scalar::signum(l.cmp(r)),
        (Value::Date(l), Value::Date(r)) => scalar::signum(l.cmp(r)),
        (Value::String(l), Value::String(r)) if options.ignore_case => {
            scalar::compare_str_ignore_case(l, r)
        }
        (Value::String(l), Value::String(r)) => scalar::compare_str(l, r),
        (Value::Enum(l), Value::Enum(r)) if l.class() == r.class() => {
            scalar::difference(l.ordinal() as i64, r.ordinal() as i64)
        }
        (Value::Enum(l), Value::Enum(r)) => mismatch::compare_classes(l.class(), r.class()),
        (Value::ClassRef(l), Value::ClassRef(r)) => mismatch::compare_classes(*l, *r),
        (Value::Object(l), Value::Object(r)) => {
            compare_objects(l.as_ref(), r.as_ref(), options)
        }
        (Value::Array(_) | Value::Sequence(_), Value::Array(_) | Value::Sequence(_)) => {
            sequence::compare_composites(l, None, r, None, options)?
        }
        _ => mismatch::resolve(l, r),
    };
    Ok(order)
}

fn compare_objects(l: &dyn Object, r: &dyn Object, options: &CompareOptions) -> i64 {
    if let Some(comparator) = options.comparator {
        debug!("comparing {:?} and {:?} with the caller comparator", l, r);
        return comparator(l, r);
    }

    if l.class() != r.class() {
        return mismatch::compare_classes(l.class(), r.class());
    }

    if let Some(order) = l.natural_cmp(r) {
        return order;
    }

    if l.natural_eq(r) {
        0
    } else {
        scalar::compare_str(&format!("{:?}", l), &format!("{:?}", r))
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;
    use crate::value::{builtin, Class, EnumConstant};

    static SUIT: Class = Class::new("Suit", &builtin::ENUM);
    static PLANET: Class = Class::new("Planet", &builtin::ENUM);

    static MONEY: Class = Class::new("Money", &builtin::OBJECT);
    static TAG: Class = Class::new("Tag", &builtin::OBJECT);

    #[derive(Debug)]
    struct Money(i64);

    impl Object for Money {
        fn class(&self) -> &'static Class {
            &MONEY
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn natural_cmp(&self, other: &dyn Object) -> Option<i64> {
            let other = other.as_any().downcast_ref::<Money>()?;
            Some(scalar::signum(self.0.cmp(&other.0)))
        }
    }

    #[derive(Debug)]
    struct Tag(&'static str);

    impl Object for Tag {
        fn class(&self) -> &'static Class {
            &TAG
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn null_sorts_first() {
        assert_eq!(compare(&Value::Null, &Value::Null).unwrap(), 0);
        assert_eq!(compare(&Value::Null, &Value::from(0)).unwrap(), -1);
        assert_eq!(compare(&Value::from(vec![1]), &Value::Null).unwrap(), 1);
    }

    #[test]
    fn wide_kinds_are_sign_only() {
        let min = Value::from(i64::MIN);
        let max = Value::from(i64::MAX);
        assert_eq!(compare(&min, &max).unwrap(), -1);
        assert_eq!(compare(&max, &min).unwrap(), 1);
        assert_eq!(compare(&Value::from(2.5), &Value::from(-9.0)).unwrap(), 1);
    }

    #[test]
    fn enums_compare_by_ordinal() {
        let clubs = Value::from(EnumConstant::new(&SUIT, "CLUBS", 0));
        let spades = Value::from(EnumConstant::new(&SUIT, "SPADES", 3));
        assert_eq!(compare(&clubs, &spades).unwrap(), -3);

        let mars = Value::from(EnumConstant::new(&PLANET, "MARS", 3));
        assert_eq!(
            compare(&spades, &mars).unwrap(),
            'S' as i64 - 'P' as i64
        );
    }

    #[test]
    fn objects_use_their_natural_order() {
        let one = Value::object(Money(1));
        let two = Value::object(Money(2));
        assert_eq!(compare(&one, &two).unwrap(), -1);
        assert_eq!(compare(&two, &two).unwrap(), 0);
    }

    #[test]
    fn objects_without_order_fall_back_to_their_rendering() {
        let a = Value::object(Tag("a"));
        let b = Value::object(Tag("b"));
        assert_eq!(compare(&a, &b).unwrap(), -1);
        assert_eq!(compare(&a, &a).unwrap(), 0);
    }

    #[test]
    fn caller_comparator_overrides_class_resolution() {
        let money = Value::object(Money(5));
        let tag = Value::object(Tag("x"));
        assert_ne!(compare(&money, &tag).unwrap(), 0);
        assert_eq!(compare_with(&money, &tag, |_, _| 0).unwrap(), 0);
    }

    #[test]
    fn epsilon_only_touches_floating_leaves() {
        assert_eq!(
            compare_with_epsilon(&Value::from(1.0), &Value::from(1.05), 0.1).unwrap(),
            0
        );
        assert_eq!(
            compare_with_epsilon(&Value::from(1), &Value::from(2), 10.0).unwrap(),
            -1
        );
    }
}

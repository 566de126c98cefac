//! Deep equality of values.
//!
//! Walks the same shapes as the ordering engine but stops at the first leaf
//! that differs. Epsilon tolerance applies to `Float`/`Double` leaves and case
//! folding to `Char`/`String` leaves; both can be active at once, every other
//! leaf is compared exactly.

use crate::{
    compare::{
        epsilon,
        scalar::{canonical_bits_f32, canonical_bits_f64, fold_case, str_eq_ignore_case},
        sequence::Operands,
    },
    error::Result,
    value::{Object, Value},
};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EqualityOptions {
    pub epsilon: Option<f64>,
    pub ignore_case: bool,
}

impl EqualityOptions {
    pub fn with_epsilon(epsilon: f64) -> Self {
        EqualityOptions {
            epsilon: Some(epsilon),
            ..Default::default()
        }
    }

    pub fn ignoring_case() -> Self {
        EqualityOptions {
            ignore_case: true,
            ..Default::default()
        }
    }
}

pub fn equals(l: &Value, r: &Value) -> Result<bool> {
    equals_with_options(l, r, &EqualityOptions::default())
}

pub fn equals_with_epsilon(l: &Value, r: &Value, epsilon: f64) -> Result<bool> {
    equals_with_options(l, r, &EqualityOptions::with_epsilon(epsilon))
}

pub fn equals_case(l: &Value, r: &Value, case_insensitive: bool) -> Result<bool> {
    let options = EqualityOptions {
        ignore_case: case_insensitive,
        ..Default::default()
    };
    equals_with_options(l, r, &options)
}

pub fn equals_ignore_case(l: &Value, r: &Value) -> Result<bool> {
    equals_with_options(l, r, &EqualityOptions::ignoring_case())
}

pub fn equals_with_options(l: &Value, r: &Value, options: &EqualityOptions) -> Result<bool> {
    values_equal(l, r, options)
}

/// Equality of the first `l_len` and `r_len` elements of two composites.
pub fn equals_prefix(l: &Value, l_len: usize, r: &Value, r_len: usize) -> Result<bool> {
    equals_prefix_with_options(l, l_len, r, r_len, &EqualityOptions::default())
}

pub fn equals_ignore_case_prefix(
    l: &Value,
    l_len: usize,
    r: &Value,
    r_len: usize,
) -> Result<bool> {
    equals_prefix_with_options(l, l_len, r, r_len, &EqualityOptions::ignoring_case())
}

pub fn equals_prefix_with_options(
    l: &Value,
    l_len: usize,
    r: &Value,
    r_len: usize,
    options: &EqualityOptions,
) -> Result<bool> {
    match (l.is_null(), r.is_null()) {
        (true, true) => Ok(true),
        (true, false) | (false, true) => Ok(false),
        (false, false) => composites_equal(l, Some(l_len), r, Some(r_len), options),
    }
}

fn values_equal(l: &Value, r: &Value, options: &EqualityOptions) -> Result<bool> {
    let equal = match (l, r) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,

        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Char(l), Value::Char(r)) if options.ignore_case => fold_case(*l) == fold_case(*r),
        (Value::Char(l), Value::Char(r)) => l == r,
        (Value::Byte(l), Value::Byte(r)) => l == r,
        (Value::Short(l), Value::Short(r)) => l == r,
        (Value::Int(l), Value::Int(r)) => l == r,
        (Value::Long(l), Value::Long(r)) => l == r,
        (Value::Float(l), Value::Float(r)) => match options.epsilon {
            Some(e) => epsilon::equals_f32(*l, *r, e as f32),
            None => canonical_bits_f32(*l) == canonical_bits_f32(*r),
        },
        (Value::Double(l), Value::Double(r)) => match options.epsilon {
            Some(e) => epsilon::equals_f64(*l, *r, e),
            None => canonical_bits_f64(*l) == canonical_bits_f64(*r),
        },
        (Value::BigInteger(l), Value::BigInteger(r)) => l == r,
        (Value::BigDecimal(l), Value::BigDecimal(r)) => l == r,
        (Value::Date(l), Value::Date(r)) => l == r,
        (Value::String(l), Value::String(r)) if options.ignore_case => str_eq_ignore_case(l, r),
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Enum(l), Value::Enum(r)) => {
            l.class() == r.class() && l.ordinal() == r.ordinal()
        }
        (Value::ClassRef(l), Value::ClassRef(r)) => l == r,
        (Value::Object(l), Value::Object(r)) => objects_equal(l.as_ref(), r.as_ref()),
        (Value::Array(_) | Value::Sequence(_), Value::Array(_) | Value::Sequence(_)) => {
            return composites_equal(l, None, r, None, options);
        }
        _ => false,
    };
    Ok(equal)
}

fn objects_equal(l: &dyn Object, r: &dyn Object) -> bool {
    l.class() == r.class() && l.natural_eq(r)
}

fn composites_equal(
    l: &Value,
    l_len: Option<usize>,
    r: &Value,
    r_len: Option<usize>,
    options: &EqualityOptions,
) -> Result<bool> {
    let operands = Operands::new(l, l_len, r, r_len, "equals")?;
    if operands.rank_mismatch().is_some() || operands.l_len != operands.r_len {
        return Ok(false);
    }
    for index in 0..operands.l_len {
        let l = operands.l.get(index)?;
        let r = operands.r.get(index)?;
        if !values_equal(&l, &r, options)? {
            return Ok(false);
        }
    }
    Ok(true)
}

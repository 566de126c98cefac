//! Floating-point comparison within a tolerance.
//!
//! Two values are equal when `|l - r| <= epsilon` in the operands' own
//! precision. NaN equals NaN whatever the tolerance and sorts above every
//! other value, signed zeros are equal.

use crate::compare::scalar::signum;

macro_rules! impl_epsilon {
    ($compare:ident, $equals:ident, $ty:ty) => {
        pub fn $compare(l: $ty, r: $ty, epsilon: $ty) -> i64 {
            match (l.is_nan(), r.is_nan()) {
                (true, true) => return 0,
                (true, false) => return 1,
                (false, true) => return -1,
                (false, false) => {}
            }
            // equal infinities subtract to NaN
            if l == r || (l - r).abs() <= epsilon {
                return 0;
            }
            match l.partial_cmp(&r) {
                Some(ordering) => signum(ordering),
                None => 0,
            }
        }

        pub fn $equals(l: $ty, r: $ty, epsilon: $ty) -> bool {
            $compare(l, r, epsilon) == 0
        }
    };
}

impl_epsilon!(compare_f32, equals_f32, f32);
impl_epsilon!(compare_f64, equals_f64, f64);

//! Leaf comparisons for same-kind scalars.
//!
//! Small integer kinds, characters and strings return the exact arithmetic
//! distance, widened to `i64` so the subtraction cannot overflow. Wide and
//! floating kinds return only the sign.

use std::cmp::Ordering;

pub fn signum(ordering: Ordering) -> i64 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

pub fn difference(l: i64, r: i64) -> i64 {
    l - r
}

pub fn compare_bool(l: bool, r: bool) -> i64 {
    difference(l as i64, r as i64)
}

pub fn compare_char(l: char, r: char) -> i64 {
    difference(l as i64, r as i64)
}

pub fn compare_char_ignore_case(l: char, r: char) -> i64 {
    compare_char(fold_case(l), fold_case(r))
}

pub fn compare_str(l: &str, r: &str) -> i64 {
    compare_code_points(l.chars(), r.chars())
}

pub fn compare_str_ignore_case(l: &str, r: &str) -> i64 {
    compare_code_points(l.chars().map(fold_case), r.chars().map(fold_case))
}

pub fn str_eq_ignore_case(l: &str, r: &str) -> bool {
    l.chars().map(fold_case).eq(r.chars().map(fold_case))
}

/// First mismatching code point difference, else the length difference.
fn compare_code_points(
    l: impl Iterator<Item = char>,
    r: impl Iterator<Item = char>,
) -> i64 {
    let (mut l, mut r) = (l.fuse(), r.fuse());
    loop {
        match (l.next(), r.next()) {
            (Some(x), Some(y)) if x != y => return compare_char(x, y),
            (Some(_), Some(_)) => continue,
            (Some(_), None) => return 1 + l.count() as i64,
            (None, Some(_)) => return -1 - r.count() as i64,
            (None, None) => return 0,
        }
    }
}

/// Upper-cases then lower-cases a character. Mappings that expand to more
/// than one character leave it unchanged.
pub fn fold_case(c: char) -> char {
    let upper = single(c.to_uppercase()).unwrap_or(c);
    single(upper.to_lowercase()).unwrap_or(upper)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

macro_rules! impl_compare_floating {
    ($name:ident, $canonical:ident, $ty:ty, $bits:ty) => {
        /// Raw `<`/`>` first, remaining ties ordered by bit pattern so that
        /// NaN sorts above everything and `-0.0` below `+0.0`.
        pub fn $name(l: $ty, r: $ty) -> i64 {
            if l < r {
                return -1;
            }
            if l > r {
                return 1;
            }
            signum($canonical(l).cmp(&$canonical(r)))
        }

        pub fn $canonical(v: $ty) -> $bits {
            if v.is_nan() {
                <$ty>::NAN.to_bits() as $bits
            } else {
                v.to_bits() as $bits
            }
        }
    };
}

impl_compare_floating!(compare_f32, canonical_bits_f32, f32, i32);
impl_compare_floating!(compare_f64, canonical_bits_f64, f64, i64);

pub fn length_difference(l: usize, r: usize) -> i64 {
    let widen = |n: usize| i64::try_from(n).unwrap_or(i64::MAX);
    widen(l).saturating_sub(widen(r))
}

//! Ordering between values that do not share a kind or a class.
//!
//! Classes are ordered by their distance from the root class. Equal distances
//! fall back to the class names and finally to descriptor identity, so any
//! two distinct classes produce a non-zero, antisymmetric result that does not
//! change between calls.

use log::trace;

use crate::{
    compare::scalar::{compare_str, difference, signum},
    value::{Class, Value},
};

#[derive(Debug, Clone, Copy)]
pub struct ClassDescriptor {
    pub class: &'static Class,
    pub distance: usize,
}

impl ClassDescriptor {
    pub fn new(class: &'static Class) -> Self {
        ClassDescriptor {
            class,
            distance: class.distance_from_root(),
        }
    }

    pub fn of(value: &Value) -> Option<Self> {
        value.runtime_class().map(Self::new)
    }
}

pub fn compare_classes(l: &'static Class, r: &'static Class) -> i64 {
    if l == r {
        return 0;
    }

    let (l_desc, r_desc) = (ClassDescriptor::new(l), ClassDescriptor::new(r));
    let by_distance = difference(l_desc.distance as i64, r_desc.distance as i64);
    if by_distance != 0 {
        return by_distance;
    }

    let by_name = compare_str(l.name(), r.name());
    if by_name != 0 {
        return by_name;
    }

    signum((l as *const Class as usize).cmp(&(r as *const Class as usize)))
}

/// Resolves two non-null values of different kinds.
pub fn resolve(l: &Value, r: &Value) -> i64 {
    if l.is_composite() || r.is_composite() {
        return rank_order(l, r);
    }

    match (ClassDescriptor::of(l), ClassDescriptor::of(r)) {
        (Some(l_desc), Some(r_desc)) => {
            let order = compare_classes(l_desc.class, r_desc.class);
            trace!(
                "resolved {}(distance {}) against {}(distance {}) to {}",
                l_desc.class,
                l_desc.distance,
                r_desc.class,
                r_desc.distance,
                order
            );
            order
        }
        (None, None) => 0,
        (None, Some(_)) => -1,
        (Some(_), None) => 1,
    }
}

// a scalar sits below any composite
fn rank_order(l: &Value, r: &Value) -> i64 {
    let order = match (l.is_composite(), r.is_composite()) {
        (true, false) => 1,
        (false, true) => -1,
        _ => 0,
    };
    trace!("rank mismatch between {} and {}: {}", l.kind(), r.kind(), order);
    order
}

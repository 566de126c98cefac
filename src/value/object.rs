use std::{any::Any, fmt};

use crate::value::class::Class;

/// A user value the engine knows nothing about beyond its class and the
/// ordering or equality its type chooses to expose.
pub trait Object: fmt::Debug + Send + Sync {
    fn class(&self) -> &'static Class;

    fn as_any(&self) -> &dyn Any;

    /// Natural ordering against another instance of the same class, if the
    /// type has one.
    fn natural_cmp(&self, _other: &dyn Object) -> Option<i64> {
        None
    }

    /// Natural equality against another instance of the same class. Falls
    /// back to the natural ordering, then to identity.
    fn natural_eq(&self, other: &dyn Object) -> bool {
        match self.natural_cmp(other) {
            Some(order) => order == 0,
            None => std::ptr::eq(
                self.as_any() as *const dyn Any as *const (),
                other.as_any() as *const dyn Any as *const (),
            ),
        }
    }
}

/// Constant of an enum type. The class should descend from
/// [`builtin::ENUM`](crate::value::builtin::ENUM).
#[derive(Debug, Clone, Copy)]
pub struct EnumConstant {
    class: &'static Class,
    name: &'static str,
    ordinal: u32,
}

impl EnumConstant {
    pub const fn new(class: &'static Class, name: &'static str, ordinal: u32) -> Self {
        EnumConstant {
            class,
            name,
            ordinal,
        }
    }

    pub fn class(&self) -> &'static Class {
        self.class
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }
}

impl fmt::Display for EnumConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.class, self.name)
    }
}

use std::fmt;

/// Static runtime class descriptor.
///
/// Classes form a single-rooted tree: every class except [`builtin::OBJECT`]
/// names a superclass. User types declare their class as a `static`:
///
/// ```
/// use deep_compare::value::{builtin, Class};
///
/// static SHAPE: Class = Class::new("Shape", &builtin::OBJECT);
/// static CIRCLE: Class = Class::new("Circle", &SHAPE);
///
/// assert_eq!(CIRCLE.distance_from_root(), 2);
/// ```
pub struct Class {
    name: &'static str,
    superclass: Option<&'static Class>,
}

impl Class {
    pub const fn root(name: &'static str) -> Self {
        Class {
            name,
            superclass: None,
        }
    }

    pub const fn new(name: &'static str, superclass: &'static Class) -> Self {
        Class {
            name,
            superclass: Some(superclass),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn superclass(&self) -> Option<&'static Class> {
        self.superclass
    }

    /// Number of superclass hops from this class up to the root.
    pub fn distance_from_root(&self) -> usize {
        let mut hops = 0;
        let mut curr = self.superclass;
        while let Some(parent) = curr {
            hops += 1;
            curr = parent.superclass;
        }
        hops
    }

    pub fn is_subclass_of(&self, other: &Class) -> bool {
        let mut curr = Some(self);
        while let Some(class) = curr {
            if class == other {
                return true;
            }
            curr = class.superclass;
        }
        false
    }
}

// Descriptors are compared by identity, two statics with the same name are
// still different classes.
impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("Class({})", self.name))
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Runtime classes of the built-in value kinds.
pub mod builtin {
    use super::Class;

    pub static OBJECT: Class = Class::root("Object");

    pub static NUMBER: Class = Class::new("Number", &OBJECT);
    pub static BYTE: Class = Class::new("Byte", &NUMBER);
    pub static SHORT: Class = Class::new("Short", &NUMBER);
    pub static INTEGER: Class = Class::new("Integer", &NUMBER);
    pub static LONG: Class = Class::new("Long", &NUMBER);
    pub static FLOAT: Class = Class::new("Float", &NUMBER);
    pub static DOUBLE: Class = Class::new("Double", &NUMBER);
    pub static BIG_INTEGER: Class = Class::new("BigInteger", &NUMBER);
    pub static BIG_DECIMAL: Class = Class::new("BigDecimal", &NUMBER);

    pub static BOOLEAN: Class = Class::new("Boolean", &OBJECT);
    pub static CHARACTER: Class = Class::new("Character", &OBJECT);
    pub static STRING: Class = Class::new("String", &OBJECT);
    pub static CLASS: Class = Class::new("Class", &OBJECT);
    pub static DATE: Class = Class::new("Date", &OBJECT);

    /// Superclass of every enum type.
    pub static ENUM: Class = Class::new("Enum", &OBJECT);

    pub static ARRAY: Class = Class::new("Array", &OBJECT);
    pub static LIST: Class = Class::new("List", &OBJECT);
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHAPE: Class = Class::new("Shape", &builtin::OBJECT);
    static POLYGON: Class = Class::new("Polygon", &SHAPE);
    static SQUARE: Class = Class::new("Square", &POLYGON);

    #[test]
    fn distance_counts_superclass_hops() {
        assert_eq!(builtin::OBJECT.distance_from_root(), 0);
        assert_eq!(builtin::STRING.distance_from_root(), 1);
        assert_eq!(builtin::LONG.distance_from_root(), 2);
        assert_eq!(SQUARE.distance_from_root(), 3);
    }

    #[test]
    fn identity_equality() {
        static OTHER_SHAPE: Class = Class::new("Shape", &builtin::OBJECT);
        assert_eq!(SHAPE, SHAPE);
        assert_ne!(SHAPE, OTHER_SHAPE);
    }

    #[test]
    fn subclass_walks_the_chain() {
        assert!(SQUARE.is_subclass_of(&SHAPE));
        assert!(SQUARE.is_subclass_of(&builtin::OBJECT));
        assert!(!SHAPE.is_subclass_of(&SQUARE));
        assert!(!builtin::LONG.is_subclass_of(&SHAPE));
    }
}

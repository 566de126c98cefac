use std::fmt;

use crate::value::{Kind, Value};

/// Ordered container consumed by index.
///
/// This is the seam to list containers living outside the value model: the
/// engine only ever asks for the size, the element at an index and the
/// declared element kind, and iterates in insertion order.
pub trait IndexedList: fmt::Debug + Send + Sync {
    fn size(&self) -> usize;

    /// `None` only when the container cannot produce an element it claims to hold.
    fn element_at(&self, index: usize) -> Option<Value>;

    fn element_kind(&self) -> Kind;
}

impl IndexedList for Vec<Value> {
    fn size(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: usize) -> Option<Value> {
        self.get(index).cloned()
    }

    // a generic collection erases its element type
    fn element_kind(&self) -> Kind {
        Kind::GenericObject
    }
}

macro_rules! impl_primitive_list {
    ($ty:ty, $kind:ident) => {
        impl IndexedList for Vec<$ty> {
            fn size(&self) -> usize {
                self.len()
            }

            fn element_at(&self, index: usize) -> Option<Value> {
                self.get(index).map(|v| Value::$kind(*v))
            }

            fn element_kind(&self) -> Kind {
                Kind::$kind
            }
        }
    };
}

impl_primitive_list!(bool, Boolean);
impl_primitive_list!(char, Char);
impl_primitive_list!(i8, Byte);
impl_primitive_list!(i16, Short);
impl_primitive_list!(i32, Int);
impl_primitive_list!(i64, Long);
impl_primitive_list!(f32, Float);
impl_primitive_list!(f64, Double);

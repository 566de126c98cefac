mod class;
mod kind;
mod list;
mod object;

use std::sync::Arc;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use derive_more::Display;
use num_bigint::BigInt;

pub use class::{builtin, Class};
pub use kind::{classify, Kind, Magnitude};
pub use list::IndexedList;
pub use object::{EnumConstant, Object};

#[derive(Display, Debug, Clone)]
pub enum Value {
    #[display("null")]
    Null,

    #[display("{}", _0)]
    Boolean(bool),

    #[display("{:?}", _0)]
    Char(char),

    #[display("{}i8", _0)]
    Byte(i8),

    #[display("{}i16", _0)]
    Short(i16),

    #[display("{}", _0)]
    Int(i32),

    #[display("{}i64", _0)]
    Long(i64),

    #[display("{}f32", _0)]
    Float(f32),

    #[display("{:?}", _0)]
    Double(f64),

    #[display("{}n", _0)]
    BigInteger(BigInt),

    #[display("{}m", _0)]
    BigDecimal(BigDecimal),

    #[display("{}", _0)]
    Enum(EnumConstant),

    #[display("{:?}", _0)]
    String(String),

    #[display("class({})", _0)]
    ClassRef(&'static Class),

    #[display("@{}", _0.to_rfc3339())]
    Date(DateTime<Utc>),

    #[display("{}", _0)]
    Array(Array),

    #[display("list({})", format_list(&**_0))]
    Sequence(Arc<dyn IndexedList>),

    #[display("{:?}", _0)]
    Object(Arc<dyn Object>),
}

/// Fixed-length array with a declared element kind.
#[derive(Display, Debug, Clone)]
#[display("[{}]", format_items(items))]
pub struct Array {
    element: Kind,
    items: Vec<Value>,
}

impl Array {
    pub fn new(element: Kind, items: Vec<Value>) -> Self {
        Array { element, items }
    }

    /// Array whose declared element kind is sampled from its items.
    pub fn of(items: Vec<Value>) -> Self {
        let element = Kind::common(&items);
        Array { element, items }
    }

    pub fn element(&self) -> &Kind {
        &self.element
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Value {
    pub fn array(element: Kind, items: Vec<Value>) -> Value {
        Value::Array(Array::new(element, items))
    }

    /// Ordered collection of arbitrary values.
    pub fn sequence(items: Vec<Value>) -> Value {
        Value::Sequence(Arc::new(items))
    }

    /// Sequence backed by any indexed container.
    pub fn list<L: IndexedList + 'static>(list: L) -> Value {
        Value::Sequence(Arc::new(list))
    }

    pub fn object<O: Object + 'static>(object: O) -> Value {
        Value::Object(Arc::new(object))
    }

    pub fn kind(&self) -> Kind {
        classify(self)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Sequence(_))
    }

    /// Runtime class of the value, `None` for null.
    pub fn runtime_class(&self) -> Option<&'static Class> {
        let class = match self {
            Value::Null => return None,
            Value::Boolean(_) => &builtin::BOOLEAN,
            Value::Char(_) => &builtin::CHARACTER,
            Value::Byte(_) => &builtin::BYTE,
            Value::Short(_) => &builtin::SHORT,
            Value::Int(_) => &builtin::INTEGER,
            Value::Long(_) => &builtin::LONG,
            Value::Float(_) => &builtin::FLOAT,
            Value::Double(_) => &builtin::DOUBLE,
            Value::BigInteger(_) => &builtin::BIG_INTEGER,
            Value::BigDecimal(_) => &builtin::BIG_DECIMAL,
            Value::Enum(constant) => constant.class(),
            Value::String(_) => &builtin::STRING,
            Value::ClassRef(_) => &builtin::CLASS,
            Value::Date(_) => &builtin::DATE,
            Value::Array(_) => &builtin::ARRAY,
            Value::Sequence(_) => &builtin::LIST,
            Value::Object(object) => object.class(),
        };
        Some(class)
    }
}

macro_rules! impl_from_scalar {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(v)
            }
        }

        impl From<Vec<$ty>> for Value {
            fn from(items: Vec<$ty>) -> Self {
                let items = items.into_iter().map(Value::$variant).collect();
                Value::Array(Array::new(Kind::$variant, items))
            }
        }
    };
}

impl_from_scalar!(bool, Boolean);
impl_from_scalar!(char, Char);
impl_from_scalar!(i8, Byte);
impl_from_scalar!(i16, Short);
impl_from_scalar!(i32, Int);
impl_from_scalar!(i64, Long);
impl_from_scalar!(f32, Float);
impl_from_scalar!(f64, Double);
impl_from_scalar!(String, String);
impl_from_scalar!(BigInt, BigInteger);
impl_from_scalar!(BigDecimal, BigDecimal);
impl_from_scalar!(DateTime<Utc>, Date);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        let items = items.into_iter().map(Value::from).collect();
        Value::Array(Array::new(Kind::String, items))
    }
}

impl From<EnumConstant> for Value {
    fn from(v: EnumConstant) -> Self {
        Value::Enum(v)
    }
}

impl From<&'static Class> for Value {
    fn from(v: &'static Class) -> Self {
        Value::ClassRef(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

fn format_items(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_list(list: &dyn IndexedList) -> String {
    (0..list.size())
        .map(|i| match list.element_at(i) {
            Some(v) => v.to_string(),
            None => "?".to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

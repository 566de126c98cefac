use derive_more::Display;

use crate::value::{class::Class, Value};

/// Closed classification of a value's comparison-relevant type.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Null,
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    BigInteger,
    BigDecimal,

    #[display("Enum<{}>", _0)]
    Enum(&'static Class),

    String,
    ClassRef,
    Date,

    #[display("Array<{}>", _0)]
    Array(Box<Kind>),

    #[display("Sequence<{}>", _0)]
    Sequence(Box<Kind>),

    GenericObject,
}

/// How much of the arithmetic distance a comparison result carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    /// The result is the exact difference between the operands.
    ExactDifference,
    /// The result is only ever `-1`, `0` or `1`.
    SignOnly,
}

impl Kind {
    pub fn array_of(element: Kind) -> Self {
        Kind::Array(Box::new(element))
    }

    pub fn sequence_of(element: Kind) -> Self {
        Kind::Sequence(Box::new(element))
    }

    pub fn magnitude(&self) -> Magnitude {
        use Kind::*;
        match self {
            Boolean | Char | Byte | Short | Int | String | Enum(_) => Magnitude::ExactDifference,
            Null | Long | Float | Double | BigInteger | BigDecimal | Date | ClassRef
            | GenericObject => Magnitude::SignOnly,
            Array(element) | Sequence(element) => element.magnitude(),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Kind::Array(_) | Kind::Sequence(_))
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, Kind::Float | Kind::Double)
    }

    pub fn element(&self) -> Option<&Kind> {
        match self {
            Kind::Array(element) | Kind::Sequence(element) => Some(element),
            _ => None,
        }
    }

    /// Innermost element kind of a composite, or the kind itself.
    pub fn leaf(&self) -> &Kind {
        match self {
            Kind::Array(element) | Kind::Sequence(element) => element.leaf(),
            _ => self,
        }
    }

    /// Nesting depth. `None` when the chain ends in an erased element type,
    /// because such a slot may hold a composite of any depth.
    pub fn rank(&self) -> Option<usize> {
        match self {
            Kind::Array(element) | Kind::Sequence(element) => element.rank().map(|r| r + 1),
            Kind::GenericObject => None,
            _ => Some(0),
        }
    }

    /// The kind every non-null item shares, `GenericObject` when they
    /// disagree or there is nothing to sample.
    pub fn common<'a>(items: impl IntoIterator<Item = &'a Value>) -> Kind {
        let mut common: Option<Kind> = None;
        for item in items {
            let kind = classify(item);
            if kind == Kind::Null {
                continue;
            }
            match &common {
                None => common = Some(kind),
                Some(seen) if *seen == kind => {}
                Some(_) => return Kind::GenericObject,
            }
        }
        common.unwrap_or(Kind::GenericObject)
    }
}

pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Null => Kind::Null,
        Value::Boolean(_) => Kind::Boolean,
        Value::Char(_) => Kind::Char,
        Value::Byte(_) => Kind::Byte,
        Value::Short(_) => Kind::Short,
        Value::Int(_) => Kind::Int,
        Value::Long(_) => Kind::Long,
        Value::Float(_) => Kind::Float,
        Value::Double(_) => Kind::Double,
        Value::BigInteger(_) => Kind::BigInteger,
        Value::BigDecimal(_) => Kind::BigDecimal,
        Value::Enum(constant) => Kind::Enum(constant.class()),
        Value::String(_) => Kind::String,
        Value::ClassRef(_) => Kind::ClassRef,
        Value::Date(_) => Kind::Date,
        Value::Array(array) => Kind::array_of(array.element().clone()),
        Value::Sequence(list) => Kind::sequence_of(list.element_kind()),
        Value::Object(_) => Kind::GenericObject,
    }
}

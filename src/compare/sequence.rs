//! Element-wise comparison of arrays and sequences.
//!
//! Dispatch is structural: an array and a sequence holding the same elements
//! compare as equal. Every element pair goes back through the whole engine,
//! so nesting depth is unbounded and jagged shapes need no special casing.

use std::borrow::Cow;

use log::trace;

use crate::{
    compare::{compare_values, scalar::length_difference, scalar::signum, CompareOptions},
    error::{Error, Result},
    value::{IndexedList, Kind, Magnitude, Value},
};

/// Borrowed view over the elements of an array or a sequence.
#[derive(Clone, Copy)]
pub(crate) enum Elements<'a> {
    Slice(&'a [Value]),
    List(&'a dyn IndexedList),
}

impl<'a> Elements<'a> {
    pub fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(array) => Some(Elements::Slice(array.items())),
            Value::Sequence(list) => Some(Elements::List(list.as_ref())),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Elements::Slice(items) => items.len(),
            Elements::List(list) => list.size(),
        }
    }

    pub fn get(&self, index: usize) -> Result<Cow<'a, Value>> {
        let element = match self {
            Elements::Slice(items) => items.get(index).map(Cow::Borrowed),
            Elements::List(list) => list.element_at(index).map(Cow::Owned),
        };
        element.ok_or(Error::ElementUnavailable {
            index,
            size: self.len(),
        })
    }
}

/// Both operands of a composite comparison, with the prefix each one is
/// bounded to.
pub(crate) struct Operands<'a> {
    pub l: Elements<'a>,
    pub l_len: usize,
    pub r: Elements<'a>,
    pub r_len: usize,
    pub l_kind: Kind,
    pub r_kind: Kind,
}

impl<'a> Operands<'a> {
    /// Fails with `UnsupportedKind` when either side is not a composite.
    pub fn new(
        l: &'a Value,
        l_len: Option<usize>,
        r: &'a Value,
        r_len: Option<usize>,
        operation: &'static str,
    ) -> Result<Self> {
        let (l_kind, r_kind) = (l.kind(), r.kind());
        let l_elements =
            Elements::of(l).ok_or_else(|| Error::UnsupportedKind(l_kind.clone(), operation))?;
        let r_elements =
            Elements::of(r).ok_or_else(|| Error::UnsupportedKind(r_kind.clone(), operation))?;

        Ok(Operands {
            l_len: bounded(&l_elements, l_len)?,
            l: l_elements,
            r_len: bounded(&r_elements, r_len)?,
            r: r_elements,
            l_kind,
            r_kind,
        })
    }

    /// Ranks are only ever known to differ when both chains are fully declared.
    pub fn rank_mismatch(&self) -> Option<i64> {
        match (self.l_kind.rank(), self.r_kind.rank()) {
            (Some(l), Some(r)) if l != r => {
                trace!(
                    "rank mismatch between {} and {}",
                    self.l_kind,
                    self.r_kind
                );
                Some(signum(l.cmp(&r)))
            }
            _ => None,
        }
    }

    pub fn length_order(&self) -> i64 {
        let exact = self.l_kind.magnitude() == Magnitude::ExactDifference
            && self.r_kind.magnitude() == Magnitude::ExactDifference;
        let order = length_difference(self.l_len, self.r_len);
        if exact {
            order
        } else {
            order.signum()
        }
    }
}

fn bounded(elements: &Elements, len: Option<usize>) -> Result<usize> {
    let size = elements.len();
    match len {
        None => Ok(size),
        Some(len) if len <= size => Ok(len),
        Some(len) => {
            trace!("prefix {} is longer than the sequence ({})", len, size);
            Err(Error::PrefixOutOfBounds { len, size })
        }
    }
}

pub(crate) fn compare_composites(
    l: &Value,
    l_len: Option<usize>,
    r: &Value,
    r_len: Option<usize>,
    options: &CompareOptions,
) -> Result<i64> {
    let operands = Operands::new(l, l_len, r, r_len, "compare")?;
    if let Some(order) = operands.rank_mismatch() {
        return Ok(order);
    }
    compare_sequences(&operands, options)
}

/// First non-zero element comparison, else the length tie-break.
pub(crate) fn compare_sequences(operands: &Operands, options: &CompareOptions) -> Result<i64> {
    for index in 0..operands.l_len.min(operands.r_len) {
        let l = operands.l.get(index)?;
        let r = operands.r.get(index)?;
        let order = compare_values(&l, &r, options)?;
        if order != 0 {
            return Ok(order);
        }
    }
    Ok(operands.length_order())
}

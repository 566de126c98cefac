//! Deep comparison and equality of runtime values.
//!
//! [`compare`] orders any two [`Value`]s, [`equals`] decides whether they are
//! the same. Both walk arrays and sequences to any depth, sort null first,
//! and optionally tolerate an epsilon on floating-point leaves or fold the
//! case of character and string leaves.

pub mod ast;
pub mod command;
pub mod compare;
pub mod config;
pub mod equality;
pub mod error;
pub mod parse;
pub mod span;
pub mod token;
pub mod value;

pub use compare::{
    compare, compare_ignore_case, compare_ignore_case_prefix, compare_prefix,
    compare_prefix_with, compare_prefix_with_epsilon, compare_prefix_with_options, compare_with,
    compare_with_epsilon, compare_with_options, CompareOptions,
};
pub use equality::{
    equals, equals_case, equals_ignore_case, equals_ignore_case_prefix, equals_prefix,
    equals_prefix_with_options, equals_with_epsilon, equals_with_options, EqualityOptions,
};
pub use error::{Error, Result};
pub use value::{Kind, Value};

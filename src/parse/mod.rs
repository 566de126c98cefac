mod context;
mod error;
mod lex;
mod parser;

pub use error::ParseError;
pub use lex::{lex, LexItem};
pub use parser::{parse, parse_value_only};

use crate::ast::Command;
use crate::value::Value;

pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let items = lex(input)?;
    parse(input, &items)
}

pub fn parse_literal(input: &str) -> Result<Value, ParseError> {
    let items = lex(input)?;
    parse_value_only(input, &items)
}

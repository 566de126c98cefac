use derive_more::Display;

use crate::value::Value;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    #[display("compare")]
    Compare,

    #[display("equals")]
    Equals,
}

/// One line of input: an operation, its two operands and the modifiers
/// written after them.
#[derive(Debug, Clone)]
pub struct Command {
    pub kind: CommandKind,
    pub lhs: Value,
    pub rhs: Value,
    pub epsilon: Option<f64>,
    pub ignore_case: bool,
    pub prefix: Option<(usize, usize)>,
}

impl Command {
    pub fn new(kind: CommandKind, lhs: Value, rhs: Value) -> Self {
        Command {
            kind,
            lhs,
            rhs,
            epsilon: None,
            ignore_case: false,
            prefix: None,
        }
    }
}

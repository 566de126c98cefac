use derive_more::Display;
use log::trace;

use crate::ast::{Command, CommandKind};
use crate::compare::{compare_prefix_with_options, compare_with_options, CompareOptions};
use crate::config::Config;
use crate::equality::{equals_prefix_with_options, equals_with_options, EqualityOptions};
use crate::error::Result;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    #[display("{}", _0)]
    Ordering(i64),

    #[display("{}", _0)]
    Equality(bool),
}

/// Evaluates a parsed command. Modifiers written on the command win over the
/// defaults in `config`.
pub fn run(command: &Command, config: &Config) -> Result<Outcome> {
    let epsilon = command.epsilon.or(config.default_epsilon);
    let ignore_case = command.ignore_case || config.ignore_case;
    trace!(
        "{} with epsilon {:?}, ignore_case {}, prefix {:?}",
        command.kind,
        epsilon,
        ignore_case,
        command.prefix
    );

    let (l, r) = (&command.lhs, &command.rhs);
    let outcome = match command.kind {
        CommandKind::Compare => {
            let options = CompareOptions {
                epsilon,
                ignore_case,
                comparator: None,
            };
            let order = match command.prefix {
                Some((l_len, r_len)) => compare_prefix_with_options(l, l_len, r, r_len, &options)?,
                None => compare_with_options(l, r, &options)?,
            };
            Outcome::Ordering(order)
        }
        CommandKind::Equals => {
            let options = EqualityOptions {
                epsilon,
                ignore_case,
            };
            let equal = match command.prefix {
                Some((l_len, r_len)) => equals_prefix_with_options(l, l_len, r, r_len, &options)?,
                None => equals_with_options(l, r, &options)?,
            };
            Outcome::Equality(equal)
        }
    };
    Ok(outcome)
}

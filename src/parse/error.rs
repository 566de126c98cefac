use crate::span::Span;
use crate::token::Token;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unexpected character in position {0}")]
    UnexpectedCharacter(Span),

    #[error("Unknown keyword `{0}` at position {1}")]
    UnknownKeyword(String, Span),

    #[error("Unexpected token `{0}` at position {1} {}", diagnostic_expect_token(.2))]
    UnexpectedToken(Token, Span, Option<Token>),

    #[error("String starts at {0} is not closed")]
    UnclosedString(usize),

    #[error("Character literal starts at {0} is not closed")]
    UnclosedChar(usize),

    #[error("Invalid escape or character literal at position {0}")]
    InvalidLiteral(Span),

    #[error("Unable to parse to number at position {0}")]
    ParseToNumber(Span),

    #[error("Unable to parse to date at position {0}: {1}")]
    ParseToDate(Span, chrono::ParseError),

    #[error("Unknown built-in class `{0}` at position {1}")]
    UnknownClass(String, Span),

    #[error("Unable to parse the next value because of EOF {}", diagnostic_expect_token(.0))]
    Eof(Option<Token>),

    #[error("Parse have leftover tokens start with {0} at {1}")]
    Unfinished(Token, Span),
}

impl ParseError {
    pub fn get_source_start(&self, input: &str) -> (usize, usize) {
        use ParseError::*;
        match self {
            UnexpectedCharacter(s) => s.to_start_row_col(input),
            UnknownKeyword(_, s) => s.to_start_row_col(input),
            UnexpectedToken(_, s, _) => s.to_start_row_col(input),
            UnclosedString(u) | UnclosedChar(u) => Span::new(*u, *u).to_start_row_col(input),
            InvalidLiteral(s) => s.to_start_row_col(input),
            ParseToNumber(s) => s.to_start_row_col(input),
            ParseToDate(s, _) => s.to_start_row_col(input),
            UnknownClass(_, s) => s.to_start_row_col(input),
            Eof(_) => (0, 0),
            Unfinished(_, s) => s.to_start_row_col(input),
        }
    }
}

fn diagnostic_expect_token(o: &Option<Token>) -> String {
    match o {
        None => "".to_string(),
        Some(t) => format!(", expected token `{:?}`", t),
    }
}

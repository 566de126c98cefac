use chrono::{DateTime, Utc};
use phf::phf_map;

use super::context::Context;
use super::error::ParseError;
use super::lex::{unescape, LexItem};

use crate::ast::{Command, CommandKind};
use crate::span::Span;
use crate::token::Token;
use crate::value::{builtin, Array, Class, Kind, Value};

static BUILTIN_CLASSES: phf::Map<&'static str, &'static Class> = phf_map! {
    "Object" => &builtin::OBJECT,
    "Number" => &builtin::NUMBER,
    "Byte" => &builtin::BYTE,
    "Short" => &builtin::SHORT,
    "Integer" => &builtin::INTEGER,
    "Long" => &builtin::LONG,
    "Float" => &builtin::FLOAT,
    "Double" => &builtin::DOUBLE,
    "BigInteger" => &builtin::BIG_INTEGER,
    "BigDecimal" => &builtin::BIG_DECIMAL,
    "Boolean" => &builtin::BOOLEAN,
    "Character" => &builtin::CHARACTER,
    "String" => &builtin::STRING,
    "Class" => &builtin::CLASS,
    "Date" => &builtin::DATE,
    "Enum" => &builtin::ENUM,
    "Array" => &builtin::ARRAY,
    "List" => &builtin::LIST,
};

const TYPE_TOKENS: &[Token] = &[
    Token::TypeBool,
    Token::TypeChar,
    Token::TypeI8,
    Token::TypeI16,
    Token::TypeI32,
    Token::TypeI64,
    Token::TypeF32,
    Token::TypeF64,
    Token::TypeBigInt,
    Token::TypeBigDec,
    Token::TypeString,
    Token::TypeDate,
    Token::TypeObject,
];

pub fn parse(input: &str, items: &[LexItem]) -> Result<Command, ParseError> {
    let mut state = Context::new(input, items);
    let command = parse_command(&mut state)?;
    match state.get_curr() {
        Err(_) => Ok(command),
        Ok(li) => Err(ParseError::Unfinished(li.token, li.span)),
    }
}

/// Parses a single value literal.
pub fn parse_value_only(input: &str, items: &[LexItem]) -> Result<Value, ParseError> {
    let mut state = Context::new(input, items);
    let value = parse_value(&mut state, None)?;
    match state.get_curr() {
        Err(_) => Ok(value),
        Ok(li) => Err(ParseError::Unfinished(li.token, li.span)),
    }
}

fn parse_command(state: &mut Context) -> Result<Command, ParseError> {
    let li = *state.get_curr()?;
    let kind = match li.token {
        Token::Compare => CommandKind::Compare,
        Token::Equals => CommandKind::Equals,
        _ => {
            return Err(ParseError::UnexpectedToken(
                li.token,
                li.span,
                Some(Token::Compare),
            ))
        }
    };
    state.advance();

    let lhs = parse_value(state, None)?;
    state.consume_token(Token::Comma)?;
    let rhs = parse_value(state, None)?;

    let mut command = Command::new(kind, lhs, rhs);
    while !state.is_at_end() {
        let li = *state.get_curr()?;
        state.advance();
        match li.token {
            Token::Epsilon => command.epsilon = Some(parse_epsilon(state)?),
            Token::IgnoreCase => command.ignore_case = true,
            Token::Prefix => {
                let l_len = parse_usize(state)?;
                let r_len = parse_usize(state)?;
                command.prefix = Some((l_len, r_len));
            }
            _ => return Err(ParseError::UnexpectedToken(li.token, li.span, None)),
        }
    }

    Ok(command)
}

fn parse_epsilon(state: &mut Context) -> Result<f64, ParseError> {
    let span = state.get_curr()?.span;
    match parse_number(state, Some(&Kind::Double))? {
        Value::Double(v) => Ok(v),
        Value::Float(v) => Ok(v as f64),
        _ => Err(ParseError::ParseToNumber(span)),
    }
}

fn parse_usize(state: &mut Context) -> Result<usize, ParseError> {
    let li = state.consume_token(Token::Number)?;
    li.span
        .str_from_source(state.get_input())
        .parse()
        .map_err(|_| ParseError::ParseToNumber(li.span))
}

/// `hint` is the leaf kind declared by an enclosing typed array.
fn parse_value(state: &mut Context, hint: Option<&Kind>) -> Result<Value, ParseError> {
    let li = *state.get_curr()?;
    let input = state.get_input();
    let value = match li.token {
        Token::Null => Value::Null,
        Token::True => Value::Boolean(true),
        Token::False => Value::Boolean(false),
        Token::Char => parse_char(li, input)?,
        Token::String => {
            let text = li.span.str_from_source(input);
            let body = unescape(&text[1..text.len() - 1])
                .ok_or(ParseError::InvalidLiteral(li.span))?;
            Value::String(body)
        }
        Token::Date => parse_date(li, input)?,
        Token::Number | Token::Minus | Token::NaN | Token::Inf => {
            return parse_number(state, hint);
        }
        Token::LSquareParen => return parse_array(state, hint),
        Token::List => return parse_list(state),
        Token::Class => return parse_class(state),
        token if TYPE_TOKENS.contains(&token) => {
            state.advance();
            let leaf = type_kind(token);
            return parse_array(state, Some(&leaf));
        }
        _ => return Err(ParseError::UnexpectedToken(li.token, li.span, None)),
    };
    state.advance();
    Ok(value)
}

fn type_kind(token: Token) -> Kind {
    match token {
        Token::TypeBool => Kind::Boolean,
        Token::TypeChar => Kind::Char,
        Token::TypeI8 => Kind::Byte,
        Token::TypeI16 => Kind::Short,
        Token::TypeI32 => Kind::Int,
        Token::TypeI64 => Kind::Long,
        Token::TypeF32 => Kind::Float,
        Token::TypeF64 => Kind::Double,
        Token::TypeBigInt => Kind::BigInteger,
        Token::TypeBigDec => Kind::BigDecimal,
        Token::TypeString => Kind::String,
        Token::TypeDate => Kind::Date,
        _ => Kind::GenericObject,
    }
}

fn parse_char(li: LexItem, input: &str) -> Result<Value, ParseError> {
    let text = li.span.str_from_source(input);
    let body =
        unescape(&text[1..text.len() - 1]).ok_or(ParseError::InvalidLiteral(li.span))?;
    let mut chars = body.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Value::Char(c)),
        _ => Err(ParseError::InvalidLiteral(li.span)),
    }
}

fn parse_date(li: LexItem, input: &str) -> Result<Value, ParseError> {
    let text = &li.span.str_from_source(input)[1..];
    let date =
        DateTime::parse_from_rfc3339(text).map_err(|e| ParseError::ParseToDate(li.span, e))?;
    Ok(Value::Date(date.with_timezone(&Utc)))
}

fn parse_number(state: &mut Context, hint: Option<&Kind>) -> Result<Value, ParseError> {
    let negative = state.peek(&[Token::Minus]);
    if negative {
        state.advance();
    }

    let li = *state.get_curr()?;
    let text = li.span.str_from_source(state.get_input());
    let (digits, suffix) = match li.token {
        Token::Number => split_suffix(text),
        Token::NaN | Token::Inf => (text, ""),
        _ => {
            return Err(ParseError::UnexpectedToken(
                li.token,
                li.span,
                Some(Token::Number),
            ))
        }
    };
    state.advance();

    let kind = match suffix {
        "" => match hint {
            Some(kind) if is_numeric(kind) => kind.clone(),
            _ if digits.contains('.') || li.token != Token::Number => Kind::Double,
            _ => Kind::Int,
        },
        "i8" => Kind::Byte,
        "i16" => Kind::Short,
        "i32" => Kind::Int,
        "i64" => Kind::Long,
        "f32" => Kind::Float,
        "f64" => Kind::Double,
        "n" => Kind::BigInteger,
        "m" => Kind::BigDecimal,
        _ => return Err(ParseError::ParseToNumber(li.span)),
    };

    let literal = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };
    number_value(&literal, &kind).ok_or(ParseError::ParseToNumber(li.span))
}

fn split_suffix(text: &str) -> (&str, &str) {
    let at = text
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(text.len());
    text.split_at(at)
}

fn is_numeric(kind: &Kind) -> bool {
    matches!(
        kind,
        Kind::Byte
            | Kind::Short
            | Kind::Int
            | Kind::Long
            | Kind::Float
            | Kind::Double
            | Kind::BigInteger
            | Kind::BigDecimal
    )
}

fn number_value(literal: &str, kind: &Kind) -> Option<Value> {
    let value = match kind {
        Kind::Byte => Value::Byte(literal.parse().ok()?),
        Kind::Short => Value::Short(literal.parse().ok()?),
        Kind::Int => Value::Int(literal.parse().ok()?),
        Kind::Long => Value::Long(literal.parse().ok()?),
        Kind::Float => Value::Float(literal.parse().ok()?),
        Kind::Double => Value::Double(literal.parse().ok()?),
        Kind::BigInteger => Value::BigInteger(literal.parse().ok()?),
        Kind::BigDecimal => Value::BigDecimal(literal.parse().ok()?),
        _ => return None,
    };
    Some(value)
}

fn parse_array(state: &mut Context, leaf: Option<&Kind>) -> Result<Value, ParseError> {
    let items = parse_comma_list(state, Token::LSquareParen, Token::RSquareParen, |state| {
        parse_value(state, leaf)
    })?;

    let element = match leaf {
        Some(Kind::GenericObject) => Kind::GenericObject,
        Some(leaf) if items.iter().all(Value::is_null) => leaf.clone(),
        _ => Kind::common(&items),
    };
    Ok(Value::Array(Array::new(element, items)))
}

fn parse_list(state: &mut Context) -> Result<Value, ParseError> {
    state.consume_token(Token::List)?;
    let items = parse_comma_list(state, Token::LRoundParen, Token::RRoundParen, |state| {
        parse_value(state, None)
    })?;
    Ok(Value::sequence(items))
}

fn parse_class(state: &mut Context) -> Result<Value, ParseError> {
    state.consume_token(Token::Class)?;
    state.consume_token(Token::LRoundParen)?;
    let li = state.consume_token(Token::String)?;
    state.consume_token(Token::RRoundParen)?;

    let text = li.span.str_from_source(state.get_input());
    let name = &text[1..text.len() - 1];
    match BUILTIN_CLASSES.get(name) {
        Some(class) => Ok(Value::ClassRef(class)),
        None => Err(ParseError::UnknownClass(
            name.to_string(),
            Span::new(li.span.start + 1, li.span.end - 1),
        )),
    }
}

fn parse_comma_list<T, F>(
    state: &mut Context,
    open: Token,
    close: Token,
    mut parse_item: F,
) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&mut Context) -> Result<T, ParseError>,
{
    state.consume_token(open)?;
    let mut items = vec![];
    while !state.peek_token(close) {
        items.push(parse_item(state)?);
        if !state.peek_token(close) {
            state.consume_token(Token::Comma)?;
        }
    }
    state.consume_token(close)?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::lex;

    fn value(input: &str) -> Value {
        let items = lex(input).unwrap();
        parse_value_only(input, &items).unwrap()
    }

    fn command(input: &str) -> Command {
        let items = lex(input).unwrap();
        parse(input, &items).unwrap()
    }

    #[test]
    fn scalars() {
        assert!(matches!(value("null"), Value::Null));
        assert!(matches!(value("-128i8"), Value::Byte(-128)));
        assert!(matches!(value("7"), Value::Int(7)));
        assert!(matches!(value("7i64"), Value::Long(7)));
        assert!(matches!(value("2.5"), Value::Double(v) if v == 2.5));
        assert!(matches!(value("NaN"), Value::Double(v) if v.is_nan()));
        assert!(matches!(value("-inf"), Value::Double(v) if v == f64::NEG_INFINITY));
        assert!(matches!(value("'\\n'"), Value::Char('\n')));
        assert!(matches!(value("\"hi\""), Value::String(s) if s == "hi"));
        assert!(matches!(
            value("class(\"Long\")"),
            Value::ClassRef(c) if c.name() == "Long"
        ));

        let big = "123456789012345678901234567890n";
        assert_eq!(value(big).to_string(), big);
        assert_eq!(
            value("@2024-03-01T10:00:00+02:00").to_string(),
            "@2024-03-01T08:00:00+00:00"
        );
    }

    #[test]
    fn typed_arrays_convert_their_numbers() {
        let v = value("f32[1, NaN, -0.5]");
        assert_eq!(v.kind(), Kind::array_of(Kind::Float));
        let Value::Array(array) = v else {
            panic!("expected an array");
        };
        assert!(matches!(array.items()[0], Value::Float(f) if f == 1.0));
        assert!(matches!(array.items()[1], Value::Float(f) if f.is_nan()));
    }

    #[test]
    fn nested_and_jagged_arrays() {
        let v = value("bool[[true], [false, true], []]");
        assert_eq!(v.kind(), Kind::array_of(Kind::array_of(Kind::Boolean)));

        let v = value("[[1, 2], [3]]");
        assert_eq!(v.kind(), Kind::array_of(Kind::array_of(Kind::Int)));

        assert_eq!(value("object[1, 2]").kind(), Kind::array_of(Kind::GenericObject));
        assert_eq!(value("i8[]").kind(), Kind::array_of(Kind::Byte));
        assert_eq!(value("[]").kind(), Kind::array_of(Kind::GenericObject));
    }

    #[test]
    fn lists_are_erased() {
        let v = value("list(1, \"a\", null)");
        assert_eq!(v.kind(), Kind::sequence_of(Kind::GenericObject));
    }

    #[test]
    fn commands_with_modifiers() {
        let c = command("equals \"abc\", \"ABC\" ignore_case");
        assert_eq!(c.kind, CommandKind::Equals);
        assert!(c.ignore_case);

        let c = command("compare [1.0], [1.05] epsilon 0.1 prefix 1 1");
        assert_eq!(c.kind, CommandKind::Compare);
        assert_eq!(c.epsilon, Some(0.1));
        assert_eq!(c.prefix, Some((1, 1)));
    }

    #[test]
    fn malformed_commands() {
        let input = "compare 1 2";
        let items = lex(input).unwrap();
        assert!(matches!(
            parse(input, &items),
            Err(ParseError::UnexpectedToken(Token::Number, _, Some(Token::Comma)))
        ));

        let input = "compare 1, 2 epsilon";
        let items = lex(input).unwrap();
        assert!(matches!(parse(input, &items), Err(ParseError::Eof(None))));

        let input = "compare 300i8, 1";
        let items = lex(input).unwrap();
        assert!(matches!(parse(input, &items), Err(ParseError::ParseToNumber(_))));

        let input = "compare class(\"Point\"), 1";
        let items = lex(input).unwrap();
        assert!(matches!(
            parse(input, &items),
            Err(ParseError::UnknownClass(name, _)) if name == "Point"
        ));
    }
}

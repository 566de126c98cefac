use phf::phf_map;

use super::error::ParseError;
use crate::span::Span;
use crate::token::Token;

static KEYWORDS: phf::Map<&'static str, Token> = phf_map! {
    "null" => Token::Null,
    "true" => Token::True,
    "false" => Token::False,
    "NaN" => Token::NaN,
    "inf" => Token::Inf,
    "list" => Token::List,
    "class" => Token::Class,

    "compare" => Token::Compare,
    "equals" => Token::Equals,
    "epsilon" => Token::Epsilon,
    "ignore_case" => Token::IgnoreCase,
    "prefix" => Token::Prefix,

    "bool" => Token::TypeBool,
    "char" => Token::TypeChar,
    "i8" => Token::TypeI8,
    "i16" => Token::TypeI16,
    "i32" => Token::TypeI32,
    "i64" => Token::TypeI64,
    "f32" => Token::TypeF32,
    "f64" => Token::TypeF64,
    "bigint" => Token::TypeBigInt,
    "bigdec" => Token::TypeBigDec,
    "string" => Token::TypeString,
    "date" => Token::TypeDate,
    "object" => Token::TypeObject,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexItem {
    pub span: Span,
    pub token: Token,
}

impl LexItem {
    pub fn new(token: Token, span: Span) -> Self {
        LexItem { token, span }
    }
}

fn is_identifier_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

fn is_date_char(c: char) -> bool {
    !(c.is_whitespace() || matches!(c, ',' | ']' | ')'))
}

pub fn lex(input: &str) -> Result<Vec<LexItem>, ParseError> {
    let chars = input.char_indices().collect::<Vec<_>>();
    let mut curr_pos = 0;
    let mut result = vec![];

    while let Some(&(offset, c)) = chars.get(curr_pos) {
        let item = match c {
            '[' => LexItem::new(Token::LSquareParen, Span::one(offset, c)),
            ']' => LexItem::new(Token::RSquareParen, Span::one(offset, c)),
            '(' => LexItem::new(Token::LRoundParen, Span::one(offset, c)),
            ')' => LexItem::new(Token::RRoundParen, Span::one(offset, c)),
            ',' => LexItem::new(Token::Comma, Span::one(offset, c)),
            '-' => LexItem::new(Token::Minus, Span::one(offset, c)),
            ' ' | '\t' | '\r' | '\n' => {
                curr_pos += 1;
                continue;
            }
            '\'' => lex_quoted(&chars, &mut curr_pos, '\'', Token::Char)
                .ok_or(ParseError::UnclosedChar(offset))?,
            '"' => lex_quoted(&chars, &mut curr_pos, '"', Token::String)
                .ok_or(ParseError::UnclosedString(offset))?,
            '@' => lex_while(&chars, &mut curr_pos, Token::Date, is_date_char),
            c if c.is_ascii_digit() => lex_while(&chars, &mut curr_pos, Token::Number, |c| {
                c == '.' || is_identifier_char(c)
            }),
            c if is_identifier_char(c) => lex_keyword(input, &chars, &mut curr_pos)?,
            _ => return Err(ParseError::UnexpectedCharacter(Span::one(offset, c))),
        };
        result.push(item);
        curr_pos += 1;
    }

    Ok(result)
}

// Leaves `pos` on the last character of the token.
fn lex_while(
    chars: &[(usize, char)],
    pos: &mut usize,
    token: Token,
    accept: impl Fn(char) -> bool,
) -> LexItem {
    let (start, _) = chars[*pos];

    while let Some(&(_, c)) = chars.get(*pos + 1) {
        if !accept(c) {
            break;
        }
        *pos += 1;
    }

    let (last, c) = chars[*pos];
    LexItem::new(token, Span::new(start, last + c.len_utf8()))
}

fn lex_quoted(
    chars: &[(usize, char)],
    pos: &mut usize,
    quote: char,
    token: Token,
) -> Option<LexItem> {
    let (start, _) = chars[*pos];
    let mut escaped = false;

    loop {
        *pos += 1;
        let &(offset, c) = chars.get(*pos)?;
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            c if c == quote => return Some(LexItem::new(token, Span::new(start, offset + 1))),
            _ => {}
        }
    }
}

fn lex_keyword(
    input: &str,
    chars: &[(usize, char)],
    pos: &mut usize,
) -> Result<LexItem, ParseError> {
    let item = lex_while(chars, pos, Token::Null, is_identifier_char);
    let word = item.span.str_from_source(input);
    match KEYWORDS.get(word) {
        Some(token) => Ok(LexItem::new(*token, item.span)),
        None => Err(ParseError::UnknownKeyword(word.to_string(), item.span)),
    }
}

/// Decodes the body of a quoted literal, without its quotes.
pub fn unescape(body: &str) -> Option<String> {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let escaped = match chars.next()? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            c @ ('\\' | '\'' | '"') => c,
            _ => return None,
        };
        result.push(escaped);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).unwrap().into_iter().map(|li| li.token).collect()
    }

    #[test]
    fn command_line() {
        assert_eq!(
            tokens("compare i8[1, -2], list('a') epsilon 0.5 ignore_case"),
            vec![
                Token::Compare,
                Token::TypeI8,
                Token::LSquareParen,
                Token::Number,
                Token::Comma,
                Token::Minus,
                Token::Number,
                Token::RSquareParen,
                Token::Comma,
                Token::List,
                Token::LRoundParen,
                Token::Char,
                Token::RRoundParen,
                Token::Epsilon,
                Token::Number,
                Token::IgnoreCase,
            ]
        );
    }

    #[test]
    fn literal_spans() {
        let input = r#"1.5f32 "a\"b" @2024-01-01T00:00:00Z]"#;
        let items = lex(input).unwrap();
        let texts = items
            .iter()
            .map(|li| li.span.str_from_source(input))
            .collect::<Vec<_>>();
        assert_eq!(
            texts,
            vec!["1.5f32", r#""a\"b""#, "@2024-01-01T00:00:00Z", "]"]
        );
    }

    #[test]
    fn errors() {
        assert!(matches!(
            lex("\"open"),
            Err(ParseError::UnclosedString(0))
        ));
        assert!(matches!(lex("'x"), Err(ParseError::UnclosedChar(0))));
        assert!(matches!(
            lex("compare foo"),
            Err(ParseError::UnknownKeyword(word, _)) if word == "foo"
        ));
        assert!(matches!(
            lex("#"),
            Err(ParseError::UnexpectedCharacter(_))
        ));
    }

    #[test]
    fn escapes() {
        assert_eq!(unescape(r"a\nb\\").as_deref(), Some("a\nb\\"));
        assert_eq!(unescape(r"\'").as_deref(), Some("'"));
        assert_eq!(unescape(r"\q"), None);
        assert_eq!(unescape("\\"), None);
    }
}

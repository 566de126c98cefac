use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    LSquareParen,
    RSquareParen,
    LRoundParen,
    RRoundParen,
    Comma,
    Minus,

    Number,
    Char,
    String,
    Date,

    // literal keywords
    Null,
    True,
    False,
    NaN,
    Inf,
    List,
    Class,

    // command keywords
    Compare,
    Equals,
    Epsilon,
    IgnoreCase,
    Prefix,

    // element type names
    TypeBool,
    TypeChar,
    TypeI8,
    TypeI16,
    TypeI32,
    TypeI64,
    TypeF32,
    TypeF64,
    TypeBigInt,
    TypeBigDec,
    TypeString,
    TypeDate,
    TypeObject,
}

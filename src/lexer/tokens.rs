use lazy_static::lazy_static;
use num_bigint::BigInt;
use std::fmt::Display;

use crate::{Span, MK_SYMBOL};

#[derive(Clone, Copy)]
pub struct SymbolRule {
    pub pattern: &'static str,
    pub kind: TokenKind,
}

lazy_static! {
    /// Fixed-string rules ordered by descending pattern length, so the first
    /// pattern that prefixes the input is also the longest match. Patterns of
    /// equal length keep their declaration order.
    pub static ref SYMBOL_TABLE: Vec<SymbolRule> = {
        let mut table = vec![
            MK_SYMBOL!("+", TokenKind::Plus),
            MK_SYMBOL!("-", TokenKind::Minus),
            MK_SYMBOL!("*", TokenKind::Multiply),
            MK_SYMBOL!("/", TokenKind::Divide),
            MK_SYMBOL!("%", TokenKind::Modulo),
            MK_SYMBOL!("~", TokenKind::Not),
            MK_SYMBOL!("=", TokenKind::Equals),
            MK_SYMBOL!("<", TokenKind::LessThan),
            MK_SYMBOL!(">", TokenKind::GreaterThan),
            MK_SYMBOL!("<=", TokenKind::LessOrEqual),
            MK_SYMBOL!(">=", TokenKind::GreaterOrEqual),
            MK_SYMBOL!("==", TokenKind::DoubleEqual),
            MK_SYMBOL!("!=", TokenKind::NotEqual),
            MK_SYMBOL!("&", TokenKind::And),
            MK_SYMBOL!("|", TokenKind::Or),
            MK_SYMBOL!("(", TokenKind::LParen),
            MK_SYMBOL!(")", TokenKind::RParen),
            MK_SYMBOL!("[", TokenKind::LBracket),
            MK_SYMBOL!("]", TokenKind::RBracket),
            MK_SYMBOL!("{", TokenKind::BlockStart),
            MK_SYMBOL!("}", TokenKind::BlockEnd),
        ];
        table.sort_by(|a, b| b.pattern.len().cmp(&a.pattern.len()));
        table
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Operators
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /
    Modulo,   // %
    Not,      // ~
    Equals,   // =

    // Comparators
    LessThan,       // <
    GreaterThan,    // >
    LessOrEqual,    // <=
    GreaterOrEqual, // >=
    DoubleEqual,    // ==
    NotEqual,       // !=
    And,            // &
    Or,             // |

    // Brackets
    LParen,     // (
    RParen,     // )
    LBracket,   // [
    RBracket,   // ]
    BlockStart, // {
    BlockEnd,   // }

    Integer,
    Float,
    Comment,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Integer(i64),
    /// An integer literal too large for `i64`.
    BigInteger(BigInt),
    Float(f64),
    Text(String),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::None => write!(f, ""),
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::BigInteger(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{:?}", value),
            TokenValue::Text(text) => write!(f, "{:?}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: u32,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            TokenValue::None => write!(f, "{} (line {})", self.kind, self.line),
            _ => write!(f, "{}({}) (line {})", self.kind, self.value, self.line),
        }
    }
}

impl Token {
    /// The text this token was scanned from.
    ///
    /// `source` must be the string the token was produced from.
    pub fn lexeme<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start..self.span.end]
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, TokenKind::Integer | TokenKind::Float)
    }
}

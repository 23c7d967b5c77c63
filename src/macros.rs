//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SYMBOL!` - Creates an entry of the fixed symbol table
//!
//! These macros reduce boilerplate in the rule tables and the scanner.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's TokenValue
/// * `$line` - The line the lexeme starts on
/// * `$start`, `$end` - Byte offsets of the lexeme
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, TokenValue::Integer(42), 1, 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
            span: Span {
                start: $start,
                end: $end,
            },
        }
    };
}

/// Creates a fixed-string symbol rule.
///
/// # Example
///
/// ```ignore
/// let rule = MK_SYMBOL!("<=", TokenKind::LessOrEqual);
/// ```
#[macro_export]
macro_rules! MK_SYMBOL {
    ($pattern:literal, $kind:expr) => {
        SymbolRule {
            pattern: $pattern,
            kind: $kind,
        }
    };
}

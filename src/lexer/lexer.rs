use lazy_static::lazy_static;
use num_bigint::BigInt;
use regex::Regex;
use tracing::{debug, trace, warn};

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenValue, SYMBOL_TABLE};

pub type ValueBuilder = fn(&str) -> TokenValue;

/// A regex rule whose lexeme is turned into a typed value.
pub struct LiteralRule {
    kind: TokenKind,
    regex: Regex,
    build: ValueBuilder,
}

lazy_static! {
    /// Tried in order, before any symbol. Float has to come first or `12.5`
    /// would scan as `12` followed by `.5`.
    static ref LITERAL_RULES: Vec<LiteralRule> = vec![
        LiteralRule {
            kind: TokenKind::Float,
            regex: Regex::new(r"^(?:[0-9]*\.[0-9]+|[0-9]+\.[0-9]*)").unwrap(),
            build: float_builder,
        },
        LiteralRule {
            kind: TokenKind::Integer,
            regex: Regex::new(r"^[0-9]+").unwrap(),
            build: integer_builder,
        },
    ];
    static ref COMMENT: Regex = Regex::new(r"^#[^\r\n]*").unwrap();
}

// Both builders only ever see ASCII digit runs (with at most one point),
// which every parser below accepts.

fn integer_builder(lexeme: &str) -> TokenValue {
    match lexeme.parse::<i64>() {
        Ok(value) => TokenValue::Integer(value),
        Err(_) => TokenValue::BigInteger(lexeme.parse::<BigInt>().unwrap_or_default()),
    }
}

fn float_builder(lexeme: &str) -> TokenValue {
    TokenValue::Float(lexeme.parse::<f64>().unwrap_or_default())
}

/// Outcome of a single scanning step.
#[derive(Debug, Clone, PartialEq)]
pub enum Scanned {
    Token(Token),
    Error(Error),
    Whitespace,
    /// A run of line breaks, with its length.
    Newlines(u32),
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

/// Scans one unit of `source` starting at `state`.
///
/// Returns the scanned unit and the cursor after it, or `None` once `state`
/// is at the end of the input. The returned cursor is always strictly ahead
/// of `state`.
///
/// # Panics
///
/// Panics if `state.offset` is past the end of `source` or not on a char
/// boundary. Cursors returned by a previous `step` over the same source, and
/// `Position::start()`, always satisfy this.
pub fn step(source: &str, state: Position) -> Option<(Scanned, Position)> {
    let remaining = &source[state.offset..];
    let first = remaining.chars().next()?;

    if is_blank(first) {
        let len = remaining.len() - remaining.trim_start_matches(is_blank).len();
        return Some((Scanned::Whitespace, Position { offset: state.offset + len, ..state }));
    }

    if first == '\n' {
        let len = remaining.len() - remaining.trim_start_matches('\n').len();
        let next = Position { line: state.line + len as u32, offset: state.offset + len };
        return Some((Scanned::Newlines(len as u32), next));
    }

    for rule in LITERAL_RULES.iter() {
        if let Some(found) = rule.regex.find(remaining) {
            let end = state.offset + found.end();
            let value = (rule.build)(found.as_str());
            let token = MK_TOKEN!(rule.kind, value, state.line, state.offset, end);
            return Some((Scanned::Token(token), Position { offset: end, ..state }));
        }
    }

    if let Some(rule) = SYMBOL_TABLE.iter().find(|rule| remaining.starts_with(rule.pattern)) {
        let end = state.offset + rule.pattern.len();
        let token = MK_TOKEN!(rule.kind, TokenValue::None, state.line, state.offset, end);
        return Some((Scanned::Token(token), Position { offset: end, ..state }));
    }

    if let Some(found) = COMMENT.find(remaining) {
        let end = state.offset + found.end();
        let token = MK_TOKEN!(
            TokenKind::Comment,
            TokenValue::Text(found.as_str().to_string()),
            state.line,
            state.offset,
            end
        );
        return Some((Scanned::Token(token), Position { offset: end, ..state }));
    }

    let error = Error::new(ErrorImpl::IllegalCharacter { character: first }, state);
    let next = Position { offset: state.offset + first.len_utf8(), ..state };
    Some((Scanned::Error(error), next))
}

/// Lazily scans a source string.
///
/// Yields every token in source order, with illegal input reported in place
/// as `Err`. Scanning never stops early on an error.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    state: Position,
    tokens: usize,
    errors: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            state: Position::start(),
            tokens: 0,
            errors: 0,
            finished: false,
        }
    }

    pub fn position(&self) -> Position {
        self.state
    }

    /// Current line; after the lexer is exhausted this is `1 +` the number of
    /// line breaks in the source.
    pub fn line(&self) -> u32 {
        self.state.line
    }

    pub fn at_eof(&self) -> bool {
        self.state.offset >= self.source.len()
    }

    /// Drops comment tokens from the stream. Line numbers are unaffected.
    pub fn without_comments(self) -> impl Iterator<Item = Result<Token, Error>> + 'a {
        self.filter(|scanned| !matches!(scanned, Ok(token) if token.kind == TokenKind::Comment))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((scanned, next)) = step(self.source, self.state) {
            self.state = next;

            match scanned {
                Scanned::Token(token) => {
                    trace!(kind = %token.kind, line = token.line, "token");
                    self.tokens += 1;
                    return Some(Ok(token));
                }
                Scanned::Error(error) => {
                    warn!(line = error.get_position().line, "{}", error.get_kind());
                    self.errors += 1;
                    return Some(Err(error));
                }
                Scanned::Whitespace | Scanned::Newlines(_) => {}
            }
        }

        if !self.finished {
            self.finished = true;
            debug!(
                tokens = self.tokens,
                errors = self.errors,
                lines = self.state.line,
                "scan finished"
            );
        }

        None
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Scans the whole source, splitting tokens from reported errors.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut tokens = vec![];
    let mut errors = vec![];

    for scanned in Lexer::new(source) {
        match scanned {
            Ok(token) => tokens.push(token),
            Err(error) => errors.push(error),
        }
    }

    (tokens, errors)
}

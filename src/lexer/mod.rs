//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a stream
//! of tokens for a later parser. It handles:
//!
//! - Numeric literals (integers and floats) recognised with regex rules
//! - Operators, comparators and brackets from a fixed symbol table
//! - Comments, whitespace and line tracking
//! - Recoverable reporting of illegal characters

pub mod lexer;
pub mod tokens;

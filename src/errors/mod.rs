//! Error types reported by the lexer.
//!
//! Every lexical error is recoverable: the scanner reports it with its
//! source position and carries on from the next character. This module
//! defines:
//!
//! - The `Error` structure pairing an error variant with a `Position`
//! - The `ErrorImpl` variants and their messages
//! - Human readable tips for diagnostics

pub mod errors;

#[cfg(test)]
mod tests;

//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter { character: '@' },
        Position { line: 3, offset: 10 },
    );

    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert_eq!(error.illegal_character(), Some('@'));
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter { character: '$' },
        Position { line: 2, offset: 42 },
    );

    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().offset, 42);
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter { character: '@' },
        Position { line: 5, offset: 0 },
    );

    assert_eq!(error.to_string(), "illegal character '@' at line 5");
}

#[test]
fn test_error_tips() {
    let error = Error::new(ErrorImpl::IllegalCharacter { character: '!' }, Position::start());
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`!=`")),
        ErrorTip::None => panic!("a lone `!` should point at `!=`"),
    }

    let error = Error::new(ErrorImpl::IllegalCharacter { character: '.' }, Position::start());
    assert!(error.get_tip().to_string().contains("digit"));
}

#[test]
fn test_plain_illegal_character_has_no_tip() {
    let error = Error::new(ErrorImpl::IllegalCharacter { character: '@' }, Position::start());

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

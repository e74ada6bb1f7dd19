//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, RuleLocation};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidPattern {
            pattern: "[".to_string(),
            message: "unclosed character class".to_string(),
        },
        RuleLocation::new("root", 3),
    );

    assert_eq!(error.get_error_name(), "InvalidPattern");
}

#[test]
fn test_error_location() {
    let error = Error::new(
        ErrorImpl::UndefinedState {
            state: "string".to_string(),
        },
        RuleLocation::new("root", 7),
    );

    assert_eq!(error.get_location().state, "root");
    assert_eq!(error.get_location().index, Some(7));
    assert_eq!(error.get_location().to_string(), "root[7]");
}

#[test]
fn test_error_display_includes_location() {
    let error = Error::new(
        ErrorImpl::IncludeCycle {
            state: "root".to_string(),
        },
        RuleLocation::state("root"),
    );

    assert_eq!(error.to_string(), "state \"root\" includes itself (at root)");
}

#[test]
fn test_unknown_lexer_error() {
    let error = Error::new(
        ErrorImpl::UnknownLexer {
            name: "cobol".to_string(),
        },
        RuleLocation::null(),
    );

    assert_eq!(error.get_error_name(), "UnknownLexer");
    assert_eq!(error.get_location().to_string(), "<null>");
}

#[test]
fn test_group_count_mismatch_tip() {
    let error = Error::new(
        ErrorImpl::GroupCountMismatch {
            pattern: "(a)b".to_string(),
            expected: 2,
            groups: 1,
        },
        RuleLocation::new("root", 0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "The pattern only has 1 capture groups"),
        ErrorTip::None => panic!("Expected a suggestion"),
    }

    let error = Error::new(
        ErrorImpl::GroupCountMismatch {
            pattern: "(a)b".to_string(),
            expected: 0,
            groups: 1,
        },
        RuleLocation::new("root", 0),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "A group action needs at least one category"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(format!("{}", tip), "Try this instead");

    let no_tip = ErrorTip::None;
    assert_eq!(format!("{}", no_tip), "");
}

#[test]
fn test_filename_pattern_error_has_no_tip() {
    let error = Error::new(
        ErrorImpl::InvalidFilenamePattern {
            pattern: "*.[nu".to_string(),
            message: "unterminated `[`".to_string(),
        },
        RuleLocation::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_impl_messages() {
    let cases = vec![
        (
            ErrorImpl::UndefinedState {
                state: "string".to_string(),
            },
            "state \"string\" is not defined",
        ),
        (
            ErrorImpl::DuplicateState {
                state: "root".to_string(),
            },
            "state \"root\" is defined more than once",
        ),
        (
            ErrorImpl::MissingInitialState {
                state: "root".to_string(),
            },
            "initial state \"root\" is not defined",
        ),
        (
            ErrorImpl::UnknownLexer {
                name: "cobol".to_string(),
            },
            "no lexer found for \"cobol\"",
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(error.to_string(), expected);
    }
}

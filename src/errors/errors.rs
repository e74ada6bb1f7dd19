use std::fmt::Display;

use thiserror::Error;

/// Where in a rule table an error was found: the state being built and the
/// index of the offending entry in that state's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLocation {
    pub state: String,
    pub index: Option<usize>,
}

impl RuleLocation {
    pub fn new(state: &str, index: usize) -> Self {
        RuleLocation {
            state: state.to_string(),
            index: Some(index),
        }
    }

    pub fn state(state: &str) -> Self {
        RuleLocation {
            state: state.to_string(),
            index: None,
        }
    }

    pub fn null() -> Self {
        RuleLocation {
            state: String::from("<null>"),
            index: None,
        }
    }
}

impl Display for RuleLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{}]", self.state, index),
            None => write!(f, "{}", self.state),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("{internal_error} (at {location})")]
pub struct Error {
    internal_error: ErrorImpl,
    location: RuleLocation,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, location: RuleLocation) -> Self {
        Error {
            internal_error: error_impl,
            location,
        }
    }

    pub fn get_location(&self) -> &RuleLocation {
        &self.location
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::UndefinedState { .. } => "UndefinedState",
            ErrorImpl::DuplicateState { .. } => "DuplicateState",
            ErrorImpl::MissingInitialState { .. } => "MissingInitialState",
            ErrorImpl::IncludeCycle { .. } => "IncludeCycle",
            ErrorImpl::GroupCountMismatch { .. } => "GroupCountMismatch",
            ErrorImpl::UnknownLexer { .. } => "UnknownLexer",
            ErrorImpl::InvalidFilenamePattern { .. } => "InvalidFilenamePattern",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { pattern, .. } => ErrorTip::Suggestion(format!(
                "Pattern `{}` does not compile, check escaping of `[`, `&&`, `--` and `~~` inside classes",
                pattern
            )),
            ErrorImpl::UndefinedState { state } => {
                ErrorTip::Suggestion(format!("State `{}` is referenced but never defined", state))
            }
            ErrorImpl::DuplicateState { state } => {
                ErrorTip::Suggestion(format!("State `{}` is defined more than once", state))
            }
            ErrorImpl::MissingInitialState { state } => ErrorTip::Suggestion(format!(
                "The rule table has no `{}` state to start from",
                state
            )),
            ErrorImpl::IncludeCycle { state } => ErrorTip::Suggestion(format!(
                "State `{}` includes itself, directly or through another state",
                state
            )),
            ErrorImpl::GroupCountMismatch { expected: 0, .. } => ErrorTip::Suggestion(
                String::from("A group action needs at least one category"),
            ),
            ErrorImpl::GroupCountMismatch { groups, .. } => ErrorTip::Suggestion(format!(
                "The pattern only has {} capture groups",
                groups
            )),
            ErrorImpl::UnknownLexer { .. } => ErrorTip::Suggestion(String::from(
                "Run with `--list` to see the available lexers",
            )),
            ErrorImpl::InvalidFilenamePattern { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("state {state:?} is not defined")]
    UndefinedState { state: String },
    #[error("state {state:?} is defined more than once")]
    DuplicateState { state: String },
    #[error("initial state {state:?} is not defined")]
    MissingInitialState { state: String },
    #[error("state {state:?} includes itself")]
    IncludeCycle { state: String },
    #[error("pattern {pattern:?} maps {expected} categories onto {groups} capture groups")]
    GroupCountMismatch {
        pattern: String,
        expected: usize,
        groups: usize,
    },
    #[error("no lexer found for {name:?}")]
    UnknownLexer { name: String },
    #[error("invalid filename pattern {pattern:?}: {message}")]
    InvalidFilenamePattern { pattern: String, message: String },
}

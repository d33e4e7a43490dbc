use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// How bad a non-success is
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Ordinary mismatch; combinators may backtrack and try something else
    Failure,
    /// Structural problem (left recursion); never backtracked over
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Failure => write!(f, "failure"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// The non-success outcome of a parse step
///
/// Carries what was expected and where. `Failure`s are the normal currency of
/// backtracking; `Error`s escalate through every combinator untouched.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{severity} at {location}: expected {expected}")]
pub struct NoSuccess<L> {
    pub severity: Severity,
    pub expected: Cow<'static, str>,
    pub location: L,
}

impl<L> NoSuccess<L> {
    pub fn failure(expected: impl Into<Cow<'static, str>>, location: L) -> Self {
        NoSuccess {
            severity: Severity::Failure,
            expected: expected.into(),
            location,
        }
    }

    pub fn error(expected: impl Into<Cow<'static, str>>, location: L) -> Self {
        NoSuccess {
            severity: Severity::Error,
            expected: expected.into(),
            location,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Replace the expectation text, keeping severity and location
    pub fn expecting(self, expected: impl Into<Cow<'static, str>>) -> Self {
        NoSuccess {
            expected: expected.into(),
            ..self
        }
    }
}

/// Problems detected while assembling parsers, before any input is seen
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid regex: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("non-terminal `{name}` is already bound")]
    AlreadyBound { name: String },

    #[error("non-terminal `{name}` is declared more than once")]
    DuplicateRule { name: String },

    #[error("non-terminals left unbound: {}", names.join(", "))]
    Unbound { names: Vec<String> },

    #[error("operator `{operator}` has a {combiner} combiner but {assoc} associativity")]
    CombinerMismatch {
        operator: String,
        combiner: &'static str,
        assoc: crate::operator_table::Assoc,
    },
}

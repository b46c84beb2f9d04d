//! Error taxonomy for aggregate evaluation.
//!
//! Two things can go wrong while resolving a request set:
//!
//! - [`AggregateError::EmptySequence`] -- an identity-less aggregate (average,
//!   min, max) consumed zero eligible elements. Detected lazily, when that
//!   aggregate's result is read, and only for that position.
//! - [`AggregateError::SelectorFailure`] -- a caller-supplied per-element
//!   transform failed. Since every registered aggregate shares the one pass,
//!   the whole set is aborted and permanently poisoned.
//!
//! Errors are `Clone` so a cached failure can be handed back on every
//! subsequent read without re-enumerating the source, and `Serialize` so they
//! can be exported alongside pass statistics.
//!
//! The reference taxonomy also names a `NullArgument` class. It has no Rust
//! counterpart: sources and reducers are references and values, never null.

use serde::Serialize;
use std::fmt;

/// An error surfaced while evaluating a request set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AggregateError {
    /// An identity-less aggregate has no defined value for the elements
    /// actually seen (e.g. an average after zero eligible elements).
    EmptySequence {
        /// Label of the failing aggregate (e.g. `"average"`).
        kind: &'static str,
        /// Zero-based registration position, filled in by the request set.
        position: Option<usize>,
    },
    /// A per-element transform failed mid-pass, aborting enumeration for the
    /// whole set.
    SelectorFailure {
        /// Zero-based registration position of the aggregate whose selector
        /// failed.
        position: Option<usize>,
        /// Rendered failure from the caller's selector.
        detail: String,
    },
}

impl AggregateError {
    pub(crate) fn empty(kind: &'static str) -> Self {
        Self::EmptySequence {
            kind,
            position: None,
        }
    }

    pub(crate) fn selector(detail: impl Into<String>) -> Self {
        Self::SelectorFailure {
            position: None,
            detail: detail.into(),
        }
    }

    /// Attach a registration position, keeping one that is already set.
    pub(crate) fn at_position(self, position: usize) -> Self {
        match self {
            Self::EmptySequence {
                kind,
                position: None,
            } => Self::EmptySequence {
                kind,
                position: Some(position),
            },
            Self::SelectorFailure {
                position: None,
                detail,
            } => Self::SelectorFailure {
                position: Some(position),
                detail,
            },
            other => other,
        }
    }

    /// Registration position of the failing aggregate, if known.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::EmptySequence { position, .. } | Self::SelectorFailure { position, .. } => {
                *position
            }
        }
    }

    /// Whether this is an [`AggregateError::EmptySequence`].
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, Self::EmptySequence { .. })
    }

    /// Whether this is an [`AggregateError::SelectorFailure`].
    pub fn is_selector_failure(&self) -> bool {
        matches!(self, Self::SelectorFailure { .. })
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence { kind, position } => {
                write!(f, "{kind} has no value over an empty sequence")?;
                if let Some(p) = position {
                    write!(f, " (aggregate #{p})")?;
                }
                Ok(())
            }
            Self::SelectorFailure { position, detail } => {
                write!(f, "selector failed")?;
                if let Some(p) = position {
                    write!(f, " feeding aggregate #{p}")?;
                }
                write!(f, ": {detail}")
            }
        }
    }
}

impl std::error::Error for AggregateError {}

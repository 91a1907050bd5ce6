//! The error type shared by every fallible collector in this crate.

use std::fmt;

use thiserror::Error;

/// A `Result` defaulting to [`CollectError`].
pub type Result<T, E = CollectError> = std::result::Result<T, E>;

/// Why a collection call (or the construction of a strategy) failed.
///
/// All failures are fail-fast: the collector stops at the first violation and
/// the partially built output is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CollectError {
    /// A required argument was absent when the strategy was constructed.
    #[error("{0} can't be null")]
    Precondition(Argument),

    /// A key or value function produced no value for some element.
    #[error("{0} function can't return null")]
    NullProduced(Function),

    /// A unique index met a second element with an already indexed key.
    ///
    /// `key` is the [`Debug`](fmt::Debug) rendering of the offending key, so
    /// string keys show up quoted: `Duplicate key "a"`, while integers do not:
    /// `Duplicate key 1`.
    #[error("Duplicate key {key}")]
    DuplicateKey { key: String },

    /// A joiner that rejects null parts met one.
    #[error("Joiner can't join a null part at position {position}")]
    NullPart { position: usize },
}

/// Coarse classification of a [`CollectError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    PreconditionViolation,
    NullProduced,
    DuplicateKey,
    Joiner,
}

/// An argument a strategy constructor requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    KeyFunction,
    ValueFunction,
    Joiner,
}

/// Which extraction function misbehaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Key,
    Value,
}

impl CollectError {
    /// Creates a [`DuplicateKey`](CollectError::DuplicateKey) error rendering `key`.
    pub fn duplicate_key<K: fmt::Debug + ?Sized>(key: &K) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
        }
    }

    /// Returns the broad category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_collect::error::{Argument, CollectError, ErrorKind};
    ///
    /// let err = CollectError::Precondition(Argument::KeyFunction);
    /// assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
    /// assert_eq!(err.to_string(), "Key function can't be null");
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Precondition(_) => ErrorKind::PreconditionViolation,
            Self::NullProduced(_) => ErrorKind::NullProduced,
            Self::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Self::NullPart { .. } => ErrorKind::Joiner,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::KeyFunction => "Key function",
            Self::ValueFunction => "Value function",
            Self::Joiner => "Joiner",
        })
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Key => "Key",
            Self::Value => "Value",
        })
    }
}

/// Unwraps a required constructor argument.
pub(crate) fn require<A>(arg: Option<A>, which: Argument) -> Result<A> {
    arg.ok_or(CollectError::Precondition(which))
}

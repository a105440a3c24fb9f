// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy and the per-call status side channel.

use super::request::QueryParseError;
use thiserror::Error;

/// Errors surfaced to callers.
///
/// "No font satisfies the query" is not an error; it is the `None` outcome
/// of a match.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// The host environment cannot run the requested corpus strategy.
    ///
    /// Raised only while building an engine; never retried, since the set
    /// of available strategies cannot change within a process.
    #[error("no supported corpus strategy is available: {0}")]
    Unsupported(&'static str),

    /// A request could not be decoded into a query.
    #[error(transparent)]
    Parse(#[from] QueryParseError),
}

/// Outcome class of the most recent engine call.
///
/// Lets callers tell "no match" apart from "the request was malformed"
/// apart from "the environment cannot run this feature".
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Status {
    /// The call completed; a `None` result means no font matched.
    Ok = 0,
    /// The request could not be decoded into a query.
    ParseError = 1,
    /// No corpus strategy is available in this environment.
    Unsupported = 2,
}

impl Status {
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::ParseError,
            2 => Self::Unsupported,
            _ => Self::Ok,
        }
    }
}

impl From<&Error> for Status {
    fn from(error: &Error) -> Self {
        match error {
            Error::Unsupported(_) => Self::Unsupported,
            Error::Parse(_) => Self::ParseError,
        }
    }
}

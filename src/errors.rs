// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can stop a render.  None of these are recoverable:
//! the run is over the moment one of them shows up.

use std::io;

/// The ways a render can fail.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The command line could not be understood.  Also carries the
    /// help and version texts, which clap delivers as errors.
    #[fail(display = "{}", _0)]
    Usage(#[cause] ::clap::Error),

    /// A command-line value was missing, unparseable, or out of range.
    #[fail(display = "invalid argument <{}>: {}", name, reason)]
    Argument {
        /// The name of the offending argument.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A buffer could not be allocated, or its size would not fit in
    /// the address space.
    #[fail(display = "allocation failed for {}", what)]
    Allocation {
        /// The buffer we were trying to get.
        what: &'static str,
    },

    /// The output stream reported an error.
    #[fail(display = "write failed: {}", _0)]
    Output(#[cause] io::Error),

    /// The output stream accepted only part of a row.
    #[fail(
        display = "short write on row {}: {} of {} bytes",
        row, written, expected
    )]
    ShortWrite {
        /// Row being emitted when the stream came up short.
        row: usize,
        /// Bytes the stream accepted.
        written: usize,
        /// Bytes in the row.
        expected: usize,
    },

    /// A worker thread panicked while filling its band of rows.
    #[fail(display = "a render worker panicked")]
    Worker,
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> RenderError {
        RenderError::Output(err)
    }
}

impl From<::clap::Error> for RenderError {
    fn from(err: ::clap::Error) -> RenderError {
        RenderError::Usage(err)
    }
}

impl RenderError {
    /// Shorthand for the argument variant.
    pub fn argument<S: Into<String>>(name: &'static str, reason: S) -> RenderError {
        RenderError::Argument {
            name,
            reason: reason.into(),
        }
    }
}

/// Reserve room for exactly `len` items up front, reporting failure
/// instead of aborting the process.  Every grid and table in the
/// crate is obtained through here, once, before any work starts.
pub(crate) fn allocate<T>(len: usize, what: &'static str) -> Result<Vec<T>, RenderError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| RenderError::Allocation { what })?;
    Ok(buffer)
}

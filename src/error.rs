// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can stop a participant.  All of these are terminal
//! for the process that hits them; nothing is reported to the other
//! participants.

use std::io;
use std::path::Path;

/// The errors a participant can run into while setting up, rendering
/// or saving its band.
#[derive(Debug, Fail)]
pub enum Error {
    /// The plane rectangle is empty, inverted, or not finite.
    #[fail(
        display = "Invalid bounds: x {} .. {}, y {} .. {}",
        x_min, x_max, y_min, y_max
    )]
    InvalidBounds {
        /// Left edge.
        x_min: f64,
        /// Right edge.
        x_max: f64,
        /// Bottom edge.
        y_min: f64,
        /// Top edge.
        y_max: f64,
    },

    /// The pixel grid has no area.
    #[fail(display = "Invalid image dimensions {}x{}", width, height)]
    InvalidDimensions {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// An iteration cap of zero leaves nothing to compute.
    #[fail(display = "Iteration cap must be at least 1")]
    InvalidIterations,

    /// A rank outside of `[0, count)`, or no participants at all.
    #[fail(display = "Invalid participant identity: rank {} of {}", rank, count)]
    InvalidIdentity {
        /// The rank we were handed.
        rank: usize,
        /// The participant count we were handed.
        count: usize,
    },

    /// The launcher left something in the environment we could not read.
    #[fail(display = "Collective runtime: {}", _0)]
    Runtime(String),

    /// The pixel buffer could not be allocated.
    #[fail(display = "Could not allocate {} bytes for the pixel buffer", bytes)]
    OutOfMemory {
        /// Size of the failed request.
        bytes: usize,
    },

    /// One of the render threads inside this participant died.
    #[fail(display = "A render thread panicked")]
    WorkerPanicked,

    /// The output file could not be created or written.
    #[fail(display = "Could not write {}: {}", path, cause)]
    Io {
        /// The file we were writing.
        path: String,
        /// What the OS said.
        #[cause]
        cause: io::Error,
    },
}

impl Error {
    /// Attach a path to an I/O failure.
    pub fn io(path: &Path, cause: io::Error) -> Error {
        Error::Io {
            path: path.display().to_string(),
            cause,
        }
    }
}

/// Shorthand used across the crate.
pub type Result<T> = ::std::result::Result<T, Error>;

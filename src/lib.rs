#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Banded Mandelbrot renderer
//!
//! Renders a grayscale escape-time picture of the Mandelbrot set, with
//! the work spread over several independent processes.  Every process
//! is told its rank and the number of processes by whatever launched
//! it, takes the horizontal band of the image that its rank owns, and
//! writes that band to its own PPM file.  The processes never talk to
//! one another and nobody stitches the bands back together.
//!
//! The brightness of a pixel is how long the orbit of its point under
//! `z -> z * z + c` takes to leave the circle of radius two, scaled to
//! a byte.  Points that leave immediately are black; points still
//! inside at the iteration cap are white.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod band;
pub mod config;
pub mod error;
pub mod escape;
pub mod partition;
pub mod planes;
pub mod ppm;
pub mod render;
pub mod runtime;

pub use band::Band;
pub use config::{Bounds, Config, Dimensions};
pub use error::{Error, Result};
pub use partition::{partition, Identity, LocalSlice};
pub use render::{render_band, render_participant};
pub use runtime::{EnvRuntime, FixedRuntime, Runtime, Session};

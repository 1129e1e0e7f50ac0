// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The resolved rendering parameters.  The command line fills these
//! in; after `Config::new` succeeds nothing changes them.

use error::{Error, Result};

/// Iteration cap used when none is given.
pub const DEFAULT_ITERATIONS: usize = 255;

/// Plane rectangle used when none is given: x_min, x_max, y_min, y_max.
pub const DEFAULT_BOUNDS: (f64, f64, f64, f64) = (-1.78, 0.78, -0.961, 0.961);

/// Image size used when none is given.
pub const DEFAULT_DIMENSIONS: (usize, usize) = (4096, 3072);

/// Base output path; each participant appends its rank.
pub const DEFAULT_OUTPUT: &str = "mandel.ppm";

/// A rectangle on the complex plane, real part along x and imaginary
/// part along y.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
}

impl Bounds {
    /// Checked constructor; both spans must be finite and strictly
    /// positive.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Bounds> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());
        if !finite || x_min >= x_max || y_min >= y_max {
            return Err(Error::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }
        Ok(Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Size of the pixel grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
}

impl Dimensions {
    /// Checked constructor; neither side may be zero, and both must
    /// fit the 32-bit sizes image files carry.
    pub fn new(width: usize, height: usize) -> Result<Dimensions> {
        let max = u32::max_value() as usize;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Dimensions { width, height })
    }
}

/// Everything a participant needs to know to render its band.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Maximum orbit length before a point counts as inside the set.
    pub iterations: usize,
    /// The whole region being rendered, across all participants.
    pub bounds: Bounds,
    /// The whole image size, across all participants.
    pub dimensions: Dimensions,
    /// Base path; the rank is appended to it.
    pub output: String,
    /// Worker threads inside this participant.
    pub threads: usize,
}

impl Config {
    /// Build a single-threaded configuration.  Bounds and dimensions
    /// are already checked by their own constructors.
    pub fn new(
        iterations: usize,
        bounds: Bounds,
        dimensions: Dimensions,
        output: &str,
    ) -> Result<Config> {
        if iterations == 0 {
            return Err(Error::InvalidIterations);
        }
        Ok(Config {
            iterations,
            bounds,
            dimensions,
            output: output.to_string(),
            threads: 1,
        })
    }

    /// Same configuration, rendered on `threads` threads.  Zero is
    /// treated as one.
    pub fn with_threads(self, threads: usize) -> Config {
        Config {
            threads: threads.max(1),
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        let (x_min, x_max, y_min, y_max) = DEFAULT_BOUNDS;
        Config {
            iterations: DEFAULT_ITERATIONS,
            bounds: Bounds {
                x_min,
                x_max,
                y_min,
                y_max,
            },
            dimensions: Dimensions {
                width: DEFAULT_DIMENSIONS.0,
                height: DEFAULT_DIMENSIONS.1,
            },
            output: DEFAULT_OUTPUT.to_string(),
            threads: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_reject_inverted_rectangles() {
        assert!(Bounds::new(1.0, -1.0, -1.0, 1.0).is_err());
        assert!(Bounds::new(-1.0, 1.0, 1.0, -1.0).is_err());
        assert!(Bounds::new(-1.0, -1.0, -1.0, 1.0).is_err());
    }

    #[test]
    fn bounds_reject_non_finite_edges() {
        assert!(Bounds::new(::std::f64::NAN, 1.0, -1.0, 1.0).is_err());
        assert!(Bounds::new(-1.0, ::std::f64::INFINITY, -1.0, 1.0).is_err());
    }

    #[test]
    fn bounds_report_their_extent() {
        let b = Bounds::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        assert_eq!(b.width(), 3.0);
        assert_eq!(b.height(), 2.0);
    }

    #[test]
    fn dimensions_must_have_area() {
        assert!(Dimensions::new(0, 10).is_err());
        assert!(Dimensions::new(10, 0).is_err());
        assert_eq!(
            Dimensions::new(4, 2).unwrap(),
            Dimensions {
                width: 4,
                height: 2
            }
        );
    }

    #[test]
    fn zero_iterations_is_refused() {
        let b = Bounds::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        let d = Dimensions::new(4, 2).unwrap();
        match Config::new(0, b, d, "out.ppm") {
            Err(Error::InvalidIterations) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn defaults_match_the_documented_constants() {
        let c = Config::default();
        assert_eq!(c.iterations, 255);
        assert_eq!(c.bounds.x_min, -1.78);
        assert_eq!(c.bounds.y_max, 0.961);
        assert_eq!(c.dimensions.width, 4096);
        assert_eq!(c.dimensions.height, 3072);
        assert_eq!(c.output, "mandel.ppm");
        assert_eq!(c.threads, 1);
    }

    #[test]
    fn thread_count_never_drops_below_one() {
        assert_eq!(Config::default().with_threads(0).threads, 1);
        assert_eq!(Config::default().with_threads(4).threads, 4);
    }
}

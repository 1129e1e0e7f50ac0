//! Contains the PlaneMapper struct, which relates a band of the
//! integral pixel grid to a strip of the complex plane.  Row 0 of
//! the band is its top edge, so rows run downwards while the
//! imaginary axis runs upwards.
use num::Complex;

use config::{Bounds, Dimensions};
use partition::LocalSlice;

/// Column and row of a pixel in a band.  Names are important.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of one participant's band onto the complex plane.  The
/// pitch always comes from the whole image, never from the band, so
/// neighbouring bands line up without a seam.
#[derive(Debug)]
pub struct PlaneMapper {
    /// Columns in the band, the same as the whole image.
    pub width: usize,
    /// Rows in this band.
    pub height: usize,
    // Left edge of the plane and top edge of the band.
    origin: Complex<f64>,
    // Distance on the plane between neighbouring columns and rows.
    pitch: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the global bounds and pixel grid, which
    /// fix the pitch, and the slice describing this band.
    pub fn new(global: &Bounds, dimensions: &Dimensions, slice: &LocalSlice) -> PlaneMapper {
        PlaneMapper {
            width: dimensions.width,
            height: slice.height,
            origin: Complex::new(global.x_min, slice.bounds.y_max),
            pitch: (
                global.width() / (dimensions.width as f64),
                global.height() / (dimensions.height as f64),
            ),
        }
    }

    /// The total number of pixels in the band, or `None` when that
    /// does not fit in memory at all.  Used to size the pixel buffer.
    pub fn len(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// A band can come out empty when there are more participants
    /// than rows.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Given a pixel of the band, the point of the complex plane it
    /// samples.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.origin.re + (pixel.0 as f64) * self.pitch.0,
            self.origin.im - (pixel.1 as f64) * self.pitch.1,
        )
    }

    /// The plane step between neighbouring columns and rows.
    pub fn pitch(&self) -> (f64, f64) {
        self.pitch
    }
}

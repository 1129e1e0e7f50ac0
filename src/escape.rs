// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time kernel.  A point `c` of the complex plane is
//! iterated under `z -> z * z + c` from `z = 0` until the orbit leaves
//! the circle of radius two, or until the iteration cap runs out.  How
//! long it took is the pixel's brightness: points that leave at once
//! are black, points that never leave are white.

use num::Complex;

/// Squared radius of the escape circle.
const ESCAPE_NORM_SQR: f64 = 4.0;

/// Returns the iteration on which the orbit of `c` first lands
/// outside the escape circle, counting from zero, or `limit` if it
/// never does.
pub fn escape_time(c: Complex<f64>, limit: usize) -> usize {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for i in 0..limit {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_NORM_SQR {
            return i;
        }
    }
    limit
}

/// Gray level for `c`: the escape time scaled onto `0..=255` and
/// truncated.  `limit` must be at least one.
#[inline]
pub fn intensity(c: Complex<f64>, limit: usize) -> u8 {
    ((escape_time(c, limit) as f64) / (limit as f64) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        for &limit in &[1, 2, 10, 255, 1000] {
            assert_eq!(escape_time(Complex::new(0.0, 0.0), limit), limit);
            assert_eq!(intensity(Complex::new(0.0, 0.0), limit), 255);
        }
    }

    #[test]
    fn far_points_escape_on_the_first_step() {
        assert_eq!(escape_time(Complex::new(2.0, 2.0), 10), 0);
        assert_eq!(intensity(Complex::new(2.0, 2.0), 10), 0);
        assert_eq!(intensity(Complex::new(-3.0, 0.0), 255), 0);
    }

    #[test]
    fn the_circle_itself_does_not_count_as_outside() {
        // z1 = 1, z2 = 2 sits exactly on the circle, z3 = 5 is out.
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 10), 2);
        assert_eq!(intensity(Complex::new(1.0, 0.0), 4), 127);
        // z1 = 2 is on the circle, z2 = 6 is out.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 10), 1);
    }

    #[test]
    fn periodic_orbits_stay_white() {
        assert_eq!(intensity(Complex::new(-1.0, 0.0), 500), 255);
        assert_eq!(intensity(Complex::new(-0.12, 0.75), 200), 255);
    }

    #[test]
    fn kernel_is_deterministic() {
        let c = Complex::new(-0.743_643_887, 0.131_825_904);
        let first = intensity(c, 255);
        for _ in 0..16 {
            assert_eq!(intensity(c, 255), first);
        }
    }

    #[test]
    fn slower_escape_is_never_darker() {
        let limit = 100;
        let mut samples: Vec<(usize, u8)> = (0..200)
            .map(|k| Complex::new(0.25 + (k as f64) * 0.01, 0.0))
            .map(|c| (escape_time(c, limit), intensity(c, limit)))
            .collect();
        samples.sort();
        for pair in samples.windows(2) {
            if pair[0].0 < pair[1].0 {
                assert!(pair[0].1 <= pair[1].1);
            }
        }
        assert!(samples.first().unwrap().0 < samples.last().unwrap().0);
    }
}

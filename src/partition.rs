// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Splits the vertical extent of the image into one horizontal band
//! per participant.  Every participant runs this on its own with the
//! same inputs, so nobody has to talk to anybody.
//!
//! Rank 0 gets the band touching the top edge of the plane, and the
//! bands walk downwards as the rank increases.  The last rank's band
//! touches the bottom edge.  When the image height is not a multiple
//! of the participant count, the leftover rows are simply never
//! rendered.

use config::{Bounds, Dimensions};
use error::{Error, Result};

/// Who this process is among its peers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    rank: usize,
    count: usize,
}

impl Identity {
    /// Checked constructor.
    pub fn new(rank: usize, count: usize) -> Result<Identity> {
        if count == 0 || rank >= count {
            return Err(Error::InvalidIdentity { rank, count });
        }
        Ok(Identity { rank, count })
    }

    /// The identity of a process running alone.
    pub fn solo() -> Identity {
        Identity { rank: 0, count: 1 }
    }

    /// Zero-based ordinal, always less than `count`.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of participants in the run.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// One participant's share of the image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LocalSlice {
    /// The global bounds with y narrowed to this band.
    pub bounds: Bounds,
    /// Pixel rows in this band.
    pub height: usize,
}

/// Work out the band for `identity`.  Pure; depends only on its
/// arguments.
pub fn partition(bounds: &Bounds, dimensions: &Dimensions, identity: Identity) -> LocalSlice {
    let n = identity.count;
    let r = identity.rank;
    let step = bounds.height() / (n as f64);
    LocalSlice {
        bounds: Bounds {
            x_min: bounds.x_min,
            x_max: bounds.x_max,
            y_min: bounds.y_min + ((n - r - 1) as f64) * step,
            y_max: bounds.y_max - (r as f64) * step,
        },
        height: dimensions.height / n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn square() -> Bounds {
        Bounds::new(-1.0, 1.0, -1.0, 1.0).unwrap()
    }

    fn slices(bounds: &Bounds, dims: &Dimensions, count: usize) -> Vec<LocalSlice> {
        (0..count)
            .map(|rank| partition(bounds, dims, Identity::new(rank, count).unwrap()))
            .collect()
    }

    #[test]
    fn identity_rejects_out_of_range_ranks() {
        assert!(Identity::new(0, 0).is_err());
        assert!(Identity::new(3, 3).is_err());
        assert!(Identity::new(2, 3).is_ok());
        assert_eq!(Identity::solo(), Identity::new(0, 1).unwrap());
    }

    #[test]
    fn identities_only_come_from_checked_constructors() {
        let id = Identity::new(2, 5).unwrap();
        assert_eq!((id.rank(), id.count()), (2, 5));
        assert_eq!((Identity::solo().rank(), Identity::solo().count()), (0, 1));
        match Identity::new(2, 2) {
            Err(Error::InvalidIdentity { rank: 2, count: 2 }) => {}
            other => panic!("unexpected {:?}", other),
        }
        match Identity::new(0, 0) {
            Err(Error::InvalidIdentity { rank: 0, count: 0 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn a_single_participant_gets_everything() {
        let b = square();
        let d = Dimensions::new(8, 6).unwrap();
        let s = partition(&b, &d, Identity::solo());
        assert_eq!(s.bounds, b);
        assert_eq!(s.height, 6);
    }

    #[test]
    fn two_participants_split_top_and_bottom() {
        let b = square();
        let d = Dimensions::new(4, 2).unwrap();
        let s = slices(&b, &d, 2);
        assert_eq!(s[0].bounds.y_max, 1.0);
        assert_eq!(s[0].bounds.y_min, 0.0);
        assert_eq!(s[1].bounds.y_max, 0.0);
        assert_eq!(s[1].bounds.y_min, -1.0);
        assert_eq!(s[0].height, 1);
        assert_eq!(s[1].height, 1);
    }

    #[test]
    fn bands_are_contiguous_and_ordered_top_down() {
        let b = Bounds::new(-1.78, 0.78, -0.961, 0.961).unwrap();
        let d = Dimensions::new(64, 48).unwrap();
        for count in 1..17 {
            let s = slices(&b, &d, count);
            let step = b.height() / (count as f64);
            assert!((s[0].bounds.y_max - b.y_max).abs() < EPS);
            assert!((s[count - 1].bounds.y_min - b.y_min).abs() < EPS);
            for pair in s.windows(2) {
                assert!((pair[0].bounds.y_min - pair[1].bounds.y_max).abs() < EPS);
                assert!(pair[0].bounds.y_max > pair[1].bounds.y_max);
            }
            for slice in &s {
                assert!((slice.bounds.height() - step).abs() < EPS);
                assert_eq!(slice.bounds.x_min, b.x_min);
                assert_eq!(slice.bounds.x_max, b.x_max);
            }
        }
    }

    #[test]
    fn leftover_rows_are_dropped() {
        let b = square();
        for &(height, count) in &[(10, 3), (7, 7), (3072, 5), (5, 8)] {
            let d = Dimensions::new(4, height).unwrap();
            let rows: usize = slices(&b, &d, count).iter().map(|s| s.height).sum();
            assert_eq!(rows, count * (height / count));
            assert_eq!(rows, height - height % count);
        }
    }

    #[test]
    fn partitioning_is_repeatable() {
        let b = square();
        let d = Dimensions::new(16, 9).unwrap();
        let id = Identity::new(1, 4).unwrap();
        assert_eq!(partition(&b, &d, id), partition(&b, &d, id));
    }
}

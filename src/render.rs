// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! One participant's whole job: find its band, render it, save it.

use std::path::PathBuf;

use band::Band;
use config::Config;
use error::Result;
use partition::{partition, Identity};
use ppm::{output_path, write_band};

/// Partition, allocate and fill this participant's band.
pub fn render_band(config: &Config, identity: Identity) -> Result<Band> {
    let rank = identity.rank();
    let slice = partition(&config.bounds, &config.dimensions, identity);
    debug!(
        "[{}] band y {} .. {}, {} of {} rows",
        rank, slice.bounds.y_min, slice.bounds.y_max, slice.height, config.dimensions.height
    );

    let mut band = Band::allocate(config, &slice)?;
    let (dx, dy) = band.mapper().pitch();
    debug!(
        "[{}] picture initialized ({} x {}), step {} x {}",
        rank,
        band.width(),
        band.height(),
        dx,
        dy
    );

    band.fill_threaded(config.threads)?;
    info!("[{}] finished compute", rank);
    Ok(band)
}

/// Render this participant's band and write it next to the base
/// output path.  Returns where it went.
pub fn render_participant(config: &Config, identity: Identity) -> Result<PathBuf> {
    let band = render_band(config, identity)?;
    let path = output_path(&config.output, identity.rank());
    write_band(&band, &path)?;
    info!("[{}] saved {}", identity.rank(), path.display());
    Ok(path)
}

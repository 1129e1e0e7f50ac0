// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes a band out as a binary PPM (P6) file.  The band is gray, so
//! every pixel goes out as three identical bytes.

use image::Pixel;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use band::Band;
use error::{Error, Result};

/// Where participant `rank` writes its band: the base path with the
/// decimal rank glued straight on, so `mandel.ppm` becomes
/// `mandel.ppm2` for rank 2.
pub fn output_path(base: &str, rank: usize) -> PathBuf {
    PathBuf::from(format!("{}{}", base, rank))
}

/// Serialise `band` into `writer`: the header, then one RGB triple per
/// pixel in row-major order.
pub fn encode<W: Write>(band: &Band, writer: W) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    write!(writer, "P6\n{} {}\n255\n", band.width(), band.height())?;
    for pixel in band.image().pixels() {
        writer.write_all(pixel.to_rgb().channels())?;
    }
    writer.flush()
}

/// Create `path` and write `band` into it.  Any failure leaves the
/// file absent or truncated.
pub fn write_band(band: &Band, path: &Path) -> Result<()> {
    let output = File::create(path).map_err(|e| Error::io(path, e))?;
    encode(band, output).map_err(|e| Error::io(path, e))
}

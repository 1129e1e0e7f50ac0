// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel buffer for one participant's band.  It is allocated
//! once, filled once top to bottom and left to right, and then handed
//! to the encoder.

use crossbeam;
use image::GrayImage;

use config::Config;
use error::{Error, Result};
use escape::intensity;
use partition::LocalSlice;
use planes::{Pixel, PlaneMapper};

/// A band of gray pixels and the mapping that produced them.
pub struct Band {
    mapper: PlaneMapper,
    limit: usize,
    pixels: GrayImage,
}

impl Band {
    /// Reserve a zeroed buffer for `slice`.  Fails with `OutOfMemory`
    /// rather than aborting when the allocator says no.
    pub fn allocate(config: &Config, slice: &LocalSlice) -> Result<Band> {
        let mapper = PlaneMapper::new(&config.bounds, &config.dimensions, slice);
        let bytes = mapper.len().ok_or(Error::OutOfMemory {
            bytes: usize::max_value(),
        })?;
        let mut raw: Vec<u8> = Vec::new();
        raw.try_reserve_exact(bytes)
            .map_err(|_| Error::OutOfMemory { bytes })?;
        raw.resize(bytes, 0);
        let pixels = GrayImage::from_raw(mapper.width as u32, mapper.height as u32, raw)
            .ok_or(Error::OutOfMemory { bytes })?;
        Ok(Band {
            mapper,
            limit: config.iterations,
            pixels,
        })
    }

    /// Run the kernel over every pixel of the band on this thread.
    pub fn fill(&mut self) {
        render_rows(&self.mapper, self.limit, 0, &mut self.pixels);
    }

    /// Same as `fill`, but the rows are split into `threads` runs of
    /// consecutive rows, each rendered on its own thread.  The runs
    /// never overlap, so the result is identical to `fill`.
    pub fn fill_threaded(&mut self, threads: usize) -> Result<()> {
        let width = self.mapper.width;
        let height = self.mapper.height;
        if threads <= 1 || height < 2 || self.mapper.is_empty() {
            self.fill();
            return Ok(());
        }

        let rows_per_run = (height + threads - 1) / threads;
        let mapper = &self.mapper;
        let limit = self.limit;
        let runs: Vec<&mut [u8]> = self.pixels.chunks_mut(rows_per_run * width).collect();
        crossbeam::scope(|spawner| {
            for (i, run) in runs.into_iter().enumerate() {
                spawner.spawn(move |_| {
                    render_rows(mapper, limit, i * rows_per_run, run);
                });
            }
        })
        .map_err(|_| Error::WorkerPanicked)
    }

    /// Columns.
    pub fn width(&self) -> usize {
        self.mapper.width
    }

    /// Rows.
    pub fn height(&self) -> usize {
        self.mapper.height
    }

    /// The gray levels, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The band as an image.
    pub fn image(&self) -> &GrayImage {
        &self.pixels
    }

    /// Gray level at `column`, `row`, if the pixel is in the band.
    pub fn get(&self, column: usize, row: usize) -> Option<u8> {
        if column >= self.width() || row >= self.height() {
            return None;
        }
        Some(self.pixels()[row * self.width() + column])
    }

    /// How this band maps onto the plane.
    pub fn mapper(&self) -> &PlaneMapper {
        &self.mapper
    }
}

/// Fill `rows`, which holds whole rows of the band starting at
/// `first_row`.
fn render_rows(mapper: &PlaneMapper, limit: usize, first_row: usize, rows: &mut [u8]) {
    let width = mapper.width.max(1);
    let last_row = first_row + rows.len() / width;
    let coordinates = iproduct!(first_row..last_row, 0..mapper.width);
    for (value, (row, column)) in rows.iter_mut().zip(coordinates) {
        *value = intensity(mapper.pixel_to_point(&Pixel(column, row)), limit);
    }
}

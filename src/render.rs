// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The work is split in two phases.  First the whole picture is
//! computed into a single preallocated grid: the grid is cut into
//! contiguous bands of rows with `chunks_mut`, and each band is handed
//! to its own scoped thread.  The bands cannot overlap, so the
//! workers need no locks and no shared cursor, and since every cell is
//! a pure function of its coordinates the result is the same no matter
//! how many threads did the work.  Only when the scope has joined every
//! worker does the second phase stream the finished grid out, in
//! order, on the calling thread.

extern crate crossbeam;

use errors::{allocate, RenderError};
use escape::escape_time;
use palette::Palette;
use planes::{PlaneMapper, Viewport};
use quantize::quantize;
use std::io::Write;
use stream::stream;

/// Holds the coordinate tables and the iteration limit.  Once built,
/// it is never mutated, so any number of workers may borrow it.
pub struct Renderer {
    plane: PlaneMapper,
    limit: u32,
}

impl Renderer {
    /// Requires the width and height of the picture in cells, the
    /// window onto the complex plane, and the maximum number of
    /// iterations to try on each point before calling it interior.
    pub fn new(
        width: usize,
        height: usize,
        viewport: Viewport,
        limit: u32,
    ) -> Result<Self, RenderError> {
        if limit == 0 {
            return Err(RenderError::argument("max_iter", "must be positive"));
        }
        let plane = PlaneMapper::new(width, height, viewport)?;
        Ok(Renderer { plane, limit })
    }

    /// The coordinate tables in use.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The iteration limit.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// A zeroed row-major grid with one cell per pixel.
    fn grid<T: Clone + Default>(&self, what: &'static str) -> Result<Vec<T>, RenderError> {
        let mut grid = allocate(self.plane.len(), what)?;
        grid.resize(self.plane.len(), T::default());
        Ok(grid)
    }

    /// Fill one band of rows, starting at `first_row`.
    fn fill_band<T, F>(&self, band: &mut [T], first_row: usize, cell: &F)
    where
        F: Fn(f64, f64) -> T,
    {
        let xs = self.plane.xs();
        let ys = self.plane.ys();
        for (offset, row) in band.chunks_mut(self.plane.width()).enumerate() {
            let y0 = ys[first_row + offset];
            for (pixel, &x0) in row.iter_mut().zip(xs) {
                *pixel = cell(x0, y0);
            }
        }
    }

    /// Split `grid` into at most `threads` bands of whole rows and fill
    /// each band on its own thread.
    fn fill<T, F>(&self, grid: &mut [T], threads: usize, cell: F) -> Result<(), RenderError>
    where
        T: Send,
        F: Fn(f64, f64) -> T + Sync,
    {
        if threads == 0 {
            return Err(RenderError::argument("threads", "must be at least 1"));
        }
        let height = self.plane.height();
        let workers = threads.min(height);
        if workers == 1 {
            self.fill_band(grid, 0, &cell);
            return Ok(());
        }

        let rows_per_band = (height + workers - 1) / workers;
        debug!(
            "splitting {} rows into bands of {} across {} workers",
            height, rows_per_band, workers
        );
        let cell = &cell;
        crossbeam::scope(|spawner| {
            for (band_index, band) in grid
                .chunks_mut(rows_per_band * self.plane.width())
                .enumerate()
            {
                spawner.spawn(move |_| {
                    self.fill_band(band, band_index * rows_per_band, cell);
                });
            }
        })
        .map_err(|_| RenderError::Worker)
    }

    /// The escape-time count of every pixel, row-major.
    pub fn iterations(&self, threads: usize) -> Result<Vec<u32>, RenderError> {
        let limit = self.limit;
        let mut grid: Vec<u32> = self.grid("iteration grid")?;
        self.fill(&mut grid, threads, |x0, y0| escape_time(x0, y0, limit))?;
        Ok(grid)
    }

    /// The palette index of every pixel, row-major.  Each cell is
    /// `quantize(iterations[cell], limit)`.
    pub fn colors(&self, threads: usize) -> Result<Vec<u8>, RenderError> {
        let limit = self.limit;
        let mut grid: Vec<u8> = self.grid("color grid")?;
        self.fill(&mut grid, threads, |x0, y0| {
            quantize(escape_time(x0, y0, limit), limit)
        })?;
        Ok(grid)
    }

    /// Compute the whole picture, then stream it to `out`.  The palette
    /// must be built before the call; it is only ever read.
    pub fn render<W: Write>(
        &self,
        palette: &Palette,
        threads: usize,
        out: &mut W,
    ) -> Result<(), RenderError> {
        let colors = self.colors(threads)?;
        stream(palette, &colors, self.plane.width(), out)
    }
}

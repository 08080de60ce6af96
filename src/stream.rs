//! Ordered emission of a finished color grid.
//!
//! Rows go out top to bottom, cells left to right.  Each row is
//! assembled in a buffer reserved once for the whole run and handed to
//! the output in a single `write`.  A write that errors or comes back
//! short ends the run: rows already written stay written, nothing
//! after them is attempted.
//!
//! Std's `Stdout` is line buffered: a short write on the descriptor is
//! swallowed by the buffer and finished later.  Rows bound for the
//! terminal therefore go through [`unbuffered`], where one `write` is
//! one system call.

use errors::{allocate, RenderError};
use palette::Palette;
#[cfg(unix)]
use std::fs::File;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::io::AsFd;

/// Assembles rows of palette entries into a reusable buffer.
pub struct RowStreamer<'a> {
    palette: &'a Palette,
    width: usize,
    row: Vec<u8>,
}

impl<'a> RowStreamer<'a> {
    /// Reserve a row buffer big enough for `width` of the palette's
    /// longest entries plus the newline.
    pub fn new(palette: &'a Palette, width: usize) -> Result<RowStreamer<'a>, RenderError> {
        if width == 0 {
            return Err(RenderError::argument("width", "must be positive"));
        }
        let capacity = width
            .checked_mul(palette.max_len())
            .and_then(|bytes| bytes.checked_add(1))
            .ok_or(RenderError::Allocation { what: "row buffer" })?;
        let row = allocate(capacity, "row buffer")?;
        Ok(RowStreamer {
            palette,
            width,
            row,
        })
    }

    /// Write one row of color indices to `out`.  `index` is only used
    /// to say where things went wrong.
    pub fn emit_row<W: Write>(
        &mut self,
        index: usize,
        colors: &[u8],
        out: &mut W,
    ) -> Result<(), RenderError> {
        debug_assert_eq!(colors.len(), self.width);
        self.row.clear();
        for &color in colors {
            self.row.extend_from_slice(self.palette.entry(color));
        }
        self.row.push(b'\n');

        let written = out.write(&self.row)?;
        if written != self.row.len() {
            return Err(RenderError::ShortWrite {
                row: index,
                written,
                expected: self.row.len(),
            });
        }
        Ok(())
    }

    /// Write every row of a row-major color grid, then flush.
    pub fn emit_all<W: Write>(&mut self, colors: &[u8], out: &mut W) -> Result<(), RenderError> {
        if colors.len() % self.width != 0 {
            return Err(RenderError::argument(
                "width",
                format!("{} cells do not divide into rows of {}", colors.len(), self.width),
            ));
        }
        for (index, row) in colors.chunks(self.width).enumerate() {
            self.emit_row(index, row, out)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Stream a whole color grid of the given width to `out`.
pub fn stream<W: Write>(
    palette: &Palette,
    colors: &[u8],
    width: usize,
    out: &mut W,
) -> Result<(), RenderError> {
    let mut streamer = RowStreamer::new(palette, width)?;
    streamer.emit_all(colors, out)?;
    debug!("streamed {} rows of {} cells", colors.len() / width, width);
    Ok(())
}

/// A `File` sharing the descriptor behind `handle`, with no buffering
/// in between.  Used on `io::stdout()` so short writes reach the
/// streamer instead of being retried behind its back.
#[cfg(unix)]
pub fn unbuffered<H: AsFd>(handle: &H) -> Result<File, RenderError> {
    let fd = handle.as_fd().try_clone_to_owned()?;
    Ok(File::from(fd))
}

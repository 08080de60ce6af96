//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0
//! (the terminal cells), and a rectangle on the complex plane
//! described by a center and a zoom radius.
use errors::{allocate, RenderError};
use num::Complex;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the column, row of a cell in the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// The window on the complex plane we want to look through.  The
/// zoom is the distance from the center to the left and right edges;
/// the vertical extent follows from the aspect ratio of the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// The point that lands in the middle of the picture.
    pub center: Complex<f64>,
    /// Half the width of the window, on the real axis.
    pub zoom: f64,
}

impl Viewport {
    /// Constructor.  The center is given as separate real and
    /// imaginary parts because that's how it arrives on the command
    /// line.
    pub fn new(center_x: f64, center_y: f64, zoom: f64) -> Viewport {
        Viewport {
            center: Complex::new(center_x, center_y),
            zoom,
        }
    }
}

/// Contains the definitions of two planes: an integral cartesian
/// plane, and a window on the complex plane.  The coordinate of every
/// column and every row is computed once, up front, so that the
/// workers only ever do table lookups.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The size of the integral cartesian plane.
    pub integral_plane: IntegralPlane,
    /// The complex window mapped onto it.
    pub viewport: Viewport,
    // Upper-left corner of the window (xmin, ymin).
    origin: Complex<f64>,
    // The size of one cell on the complex plane (dx, dy).
    grid_factors: (f64, f64),
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PlaneMapper {
    /// Constructor.  Takes the dimensions of the integral plane and the
    /// viewport, and fills in the per-column and per-row coordinate
    /// tables.
    pub fn new(width: usize, height: usize, viewport: Viewport) -> Result<PlaneMapper, RenderError> {
        if width == 0 {
            return Err(RenderError::argument("width", "must be positive"));
        }
        if height == 0 {
            return Err(RenderError::argument("height", "must be positive"));
        }
        if !(viewport.zoom > 0.0) || !viewport.zoom.is_finite() {
            return Err(RenderError::argument("zoom", "must be positive and finite"));
        }
        // The grid must be addressable before any table is built.
        if width.checked_mul(height).is_none() {
            return Err(RenderError::Allocation { what: "pixel grid" });
        }

        let aspect = height as f64 / width as f64;
        let origin = Complex::new(
            viewport.center.re - viewport.zoom,
            viewport.center.im - viewport.zoom * aspect,
        );
        let grid_factors = (
            2.0 * viewport.zoom / width as f64,
            2.0 * viewport.zoom * aspect / height as f64,
        );

        let mut xs = allocate(width, "column coordinates")?;
        xs.extend((0..width).map(|px| origin.re + grid_factors.0 * px as f64));
        let mut ys = allocate(height, "row coordinates")?;
        ys.extend((0..height).map(|py| origin.im + grid_factors.1 * py as f64));

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            viewport,
            origin,
            grid_factors,
            xs,
            ys,
        })
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// The upper-left corner of the window, `xmin + ymin i`.
    pub fn origin(&self) -> Complex<f64> {
        self.origin
    }

    /// The width and height of one cell on the complex plane.
    pub fn steps(&self) -> (f64, f64) {
        self.grid_factors
    }

    /// The real coordinate of every column, left to right.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The imaginary coordinate of every row, top to bottom.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Given a pixel on the integral cartesian plane, return the point
    /// on the complex plane it samples.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(self.xs[pixel.0], self.ys[pixel.1])
    }
}

#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Terminal Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring `z` and adding `c` never runs off to
//! infinity.  Points outside the set escape, and the number of
//! iterations it took them to escape (their "velocity") is what we
//! paint.
//!
//! This crate maps a grid of terminal cells onto a window of the
//! complex plane, counts the escape iterations for every cell on a
//! pool of worker threads, squeezes each count into one of the 256
//! xterm background colors, and streams the picture out row by row
//! as ANSI escape sequences.  Point a terminal at the output and you
//! get the picture.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate clap;
extern crate crossbeam;
extern crate num;
extern crate num_cpus;
#[cfg(test)]
extern crate tempfile;

pub mod config;
pub mod errors;
pub mod escape;
pub mod palette;
pub mod planes;
pub mod quantize;
pub mod render;
pub mod stream;

pub use config::Config;
pub use errors::RenderError;
pub use palette::Palette;
pub use planes::{PlaneMapper, Viewport};
pub use render::Renderer;

extern crate env_logger;
#[macro_use]
extern crate log;
extern crate termbrot;

use std::io;
use std::process;
use std::time::Instant;
use termbrot::{Config, Palette, RenderError, Renderer};

#[cfg(unix)]
fn stdout() -> Result<std::fs::File, RenderError> {
    termbrot::stream::unbuffered(&io::stdout())
}

#[cfg(not(unix))]
fn stdout() -> Result<io::Stdout, RenderError> {
    Ok(io::stdout())
}

fn run(config: &Config) -> Result<(), RenderError> {
    info!(
        "rendering {}x{} cells, {} iterations, center {}, zoom {}, {} threads",
        config.width,
        config.height,
        config.max_iter,
        config.viewport.center,
        config.viewport.zoom,
        config.threads
    );

    let renderer = Renderer::new(
        config.width,
        config.height,
        config.viewport,
        config.max_iter,
    )?;
    let palette = Palette::new();

    let started = Instant::now();
    let colors = renderer.colors(config.threads)?;
    debug!("computed {} cells in {:?}", colors.len(), started.elapsed());

    let mut out = stdout()?;
    termbrot::stream::stream(&palette, &colors, config.width, &mut out)?;
    debug!("finished in {:?}", started.elapsed());
    Ok(())
}

fn main() {
    env_logger::init();

    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(RenderError::Usage(e)) => e.exit(),
        Err(e) => {
            eprintln!("termbrot: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("termbrot: {}", e);
        process::exit(1);
    }
}

//! Command-line configuration.
//!
//! Six positional arguments describe the picture: `width height
//! max_iter center_x center_y zoom`.  Validation happens in clap
//! validators, so a bad value is reported before any work starts, and
//! clap exits with status 1 on its own.  Negative coordinates such as
//! `-0.75` are taken as values, not flags.

use clap::{App, AppSettings, Arg, ArgMatches};
use errors::RenderError;
use planes::Viewport;
use num_cpus;
use std::ffi::OsString;
use std::str::FromStr;

const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const MAX_ITER: &str = "max_iter";
const CENTER_X: &str = "center_x";
const CENTER_Y: &str = "center_y";
const ZOOM: &str = "zoom";
const THREADS: &str = "threads";

/// The upper bound on `--threads`.
pub const MAX_THREADS: usize = 1024;

/// Everything needed for one run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Picture width, in cells.
    pub width: usize,
    /// Picture height, in cells.
    pub height: usize,
    /// Iterations to try before a point is called interior.
    pub max_iter: u32,
    /// The window onto the complex plane.
    pub viewport: Viewport,
    /// Number of worker threads computing the picture.
    pub threads: usize,
}

fn validate_positive<T>(s: &str, name: &str) -> Result<(), String>
where
    T: FromStr + PartialOrd + Default,
{
    match T::from_str(s) {
        Ok(v) => {
            if v > T::default() {
                Ok(())
            } else {
                Err(format!("{} must be positive", name))
            }
        }
        Err(_) => Err(format!("Could not parse {} '{}' as a whole number", name, s)),
    }
}

fn validate_real(s: &str, name: &str, positive: bool) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(v) if !v.is_finite() => Err(format!("{} must be finite", name)),
        Ok(v) if positive && v <= 0.0 => Err(format!("{} must be positive", name)),
        Ok(_) => Ok(()),
        Err(_) => Err(format!("Could not parse {} '{}' as a number", name, s)),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("termbrot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders the Mandelbrot set as 256-color ANSI text on stdout")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name(WIDTH)
                .required(true)
                .index(1)
                .validator(|s| validate_positive::<usize>(&s, WIDTH))
                .help("Width of the picture, in cells"),
        )
        .arg(
            Arg::with_name(HEIGHT)
                .required(true)
                .index(2)
                .validator(|s| validate_positive::<usize>(&s, HEIGHT))
                .help("Height of the picture, in cells"),
        )
        .arg(
            Arg::with_name(MAX_ITER)
                .required(true)
                .index(3)
                .validator(|s| validate_positive::<u32>(&s, MAX_ITER))
                .help("Iterations to try before a point counts as inside the set"),
        )
        .arg(
            Arg::with_name(CENTER_X)
                .required(true)
                .index(4)
                .validator(|s| validate_real(&s, CENTER_X, false))
                .help("Real part of the center of the picture"),
        )
        .arg(
            Arg::with_name(CENTER_Y)
                .required(true)
                .index(5)
                .validator(|s| validate_real(&s, CENTER_Y, false))
                .help("Imaginary part of the center of the picture"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .required(true)
                .index(6)
                .validator(|s| validate_real(&s, ZOOM, true))
                .help("Distance from the center to the left and right edges"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        MAX_THREADS,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", MAX_THREADS),
                    )
                })
                .help("Number of threads to use [default: one per CPU]"),
        )
}

fn value<T: FromStr>(matches: &ArgMatches, name: &'static str) -> Result<T, RenderError> {
    let raw = matches
        .value_of(name)
        .ok_or_else(|| RenderError::argument(name, "missing"))?;
    T::from_str(raw).map_err(|_| RenderError::argument(name, format!("could not parse '{}'", raw)))
}

impl Config {
    /// Parse a full argument list, program name first.  Clap's own
    /// errors (wrong count, unknown flags, failed validators, `--help`)
    /// come back as `RenderError::Usage` for the caller to print.
    pub fn from_args<I, T>(args: I) -> Result<Config, RenderError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;
        Config::from_matches(&matches)
    }

    /// Build a configuration out of already-validated matches.
    pub fn from_matches(matches: &ArgMatches) -> Result<Config, RenderError> {
        let threads = match matches.value_of(THREADS) {
            Some(_) => value(matches, THREADS)?,
            None => num_cpus::get(),
        };
        Ok(Config {
            width: value(matches, WIDTH)?,
            height: value(matches, HEIGHT)?,
            max_iter: value(matches, MAX_ITER)?,
            viewport: Viewport::new(
                value(matches, CENTER_X)?,
                value(matches, CENTER_Y)?,
                value(matches, ZOOM)?,
            ),
            threads,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, RenderError> {
        Config::from_args(Some("termbrot").into_iter().chain(args.iter().cloned()))
    }

    #[test]
    fn six_positional_arguments() {
        let config = parse(&["80", "24", "500", "-0.75", "0.1", "1.5", "--threads", "3"])
            .unwrap();
        assert_eq!(
            config,
            Config {
                width: 80,
                height: 24,
                max_iter: 500,
                viewport: Viewport::new(-0.75, 0.1, 1.5),
                threads: 3,
            }
        );
    }

    #[test]
    fn threads_default_to_the_cpu_count() {
        let config = parse(&["2", "1", "1", "0", "0", "2"]).unwrap();
        assert_eq!(config.threads, num_cpus::get());
    }

    #[test]
    fn wrong_argument_counts_fail() {
        assert!(parse(&["2", "1", "1", "0", "0"]).is_err());
        assert!(parse(&["2", "1", "1", "0", "0", "2", "7"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn non_numeric_arguments_fail() {
        assert!(parse(&["two", "1", "1", "0", "0", "2"]).is_err());
        assert!(parse(&["2", "1", "1.5", "0", "0", "2"]).is_err());
        assert!(parse(&["2", "1", "1", "zero", "0", "2"]).is_err());
        assert!(parse(&["2", "1", "1", "0", "0", "2x"]).is_err());
    }

    #[test]
    fn non_positive_arguments_fail() {
        assert!(parse(&["0", "1", "1", "0", "0", "2"]).is_err());
        assert!(parse(&["2", "-1", "1", "0", "0", "2"]).is_err());
        assert!(parse(&["2", "1", "0", "0", "0", "2"]).is_err());
        assert!(parse(&["2", "1", "1", "0", "0", "0"]).is_err());
        assert!(parse(&["2", "1", "1", "0", "0", "-2"]).is_err());
    }

    #[test]
    fn non_finite_reals_fail() {
        assert!(parse(&["2", "1", "1", "NaN", "0", "2"]).is_err());
        assert!(parse(&["2", "1", "1", "0", "0", "inf"]).is_err());
    }

    #[test]
    fn thread_counts_are_bounded() {
        assert!(parse(&["2", "1", "1", "0", "0", "2", "-t", "0"]).is_err());
        assert!(parse(&["2", "1", "1", "0", "0", "2", "-t", "4096"]).is_err());
        assert!(parse(&["2", "1", "1", "0", "0", "2", "-t", "many"]).is_err());
    }

    #[test]
    fn help_is_a_usage_error() {
        match parse(&["--help"]) {
            Err(RenderError::Usage(e)) => assert_eq!(e.kind, ::clap::ErrorKind::HelpDisplayed),
            other => panic!("expected help, got {:?}", other),
        }
    }

    #[test]
    fn validators_explain_themselves() {
        assert_eq!(
            validate_positive::<usize>("0", "width"),
            Err("width must be positive".to_string())
        );
        assert_eq!(
            validate_real("-1", "zoom", true),
            Err("zoom must be positive".to_string())
        );
        assert!(validate_real("-1", "center_x", false).is_ok());
    }
}

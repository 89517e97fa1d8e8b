//! Command-line options and the top-level run loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use ballpath_paths::find_shortest_path;
use clap::Parser;
use log::{LevelFilter, info, warn};

use crate::input::{self, GridInput};
use crate::render::{self, Markers};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "BALLPATH_LOG";
/// Environment variable holding the log colour style.
pub const LOG_STYLE_ENV: &str = "BALLPATH_LOG_STYLE";

const PROMPT: &str = "Enter path to the file with input data: ";
const READ_FAILED: &str = "Failed to read data from file. Check the specified file path.";

/// Find the shortest route between two cells of a grid of balls.
#[derive(Debug, Default, Parser)]
#[command(name = "ballpath", version, about)]
pub struct Cli {
    /// Grid file to solve. Prompts for a path on stdin when omitted.
    pub file: Option<PathBuf>,

    /// Print the route as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Skip the annotated grid in text output.
    #[arg(long)]
    pub no_grid: bool,

    /// Log debug output when BALLPATH_LOG is not set.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the global logger.
///
/// `BALLPATH_LOG` takes precedence; otherwise `verbose` selects between
/// debug and warning level.
pub fn init_logging(verbose: bool) {
    if std::env::var_os(LOG_ENV).is_some() {
        let env = env_logger::Env::new()
            .filter(LOG_ENV)
            .write_style(LOG_STYLE_ENV);
        env_logger::init_from_env(env);
        return;
    }
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();
}

/// Ask for a file path until one loads and parses.
///
/// Read and parse failures are reported on `output` and followed by a new
/// prompt. Running out of input is an error.
pub fn prompt_for_input<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<GridInput> {
    let mut line = String::new();
    loop {
        writeln!(output, "{PROMPT}")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("no grid file given");
        }
        let path = PathBuf::from(line.trim());
        match input::load(&path) {
            Ok(data) => return Ok(data),
            Err(e) => {
                warn!("{e}");
                writeln!(output, "{READ_FAILED}")?;
            }
        }
    }
}

/// Load the grid, solve it and print the result to `output`.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, output: &mut W) -> Result<()> {
    let data = match &cli.file {
        Some(path) => input::load(path)
            .with_context(|| format!("failed to load grid from {}", path.display()))?,
        None => prompt_for_input(input, output)?,
    };

    let route = find_shortest_path(&data.grid, data.start, data.end)?;
    info!(
        "route from {} to {}: reachable={} steps={}",
        data.start, data.end, route.reachable, route.distance
    );

    if cli.json {
        let json = render::render_json(&data.grid, data.start, data.end, &route)
            .context("failed to encode route as JSON")?;
        writeln!(output, "{json}")?;
    } else {
        let text = render::render_report(
            &data.grid,
            data.start,
            &route,
            &Markers::default(),
            !cli.no_grid,
        );
        write!(output, "{text}")?;
    }
    Ok(())
}

//! NG: National Grid northing/easting to OSGB36 latitude/longitude
use anyhow::Context;
use clap::Parser;
use log::{debug, trace, warn};
use natgrid::prelude::*;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// Convert British National Grid coordinates to OSGB36 latitude and longitude.
///
/// Input is one "northing easting" pair per line, separated by whitespace
/// or a comma. Blank lines and lines starting with '#' are skipped.
/// Output is "latitude longitude" in decimal degrees, one line per point.
#[derive(Parser, Debug)]
#[clap(name = "ng")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of decimals in the output
    #[clap(short = 'd', long, default_value_t = 9)]
    decimals: usize,

    /// Echo input to output
    #[clap(short, long)]
    echo: bool,

    /// Give up on the footpoint iteration after this many steps
    #[clap(long, default_value_t = natgrid::grid::MAX_ITERATIONS)]
    max_iterations: usize,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The files to operate on. Reads stdin if none are given
    args: Vec<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    trace!("This is NG");
    debug!("{:#?}", options);

    let grid = NationalGrid::new().with_max_iterations(options.max_iterations);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if options.args.is_empty() {
        let stdin = io::stdin();
        convert(&grid, &options, stdin.lock(), &mut out)?;
    } else {
        for path in &options.args {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Cannot open {}", path.display()))?;
            convert(&grid, &options, BufReader::new(file), &mut out)?;
        }
    }
    Ok(())
}

fn convert(
    grid: &NationalGrid,
    options: &Cli,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), anyhow::Error> {
    let decimals = options.decimals;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let (lat, lon) = match parse_pair(text) {
            Some((northing, easting)) => match grid.to_geographic(northing, easting) {
                Ok(geo) => geo,
                Err(e) => {
                    warn!("line {}: {e}", index + 1);
                    (f64::NAN, f64::NAN)
                }
            },
            None => {
                warn!("line {}: cannot parse '{text}'", index + 1);
                (f64::NAN, f64::NAN)
            }
        };

        if options.echo {
            write!(out, "{text}  ")?;
        }
        writeln!(out, "{lat:.decimals$} {lon:.decimals$}")?;
    }
    Ok(())
}

/// Split a line into a northing/easting pair
fn parse_pair(text: &str) -> Option<(f64, f64)> {
    let mut items = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|item| !item.is_empty());
    let northing = items.next()?.parse::<f64>().ok()?;
    let easting = items.next()?.parse::<f64>().ok()?;
    if items.next().is_some() {
        return None;
    }
    Some((northing, easting))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs() {
        assert_eq!(parse_pair("1 2"), Some((1., 2.)));
        assert_eq!(parse_pair("313177.270, 651409.903"), Some((313177.27, 651409.903)));
        assert_eq!(parse_pair("  -100000\t400000 "), Some((-100000., 400000.)));
        assert_eq!(parse_pair("1"), None);
        assert_eq!(parse_pair("1 2 3"), None);
        assert_eq!(parse_pair("north east"), None);
    }

    #[test]
    fn conversion() -> Result<(), anyhow::Error> {
        let options = Cli::parse_from(["ng", "-d", "6", "--echo"]);
        let grid = NationalGrid::new();
        let input = "# OS worked example\n\n313177.270 651409.903\nfoo bar\n";
        let mut out = Vec::new();
        convert(&grid, &options, input.as_bytes(), &mut out)?;
        let out = String::from_utf8(out)?;
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "313177.270 651409.903  52.657570 1.717922");
        assert_eq!(lines[1], "foo bar  NaN NaN");
        Ok(())
    }
}

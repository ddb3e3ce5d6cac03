use std::fs;
use std::io::{self, Read};

use anyhow::{anyhow, Context, Result};
use gap::cli::{self, Bencher, Command, Mode, Opts};
use gap::freq::tuning_frequency;
use gap::geom::Sensor;
use gap::input::{self, IStr};
use gap::scan::{count_row, Bound, Scanner};

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let command = opts.command()?;

    let (path, data) = read_input(&opts)?;

    let sensors = match input::sensors(&mut IStr::new(&data)) {
        Ok(sensors) => sensors,
        Err(error) => return Err(cli::error_context(&path, &data, error)),
    };

    log::info!("{path}: {} sensors", sensors.len());

    let mut o = opts.output();

    match opts.mode {
        Mode::Default => {
            let answer = solve(&opts, command, &sensors)?;
            o.answer(&answer)?;
        }
        Mode::Bench => {
            let mut b = Bencher::new();
            b.iter(&opts, &mut o, || solve(&opts, command, &sensors))?;
        }
    }

    Ok(())
}

/// Run the selected computation over the parsed sensors.
fn solve(opts: &Opts, command: Command, sensors: &[Sensor]) -> Result<i64> {
    match command {
        Command::Row(y) => {
            let count = count_row(sensors, y);
            log::debug!("row {y}: {count} cells cannot contain a beacon");
            i64::try_from(count).context("count out of range")
        }
        Command::Gap(bound) => {
            let mut scanner = Scanner::new(sensors, Bound::new(bound)?);

            let gap = if opts.strict {
                scanner.find_unique_gap()?
            } else {
                scanner.find_gap()?
            };

            log::info!("uncovered cell at {gap}");
            Ok(tuning_frequency(gap))
        }
    }
}

/// Read the whole input, returning a printable name for it along with its
/// contents.
fn read_input(opts: &Opts) -> Result<(String, Vec<u8>)> {
    match &opts.input {
        Some(path) => {
            let name = path.display().to_string();
            let data = fs::read(path).with_context(|| anyhow!("{name}"))?;
            Ok((name, data))
        }
        None => {
            let mut data = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut data)
                .context("<stdin>")?;
            Ok((String::from("<stdin>"), data))
        }
    }
}

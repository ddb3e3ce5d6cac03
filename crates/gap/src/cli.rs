//! CLI helpers.

mod bencher;
pub(crate) mod error;
mod output;
mod stderr_logger;


use core::fmt;
use core::time::Duration;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

pub use self::bencher::Bencher;
pub use self::error::{error_context, LineCol};
pub use self::output::{Output, OutputKind};

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Run mode.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// What to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Count the cells on the given row which cannot contain a beacon.
    Row(i64),
    /// Search the square bounded by the given value for the uncovered cell.
    Gap(i64),
}

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// The command to run.
    pub command: Option<Command>,
    /// Read input from the given path instead of stdin.
    pub input: Option<PathBuf>,
    /// Verify that exactly one cell is uncovered.
    pub strict: bool,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options from the environment and set up logging.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDERR_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse CLI options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--strict" => {
                    opts.strict = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--input" => {
                    let input = it.next().context("missing argument to `--input`")?;
                    opts.input = Some(PathBuf::from(input));
                }
                "--warmup" => {
                    opts.warmup = Some(value(&mut it, "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(value(&mut it, "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(value(&mut it, "--count")?);
                }
                "row" => {
                    opts.set_command(Command::Row(value(&mut it, "row")?))?;
                }
                "gap" => {
                    opts.set_command(Command::Gap(value(&mut it, "gap")?))?;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        if opts.command.is_none() {
            bail!("missing command, expected `row <y>` or `gap <bound>`");
        }

        Ok(opts)
    }

    /// The command to run.
    pub fn command(&self) -> Result<Command> {
        self.command
            .context("missing command, expected `row <y>` or `gap <bound>`")
    }

    /// Construct an output writer according to the options.
    pub fn output(&self) -> Output<io::StdoutLock<'static>> {
        let kind = if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        };

        Output::new(io::stdout().lock(), kind)
    }

    fn set_command(&mut self, command: Command) -> Result<()> {
        if let Some(existing) = self.command {
            bail!("conflicting commands: {existing:?} and {command:?}");
        }

        self.command = Some(command);
        Ok(())
    }
}

/// Parse the value following an option.
fn value<T, I>(it: &mut I, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    I: Iterator<Item = OsString>,
{
    let value = it
        .next()
        .with_context(|| anyhow!("missing argument to `{name}`"))?;

    let value = value
        .to_str()
        .with_context(|| anyhow!("missing string argument to `{name}`"))?;

    value
        .parse()
        .with_context(|| anyhow!("bad argument to `{name}`"))
}

/// Timing summary of a bench run.
#[derive(Default, Debug, Deserialize, Serialize)]
pub struct Report {
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl Report {
    /// Summarize the given samples.
    fn new(mut samples: Vec<Duration>) -> Self {
        samples.sort();

        let count = samples.len();
        let sum = samples.iter().sum::<Duration>();

        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(
                u64::try_from(sum.as_nanos() / (count as u128)).unwrap_or_default(),
            )
        };

        Self {
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
            p50: percentile(&samples, 5000),
            p95: percentile(&samples, 9500),
            p99: percentile(&samples, 9900),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            count,
            min,
            max,
            avg,
            p50,
            p95,
            p99,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

/// Pick the sample at the given percentile, expressed in hundredths of a
/// percent. Expects `samples` to be sorted.
fn percentile(samples: &[Duration], p: usize) -> Duration {
    if samples.is_empty() {
        return Duration::default();
    }

    let index = (samples.len() * p / 10000).min(samples.len() - 1);
    samples[index]
}

use core::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};

use crate::cli::{Opts, Output, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default bench period in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

/// Runs a computation repeatedly and reports how long it took.
#[derive(Default)]
pub struct Bencher {
    expected: Option<String>,
}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn.
    ///
    /// Every run must produce the same value as the first one, otherwise the
    /// bench is aborted. A failing run is written to the output and then
    /// returned.
    pub fn iter<T, O, W>(&mut self, opts: &Opts, o: &mut Output<W>, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O>,
        O: fmt::Debug,
        W: Write,
    {
        if let Err(e) = self.inner_iter(o, opts, iter) {
            o.error(format_args!("{e:#}"))?;
            return Err(e);
        }

        Ok(())
    }

    fn inner_iter<T, O, W>(&mut self, o: &mut Output<W>, opts: &Opts, mut iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O>,
        O: fmt::Debug,
        W: Write,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        if !warmup.is_zero() {
            let s = Instant::now();

            o.info(format_args!("warming up ({warmup:?})..."))?;

            loop {
                let value = iter()?;
                let after = Instant::now();
                self.check(value)?;

                if after.duration_since(s) >= warmup {
                    break;
                }
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                let before = Instant::now();
                let value = iter()?;
                let after = Instant::now();
                self.check(value)?;
                samples.push(after.duration_since(before));
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                let before = Instant::now();
                let value = iter()?;
                let after = Instant::now();
                self.check(value)?;
                samples.push(after.duration_since(before));

                if after.duration_since(start) >= time_limit {
                    break;
                }
            }
        }

        o.report(&Report::new(samples))?;
        Ok(())
    }

    /// Compare a produced value against the first one seen.
    fn check<O>(&mut self, value: O) -> Result<()>
    where
        O: fmt::Debug,
    {
        let value = format!("{:?}", black_box(value));

        match &self.expected {
            Some(expected) if *expected != value => {
                bail!("{value} (value) != {expected} (expected)");
            }
            Some(..) => {}
            None => {
                self.expected = Some(value);
            }
        }

        Ok(())
    }
}

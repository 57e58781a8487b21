use std::{
    collections::HashMap,
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::grid;

#[derive(Debug)]
pub enum Error {
    NoStones,
    InvalidStoneText(String),
    NumberOverflow(u64),
    CountOverflow,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoStones => write!(f, "No stones given, expect at least one number."),
            Error::InvalidStoneText(s) => write!(f, "Invalid text({}) for stone.", s),
            Error::NumberOverflow(n) => write!(
                f,
                "Number on stone({}) overflows when multiplied by 2024.",
                n
            ),
            Error::CountOverflow => write!(f, "Number of stones overflows."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// The number of times to blink
    #[arg(short, long, default_value_t = 1)]
    pub blinks: usize,
    /// The stones, as a single whitespace separated line
    #[arg(short, long, default_value = "125 17")]
    pub input: String,
    /// File whose first line holds the stones, read instead of --input
    #[arg(short, long)]
    pub path: Option<PathBuf>,
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Replace(u64),
    Split(u64, u64),
}

/// What a single stone turns into after one blink.
pub fn change(n: u64) -> Result<Change, Error> {
    if n == 0 {
        return Ok(Change::Replace(1));
    }

    let digit_n = n.ilog10() + 1;
    if digit_n % 2 == 0 {
        let split_factor = 10u64.pow(digit_n / 2);
        Ok(Change::Split(n / split_factor, n % split_factor))
    } else {
        n.checked_mul(2024)
            .map(Change::Replace)
            .ok_or(Error::NumberOverflow(n))
    }
}

/// Stones keyed by their number. The order of stones never matters for
/// counting, so equal stones share one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoneLine {
    counts: HashMap<u64, u64>,
}

impl Display for StoneLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries = self.counts.iter().collect::<Vec<_>>();
        entries.sort_unstable();
        write!(f, "[")?;
        for (ind, (n, count)) in entries.into_iter().enumerate() {
            if ind > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}x{}", n, count)?;
        }
        write!(f, "]")
    }
}

impl TryFrom<&str> for StoneLine {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut counts = HashMap::new();
        for s in value.split_ascii_whitespace() {
            let n = s
                .parse::<u64>()
                .map_err(|_| Error::InvalidStoneText(s.to_string()))?;
            add_count(&mut counts, n, 1)?;
        }

        if counts.is_empty() {
            return Err(Error::NoStones);
        }

        Ok(Self { counts })
    }
}

impl StoneLine {
    pub fn blink(&mut self) -> Result<(), Error> {
        let mut next_counts = HashMap::with_capacity(self.counts.len() * 2);
        for (&n, &count) in self.counts.iter() {
            match change(n)? {
                Change::Replace(m) => add_count(&mut next_counts, m, count)?,
                Change::Split(left, right) => {
                    add_count(&mut next_counts, left, count)?;
                    add_count(&mut next_counts, right, count)?;
                }
            }
        }
        self.counts = next_counts;

        Ok(())
    }

    pub fn blink_n(&mut self, blink_n: usize) -> Result<(), Error> {
        for blink_ind in 0..blink_n {
            self.blink()?;
            debug!(
                blink = blink_ind + 1,
                distinct = self.distinct_n(),
                "Blinked at stones."
            );
        }

        Ok(())
    }

    pub fn total(&self) -> Result<u64, Error> {
        self.counts
            .values()
            .try_fold(0u64, |sum, count| sum.checked_add(*count))
            .ok_or(Error::CountOverflow)
    }

    pub fn count_of(&self, n: u64) -> u64 {
        self.counts.get(&n).copied().unwrap_or(0)
    }

    pub fn distinct_n(&self) -> usize {
        self.counts.len()
    }
}

fn add_count(counts: &mut HashMap<u64, u64>, n: u64, count: u64) -> Result<(), Error> {
    let entry = counts.entry(n).or_insert(0);
    *entry = entry.checked_add(count).ok_or(Error::CountOverflow)?;

    Ok(())
}

pub fn read_stones<P: AsRef<Path>>(path: P) -> Result<StoneLine> {
    let text = grid::read_text(&path)?;
    let line = text.lines().next().ok_or(Error::NoStones)?;
    StoneLine::try_from(line)
        .with_context(|| format!("Failed to parse stones from given text({}).", line))
}

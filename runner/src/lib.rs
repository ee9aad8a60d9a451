#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod output;

use anyhow::{Context, Result};
use log::info;
use std::{
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{0} is a directory")]
    IsDirectory(PathBuf),
}

pub trait Reader: BufRead {}

impl<T> Reader for T where T: BufRead {}

pub fn file_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let meta = file.metadata()?;

    if meta.is_dir() {
        return Err(InputError::IsDirectory(path.to_owned()).into());
    }

    Ok(BufReader::new(file))
}

pub fn parse_string<R: Reader>(mut r: R) -> Result<String> {
    let mut buf = String::new();
    r.read_to_string(&mut buf)
        .with_context(|| "input is not valid UTF-8 text")?;
    Ok(buf)
}

/// Where the puzzle input is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// A path selects a file; no path means STDIN.
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Source::Stdin, Source::File)
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

fn timed<T, F>(f: F) -> Result<Timed<T>>
where
    F: FnOnce() -> Result<T>,
{
    let now = Instant::now();
    let value = f()?;
    Ok(Timed {
        value,
        elapsed: now.elapsed(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome<A, B> {
    pub first: Timed<A>,
    pub second: Timed<B>,
}

/// A two part puzzle whose second part continues from the state the first
/// part left behind.
pub trait Solver {
    type Input;
    type State;
    type Output1: Display;
    type Output2: Display;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input>;
    fn prepare(&self, input: Self::Input) -> Result<Self::State>;
    fn solve_first(&self, state: &mut Self::State) -> Result<Self::Output1>;
    fn solve_second(&self, state: &mut Self::State) -> Result<Self::Output2>;

    fn run<R: Reader>(
        &self,
        r: R,
    ) -> Result<Outcome<Self::Output1, Self::Output2>> {
        let input = self.parse_input(r).context("invalid input")?;
        let mut state = self.prepare(input)?;

        let first = timed(|| self.solve_first(&mut state))
            .context("part 1 failed")?;
        info!("part 1 took {}", output::format_duration(first.elapsed));

        let second = timed(|| self.solve_second(&mut state))
            .context("part 2 failed")?;
        info!("part 2 took {}", output::format_duration(second.elapsed));

        Ok(Outcome { first, second })
    }

    fn solve(&self, source: &Source) -> Result<()> {
        info!("reading input from {}", source);
        let outcome = match source {
            Source::Stdin => {
                let stdin = io::stdin();
                let lock = stdin.lock();
                self.run(lock)?
            },
            Source::File(path) => {
                let reader = file_reader(path).with_context(|| {
                    format!("unable to open input file {}", path.display())
                })?;
                self.run(reader)?
            },
        };

        output::print_part(1, &outcome.first.value);
        output::print_part(2, &outcome.second.value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sum;

    impl Solver for Sum {
        type Input = Vec<u64>;
        type State = u64;
        type Output1 = u64;
        type Output2 = u64;

        fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
            Ok(parse_string(r)?
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<_, _>>()?)
        }

        fn prepare(&self, input: Self::Input) -> Result<Self::State> {
            Ok(input.iter().sum())
        }

        fn solve_first(&self, state: &mut Self::State) -> Result<u64> {
            *state *= 2;
            Ok(*state)
        }

        fn solve_second(&self, state: &mut Self::State) -> Result<u64> {
            *state += 1;
            Ok(*state)
        }
    }

    #[test]
    fn second_part_sees_first_part_state() {
        let outcome = Sum.run("1 2 3".as_bytes()).unwrap();
        assert_eq!(outcome.first.value, 12);
        assert_eq!(outcome.second.value, 13);
    }

    #[test]
    fn parse_failure_is_reported() {
        let err = Sum.run("1 two".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "invalid input");
    }

    #[test]
    fn directory_is_not_a_file() {
        let err = file_reader(std::env::temp_dir()).unwrap_err();
        assert!(err.downcast_ref::<InputError>().is_some());
    }

    #[test]
    fn source_from_path() {
        assert_eq!(Source::from_path(None), Source::Stdin);
        assert_eq!(
            Source::from_path(Some(PathBuf::from("seed.txt"))),
            Source::File(PathBuf::from("seed.txt"))
        );
        assert_eq!(Source::Stdin.to_string(), "<stdin>");
    }
}

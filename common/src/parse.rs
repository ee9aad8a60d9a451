use std::{num::ParseIntError, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("token {index} ({token:?}) is not a valid number")]
    InvalidToken {
        index: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses a `sep` separated list of integers. Surrounding whitespace, on the
/// whole input and on every token, is ignored.
pub fn parse_list<T>(input: &str, sep: char) -> Result<Vec<T>, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    input
        .split(sep)
        .enumerate()
        .map(|(index, token)| {
            let token = token.trim();
            token.parse::<T>().map_err(|source| ParseError::InvalidToken {
                index,
                token: token.to_owned(),
                source,
            })
        })
        .collect()
}

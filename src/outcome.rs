use core::{fmt, str::FromStr};
use std::error::Error;

/// A game termination marker: `1-0`, `0-1`, `1/2-1/2` or `*`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Outcome {
    /// `1-0`
    WhiteWins,
    /// `0-1`
    BlackWins,
    /// `1/2-1/2`
    Draw,
    /// `*`, game in progress, abandoned, or result unknown.
    Unknown,
}

impl Outcome {
    /// Recognizes one of the four termination markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgn_record::Outcome;
    ///
    /// assert_eq!(Outcome::from_ascii(b"1/2-1/2"), Ok(Outcome::Draw));
    /// assert!(Outcome::from_ascii(b"1-1").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseOutcomeError`] for anything but an exact marker.
    pub fn from_ascii(s: &[u8]) -> Result<Outcome, ParseOutcomeError> {
        Ok(match s {
            b"1-0" => Outcome::WhiteWins,
            b"0-1" => Outcome::BlackWins,
            b"1/2-1/2" => Outcome::Draw,
            b"*" => Outcome::Unknown,
            _ => return Err(ParseOutcomeError),
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
            Outcome::Unknown => "*",
        }
    }

    /// Whether the game was decided or drawn, as opposed to `*`.
    pub const fn is_known(self) -> bool {
        !matches!(self, Outcome::Unknown)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing the termination marker of a game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseOutcomeError;

impl fmt::Display for ParseOutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid outcome")
    }
}

impl Error for ParseOutcomeError {}

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Outcome, ParseOutcomeError> {
        Outcome::from_ascii(s.as_bytes())
    }
}

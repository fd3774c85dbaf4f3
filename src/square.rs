use core::{fmt, str::FromStr};
use std::error::Error;

use crate::util::{is_file, is_rank};

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

/// A file of the chessboard, `A` to `H`.
#[allow(missing_docs)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// Gets the file from its lowercase letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgn_record::File;
    ///
    /// assert_eq!(File::from_char('e'), Some(File::E));
    /// assert_eq!(File::from_char('E'), None);
    /// ```
    #[inline]
    pub const fn from_char(ch: char) -> Option<File> {
        if ch.is_ascii() && is_file(ch as u8) {
            Some(File::ALL[(ch as u8 - b'a') as usize])
        } else {
            None
        }
    }

    /// Gets the file from its index, `0` for `A` through `7` for `H`.
    #[inline]
    pub const fn new(index: u8) -> Option<File> {
        if index < 8 {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    #[inline]
    pub const fn char(self) -> char {
        (b'a' + self as u8) as char
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// `A`, ..., `H`.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A rank of the chessboard, `First` to `Eighth`.
#[allow(missing_docs)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    First = 0,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl Rank {
    /// Gets the rank from its digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgn_record::Rank;
    ///
    /// assert_eq!(Rank::from_char('4'), Some(Rank::Fourth));
    /// assert_eq!(Rank::from_char('9'), None);
    /// ```
    #[inline]
    pub const fn from_char(ch: char) -> Option<Rank> {
        if ch.is_ascii() && is_rank(ch as u8) {
            Some(Rank::ALL[(ch as u8 - b'1') as usize])
        } else {
            None
        }
    }

    /// Gets the rank from its index, `0` for `First` through `7` for `Eighth`.
    #[inline]
    pub const fn new(index: u8) -> Option<Rank> {
        if index < 8 {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    #[inline]
    pub const fn char(self) -> char {
        (b'1' + self as u8) as char
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// `First`, ..., `Eighth`.
    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A square of the chessboard.
///
/// Both coordinates are always in range, so a `Square` can only be built
/// from a valid file and rank.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    #[inline]
    pub const fn from_coords(file: File, rank: Rank) -> Square {
        Square { file, rank }
    }

    /// Parses a square name like `e4`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] unless `s` is exactly a file letter
    /// followed by a rank digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgn_record::{File, Rank, Square};
    ///
    /// let sq = Square::from_ascii(b"d8")?;
    /// assert_eq!(sq.file(), File::D);
    /// assert_eq!(sq.rank(), Rank::Eighth);
    ///
    /// assert!(Square::from_ascii(b"i1").is_err());
    /// assert!(Square::from_ascii(b"a9").is_err());
    /// # Ok::<_, pgn_record::ParseSquareError>(())
    /// ```
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        match *s {
            [file, rank] => Ok(Square::from_coords(
                File::from_char(char::from(file)).ok_or(ParseSquareError)?,
                Rank::from_char(char::from(rank)).ok_or(ParseSquareError)?,
            )),
            _ => Err(ParseSquareError),
        }
    }

    #[inline]
    pub const fn file(self) -> File {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.char(), self.rank.char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        for file in File::ALL {
            for rank in Rank::ALL {
                let square = Square::from_coords(file, rank);
                assert_eq!(square.file(), file);
                assert_eq!(square.rank(), rank);

                let name = square.to_string();
                assert_eq!(name.parse::<Square>(), Ok(square));
            }
        }
    }

    #[test]
    fn test_invalid_square() {
        for name in ["", "e", "e44", "E4", "i4", "e0", "e9", "44", "ee"] {
            assert_eq!(name.parse::<Square>(), Err(ParseSquareError), "{name}");
        }
    }

    #[test]
    fn test_indices() {
        assert_eq!(File::new(4), Some(File::E));
        assert_eq!(File::new(8), None);
        assert_eq!(Rank::new(0), Some(Rank::First));
        assert_eq!(Rank::Eighth.index(), 7);
        assert_eq!(File::H.char(), 'h');
        assert_eq!(File::from_char('é'), None);
    }
}

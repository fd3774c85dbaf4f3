//! Decompose Standard Algebraic Notation into a [`Move`].
//!
//! Only the shape of the notation is recognized. There is no board, so
//! `Nf3` is accepted whether or not a knight could get there.
//!
//! # Examples
//!
//! ```
//! use pgn_record::{Move, Role, Square};
//!
//! let m: Move = "Rdxf8=Q+".parse()?;
//! assert_eq!(m.role, Role::Rook);
//! assert_eq!(m.to, Some("f8".parse::<Square>()?));
//! assert_eq!(m.promotion, Some(Role::Queen));
//! assert!(m.is_capture && m.is_check);
//!
//! # #[derive(Debug)] struct CommonError;
//! # impl From<pgn_record::san::ParseSanError> for CommonError { fn from(_: pgn_record::san::ParseSanError) -> Self { Self } }
//! # impl From<pgn_record::ParseSquareError> for CommonError { fn from(_: pgn_record::ParseSquareError) -> Self { Self } }
//! # Ok::<_, CommonError>(())
//! ```

use core::{fmt, str::FromStr};
use std::error::Error;

use crate::{
    util::{is_file, is_rank},
    CastlingSide, Disambiguation, File, Move, Rank, Role, Square,
};

/// Why a move token could not be decomposed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InvalidSan {
    /// The token was empty.
    Empty,
    /// The last two characters of the move are not a square.
    Destination,
    /// `=` is not followed by `N`, `B`, `R`, `Q` or `K`.
    Promotion,
    /// Something other than a single `+` or `#` follows the promotion piece.
    Suffix,
    /// The character before the destination (and capture marker) is neither
    /// a file nor a rank.
    Disambiguation,
    /// Characters remain after piece, origin hint and capture marker.
    Leftover,
}

impl InvalidSan {
    fn as_str(self) -> &'static str {
        match self {
            InvalidSan::Empty => "empty move",
            InvalidSan::Destination => "invalid destination square",
            InvalidSan::Promotion => "invalid promotion piece",
            InvalidSan::Suffix => "unexpected characters after promotion",
            InvalidSan::Disambiguation => "invalid origin file or rank",
            InvalidSan::Leftover => "unexpected characters before destination",
        }
    }
}

/// Error when parsing a syntactically invalid SAN.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSanError {
    kind: InvalidSan,
}

impl ParseSanError {
    const fn new(kind: InvalidSan) -> ParseSanError {
        ParseSanError { kind }
    }

    pub const fn kind(&self) -> InvalidSan {
        self.kind
    }
}

impl fmt::Display for ParseSanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid san: {}", self.kind.as_str())
    }
}

impl Error for ParseSanError {}

/// Check (`+`) or checkmate (`#`) suffix.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Suffix {
    Check,
    Checkmate,
}

impl Suffix {
    pub const fn char(self) -> char {
        match self {
            Suffix::Check => '+',
            Suffix::Checkmate => '#',
        }
    }

    pub const fn from_char(ch: char) -> Option<Suffix> {
        match ch {
            '+' => Some(Suffix::Check),
            '#' => Some(Suffix::Checkmate),
            _ => None,
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl Move {
    /// Decomposes a SAN token, including promotion and check or checkmate
    /// suffix.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSanError`] if `san` is not syntactically valid.
    pub fn from_ascii(san: &[u8]) -> Result<Move, ParseSanError> {
        if san.is_empty() {
            return Err(ParseSanError::new(InvalidSan::Empty));
        }

        let (core, promotion, suffix) = split_promotion_and_suffix(san)?;

        let mut m = match CastlingSide::from_ascii(core) {
            Some(side) => Move::castle(side),
            None => decompose_core(core)?,
        };

        m.promotion = promotion;
        m.is_check = suffix == Some(Suffix::Check);
        m.is_mate = suffix == Some(Suffix::Checkmate);
        Ok(m)
    }

    /// The check or checkmate suffix of this move, if any.
    pub const fn suffix(&self) -> Option<Suffix> {
        if self.is_mate {
            Some(Suffix::Checkmate)
        } else if self.is_check {
            Some(Suffix::Check)
        } else {
            None
        }
    }
}

impl FromStr for Move {
    type Err = ParseSanError;

    fn from_str(san: &str) -> Result<Move, ParseSanError> {
        Move::from_ascii(san.as_bytes())
    }
}

/// Splits off `=X` with its optional trailing suffix, or otherwise just a
/// trailing suffix.
fn split_promotion_and_suffix(
    san: &[u8],
) -> Result<(&[u8], Option<Role>, Option<Suffix>), ParseSanError> {
    if let Some(eq) = memchr::memchr(b'=', san) {
        let (&piece, rest) = san[eq + 1..]
            .split_first()
            .ok_or(ParseSanError::new(InvalidSan::Promotion))?;
        let promotion =
            Role::from_san_char(piece).ok_or(ParseSanError::new(InvalidSan::Promotion))?;
        let suffix = match *rest {
            [] => None,
            [ch] => Some(
                Suffix::from_char(char::from(ch)).ok_or(ParseSanError::new(InvalidSan::Suffix))?,
            ),
            _ => return Err(ParseSanError::new(InvalidSan::Suffix)),
        };
        Ok((&san[..eq], Some(promotion), suffix))
    } else {
        match san.split_last() {
            Some((&ch, core)) => match Suffix::from_char(char::from(ch)) {
                Some(suffix) => Ok((core, None, Some(suffix))),
                None => Ok((san, None, None)),
            },
            None => Ok((san, None, None)),
        }
    }
}

/// Decomposes what remains after promotion and suffix are gone:
/// `[piece] [file | rank] [x] destination`.
fn decompose_core(core: &[u8]) -> Result<Move, ParseSanError> {
    // A bare file is not a piece letter, so pawn captures like exd5 are
    // recognized before the general case.
    if let [file, b'x', ref dest @ ..] = *core {
        if dest.len() == 2 && is_file(file) {
            return Ok(Move {
                from: Disambiguation {
                    file: File::from_char(char::from(file)),
                    rank: None,
                },
                to: Some(destination(dest)?),
                is_capture: true,
                ..Move::default()
            });
        }
    }

    let split = core
        .len()
        .checked_sub(2)
        .ok_or(ParseSanError::new(InvalidSan::Destination))?;
    let (prefix, dest) = core.split_at(split);
    let to = destination(dest)?;

    let (role, prefix) = match prefix.split_first() {
        Some((&ch, rest)) => match Role::from_san_char(ch) {
            Some(role) => (role, rest),
            None => (Role::Pawn, prefix),
        },
        None => (Role::Pawn, prefix),
    };

    let (from, prefix) = match prefix.split_first() {
        Some((&ch, rest)) if ch != b'x' => (disambiguation(ch)?, rest),
        _ => (Disambiguation::default(), prefix),
    };

    let (is_capture, prefix) = match prefix.split_first() {
        Some((b'x', rest)) => (true, rest),
        _ => (false, prefix),
    };

    if !prefix.is_empty() {
        return Err(ParseSanError::new(InvalidSan::Leftover));
    }

    Ok(Move {
        from,
        to: Some(to),
        role,
        is_capture,
        ..Move::default()
    })
}

fn destination(dest: &[u8]) -> Result<Square, ParseSanError> {
    Square::from_ascii(dest).map_err(|_| ParseSanError::new(InvalidSan::Destination))
}

fn disambiguation(ch: u8) -> Result<Disambiguation, ParseSanError> {
    if is_file(ch) {
        Ok(Disambiguation {
            file: File::from_char(char::from(ch)),
            rank: None,
        })
    } else if is_rank(ch) {
        Ok(Disambiguation {
            file: None,
            rank: Rank::from_char(char::from(ch)),
        })
    } else {
        Err(ParseSanError::new(InvalidSan::Disambiguation))
    }
}

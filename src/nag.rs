use std::{error::Error, fmt, str::FromStr};

/// A numeric annotation glyph like `?`, `!!` or `$42`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Nag(pub u32);

impl Nag {
    /// Tries to parse a NAG from ASCII.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgn_record::Nag;
    ///
    /// assert_eq!(Nag::from_ascii(b"??"), Ok(Nag(4)));
    /// assert_eq!(Nag::from_ascii(b"$24"), Ok(Nag(24)));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidNag`] error if the input is neither a known glyph
    /// (`?!`, `!`, ...) nor a numeric annotation (`$0`, `$1`, ...) that fits
    /// in a `u32`.
    pub fn from_ascii(s: &[u8]) -> Result<Nag, InvalidNag> {
        match s.split_first() {
            Some((b'$', digits)) => Nag::from_digits(digits),
            _ => Nag::from_glyph(s),
        }
    }

    /// Parses the digits of a `$` annotation, without the `$`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidNag`] error if `digits` is empty, contains
    /// anything but ASCII digits, or overflows a `u32`.
    pub fn from_digits(digits: &[u8]) -> Result<Nag, InvalidNag> {
        btoi::btou(digits).map(Nag).map_err(|_| InvalidNag)
    }

    /// Parses one of the six traditional move glyphs.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidNag`] error for anything else.
    pub fn from_glyph(glyph: &[u8]) -> Result<Nag, InvalidNag> {
        Ok(match glyph {
            b"!" => Nag::GOOD_MOVE,
            b"?" => Nag::MISTAKE,
            b"!!" => Nag::BRILLIANT_MOVE,
            b"??" => Nag::BLUNDER,
            b"!?" => Nag::SPECULATIVE_MOVE,
            b"?!" => Nag::DUBIOUS_MOVE,
            _ => return Err(InvalidNag),
        })
    }

    /// A good move (`!`).
    pub const GOOD_MOVE: Nag = Nag(1);

    /// A mistake (`?`).
    pub const MISTAKE: Nag = Nag(2);

    /// A brilliant move (`!!`).
    pub const BRILLIANT_MOVE: Nag = Nag(3);

    /// A blunder (`??`).
    pub const BLUNDER: Nag = Nag(4);

    /// A speculative move (`!?`).
    pub const SPECULATIVE_MOVE: Nag = Nag(5);

    /// A dubious move (`?!`).
    pub const DUBIOUS_MOVE: Nag = Nag(6);
}

impl fmt::Display for Nag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl From<u32> for Nag {
    fn from(nag: u32) -> Nag {
        Nag(nag)
    }
}

impl From<Nag> for u32 {
    fn from(Nag(nag): Nag) -> u32 {
        nag
    }
}

impl FromStr for Nag {
    type Err = InvalidNag;

    fn from_str(s: &str) -> Result<Nag, InvalidNag> {
        Nag::from_ascii(s.as_bytes())
    }
}

/// Error when parsing an invalid NAG.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct InvalidNag;

impl fmt::Display for InvalidNag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid nag")
    }
}

impl Error for InvalidNag {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nag() {
        assert_eq!(Nag::from_ascii(b"$1"), Ok(Nag(1)));
        assert_eq!(Nag::from_ascii(b"$12"), Ok(Nag(12)));
        assert_eq!(Nag::from_ascii(b"$123"), Ok(Nag(123)));
        assert_eq!(Nag::from_ascii(b"$255"), Ok(Nag(255)));
        assert_eq!(Nag::from_ascii(b"$256"), Ok(Nag(256)));
        assert_eq!(Nag::from_ascii(b"$4294967295"), Ok(Nag(u32::MAX)));
        assert_eq!(Nag::from_ascii(b"$4294967296"), Err(InvalidNag));
        assert_eq!(Nag::from_ascii(b"$99999999999"), Err(InvalidNag));
        assert_eq!(Nag::from_ascii(b"$"), Err(InvalidNag));
        assert_eq!(Nag::from_ascii(b"$-1"), Err(InvalidNag));
    }

    #[test]
    fn test_glyphs() {
        assert_eq!("!".parse(), Ok(Nag::GOOD_MOVE));
        assert_eq!("?!".parse(), Ok(Nag::DUBIOUS_MOVE));
        assert_eq!("!!!".parse::<Nag>(), Err(InvalidNag));
        assert_eq!(Nag::from_glyph(b""), Err(InvalidNag));
        assert_eq!(Nag(18).to_string(), "$18");
    }
}

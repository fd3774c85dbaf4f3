use core::ops;

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    #[inline]
    pub const fn is_queen_side(self) -> bool {
        matches!(self, CastlingSide::QueenSide)
    }

    #[inline]
    pub const fn is_king_side(self) -> bool {
        matches!(self, CastlingSide::KingSide)
    }

    /// Recognizes `O-O` and `O-O-O`, without any suffix.
    pub fn from_ascii(s: &[u8]) -> Option<CastlingSide> {
        match s {
            b"O-O" => Some(CastlingSide::KingSide),
            b"O-O-O" => Some(CastlingSide::QueenSide),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CastlingSide::KingSide => "O-O",
            CastlingSide::QueenSide => "O-O-O",
        }
    }

    #[must_use]
    #[inline]
    pub const fn other(self) -> CastlingSide {
        match self {
            CastlingSide::KingSide => CastlingSide::QueenSide,
            CastlingSide::QueenSide => CastlingSide::KingSide,
        }
    }

    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

impl ops::Not for CastlingSide {
    type Output = CastlingSide;

    #[inline]
    fn not(self) -> CastlingSide {
        self.other()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_castling_side() {
        for side in CastlingSide::ALL {
            assert_eq!(CastlingSide::from_ascii(side.as_str().as_bytes()), Some(side));
            assert_eq!(!!side, side);
        }
        assert_eq!(CastlingSide::from_ascii(b"0-0"), None);
        assert_eq!(CastlingSide::from_ascii(b"O-O+"), None);
        assert!(CastlingSide::KingSide.is_king_side());
        assert!((!CastlingSide::KingSide).is_queen_side());
    }
}

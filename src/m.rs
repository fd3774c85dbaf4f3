use crate::{CastlingSide, File, Nag, Rank, Role, Square};

/// An alternate line of play, branching off before the move that owns it.
pub type Variation = Vec<Move>;

/// The origin hint written in front of a move, like the `d` in `Rdf8`.
///
/// Each coordinate is `None` unless it was written out, so a hint for the
/// a-file or the first rank is distinct from no hint at all.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct Disambiguation {
    pub file: Option<File>,
    pub rank: Option<Rank>,
}

impl Disambiguation {
    pub const fn is_empty(self) -> bool {
        self.file.is_none() && self.rank.is_none()
    }

    /// The origin square, if both coordinates were given.
    pub const fn square(self) -> Option<Square> {
        match (self.file, self.rank) {
            (Some(file), Some(rank)) => Some(Square::from_coords(file, rank)),
            _ => None,
        }
    }
}

/// A move as written in the movetext.
///
/// Nothing here is checked against a board. The fields describe the shape
/// of the notation: which piece letter was given, which squares were named,
/// and which markers were present.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct Move {
    /// Origin hint. Empty for most moves.
    pub from: Disambiguation,
    /// Destination square, `None` exactly for castling moves.
    pub to: Option<Square>,
    /// The moving piece, `Pawn` when no piece letter was given.
    pub role: Role,
    pub promotion: Option<Role>,
    pub is_capture: bool,
    pub is_check: bool,
    pub is_mate: bool,
    pub is_kingside_castle: bool,
    pub is_queenside_castle: bool,
    /// Alternatives to this move, in the order they appeared.
    pub variations: Vec<Variation>,
    /// Annotations attached to this move, in the order they appeared.
    pub nags: Vec<Nag>,
}

impl Move {
    /// A king move to the given side.
    pub fn castle(side: CastlingSide) -> Move {
        Move {
            role: Role::King,
            is_kingside_castle: side.is_king_side(),
            is_queenside_castle: side.is_queen_side(),
            ..Move::default()
        }
    }

    /// Gets the castling side, if this is a castling move.
    pub const fn castling_side(&self) -> Option<CastlingSide> {
        if self.is_kingside_castle {
            Some(CastlingSide::KingSide)
        } else if self.is_queenside_castle {
            Some(CastlingSide::QueenSide)
        } else {
            None
        }
    }

    pub const fn is_castle(&self) -> bool {
        self.is_kingside_castle || self.is_queenside_castle
    }

    /// Counts this move and every move in its variations, recursively.
    pub fn tree_size(&self) -> usize {
        1 + self
            .variations
            .iter()
            .flatten()
            .map(Move::tree_size)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_castle() {
        let m = Move::castle(CastlingSide::QueenSide);
        assert_eq!(m.role, Role::King);
        assert_eq!(m.castling_side(), Some(CastlingSide::QueenSide));
        assert!(m.is_castle());
        assert!(!m.is_kingside_castle);
        assert_eq!(m.to, None);
        assert!(m.from.is_empty());
    }

    #[test]
    fn test_disambiguation() {
        let file_a = Disambiguation {
            file: Some(File::A),
            rank: None,
        };
        assert_ne!(file_a, Disambiguation::default());
        assert_eq!(file_a.square(), None);

        let a1 = Disambiguation {
            file: Some(File::A),
            rank: Some(Rank::First),
        };
        assert_eq!(a1.square(), Some(Square::from_coords(File::A, Rank::First)));
    }

    #[test]
    fn test_tree_size() {
        let leaf = Move::default();
        let mut m = Move::default();
        m.variations.push(vec![leaf.clone(), leaf.clone()]);
        let mut nested = leaf.clone();
        nested.variations.push(vec![leaf]);
        m.variations.push(vec![nested]);
        assert_eq!(m.tree_size(), 5);
    }
}

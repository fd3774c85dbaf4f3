use std::collections::HashMap;

use crate::{Move, Outcome};

/// A parsed game: tag pairs, the mainline with its nested variations, and
/// the termination marker.
///
/// # Examples
///
/// ```
/// use pgn_record::{parse_str, Outcome, ParserConfig};
///
/// let game = parse_str("[White \"Tal\"] 1. e4 e5 1-0", ParserConfig::default())?;
/// assert_eq!(game.tag("White"), Some("Tal"));
/// assert_eq!(game.moves.len(), 2);
/// assert_eq!(game.result, Some(Outcome::WhiteWins));
/// # Ok::<_, pgn_record::ParseError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Game {
    /// Tag values by tag name. A repeated name keeps the last value.
    pub tags: HashMap<String, String>,
    /// The mainline.
    pub moves: Vec<Move>,
    /// `None` if the movetext ended without a marker (lax mode only).
    pub result: Option<Outcome>,
}

impl Game {
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }

    /// The mainline moves.
    pub fn mainline(&self) -> &[Move] {
        &self.moves
    }

    /// Counts the moves of the mainline and of all variations.
    pub fn total_moves(&self) -> usize {
        self.moves.iter().map(Move::tree_size).sum()
    }

    /// The termination marker as written, or `""` if there was none.
    pub fn result_str(&self) -> &'static str {
        self.result.map_or("", Outcome::as_str)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.moves.is_empty() && self.result.is_none()
    }
}

//! Split a document holding several games into one string per game.
//!
//! This is a text-level pass for callers that want to hand games to
//! different workers. A [`Parser`](crate::Parser) reads consecutive games
//! from a single stream without it.

/// Splits `pgn` before every line that starts with an `[Event ` tag.
///
/// Line endings are normalized to `\n`, every game is trimmed, and games
/// that are empty after trimming are dropped.
///
/// # Examples
///
/// ```
/// use pgn_record::split::split_games;
///
/// let pgn = "[Event \"A\"]\r\n1. e4 *\r\n\r\n[Event \"B\"]\r\n1. d4 *\r\n";
/// assert_eq!(split_games(pgn), [
///     "[Event \"A\"]\n1. e4 *",
///     "[Event \"B\"]\n1. d4 *",
/// ]);
/// ```
pub fn split_games(pgn: &str) -> Vec<String> {
    let pgn = pgn.replace("\r\n", "\n");

    let mut games = Vec::new();
    let mut current = String::new();

    for line in pgn.split('\n') {
        if line.trim().starts_with("[Event ") && !current.is_empty() {
            push_trimmed(&mut games, &current);
            current.clear();
        }
        current.push_str(line);
        current.push('\n');
    }

    push_trimmed(&mut games, &current);
    games
}

fn push_trimmed(games: &mut Vec<String>, game: &str) {
    let game = game.trim();
    if !game.is_empty() {
        games.push(game.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(split_games("").is_empty());
        assert!(split_games(" \n\r\n\t").is_empty());
    }

    #[test]
    fn test_single_game() {
        assert_eq!(
            split_games("\n\n[Event \"A\"]\n1. e4 *\n\n"),
            ["[Event \"A\"]\n1. e4 *"]
        );
    }

    #[test]
    fn test_leading_text_is_its_own_chunk() {
        assert_eq!(
            split_games("; header\n[Event \"A\"]\n*"),
            ["; header", "[Event \"A\"]\n*"]
        );
    }

    #[test]
    fn test_indented_event_starts_game() {
        assert_eq!(
            split_games("[Event \"A\"]\n*\n  [Event \"B\"]\n*"),
            ["[Event \"A\"]\n*", "[Event \"B\"]\n*"]
        );
    }

    #[test]
    fn test_only_event_splits() {
        assert_eq!(
            split_games("[Event \"A\"]\n[Site \"x\"]\n*\n[Site \"y\"]\n*"),
            ["[Event \"A\"]\n[Site \"x\"]\n*\n[Site \"y\"]\n*"]
        );
        // No space after the tag name.
        assert_eq!(split_games("*\n[EventDate \"?\"]").len(), 1);
    }
}

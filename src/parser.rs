//! Read games from PGN text.
//!
//! # Examples
//!
//! Read every game of a document:
//!
//! ```
//! use pgn_record::{Parser, ParserConfig};
//!
//! let pgn = b"[Event \"A\"] 1. e4 e5 1-0\n\n[Event \"B\"] 1. d4 d5 0-1";
//! let mut parser = Parser::with_config(&pgn[..], ParserConfig::strict());
//! let events = parser
//!     .games()
//!     .map(|game| game.map(|game| game.tag("Event").unwrap_or_default().to_owned()))
//!     .collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(events, ["A", "B"]);
//! # Ok::<_, pgn_record::ParseError>(())
//! ```

use std::{
    collections::HashMap,
    io::{self, Read},
};

use log::{debug, trace};

use crate::{
    error::{ErrorKind, ParseError},
    game::Game,
    m::Move,
    nag::Nag,
    outcome::Outcome,
    token::{Token, TokenKind},
    tokenizer::Tokenizer,
};

/// How to treat a game whose movetext is not closed by a result marker.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
pub enum Mode {
    /// Movetext must end with `1-0`, `0-1`, `1/2-1/2` or `*`.
    #[default]
    Strict,
    /// Movetext may also end at the end of input or at the next tag section.
    Lax,
}

/// Options fixed when a [`Parser`] is constructed.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct ParserConfig {
    pub mode: Mode,
    /// Maximum number of nested `(` levels.
    pub max_variation_depth: usize,
}

impl ParserConfig {
    pub const DEFAULT_MAX_VARIATION_DEPTH: usize = 256;

    pub const fn strict() -> ParserConfig {
        ParserConfig {
            mode: Mode::Strict,
            max_variation_depth: ParserConfig::DEFAULT_MAX_VARIATION_DEPTH,
        }
    }

    pub const fn lax() -> ParserConfig {
        ParserConfig {
            mode: Mode::Lax,
            ..ParserConfig::strict()
        }
    }

    #[must_use]
    pub const fn with_max_variation_depth(self, max_variation_depth: usize) -> ParserConfig {
        ParserConfig {
            max_variation_depth,
            ..self
        }
    }
}

impl Default for ParserConfig {
    fn default() -> ParserConfig {
        ParserConfig::strict()
    }
}

/// Recursive descent parser with a single token of lookahead.
#[derive(Debug)]
pub struct Parser<R> {
    tokenizer: Tokenizer<R>,
    lookahead: Option<Token>,
    config: ParserConfig,
}

impl<R: Read> Parser<R> {
    /// Creates a strict parser with default limits.
    pub fn new(reader: R) -> Parser<R> {
        Parser::with_config(reader, ParserConfig::default())
    }

    pub fn with_config(reader: R, config: ParserConfig) -> Parser<R> {
        Parser {
            tokenizer: Tokenizer::new(reader),
            lookahead: None,
            config,
        }
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Parses a single game. Empty input produces an empty [`Game`].
    ///
    /// Anything after the first game is not looked at.
    ///
    /// # Errors
    ///
    /// See [`Parser::read_game()`].
    pub fn parse(mut self) -> Result<Game, ParseError> {
        self.read_game().map(Option::unwrap_or_default)
    }

    /// Parses the next game of the stream, or returns `Ok(None)` if only
    /// whitespace and comments remain.
    ///
    /// After a game ended by a result marker, the next call continues after
    /// that marker. After a game cut short by the next tag section (lax mode
    /// only), the next call starts with that tag section.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] at the first token that does not fit the
    /// grammar, for a move that is not valid SAN, for a missing result
    /// marker in [`Mode::Strict`], or if the underlying reader fails.
    pub fn read_game(&mut self) -> Result<Option<Game>, ParseError> {
        debug!(
            "reading game ({:?}, max variation depth {})",
            self.config.mode, self.config.max_variation_depth
        );

        let mut game = Game::default();

        loop {
            let kind = self.peek()?.kind;
            match kind {
                TokenKind::Eof => break,
                TokenKind::LBracket => self.read_tag(&mut game.tags)?,
                TokenKind::Comment => {
                    self.bump()?;
                }
                TokenKind::Ident | TokenKind::Number | TokenKind::Asterisk => {
                    self.read_movetext(&mut game.moves, 0)?;
                    game.result = self.read_result(!game.moves.is_empty())?;
                    break;
                }
                TokenKind::Nag | TokenKind::Glyph => {
                    return Err(at(ErrorKind::NagWithoutMove, &self.bump()?));
                }
                TokenKind::LParen => {
                    return Err(at(ErrorKind::VariationWithoutMove, &self.bump()?));
                }
                TokenKind::RParen => {
                    return Err(at(ErrorKind::UnmatchedCloseParen, &self.bump()?));
                }
                _ => {
                    let token = self.bump()?;
                    return Err(unexpected(&token));
                }
            }
        }

        if game.is_empty() {
            debug!("no more games");
            return Ok(None);
        }

        debug!(
            "read game with {} tags, {} mainline moves, result {:?}",
            game.tags.len(),
            game.moves.len(),
            game.result_str()
        );
        Ok(Some(game))
    }

    /// Iterates over the remaining games of the stream. Iteration stops after
    /// the first error.
    pub fn games(&mut self) -> Games<'_, R> {
        Games {
            parser: self,
            failed: false,
        }
    }

    fn read_tag(&mut self, tags: &mut HashMap<String, String>) -> Result<(), ParseError> {
        self.bump()?; // [

        let name = self.bump()?;
        if name.kind != TokenKind::Ident {
            return Err(at(
                ErrorKind::ExpectedTagName {
                    found: name.to_string(),
                },
                &name,
            ));
        }

        let value = self.bump()?;
        if value.kind != TokenKind::String {
            return Err(at(
                ErrorKind::ExpectedTagValue {
                    found: value.to_string(),
                },
                &value,
            ));
        }

        let close = self.bump()?;
        if close.kind != TokenKind::RBracket {
            return Err(at(
                ErrorKind::UnclosedTag {
                    found: close.to_string(),
                },
                &close,
            ));
        }

        tags.insert(name.literal, value.literal);
        Ok(())
    }

    /// Reads moves into `moves` until a token that ends the line: a result
    /// marker, `)`, `[` or the end of input. That token is not consumed.
    fn read_movetext(&mut self, moves: &mut Vec<Move>, depth: usize) -> Result<(), ParseError> {
        loop {
            let token = self.peek()?;
            let (kind, is_result) = (token.kind, token.is_result());

            match kind {
                TokenKind::Eof | TokenKind::RParen | TokenKind::LBracket => return Ok(()),
                _ if is_result => return Ok(()),
                TokenKind::Ident => {
                    let token = self.bump()?;
                    match Move::from_ascii(token.literal.as_bytes()) {
                        Ok(m) => moves.push(m),
                        Err(source) => {
                            let (line, column) = (token.line, token.column);
                            return Err(ParseError::new(
                                ErrorKind::InvalidMove {
                                    san: token.literal,
                                    source,
                                },
                                line,
                                column,
                            ));
                        }
                    }
                }
                TokenKind::Nag | TokenKind::Glyph => {
                    let token = self.bump()?;
                    let Some(last) = moves.last_mut() else {
                        return Err(at(ErrorKind::NagWithoutMove, &token));
                    };
                    let nag = if kind == TokenKind::Nag {
                        Nag::from_digits(token.literal.as_bytes())
                    } else {
                        Nag::from_glyph(token.literal.as_bytes())
                    };
                    match nag {
                        Ok(nag) => last.nags.push(nag),
                        Err(source) => {
                            let (line, column) = (token.line, token.column);
                            return Err(ParseError::new(
                                ErrorKind::InvalidNag {
                                    nag: token.literal,
                                    source,
                                },
                                line,
                                column,
                            ));
                        }
                    }
                }
                TokenKind::LParen => {
                    let open = self.bump()?;
                    let Some(last) = moves.last_mut() else {
                        return Err(at(ErrorKind::VariationWithoutMove, &open));
                    };
                    if depth >= self.config.max_variation_depth {
                        return Err(at(
                            ErrorKind::VariationTooDeep {
                                limit: self.config.max_variation_depth,
                            },
                            &open,
                        ));
                    }

                    trace!("entering variation at depth {}", depth + 1);
                    let mut variation = Vec::new();
                    self.read_movetext(&mut variation, depth + 1)?;

                    // A variation may carry its own result marker.
                    if self.peek()?.is_result() {
                        self.bump()?;
                    }
                    let close = self.bump()?;
                    if close.kind != TokenKind::RParen {
                        return Err(at(
                            ErrorKind::UnclosedVariation {
                                found: close.to_string(),
                            },
                            &close,
                        ));
                    }
                    trace!("leaving variation at depth {}", depth + 1);

                    last.variations.push(variation);
                }
                TokenKind::Number | TokenKind::Dot | TokenKind::Comment => {
                    self.bump()?;
                }
                _ => {
                    let token = self.bump()?;
                    return Err(unexpected(&token));
                }
            }
        }
    }

    /// Interprets the token that ended the mainline.
    fn read_result(&mut self, has_moves: bool) -> Result<Option<Outcome>, ParseError> {
        let token = self.peek()?;
        let (kind, is_result) = (token.kind, token.is_result());

        if is_result {
            let token = self.bump()?;
            return Ok(Outcome::from_ascii(token.literal.as_bytes()).ok());
        }

        match kind {
            TokenKind::Eof | TokenKind::LBracket => {
                if has_moves && self.config.mode == Mode::Strict {
                    let token = self.bump()?;
                    return Err(at(
                        ErrorKind::MissingResult {
                            found: token.to_string(),
                        },
                        &token,
                    ));
                }
                if has_moves {
                    debug!("accepting game without result marker");
                }
                Ok(None)
            }
            TokenKind::RParen => Err(at(ErrorKind::UnmatchedCloseParen, &self.bump()?)),
            _ => {
                let token = self.bump()?;
                Err(unexpected(&token))
            }
        }
    }

    fn peek(&mut self) -> Result<&Token, ParseError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.next_token()?,
        };
        Ok(self.lookahead.insert(token))
    }

    fn bump(&mut self) -> Result<Token, ParseError> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => self.next_token(),
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        self.tokenizer.next_token().map_err(|err: io::Error| {
            ParseError::new(
                ErrorKind::Io(err),
                self.tokenizer.line(),
                self.tokenizer.column(),
            )
        })
    }
}

fn at(kind: ErrorKind, token: &Token) -> ParseError {
    ParseError::new(kind, token.line, token.column)
}

fn unexpected(token: &Token) -> ParseError {
    at(
        ErrorKind::UnexpectedToken {
            found: token.to_string(),
        },
        token,
    )
}

/// Iterator over the games of a [`Parser`], created by [`Parser::games()`].
#[derive(Debug)]
pub struct Games<'a, R> {
    parser: &'a mut Parser<R>,
    failed: bool,
}

impl<R: Read> Iterator for Games<'_, R> {
    type Item = Result<Game, ParseError>;

    fn next(&mut self) -> Option<Result<Game, ParseError>> {
        if self.failed {
            return None;
        }
        match self.parser.read_game() {
            Ok(game) => game.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Parses a single game from `reader`.
///
/// # Errors
///
/// See [`Parser::read_game()`].
pub fn parse<R: Read>(reader: R, config: ParserConfig) -> Result<Game, ParseError> {
    Parser::with_config(reader, config).parse()
}

/// Parses a single game from a string. A leading byte order mark is skipped.
///
/// # Errors
///
/// See [`Parser::read_game()`].
pub fn parse_str(pgn: &str, config: ParserConfig) -> Result<Game, ParseError> {
    parse(pgn.as_bytes(), config)
}

//! A library for reading chess games in Portable Game Notation (PGN) into
//! owned records.
//!
//! Input is tokenized, parsed by a recursive descent parser, and every move
//! token is decomposed as Standard Algebraic Notation (SAN). Moves are not
//! checked against a board: `Nf3` is a knight move to f3 whether or not a
//! knight could get there.
//!
//! # Examples
//!
//! Parse a game with a nested variation and an annotation:
//!
//! ```
//! use pgn_record::{parse_str, Nag, Outcome, ParserConfig, Role};
//!
//! let pgn = r#"
//!     [White "Morphy"]
//!     [Black "Duke Karl / Count Isouard"]
//!
//!     1. e4 e5 2. Nf3 d6 3. d4 Bg4?! (3... exd4) 4. dxe5 1-0
//! "#;
//!
//! let game = parse_str(pgn, ParserConfig::default())?;
//! assert_eq!(game.tag("White"), Some("Morphy"));
//! assert_eq!(game.moves.len(), 7);
//!
//! let bg4 = &game.moves[5];
//! assert_eq!(bg4.role, Role::Bishop);
//! assert_eq!(bg4.nags, [Nag::DUBIOUS_MOVE]);
//!
//! let exd4 = &bg4.variations[0][0];
//! assert!(exd4.is_capture);
//! assert_eq!(exd4.to, Some("d4".parse()?));
//!
//! assert_eq!(game.result, Some(Outcome::WhiteWins));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Games without a result marker are rejected unless the parser is lax:
//!
//! ```
//! use pgn_record::{parse_str, ParserConfig};
//!
//! assert!(parse_str("1. e4 e5", ParserConfig::strict()).is_err());
//!
//! let game = parse_str("1. e4 e5", ParserConfig::lax())?;
//! assert_eq!(game.result, None);
//! # Ok::<_, pgn_record::ParseError>(())
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   the record types.
//! * `arbitrary`: Implements [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for [`ParserConfig`] and [`Mode`].
//!
//! # Logging
//!
//! Progress is reported through the [`log`](https://docs.rs/log/0.4) facade
//! at `debug` and `trace` level. Errors are returned, never logged.

#![doc(html_root_url = "https://docs.rs/pgn-record/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod buffer;
mod castling_side;
mod error;
mod game;
mod m;
mod nag;
mod outcome;
mod parser;
mod role;
mod square;
mod token;
mod tokenizer;
mod util;

pub mod san;
pub mod split;

pub use castling_side::CastlingSide;
pub use error::{Category, ErrorKind, ParseError};
pub use game::Game;
pub use m::{Disambiguation, Move, Variation};
pub use nag::{InvalidNag, Nag};
pub use outcome::{Outcome, ParseOutcomeError};
pub use parser::{parse, parse_str, Games, Mode, Parser, ParserConfig};
pub use role::Role;
pub use square::{File, ParseSquareError, Rank, Square};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

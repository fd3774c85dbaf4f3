//! Split PGN text into [`Token`]s.
//!
//! The tokenizer is pulled one token at a time and keeps no tokens around.
//! Whitespace is never returned. Bytes that cannot start any token come back
//! as [`TokenKind::Illegal`] so that the caller decides what is fatal.
//!
//! # Examples
//!
//! ```
//! use pgn_record::{Tokenizer, TokenKind};
//!
//! let mut tokenizer = Tokenizer::new(&b"1. Nf3 $1 *"[..]);
//! let kinds = tokenizer
//!     .by_ref()
//!     .map(|token| token.map(|token| token.kind))
//!     .collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(kinds, [
//!     TokenKind::Number,
//!     TokenKind::Dot,
//!     TokenKind::Ident,
//!     TokenKind::Nag,
//!     TokenKind::Asterisk,
//! ]);
//! assert_eq!(tokenizer.next_token()?.kind, TokenKind::Eof);
//! # Ok::<_, std::io::Error>(())
//! ```

use std::io::{self, Read};

use crate::{
    buffer::BufferWithReader,
    nag::Nag,
    token::{Token, TokenKind},
    util::{is_digit, is_ident_tail, is_letter, is_whitespace},
};

const BOM: &[u8] = b"\xef\xbb\xbf";

/// Pull-based lexer over any [`Read`].
#[derive(Debug)]
pub struct Tokenizer<R> {
    buffer: BufferWithReader<R>,
    line: u32,
    column: u32,
    started: bool,
    finished: bool,
}

impl<R: Read> Tokenizer<R> {
    pub fn new(reader: R) -> Tokenizer<R> {
        Tokenizer {
            buffer: BufferWithReader::new(reader),
            line: 1,
            column: 1,
            started: false,
            finished: false,
        }
    }

    /// 1-based line of the next unread byte.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the next unread byte.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Reads the next token. At the end of input this returns
    /// [`TokenKind::Eof`], and keeps doing so on further calls.
    ///
    /// # Errors
    ///
    /// Only errors of the underlying reader are returned.
    pub fn next_token(&mut self) -> io::Result<Token> {
        if !self.started {
            self.started = true;
            if self.buffer.ensure_bytes::<3>()?.starts_with(BOM) {
                self.buffer.consume(BOM.len());
            }
        }

        self.skip_while(is_whitespace)?;

        let (line, column) = (self.line, self.column);
        let Some(ch) = self.buffer.fill()?.first().copied() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                literal: String::new(),
                line,
                column,
            });
        };

        let (kind, literal) = if is_letter(ch) || is_digit(ch) {
            let ident = self.read_while(is_ident_tail)?;
            if ident.iter().copied().all(is_digit) {
                (TokenKind::Number, ident)
            } else {
                (TokenKind::Ident, ident)
            }
        } else {
            self.advance(1);
            match ch {
                b'[' => (TokenKind::LBracket, vec![ch]),
                b']' => (TokenKind::RBracket, vec![ch]),
                b'(' => (TokenKind::LParen, vec![ch]),
                b')' => (TokenKind::RParen, vec![ch]),
                b'.' => (TokenKind::Dot, vec![ch]),
                b'*' => (TokenKind::Asterisk, vec![ch]),
                b'"' => (TokenKind::String, self.read_until(b'"')?),
                b'{' => (TokenKind::Comment, self.read_until(b'}')?),
                b';' => (TokenKind::Comment, self.read_until(b'\n')?),
                b'$' => {
                    let digits = self.read_while(is_digit)?;
                    if digits.is_empty() {
                        (TokenKind::Illegal, vec![ch])
                    } else {
                        (TokenKind::Nag, digits)
                    }
                }
                b'!' | b'?' => {
                    let mut glyph = vec![ch];
                    glyph.extend(self.read_while(|ch| matches!(ch, b'!' | b'?'))?);
                    if Nag::from_glyph(&glyph).is_ok() {
                        (TokenKind::Glyph, glyph)
                    } else {
                        (TokenKind::Illegal, glyph)
                    }
                }
                _ => (TokenKind::Illegal, vec![ch]),
            }
        };

        Ok(Token {
            kind,
            literal: into_string(literal),
            line,
            column,
        })
    }

    /// Consumes bytes up to and including `delim`, or up to the end of
    /// input, and returns them without `delim`.
    fn read_until(&mut self, delim: u8) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        loop {
            let data = self.buffer.fill()?;
            if data.is_empty() {
                return Ok(out);
            }
            match memchr::memchr(delim, data) {
                Some(end) => {
                    out.extend_from_slice(&data[..end]);
                    self.advance(end + 1);
                    return Ok(out);
                }
                None => {
                    let end = data.len();
                    out.extend_from_slice(data);
                    self.advance(end);
                }
            }
        }
    }

    fn read_while(&mut self, pred: impl Fn(u8) -> bool) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        loop {
            let data = self.buffer.fill()?;
            let end = data.iter().position(|&ch| !pred(ch)).unwrap_or(data.len());
            let more = end > 0 && end == data.len();
            out.extend_from_slice(&data[..end]);
            self.advance(end);
            if !more {
                return Ok(out);
            }
        }
    }

    fn skip_while(&mut self, pred: impl Fn(u8) -> bool) -> io::Result<()> {
        loop {
            let data = self.buffer.fill()?;
            let end = data.iter().position(|&ch| !pred(ch)).unwrap_or(data.len());
            let more = end > 0 && end == data.len();
            self.advance(end);
            if !more {
                return Ok(());
            }
        }
    }

    /// Consumes `n` buffered bytes, keeping line and column up to date.
    fn advance(&mut self, n: usize) {
        let data = self.buffer.data();
        let consumed = &data[..n.min(data.len())];
        match memchr::memrchr(b'\n', consumed) {
            Some(last) => {
                let newlines = memchr::memchr_iter(b'\n', consumed).count();
                self.line = self.line.saturating_add(saturate(newlines));
                self.column = saturate(consumed.len() - last);
            }
            None => self.column = self.column.saturating_add(saturate(consumed.len())),
        }
        self.buffer.consume(n);
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = io::Result<Token>;

    /// Yields tokens up to, but not including, [`TokenKind::Eof`].
    fn next(&mut self) -> Option<io::Result<Token>> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
            token => Some(token),
        }
    }
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn into_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

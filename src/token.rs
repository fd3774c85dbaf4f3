use core::fmt;

/// Lexical token types.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum TokenKind {
    /// Any byte that does not start another token.
    Illegal,
    /// End of input. Returned again on every further read.
    Eof,
    /// Tag names and movetext words like `Event`, `Nxf3+`, `O-O` or `1-0`.
    Ident,
    /// An identifier made up of digits only, like the `12` in `12.`.
    Number,
    /// The contents of a `"`-delimited string, without the quotes.
    String,
    /// The contents of a `{ ... }` or `; ...` comment.
    Comment,
    /// `$` and digits. The literal holds the digits only.
    Nag,
    /// A move glyph like `!?`.
    ///
    /// The six traditional glyphs are read as annotations, in addition to
    /// the `$` form of the PGN grammar. Any other run of `!` and `?` is
    /// [`TokenKind::Illegal`].
    Glyph,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Dot,
    Asterisk,
}

impl TokenKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "illegal character",
            TokenKind::Eof => "end of input",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Nag => "nag",
            TokenKind::Glyph => "glyph",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Dot => "'.'",
            TokenKind::Asterisk => "'*'",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token, its literal text, and where it started.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    /// 1-based line of the first byte.
    pub line: u32,
    /// 1-based column (in bytes) of the first byte.
    pub column: u32,
}

impl Token {
    /// Whether this is one of the four game termination markers.
    pub fn is_result(&self) -> bool {
        match self.kind {
            TokenKind::Asterisk => true,
            TokenKind::Ident => matches!(self.literal.as_str(), "1-0" | "0-1" | "1/2-1/2"),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Illegal
            | TokenKind::Ident
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Nag
            | TokenKind::Glyph => write!(f, "{} {:?}", self.kind, self.literal),
            _ => f.write_str(self.kind.as_str()),
        }
    }
}

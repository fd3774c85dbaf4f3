//! Byte classes used by the tokenizer and the move decomposer.

#[inline]
pub(crate) const fn is_file(ch: u8) -> bool {
    matches!(ch, b'a'..=b'h')
}

#[inline]
pub(crate) const fn is_rank(ch: u8) -> bool {
    matches!(ch, b'1'..=b'8')
}

/// Space, tab, newline, and carriage return (so that CRLF input works).
#[inline]
pub(crate) const fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline]
pub(crate) const fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic()
}

#[inline]
pub(crate) const fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Bytes that may continue a move or tag name once it has started with a
/// letter or digit.
#[inline]
pub(crate) const fn is_ident_tail(ch: u8) -> bool {
    is_letter(ch) || is_digit(ch) || matches!(ch, b'_' | b'+' | b'#' | b'=' | b'-' | b'/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_and_rank() {
        for ch in b'a'..=b'h' {
            assert!(is_file(ch));
        }
        assert!(!is_file(b'i'));
        assert!(!is_file(b'A'));
        assert!(!is_file(b'x'));

        for ch in b'1'..=b'8' {
            assert!(is_rank(ch));
        }
        assert!(!is_rank(b'0'));
        assert!(!is_rank(b'9'));
    }

    #[test]
    fn test_whitespace() {
        for ch in [b' ', b'\t', b'\n', b'\r'] {
            assert!(is_whitespace(ch));
        }
        assert!(!is_whitespace(b'.'));
        assert!(!is_whitespace(0));
    }

    #[test]
    fn test_ident_tail() {
        for ch in b"Nf3xe=Q+#-_/".iter().copied() {
            assert!(is_ident_tail(ch), "{}", char::from(ch));
        }
        for ch in b".$(){}[]\"*;!? ".iter().copied() {
            assert!(!is_ident_tail(ch), "{}", char::from(ch));
        }
        assert!(is_letter(b'O'));
        assert!(is_digit(b'0'));
        assert!(!is_letter(b'0'));
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use pgn_record::{TokenKind, Tokenizer};

fuzz_target!(|data: &[u8]| {
    let mut tokenizer = Tokenizer::new(data);
    let mut last = (0, 0);
    loop {
        let token = tokenizer.next_token().expect("in-memory read");
        let position = (token.line, token.column);
        assert!(position > last, "{position:?} after {last:?}");
        last = position;
        if token.kind == TokenKind::Eof {
            break;
        }
    }
    assert_eq!(tokenizer.next_token().expect("in-memory read").kind, TokenKind::Eof);
});

#![no_main]

use std::{fmt, io};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pgn_record::{Game, ParseError, Parser, ParserConfig};

/// Hands out the input in chunks of the given sizes, to exercise buffer
/// refills at every possible position.
struct Chunked<'a> {
    data: &'a [u8],
    sizes: &'a [u8],
}

impl io::Read for Chunked<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let size = match self.sizes.split_first() {
            Some((&size, rest)) => {
                self.sizes = rest;
                usize::from(size.max(1))
            }
            None => self.data.len(),
        };
        let n = size.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[derive(Arbitrary)]
struct TestCase {
    pgn: Vec<u8>,
    chunks: Vec<u8>,
    config: ParserConfig,
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("pgn", &String::from_utf8_lossy(&self.pgn))
            .field("chunks", &self.chunks)
            .field("config", &self.config)
            .finish()
    }
}

fn summary(game: Result<Option<Game>, ParseError>) -> Result<Option<Game>, String> {
    game.map_err(|err| err.to_string())
}

fuzz_target!(|data: TestCase| {
    // Keep recursion within what the fuzzer's stack can take.
    let config = data
        .config
        .with_max_variation_depth(data.config.max_variation_depth.min(256));

    let mut whole = Parser::with_config(&data.pgn[..], config);
    let mut chunked = Parser::with_config(
        Chunked {
            data: &data.pgn,
            sizes: &data.chunks,
        },
        config,
    );

    // Reading in chunks must not change any game or error.
    loop {
        let left = summary(whole.read_game());
        let right = summary(chunked.read_game());
        assert_eq!(left, right);
        if !matches!(left, Ok(Some(_))) {
            break;
        }
    }
});

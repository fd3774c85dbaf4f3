#![no_main]

use libfuzzer_sys::fuzz_target;
use pgn_record::Move;

fuzz_target!(|data: &[u8]| {
    let Ok(m) = Move::from_ascii(data) else {
        return;
    };
    assert_eq!(m.is_castle(), m.to.is_none());
    assert!(!(m.is_check && m.is_mate));
    assert!(m.variations.is_empty() && m.nags.is_empty());
});

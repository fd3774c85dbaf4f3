use std::fs::File as FsFile;

use pgn_record::{
    parse_str, split::split_games, Category, CastlingSide, Disambiguation, ErrorKind, File,
    Game, Move, Nag, Outcome, Parser, ParserConfig, Rank, Role, Square,
};

fn sq(s: &str) -> Option<Square> {
    Some(s.parse().expect("valid square"))
}

fn strict(pgn: &str) -> Game {
    parse_str(pgn, ParserConfig::strict()).expect("valid pgn")
}

#[test]
fn test_four_quiet_moves() {
    let game = strict("1. e4 e5 2. Nf3 Nc6 *");
    assert_eq!(game.moves.len(), 4);
    assert!(game.moves.iter().all(|m| !m.is_capture));
    assert_eq!(game.result, Some(Outcome::Unknown));
    assert_eq!(game.result_str(), "*");
}

#[test]
fn test_variation_after_first_move() {
    let game = strict("1. e4 (1. d4) 1... e5 *");
    assert_eq!(game.moves.len(), 2);

    let e4 = &game.moves[0];
    assert_eq!(e4.role, Role::Pawn);
    assert_eq!(e4.to, sq("e4"));
    assert_eq!(e4.variations.len(), 1);
    assert_eq!(
        e4.variations[0],
        [Move {
            to: sq("d4"),
            ..Move::default()
        }]
    );

    assert_eq!(game.moves[1].to, sq("e5"));
    assert!(game.moves[1].variations.is_empty());
}

#[test]
fn test_nags_in_encounter_order() {
    let game = strict("1. e4 $1 1... e5 $2 $18 *");
    assert_eq!(game.moves[0].nags, [Nag(1)]);
    assert_eq!(game.moves[1].nags, [Nag(2), Nag(18)]);
}

#[test]
fn test_promotion_capture_mate() {
    let game = strict("1. exd8=R# *");
    assert_eq!(
        game.moves,
        [Move {
            from: Disambiguation {
                file: Some(File::E),
                rank: None,
            },
            to: sq("d8"),
            role: Role::Pawn,
            promotion: Some(Role::Rook),
            is_capture: true,
            is_mate: true,
            ..Move::default()
        }]
    );
}

#[test]
fn test_castle_with_check() {
    let game = strict("1. O-O+ *");
    let m = &game.moves[0];
    assert_eq!(m.role, Role::King);
    assert!(m.is_kingside_castle && !m.is_queenside_castle);
    assert!(m.is_check);
    assert_eq!(m.castling_side(), Some(CastlingSide::KingSide));
    assert_eq!(m.to, None);
    assert!(m.from.is_empty());
}

#[test]
fn test_rank_disambiguation() {
    let game = strict("1. R1a3 N5xe4 *");
    assert_eq!(game.moves[0].from.rank, Some(Rank::First));
    assert_eq!(game.moves[0].from.file, None);
    assert_eq!(game.moves[1].from.rank, Some(Rank::Fifth));
    assert!(game.moves[1].is_capture);
}

#[test]
fn test_strict_and_lax_termination() {
    let pgn = "[Event \"x\"]\n1. e4";

    let err = parse_str(pgn, ParserConfig::strict()).unwrap_err();
    assert_eq!(err.category(), Category::Termination);

    let game = parse_str(pgn, ParserConfig::lax()).expect("lax accepts");
    assert_eq!(game.moves.len(), 1);
    assert_eq!(game.result, None);
    assert_eq!(game.result_str(), "");
}

#[test]
fn test_deep_nesting() {
    let pgn = "1. e4 (1. d4 (1. c4 (1. Nf3 (1. b3 (1. g3 (1. f4)))))) *";
    let game = strict(pgn);

    let mut line = &game.moves;
    let mut depth = 0;
    while let Some(variation) = line[0].variations.first() {
        line = variation;
        depth += 1;
    }
    assert_eq!(depth, 6);
    assert_eq!(line[0].to, sq("f4"));
    assert_eq!(game.total_moves(), 7);
}

#[test]
fn test_depth_limit_bounds_recursion() {
    let mut pgn = String::from("1. e4");
    for _ in 0..100_000 {
        pgn.push_str(" (e4");
    }
    let err = parse_str(&pgn, ParserConfig::default()).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::VariationTooDeep { limit: 256 }
    ));
}

#[test]
fn test_unbalanced_parens() {
    for pgn in ["1. e4 (d4 *", "1. e4 ((d4) *", "1. e4 ) *", "1. e4 (d4)) *"] {
        let err = parse_str(pgn, ParserConfig::lax()).unwrap_err();
        assert_eq!(err.category(), Category::Syntax, "{pgn:?}");
    }
}

#[test]
fn test_invalid_moves() {
    for san in ["e9", "Ze4", "e8=X", "e8=Q+x", "Nbd7d5", "Nie5", "exd"] {
        let pgn = format!("1. {san} *");
        let err = parse_str(&pgn, ParserConfig::default()).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidMove { san: found, .. } => assert_eq!(found, san),
            other => panic!("{san:?}: unexpected error {other}"),
        }
        assert_eq!((err.line(), err.column()), (1, 4));
    }
}

#[test]
fn test_garbage_never_panics() {
    let inputs: &[&[u8]] = &[
        b"",
        b"\x00\x01\x02\xff\xfe",
        b"((((((((((",
        b"))))))))))",
        b"[[[[[[",
        b"\"unterminated",
        b"{unterminated",
        b"$$$$ !!!! ????",
        b"1. e4 (((((",
        b"\xef\xbb\xbf",
        b"[Event \"\xff\"] 1. e4 \xc3 *",
    ];

    for input in inputs {
        for config in [ParserConfig::strict(), ParserConfig::lax()] {
            let _ = Parser::with_config(*input, config).parse();
            let _ = Parser::with_config(*input, config).games().count();
        }
    }
}

#[test]
fn test_reference_games() {
    let file = FsFile::open("tests/games.pgn").expect("open games.pgn");
    let mut parser = Parser::new(file);
    let games = parser
        .games()
        .collect::<Result<Vec<_>, _>>()
        .expect("valid games");
    assert_eq!(games.len(), 3);

    let fischer = &games[0];
    assert_eq!(fischer.tag("White"), Some("Fischer, Robert J."));
    assert_eq!(fischer.tag("Date"), Some("1992.11.04"));
    assert_eq!(fischer.moves.len(), 85);
    assert_eq!(fischer.result, Some(Outcome::Draw));
    assert!(fischer.moves[8].is_kingside_castle);

    let morphy = &games[1];
    assert_eq!(morphy.tag("Black"), Some("Duke Karl / Count Isouard"));
    assert_eq!(morphy.moves.len(), 33);
    assert_eq!(morphy.total_moves(), 37);
    assert_eq!(morphy.moves[5].nags, [Nag::DUBIOUS_MOVE]);
    assert_eq!(morphy.moves[5].variations[0].len(), 3);
    assert_eq!(
        morphy.moves[5].variations[0][1].variations[0][0].nags,
        [Nag::SPECULATIVE_MOVE]
    );
    assert_eq!(morphy.moves[17].nags, [Nag(6)]);
    assert!(morphy.moves[22].is_queenside_castle);
    let mate = &morphy.moves[32];
    assert_eq!((mate.role, mate.to, mate.is_mate), (Role::Rook, sq("d8"), true));
    assert_eq!(morphy.result, Some(Outcome::WhiteWins));

    let casual = &games[2];
    assert_eq!(casual.moves.len(), 81);
    assert_eq!(casual.result, Some(Outcome::Unknown));
    assert_eq!(casual.moves[54].from.file, Some(File::C));
    assert_eq!(casual.moves[54].role, Role::Rook);

    assert_eq!(parser.read_game().expect("clean end"), None);
}

#[test]
fn test_split_then_parse() {
    let document = std::fs::read_to_string("tests/games.pgn").expect("read games.pgn");
    let chunks = split_games(&document);
    assert_eq!(chunks.len(), 3);
    for chunk in &chunks {
        let game = strict(chunk);
        assert!(game.tag("Event").is_some());
        assert!(game.result.is_some());
    }
}

#[test]
fn test_crlf_and_bom() {
    let game = strict("\u{feff}[Event \"x\"]\r\n\r\n1. e4 e5 1-0\r\n");
    assert_eq!(game.tag("Event"), Some("x"));
    assert_eq!(game.moves.len(), 2);
    assert_eq!(game.result, Some(Outcome::WhiteWins));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_json() {
    let game = strict("[Event \"x\"] 1. e4 $1 (1. d4) e5 1/2-1/2");
    let json = serde_json::to_string(&game).expect("serialize");
    let back: Game = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, game);
}

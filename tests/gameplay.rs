//! Full-game scenarios against the public API.
//!
//! Covers the interplay the unit tests exercise piecewise: capture feeding
//! hands, drops re-entering the board, the promotion cycle, the win latch,
//! plus randomized playouts that hammer the structural invariants and a
//! snapshot round-trip.

use std::collections::HashSet;

use animal_chess_core::{
    Game, GameError, PieceId, Pos, Side, Snapshot, Variant, CELLS, COLS, ROWS,
};

fn pos(row: u8, col: u8) -> Pos {
    Pos::from_row_col(row, col)
}

fn piece_at(game: &Game, row: u8, col: u8) -> PieceId {
    game.square(row, col)
        .unwrap()
        .piece()
        .unwrap_or_else(|| panic!("expected a piece at ({row}, {col})"))
}

/// Structural invariants that must hold after every mutation: 16 pieces,
/// each in exactly one place, cell and hand bookkeeping in agreement.
fn check_invariants(game: &Game) {
    let mut on_board = 0;
    let mut in_hands = 0;
    for (id, piece) in game.pieces() {
        match piece.pos() {
            Some(p) => {
                on_board += 1;
                assert_eq!(
                    game.square(p.row(), p.col()).unwrap().piece(),
                    Some(id),
                    "cell does not point back at its piece"
                );
            }
            None => {
                in_hands += 1;
                assert!(piece.is_in_hand());
                assert!(
                    game.hand(piece.owner()).contains(&id),
                    "hand piece missing from its owner's hand"
                );
                assert!(!piece.is_promoted(), "hand pieces are demoted");
            }
        }
        if !piece.variant().is_promotable() {
            assert!(!piece.is_promoted());
        }
    }
    assert_eq!(on_board + in_hands, 16);

    // every occupied cell refers to a piece that agrees
    for p in Pos::all() {
        if let Some(id) = game.square(p.row(), p.col()).unwrap().piece() {
            assert_eq!(game.piece(id).pos(), Some(p));
        }
    }

    // hands are disjoint and only hold their owner's pieces
    let upper: HashSet<PieceId> = game.hand(Side::Upper).iter().copied().collect();
    let lower: HashSet<PieceId> = game.hand(Side::Lower).iter().copied().collect();
    assert!(upper.is_disjoint(&lower));
    for &id in &upper {
        assert_eq!(game.piece(id).owner(), Side::Upper);
    }
    for &id in &lower {
        assert_eq!(game.piece(id).owner(), Side::Lower);
    }

    // the latch and the flags agree
    if let Some(winner) = game.winner() {
        assert!(winner.has_won());
    } else {
        assert!(!game.player(0).unwrap().has_won());
        assert!(!game.player(1).unwrap().has_won());
    }
}

#[test]
fn scripted_game_to_lion_capture() {
    let mut game = Game::new("Ann", "Bob");

    // Upper's middle chick takes Lower's middle chick
    let upper_chick = piece_at(&game, 2, 2);
    game.move_piece(upper_chick, pos(3, 2)).unwrap();
    let lower_chick = game.hand(Side::Upper)[0];
    assert_eq!(game.piece(lower_chick).variant(), Variant::Chick);
    check_invariants(&game);

    // Lower answers in kind on the adjacent file
    let counter = piece_at(&game, 3, 1);
    game.move_piece(counter, pos(2, 1)).unwrap();
    assert_eq!(game.hand(Side::Lower).len(), 1);
    check_invariants(&game);

    // the advanced chick enters the promotion zone
    game.move_piece(upper_chick, pos(4, 2)).unwrap();
    assert!(game.piece(upper_chick).is_promoted());
    check_invariants(&game);

    // Lower recycles its prisoner onto the vacated cell
    let prisoner = game.hand(Side::Lower)[0];
    game.drop_piece(Side::Lower, prisoner, pos(2, 2)).unwrap();
    assert_eq!(game.piece(prisoner).pos(), Some(pos(2, 2)));
    assert!(!game.piece(prisoner).is_promoted());
    check_invariants(&game);

    // the promoted chick strides onto the lion, dog-style
    game.move_piece(upper_chick, pos(5, 2)).unwrap();

    let winner = game.winner().expect("lion capture decides the game");
    assert_eq!(winner.name(), "Ann");
    assert_eq!(winner.side(), Side::Upper);
    assert!(game.player(0).unwrap().has_won());
    assert!(!game.player(1).unwrap().has_won());

    // hand now holds the first chick and the lion, both Upper's
    let hand: Vec<Variant> = game
        .hand(Side::Upper)
        .iter()
        .map(|&id| game.piece(id).variant())
        .collect();
    assert_eq!(hand.len(), 2);
    assert!(hand.contains(&Variant::Lion));
    assert!(hand.contains(&Variant::Chick));
    check_invariants(&game);
}

#[test]
fn promotion_cycle_repeats_indefinitely() {
    let mut game = Game::unchecked("A", "B");
    let chick = game
        .place(Variant::Chick, Side::Upper, pos(3, 2))
        .unwrap();
    let dog = game.place(Variant::Dog, Side::Lower, pos(5, 2)).unwrap();

    for round in 0..3 {
        // promote by stepping into the zone
        game.move_piece(chick, pos(4, 2)).unwrap();
        assert!(game.piece(chick).is_promoted(), "round {round}");

        // captured: demoted into Lower's hand
        game.move_piece(dog, pos(4, 2)).unwrap();
        assert!(!game.piece(chick).is_promoted());
        assert_eq!(game.piece(chick).owner(), Side::Lower);

        // dropped back (reset), handed back to Upper by a counter-capture
        game.drop_piece(Side::Lower, chick, pos(2, 2)).unwrap();
        assert!(!game.piece(chick).is_promoted());
        let lion = game.place(Variant::Lion, Side::Upper, pos(1, 2)).unwrap();
        game.move_piece(lion, pos(2, 2)).unwrap();
        game.drop_piece(Side::Upper, chick, pos(3, 2)).unwrap();

        // reset the stage: the dog retreats, the helper lion leaves
        game.move_piece(dog, pos(5, 2)).unwrap();
        game.move_piece(lion, pos(0, round)).unwrap();
        check_invariants_sandbox(&game);
    }
}

/// Sandbox variant of the invariant check (piece count varies).
fn check_invariants_sandbox(game: &Game) {
    for (id, piece) in game.pieces() {
        match piece.pos() {
            Some(p) => assert_eq!(game.square(p.row(), p.col()).unwrap().piece(), Some(id)),
            None => assert!(game.hand(piece.owner()).contains(&id)),
        }
    }
}

#[test]
fn random_playouts_preserve_invariants() {
    use rand::prelude::*;

    let mut rng = rand::rng();

    for _ in 0..20 {
        let mut game = Game::new("A", "B");
        let mut side = Side::Upper;

        for _ply in 0..300 {
            if game.winner().is_some() {
                break;
            }

            // moves for every piece of the side to act, plus hand drops
            let mut actions: Vec<(PieceId, Pos, bool)> = Vec::new();
            for (id, piece) in game.pieces() {
                if piece.owner() == side && !piece.is_in_hand() {
                    for to in game.legal_moves(id) {
                        // the published promise: in bounds, never friendly
                        assert!(to.row() < ROWS && to.col() < COLS);
                        if let Some(occ) = game.square(to.row(), to.col()).unwrap().piece() {
                            assert_ne!(game.piece(occ).owner(), side);
                        }
                        actions.push((id, to, false));
                    }
                }
            }
            for &id in game.hand(side) {
                for p in Pos::all() {
                    if game.square(p.row(), p.col()).unwrap().is_empty() {
                        actions.push((id, p, true));
                    }
                }
            }
            if actions.is_empty() {
                break;
            }

            let (id, to, is_drop) = actions[rng.random_range(0..actions.len())];
            if is_drop {
                game.drop_piece(side, id, to).unwrap();
            } else {
                game.move_piece(id, to).unwrap();
            }

            check_invariants(&game);
            side = side.opponent();
        }
    }
}

#[test]
fn drop_errors_leave_hand_alone() {
    let mut game = Game::new("A", "B");
    let attacker = piece_at(&game, 2, 2);
    game.move_piece(attacker, pos(3, 2)).unwrap();
    let prisoner = game.hand(Side::Upper)[0];

    // wrong owner, then occupied target
    assert_eq!(
        game.drop_piece(Side::Lower, prisoner, pos(4, 2)),
        Err(GameError::PieceNotInHand)
    );
    assert_eq!(
        game.drop_piece(Side::Upper, prisoner, pos(5, 2)),
        Err(GameError::IllegalMove(pos(5, 2)))
    );
    assert_eq!(game.hand(Side::Upper), &[prisoner]);
    check_invariants(&game);

    game.drop_piece(Side::Upper, prisoner, pos(4, 2)).unwrap();
    assert!(game.hand(Side::Upper).is_empty());
    check_invariants(&game);
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut game = Game::new("A", "B");
    let chick = piece_at(&game, 2, 2);
    game.move_piece(chick, pos(3, 2)).unwrap();
    game.move_piece(chick, pos(4, 2)).unwrap();

    let snap = game.snapshot();
    assert_eq!(snap.cells.len(), CELLS);
    assert_eq!(snap.winner, None);

    // one prisoner in Upper's hand, the promoted chick on the board
    assert_eq!(snap.hands[Side::Upper.index()].len(), 1);
    assert!(snap.hands[Side::Lower.index()].is_empty());
    let promoted = snap.cells[pos(4, 2).index()]
        .as_ref()
        .expect("chick sits at (4, 2)");
    assert_eq!(promoted.variant, Variant::Chick);
    assert_eq!(promoted.owner, Side::Upper);
    assert!(promoted.promoted);

    let on_board = snap.cells.iter().flatten().count();
    let in_hands: usize = snap.hands.iter().map(Vec::len).sum();
    assert_eq!(on_board + in_hands, 16);

    let json = serde_json::to_string(&snap).unwrap();
    let back: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn board_constants_match_the_grid() {
    assert_eq!(ROWS, 6);
    assert_eq!(COLS, 5);
    assert_eq!(CELLS, 30);
    assert_eq!(Pos::all().count(), CELLS);
}

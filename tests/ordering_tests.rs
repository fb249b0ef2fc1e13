use corvid::board::{Color, Piece};
use corvid::moves::types::{CAPTURE, KINGSIDE_CASTLE, Move, PROMOTION_CAPTURE, QUIET_MOVE};
use corvid::search::ordering::order_moves;
use corvid::square::Square;

fn make_move(
    from: u8,
    to: u8,
    flags: u8,
    promo: Option<Piece>,
    captured: Option<Piece>,
    piece: Piece,
) -> Move {
    Move {
        from: Square::from_index(from),
        to: Square::from_index(to),
        piece,
        promotion: promo,
        captured,
        flags,
    }
}

#[test]
fn hash_move_overrides_everything() {
    let hash_move = make_move(12, 20, QUIET_MOVE, None, None, Piece::Pawn);
    let capture = make_move(0, 8, CAPTURE, None, Some(Piece::Queen), Piece::Pawn);
    let mut moves = vec![capture, hash_move];
    let history = [[[0; 64]; 64]; 2];

    order_moves(&mut moves, Color::White, &history, &[None, None], Some(hash_move));

    assert_eq!(moves[0], hash_move, "hash move must sort first");
}

#[test]
fn captures_rank_by_mvv_lva() {
    // Pawn takes queen ranks above knight takes queen (least valuable attacker first).
    let pxq = make_move(28, 35, CAPTURE, None, Some(Piece::Queen), Piece::Pawn);
    let nxq = make_move(21, 35, CAPTURE, None, Some(Piece::Queen), Piece::Knight);
    let mut moves = vec![nxq, pxq];
    let history = [[[0; 64]; 64]; 2];

    order_moves(&mut moves, Color::White, &history, &[None, None], None);

    assert_eq!(moves[0], pxq, "pawn capturing queen should rank above knight doing the same");
    assert_eq!(moves[1], nxq);
}

#[test]
fn captures_rank_above_quiets() {
    let capture = make_move(0, 8, CAPTURE, None, Some(Piece::Pawn), Piece::Pawn);
    let quiet = make_move(4, 5, QUIET_MOVE, None, None, Piece::Knight);
    let mut moves = vec![quiet, capture];
    let history = [[[0; 64]; 64]; 2];

    order_moves(&mut moves, Color::White, &history, &[None, None], None);

    assert_eq!(moves[0], capture, "captures should outrank quiet moves");
}

#[test]
fn killer_breaks_tie_between_equal_history_quiets() {
    let a = make_move(8, 16, QUIET_MOVE, None, None, Piece::Knight);
    let b = make_move(9, 17, QUIET_MOVE, None, None, Piece::Knight);
    let mut moves = vec![a, b];
    let history = [[[0; 64]; 64]; 2];

    order_moves(&mut moves, Color::White, &history, &[Some(b), None], None);

    assert_eq!(moves[0], b, "killer move should rank first among equal-history quiets");
}

#[test]
fn higher_history_score_sorts_first() {
    let mv_a = make_move(8, 16, QUIET_MOVE, None, None, Piece::Knight);
    let mv_h = make_move(9, 17, QUIET_MOVE, None, None, Piece::Knight);
    let mut moves = vec![mv_a, mv_h];

    let mut history = [[[0; 64]; 64]; 2];
    history[Color::White as usize][8][16] = 100;
    history[Color::White as usize][9][17] = 500;

    order_moves(&mut moves, Color::White, &history, &[None, None], None);

    assert_eq!(moves[0], mv_h, "history move with higher score should be first");
    assert_eq!(moves[1], mv_a);
}

#[test]
fn history_is_scoped_per_side() {
    // White's history table says this square pair is hot; black's doesn't, so ordering
    // a black move against the same from/to shouldn't be swayed by white's scores.
    let a = make_move(8, 16, QUIET_MOVE, None, None, Piece::Knight);
    let b = make_move(9, 17, QUIET_MOVE, None, None, Piece::Knight);
    let mut moves = vec![a, b];

    let mut history = [[[0; 64]; 64]; 2];
    history[Color::White as usize][8][16] = 1000;

    order_moves(&mut moves, Color::Black, &history, &[None, None], None);

    // Neither move has black-side history, so original order (by our comparator's
    // stability) is preserved instead of white's history leaking in.
    assert_eq!(moves[0], a);
    assert_eq!(moves[1], b);
}

#[test]
fn castling_is_a_plain_quiet_move() {
    let castle = make_move(4, 6, KINGSIDE_CASTLE, None, None, Piece::King);
    let capture = make_move(0, 8, CAPTURE, None, Some(Piece::Pawn), Piece::Pawn);
    let mut moves = vec![castle, capture];
    let history = [[[0; 64]; 64]; 2];

    order_moves(&mut moves, Color::White, &history, &[None, None], None);

    assert_eq!(moves[0], capture, "capture should outrank castling");
    assert_eq!(moves[1], castle);
}

#[test]
fn promotion_capture_scores_as_a_capture() {
    let promo_capture = make_move(48, 57, PROMOTION_CAPTURE, Some(Piece::Queen), Some(Piece::Knight), Piece::Pawn);
    let quiet = make_move(4, 5, QUIET_MOVE, None, None, Piece::Knight);
    let mut moves = vec![quiet, promo_capture];
    let history = [[[0; 64]; 64]; 2];

    order_moves(&mut moves, Color::White, &history, &[None, None], None);

    assert_eq!(moves[0], promo_capture, "a promoting capture is still a capture for ordering");
}

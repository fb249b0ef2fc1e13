use corvid::search::tt::{Bound, TranspositionTable, score_from_tt, score_to_tt};

#[test]
fn store_then_probe_round_trips_through_tt() {
    let mut tt = TranspositionTable::new(1);
    let key = 123456789;

    tt.store(key, 5, 30985, Bound::Exact, None);

    let entry = tt.probe(key).unwrap();
    assert_eq!(entry.score, 30985);
    assert_eq!(entry.depth, 5);
    assert_eq!(entry.bound, Bound::Exact);
}

#[test]
fn mate_score_transposition_adjusts_for_new_ply() {
    let mut tt = TranspositionTable::new(1);
    let key = 123456789;

    // Mate-in-5 discovered at a node 10 plies from this search's root: the raw
    // negamax score there is MATE - 15.
    let raw_score_at_ply_10 = 32000 - 15;
    let stored_score = score_to_tt(raw_score_at_ply_10, 10);
    tt.store(key, 5, stored_score, Bound::Exact, None);

    // Probed again from the same ply: decodes back to the original score.
    let entry = tt.probe(key).unwrap();
    assert_eq!(score_from_tt(entry.score as i32, 10), raw_score_at_ply_10);

    // Transposition: the same position is reached later via a different path,
    // 3 plies shallower (ply 7). The mate is still 5 plies away from this node,
    // so the decoded score reflects MATE - (7 + 5), not the raw stored value.
    let entry = tt.probe(key).unwrap();
    let decoded_at_ply_7 = score_from_tt(entry.score as i32, 7);
    assert_eq!(decoded_at_ply_7, raw_score_at_ply_10 + 3);
    assert_eq!(decoded_at_ply_7, 32000 - (7 + 5));
}

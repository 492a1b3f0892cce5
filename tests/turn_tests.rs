use seabattle::{Coord, ShotError, ShotOutcome, Side, TurnResolver, TurnState};

#[test]
fn test_miss_passes_turn() {
    let mut turns = TurnResolver::new(Side::Human);
    assert_eq!(turns.resolve(&Ok(ShotOutcome::Miss), 3), TurnState::Awaiting(Side::Computer));
    assert_eq!(turns.resolve(&Ok(ShotOutcome::Miss), 3), TurnState::Awaiting(Side::Human));
}

#[test]
fn test_hit_keeps_turn() {
    let mut turns = TurnResolver::default();
    assert_eq!(turns.current(), Some(Side::Human));
    assert_eq!(turns.resolve(&Ok(ShotOutcome::Hit), 3), TurnState::Awaiting(Side::Human));
    assert_eq!(
        turns.resolve(&Ok(ShotOutcome::Sunk { length: 2 }), 2),
        TurnState::Awaiting(Side::Human)
    );
}

#[test]
fn test_refused_shot_keeps_turn() {
    let mut turns = TurnResolver::new(Side::Computer);
    let refused = Err(ShotError::AlreadyShot {
        coord: Coord::unchecked(1, 1),
    });
    assert_eq!(turns.resolve(&refused, 3), TurnState::Awaiting(Side::Computer));
    let off_board = Err(ShotError::OutOfRange {
        coord: Coord::unchecked(0, 3),
        size: 6,
    });
    assert_eq!(turns.resolve(&off_board, 3), TurnState::Awaiting(Side::Computer));
}

#[test]
fn test_last_sink_finishes_game() {
    let mut turns = TurnResolver::new(Side::Human);
    let state = turns.resolve(&Ok(ShotOutcome::Sunk { length: 1 }), 0);
    assert_eq!(state, TurnState::Finished { winner: Side::Human });
    assert!(turns.is_finished());
    assert_eq!(turns.winner(), Some(Side::Human));
    assert_eq!(turns.current(), None);

    // terminal state absorbs further outcomes
    assert_eq!(
        turns.resolve(&Ok(ShotOutcome::Miss), 0),
        TurnState::Finished { winner: Side::Human }
    );
}

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Human.opponent(), Side::Computer);
    assert_eq!(Side::Computer.opponent(), Side::Human);
    assert_eq!(Side::Human.to_string(), "User");
}

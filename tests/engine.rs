use nim::{IllegalMove, InvalidConfiguration, Move, Outcome, Player, Position};
use quickcheck::QuickCheck;

/// Small heap configuration derived from arbitrary bytes
fn small_position(heaps: Vec<u8>) -> Position {
    Position::new(heaps.into_iter().take(5).map(|h| u32::from(h % 6)).collect())
}

#[test]
fn scenario_legal_move_order() {
    let position = Position::initial([3, 1]).unwrap();
    assert_eq!(
        position.legal_moves(),
        vec![
            Move::new(0, 1),
            Move::new(0, 2),
            Move::new(0, 3),
            Move::new(1, 1)
        ]
    );
}

#[test]
fn scenario_taking_last_object_loses() {
    let position = Position::initial([1]).unwrap();
    let next = position.apply(Move::new(0, 1)).unwrap();

    assert_eq!(next.heaps(), &[0]);
    assert_eq!(next.to_move(), Player::Second);
    assert!(next.is_terminal());
    assert_eq!(next.outcome(), Outcome::SecondWins);
    assert_eq!(next.utility(Player::Second), 1);
    assert_eq!(next.utility(Player::First), -1);
}

#[test]
fn scenario_empty_start_is_won_by_first() {
    let position = Position::initial([0, 0]).unwrap();
    assert!(position.is_terminal());
    assert!(position.legal_moves().is_empty());
    assert_eq!(position.outcome(), Outcome::FirstWins);
}

#[test]
fn scenario_overdraw_is_rejected() {
    let position = Position::initial([3, 1]).unwrap();
    assert_eq!(
        position.apply(Move::new(0, 5)),
        Err(IllegalMove::AmountExceedsHeap {
            heap: 0,
            amount: 5,
            available: 3
        })
    );
}

#[test]
fn undetermined_before_the_end() {
    let position = Position::initial([7, 5, 3, 1]).unwrap();
    assert!(!position.is_terminal());
    assert_eq!(position.outcome(), Outcome::Undetermined);
    assert_eq!(position.utility(Player::First), 0);
}

#[test]
fn empty_heap_list_is_terminal() {
    let position = Position::initial(Vec::<u32>::new()).unwrap();
    assert!(position.is_terminal());
    assert_eq!(position.outcome(), Outcome::FirstWins);
}

#[test]
fn negative_heaps_are_rejected() {
    assert!(matches!(
        Position::initial([2_i64, 0, -3]),
        Err(InvalidConfiguration::OutOfRange { index: 2, .. })
    ));
    assert!(matches!(
        "[2, 0.5]".parse::<Position>(),
        Err(InvalidConfiguration::NotAnInteger { index: 1, .. })
    ));
}

#[test]
fn illegal_moves_are_rejected() {
    let test = |heaps: Vec<u8>, heap: u8, extra: u8| {
        let position = small_position(heaps);
        let heap = usize::from(heap % 7);

        match position.heaps().get(heap).copied() {
            None => assert_eq!(
                position.apply(Move::new(heap, 1)),
                Err(IllegalMove::HeapOutOfRange {
                    heap,
                    heaps: position.heaps().len()
                })
            ),
            Some(available) => {
                assert_eq!(
                    position.apply(Move::new(heap, 0)),
                    Err(IllegalMove::ZeroAmount { heap })
                );
                let amount = available + 1 + u32::from(extra);
                assert_eq!(
                    position.apply(Move::new(heap, amount)),
                    Err(IllegalMove::AmountExceedsHeap {
                        heap,
                        amount,
                        available
                    })
                );
            }
        }
    };
    QuickCheck::new().quickcheck(test as fn(Vec<u8>, u8, u8));
}

#[test]
fn move_count_equals_object_count() {
    let test = |heaps: Vec<u8>| {
        let position = small_position(heaps);
        assert_eq!(position.legal_moves().len() as u64, position.total());
    };
    QuickCheck::new().quickcheck(test as fn(Vec<u8>));
}

#[test]
fn every_move_makes_progress_and_alternates() {
    let test = |heaps: Vec<u8>| {
        let position = small_position(heaps);
        for mv in position.legal_moves() {
            let next = position.apply(mv).unwrap();
            assert_eq!(next.total(), position.total() - u64::from(mv.amount));
            assert_ne!(next.to_move(), position.to_move());
            assert_eq!(next.heaps().len(), position.heaps().len());
        }
    };
    QuickCheck::new().quickcheck(test as fn(Vec<u8>));
}

#[test]
fn play_always_ends_with_misere_verdict() {
    let test = |heaps: Vec<u8>, choices: Vec<usize>| {
        let mut position = small_position(heaps);
        let mut choices = choices.into_iter().cycle();
        let mut plies = 0;
        let budget = position.total();

        while !position.is_terminal() {
            let moves = position.legal_moves();
            assert!(!moves.is_empty());
            let pick = choices.next().unwrap_or(0) % moves.len();
            let mover = position.to_move();
            position = position.apply(moves[pick]).unwrap();
            plies += 1;
            assert!(plies <= budget);

            if position.is_terminal() {
                assert_eq!(position.outcome().winner(), Some(mover.opposite()));
            }
        }

        assert!(position.legal_moves().is_empty());
        assert_eq!(position.outcome().winner(), Some(position.to_move()));
    };
    QuickCheck::new().quickcheck(test as fn(Vec<u8>, Vec<usize>));
}

#[test]
fn terminal_iff_no_moves() {
    let test = |heaps: Vec<u8>| {
        let position = small_position(heaps);
        assert_eq!(position.is_terminal(), position.legal_moves().is_empty());
    };
    QuickCheck::new().quickcheck(test as fn(Vec<u8>));
}

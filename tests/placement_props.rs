use battlegrid::{place, Board, Cell, Orientation, PlacementError, Ship, BOARD_SIZE};
use proptest::prelude::*;

const N: usize = BOARD_SIZE as usize;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::ALL.to_vec())
}

fn ship() -> impl Strategy<Value = Ship> {
    (0..N + 2, 0..N + 2, orientation()).prop_map(|(r, c, o)| Ship::new("prop", r, c, o))
}

/// Cells computed straight from the offset rule, with signed arithmetic.
fn expected_cells(ship: &Ship) -> Vec<(isize, isize)> {
    let (r, c) = ship.origin();
    let (dr, dc) = match ship.orientation() {
        Orientation::Horizontal => (0, 1),
        Orientation::Vertical => (1, 0),
        Orientation::MainDiagonal => (1, 1),
        Orientation::AntiDiagonal => (1, -1),
    };
    (0..ship.length() as isize)
        .map(|i| (r as isize + dr * i, c as isize + dc * i))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn place_succeeds_iff_in_bounds_and_free(first in ship(), second in ship()) {
        let mut board = Board::new();
        let _ = place(&mut board, &first);
        let before = board;

        let cells = expected_cells(&second);
        let in_bounds = cells.iter().all(|&(r, c)| board.contains(r, c));
        let free = in_bounds
            && cells.iter().all(|&(r, c)| board.get(r as usize, c as usize) != Cell::Ship);

        match place(&mut board, &second) {
            Ok(()) => {
                prop_assert!(in_bounds && free);
                for (r, c) in cells {
                    prop_assert_eq!(board.get(r as usize, c as usize), Cell::Ship);
                }
                prop_assert_eq!(
                    board.count(Cell::Ship),
                    before.count(Cell::Ship) + second.length()
                );
            }
            Err(PlacementError::OutOfBounds) => {
                prop_assert!(!in_bounds);
                prop_assert_eq!(board, before);
            }
            Err(PlacementError::Overlap) => {
                prop_assert!(in_bounds && !free);
                prop_assert_eq!(board, before);
            }
        }
    }

    #[test]
    fn disjoint_ships_commute(a in ship(), b in ship()) {
        let mut ab = Board::new();
        let mut ba = Board::new();
        let placed_ab = place(&mut ab, &a).is_ok() && place(&mut ab, &b).is_ok();
        let placed_ba = place(&mut ba, &b).is_ok() && place(&mut ba, &a).is_ok();
        prop_assert_eq!(placed_ab, placed_ba);
        if placed_ab {
            prop_assert_eq!(ab, ba);
        }
    }

    #[test]
    fn second_identical_place_overlaps(s in ship()) {
        let mut board = Board::new();
        if place(&mut board, &s).is_ok() {
            prop_assert_eq!(place(&mut board, &s), Err(PlacementError::Overlap));
        }
    }
}

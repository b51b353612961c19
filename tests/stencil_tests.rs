use battlegrid::{
    apply, generate, generate_with, place, Ability, Board, Cell, Orientation, Ship, StencilShape,
    STENCIL_CENTER, STENCIL_SIZE,
};

const K: usize = STENCIL_CENTER;

fn row_count(shape: StencilShape, i: usize) -> usize {
    let m = generate(shape);
    (0..STENCIL_SIZE).filter(|&j| m.get(i, j).unwrap()).count()
}

#[test]
fn test_cross_matrix() {
    let m = generate(StencilShape::Cross);
    for i in 0..STENCIL_SIZE {
        for j in 0..STENCIL_SIZE {
            assert_eq!(m.get(i, j).unwrap(), i == K || j == K, "({}, {})", i, j);
        }
    }
    assert_eq!(m.count_ones(), 2 * STENCIL_SIZE - 1);
    assert_eq!(m.count_ones(), 13);
}

#[test]
fn test_octahedron_matrix() {
    let m = generate(StencilShape::Octahedron);
    assert_eq!(m.count_ones(), 2 * K * K + 2 * K + 1);
    assert_eq!(m.count_ones(), 25);
    assert!(m.get(0, K).unwrap());
    assert!(m.get(K, 0).unwrap());
    assert!(!m.get(0, 0).unwrap());
    assert!(!m.get(1, 1).unwrap());
    assert!(m.get(2, 2).unwrap());
}

#[test]
fn test_cone_matrix() {
    assert_eq!(row_count(StencilShape::Cone, 0), 1);
    assert!(generate(StencilShape::Cone).get(0, K).unwrap());
    assert_eq!(row_count(StencilShape::Cone, 1), 3);
    assert_eq!(row_count(StencilShape::Cone, 2), 5);
    assert_eq!(row_count(StencilShape::Cone, K), 2 * K + 1);
    assert_eq!(row_count(StencilShape::Cone, K + 2), STENCIL_SIZE);
    for i in K + 3..STENCIL_SIZE {
        assert_eq!(row_count(StencilShape::Cone, i), 0);
    }
    assert_eq!(generate(StencilShape::Cone).count_ones(), 30);
}

#[test]
fn test_generate_is_deterministic() {
    for shape in StencilShape::ALL {
        assert_eq!(generate(shape), generate(shape));
        assert_eq!(generate(shape), generate_with(|i, j| shape.contains(i, j)));
    }
    assert!(generate_with(|_, _| false).is_empty());
}

#[test]
fn test_cross_on_empty_board() {
    let mut board = Board::new();
    let written = apply(&mut board, &Ability::new("CROSS", StencilShape::Cross, 7, 2));
    assert_eq!(written, 11);
    for (r, c, cell) in board.cells() {
        let expected = if (r == 7 && c <= 5) || (c == 2 && r >= 4) {
            Cell::EffectZone
        } else {
            Cell::Water
        };
        assert_eq!(cell, expected, "({}, {})", r, c);
    }
}

#[test]
fn test_ships_take_precedence() {
    let mut board = Board::new();
    place(&mut board, &Ship::new("row", 7, 0, Orientation::Horizontal)).unwrap();
    let written = apply(&mut board, &Ability::new("CROSS", StencilShape::Cross, 7, 2));
    assert_eq!(written, 8);
    for c in 0..3 {
        assert_eq!(board.get(7, c), Cell::Ship);
    }
    assert_eq!(board.get(7, 3), Cell::EffectZone);
    assert_eq!(board.get(4, 2), Cell::EffectZone);
    assert_eq!(board.count(Cell::Ship), 3);
}

#[test]
fn test_corner_clipping() {
    let mut board = Board::new();
    let written = apply(&mut board, &Ability::new("CONE", StencilShape::Cone, 0, 0));
    assert_eq!(written, 12);
    assert_eq!(board.count(Cell::EffectZone), 12);
    assert_eq!(board.get(0, 0), Cell::EffectZone);
    assert_eq!(board.get(2, 3), Cell::EffectZone);
    assert_eq!(board.get(3, 0), Cell::Water);
}

#[test]
fn test_targets_are_clipped() {
    let board = Board::new();
    let ability = Ability::new("OCT", StencilShape::Octahedron, 9, 9);
    let targets: Vec<_> = ability.targets(&board).collect();
    // only the upper-left quarter of the diamond fits
    assert_eq!(targets.len(), 10);
    assert!(targets.iter().all(|&(r, c)| r < 10 && c < 10));
    assert!(targets.contains(&(9, 9)));
    assert!(targets.contains(&(6, 9)));
    assert!(targets.contains(&(9, 6)));
}

#[test]
fn test_reapplying_is_stable() {
    let mut board = Board::new();
    let ability = Ability::new("OCT", StencilShape::Octahedron, 4, 7);
    apply(&mut board, &ability);
    let once = board;
    apply(&mut board, &ability);
    assert_eq!(board, once);
}

#[test]
fn test_ability_accessors() {
    let ability = Ability::new("CONE", StencilShape::Cone, 2, 5);
    assert_eq!(ability.name(), "CONE");
    assert_eq!(ability.shape(), StencilShape::Cone);
    assert_eq!(ability.origin(), (2, 5));
    assert_eq!(*ability.matrix(), generate(StencilShape::Cone));
}

#[test]
fn test_far_origins_project_nothing() {
    let mut board = Board::new();
    for origin in [isize::MAX as usize, usize::MAX, usize::MAX - 2] {
        for shape in StencilShape::ALL {
            assert_eq!(apply(&mut board, &Ability::new("FAR", shape, origin, 0)), 0);
            assert_eq!(apply(&mut board, &Ability::new("FAR", shape, 0, origin)), 0);
        }
    }
    assert_eq!(board, Board::new());
}

#[test]
fn test_origin_just_off_board_reaches_in() {
    let mut board = Board::new();
    // the cross arm still reaches row 9 from three rows below the board
    let written = apply(&mut board, &Ability::new("CROSS", StencilShape::Cross, 12, 4));
    assert_eq!(written, 1);
    assert_eq!(board.get(9, 4), Cell::EffectZone);
}

use broadside::{place_fleet, Board, BoardError, Cell, Coord, Direction, GameConfig};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn count(board: &Board<'_>, wanted: Cell) -> usize {
    board
        .config()
        .dims()
        .coords()
        .filter(|&c| board.cell(c) == Some(wanted))
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn place_then_unplace_restores_board(
        rows in 1usize..=10,
        cols in 1usize..=10,
        row in -1i32..11,
        col in -1i32..11,
        vertical in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut config = GameConfig::new(rows, cols).unwrap();
        let length = rows.max(cols).min(3);
        config.add_ship(length, 'S', "ship").unwrap();
        let mut board = Board::new(&config);

        // Scatter a few misses so the round trip runs against a used grid.
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..rng.random_range(0..=rows * cols / 3) {
            let _ = board.attack(config.dims().random_coord(&mut rng));
        }
        let before = board.render(false);

        let anchor = Coord::new(row, col);
        let direction = if vertical { Direction::Vertical } else { Direction::Horizontal };
        if board.place_ship(anchor, 0, direction).is_ok() {
            prop_assert_eq!(board.hits_on(0), Some(0));
            prop_assert_eq!(board.unplace_ship(anchor, 0, direction), Ok(()));
        }
        prop_assert_eq!(board.render(false), before);
        prop_assert_eq!(board.placed_ships().count(), 0);
    }

    #[test]
    fn second_attack_always_rejected(seed in any::<u64>(), row in 0i32..10, col in 0i32..10) {
        let config = GameConfig::standard(10, 10).unwrap();
        let mut board = Board::new(&config);
        let mut rng = SmallRng::seed_from_u64(seed);
        place_fleet(&mut board, &mut rng).unwrap();

        let target = Coord::new(row, col);
        board.attack(target).unwrap();
        let after_first = board.render(false);
        prop_assert_eq!(board.attack(target), Err(BoardError::AlreadyAttacked(target)));
        prop_assert_eq!(board.render(false), after_first);
    }

    #[test]
    fn block_marks_half_and_unblock_restores(rows in 1usize..=10, cols in 1usize..=10, seed in any::<u64>()) {
        let config = GameConfig::new(rows, cols).unwrap();
        let mut board = Board::new(&config);
        let mut rng = SmallRng::seed_from_u64(seed);

        board.block(&mut rng);
        prop_assert_eq!(count(&board, Cell::Blocked), rows * cols / 2);
        prop_assert_eq!(count(&board, Cell::Empty), rows * cols - rows * cols / 2);

        board.unblock();
        prop_assert_eq!(count(&board, Cell::Empty), rows * cols);
    }

    #[test]
    fn attacking_every_cell_destroys_the_fleet(seed in any::<u64>()) {
        let config = GameConfig::standard(10, 10).unwrap();
        let mut board = Board::new(&config);
        let mut rng = SmallRng::seed_from_u64(seed);
        place_fleet(&mut board, &mut rng).unwrap();

        let mut destroyed = Vec::new();
        for target in config.dims().coords() {
            prop_assert_eq!(board.all_ships_destroyed(), destroyed.len() == 5);
            if let Some(id) = board.attack(target).unwrap().destroyed() {
                destroyed.push(id);
            }
        }
        destroyed.sort_unstable();
        prop_assert_eq!(destroyed, vec![0, 1, 2, 3, 4]);
        prop_assert!(board.all_ships_destroyed());
    }
}

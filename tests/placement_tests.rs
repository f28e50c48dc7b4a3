use broadside::placement::backtrack;
use broadside::{
    place_fleet, Board, Cell, Coord, Direction, GameConfig, PlacementError, PLACEMENT_ATTEMPTS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn tiny_fleet(rows: usize, cols: usize, lengths: &[usize]) -> GameConfig {
    let mut config = GameConfig::new(rows, cols).unwrap();
    for (i, &length) in lengths.iter().enumerate() {
        let symbol = (b'a' + i as u8) as char;
        config.add_ship(length, symbol, format!("ship {i}")).unwrap();
    }
    config
}

#[test]
fn test_backtrack_fills_exact_fit() {
    let config = tiny_fleet(1, 2, &[1, 1]);
    let mut board = Board::new(&config);
    assert!(backtrack(&mut board, 0));
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Ship(0)));
    assert_eq!(board.cell(Coord::new(0, 1)), Some(Cell::Ship(1)));
}

#[test]
fn test_backtrack_reports_unfittable_fleet() {
    let config = tiny_fleet(1, 4, &[1, 3]);
    let mut board = Board::new(&config);
    board
        .place_ship(Coord::new(0, 1), 0, Direction::Horizontal)
        .unwrap();
    let before = board.render(false);

    assert!(!backtrack(&mut board, 1));
    assert_eq!(board.render(false), before);
    assert_eq!(board.placed_ships().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_backtrack_undoes_dead_ends() {
    // Ship 0 first lands at (0,0) which leaves no room for ship 1; the
    // search must move it on.
    let config = tiny_fleet(2, 2, &[1, 2]);
    let mut board = Board::new(&config);
    board.attack(Coord::new(1, 1)).unwrap();

    assert!(backtrack(&mut board, 0));
    assert_eq!(board.cell(Coord::new(0, 1)), Some(Cell::Ship(0)));
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Ship(1)));
    assert_eq!(board.cell(Coord::new(1, 0)), Some(Cell::Ship(1)));
}

#[test]
fn test_backtrack_is_row_major_horizontal_first() {
    let config = GameConfig::standard(10, 10).unwrap();
    let mut board = Board::new(&config);
    assert!(backtrack(&mut board, 0));
    for col in 0..5 {
        assert_eq!(board.cell(Coord::new(0, col)), Some(Cell::Ship(0)));
    }
    for col in 5..9 {
        assert_eq!(board.cell(Coord::new(0, col)), Some(Cell::Ship(1)));
    }
}

#[test]
fn test_place_fleet_standard_layout() {
    let config = GameConfig::standard(10, 10).unwrap();
    for seed in 0..10 {
        let mut board = Board::new(&config);
        let mut rng = SmallRng::seed_from_u64(seed);
        place_fleet(&mut board, &mut rng).unwrap();

        let mut placed: Vec<_> = board.placed_ships().collect();
        placed.sort_unstable();
        assert_eq!(placed, vec![0, 1, 2, 3, 4]);
        let cells: Vec<_> = config.dims().coords().filter_map(|c| board.cell(c)).collect();
        assert_eq!(cells.iter().filter(|c| matches!(c, Cell::Ship(_))).count(), 17);
        assert!(!cells.contains(&Cell::Blocked));
    }
}

#[test]
fn test_place_fleet_varies_with_seed() {
    let config = GameConfig::standard(10, 10).unwrap();
    let layouts: Vec<String> = (0..5)
        .map(|seed| {
            let mut board = Board::new(&config);
            place_fleet(&mut board, &mut SmallRng::seed_from_u64(seed)).unwrap();
            board.render(false)
        })
        .collect();
    assert!(layouts.iter().any(|l| l != &layouts[0]));
}

#[test]
fn test_place_fleet_gives_up_when_blocking_always_starves() {
    // Blocking takes one of the two cells, so the second ship never fits.
    let config = tiny_fleet(1, 2, &[1, 1]);
    let mut board = Board::new(&config);
    let mut rng = SmallRng::seed_from_u64(3);

    assert_eq!(
        place_fleet(&mut board, &mut rng),
        Err(PlacementError {
            attempts: PLACEMENT_ATTEMPTS
        })
    );
    assert_eq!(board.render(false), "  01\n0 ..\n");
    assert_eq!(board.placed_ships().count(), 0);
}

use broadside::{Board, BoardError, Cell, Coord, Direction, GameConfig, Shot};

fn single_ship(rows: usize, cols: usize, length: usize) -> GameConfig {
    let mut config = GameConfig::new(rows, cols).unwrap();
    config.add_ship(length, 'D', "destroyer").unwrap();
    config
}

#[test]
fn test_attack_sequence_on_three_by_three() {
    let config = single_ship(3, 3, 3);
    let mut board = Board::new(&config);
    board
        .place_ship(Coord::new(1, 0), 0, Direction::Horizontal)
        .unwrap();

    assert_eq!(board.attack(Coord::new(1, 0)).unwrap(), Shot::Hit);
    assert_eq!(
        board.attack(Coord::new(1, 0)).unwrap_err(),
        BoardError::AlreadyAttacked(Coord::new(1, 0))
    );
    assert_eq!(board.attack(Coord::new(1, 1)).unwrap(), Shot::Hit);
    assert_eq!(board.attack(Coord::new(1, 2)).unwrap(), Shot::Destroyed(0));
    assert_eq!(board.attack(Coord::new(0, 0)).unwrap(), Shot::Miss);
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Miss));
    assert_eq!(board.cell(Coord::new(1, 2)), Some(Cell::Hit));
    assert!(board.all_ships_destroyed());
}

#[test]
fn test_attack_out_of_bounds_rejected() {
    let config = single_ship(3, 3, 2);
    let mut board = Board::new(&config);
    for target in [Coord::new(-1, 0), Coord::new(0, 3), Coord::new(3, 3)] {
        assert_eq!(
            board.attack(target).unwrap_err(),
            BoardError::OutOfBounds(target)
        );
    }
}

#[test]
fn test_all_ships_destroyed_needs_every_ship() {
    let mut config = GameConfig::new(5, 5).unwrap();
    config.add_ship(2, 'P', "patrol boat").unwrap();
    config.add_ship(3, 'S', "submarine").unwrap();
    let mut board = Board::new(&config);
    board.place_ship(Coord::new(0, 0), 0, Direction::Horizontal).unwrap();
    board.place_ship(Coord::new(2, 1), 1, Direction::Vertical).unwrap();

    assert_eq!(board.attack(Coord::new(0, 0)).unwrap(), Shot::Hit);
    assert!(!board.all_ships_destroyed());
    assert_eq!(board.attack(Coord::new(0, 1)).unwrap(), Shot::Destroyed(0));
    assert!(!board.all_ships_destroyed());

    assert_eq!(board.attack(Coord::new(2, 1)).unwrap(), Shot::Hit);
    assert_eq!(board.attack(Coord::new(3, 1)).unwrap(), Shot::Hit);
    assert!(!board.all_ships_destroyed());
    assert_eq!(board.attack(Coord::new(4, 1)).unwrap(), Shot::Destroyed(1));
    assert!(board.all_ships_destroyed());
    assert_eq!(board.hits_on(1), Some(3));
}

#[test]
fn test_place_ship_rejections_leave_board_untouched() {
    let mut config = GameConfig::new(4, 4).unwrap();
    config.add_ship(3, 'B', "boat").unwrap();
    config.add_ship(2, 'C', "canoe").unwrap();
    let mut board = Board::new(&config);
    board.place_ship(Coord::new(0, 0), 0, Direction::Horizontal).unwrap();
    let before = board.render(false);

    assert_eq!(
        board.place_ship(Coord::new(1, 1), 0, Direction::Vertical),
        Err(BoardError::AlreadyPlaced(0))
    );
    assert_eq!(
        board.place_ship(Coord::new(4, 0), 1, Direction::Horizontal),
        Err(BoardError::OutOfBounds(Coord::new(4, 0)))
    );
    assert_eq!(
        board.place_ship(Coord::new(3, 3), 1, Direction::Horizontal),
        Err(BoardError::RunOutOfBounds)
    );
    assert_eq!(
        board.place_ship(Coord::new(0, 2), 1, Direction::Vertical),
        Err(BoardError::Occupied(Coord::new(0, 2)))
    );
    assert_eq!(
        board.place_ship(Coord::new(0, 0), 7, Direction::Vertical),
        Err(BoardError::UnknownShip(7))
    );
    assert_eq!(board.render(false), before);
    assert_eq!(board.placed_ships().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_unplace_ship_rejections() {
    let mut config = GameConfig::new(4, 4).unwrap();
    config.add_ship(3, 'B', "boat").unwrap();
    config.add_ship(2, 'C', "canoe").unwrap();
    let mut board = Board::new(&config);

    assert_eq!(
        board.unplace_ship(Coord::new(0, 0), 1, Direction::Horizontal),
        Err(BoardError::WrongOccupant(Coord::new(0, 0), 1))
    );

    board.place_ship(Coord::new(0, 0), 0, Direction::Horizontal).unwrap();
    board.place_ship(Coord::new(1, 0), 1, Direction::Horizontal).unwrap();
    assert_eq!(
        board.unplace_ship(Coord::new(0, 0), 0, Direction::Vertical),
        Err(BoardError::WrongOccupant(Coord::new(1, 0), 0))
    );
    assert_eq!(
        board.unplace_ship(Coord::new(0, 3), 0, Direction::Horizontal),
        Err(BoardError::RunOutOfBounds)
    );

    board.unplace_ship(Coord::new(0, 0), 0, Direction::Horizontal).unwrap();
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Empty));
    assert_eq!(board.hits_on(0), None);
    assert_eq!(board.placed_ships().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_render_hides_ships_for_shots_only() {
    let config = single_ship(2, 3, 2);
    let mut board = Board::new(&config);
    board.place_ship(Coord::new(0, 1), 0, Direction::Horizontal).unwrap();
    board.attack(Coord::new(0, 1)).unwrap();
    board.attack(Coord::new(1, 0)).unwrap();

    assert_eq!(board.render(false), "  012\n0 .XD\n1 o..\n");
    assert_eq!(board.render(true), "  012\n0 .X.\n1 o..\n");
    assert_eq!(board.to_string(), board.render(false));
}

#[test]
fn test_clear_resets_everything() {
    let config = single_ship(3, 3, 2);
    let mut board = Board::new(&config);
    board.place_ship(Coord::new(0, 0), 0, Direction::Vertical).unwrap();
    board.attack(Coord::new(2, 2)).unwrap();
    board.clear();

    assert_eq!(board.placed_ships().count(), 0);
    assert_eq!(board.render(false), "  012\n0 ...\n1 ...\n2 ...\n");
    assert!(board.place_ship(Coord::new(0, 0), 0, Direction::Vertical).is_ok());
}

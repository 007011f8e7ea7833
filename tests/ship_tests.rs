use naval_battle::{BoardError, Ship};

#[test]
fn test_new_rejects_empty_and_repeats() {
    assert_eq!(Ship::new(vec![]).unwrap_err(), BoardError::InvalidShip);
    assert_eq!(
        Ship::new(vec![(0, 0), (0, 1), (0, 0)]).unwrap_err(),
        BoardError::InvalidShip
    );
}

#[test]
fn test_contains_and_positions() -> Result<(), BoardError> {
    let ship = Ship::new(vec![(0, 0), (1, 0), (2, 0)])?;
    assert_eq!(ship.positions(), &[(0, 0), (1, 0), (2, 0)]);
    assert_eq!(ship.len(), 3);
    assert!(ship.contains((1, 0)));
    assert!(!ship.contains((3, 0)));
    Ok(())
}

#[test]
fn test_register_hit_and_destroyed() -> Result<(), BoardError> {
    let mut ship = Ship::new(vec![(1, 1), (1, 2)])?;
    assert!(!ship.is_destroyed());
    assert!(ship.register_hit((1, 2)));
    assert!(!ship.is_destroyed());
    // repeat does not count twice
    assert!(!ship.register_hit((1, 2)));
    assert_eq!(ship.hits().len(), 1);
    // miss
    assert!(!ship.register_hit((0, 0)));
    assert!(ship.register_hit((1, 1)));
    assert!(ship.is_destroyed());
    Ok(())
}

#[test]
fn test_single_cell_ship() {
    let mut ship = Ship::single((4, 2));
    assert_eq!(ship.positions(), &[(4, 2)]);
    assert!(ship.register_hit((4, 2)));
    assert!(ship.is_destroyed());
    assert!(!ship.register_hit((4, 2)));
}

use seabattle::{Coord, ShotError};

#[test]
fn test_checked_constructor() {
    assert_eq!(Coord::new(1, 6, 6), Ok(Coord::unchecked(1, 6)));
    assert_eq!(
        Coord::new(0, 3, 6),
        Err(ShotError::OutOfRange {
            coord: Coord::unchecked(0, 3),
            size: 6
        })
    );
    assert!(Coord::new(7, 3, 6).is_err());
    assert!(Coord::new(3, 7, 6).is_err());
}

#[test]
fn test_equality_is_by_value() {
    assert_eq!(Coord::unchecked(2, 5), Coord::from((2, 5)));
    assert_ne!(Coord::unchecked(2, 5), Coord::unchecked(5, 2));
}

#[test]
fn test_neighbours_in_corner() {
    let mut around: Vec<(usize, usize)> = Coord::unchecked(1, 1).neighbours().map(Into::into).collect();
    around.sort_unstable();
    assert_eq!(around, vec![(1, 2), (2, 1), (2, 2)]);
    assert_eq!(Coord::unchecked(4, 4).neighbours().count(), 8);
}

#[test]
fn test_distance_and_display() {
    let a = Coord::unchecked(2, 2);
    assert_eq!(a.distance(&Coord::unchecked(3, 3)), 1);
    assert_eq!(a.distance(&Coord::unchecked(4, 3)), 2);
    assert_eq!(a.to_string(), "2 2");
}

use flotilla::{CellMask, Coord, MaskError};

type Mask = CellMask<u128, 10>;

#[test]
fn test_set_get_clear() {
    let mut mask = Mask::new();
    assert!(mask.is_empty());
    mask.set(Coord::new(3, 4)).unwrap();
    assert!(mask.get(Coord::new(3, 4)).unwrap());
    assert!(!mask.get(Coord::new(4, 3)).unwrap());
    assert_eq!(mask.count_ones(), 1);
    mask.clear(Coord::new(3, 4)).unwrap();
    assert!(mask.is_empty());
}

#[test]
fn test_out_of_grid_is_an_error() {
    let mask = Mask::new();
    assert_eq!(
        mask.get(Coord::new(10, 0)).unwrap_err(),
        MaskError::OutOfGrid { x: 10, y: 0 }
    );
    assert_eq!(
        mask.get(Coord::new(0, 10)).unwrap_err(),
        MaskError::OutOfGrid { x: 0, y: 10 }
    );
}

#[test]
fn test_from_cells_and_covers() {
    let run: Vec<Coord> = (1..6).map(|x| Coord::new(x, 1)).collect();
    let location = Mask::from_cells(run.iter().copied()).unwrap();
    let partial = Mask::from_cells(run[..3].iter().copied()).unwrap();
    assert!(location.covers(&partial));
    assert!(!partial.covers(&location));
    assert!(location.covers(&location));
}

#[test]
fn test_intersects() {
    let a = Mask::from_cells((0..5).map(|x| Coord::new(x, 0))).unwrap();
    let b = Mask::from_cells((0..5).map(|y| Coord::new(0, y))).unwrap();
    let c = Mask::from_cells((0..5).map(|y| Coord::new(9, y))).unwrap();
    assert!(a.intersects(&b)); // share (0, 0)
    assert!(!a.intersects(&c));
    assert_eq!((a | b).count_ones(), 9);
    assert_eq!((a & b).count_ones(), 1);
}

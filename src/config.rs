use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// The standard fleet, in the order it is normally placed.
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::Carrier,
    ShipClass::Battleship,
    ShipClass::Cruiser,
    ShipClass::Submarine,
    ShipClass::Destroyer,
];

pub type Location = usize;
pub type Time = f64;

/// A directed road with its travel time when driving alone and when carrying a passenger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Road {
    pub from: Location,
    pub to: Location,
    pub solo: Time,
    pub carpool: Time,
}

impl Road {
    pub fn new(from: Location, to: Location, solo: Time, carpool: Time) -> Self {
        Self {
            from,
            to,
            solo,
            carpool,
        }
    }
}

impl From<(Location, Location, Time, Time)> for Road {
    fn from((from, to, solo, carpool): (Location, Location, Time, Time)) -> Self {
        Self::new(from, to, solo, carpool)
    }
}

/// Largest location id mentioned by any road, or `None` for an empty network.
pub fn max_location(roads: &[Road]) -> Option<Location> {
    roads.iter().map(|road| road.from.max(road.to)).max()
}

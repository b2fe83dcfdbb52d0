use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("route map holds {0} places, needs at least 2")]
    TooFewPlaces(usize),
    #[error("colony needs at least one ant")]
    EmptyColony,
    #[error("evaporation rate {0} fell outside [0, 1)")]
    BadEvaporationRate(f64),
    #[error("place #{0:02} is not on the route map")]
    UnknownOrdinal(usize),
    #[error("place {0:?} is not on the route map")]
    UnknownPlace(String),
    #[error("trip departs and arrives at the same place #{0:02}")]
    DegenerateTrip(usize),
    #[error("trip fixes arrival at {0:?} without a departure")]
    UnanchoredArrival(String),
    #[error("cumulative draw {0} matched no candidate interval")]
    DrawOutOfRange(f64),
}

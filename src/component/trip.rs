use rand::Rng;
use rand_chacha::ChaChaRng;
use crate::network::RouteMap;
use crate::utils::error::Error;

/// Endpoint constraints for one optimisation run. A roaming trip draws
/// a fresh departure for every ant; the fixed variants pin the first
/// (and optionally the last) stop of every tour built.
#[derive(Clone, Copy, Debug)]
pub enum Trip {
    Roam,
    From(usize),
    Between(usize, usize),
}

impl Trip {
    pub fn validate(&self, map: &RouteMap) -> Result<(), Error> {
        let count = map.place_count();
        match *self {
            Trip::Roam
                => Ok(()),
            Trip::From(start) if start >= count
                => Err(Error::UnknownOrdinal(start)),
            Trip::From(_)
                => Ok(()),
            Trip::Between(start, _) if start >= count
                => Err(Error::UnknownOrdinal(start)),
            Trip::Between(_, end) if end >= count
                => Err(Error::UnknownOrdinal(end)),
            Trip::Between(start, end) if start == end
                => Err(Error::DegenerateTrip(start)),
            Trip::Between(..)
                => Ok(()),
        }
    }
    /// The departure for one ant. Only a roaming trip consumes a draw
    /// from the stream.
    pub fn depart(&self, count: usize, rng: &mut ChaChaRng) -> usize {
        match *self {
            Trip::Roam => rng.gen_range(0..count),
            Trip::From(start) | Trip::Between(start, _) => start,
        }
    }
    pub fn arrive(&self) -> Option<usize> {
        match *self {
            Trip::Between(_, end) => Some(end),
            _ => None,
        }
    }
}

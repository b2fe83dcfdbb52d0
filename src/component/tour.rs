use itertools::Itertools;
use crate::network::RouteMap;

/// One candidate solution: a permutation of every place on the map.
/// Rebuilt wholesale each generation, never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    stops: Vec<usize>,
}

impl Tour {
    pub fn new(stops: Vec<usize>) -> Self {
        debug_assert!(!stops.is_empty());
        Tour { stops }
    }
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }
    /// Open-path length: consecutive legs only, the closing edge back
    /// to the first stop is not counted.
    pub fn length(&self, map: &RouteMap) -> f64 {
        self.stops.iter().tuple_windows()
            .map(|(&x, &y)| map.distance(x, y))
            .sum()
    }
    /// Whether x and y occupy neighbouring stops, with the tour read as
    /// a cycle: the first and the last stops adjoin each other.
    pub fn adjoins(&self, x: usize, y: usize) -> bool {
        let count = self.stops.len();
        let nth = self.stops.iter()
            .position(|&stop| stop == x)
            .unwrap();
        let succ = self.stops[(nth + 1) % count];
        let pred = self.stops[(nth + count - 1) % count];
        succ == y || pred == y
    }
}

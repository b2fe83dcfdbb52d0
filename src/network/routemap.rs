use hashbrown::HashMap;
use crate::utils::error::Error;

/// A problem instance: labelled places and the symmetric distances
/// between them. The optimisation core works on ordinals 0..n only;
/// labels are translated at this boundary.
#[derive(Clone, Debug, Default)]
pub struct RouteMap {
    places: Vec<String>,
    ordinals: HashMap<String, usize>,
    distances: Vec<Vec<f64>>,
}

impl RouteMap {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn place_count(&self) -> usize {
        self.places.len()
    }
    pub fn add_places(&mut self, places: Vec<String>) {
        for place in places {
            let ordinal = self.places.len();
            self.ordinals.insert(place.clone(), ordinal);
            self.places.push(place);
        }
        let count = self.places.len();
        self.distances.iter_mut()
            .for_each(|row| row.resize(count, 0.0));
        self.distances.resize(count, vec![0.0; count]);
    }
    pub fn add_routes(&mut self, routes: Vec<(String, String, f64)>) {
        for (end0, end1, distance) in routes {
            let x = self.ordinals[end0.as_str()];
            let y = self.ordinals[end1.as_str()];
            debug_assert!(x != y);
            debug_assert!(distance > 0.0);
            self.distances[x][y] = distance;
            self.distances[y][x] = distance;
        }
    }
    pub fn distance(&self, x: usize, y: usize) -> f64 {
        debug_assert!(x < self.places.len());
        debug_assert!(y < self.places.len());
        debug_assert!(x != y);
        self.distances[x][y]
    }
    pub fn place(&self, ordinal: usize) -> &str {
        debug_assert!(ordinal < self.places.len());
        &self.places[ordinal]
    }
    pub fn ordinal(&self, place: &str) -> Result<usize, Error> {
        self.ordinals.get(place).copied()
            .ok_or_else(|| Error::UnknownPlace(place.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> RouteMap {
        let mut map = RouteMap::new();
        map.add_places(vec!["A".to_owned(), "B".to_owned(), "C".to_owned()]);
        map.add_routes(vec![
            ("A".to_owned(), "B".to_owned(), 1.0),
            ("B".to_owned(), "C".to_owned(), 2.0),
            ("A".to_owned(), "C".to_owned(), 3.0),
        ]);
        map
    }

    #[test]
    fn it_indexes_places_in_insertion_order() {
        let map = setup();
        assert_eq!(map.place_count(), 3);
        assert_eq!(map.ordinal("A"), Ok(0));
        assert_eq!(map.ordinal("B"), Ok(1));
        assert_eq!(map.ordinal("C"), Ok(2));
        assert_eq!(map.place(1), "B");
    }

    #[test]
    fn it_mirrors_route_distances() {
        let map = setup();
        assert_eq!(map.distance(0, 1), 1.0);
        assert_eq!(map.distance(1, 0), 1.0);
        assert_eq!(map.distance(0, 2), 3.0);
        assert_eq!(map.distance(2, 0), 3.0);
    }

    #[test]
    fn it_rejects_unknown_places() {
        let map = setup();
        assert_eq!(map.ordinal("Z"), Err(Error::UnknownPlace("Z".to_owned())));
    }
}

use ordered_float::OrderedFloat;
use rand::Rng;
use rand_chacha::ChaChaRng;
use crate::component::{Tour, Trip};
use crate::network::RouteMap;

#[derive(Clone)]
pub struct Ant {
    pub tour: Tour,
}

impl Ant {
    pub fn new(tour: Tour) -> Self {
        Ant { tour }
    }
}

/// One generation of ants. Every ant holds exactly one tour, replaced
/// wholesale on each refresh.
pub struct AntColony {
    pub ants: Vec<Ant>,
}

impl AntColony {
    /// Seeds the colony with anchored random permutations. The
    /// pheromone field takes no part here; it carries no information
    /// before the first reinforcement.
    pub fn seed(count: usize, trip: Trip, map: &RouteMap, rng: &mut ChaChaRng) -> Self {
        let ants = (0..count)
            .map(|_| Ant::new(random_trail(trip, map.place_count(), rng)))
            .collect();
        AntColony { ants }
    }
    /// The shortest tour in the generation; ties fall to the ant met
    /// first.
    pub fn best(&self, map: &RouteMap) -> &Tour {
        self.ants.iter()
            .map(|ant| &ant.tour)
            .min_by_key(|tour| OrderedFloat(tour.length(map)))
            .unwrap()
    }
}

fn random_trail(trip: Trip, count: usize, rng: &mut ChaChaRng) -> Tour {
    let start = trip.depart(count, rng);
    let mut trail: Vec<usize> = (0..count).collect();
    // Fisher-Yates
    for nth in 0..count {
        let swapped = rng.gen_range(nth..count);
        trail.swap(nth, swapped);
    }
    let nth = position_of(&trail, start);
    trail.swap(0, nth);
    if let Some(end) = trip.arrive() {
        let nth = position_of(&trail, end);
        trail.swap(count - 1, nth);
    }
    Tour::new(trail)
}

fn position_of(trail: &[usize], target: usize) -> usize {
    trail.iter()
        .position(|&stop| stop == target)
        .unwrap()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use super::*;

    fn setup() -> RouteMap {
        let mut map = RouteMap::new();
        map.add_places(vec!["A".to_owned(), "B".to_owned(),
                            "C".to_owned(), "D".to_owned()]);
        map.add_routes(vec![
            ("A".to_owned(), "B".to_owned(), 1.0),
            ("A".to_owned(), "C".to_owned(), 2.0),
            ("A".to_owned(), "D".to_owned(), 3.0),
            ("B".to_owned(), "C".to_owned(), 4.0),
            ("B".to_owned(), "D".to_owned(), 5.0),
            ("C".to_owned(), "D".to_owned(), 6.0),
        ]);
        map
    }

    #[test]
    fn it_seeds_anchored_permutations() {
        let map = setup();
        for seed in 0..10 {
            let mut rng = ChaChaRng::seed_from_u64(seed);
            let colony = AntColony::seed(5, Trip::Between(1, 2), &map, &mut rng);
            for ant in &colony.ants {
                let stops = ant.tour.stops();
                assert_eq!(stops.len(), 4);
                assert_eq!(stops[0], 1);
                assert_eq!(stops[3], 2);
                let mut sorted = stops.to_vec();
                sorted.sort_unstable();
                assert_eq!(sorted, vec![0, 1, 2, 3]);
            }
        }
    }

    #[test]
    fn it_picks_the_first_of_tied_bests() {
        let map = setup();
        let colony = AntColony {
            ants: vec![
                Ant::new(Tour::new(vec![0, 1, 2, 3])),  // length 11
                Ant::new(Tour::new(vec![2, 0, 1, 3])),  // length 8
                Ant::new(Tour::new(vec![3, 1, 0, 2])),  // length 8, reversed
            ],
        };
        assert_eq!(colony.best(&map).stops(), &[2, 0, 1, 3]);
    }
}

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use crate::component::{Pheromone, Tour, Trip};
use crate::network::RouteMap;
use crate::utils::config::Parameters;
use crate::utils::error::Error;
use super::base::ants::AntColony;

const MIN_SCORE: f64 = 0.0001;

/// Ant colony optimisation over a route map. Each run seeds a colony
/// with random tours, then spends a fixed number of cycles rebuilding
/// every tour under pheromone guidance and reinforcing the field with
/// the freshly built generation.
pub struct Aco {
    seed: u64,
    parameters: Parameters,
}

impl Aco {
    pub fn new(seed: u64, parameters: Parameters) -> Self {
        Aco { seed, parameters }
    }
    pub fn best_trail(&self, map: &RouteMap) -> Result<Tour, Error> {
        self.optimize(map, Trip::Roam)
    }
    pub fn best_trail_from(&self, map: &RouteMap, start: usize) -> Result<Tour, Error> {
        self.optimize(map, Trip::From(start))
    }
    pub fn best_trail_between(&self, map: &RouteMap, start: usize, end: usize)
        -> Result<Tour, Error> {
        self.optimize(map, Trip::Between(start, end))
    }
    pub fn optimize(&self, map: &RouteMap, trip: Trip) -> Result<Tour, Error> {
        let count = map.place_count();
        if count < 2 {
            return Err(Error::TooFewPlaces(count));
        }
        if self.parameters.ants == 0 {
            return Err(Error::EmptyColony);
        }
        let rho = self.parameters.rho;
        if !(0.0..1.0).contains(&rho) {
            return Err(Error::BadEvaporationRate(rho));
        }
        trip.validate(map)?;

        let mut rng = ChaChaRng::seed_from_u64(self.seed);
        let mut colony = AntColony::seed(self.parameters.ants, trip, map, &mut rng);
        let mut best = colony.best(map).clone();
        let mut best_length = best.length(map);
        let mut pheromone = Pheromone::new(count);

        #[allow(unused_variables)]
        let mut improved = 0;
        for _ in 0..self.parameters.cycles {
            self.march(&mut colony, trip, &pheromone, map, &mut rng)?;
            self.reinforce(&mut pheromone, &colony, map);

            let current = colony.best(map);
            let current_length = current.length(map);
            if current_length < best_length {
                best = current.clone();
                best_length = current_length;
                improved += 1;
            }
        }
        #[cfg(debug_assertions)]
        println!("the colony improved the best trail {} times", improved);
        Ok(best)
    }
    /// Rebuilds every ant's tour against the current pheromone field,
    /// re-drawing the departure under the trip policy.
    fn march(&self, colony: &mut AntColony, trip: Trip, pheromone: &Pheromone,
             map: &RouteMap, rng: &mut ChaChaRng) -> Result<(), Error> {
        let count = map.place_count();
        for ant in colony.ants.iter_mut() {
            let start = trip.depart(count, rng);
            ant.tour = self.build_trail(start, trip.arrive(), pheromone, map, rng)?;
        }
        Ok(())
    }
    fn build_trail(&self, start: usize, end: Option<usize>, pheromone: &Pheromone,
                   map: &RouteMap, rng: &mut ChaChaRng) -> Result<Tour, Error> {
        let count = map.place_count();
        let mut trail = vec![0; count];
        let mut visited = vec![false; count];
        trail[0] = start;
        visited[start] = true;
        let open_slots = match end {
            Some(end) => {
                trail[count - 1] = end;
                visited[end] = true;
                count.saturating_sub(2)
            }
            None => count - 1,
        };
        for slot in 0..open_slots {
            let from = trail[slot];
            let next = self.next_stop(from, &visited, pheromone, map, rng)?;
            trail[slot + 1] = next;
            visited[next] = true;
        }
        Ok(Tour::new(trail))
    }
    fn next_stop(&self, from: usize, visited: &[bool], pheromone: &Pheromone,
                 map: &RouteMap, rng: &mut ChaChaRng) -> Result<usize, Error> {
        let probs = self.move_probs(from, visited, pheromone, map);

        let mut cumul = vec![0.0; probs.len() + 1];
        for (nth, prob) in probs.iter().enumerate() {
            cumul[nth + 1] = cumul[nth] + prob;
        }

        let draw = rng.gen_range(0.0..1.0);
        for nth in 0..cumul.len() - 1 {
            if draw >= cumul[nth] && draw < cumul[nth + 1] {
                return Ok(nth);
            }
        }
        Err(Error::DrawOutOfRange(draw))
    }
    /// Desirability-weighted probabilities of moving from `from` to
    /// every place. Self and visited places weigh exactly zero; live
    /// scores are clamped away from underflow and from overflowing the
    /// sum.
    fn move_probs(&self, from: usize, visited: &[bool], pheromone: &Pheromone,
                  map: &RouteMap) -> Vec<f64> {
        let count = map.place_count();
        let ceiling = f64::MAX / (count * 100) as f64;
        let mut taueta = vec![0.0; count];
        for to in 0..count {
            if to == from || visited[to] {
                continue;
            }
            let tau = pheromone.get(from, to).powf(self.parameters.alpha);
            let eta = (1.0 / map.distance(from, to)).powf(self.parameters.beta);
            taueta[to] = num::clamp(tau * eta, MIN_SCORE, ceiling);
        }
        let sum: f64 = taueta.iter().sum();
        taueta.iter()
            .map(|score| score / sum)
            .collect()
    }
    /// Evaporation and deposits in one pass. Deposits accumulate ant by
    /// ant onto the same pair, each ant reading the value the previous
    /// ant just wrote through the clamping `set`; the x < y < ant loop
    /// order is part of the algorithm's behaviour and must stay as is.
    fn reinforce(&self, pheromone: &mut Pheromone, colony: &AntColony, map: &RouteMap) {
        let rho = self.parameters.rho;
        let q = self.parameters.q;
        let lengths: Vec<f64> = colony.ants.iter()
            .map(|ant| ant.tour.length(map))
            .collect();
        for x in 0..pheromone.size() {
            for y in x + 1..pheromone.size() {
                for (ant, &length) in colony.ants.iter().zip(&lengths) {
                    let decrease = (1.0 - rho) * pheromone.get(x, y);
                    let increase = match ant.tour.adjoins(x, y) {
                        true  => q / length,
                        false => 0.0,
                    };
                    pheromone.set(x, y, decrease + increase);
                }
            }
        }
    }
}

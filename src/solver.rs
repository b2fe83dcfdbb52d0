use crate::algorithm::Aco;
use crate::component::{Tour, Trip};
use crate::network::RouteMap;
use crate::utils::config::Config;
use crate::utils::error::Error;
use std::fmt::Write;
use std::time::Instant;


pub struct Solver {
    pub algorithm: Aco,
    pub routemap: RouteMap,
}

/// A finished plan, translated back into place labels.
#[derive(Clone, Debug)]
pub struct Itinerary {
    pub stops: Vec<String>,
    pub length: f64,
}


impl Solver {
    pub fn new(routemap: RouteMap, config: Config) -> Self {
        let algorithm = Aco::new(config.seed, config.parameters);
        Solver { algorithm, routemap }
    }
    pub fn plan(&self, from: Option<&str>, to: Option<&str>) -> Result<Itinerary, Error> {
        let trip = self.trip(from, to)?;

        let start = Instant::now();
        let tour = self.algorithm.optimize(&self.routemap, trip)?;
        let elapsed = start.elapsed().as_micros();

        let itinerary = self.itinerary(tour);
        self.show_results(&itinerary, elapsed);
        Ok(itinerary)
    }
    fn trip(&self, from: Option<&str>, to: Option<&str>) -> Result<Trip, Error> {
        match (from, to) {
            (None, None)
                => Ok(Trip::Roam),
            (Some(from), None)
                => Ok(Trip::From(self.routemap.ordinal(from)?)),
            (Some(from), Some(to)) => {
                let start = self.routemap.ordinal(from)?;
                let end = self.routemap.ordinal(to)?;
                Ok(Trip::Between(start, end))
            }
            (None, Some(to))
                => Err(Error::UnanchoredArrival(to.to_owned())),
        }
    }
    fn itinerary(&self, tour: Tour) -> Itinerary {
        let length = tour.length(&self.routemap);
        let stops = tour.stops().iter()
            .map(|&stop| self.routemap.place(stop).to_owned())
            .collect();
        Itinerary { stops, length }
    }
    fn show_results(&self, itinerary: &Itinerary, elapsed: u128) {
        let mut msg = String::new();
        writeln!(msg, "the best trail found").unwrap();
        for (nth, stop) in itinerary.stops.iter().enumerate() {
            writeln!(msg, "- stop #{:02} {}", nth, stop).unwrap();
        }
        writeln!(msg, "the trail has length {:.1}", itinerary.length).unwrap();
        writeln!(msg, "--- computing time: {} μs ---", elapsed).unwrap();
        print!("{}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::Parameters;
    use crate::utils::yaml;

    fn setup() -> Solver {
        let routemap = yaml::load_routes("data/routes/quad.yaml");
        let config = Config {
            name: "test".to_owned(),
            seed: 42,
            parameters: Parameters { ants: 10, cycles: 100, ..Parameters::default() },
        };
        Solver::new(routemap, config)
    }

    #[test]
    fn it_plans_labelled_itineraries() {
        let solver = setup();
        let itinerary = solver.plan(None, None).unwrap();
        let mut stops = itinerary.stops.clone();
        stops.sort_unstable();
        assert_eq!(stops, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn it_pins_labelled_endpoints() {
        let solver = setup();
        let itinerary = solver.plan(Some("A"), Some("D")).unwrap();
        assert_eq!(itinerary.stops.first().map(String::as_str), Some("A"));
        assert_eq!(itinerary.stops.last().map(String::as_str), Some("D"));
    }

    #[test]
    fn it_rejects_arrivals_without_departure() {
        let solver = setup();
        let planned = solver.plan(None, Some("D"));
        assert!(matches!(planned, Err(Error::UnanchoredArrival(_))));
    }

    #[test]
    fn it_rejects_places_off_the_map() {
        let solver = setup();
        let planned = solver.plan(Some("Z"), None);
        assert!(matches!(planned, Err(Error::UnknownPlace(_))));
    }
}

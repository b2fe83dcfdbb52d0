use formica::solver::Solver;
use formica::utils::error::Error;
use formica::utils::yaml;

fn setup() -> Solver {
    let routemap = yaml::load_routes("data/routes/pentagon.yaml");
    let config = yaml::load_config("data/config/default.yaml");
    Solver::new(routemap, config)
}

#[test]
fn it_plans_roaming_trips() {
    let solver = setup();
    let itinerary = solver.plan(None, None).unwrap();

    let mut stops = itinerary.stops.clone();
    stops.sort_unstable();
    assert_eq!(stops, vec!["hsinchu", "kaohsiung", "taichung", "tainan", "taipei"]);
    assert!(itinerary.length > 0.0);
}

#[test]
fn it_plans_trips_from_a_fixed_place() {
    let solver = setup();
    let itinerary = solver.plan(Some("taichung"), None).unwrap();

    assert_eq!(itinerary.stops.first().map(String::as_str), Some("taichung"));
    assert_eq!(itinerary.stops.len(), 5);
}

#[test]
fn it_plans_trips_between_fixed_places() {
    let solver = setup();
    let itinerary = solver.plan(Some("taipei"), Some("kaohsiung")).unwrap();

    assert_eq!(itinerary.stops.first().map(String::as_str), Some("taipei"));
    assert_eq!(itinerary.stops.last().map(String::as_str), Some("kaohsiung"));
    assert_eq!(itinerary.stops.len(), 5);
}

#[test]
fn it_rejects_places_off_the_map() {
    let solver = setup();
    let planned = solver.plan(Some("gotham"), None);

    assert_eq!(planned.unwrap_err(), Error::UnknownPlace("gotham".to_owned()));
}

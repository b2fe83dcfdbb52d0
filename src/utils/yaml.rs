use std::fs;

use serde::Deserialize;

use super::config::Config;
use crate::network::RouteMap;

#[derive(Deserialize)]
struct RoutesYaml {
    scale: RoutesScaleYaml,
    places: Vec<String>,
    routes: Vec<RouteYaml>,
}

#[derive(Deserialize)]
struct RoutesScaleYaml {
    places: usize,
    routes: usize,
}

#[derive(Deserialize)]
struct RouteYaml {
    ends: [String; 2],
    distance: f64,
}

pub fn load_routes(path: &str) -> RouteMap {
    let text = fs::read_to_string(path)
        .expect("Failed to read routes yaml file");
    let yaml: RoutesYaml = serde_yaml::from_str(&text)
        .expect("Failed to parse routes yaml file");
    debug_assert_eq!(yaml.scale.places, yaml.places.len());
    debug_assert_eq!(yaml.scale.routes, yaml.routes.len());
    debug_assert_eq!(yaml.scale.routes, complete_routes(&yaml));
    let mut routemap = RouteMap::default();
    routemap.add_places(yaml.places);
    routemap.add_routes(flatten(yaml.routes));
    routemap
}

pub fn load_config(path: &str) -> Config {
    let text = fs::read_to_string(path)
        .expect("Failed to read config yaml file");
    #[allow(clippy::let_and_return)]
    let yaml = serde_yaml::from_str(&text)
        .expect("Failed to parse config yaml file");
    yaml
}

fn complete_routes(yaml: &RoutesYaml) -> usize {
    // a route map specifies every unordered pair exactly once
    let places = yaml.places.len();
    places * (places - 1) / 2
}

fn flatten(routes: Vec<RouteYaml>) -> Vec<(String, String, f64)> {
    routes.into_iter()
        .map(|route| {
            let [end0, end1] = route.ends;
            (end0, end1, route.distance)
        })
        .collect()
}

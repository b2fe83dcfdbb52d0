mod pheromone;
mod tour;
mod trip;

pub use pheromone::Pheromone;
pub use tour::Tour;
pub use trip::Trip;

mod aco;
mod base;

pub use aco::Aco;

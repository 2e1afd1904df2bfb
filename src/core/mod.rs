pub mod generator;

pub use generator::AdventureGenerator;

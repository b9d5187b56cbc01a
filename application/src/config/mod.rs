//! Application configuration

pub mod params;

pub use params::ConvergenceParams;

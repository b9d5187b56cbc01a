//! Application use cases

pub mod converge;

pub use converge::{ConvergeInput, ConvergeUseCase};

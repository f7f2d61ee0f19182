pub mod comparison;
pub mod grid;

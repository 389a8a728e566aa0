pub mod grid;
pub mod input;
pub mod point;

pub use grid::{DenseGrid, HasEmpty};
pub use input::read_input;
pub use point::Point;

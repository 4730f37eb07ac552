pub mod codec;
pub mod config;
pub mod driver;
pub mod frames;
pub mod grid;
pub mod rules;
pub mod step;

pub use grid::Grid;
pub use grid::GridError;
pub use step::advance;
pub use step::step;

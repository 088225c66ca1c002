pub mod bento_grid;
pub mod deep_dive;

pub use bento_grid::BentoGrid;
pub use deep_dive::DeepDive;

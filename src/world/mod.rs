pub mod builder;
pub mod placement;

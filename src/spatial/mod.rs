pub mod cube;
pub mod orientation;

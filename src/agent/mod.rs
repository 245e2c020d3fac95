pub mod memory;
pub mod robot;

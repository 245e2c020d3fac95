pub mod driver;
pub mod monsters;
pub mod output;
pub mod rules;
pub mod snapshot;

pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod portfolio;
pub mod routing;
#[cfg(test)]
pub mod test_helpers;

pub use error::JournalError;

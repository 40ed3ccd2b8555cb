#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate store_test;

pub mod config;
pub mod console;
pub mod error;
pub mod model;
pub mod store;

pub use config::Config;

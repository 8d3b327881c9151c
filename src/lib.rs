// Library exports for the binary and integration tests

pub mod api;
pub mod app_data;
pub mod cli;
pub mod config;
pub mod errors;
pub mod pdf;
pub mod seed;
pub mod services;
pub mod stores;
pub mod types;

#[cfg(test)]
pub mod test;

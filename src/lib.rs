pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod payload;
pub mod routing;
pub mod sample;
pub mod utils;

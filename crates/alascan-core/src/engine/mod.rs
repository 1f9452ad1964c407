pub mod aggregate;
pub mod colour;
pub mod config;
pub mod error;
pub mod progress;
pub mod statistics;

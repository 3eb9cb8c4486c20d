pub mod config;
pub mod error;
pub mod routes;
pub mod schedule;
pub mod state;
pub mod sync;
pub mod tips;
pub mod types;

//! Library exports for the CI/CD demo app, shared between the binary and tests.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod startup;
pub mod state;
pub mod utils;

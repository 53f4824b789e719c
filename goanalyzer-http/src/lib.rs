//! goanalyzer HTTP front end
//!
//! Serves the analysis form at `/` and a JSON API under `/api/v1`.

pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod routes;
pub mod server;

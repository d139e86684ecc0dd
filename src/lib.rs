//! Mock weather service: a record generator, the http api serving it, and a
//! small client for that api.

pub mod app;
pub mod client;
pub mod error;
pub mod models;
pub mod provider;
pub mod render;
pub mod routes;
pub mod weather;

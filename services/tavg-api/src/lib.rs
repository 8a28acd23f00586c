//! Temperature API Service Library
//!
//! HTTP boundary for the monthly average temperature sampler.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod routes;
pub mod state;

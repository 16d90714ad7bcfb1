//! HTTP service surface.
//!
//! The pipeline core is transport-agnostic; this module is the boundary
//! collaborator: route registration, CORS, and the mapping of prediction
//! failures onto transport status codes.

pub mod config;
pub mod service;

pub use service::{AppState, router};

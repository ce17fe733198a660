//! Backend services.
//!
//! - [`api`] - Table and chart requests to the medlist backend

pub mod api;

pub use api::*;

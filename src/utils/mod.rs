//! Utility functions and helper modules.
//!
//! This module contains helpers for extracting request information
//! used by logging and metrics.

pub mod http;
pub mod route;

pub use http::*;
pub use route::*;

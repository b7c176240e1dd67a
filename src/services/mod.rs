//! Business logic and service layer modules.
//!
//! This module contains the OpenWeatherMap client, the weather lookup
//! orchestration built on it, and metrics collection.

pub mod metrics;
pub mod openweather;
pub mod weather;

pub use metrics::*;
pub use openweather::*;
pub use weather::*;

//! Data models for the Clima API.
//!
//! This module contains the request/response models exposed by the service
//! and the OpenWeatherMap payloads it consumes.

pub mod api;
pub mod openweather;

pub use api::*;
pub use openweather::*;

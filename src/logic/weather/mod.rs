//! Weather adapter - named location to feature record

pub mod adapter;
pub mod client;
pub mod locations;

pub use adapter::{WeatherAdapter, TEMP_RANGE_DEFAULT};
pub use client::{FetchError, WeatherClient, WeatherObservation};
pub use locations::{Location, KNOWN_LOCATIONS};

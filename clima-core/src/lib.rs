//! Core library for the `clima` CLI.
//!
//! This crate defines:
//! - An injectable HTTP transport abstraction
//! - The OpenWeather current-conditions lookup
//! - A client for the public random-joke API
//! - Shared domain models and error types
//!
//! It is used by `clima-cli`, but can also be reused by other binaries or services.

pub mod error;
pub mod joke;
pub mod model;
pub mod openweather;
pub mod transport;

pub use error::{LookupError, TransportError};
pub use joke::{Joke, JokeClient};
pub use model::WeatherReport;
pub use openweather::WeatherLookup;
pub use transport::{HttpTransport, RawResponse, Transport};

//! Client for the fixer.io currency exchange rate API.

pub mod api;
pub mod error;
pub mod models;
pub mod utils;

#[cfg(test)]
mod test;

pub use api::{Exchange, RateMap, RatesResponse, ReqwestTransport, Transport, TransportError};
pub use error::{FixerError, Result};
pub use models::{Protocol, Query};

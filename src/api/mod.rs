pub mod exchange;
pub mod fixer_dto;
pub mod transport;
pub mod utils;

pub use exchange::Exchange;
pub use fixer_dto::{RateMap, RatesResponse};
pub use transport::{ReqwestTransport, Transport, TransportError};

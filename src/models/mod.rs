pub mod protocol;
pub mod query;

pub use protocol::Protocol;
pub use query::{DEFAULT_BASE, DEFAULT_HOST, Query};

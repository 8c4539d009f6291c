pub mod csv;
pub mod warehouse;

pub use csv::{LoadError, ParseError};
pub use warehouse::{CreateError, ProcessOutcome, QueuedOrder, UNKNOWN_ITEM, Warehouse};

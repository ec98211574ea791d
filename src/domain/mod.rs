//! Domain types for order numbering
//!
//! Follows type-driven design: values that passed validation get their own
//! type, and everything the clock or RNG touches goes through an injected
//! capability so behavior is reproducible in tests.

pub mod generator;
pub mod order;
pub mod order_number;

pub use generator::{Clock, OrderNumberGenerator, SystemClock};
pub use order::{OrderId, OrderSummary};
pub use order_number::{OrderNumber, OrderNumberParts};

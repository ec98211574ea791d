//! Persistence seam for the numbering subsystem
//!
//! The migration deliberately knows nothing about the wider order schema;
//! it depends on exactly these operations and nothing else.

use crate::domain::{OrderId, OrderNumber, OrderSummary};
use crate::Result;
use async_trait::async_trait;

/// Order persistence operations the numbering subsystem depends on
#[async_trait]
pub trait OrderStore {
    /// Count every order on record
    async fn count_orders(&self) -> Result<u64>;

    /// Count orders whose number field is absent or empty
    async fn count_unnumbered(&self) -> Result<u64>;

    /// Fetch `{id, order_number, created_at}` for every order, oldest first
    async fn fetch_order_summaries(&self) -> Result<Vec<OrderSummary>>;

    /// Write a number onto the order with the given id
    async fn assign_order_number(&self, id: OrderId, number: &OrderNumber) -> Result<()>;

    /// Verify the backing store is reachable
    async fn health_check(&self) -> Result<()>;
}

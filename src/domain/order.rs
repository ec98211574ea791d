//! Order records as seen by the numbering subsystem
//!
//! The full order row (customer contact, totals, status, WhatsApp message)
//! belongs to the storefront; this crate only ever reads the three columns
//! the numbering scheme cares about.

use chrono::{DateTime, Utc};
use nutype::nutype;

/// Database identifier of an order row
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    AsRef
))]
pub struct OrderId(i64);

/// The projection of an order the migration works over
///
/// `order_number` stays a raw optional string here: historical rows may
/// hold nothing at all or a value from before the current scheme, so it
/// cannot be a validated [`OrderNumber`](crate::domain::OrderNumber).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub order_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_display_matches_inner_value() {
        let id = OrderId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_order_ids_are_ordered() {
        assert!(OrderId::new(1) < OrderId::new(2));
    }
}

//! In-memory order store
//!
//! Backs the migration tests and local experiments. Failure injection
//! mirrors what the Postgres store can do to the migration: a per-record
//! write failure, a fetch failure, or failing counts.

use crate::application::order_store::OrderStore;
use crate::domain::{OrderId, OrderNumber, OrderSummary};
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// An [`OrderStore`] held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<Mutex<Vec<OrderSummary>>>,
    failing_assigns: Arc<Mutex<HashSet<OrderId>>>,
    fail_fetch: Arc<AtomicBool>,
    fail_counts: Arc<AtomicBool>,
}

impl InMemoryOrderStore {
    /// Store preloaded with the given orders
    pub fn seeded(orders: Vec<OrderSummary>) -> Self {
        let store = Self::default();
        *store.orders.lock().unwrap_or_else(|e| e.into_inner()) = orders;
        store
    }

    /// Make every write to the given order fail
    pub fn fail_assign_for(&self, id: OrderId) {
        self.failing_assigns
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id);
    }

    /// Make the next and all subsequent fetches fail
    pub fn fail_fetch(&self) {
        self.fail_fetch.store(true, Ordering::SeqCst);
    }

    /// Make the count operations fail
    pub fn fail_counts(&self) {
        self.fail_counts.store(true, Ordering::SeqCst);
    }

    /// Current number of the given order, if any
    pub fn order_number(&self, id: OrderId) -> Option<String> {
        self.orders
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|order| order.id == id)
            .and_then(|order| order.order_number.clone())
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn count_orders(&self) -> Result<u64> {
        if self.fail_counts.load(Ordering::SeqCst) {
            return Err(Error::application("count unavailable"));
        }
        let orders = self.orders.lock().unwrap_or_else(|e| e.into_inner());
        Ok(orders.len() as u64)
    }

    async fn count_unnumbered(&self) -> Result<u64> {
        if self.fail_counts.load(Ordering::SeqCst) {
            return Err(Error::application("count unavailable"));
        }
        let orders = self.orders.lock().unwrap_or_else(|e| e.into_inner());
        let unnumbered = orders
            .iter()
            .filter(|order| order.order_number.as_deref().is_none_or(str::is_empty))
            .count();
        Ok(unnumbered as u64)
    }

    async fn fetch_order_summaries(&self) -> Result<Vec<OrderSummary>> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(Error::application("orders unavailable"));
        }
        let mut orders = self
            .orders
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        orders.sort_by_key(|order| order.created_at);
        Ok(orders)
    }

    async fn assign_order_number(&self, id: OrderId, number: &OrderNumber) -> Result<()> {
        if self
            .failing_assigns
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&id)
        {
            return Err(Error::application(format!("write rejected for order {id}")));
        }

        let mut orders = self.orders.lock().unwrap_or_else(|e| e.into_inner());
        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| Error::not_found(format!("order {id}")))?;
        order.order_number = Some(number.as_ref().to_string());
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

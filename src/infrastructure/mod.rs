//! Storage backends for the order store seam

pub mod memory;
pub mod postgres;

pub use memory::InMemoryOrderStore;
pub use postgres::PostgresOrderStore;

//! Application layer: migration orchestration and service bootstrap

pub mod app;
pub mod migration;
pub mod order_store;

pub use app::Application;
pub use migration::{MigrationFailure, MigrationReport, MigrationStatus, OrderNumberMigration};
pub use order_store::OrderStore;

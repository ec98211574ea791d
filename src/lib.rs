//! Beleya Orders - order numbering backend for the BeleyaShop storefront
//!
//! Generates the human-facing `GN905EG` order numbers used at checkout,
//! backfills them onto historical orders, and exposes a small admin API for
//! the back-office console to check and trigger that migration.

pub mod admin;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Application;
pub use error::{Error, Result};

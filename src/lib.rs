//! Oversell-safe concert ticket ordering pipeline.
//!
//! # Modules
//!
//! - [`settings`] - Configuration loading (YAML + env overrides)
//! - [`domain`] - Category and order types, seat cursor logic
//! - [`store`] - Durable Postgres-backed state (C1)
//! - [`cache`] - Redis admission cache (C2)
//! - [`queue`] - Durable work queue over NATS JetStream (C3)
//! - [`admission`] - HTTP admission service (C4)
//! - [`aggregator`] - Inventory reconciliation aggregator (C5)
//! - [`assigner`] - Seat assignment consumers (C6)
//! - [`reaper`] - Expiry reaper (C7)
//! - [`snapshot`] - Lock-free category snapshot (C8)
//! - [`email`] - Outbound notification stub

// Core types - must be first!
pub mod core_types;

// Configuration
pub mod config;

// Trading components kept as teacher reference (balance/account primitives
// reused by the ticketing cache and store layers)
pub mod balance;
pub mod models;
pub mod perf;
pub mod user_account;

// --- Concert ticket ordering pipeline ---
pub mod admission;
pub mod aggregator;
pub mod assigner;
pub mod cache;
pub mod domain;
pub mod email;
pub mod error;
pub mod logging;
pub mod queue;
pub mod reaper;
pub mod settings;
pub mod snapshot;
pub mod store;

// Convenient re-exports at crate root
pub use balance::Balance;
pub use config::TradingConfig;
pub use core_types::{AssetId, OrderId, SeqNum, TradeId, UserId};
pub use models::{Order, Side};
pub use user_account::UserAccount;

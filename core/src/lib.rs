//! kirana-core — purchase-pattern analytics for a grocery storefront.
//!
//! The core is a set of pure computations over one store's full order
//! history:
//!   1. predictor        — replenishment-interval forecasts per (customer, product)
//!   2. sales_history    — daily/weekly/monthly revenue series
//!   3. customer_lookup  — search and per-customer purchase profiles
//!   4. store_stats      — headline dashboard numbers
//!
//! RULES:
//!   - Analytics functions perform no I/O. They are handed an
//!     already-materialized order list and compute from memory.
//!   - "Today" is captured once per run via AnalyticsClock, never re-read.
//!   - Malformed rows are skipped, never fatal. Empty input gives empty output.

pub mod clock;
pub mod config;
pub mod customer_lookup;
pub mod engine;
pub mod error;
pub mod order;
pub mod predictor;
pub mod purchase_history;
pub mod sales_history;
pub mod store;
pub mod store_stats;
pub mod types;

//! The analytics engine — the one entry point a presentation layer talks to.
//!
//! RULES:
//!   - The engine performs no I/O. It is handed a fully fetched order list.
//!   - "Today" is captured once at construction, never re-read mid-run.
//!   - Every method is a pure computation: same orders, same clock, same
//!     output. Concurrent engines over the same data share nothing.

use crate::{
    clock::AnalyticsClock,
    config::AnalyticsConfig,
    customer_lookup::{self, CustomerHistory, CustomerMatch},
    order::Order,
    predictor::{self, Prediction},
    sales_history::{self, SalesHistory},
    store_stats::{self, StoreStats},
    types::ProductName,
};

pub struct AnalyticsEngine {
    config: AnalyticsConfig,
    clock: AnalyticsClock,
}

impl AnalyticsEngine {
    pub fn new(config: AnalyticsConfig, clock: AnalyticsClock) -> Self {
        Self { config, clock }
    }

    /// Default config, wall-clock date captured now.
    pub fn with_system_clock() -> Self {
        Self::new(AnalyticsConfig::default(), AnalyticsClock::system())
    }

    pub fn clock(&self) -> &AnalyticsClock {
        &self.clock
    }

    /// Near-term replenishment forecasts, most overdue first.
    pub fn predict_upcoming_purchases(&self, orders: &[Order]) -> Vec<Prediction> {
        predictor::predict_upcoming_purchases(orders, &self.clock, &self.config.prediction)
    }

    /// Daily/weekly/monthly revenue series for the history chart.
    pub fn sales_history(&self, orders: &[Order]) -> SalesHistory {
        sales_history::aggregate_sales_history(orders, &self.config.history)
    }

    /// Distinct customers whose name or phone contains `query`.
    pub fn search_customers(&self, orders: &[Order], query: &str) -> Vec<CustomerMatch> {
        customer_lookup::search_customers(orders, query, &self.config.search)
    }

    /// One customer's orders plus their likely next purchases.
    pub fn customer_history(&self, orders: &[Order], phone: &str) -> CustomerHistory {
        customer_lookup::customer_history(orders, phone)
    }

    /// Just the likely-next product names for one customer.
    pub fn customer_predictions(&self, orders: &[Order], phone: &str) -> Vec<ProductName> {
        customer_lookup::customer_history(orders, phone).likely_next
    }

    /// Headline dashboard numbers.
    pub fn store_stats(&self, orders: &[Order]) -> StoreStats {
        store_stats::store_stats(orders)
    }
}

//! Store stats — the headline numbers at the top of the dashboard.

use crate::{order::Order, types::ProductName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Best-seller list length.
pub const TOP_PRODUCTS: usize = 5;
/// Recent-order log length.
pub const RECENT_ORDERS: usize = 10;

/// Units sold for one product, across all orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub name: ProductName,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total_orders: usize,
    pub total_revenue: f64,
    /// Top sellers by units sold, name as tie-break.
    pub top_products: Vec<ProductSales>,
    /// Latest orders, newest first. Orders without timestamps sort last.
    pub recent_orders: Vec<Order>,
}

/// Headline numbers over the full order list. Every order counts toward the
/// totals, timestamp or not — recency only affects the recent-order log.
pub fn store_stats(orders: &[Order]) -> StoreStats {
    let total_orders = orders.len();
    let total_revenue = orders.iter().map(|o| o.total).sum();

    let mut units: HashMap<ProductName, u64> = HashMap::new();
    for order in orders {
        for item in &order.items {
            if item.product_name.is_empty() {
                continue;
            }
            *units.entry(item.product_name.clone()).or_default() += u64::from(item.quantity);
        }
    }
    let mut top_products: Vec<ProductSales> = units
        .into_iter()
        .map(|(name, count)| ProductSales { name, count })
        .collect();
    top_products.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    top_products.truncate(TOP_PRODUCTS);

    let mut recent_orders: Vec<Order> = orders.to_vec();
    recent_orders.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    recent_orders.truncate(RECENT_ORDERS);

    StoreStats {
        total_orders,
        total_revenue,
        top_products,
        recent_orders,
    }
}

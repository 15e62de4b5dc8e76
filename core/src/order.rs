//! Order records — the single input every analytics component consumes.
//!
//! Field names serialize as camelCase to match the storefront's existing
//! data contract; aliases accept the legacy export spelling (`customer`,
//! `name`, `price`, `date`).

use crate::types::{OrderId, Phone, ProductName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of an order. Quantity defaults to 1 for legacy rows that
/// omitted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(alias = "name")]
    pub product_name: ProductName,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(alias = "price", default)]
    pub unit_price: f64,
}

fn default_quantity() -> u32 {
    1
}

/// Order lifecycle tag. Analytics never filters on it — every order counts
/// toward purchase history regardless of status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Verified,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Verified => "Verified",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse a stored status tag. Unknown tags fall back to Pending rather
    /// than failing the row.
    pub fn parse(s: &str) -> Self {
        match s {
            "Verified" => OrderStatus::Verified,
            "Delivered" => OrderStatus::Delivered,
            "Cancelled" => OrderStatus::Cancelled,
            "Pending" => OrderStatus::Pending,
            other => {
                log::warn!("unknown order status '{other}', treating as Pending");
                OrderStatus::Pending
            }
        }
    }
}

/// An order, immutable once created (status updates aside).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: OrderId,
    #[serde(alias = "customer", default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone: Phone,
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Sum of item subtotals. Not re-validated by the core.
    #[serde(default)]
    pub total: f64,
    /// Primary order date. May be absent in legacy rows.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Record creation time — the fallback when `date` is absent.
    #[serde(alias = "created_at", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: OrderStatus,
}

impl Order {
    /// Effective timestamp: the order date, falling back to the creation
    /// time. `None` means the row carries no usable date at all; such rows
    /// are skipped by every time-based computation.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.date.or(self.created_at)
    }
}

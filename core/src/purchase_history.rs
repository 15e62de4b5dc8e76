//! Purchase history extraction — per-customer, per-product purchase
//! date sequences.
//!
//! RULES:
//!   - Built fresh on every prediction run, never persisted.
//!   - Groups keep first-seen order; timestamps within a group are stably
//!     sorted ascending, so ties keep the original fetch order.
//!   - Display name per phone is last-write-wins in scan order: the most
//!     recently scanned order's spelling is the one shown.

use crate::order::Order;
use crate::types::{Phone, ProductName};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// One (customer, product) purchase sequence.
#[derive(Debug, Clone)]
pub struct PurchaseGroup {
    pub phone: Phone,
    pub product_name: ProductName,
    /// Order timestamps, ascending.
    pub timestamps: Vec<DateTime<Utc>>,
}

/// All purchase sequences for one store, in first-seen group order.
#[derive(Debug, Default)]
pub struct PurchaseHistory {
    groups: Vec<PurchaseGroup>,
    index: HashMap<(Phone, ProductName), usize>,
    names: HashMap<Phone, String>,
}

impl PurchaseHistory {
    /// Scan the raw order list. Orders without a usable timestamp or with an
    /// empty phone are skipped; the rest of the scan proceeds.
    pub fn build(orders: &[Order]) -> Self {
        let mut history = Self::default();
        let mut skipped = 0usize;

        for order in orders {
            let Some(ts) = order.timestamp() else {
                skipped += 1;
                continue;
            };
            if order.phone.is_empty() {
                skipped += 1;
                continue;
            }

            history
                .names
                .insert(order.phone.clone(), order.customer_name.clone());

            for item in &order.items {
                if item.product_name.is_empty() {
                    continue;
                }
                let key = (order.phone.clone(), item.product_name.clone());
                let idx = match history.index.get(&key) {
                    Some(&i) => i,
                    None => {
                        history.groups.push(PurchaseGroup {
                            phone: order.phone.clone(),
                            product_name: item.product_name.clone(),
                            timestamps: Vec::new(),
                        });
                        let i = history.groups.len() - 1;
                        history.index.insert(key, i);
                        i
                    }
                };
                history.groups[idx].timestamps.push(ts);
            }
        }

        for group in &mut history.groups {
            // Stable sort: equal timestamps keep fetch order.
            group.timestamps.sort();
        }

        if skipped > 0 {
            log::warn!("purchase history: skipped {skipped} orders with no timestamp or phone");
        }
        history
    }

    pub fn groups(&self) -> &[PurchaseGroup] {
        &self.groups
    }

    /// Display name recorded for a phone, if any scanned order carried one.
    pub fn display_name(&self, phone: &str) -> Option<&str> {
        self.names.get(phone).map(String::as_str)
    }
}

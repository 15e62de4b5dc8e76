//! Customer lookup — free-text search and per-customer purchase profiles.
//!
//! Search deduplicates by phone: the most recently ordering match wins and
//! supplies the display name. The per-customer "likely next items" list is
//! deliberately simpler than the interval predictor — a repeat-purchase
//! count with no date math at all.

use crate::{
    config::SearchConfig,
    order::Order,
    types::{Phone, ProductName},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One distinct customer matching a search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerMatch {
    pub customer_name: String,
    pub phone: Phone,
}

/// A customer's full order history plus their likely next purchases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerHistory {
    /// The customer's orders, newest first.
    pub orders: Vec<Order>,
    /// Products bought more than once, by descending purchase count then
    /// name — the repeat staples surface first. No date computation here.
    pub likely_next: Vec<ProductName>,
}

/// Case-insensitive substring search over customer name and phone.
///
/// Returns up to `max_results` distinct customers. A blank query matches
/// nothing. Results are ordered by last-order time descending with phone as
/// tie-break, so the most recently active customers surface first.
pub fn search_customers(
    orders: &[Order],
    query: &str,
    config: &SearchConfig,
) -> Vec<CustomerMatch> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    // phone -> (display name, latest matching order time). A later scan at
    // the same timestamp wins, so the most recent spelling is kept.
    let mut latest: HashMap<Phone, (String, Option<DateTime<Utc>>)> = HashMap::new();

    for order in orders {
        if order.phone.is_empty() {
            continue;
        }
        let name_hit = order.customer_name.to_lowercase().contains(&needle);
        let phone_hit = order.phone.to_lowercase().contains(&needle);
        if !name_hit && !phone_hit {
            continue;
        }

        let ts = order.timestamp();
        match latest.get(&order.phone) {
            Some((_, seen)) if *seen > ts => {}
            _ => {
                latest.insert(order.phone.clone(), (order.customer_name.clone(), ts));
            }
        }
    }

    let mut matches: Vec<(Phone, String, Option<DateTime<Utc>>)> = latest
        .into_iter()
        .map(|(phone, (name, ts))| (phone, name, ts))
        .collect();
    matches.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));
    matches.truncate(config.max_results);

    matches
        .into_iter()
        .map(|(phone, customer_name, _)| CustomerMatch {
            customer_name,
            phone,
        })
        .collect()
}

/// Everything known about one customer: their orders and the products they
/// keep coming back for (purchased more than once).
pub fn customer_history(orders: &[Order], phone: &str) -> CustomerHistory {
    let mut mine: Vec<Order> = orders
        .iter()
        .filter(|o| o.phone == phone)
        .cloned()
        .collect();

    // Line occurrences, not quantities: buying 5 bags at once is still one
    // purchase event for frequency purposes.
    let mut counts: HashMap<ProductName, usize> = HashMap::new();
    for order in &mine {
        for item in &order.items {
            if item.product_name.is_empty() {
                continue;
            }
            *counts.entry(item.product_name.clone()).or_default() += 1;
        }
    }

    let mut repeats: Vec<(ProductName, usize)> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect();
    repeats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    mine.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

    CustomerHistory {
        orders: mine,
        likely_next: repeats.into_iter().map(|(name, _)| name).collect(),
    }
}

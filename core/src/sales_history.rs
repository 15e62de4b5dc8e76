//! Sales history aggregation — daily/weekly/monthly revenue series.
//!
//! Weekly buckets use a day-of-year scheme: week = ceil(day_of_year / 7),
//! tied to calendar-year boundaries rather than ISO-8601 Monday weeks.
//! The scheme decides which orders merge into one point — changing it
//! changes the series, so it stays as-is.

use crate::{config::HistoryConfig, order::Order};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Revenue summed over one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    /// `YYYY-MM-DD`, `YYYY-Www`, or `YYYY-MM` depending on the series.
    /// Zero-padded, so lexicographic order is chronological order.
    pub period_key: String,
    pub revenue: f64,
}

/// The three independent revenue series, each truncated to its own
/// recency window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesHistory {
    pub daily: Vec<RevenuePoint>,
    pub weekly: Vec<RevenuePoint>,
    pub monthly: Vec<RevenuePoint>,
}

/// Bucket every order's total into all three series. Orders without a
/// usable timestamp are silently excluded from all of them.
pub fn aggregate_sales_history(orders: &[Order], config: &HistoryConfig) -> SalesHistory {
    let mut daily: HashMap<String, f64> = HashMap::new();
    let mut weekly: HashMap<String, f64> = HashMap::new();
    let mut monthly: HashMap<String, f64> = HashMap::new();

    for order in orders {
        let Some(ts) = order.timestamp() else {
            continue;
        };
        let date = ts.date_naive();

        let day_key = date.format("%Y-%m-%d").to_string();
        let month_key = day_key[..7].to_string();
        let week = (date.ordinal() + 6) / 7;
        let week_key = format!("{}-W{:02}", date.year(), week);

        *daily.entry(day_key).or_default() += order.total;
        *weekly.entry(week_key).or_default() += order.total;
        *monthly.entry(month_key).or_default() += order.total;
    }

    SalesHistory {
        daily: into_series(daily, config.daily_points),
        weekly: into_series(weekly, config.weekly_points),
        monthly: into_series(monthly, config.monthly_points),
    }
}

/// Sort ascending by period key and keep the most recent `keep` points
/// (the tail of the sorted list).
fn into_series(buckets: HashMap<String, f64>, keep: usize) -> Vec<RevenuePoint> {
    let mut points: Vec<RevenuePoint> = buckets
        .into_iter()
        .map(|(period_key, revenue)| RevenuePoint { period_key, revenue })
        .collect();
    points.sort_by(|a, b| a.period_key.cmp(&b.period_key));
    if points.len() > keep {
        points.drain(..points.len() - keep);
    }
    points
}

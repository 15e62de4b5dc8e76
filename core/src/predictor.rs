//! Interval predictor — replenishment-cycle forecasting.
//!
//! For every (customer, product) pair with at least two purchases:
//!   1. Compute consecutive gaps between purchases, in whole days (ceil).
//!   2. Average the gaps and round — the replenishment interval.
//!   3. Project due date = last purchase date + interval (calendar days,
//!      no time-of-day component).
//!   4. Keep forecasts with due-in-days inside [-max_overdue, +max_lookahead].
//!   5. Stable sort ascending by due-in-days: most overdue first.
//!
//! Averages below `min_interval_days` are dropped as noise — same-week
//! top-ups do not establish a replenishment cycle.

use crate::{
    clock::AnalyticsClock,
    config::PredictionConfig,
    order::Order,
    purchase_history::PurchaseHistory,
    types::{Phone, ProductName},
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One forecast: a customer is likely to re-buy a product around `due_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub customer_name: String,
    pub phone: Phone,
    pub product_name: ProductName,
    pub last_purchase_date: NaiveDate,
    pub average_interval_days: i64,
    /// Signed day offset from today: 0 = due today, negative = overdue.
    pub due_in_days: i64,
    pub due_date: NaiveDate,
}

/// Forecast the near-term purchases for one store.
///
/// Pure: same orders + same clock give identical output. The order list is
/// scanned exactly once to build the purchase history.
pub fn predict_upcoming_purchases(
    orders: &[Order],
    clock: &AnalyticsClock,
    config: &PredictionConfig,
) -> Vec<Prediction> {
    let history = PurchaseHistory::build(orders);
    let today = clock.today();
    let mut predictions = Vec::new();

    for group in history.groups() {
        if group.timestamps.len() < config.min_purchases {
            continue;
        }

        let interval = average_interval_days(&group.timestamps);
        if interval < config.min_interval_days {
            continue;
        }

        let Some(last) = group.timestamps.last() else {
            continue;
        };
        let last_purchase_date = last.date_naive();
        let due_date = last_purchase_date + Duration::days(interval);
        let due_in_days = due_date.signed_duration_since(today).num_days();

        if due_in_days < -config.max_overdue_days || due_in_days > config.max_lookahead_days {
            continue;
        }

        predictions.push(Prediction {
            customer_name: history
                .display_name(&group.phone)
                .unwrap_or_default()
                .to_string(),
            phone: group.phone.clone(),
            product_name: group.product_name.clone(),
            last_purchase_date,
            average_interval_days: interval,
            due_in_days,
            due_date,
        });
    }

    // Stable: equal due_in_days keep grouping order.
    predictions.sort_by_key(|p| p.due_in_days);

    log::debug!(
        "prediction run: {} groups scanned, {} forecasts in window",
        history.groups().len(),
        predictions.len()
    );
    predictions
}

/// Presentation-facing slice: forecasts due within `days` of today.
/// The dashboard uses 3 / 7 / 30; pagination stays on the caller's side.
pub fn due_within(predictions: &[Prediction], days: i64) -> Vec<Prediction> {
    predictions
        .iter()
        .filter(|p| p.due_in_days <= days)
        .cloned()
        .collect()
}

/// Rounded mean of the consecutive whole-day gaps in an ascending
/// timestamp sequence. Caller guarantees at least two timestamps.
fn average_interval_days(timestamps: &[DateTime<Utc>]) -> i64 {
    let gaps: i64 = timestamps
        .windows(2)
        .map(|pair| gap_days(pair[0], pair[1]))
        .sum();
    let count = (timestamps.len() - 1) as f64;
    (gaps as f64 / count).round() as i64
}

/// Whole-day gap between two purchases: absolute difference, rounded up.
/// Identical timestamps give 0; any positive difference gives at least 1.
fn gap_days(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    let secs = (b - a).num_seconds().abs();
    (secs + 86_399) / 86_400
}

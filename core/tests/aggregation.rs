use chrono::{DateTime, TimeZone, Utc};
use kirana_core::{
    config::HistoryConfig,
    order::{Order, OrderStatus},
    sales_history::aggregate_sales_history,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 10, 30, 0).unwrap()
}

fn order(total: f64, ts: Option<DateTime<Utc>>) -> Order {
    Order {
        id: String::new(),
        customer_name: "Customer".into(),
        phone: "9841000000".into(),
        items: Vec::new(),
        total,
        date: ts,
        created_at: None,
        status: OrderStatus::Delivered,
    }
}

fn config() -> HistoryConfig {
    HistoryConfig::default()
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Three orders on different days of one month merge into a single monthly
/// point carrying the summed revenue.
#[test]
fn monthly_merges_within_month() {
    let orders = vec![
        order(100.0, Some(at(2026, 3, 2))),
        order(200.0, Some(at(2026, 3, 15))),
        order(300.0, Some(at(2026, 3, 28))),
    ];

    let history = aggregate_sales_history(&orders, &config());
    assert_eq!(history.monthly.len(), 1);
    assert_eq!(history.monthly[0].period_key, "2026-03");
    assert_eq!(history.monthly[0].revenue, 600.0);
    assert_eq!(history.daily.len(), 3, "three distinct daily points");
}

/// Revenue conservation: with few enough days to avoid truncation, the daily
/// series sums to the total of all orders with valid timestamps.
#[test]
fn daily_series_conserves_revenue() {
    let orders = vec![
        order(120.0, Some(at(2026, 5, 1))),
        order(80.0, Some(at(2026, 5, 1))),
        order(250.0, Some(at(2026, 5, 3))),
        order(999.0, None), // no timestamp: excluded everywhere
    ];

    let history = aggregate_sales_history(&orders, &config());
    let daily_sum: f64 = history.daily.iter().map(|p| p.revenue).sum();
    assert_eq!(daily_sum, 450.0);

    let weekly_sum: f64 = history.weekly.iter().map(|p| p.revenue).sum();
    let monthly_sum: f64 = history.monthly.iter().map(|p| p.revenue).sum();
    assert_eq!(weekly_sum, 450.0);
    assert_eq!(monthly_sum, 450.0);
}

/// The daily series keeps only the 30 most recent points — the tail of the
/// sorted list, so the oldest days fall off.
#[test]
fn daily_series_keeps_most_recent_30() {
    let orders: Vec<Order> = (1..=40)
        .map(|d| order(10.0, Some(at(2026, 1, 1) + chrono::Duration::days(d - 1))))
        .collect();

    let history = aggregate_sales_history(&orders, &config());
    assert_eq!(history.daily.len(), 30);
    assert_eq!(history.daily[0].period_key, "2026-01-11", "days 1-10 truncated away");
    assert_eq!(history.daily[29].period_key, "2026-02-09");
}

/// Weekly and monthly series are capped at 12 points each.
#[test]
fn weekly_and_monthly_truncation() {
    // One order per week for 15 weeks, plus one order per month for 14 months.
    let mut orders: Vec<Order> = (0..15)
        .map(|w| order(10.0, Some(at(2026, 1, 2) + chrono::Duration::weeks(w))))
        .collect();
    for m in 0..14u32 {
        let (y, month) = (2025 + (m / 12) as i32, m % 12 + 1);
        orders.push(order(5.0, Some(at(y, month, 15))));
    }

    let history = aggregate_sales_history(&orders, &config());
    assert!(history.weekly.len() <= 12, "weekly capped at 12, got {}", history.weekly.len());
    assert_eq!(history.monthly.len(), 12, "monthly capped at 12");
}

/// Week numbering is day-of-year based: ceil(ordinal / 7). Jan 7 is still
/// week 1, Jan 8 starts week 2 — not ISO-8601.
#[test]
fn week_key_uses_day_of_year_scheme() {
    let orders = vec![
        order(10.0, Some(at(2026, 1, 7))),
        order(20.0, Some(at(2026, 1, 8))),
    ];

    let history = aggregate_sales_history(&orders, &config());
    let keys: Vec<&str> = history.weekly.iter().map(|p| p.period_key.as_str()).collect();
    assert_eq!(keys, vec!["2026-W01", "2026-W02"]);
}

/// Week buckets are tied to calendar years: the last days of December and
/// the first days of January never merge.
#[test]
fn week_buckets_split_at_year_boundary() {
    let orders = vec![
        order(10.0, Some(at(2025, 12, 31))), // ordinal 365 -> W53
        order(20.0, Some(at(2026, 1, 1))),   // ordinal 1   -> W01
    ];

    let history = aggregate_sales_history(&orders, &config());
    let keys: Vec<&str> = history.weekly.iter().map(|p| p.period_key.as_str()).collect();
    assert_eq!(keys, vec!["2025-W53", "2026-W01"]);
}

/// An order with no primary date falls back to its creation time.
#[test]
fn created_at_is_the_fallback_timestamp() {
    let mut o = order(75.0, None);
    o.created_at = Some(at(2026, 6, 10));

    let history = aggregate_sales_history(&[o], &config());
    assert_eq!(history.daily.len(), 1);
    assert_eq!(history.daily[0].period_key, "2026-06-10");
    assert_eq!(history.daily[0].revenue, 75.0);
}

/// Each series is sorted ascending by period key.
#[test]
fn series_are_sorted_ascending() {
    let orders = vec![
        order(10.0, Some(at(2026, 4, 20))),
        order(10.0, Some(at(2026, 2, 1))),
        order(10.0, Some(at(2026, 3, 11))),
    ];

    let history = aggregate_sales_history(&orders, &config());
    for series in [&history.daily, &history.weekly, &history.monthly] {
        for pair in series.windows(2) {
            assert!(pair[0].period_key < pair[1].period_key, "series out of order");
        }
    }
}

/// No orders, no points — never an error.
#[test]
fn empty_input_gives_empty_series() {
    let history = aggregate_sales_history(&[], &config());
    assert!(history.daily.is_empty());
    assert!(history.weekly.is_empty());
    assert!(history.monthly.is_empty());
}

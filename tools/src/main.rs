//! report-runner: headless analytics report for one store.
//!
//! Usage:
//!   report-runner --db shop.db --store store-1
//!   report-runner --db shop.db --store store-1 --import orders.json
//!   report-runner --store store-1 --today 2026-08-27 --json
//!   report-runner --store store-1 --search "Ram" --customer 9841111111

use anyhow::{Context, Result};
use chrono::NaiveDate;
use kirana_core::{
    clock::AnalyticsClock,
    config::AnalyticsConfig,
    engine::AnalyticsEngine,
    order::Order,
    predictor::Prediction,
    sales_history::SalesHistory,
    store::OrderStore,
    store_stats::StoreStats,
};
use std::env;
use std::fs;

#[derive(serde::Serialize)]
struct StoreReport {
    store_id: String,
    today: NaiveDate,
    stats: StoreStats,
    forecasts: Vec<Prediction>,
    history: SalesHistory,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let db = str_arg(&args, "--db").unwrap_or(":memory:");
    let store_id = str_arg(&args, "--store").unwrap_or("store-1").to_string();
    let import = str_arg(&args, "--import");
    let today = str_arg(&args, "--today");
    let search = str_arg(&args, "--search");
    let customer = str_arg(&args, "--customer");
    let json_mode = args.iter().any(|a| a == "--json");

    let store = OrderStore::open(db)?;
    store.migrate()?;

    if let Some(path) = import {
        let raw = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
        let orders: Vec<Order> =
            serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;
        let count = orders.len();
        for order in &orders {
            store.insert_order(&store_id, order)?;
        }
        log::info!("imported {count} orders into {store_id}");
    }

    let clock = match today {
        Some(raw) => AnalyticsClock::fixed(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .with_context(|| format!("parsing --today '{raw}'"))?,
        ),
        None => AnalyticsClock::system(),
    };
    let engine = AnalyticsEngine::new(AnalyticsConfig::default(), clock);

    let orders = store.orders_for_store(&store_id)?;

    let report = StoreReport {
        store_id: store_id.clone(),
        today: clock.today(),
        stats: engine.store_stats(&orders),
        forecasts: engine.predict_upcoming_purchases(&orders),
        history: engine.sales_history(&orders),
    };

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(query) = search {
        print_search(&engine, &orders, query);
    }
    if let Some(phone) = customer {
        print_customer(&engine, &orders, phone);
    }

    Ok(())
}

fn print_report(report: &StoreReport) {
    println!("=== STORE SUMMARY ===");
    println!("  store:         {}", report.store_id);
    println!("  today:         {}", report.today);
    println!("  total orders:  {}", report.stats.total_orders);
    println!("  total revenue: {:.2}", report.stats.total_revenue);

    println!();
    println!("=== BEST SELLERS ===");
    if report.stats.top_products.is_empty() {
        println!("  (no sales yet)");
    }
    for product in &report.stats.top_products {
        println!("  {:<40} {:>6} units", product.name, product.count);
    }

    println!();
    println!("=== UPCOMING PURCHASES ===");
    if report.forecasts.is_empty() {
        println!("  (no forecasts in window)");
    }
    for f in &report.forecasts {
        let due = match f.due_in_days {
            0 => "due today".to_string(),
            d if d < 0 => format!("overdue {} days", -d),
            d => format!("due in {d} days"),
        };
        println!(
            "  {:<20} {:<12} {:<30} every ~{} days, {}",
            f.customer_name, f.phone, f.product_name, f.average_interval_days, due
        );
    }

    println!();
    println!("=== REVENUE (MONTHLY) ===");
    if report.history.monthly.is_empty() {
        println!("  (no history yet)");
    }
    for point in &report.history.monthly {
        println!("  {} | {:.2}", point.period_key, point.revenue);
    }
}

fn print_search(engine: &AnalyticsEngine, orders: &[Order], query: &str) {
    println!();
    println!("=== CUSTOMER SEARCH: '{query}' ===");
    let matches = engine.search_customers(orders, query);
    if matches.is_empty() {
        println!("  (no matches)");
    }
    for m in matches {
        println!("  {:<20} {}", m.customer_name, m.phone);
    }
}

fn print_customer(engine: &AnalyticsEngine, orders: &[Order], phone: &str) {
    println!();
    println!("=== CUSTOMER {phone} ===");
    let history = engine.customer_history(orders, phone);
    println!("  orders: {}", history.orders.len());
    if history.likely_next.is_empty() {
        println!("  likely next: (not enough purchase history)");
    } else {
        println!("  likely next: {}", history.likely_next.join(", "));
    }
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

//! SQLite order store — the fetch collaborator in front of the analytics core.
//!
//! RULE: Only store.rs talks to the database.
//! The analytics engine never executes SQL — it is handed the full,
//! already-materialized order list for one store and computes from memory.
//!
//! Tolerance: a row whose items column fails to parse is kept with empty
//! items and logged; an unparseable timestamp reads back as None. Neither
//! aborts a fetch.

use crate::{
    error::AnalyticsResult,
    order::{LineItem, Order, OrderStatus},
    types::OrderId,
};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

pub struct OrderStore {
    conn: Connection,
}

impl OrderStore {
    /// Open (or create) the order database at `path`.
    pub fn open(path: &str) -> AnalyticsResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode: better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> AnalyticsResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> AnalyticsResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_foundation.sql"))?;
        Ok(())
    }

    // ── Orders ─────────────────────────────────────────────────

    /// Insert an order for a store. An empty id gets a generated `ORD-…`
    /// id; the effective id is returned either way.
    pub fn insert_order(&self, store_id: &str, order: &Order) -> AnalyticsResult<OrderId> {
        let id = if order.id.is_empty() {
            generate_order_id()
        } else {
            order.id.clone()
        };
        let items_json = serde_json::to_string(&order.items)?;

        self.conn.execute(
            "INSERT INTO orders (id, store_id, customer, phone, items, total, status, order_date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                id,
                store_id,
                order.customer_name,
                order.phone,
                items_json,
                order.total,
                order.status.as_str(),
                order.date.map(|d| d.to_rfc3339()),
                order.created_at.map(|d| d.to_rfc3339()),
            ],
        )?;
        Ok(id)
    }

    /// The full order list for one store, in insertion order. This is the
    /// collection every analytics run consumes.
    pub fn orders_for_store(&self, store_id: &str) -> AnalyticsResult<Vec<Order>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, customer, phone, items, total, status, order_date, created_at
             FROM orders WHERE store_id = ?1
             ORDER BY rowid ASC",
        )?;
        let orders = stmt
            .query_map(params![store_id], |row| {
                let id: String = row.get(0)?;
                let items_raw: String = row.get(3)?;
                let items: Vec<LineItem> = match serde_json::from_str(&items_raw) {
                    Ok(items) => items,
                    Err(e) => {
                        log::warn!("order {id}: unparseable items column ({e}), keeping row with no items");
                        Vec::new()
                    }
                };
                let status: String = row.get(5)?;
                Ok(Order {
                    id,
                    customer_name: row.get(1)?,
                    phone: row.get(2)?,
                    items,
                    total: row.get(4)?,
                    status: OrderStatus::parse(&status),
                    date: parse_timestamp(row.get::<_, Option<String>>(6)?),
                    created_at: parse_timestamp(row.get::<_, Option<String>>(7)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(orders)
    }

    pub fn order_count(&self, store_id: &str) -> AnalyticsResult<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM orders WHERE store_id = ?1",
            params![store_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Move an order through its lifecycle. Returns false when the id is
    /// unknown.
    pub fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> AnalyticsResult<bool> {
        let changed = self.conn.execute(
            "UPDATE orders SET status = ?1 WHERE id = ?2",
            params![status.as_str(), order_id],
        )?;
        Ok(changed > 0)
    }

    /// Fetch a single order by id.
    pub fn order_by_id(&self, order_id: &str) -> AnalyticsResult<Option<Order>> {
        let store_id: Option<String> = self
            .conn
            .query_row(
                "SELECT store_id FROM orders WHERE id = ?1",
                params![order_id],
                |row| row.get(0),
            )
            .optional()?;
        let Some(store_id) = store_id else {
            return Ok(None);
        };
        Ok(self
            .orders_for_store(&store_id)?
            .into_iter()
            .find(|o| o.id == order_id))
    }
}

fn parse_timestamp(raw: Option<String>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            log::warn!("unparseable timestamp '{raw}' ({e}), treating as absent");
            None
        }
    }
}

/// Generated order ids keep the storefront's readable `ORD-` prefix; the
/// suffix comes from a v4 uuid instead of the old time-plus-random scheme.
fn generate_order_id() -> OrderId {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("ORD-{}", uuid[..8].to_uppercase())
}

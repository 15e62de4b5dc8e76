//! Shared primitive types used across the analytics core.

/// A store's unique identifier. One analytics run covers exactly one store.
pub type StoreId = String;

/// An order's unique identifier (e.g. "ORD-9F3A21C4").
pub type OrderId = String;

/// A customer's phone number — the true identity key within a store.
/// Display names are not unique; phones are.
pub type Phone = String;

/// A product's display name. Product identity for pattern purposes is the
/// name string, not a stable id — differently-cased or differently-worded
/// names are distinct products.
pub type ProductName = String;

//! # Cart
//!
//! A customer's shopping cart over a borrowed catalog and inventory.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation                 Checks (in order)           Write            │
//! │  ─────────                 ─────────────────           ─────            │
//! │                                                                         │
//! │  add_item(sku, n) ───────► format, catalog, n > 0,  ─► items[sku] += n  │
//! │                            existing + n <= stock                        │
//! │                                                                         │
//! │  update_item_quantity ───► format, catalog, n > 0,  ─► items[sku] = n   │
//! │                            n <= stock                                   │
//! │                                                                         │
//! │  remove_item(sku) ───────► format only              ─► items.remove    │
//! │                                                                         │
//! │  total_cost() ───────────► (read only) Σ price × qty                   │
//! │                                                                         │
//! │  NOTE: every check runs before the single write, so a failed            │
//! │        operation leaves the cart exactly as it was.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Every SKU in the cart exists in the catalog
//! - Every quantity is > 0 and <= the inventory level for its SKU
//! - Removing a line deletes it; a zero quantity is never stored

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::{Catalog, Inventory};
use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::types::{CustomerId, Quantity, Sku};

/// SKU → quantity lines, ordered by SKU.
pub type CartItems = BTreeMap<Sku, Quantity>;

/// The shopping cart.
///
/// Borrows the catalog and inventory for its whole lifetime, so neither can
/// change underneath it. Exclusively owns its item lines.
#[derive(Debug)]
pub struct Cart<'a> {
    id: Uuid,
    customer_id: CustomerId,
    created_at: DateTime<Utc>,
    items: CartItems,
    catalog: &'a Catalog,
    inventory: &'a Inventory,
}

impl<'a> Cart<'a> {
    /// Opens an empty cart for `customer_id`.
    ///
    /// ## Errors
    /// `CartError::Validation` if the customer ID is malformed.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{Cart, Catalog, Inventory};
    ///
    /// let catalog = Catalog::new();
    /// let inventory = Inventory::new();
    ///
    /// let cart = Cart::new("ABC12345DE-A", &catalog, &inventory).unwrap();
    /// assert!(cart.is_empty());
    /// assert!(Cart::new("nope", &catalog, &inventory).is_err());
    /// ```
    pub fn new(customer_id: &str, catalog: &'a Catalog, inventory: &'a Inventory) -> CartResult<Self> {
        let customer_id = CustomerId::parse(customer_id)?;

        let cart = Cart {
            id: Uuid::new_v4(),
            customer_id,
            created_at: Utc::now(),
            items: CartItems::new(),
            catalog,
            inventory,
        };

        info!(cart_id = %cart.id, customer_id = %cart.customer_id, "Cart created");
        Ok(cart)
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Adds `quantity` units of `sku`, accumulating onto any existing line.
    ///
    /// ## Errors
    /// - `Validation`: malformed SKU or non-positive quantity
    /// - `UnknownSku`: SKU not in the catalog
    /// - `InsufficientInventory`: existing + `quantity` exceeds stock
    pub fn add_item(&mut self, sku: &str, quantity: i64) -> CartResult<()> {
        let sku = self.catalog_sku(sku)?;
        let quantity = Quantity::new(quantity)?;

        let requested = match self.items.get(&sku) {
            Some(existing) => existing
                .checked_add(quantity)
                .ok_or_else(|| self.shortfall(&sku, i64::MAX))?,
            None => quantity,
        };
        self.ensure_in_stock(&sku, requested)?;

        debug!(cart_id = %self.id, sku = %sku, quantity = %requested, "Adding item");
        self.items.insert(sku, requested);
        Ok(())
    }

    /// Drops the line for `sku`, returning its quantity.
    ///
    /// Only the SKU format is checked: removing a SKU that is not in the
    /// cart, or not even in the catalog, is a no-op returning `None`.
    pub fn remove_item(&mut self, sku: &str) -> CartResult<Option<Quantity>> {
        let sku = Sku::parse(sku)?;

        let removed = self.items.remove(&sku);
        if let Some(quantity) = removed {
            debug!(cart_id = %self.id, sku = %sku, quantity = %quantity, "Removed item");
        }
        Ok(removed)
    }

    /// Sets the line for `sku` to exactly `quantity` (overwrite, not add).
    ///
    /// ## Errors
    /// Same as [`Cart::add_item`], with `quantity` itself checked against stock.
    pub fn update_item_quantity(&mut self, sku: &str, quantity: i64) -> CartResult<()> {
        let sku = self.catalog_sku(sku)?;
        let quantity = Quantity::new(quantity)?;
        self.ensure_in_stock(&sku, quantity)?;

        debug!(cart_id = %self.id, sku = %sku, quantity = %quantity, "Updating item quantity");
        self.items.insert(sku, quantity);
        Ok(())
    }

    /// Sum of unit price × quantity over all lines; zero for an empty cart.
    ///
    /// ## Errors
    /// - `InconsistentState`: a line's SKU has no catalog entry
    /// - `AmountOverflow`: the total does not fit in i64 cents
    pub fn total_cost(&self) -> CartResult<Money> {
        self.items
            .iter()
            .try_fold(Money::zero(), |total, (sku, quantity)| {
                let entry = self
                    .catalog
                    .get(sku)
                    .ok_or_else(|| CartError::InconsistentState {
                        sku: sku.to_string(),
                    })?;

                entry
                    .price()
                    .checked_mul_quantity(*quantity)
                    .and_then(|line| total.checked_add(line))
                    .ok_or(CartError::AmountOverflow)
            })
    }

    /// Independent copy of the item lines.
    pub fn snapshot_items(&self) -> CartItems {
        self.items.clone()
    }

    /// Quantity currently held for `sku`.
    #[inline]
    pub fn quantity_of(&self, sku: &Sku) -> Option<Quantity> {
        self.items.get(sku).copied()
    }

    /// Number of distinct SKUs in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .values()
            .fold(0i64, |sum, qty| sum.saturating_add(qty.get()))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Summary for display / JSON output.
    pub fn totals(&self) -> CartResult<CartTotals> {
        Ok(CartTotals {
            cart_id: self.id,
            customer_id: self.customer_id.clone(),
            item_count: self.item_count(),
            total_quantity: self.total_quantity(),
            total_cents: self.total_cost()?.cents(),
        })
    }

    /// Parses `raw` and requires a catalog entry for it.
    fn catalog_sku(&self, raw: &str) -> CartResult<Sku> {
        let sku = Sku::parse(raw)?;
        self.catalog.ensure_has_sku(&sku)?;
        Ok(sku)
    }

    /// A SKU with no stock record has nothing available.
    fn ensure_in_stock(&self, sku: &Sku, requested: Quantity) -> CartResult<()> {
        let available = self.inventory.available(sku).map_or(0, |q| q.get());
        if requested.get() > available {
            return Err(self.shortfall(sku, requested.get()));
        }
        Ok(())
    }

    fn shortfall(&self, sku: &Sku, requested: i64) -> CartError {
        let available = self.inventory.available(sku).map_or(0, |q| q.get());
        warn!(
            cart_id = %self.id,
            sku = %sku,
            available,
            requested,
            "Insufficient inventory"
        );
        CartError::InsufficientInventory {
            sku: sku.to_string(),
            available,
            requested,
        }
    }
}

/// Cart totals summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub cart_id: Uuid,
    pub customer_id: CustomerId,
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

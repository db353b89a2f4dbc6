//! # Catalog & Inventory
//!
//! Read-only lookups the cart consults before every mutation.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Bootstrap (caller)           Cart lifetime (read-only)                 │
//! │  ──────────────────           ─────────────────────────                 │
//! │                                                                         │
//! │  Catalog::from_entries ──┐                                              │
//! │                          ├──► &Catalog, &Inventory ──► Cart<'a>         │
//! │  Inventory::from_levels ─┘                                              │
//! │                                                                         │
//! │  Inserts happen only before the first cart borrows the maps; the       │
//! │  shared borrow then freezes them for as long as the cart lives.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use crate::error::{CartError, CartResult, ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{Quantity, Sku};
use crate::validation::validate_price_cents;

// =============================================================================
// Catalog Entry
// =============================================================================

/// Product metadata for one SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    sku: Sku,
    description: String,
    price: Money,
}

impl CatalogEntry {
    /// Creates an entry, rejecting a negative unit price.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{CatalogEntry, Sku};
    ///
    /// let sku = Sku::parse("ABC_DEF_21").unwrap();
    /// let entry = CatalogEntry::new(sku, "Widget", 1000).unwrap();
    /// assert_eq!(entry.price().cents(), 1000);
    /// ```
    pub fn new(sku: Sku, description: impl Into<String>, price_cents: i64) -> ValidationResult<Self> {
        validate_price_cents(price_cents)?;

        Ok(CatalogEntry {
            sku,
            description: description.into(),
            price: Money::from_cents(price_cents),
        })
    }

    #[inline]
    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Mapping from SKU to product metadata. Keys are unique.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<Sku, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Builds a catalog, failing on the first duplicate SKU.
    pub fn from_entries<I>(entries: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut catalog = Catalog::new();
        for entry in entries {
            catalog.insert(entry)?;
        }
        Ok(catalog)
    }

    /// Adds an entry during bootstrap.
    pub fn insert(&mut self, entry: CatalogEntry) -> ValidationResult<()> {
        if self.entries.contains_key(&entry.sku) {
            return Err(ValidationError::Duplicate {
                field: "sku".to_string(),
                value: entry.sku.to_string(),
            });
        }

        self.entries.insert(entry.sku.clone(), entry);
        Ok(())
    }

    #[inline]
    pub fn has_sku(&self, sku: &Sku) -> bool {
        self.entries.contains_key(sku)
    }

    /// Existence check used by cart operations that require a known SKU.
    ///
    /// ## Errors
    /// `CartError::UnknownSku` when the SKU has no entry.
    pub fn ensure_has_sku(&self, sku: &Sku) -> CartResult<&CatalogEntry> {
        self.entries.get(sku).ok_or_else(|| CartError::UnknownSku {
            sku: sku.to_string(),
        })
    }

    #[inline]
    pub fn get(&self, sku: &Sku) -> Option<&CatalogEntry> {
        self.entries.get(sku)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// Available units per SKU. Never decremented by the cart.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    levels: HashMap<Sku, Quantity>,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Builds an inventory, failing on the first duplicate SKU.
    pub fn from_levels<I>(levels: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = (Sku, Quantity)>,
    {
        let mut inventory = Inventory::new();
        for (sku, available) in levels {
            inventory.insert(sku, available)?;
        }
        Ok(inventory)
    }

    /// Records the stock level for a SKU during bootstrap.
    pub fn insert(&mut self, sku: Sku, available: Quantity) -> ValidationResult<()> {
        if self.levels.contains_key(&sku) {
            return Err(ValidationError::Duplicate {
                field: "sku".to_string(),
                value: sku.to_string(),
            });
        }

        self.levels.insert(sku, available);
        Ok(())
    }

    /// Units available, `None` if the SKU has no stock record.
    #[inline]
    pub fn available(&self, sku: &Sku) -> Option<Quantity> {
        self.levels.get(sku).copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # cart-core: Pure Shopping Cart Logic
//!
//! Validated identifiers, a read-only catalog and inventory, and a cart whose
//! every mutation is checked against them. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Core Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Caller (cart-demo, tests, any front end)             │   │
//! │  │    seeds Catalog + Inventory ──► opens Cart ──► mutates         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │   cart    │  │ validation│  │   │
//! │  │   │CustomerId │  │  Catalog  │  │   Cart    │  │   regex   │  │   │
//! │  │   │ Sku, Qty  │  │ Inventory │  │CartTotals │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • NO ASYNC                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Validated value objects (CustomerId, Sku, Quantity)
//! - [`validation`] - Format and range rules
//! - [`money`] - Integer-cents Money type
//! - [`catalog`] - Catalog and Inventory lookups
//! - [`cart`] - The cart and its operations
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{Cart, Catalog, CatalogEntry, Inventory, Money, Quantity, Sku};
//!
//! let widget = Sku::parse("ABC_DEF_21").unwrap();
//! let catalog =
//!     Catalog::from_entries([CatalogEntry::new(widget.clone(), "Widget", 1_000).unwrap()]).unwrap();
//! let inventory = Inventory::from_levels([(widget, Quantity::new(100).unwrap())]).unwrap();
//!
//! let mut cart = Cart::new("ABC12345DE-A", &catalog, &inventory).unwrap();
//! cart.add_item("ABC_DEF_21", 2).unwrap();
//! cart.add_item("ABC_DEF_21", 1).unwrap();
//!
//! assert_eq!(cart.total_cost().unwrap(), Money::from_cents(3_000));
//! assert!(cart.add_item("ABC_DEF_21", 98).is_err()); // 3 + 98 > 100
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItems, CartTotals};
pub use catalog::{Catalog, CatalogEntry, Inventory};
pub use error::{CartError, CartResult, ValidationError, ValidationResult};
pub use money::Money;
pub use types::{CustomerId, Quantity, Sku};

//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cart-core errors (this file)                                          │
//! │  ├── CartError        - Business rule violations                       │
//! │  │   ├── Validation            (wraps ValidationError)                 │
//! │  │   ├── UnknownSku            (SKU not in catalog)                    │
//! │  │   ├── InsufficientInventory (quantity above available stock)        │
//! │  │   ├── InconsistentState     (cart item missing from catalog)        │
//! │  │   └── AmountOverflow        (total does not fit in i64 cents)       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → caller                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, quantities)
//! 3. Errors are enum variants, never String
//! 4. A failed operation never leaves a partial write behind

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// SKU is well-formed but not present in the catalog.
    ///
    /// ## When This Occurs
    /// - `add_item` / `update_item_quantity` with a SKU the catalog lacks
    /// - Never raised by `remove_item`
    #[error("Unknown SKU: {sku}")]
    UnknownSku { sku: String },

    /// Requested quantity exceeds the available inventory.
    ///
    /// ## User Workflow
    /// ```text
    /// add_item("ABC_DEF_21", 5)  (2 already in cart)
    ///      │
    ///      ▼
    /// requested = 2 + 5 = 7, available = 6
    ///      │
    ///      ▼
    /// InsufficientInventory { sku: "ABC_DEF_21", available: 6, requested: 7 }
    /// ```
    #[error("Insufficient inventory for {sku}: available {available}, requested {requested}")]
    InsufficientInventory {
        sku: String,
        available: i64,
        requested: i64,
    },

    /// A cart line refers to a SKU the catalog no longer knows.
    #[error("Cart holds {sku} but the catalog has no entry for it")]
    InconsistentState { sku: String },

    /// Monetary arithmetic left the representable range.
    #[error("Cart total exceeds the representable amount")]
    AmountOverflow,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any business logic runs; an operation that fails
/// validation has no effect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value does not match the required format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Duplicate value (e.g., a SKU seeded twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Domain Types
//!
//! Validated value objects used throughout the cart.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Value Objects                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CustomerId    │   │       Sku       │   │    Quantity     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  ABC12345DE-A   │   │  ABC_DEF_21     │   │  i64, always >0 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Constructed ONLY through validation: holding one means it is valid.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serde Boundary
//! Each type deserializes through its validator (`#[serde(try_from)]`), so a
//! fixture with a malformed SKU, a fractional quantity or a quantity given as
//! a string is rejected at load time instead of reaching the cart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::validation::{validate_customer_id, validate_quantity, validate_sku};

// =============================================================================
// Customer ID
// =============================================================================

/// Customer identifier, e.g. `ABC12345DE-A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId(String);

impl CustomerId {
    /// Validates `raw` and wraps it.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::CustomerId;
    ///
    /// let id = CustomerId::parse("ABC12345DE-A").unwrap();
    /// assert_eq!(id.as_str(), "ABC12345DE-A");
    /// assert!(CustomerId::parse("ABC12345DE-Z").is_err());
    /// ```
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        validate_customer_id(raw)?;
        Ok(CustomerId(raw.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CustomerId {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        validate_customer_id(&raw)?;
        Ok(CustomerId(raw))
    }
}

impl From<CustomerId> for String {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

impl FromStr for CustomerId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CustomerId::parse(s)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// SKU
// =============================================================================

/// Stock Keeping Unit, e.g. `ABC_DEF_21`.
///
/// Ordered so cart snapshots list lines deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

impl Sku {
    /// Validates `raw` and wraps it.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::Sku;
    ///
    /// assert!(Sku::parse("ZZZ_BOB_77").is_ok());
    /// assert!(Sku::parse("ZZZ-BOB-77").is_err());
    /// ```
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        validate_sku(raw)?;
        Ok(Sku(raw.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Sku {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        validate_sku(&raw)?;
        Ok(Sku(raw))
    }
}

impl From<Sku> for String {
    fn from(sku: Sku) -> Self {
        sku.0
    }
}

impl FromStr for Sku {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sku::parse(s)
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// A strictly positive number of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(i64);

impl Quantity {
    /// Validates `value` (> 0) and wraps it.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::Quantity;
    ///
    /// assert_eq!(Quantity::new(3).unwrap().get(), 3);
    /// assert!(Quantity::new(0).is_err());
    /// ```
    pub fn new(value: i64) -> ValidationResult<Self> {
        validate_quantity(value)?;
        Ok(Quantity(value))
    }

    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Sum of two quantities, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.0).map(Quantity)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Quantity::new(value)
    }
}

impl From<Quantity> for i64 {
    fn from(qty: Quantity) -> Self {
        qty.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_parse() {
        let id = CustomerId::parse("ABC12345DE-A").unwrap();
        assert_eq!(id.to_string(), "ABC12345DE-A");

        let err = CustomerId::parse("ABC12345DE").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn test_sku_from_str() {
        let sku: Sku = "ABC_DEF_21".parse().unwrap();
        assert_eq!(sku.as_str(), "ABC_DEF_21");
        assert!("abc".parse::<Sku>().is_err());
    }

    #[test]
    fn test_sku_ordering() {
        let a = Sku::parse("ABC_DEF_21").unwrap();
        let z = Sku::parse("ZZZ_BOB_77").unwrap();
        assert!(a < z);
    }

    #[test]
    fn test_quantity_checked_add() {
        let two = Quantity::new(2).unwrap();
        let three = Quantity::new(3).unwrap();
        assert_eq!(two.checked_add(three).unwrap().get(), 5);

        let max = Quantity::new(i64::MAX).unwrap();
        assert!(max.checked_add(two).is_none());
    }

    #[test]
    fn test_sku_deserialize_validates() {
        let sku: Sku = serde_json::from_str("\"ZZZ_BOB_77\"").unwrap();
        assert_eq!(sku.as_str(), "ZZZ_BOB_77");

        assert!(serde_json::from_str::<Sku>("\"zzz_bob_77\"").is_err());
        // Not a string
        assert!(serde_json::from_str::<Sku>("42").is_err());
    }

    #[test]
    fn test_customer_id_deserialize_validates() {
        assert!(serde_json::from_str::<CustomerId>("\"ABC12345DE-Q\"").is_ok());
        assert!(serde_json::from_str::<CustomerId>("\"ABC12345DE-X\"").is_err());
        assert!(serde_json::from_str::<CustomerId>("null").is_err());
    }

    #[test]
    fn test_quantity_deserialize_rejects_non_integers() {
        assert_eq!(serde_json::from_str::<Quantity>("7").unwrap().get(), 7);

        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("-3").is_err());
        assert!(serde_json::from_str::<Quantity>("1.5").is_err());
        assert!(serde_json::from_str::<Quantity>("true").is_err());
        assert!(serde_json::from_str::<Quantity>("\"5\"").is_err());
    }

    #[test]
    fn test_serialize_as_plain_values() {
        let sku = Sku::parse("ABC_DEF_21").unwrap();
        assert_eq!(serde_json::to_string(&sku).unwrap(), "\"ABC_DEF_21\"");

        let qty = Quantity::new(3).unwrap();
        assert_eq!(serde_json::to_string(&qty).unwrap(), "3");
    }
}

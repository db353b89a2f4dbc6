//! # Validation Module
//!
//! Input validation rules for cart-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Type checks: a SKU must be a string, a quantity an integer        │
//! │  └── Newtypes deserialize through the validators below                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Format rules (customer ID, SKU)                                   │
//! │  └── Range rules (quantity > 0, price >= 0)                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart business rules                                          │
//! │  ├── SKU exists in catalog                                             │
//! │  └── Quantity within available inventory                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::validation::{validate_sku, validate_quantity};
//!
//! assert!(validate_sku("ABC_DEF_21").is_ok());
//! assert!(validate_quantity(5).is_ok());
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ValidationError, ValidationResult};

/// 3 letters, 5 digits, 2 letters, then `-A` or `-Q`.
static CUSTOMER_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{3}\d{5}[A-Za-z]{2}-[AQ]$").expect("invalid customer id pattern")
});

/// `AAA_BBB_00`: two upper-case triples and two digits, underscore separated.
///
/// `\d` is any Unicode decimal digit, not only ASCII.
static SKU_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}_[A-Z]{3}_\d{2}$").expect("invalid sku pattern"));

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer identifier.
///
/// ## Rules
/// - Must not be empty
/// - Must fully match `AAA99999AA-A` / `AAA99999AA-Q` (letters in either case)
/// - No surrounding whitespace is tolerated
///
/// ## Example
/// ```rust
/// use cart_core::validation::validate_customer_id;
///
/// assert!(validate_customer_id("ABC12345DE-A").is_ok());
/// assert!(validate_customer_id("abc12345de-Q").is_ok());
/// assert!(validate_customer_id("ABC12345DE-B").is_err());
/// ```
pub fn validate_customer_id(raw: &str) -> ValidationResult<()> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "customer_id".to_string(),
        });
    }

    if !CUSTOMER_ID_PATTERN.is_match(raw) {
        return Err(ValidationError::InvalidFormat {
            field: "customer_id".to_string(),
            reason: "expected 3 letters, 5 digits, 2 letters and a -A or -Q suffix".to_string(),
        });
    }

    Ok(())
}

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - Must fully match `AAA_AAA_99` (upper-case letters only)
///
/// ## Example
/// ```rust
/// use cart_core::validation::validate_sku;
///
/// assert!(validate_sku("ZZZ_BOB_77").is_ok());
/// assert!(validate_sku("zzz_bob_77").is_err());
/// assert!(validate_sku("").is_err());
/// ```
pub fn validate_sku(raw: &str) -> ValidationResult<()> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if !SKU_PATTERN.is_match(raw) {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "expected AAA_AAA_99 (upper-case letters and two digits)".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// There is no fixed upper bound; the inventory for the SKU caps it.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use cart_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1000).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-1).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_customer_id() {
        assert!(validate_customer_id("ABC12345DE-A").is_ok());
        assert!(validate_customer_id("xyz00000ab-Q").is_ok());

        assert!(validate_customer_id("").is_err());
        assert!(validate_customer_id("   ").is_err());
        assert!(validate_customer_id("ABC12345DE-a").is_err());
        assert!(validate_customer_id("ABC12345DE-B").is_err());
        assert!(validate_customer_id("AB12345DE-A").is_err());
        assert!(validate_customer_id("ABC1234DE-A").is_err());
        assert!(validate_customer_id("ABC12345D1-A").is_err());
        assert!(validate_customer_id("ABC12345DE-A ").is_err());
        assert!(validate_customer_id("ABC12345DE-A\n").is_err());
        assert!(validate_customer_id("xABC12345DE-A").is_err());
    }

    #[test]
    fn test_unicode_decimal_digits_are_digits() {
        // U+0661..U+0665 ARABIC-INDIC DIGITS
        assert!(validate_customer_id("ABC\u{661}\u{662}\u{663}\u{664}\u{665}DE-A").is_ok());
        assert!(validate_sku("ABC_DEF_\u{661}\u{662}").is_ok());

        // Still a full match: digits in letter slots and trailing newlines fail
        assert!(validate_customer_id("ABC\u{661}\u{662}\u{663}\u{664}\u{665}DE-A\n").is_err());
        assert!(validate_sku("\u{661}BC_DEF_21").is_err());
    }

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("ABC_DEF_21").is_ok());
        assert!(validate_sku("WWW_BIL_77").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("abc_def_21").is_err());
        assert!(validate_sku("ABC-DEF-21").is_err());
        assert!(validate_sku("ABC_DEF_2").is_err());
        assert!(validate_sku("ABC_DEF_211").is_err());
        assert!(validate_sku("AB_DEF_21").is_err());
        assert!(validate_sku(" ABC_DEF_21").is_err());
    }

    #[test]
    fn test_validate_sku_error_kind() {
        assert!(matches!(
            validate_sku(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_sku("nope"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(555_551).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(i64::MIN).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(20_000).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    proptest! {
        #[test]
        fn customer_ids_matching_the_pattern_are_accepted(
            raw in "[A-Za-z]{3}[0-9]{5}[A-Za-z]{2}-[AQ]"
        ) {
            prop_assert!(validate_customer_id(&raw).is_ok());
        }

        #[test]
        fn skus_matching_the_pattern_are_accepted(raw in "[A-Z]{3}_[A-Z]{3}_[0-9]{2}") {
            prop_assert!(validate_sku(&raw).is_ok());
        }

        #[test]
        fn lower_case_skus_are_rejected(raw in "[a-z]{3}_[a-z]{3}_[0-9]{2}") {
            prop_assert!(validate_sku(&raw).is_err());
        }

        #[test]
        fn non_positive_quantities_are_rejected(qty in i64::MIN..=0i64) {
            prop_assert!(validate_quantity(qty).is_err());
        }
    }
}

//! # Catalog / Inventory Fixture
//!
//! Seeds the read-only catalog and inventory the cart borrows.
//!
//! ## File Format
//! ```json
//! [
//!   { "sku": "ABC_DEF_21", "description": "Widget", "price_cents": 1000, "available": 100 },
//!   { "sku": "ZZZ_BOB_77", "description": "Gadget", "price_cents": 2000, "available": 200 }
//! ]
//! ```
//!
//! `sku` and `available` deserialize through the cart-core validators, so a
//! malformed SKU, a zero / fractional / quoted stock level is rejected here.

use std::fs;
use std::path::{Path, PathBuf};

use cart_core::{Catalog, CatalogEntry, Inventory, Quantity, Sku, ValidationError};
use serde::Deserialize;
use tracing::debug;

/// Built-in reference products: (sku, description, price in cents, available).
const REFERENCE_ROWS: &[(&str, &str, i64, i64)] = &[
    ("ABC_DEF_21", "Widget", 1_000, 100),
    ("ZZZ_BOB_77", "Gadget", 2_000, 200),
    ("XXX_ROB_77", "Cosa", 1_500, 300),
    ("YYY_JIL_77", "Stuff", 20_000, 400),
    ("WWW_BIL_77", "Cool stuff", 10, 500),
];

/// One product line of a fixture file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureRow {
    pub sku: Sku,
    pub description: String,
    pub price_cents: i64,
    pub available: Quantity,
}

/// A seeded catalog and its inventory.
#[derive(Debug)]
pub struct Fixture {
    pub catalog: Catalog,
    pub inventory: Inventory,
}

impl Fixture {
    /// The five-product reference fixture.
    pub fn reference() -> Result<Self, FixtureError> {
        let rows = REFERENCE_ROWS
            .iter()
            .map(|&(sku, description, price_cents, available)| -> Result<FixtureRow, ValidationError> {
                Ok(FixtureRow {
                    sku: Sku::parse(sku)?,
                    description: description.to_string(),
                    price_cents,
                    available: Quantity::new(available)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }

    /// Reads a JSON fixture file.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        debug!(path = %path.display(), "Reading fixture");
        let json = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let rows: Vec<FixtureRow> = serde_json::from_str(json)?;
        Self::from_rows(rows)
    }

    pub fn from_rows(rows: Vec<FixtureRow>) -> Result<Self, FixtureError> {
        let mut catalog = Catalog::new();
        let mut inventory = Inventory::new();

        for row in rows {
            inventory.insert(row.sku.clone(), row.available)?;
            catalog.insert(CatalogEntry::new(row.sku, row.description, row.price_cents)?)?;
        }

        debug!(products = catalog.len(), "Fixture seeded");
        Ok(Fixture { catalog, inventory })
    }
}

/// Fixture loading errors.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fixture: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid fixture row: {0}")]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_fixture() {
        let fixture = Fixture::reference().unwrap();
        assert_eq!(fixture.catalog.len(), 5);
        assert_eq!(fixture.inventory.len(), 5);

        let gadget = Sku::parse("ZZZ_BOB_77").unwrap();
        assert_eq!(fixture.catalog.get(&gadget).unwrap().price().cents(), 2_000);
        assert_eq!(fixture.inventory.available(&gadget).unwrap().get(), 200);
    }

    #[test]
    fn test_from_json() {
        let fixture = Fixture::from_json(
            r#"[{"sku": "ABC_DEF_21", "description": "Widget", "price_cents": 1000, "available": 100}]"#,
        )
        .unwrap();

        let widget = Sku::parse("ABC_DEF_21").unwrap();
        assert!(fixture.catalog.has_sku(&widget));
        assert_eq!(fixture.inventory.available(&widget).unwrap().get(), 100);
    }

    #[test]
    fn test_from_json_rejects_malformed_rows() {
        let cases = [
            r#"[{"sku": "abc", "description": "x", "price_cents": 1, "available": 1}]"#,
            r#"[{"sku": 7, "description": "x", "price_cents": 1, "available": 1}]"#,
            r#"[{"sku": "ABC_DEF_21", "description": "x", "price_cents": 1, "available": 0}]"#,
            r#"[{"sku": "ABC_DEF_21", "description": "x", "price_cents": 1, "available": 2.5}]"#,
            r#"[{"sku": "ABC_DEF_21", "description": "x", "price_cents": 1.5, "available": 1}]"#,
            r#"[{"sku": "ABC_DEF_21", "description": "x", "price_cents": 1}]"#,
        ];

        for json in cases {
            assert!(
                matches!(Fixture::from_json(json), Err(FixtureError::Parse(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_negative_price_and_duplicates_are_invalid() {
        let negative =
            r#"[{"sku": "ABC_DEF_21", "description": "x", "price_cents": -1, "available": 1}]"#;
        assert!(matches!(
            Fixture::from_json(negative),
            Err(FixtureError::Invalid(ValidationError::Negative { .. }))
        ));

        let duplicate = r#"[
            {"sku": "ABC_DEF_21", "description": "x", "price_cents": 1, "available": 1},
            {"sku": "ABC_DEF_21", "description": "y", "price_cents": 2, "available": 2}
        ]"#;
        assert!(matches!(
            Fixture::from_json(duplicate),
            Err(FixtureError::Invalid(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Fixture::load(Path::new("/nonexistent/cart-fixture.json")).unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }
}

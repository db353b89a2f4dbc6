//! # Reference Checkout Scenario
//!
//! ```text
//! add    ABC_DEF_21 × 2
//! add    ZZZ_BOB_77 × 199
//! add    ABC_DEF_21 × 1     → {ABC_DEF_21: 3, ZZZ_BOB_77: 199}
//! remove ABC_DEF_21         → {ZZZ_BOB_77: 199}
//! update ZZZ_BOB_77 = 10    → {ZZZ_BOB_77: 10}
//! total                     → $200.00
//! ```

use cart_core::{Cart, CartItems, CartResult, CartTotals, CustomerId};
use serde::Serialize;
use tracing::info;

use crate::fixture::Fixture;

/// A single cart call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Add { sku: &'static str, quantity: i64 },
    Remove { sku: &'static str },
    Update { sku: &'static str, quantity: i64 },
}

pub const REFERENCE_STEPS: &[Step] = &[
    Step::Add { sku: "ABC_DEF_21", quantity: 2 },
    Step::Add { sku: "ZZZ_BOB_77", quantity: 199 },
    Step::Add { sku: "ABC_DEF_21", quantity: 1 },
    Step::Remove { sku: "ABC_DEF_21" },
    Step::Update { sku: "ZZZ_BOB_77", quantity: 10 },
];

/// What the demo prints when the scenario completes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    #[serde(flatten)]
    pub totals: CartTotals,
    pub total: String,
    pub items: CartItems,
}

/// Opens a cart for `customer_id` and applies `steps` in order.
///
/// Stops at the first failing step.
pub fn run(customer_id: &CustomerId, fixture: &Fixture, steps: &[Step]) -> CartResult<CheckoutSummary> {
    let mut cart = Cart::new(customer_id.as_str(), &fixture.catalog, &fixture.inventory)?;

    for step in steps {
        apply(&mut cart, step)?;
        info!(cart_id = %cart.id(), ?step, items = cart.item_count(), "Step applied");
    }

    let totals = cart.totals()?;
    let total = cart.total_cost()?.to_string();
    info!(cart_id = %cart.id(), %total, "Checkout complete");

    Ok(CheckoutSummary {
        totals,
        total,
        items: cart.snapshot_items(),
    })
}

fn apply(cart: &mut Cart<'_>, step: &Step) -> CartResult<()> {
    match *step {
        Step::Add { sku, quantity } => cart.add_item(sku, quantity),
        Step::Remove { sku } => cart.remove_item(sku).map(|_| ()),
        Step::Update { sku, quantity } => cart.update_item_quantity(sku, quantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::{CartError, Quantity, Sku};

    fn customer() -> CustomerId {
        CustomerId::parse("ABC12345DE-A").unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let fixture = Fixture::reference().unwrap();
        let summary = run(&customer(), &fixture, REFERENCE_STEPS).unwrap();

        assert_eq!(summary.totals.total_cents, 20_000);
        assert_eq!(summary.total, "$200.00");

        let expected: CartItems = [(Sku::parse("ZZZ_BOB_77").unwrap(), Quantity::new(10).unwrap())]
            .into_iter()
            .collect();
        assert_eq!(summary.items, expected);
    }

    #[test]
    fn test_summary_json_shape() {
        let fixture = Fixture::reference().unwrap();
        let summary = run(&customer(), &fixture, REFERENCE_STEPS).unwrap();

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalCents"], 20_000);
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["items"]["ZZZ_BOB_77"], 10);
    }

    #[test]
    fn test_scenario_stops_at_first_failure() {
        let fixture = Fixture::reference().unwrap();
        let steps = [
            Step::Add { sku: "ZZZ_BOB_77", quantity: 1 },
            Step::Add { sku: "ZZZ_BOB_77", quantity: 555_551 },
        ];

        let err = run(&customer(), &fixture, &steps).unwrap_err();
        assert!(matches!(err, CartError::InsufficientInventory { .. }));
    }
}

//! Cart line items and their wire encoding.

use medisync_core::{MedicineId, Price};
use serde::{Deserialize, Serialize};

/// One product line in the sales cart.
///
/// The line total is never stored - [`LineItem::line_total`] recomputes it
/// from the unit price and quantity on every call, so no stale value can
/// survive a mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: MedicineId,
    pub name: String,
    pub unit_price: Price,
    /// Always at least 1; a line that would drop to zero is removed instead.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line holding a single unit.
    #[must_use]
    pub fn single(id: MedicineId, name: String, unit_price: Price) -> Self {
        Self {
            id,
            name,
            unit_price,
            quantity: 1,
        }
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Wire encoding of a [`LineItem`] in the persisted snapshot.
///
/// Field names follow the persisted layout (`unitPrice`, `lineTotal`).
/// `lineTotal` is written for display consumers reading the raw snapshot but
/// ignored on load - the in-memory line recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRecord {
    pub id: MedicineId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    #[serde(default)]
    pub line_total: Price,
}

impl From<&LineItem> for LineItemRecord {
    fn from(line: &LineItem) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

impl From<LineItemRecord> for LineItem {
    fn from(record: LineItemRecord) -> Self {
        // The stored lineTotal is dropped here on purpose.
        Self {
            id: record.id,
            name: record.name,
            unit_price: record.unit_price,
            quantity: record.quantity,
        }
    }
}

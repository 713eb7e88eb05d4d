//! # Items
//!
//! An item is a quantity of goods or services procured under exactly one
//! lot, named through `relatedLot`.

use serde::{Deserialize, Serialize};

use crate::value::{Classification, Unit};

/// A procured good or service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Item identifier, unique within the tender. Minted by the
    /// lifecycle engine; any caller-supplied value is discarded.
    pub id: String,
    /// The lot this item belongs to. Must name an existing lot id.
    pub related_lot: String,
    /// What the item is.
    pub description: String,
    /// Primary classification of the item.
    pub classification: Classification,
    /// Further classifications, where one scheme is not enough.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_classifications: Vec<Classification>,
    /// How much of the item is procured.
    pub quantity: f64,
    /// Unit of measure for the quantity.
    pub unit: Unit,
}

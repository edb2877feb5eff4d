//! Load (delivery assignment) model.
//!
//! A load assigns one driver to deliver one or more grade/quantity line
//! items to one site. Loads are created in `Planned` state and transition
//! once, irreversibly, to `Delivered` when proof of delivery is attached.
//! The transition itself lives in [`crate::planning::mark_delivered`].

use serde::{Deserialize, Serialize};

use super::Grade;

/// Lifecycle state of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    /// Built and assigned, not yet delivered.
    Planned,
    /// Delivered with proof attached. Terminal.
    Delivered,
}

/// A grade/quantity line item on a load.
///
/// Ephemeral during assembly — items exist as a plain list until the load
/// is finalized, then by value inside the [`Load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadItem {
    /// Fuel grade.
    pub grade: Grade,
    /// Quantity in gallons. Must be positive.
    pub quantity_gal: u32,
}

impl LoadItem {
    /// Creates a new line item.
    pub fn new(grade: Grade, quantity_gal: u32) -> Self {
        Self {
            grade,
            quantity_gal,
        }
    }
}

/// A delivery assignment: one driver, one site, one or more line items.
///
/// Invariant: the summed item quantity never exceeds
/// [`crate::planning::CAPACITY_CEILING_GAL`]. Enforced at assembly time by
/// [`crate::planning::add_item`] and re-checked on finalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Unique load identifier.
    pub id: String,
    /// Destination site ID.
    pub site_id: String,
    /// Assigned driver ID.
    pub driver_id: String,
    /// Line items, in the order they were added.
    pub items: Vec<LoadItem>,
    /// Lifecycle state.
    pub status: LoadStatus,
    /// Creation time (epoch ms).
    pub created_ms: i64,
    /// Delivery time (epoch ms). Set only on the transition to `Delivered`.
    pub delivered_ms: Option<i64>,
    /// Proof-of-delivery reference (e.g. an attachment name), recorded at
    /// delivery time.
    pub pod_ref: Option<String>,
}

impl Load {
    /// Total quantity across all line items (gallons).
    pub fn total_gallons(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity_gal)).sum()
    }

    /// Total quantity of a single grade (gallons).
    pub fn gallons_of_grade(&self, grade: Grade) -> u64 {
        self.items
            .iter()
            .filter(|i| i.grade == grade)
            .map(|i| u64::from(i.quantity_gal))
            .sum()
    }

    /// Whether this load has been delivered.
    pub fn is_delivered(&self) -> bool {
        self.status == LoadStatus::Delivered
    }

    /// Number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_load() -> Load {
        Load {
            id: "L1".into(),
            site_id: "S1".into(),
            driver_id: "D1".into(),
            items: vec![
                LoadItem::new(Grade::Regular, 5_000),
                LoadItem::new(Grade::Diesel, 3_000),
                LoadItem::new(Grade::Regular, 500),
            ],
            status: LoadStatus::Planned,
            created_ms: 1_700_000_000_000,
            delivered_ms: None,
            pod_ref: None,
        }
    }

    #[test]
    fn test_load_totals() {
        let load = sample_load();
        assert_eq!(load.total_gallons(), 8_500);
        assert_eq!(load.gallons_of_grade(Grade::Regular), 5_500);
        assert_eq!(load.gallons_of_grade(Grade::Diesel), 3_000);
        assert_eq!(load.gallons_of_grade(Grade::Premium), 0);
        assert_eq!(load.item_count(), 3);
    }

    #[test]
    fn test_load_status() {
        let load = sample_load();
        assert!(!load.is_delivered());
        assert!(load.delivered_ms.is_none());
    }

    #[test]
    fn test_load_serializes() {
        let load = sample_load();
        let json = serde_json::to_string(&load).expect("serialize");
        assert!(json.contains("\"Planned\""));
        let back: Load = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, load);
    }
}

//! Load planning: line-item accumulation with a capacity guard.
//!
//! The planning operations are pure — they never mutate their inputs, and
//! on error the caller's state is untouched. A presentation layer holds the
//! working item list, calls [`add_item`] per form submit, and calls
//! [`finalize`] once a site and driver are chosen.
//!
//! # Capacity semantics
//!
//! Quantities and the ceiling are integers (gallons). The guard is
//! `sum > ceiling`: a load totaling exactly [`CAPACITY_CEILING_GAL`] is
//! accepted, one gallon more is rejected.

use crate::clock;
use crate::error::{DispatchError, DispatchResult};
use crate::models::{Driver, Grade, Load, LoadItem, LoadStatus, Site};

/// Maximum total gallons permitted on a single load.
pub const CAPACITY_CEILING_GAL: u64 = 8_800;

fn total_gal(items: &[LoadItem]) -> u64 {
    items.iter().map(|i| u64::from(i.quantity_gal)).sum()
}

/// Appends a line item to a candidate load, enforcing the capacity ceiling.
///
/// Returns a new list with the item appended; the input list is never
/// modified and same-grade items are never merged.
///
/// # Errors
/// - [`DispatchError::InvalidInput`] if `quantity_gal` is zero.
/// - [`DispatchError::Capacity`] if the running total would strictly exceed
///   [`CAPACITY_CEILING_GAL`].
pub fn add_item(
    current: &[LoadItem],
    grade: Grade,
    quantity_gal: u32,
) -> DispatchResult<Vec<LoadItem>> {
    if quantity_gal == 0 {
        return Err(DispatchError::invalid_input("quantity must be positive"));
    }

    let total = total_gal(current) + u64::from(quantity_gal);
    if total > CAPACITY_CEILING_GAL {
        return Err(DispatchError::Capacity {
            total_gal: total,
            ceiling_gal: CAPACITY_CEILING_GAL,
        });
    }

    let mut items = current.to_vec();
    items.push(LoadItem::new(grade, quantity_gal));
    Ok(items)
}

/// Gallons still available under the ceiling for the given items.
///
/// Saturates at zero; a list already over the ceiling (which the guarded
/// operations never produce) reads as no remaining capacity.
pub fn remaining_capacity_gal(items: &[LoadItem]) -> u64 {
    CAPACITY_CEILING_GAL.saturating_sub(total_gal(items))
}

/// Finalizes a candidate load against a site and driver.
///
/// On success returns a `Planned` load with a fresh ID and the current
/// timestamp. The item list is copied; the caller's list is untouched.
///
/// # Errors
/// [`DispatchError::Validation`] if the site or driver is unset or the item
/// list is empty, citing the missing field. [`DispatchError::Capacity`] if
/// the items violate the ceiling invariant (possible only when the caller
/// assembled the list without [`add_item`]).
pub fn finalize(
    site: Option<&Site>,
    driver: Option<&Driver>,
    items: &[LoadItem],
) -> DispatchResult<Load> {
    let site = site.ok_or_else(|| DispatchError::validation("site is required"))?;
    let driver = driver.ok_or_else(|| DispatchError::validation("driver is required"))?;
    if items.is_empty() {
        return Err(DispatchError::validation("load has no items"));
    }

    let total = total_gal(items);
    if total > CAPACITY_CEILING_GAL {
        return Err(DispatchError::Capacity {
            total_gal: total,
            ceiling_gal: CAPACITY_CEILING_GAL,
        });
    }

    Ok(Load {
        id: clock::next_id("load"),
        site_id: site.id.clone(),
        driver_id: driver.id.clone(),
        items: items.to_vec(),
        status: LoadStatus::Planned,
        created_ms: clock::now_ms(),
        delivered_ms: None,
        pod_ref: None,
    })
}

/// Transitions a load to `Delivered` with the current timestamp.
///
/// Pure transform: returns a copy, leaving the input untouched. The
/// transition is one-way — delivering an already-delivered load is an
/// error, not a silent no-op.
///
/// # Errors
/// [`DispatchError::Validation`] if the load is already `Delivered`.
pub fn mark_delivered(load: &Load) -> DispatchResult<Load> {
    if load.is_delivered() {
        return Err(DispatchError::validation(format!(
            "load '{}' is already delivered",
            load.id
        )));
    }

    let mut delivered = load.clone();
    delivered.status = LoadStatus::Delivered;
    delivered.delivered_ms = Some(clock::now_ms());
    Ok(delivered)
}

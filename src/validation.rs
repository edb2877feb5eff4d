//! Entity integrity checks.
//!
//! Invoked at the store boundary before any entity enters the collection:
//! - Non-empty site and driver names
//! - Positive tank capacities
//! - Load invariant: at least one item, positive quantities, total within
//!   the capacity ceiling
//!
//! All checks return the first problem found; the planning operations in
//! [`crate::planning`] guard the same invariants incrementally during
//! assembly, so these mostly catch hand-built entities.

use crate::error::{DispatchError, DispatchResult};
use crate::models::{Driver, Load, Site, Tank};
use crate::planning::CAPACITY_CEILING_GAL;

/// Validates a site: non-empty name and well-formed tanks.
pub fn validate_site(site: &Site) -> DispatchResult<()> {
    if site.name.trim().is_empty() {
        return Err(DispatchError::validation("site name is required"));
    }
    for tank in &site.tanks {
        validate_tank(tank)?;
    }
    Ok(())
}

/// Validates a tank: positive capacity.
pub fn validate_tank(tank: &Tank) -> DispatchResult<()> {
    if tank.capacity_gal == 0 {
        return Err(DispatchError::validation(format!(
            "tank '{}' capacity must be positive",
            tank.id
        )));
    }
    Ok(())
}

/// Validates a driver: non-empty name.
pub fn validate_driver(driver: &Driver) -> DispatchResult<()> {
    if driver.name.trim().is_empty() {
        return Err(DispatchError::validation("driver name is required"));
    }
    Ok(())
}

/// Validates a load: non-empty items, positive quantities, total within
/// the capacity ceiling.
pub fn validate_load(load: &Load) -> DispatchResult<()> {
    if load.items.is_empty() {
        return Err(DispatchError::validation("load has no items"));
    }
    if load.items.iter().any(|i| i.quantity_gal == 0) {
        return Err(DispatchError::invalid_input("quantity must be positive"));
    }
    let total = load.total_gallons();
    if total > CAPACITY_CEILING_GAL {
        return Err(DispatchError::Capacity {
            total_gal: total,
            ceiling_gal: CAPACITY_CEILING_GAL,
        });
    }
    Ok(())
}

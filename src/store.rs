//! In-memory dispatch store.
//!
//! `DispatchStore` is the single owned state container for the whole
//! application: sites, drivers, and loads. The presentation layer owns one
//! instance and routes every mutation through the named operations here —
//! never through direct field writes. Nothing persists; the store is
//! rebuilt from scratch on every process start.
//!
//! Mutating operations on unknown IDs fail with
//! [`DispatchError::NotFound`] rather than silently doing nothing, and
//! `add_*` operations validate their entity before it enters the
//! collection, so the store never holds an invalid record.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock;
use crate::error::{DispatchError, DispatchResult};
use crate::eta::{self, Estimate};
use crate::models::{Driver, GeoPoint, Load, LoadItem, Site, Tank};
use crate::planning;
use crate::validation;

/// Owned in-memory state for the dispatch application.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DispatchStore {
    sites: Vec<Site>,
    drivers: Vec<Driver>,
    loads: Vec<Load>,
}

impl DispatchStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Sites -----------------------------------------------------------

    /// Adds a site, minting an ID when the caller supplies none.
    ///
    /// Returns the site's ID.
    ///
    /// # Errors
    /// [`DispatchError::Validation`] for an empty name, an ill-formed tank,
    /// or a duplicate ID.
    pub fn add_site(&mut self, mut site: Site) -> DispatchResult<String> {
        validation::validate_site(&site)?;
        if site.id.is_empty() {
            site.id = clock::next_id("site");
        }
        self.ensure_unique_site_id(&site.id)?;

        debug!(site_id = %site.id, name = %site.name, "site added");
        let id = site.id.clone();
        self.sites.push(site);
        Ok(id)
    }

    /// Replaces an existing site wholesale (matched by ID).
    pub fn update_site(&mut self, site: Site) -> DispatchResult<()> {
        validation::validate_site(&site)?;
        let slot = self
            .sites
            .iter_mut()
            .find(|s| s.id == site.id)
            .ok_or_else(|| DispatchError::not_found(format!("site '{}'", site.id)))?;
        debug!(site_id = %site.id, "site updated");
        *slot = site;
        Ok(())
    }

    /// Removes a site, returning it.
    pub fn delete_site(&mut self, id: &str) -> DispatchResult<Site> {
        let idx = self
            .sites
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| DispatchError::not_found(format!("site '{id}'")))?;
        debug!(site_id = %id, "site deleted");
        Ok(self.sites.remove(idx))
    }

    /// Adds a tank to an existing site, minting a tank ID when the caller
    /// supplies none. Returns the tank's ID.
    pub fn add_tank_to_site(&mut self, site_id: &str, mut tank: Tank) -> DispatchResult<String> {
        validation::validate_tank(&tank)?;
        let site = self
            .sites
            .iter_mut()
            .find(|s| s.id == site_id)
            .ok_or_else(|| DispatchError::not_found(format!("site '{site_id}'")))?;
        if tank.id.is_empty() {
            tank.id = clock::next_id("tank");
        }
        if site.tanks.iter().any(|t| t.id == tank.id) {
            return Err(DispatchError::validation(format!(
                "duplicate tank id '{}'",
                tank.id
            )));
        }

        debug!(site_id = %site_id, tank_id = %tank.id, "tank added");
        let id = tank.id.clone();
        site.tanks.push(tank);
        Ok(id)
    }

    /// Looks up a site by ID.
    pub fn site(&self, id: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.id == id)
    }

    /// All sites, in insertion order.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    // ---- Drivers ---------------------------------------------------------

    /// Adds a driver, minting an ID when the caller supplies none.
    ///
    /// Returns the driver's ID.
    pub fn add_driver(&mut self, mut driver: Driver) -> DispatchResult<String> {
        validation::validate_driver(&driver)?;
        if driver.id.is_empty() {
            driver.id = clock::next_id("driver");
        }
        self.ensure_unique_driver_id(&driver.id)?;

        debug!(driver_id = %driver.id, name = %driver.name, "driver added");
        let id = driver.id.clone();
        self.drivers.push(driver);
        Ok(id)
    }

    /// Replaces an existing driver wholesale (matched by ID).
    pub fn update_driver(&mut self, driver: Driver) -> DispatchResult<()> {
        validation::validate_driver(&driver)?;
        let slot = self
            .drivers
            .iter_mut()
            .find(|d| d.id == driver.id)
            .ok_or_else(|| DispatchError::not_found(format!("driver '{}'", driver.id)))?;
        debug!(driver_id = %driver.id, "driver updated");
        *slot = driver;
        Ok(())
    }

    /// Removes a driver, returning them.
    pub fn delete_driver(&mut self, id: &str) -> DispatchResult<Driver> {
        let idx = self
            .drivers
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| DispatchError::not_found(format!("driver '{id}'")))?;
        debug!(driver_id = %id, "driver deleted");
        Ok(self.drivers.remove(idx))
    }

    /// Updates a driver's last known map position.
    pub fn update_driver_position(&mut self, id: &str, position: GeoPoint) -> DispatchResult<()> {
        if !position.is_finite() {
            return Err(DispatchError::invalid_input(
                "coordinates must be finite numbers",
            ));
        }
        let driver = self
            .drivers
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| DispatchError::not_found(format!("driver '{id}'")))?;
        driver.position = Some(position);
        Ok(())
    }

    /// Looks up a driver by ID.
    pub fn driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    /// All drivers, in insertion order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    // ---- Loads -----------------------------------------------------------

    /// Adds a pre-built load, verifying its site and driver references and
    /// the capacity invariant. Mints an ID when the caller supplies none.
    ///
    /// Returns the load's ID.
    pub fn add_load(&mut self, mut load: Load) -> DispatchResult<String> {
        validation::validate_load(&load)?;
        if self.site(&load.site_id).is_none() {
            return Err(DispatchError::not_found(format!("site '{}'", load.site_id)));
        }
        if self.driver(&load.driver_id).is_none() {
            return Err(DispatchError::not_found(format!(
                "driver '{}'",
                load.driver_id
            )));
        }
        if load.id.is_empty() {
            load.id = clock::next_id("load");
        }
        if self.load(&load.id).is_some() {
            return Err(DispatchError::validation(format!(
                "duplicate load id '{}'",
                load.id
            )));
        }

        debug!(
            load_id = %load.id,
            site_id = %load.site_id,
            driver_id = %load.driver_id,
            total_gal = load.total_gallons(),
            "load added"
        );
        let id = load.id.clone();
        self.loads.push(load);
        Ok(id)
    }

    /// Finalizes a candidate item list against a site and driver already in
    /// the store, and records the resulting planned load.
    ///
    /// Returns the new load's ID.
    pub fn plan_load(
        &mut self,
        site_id: &str,
        driver_id: &str,
        items: &[LoadItem],
    ) -> DispatchResult<String> {
        let site = self
            .site(site_id)
            .ok_or_else(|| DispatchError::not_found(format!("site '{site_id}'")))?;
        let driver = self
            .driver(driver_id)
            .ok_or_else(|| DispatchError::not_found(format!("driver '{driver_id}'")))?;

        let load = planning::finalize(Some(site), Some(driver), items)?;
        debug!(
            load_id = %load.id,
            site_id = %site_id,
            driver_id = %driver_id,
            total_gal = load.total_gallons(),
            "load planned"
        );
        let id = load.id.clone();
        self.loads.push(load);
        Ok(id)
    }

    /// Marks a load delivered, recording the proof-of-delivery reference.
    ///
    /// # Errors
    /// [`DispatchError::NotFound`] for an unknown load,
    /// [`DispatchError::Validation`] if the load is already delivered.
    pub fn mark_load_delivered(
        &mut self,
        id: &str,
        pod_ref: impl Into<String>,
    ) -> DispatchResult<&Load> {
        let idx = self
            .loads
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| DispatchError::not_found(format!("load '{id}'")))?;

        let mut delivered = planning::mark_delivered(&self.loads[idx])?;
        delivered.pod_ref = Some(pod_ref.into());
        debug!(load_id = %id, "load delivered");
        self.loads[idx] = delivered;
        Ok(&self.loads[idx])
    }

    /// Looks up a load by ID.
    pub fn load(&self, id: &str) -> Option<&Load> {
        self.loads.iter().find(|l| l.id == id)
    }

    /// All loads, in insertion order.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Loads destined for a given site.
    pub fn loads_for_site(&self, site_id: &str) -> Vec<&Load> {
        self.loads.iter().filter(|l| l.site_id == site_id).collect()
    }

    /// Loads assigned to a given driver.
    pub fn loads_for_driver(&self, driver_id: &str) -> Vec<&Load> {
        self.loads
            .iter()
            .filter(|l| l.driver_id == driver_id)
            .collect()
    }

    /// Loads not yet delivered.
    pub fn planned_loads(&self) -> Vec<&Load> {
        self.loads.iter().filter(|l| !l.is_delivered()).collect()
    }

    fn ensure_unique_site_id(&self, id: &str) -> DispatchResult<()> {
        if self.site(id).is_some() {
            return Err(DispatchError::validation(format!("duplicate site id '{id}'")));
        }
        Ok(())
    }

    fn ensure_unique_driver_id(&self, id: &str) -> DispatchResult<()> {
        if self.driver(id).is_some() {
            return Err(DispatchError::validation(format!(
                "duplicate driver id '{id}'"
            )));
        }
        Ok(())
    }

    // ---- ETA -------------------------------------------------------------

    /// Estimates distance and travel time from a driver's last known
    /// position to a site's coordinate.
    ///
    /// # Errors
    /// [`DispatchError::NotFound`] for an unknown driver or site,
    /// [`DispatchError::Validation`] when either has no coordinate on file.
    pub fn eta_to_site(
        &self,
        driver_id: &str,
        site_id: &str,
        speed_kmh: f64,
    ) -> DispatchResult<Estimate> {
        let driver = self
            .driver(driver_id)
            .ok_or_else(|| DispatchError::not_found(format!("driver '{driver_id}'")))?;
        let site = self
            .site(site_id)
            .ok_or_else(|| DispatchError::not_found(format!("site '{site_id}'")))?;

        let from = driver.position.ok_or_else(|| {
            DispatchError::validation(format!("driver '{driver_id}' has no known position"))
        })?;
        let to = site.location.ok_or_else(|| {
            DispatchError::validation(format!("site '{site_id}' has no coordinate"))
        })?;

        eta::estimate(from, to, speed_kmh)
    }
}

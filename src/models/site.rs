//! Fueling site and tank models.
//!
//! A site is a delivery destination: a named location with contact details,
//! an optional map coordinate, and the fuel tanks installed there. Tanks
//! are owned exclusively by their site.

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Fuel grade carried by tanks and load line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    Regular,
    Premium,
    Diesel,
}

impl Grade {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Regular => "Regular",
            Grade::Premium => "Premium",
            Grade::Diesel => "Diesel",
        }
    }
}

/// A fuel tank installed at a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    /// Unique tank identifier.
    pub id: String,
    /// Fuel grade this tank holds.
    pub grade: Grade,
    /// Tank capacity in gallons. Must be positive.
    pub capacity_gal: u32,
}

impl Tank {
    /// Creates a new tank.
    pub fn new(id: impl Into<String>, grade: Grade, capacity_gal: u32) -> Self {
        Self {
            id: id.into(),
            grade,
            capacity_gal,
        }
    }
}

/// A fueling site (delivery destination).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Unique site identifier.
    pub id: String,
    /// Site name. Must be non-empty.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Map coordinate, used for ETA estimation and marker display.
    pub location: Option<GeoPoint>,
    /// Tanks installed at this site, in display order.
    pub tanks: Vec<Tank>,
}

impl Site {
    /// Creates a new site with the given ID and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            phone: None,
            location: None,
            tanks: Vec::new(),
        }
    }

    /// Sets the street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the contact phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the map coordinate.
    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Adds a tank.
    pub fn with_tank(mut self, tank: Tank) -> Self {
        self.tanks.push(tank);
        self
    }

    /// Number of tanks at this site.
    pub fn tank_count(&self) -> usize {
        self.tanks.len()
    }

    /// Total installed capacity across all tanks (gallons).
    pub fn total_tank_capacity_gal(&self) -> u64 {
        self.tanks.iter().map(|t| u64::from(t.capacity_gal)).sum()
    }

    /// Tanks holding the given grade, in display order.
    pub fn tanks_of_grade(&self, grade: Grade) -> Vec<&Tank> {
        self.tanks.iter().filter(|t| t.grade == grade).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_builder() {
        let site = Site::new("S1", "Northside Shell")
            .with_address("4200 Hamilton Ave")
            .with_phone("555-0142")
            .with_location(GeoPoint::new(-84.54, 39.16))
            .with_tank(Tank::new("T1", Grade::Regular, 12_000))
            .with_tank(Tank::new("T2", Grade::Premium, 8_000))
            .with_tank(Tank::new("T3", Grade::Diesel, 10_000));

        assert_eq!(site.id, "S1");
        assert_eq!(site.name, "Northside Shell");
        assert_eq!(site.phone.as_deref(), Some("555-0142"));
        assert_eq!(site.tank_count(), 3);
        assert_eq!(site.total_tank_capacity_gal(), 30_000);
    }

    #[test]
    fn test_tanks_of_grade() {
        let site = Site::new("S1", "Depot")
            .with_tank(Tank::new("T1", Grade::Regular, 12_000))
            .with_tank(Tank::new("T2", Grade::Regular, 6_000))
            .with_tank(Tank::new("T3", Grade::Diesel, 10_000));

        let regular = site.tanks_of_grade(Grade::Regular);
        assert_eq!(regular.len(), 2);
        assert_eq!(regular[0].id, "T1");
        assert!(site.tanks_of_grade(Grade::Premium).is_empty());
    }

    #[test]
    fn test_grade_labels() {
        assert_eq!(Grade::Regular.label(), "Regular");
        assert_eq!(Grade::Premium.label(), "Premium");
        assert_eq!(Grade::Diesel.label(), "Diesel");
    }
}

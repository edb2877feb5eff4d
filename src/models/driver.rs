//! Driver roster model.

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// A delivery driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Unique driver identifier.
    pub id: String,
    /// Driver name. Must be non-empty.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Last known map position, if any. Drivers without a position cannot
    /// be ETA-estimated.
    pub position: Option<GeoPoint>,
}

impl Driver {
    /// Creates a new driver with the given ID and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: String::new(),
            position: None,
        }
    }

    /// Sets the contact phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the last known map position.
    pub fn with_position(mut self, position: GeoPoint) -> Self {
        self.position = Some(position);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_builder() {
        let d = Driver::new("D1", "Ray Alvarez")
            .with_phone("555-0177")
            .with_position(GeoPoint::new(-84.51, 39.10));

        assert_eq!(d.id, "D1");
        assert_eq!(d.name, "Ray Alvarez");
        assert_eq!(d.phone, "555-0177");
        assert!(d.position.is_some());
    }

    #[test]
    fn test_driver_without_position() {
        let d = Driver::new("D2", "Sam Okafor");
        assert!(d.position.is_none());
        assert!(d.phone.is_empty());
    }
}

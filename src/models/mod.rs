//! Dispatch domain models.
//!
//! Core data types for a fuel-delivery operation: fueling sites with their
//! tanks, the driver roster, and delivery loads. All entities live purely
//! in memory — IDs are process-local and nothing outlives the process.
//!
//! # Relationships
//!
//! | Entity | Cardinality | Entity |
//! |--------|-------------|--------|
//! | Site | 1 — N | Tank |
//! | Load | N — 1 | Site |
//! | Load | N — 1 | Driver |
//! | Load | 1 — N | LoadItem (by value) |

mod driver;
mod geo;
mod load;
mod site;

pub use driver::Driver;
pub use geo::GeoPoint;
pub use load::{Load, LoadItem, LoadStatus};
pub use site::{Grade, Site, Tank};

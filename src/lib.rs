//! Dispatch domain library for a fuel-delivery operation.
//!
//! Provides the domain models, planning logic, and in-memory state container
//! behind a dispatch board: fueling sites and their tanks, a driver roster,
//! load assembly under a hard capacity ceiling, proof-of-delivery tracking,
//! and straight-line ETA estimation between a driver and a site.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Site`, `Tank`, `Grade`, `Driver`, `Load`,
//!   `LoadItem`, `LoadStatus`, `GeoPoint`
//! - **`planning`**: Load assembly — line-item accumulation with a capacity
//!   guard, finalization, delivery transition
//! - **`eta`**: Great-circle distance and travel-time estimates
//! - **`store`**: `DispatchStore`, the single owned state container all
//!   mutations route through
//! - **`validation`**: Entity integrity checks (names, capacities, load invariant)
//!
//! # Architecture
//!
//! This crate is the core of a single-user, single-threaded dispatch front
//! end. Nothing here persists or talks to the network: a presentation layer
//! owns one `DispatchStore`, collects user input, and calls into `planning`
//! and `eta` for the business rules and the numbers it displays.

pub mod clock;
pub mod error;
pub mod eta;
pub mod models;
pub mod planning;
pub mod store;
pub mod validation;

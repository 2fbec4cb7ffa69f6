//! Core types for Wayfarer: locations, items, and the validated world model.
//!
//! This crate defines the data model the engine plays on. A [`World`] is
//! built once from a [`WorldData`] source (usually a JSON file) and checked
//! for referential integrity before anything else gets to see it.

/// Error types used throughout the crate.
pub mod error;
/// Item definitions and name normalization.
pub mod item;
/// Locations and their identifiers.
pub mod location;
/// The raw on-disk schema for world files.
pub mod schema;
/// The validated world model that owns locations and items.
pub mod world;

/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export item types.
pub use item::{Item, normalize_name};
/// Re-export location types.
pub use location::{Location, LocationId};
/// Re-export schema types.
pub use schema::{ItemData, LocationData, WorldData};
/// Re-export the world model.
pub use world::World;

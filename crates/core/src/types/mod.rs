//! Core types for MediSync.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;

pub use id::MedicineId;
pub use price::Price;

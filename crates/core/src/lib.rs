//! MediSync Core - Shared types library.
//!
//! This crate provides common types used across all MediSync components:
//! - `pos` - Sales cart library behind the point-of-sale surface
//! - `cli` - Command-line tools for cart and inventory management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! terminal output. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Medicine identifiers and money amounts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

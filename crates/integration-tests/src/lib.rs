//! Integration tests for MediSync.
//!
//! The tests live in `tests/` and exercise the cart store end-to-end
//! against the real file-backed persistence: mutate in one "session",
//! reopen in another, and verify the snapshot round-trips.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p medisync-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Snapshot round-trips, wire format, recovery
//! - `cart_scenario` - Full sale flows through the store

#![cfg_attr(not(test), forbid(unsafe_code))]

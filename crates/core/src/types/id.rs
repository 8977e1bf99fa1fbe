//! Identifier type for medicines.
//!
//! Catalog identifiers are not uniformly numeric: seeded catalogs key
//! medicines by integer, imported ones by batch code. The id therefore
//! preserves whichever representation it was created with, and its JSON
//! encoding round-trips without changing type (a number stays a number, a
//! string stays a string).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a medicine in the catalog and the sales cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MedicineId {
    /// Numeric identifier (seeded catalogs).
    Number(i64),
    /// Text identifier (batch codes, imported catalogs).
    Text(String),
}

impl MedicineId {
    /// Parse a raw id, keeping integer input numeric.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse::<i64>()
            .map_or_else(|_| Self::Text(raw.to_owned()), Self::Number)
    }
}

impl fmt::Display for MedicineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for MedicineId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for MedicineId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for MedicineId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

//! Medicine catalog backing stock lookups.
//!
//! The cart never queries stock itself. Callers resolve a medicine here and
//! pass its stock level as the ceiling for an add, so the ceiling is always
//! fresh at the moment of the operation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use medisync_core::{MedicineId, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from catalog access.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to read inventory at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed inventory at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no medicine with id {0} in the inventory")]
    UnknownMedicine(MedicineId),
}

/// One medicine in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: MedicineId,
    pub name: String,
    pub unit_price: Price,
    /// Units currently available for sale.
    pub stock: u32,
}

/// Ordered medicine catalog, loaded from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    medicines: Vec<Medicine>,
}

impl Inventory {
    /// Create a catalog from a list of medicines.
    #[must_use]
    pub const fn new(medicines: Vec<Medicine>) -> Self {
        Self { medicines }
    }

    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Io` if the file cannot be read and
    /// `InventoryError::Malformed` if it does not parse as a catalog.
    pub fn load(path: &Path) -> Result<Self, InventoryError> {
        let text = fs::read_to_string(path).map_err(|source| InventoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| InventoryError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the catalog to a JSON file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Io` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), InventoryError> {
        let io_err = |source| InventoryError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        // Catalog serialization cannot fail: it is a list of plain records.
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| io_err(io::Error::other(e)))?;
        fs::write(path, text).map_err(io_err)
    }

    /// Look up a medicine by id.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::UnknownMedicine` if no entry matches.
    pub fn get(&self, id: &MedicineId) -> Result<&Medicine, InventoryError> {
        self.medicines
            .iter()
            .find(|medicine| &medicine.id == id)
            .ok_or_else(|| InventoryError::UnknownMedicine(id.clone()))
    }

    /// The medicines, in catalog order.
    #[must_use]
    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    /// Starter catalog written by `inventory seed`.
    #[must_use]
    pub fn starter() -> Self {
        Self::new(vec![
            Medicine {
                id: MedicineId::Number(7),
                name: "Aspirin".to_owned(),
                unit_price: Price::new(Decimal::new(250, 2)),
                stock: 10,
            },
            Medicine {
                id: MedicineId::Number(12),
                name: "Paracetamol".to_owned(),
                unit_price: Price::new(Decimal::new(120, 2)),
                stock: 40,
            },
            Medicine {
                id: MedicineId::Number(31),
                name: "Amoxicillin".to_owned(),
                unit_price: Price::new(Decimal::new(780, 2)),
                stock: 12,
            },
            Medicine {
                id: MedicineId::from("BN-4413"),
                name: "Ibuprofen".to_owned(),
                unit_price: Price::new(Decimal::new(310, 2)),
                stock: 25,
            },
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");

        let catalog = Inventory::starter();
        catalog.save(&path).unwrap();

        let loaded = Inventory::load(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("inventory.json");
        Inventory::starter().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_get_by_numeric_and_text_id() {
        let catalog = Inventory::starter();

        let aspirin = catalog.get(&MedicineId::Number(7)).unwrap();
        assert_eq!(aspirin.name, "Aspirin");
        assert_eq!(aspirin.stock, 10);

        let ibuprofen = catalog.get(&MedicineId::from("BN-4413")).unwrap();
        assert_eq!(ibuprofen.name, "Ibuprofen");
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = Inventory::starter();
        let err = catalog.get(&MedicineId::Number(404)).unwrap_err();
        assert!(matches!(err, InventoryError::UnknownMedicine(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Inventory::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, InventoryError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "[{\"id\": }").unwrap();

        let err = Inventory::load(&path).unwrap_err();
        assert!(matches!(err, InventoryError::Malformed { .. }));
    }
}

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::vehicles_errors::VehicleError;
use super::Result;

/// Domain model for a vehicle catalog entry. The import tax is recorded
/// in home currency; conversion happens at calculation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub import_tax: f64,
}

/// Input model for creating a new vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub name: String,
    pub model: String,
    pub import_tax: f64,
}

impl NewVehicle {
    /// Validates the new vehicle data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(VehicleError::InvalidData(
                "Vehicle name cannot be empty".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(VehicleError::InvalidData(
                "Vehicle model cannot be empty".to_string(),
            ));
        }
        if !self.import_tax.is_finite() || self.import_tax <= 0.0 {
            return Err(VehicleError::InvalidData(
                "Import tax must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating an existing vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleUpdate {
    pub name: String,
    pub model: String,
    pub import_tax: f64,
}

impl VehicleUpdate {
    /// Validates the vehicle update data
    pub fn validate(&self) -> Result<()> {
        NewVehicle {
            name: self.name.clone(),
            model: self.model.clone(),
            import_tax: self.import_tax,
        }
        .validate()
    }
}

/// Database model for vehicles
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::vehicles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VehicleDB {
    #[diesel(skip_insertion)]
    pub id: i32,
    pub name: String,
    pub model: String,
    pub import_tax: f64,
}

// Conversion implementations
impl From<VehicleDB> for Vehicle {
    fn from(db: VehicleDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            model: db.model,
            import_tax: db.import_tax,
        }
    }
}

impl From<NewVehicle> for VehicleDB {
    fn from(domain: NewVehicle) -> Self {
        Self {
            id: 0,
            name: domain.name.trim().to_string(),
            model: domain.model.trim().to_string(),
            import_tax: domain.import_tax,
        }
    }
}

use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::schema::vehicles;
use crate::schema::vehicles::dsl::*;
use crate::vehicles::{Result, VehicleError};

use super::vehicles_model::{NewVehicle, Vehicle, VehicleDB, VehicleUpdate};

/// Repository for managing vehicle catalog data in the database
pub struct VehicleRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl VehicleRepository {
    /// Creates a new VehicleRepository instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Creates a new vehicle in the database
    pub fn create(&self, new_vehicle: NewVehicle) -> Result<Vehicle> {
        new_vehicle.validate()?;

        let vehicle_db: VehicleDB = new_vehicle.into();

        let mut conn = get_connection(&self.pool)
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        diesel::insert_into(vehicles::table)
            .values(&vehicle_db)
            .get_result::<VehicleDB>(&mut conn)
            .map(Vehicle::from)
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))
    }

    /// Retrieves a vehicle by its ID
    pub fn get_by_id(&self, vehicle_id: i32) -> Result<Vehicle> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        let vehicle = vehicles
            .find(vehicle_id)
            .first::<VehicleDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    VehicleError::NotFound(format!("Vehicle with id {} not found", vehicle_id))
                }
                _ => VehicleError::DatabaseError(e.to_string()),
            })?;

        Ok(vehicle.into())
    }

    /// Lists all vehicles, newest first
    pub fn list(&self) -> Result<Vec<Vehicle>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        vehicles
            .order(id.desc())
            .load::<VehicleDB>(&mut conn)
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))
            .map(|results| results.into_iter().map(Vehicle::from).collect())
    }

    /// Updates an existing vehicle in the database
    pub fn update(&self, vehicle_id: i32, update: VehicleUpdate) -> Result<Vehicle> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        diesel::update(vehicles.find(vehicle_id))
            .set((
                name.eq(update.name.trim().to_string()),
                model.eq(update.model.trim().to_string()),
                import_tax.eq(update.import_tax),
            ))
            .get_result::<VehicleDB>(&mut conn)
            .map(Vehicle::from)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    VehicleError::NotFound(format!("Vehicle with id {} not found", vehicle_id))
                }
                _ => VehicleError::DatabaseError(e.to_string()),
            })
    }

    /// Deletes a vehicle by its ID and returns the number of deleted records
    pub fn delete(&self, vehicle_id: i32) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        diesel::delete(vehicles.find(vehicle_id))
            .execute(&mut conn)
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))
    }
}

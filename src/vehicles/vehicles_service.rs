use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::vehicles_model::{NewVehicle, Vehicle, VehicleUpdate};
use super::vehicles_repository::VehicleRepository;
use crate::vehicles::Result;

/// Service for managing the vehicle catalog
pub struct VehicleService {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl VehicleService {
    /// Creates a new VehicleService instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Adds a new vehicle to the catalog
    pub fn add_vehicle(&self, new_vehicle: NewVehicle) -> Result<Vehicle> {
        debug!(
            "Adding vehicle {} {} with import tax {}",
            new_vehicle.name, new_vehicle.model, new_vehicle.import_tax
        );
        let repo = VehicleRepository::new(self.pool.clone());
        repo.create(new_vehicle)
    }

    /// Retrieves a vehicle by its ID
    pub fn get_vehicle(&self, vehicle_id: i32) -> Result<Vehicle> {
        let repo = VehicleRepository::new(self.pool.clone());
        repo.get_by_id(vehicle_id)
    }

    /// Lists all vehicles, newest first
    pub fn list_vehicles(&self) -> Result<Vec<Vehicle>> {
        let repo = VehicleRepository::new(self.pool.clone());
        repo.list()
    }

    /// Updates an existing vehicle
    pub fn update_vehicle(&self, vehicle_id: i32, update: VehicleUpdate) -> Result<Vehicle> {
        let repo = VehicleRepository::new(self.pool.clone());
        repo.update(vehicle_id, update)
    }

    /// Deletes a vehicle; deleting an absent id is a no-op
    pub fn delete_vehicle(&self, vehicle_id: i32) -> Result<()> {
        let repo = VehicleRepository::new(self.pool.clone());
        repo.delete(vehicle_id)?;
        Ok(())
    }

    /// Case-insensitive substring search over name and model, applied
    /// over the full listing
    pub fn search_vehicles(&self, query: &str) -> Result<Vec<Vehicle>> {
        let repo = VehicleRepository::new(self.pool.clone());
        Ok(filter_vehicles(repo.list()?, query))
    }
}

fn filter_vehicles(vehicles: Vec<Vehicle>, query: &str) -> Vec<Vehicle> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return vehicles;
    }

    vehicles
        .into_iter()
        .filter(|v| {
            v.name.to_lowercase().contains(&needle) || v.model.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: i32, name: &str, model: &str) -> Vehicle {
        Vehicle {
            id,
            name: name.to_string(),
            model: model.to_string(),
            import_tax: 1000.0,
        }
    }

    #[test]
    fn search_matches_name_and_model_case_insensitively() {
        let all = vec![
            vehicle(1, "Toyota", "Corolla 2018"),
            vehicle(2, "Honda", "Civic"),
            vehicle(3, "Toyota", "Camry"),
        ];

        let hits = filter_vehicles(all.clone(), "toyota");
        assert_eq!(hits.len(), 2);

        let hits = filter_vehicles(all.clone(), "COROLLA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let hits = filter_vehicles(all, "tesla");
        assert!(hits.is_empty());
    }

    #[test]
    fn blank_query_returns_everything() {
        let all = vec![vehicle(1, "Toyota", "Corolla"), vehicle(2, "Honda", "Civic")];
        assert_eq!(filter_vehicles(all, "   ").len(), 2);
    }
}

use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::schema::shipping_routes;
use crate::schema::shipping_routes::dsl::*;
use crate::shipping::{Result, ShippingError};

use super::shipping_model::{NewShippingRoute, ShippingRoute, ShippingRouteDB, ShippingRouteUpdate};

/// Repository for managing shipping route data in the database
pub struct ShippingRouteRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl ShippingRouteRepository {
    /// Creates a new ShippingRouteRepository instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Creates a new shipping route in the database
    pub fn create(&self, new_route: NewShippingRoute) -> Result<ShippingRoute> {
        new_route.validate()?;

        let route_db: ShippingRouteDB = new_route.into();

        let mut conn = get_connection(&self.pool)
            .map_err(|e| ShippingError::DatabaseError(e.to_string()))?;

        diesel::insert_into(shipping_routes::table)
            .values(&route_db)
            .get_result::<ShippingRouteDB>(&mut conn)
            .map(ShippingRoute::from)
            .map_err(|e| ShippingError::DatabaseError(e.to_string()))
    }

    /// Retrieves a shipping route by its ID
    pub fn get_by_id(&self, route_id: i32) -> Result<ShippingRoute> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| ShippingError::DatabaseError(e.to_string()))?;

        let route = shipping_routes
            .find(route_id)
            .first::<ShippingRouteDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => ShippingError::NotFound(format!(
                    "Shipping route with id {} not found",
                    route_id
                )),
                _ => ShippingError::DatabaseError(e.to_string()),
            })?;

        Ok(route.into())
    }

    /// Lists all shipping routes, newest first
    pub fn list(&self) -> Result<Vec<ShippingRoute>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| ShippingError::DatabaseError(e.to_string()))?;

        shipping_routes
            .order(id.desc())
            .load::<ShippingRouteDB>(&mut conn)
            .map_err(|e| ShippingError::DatabaseError(e.to_string()))
            .map(|results| results.into_iter().map(ShippingRoute::from).collect())
    }

    /// Updates an existing shipping route in the database
    pub fn update(&self, route_id: i32, update: ShippingRouteUpdate) -> Result<ShippingRoute> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| ShippingError::DatabaseError(e.to_string()))?;

        diesel::update(shipping_routes.find(route_id))
            .set((
                region.eq(update.region.trim().to_string()),
                auction_label.eq(update.auction_label.trim().to_string()),
                rate.eq(update.rate),
            ))
            .get_result::<ShippingRouteDB>(&mut conn)
            .map(ShippingRoute::from)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => ShippingError::NotFound(format!(
                    "Shipping route with id {} not found",
                    route_id
                )),
                _ => ShippingError::DatabaseError(e.to_string()),
            })
    }

    /// Deletes a shipping route by its ID and returns the number of deleted records
    pub fn delete(&self, route_id: i32) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| ShippingError::DatabaseError(e.to_string()))?;

        diesel::delete(shipping_routes.find(route_id))
            .execute(&mut conn)
            .map_err(|e| ShippingError::DatabaseError(e.to_string()))
    }
}

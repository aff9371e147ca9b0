use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::shipping_model::{NewShippingRoute, ShippingRoute, ShippingRouteUpdate};
use super::shipping_repository::ShippingRouteRepository;
use crate::shipping::Result;

/// Service for managing the shipping rate table
pub struct ShippingService {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl ShippingService {
    /// Creates a new ShippingService instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Adds a new shipping route
    pub fn add_route(&self, new_route: NewShippingRoute) -> Result<ShippingRoute> {
        debug!(
            "Adding shipping route {} - {} at rate {}",
            new_route.region, new_route.auction_label, new_route.rate
        );
        let repo = ShippingRouteRepository::new(self.pool.clone());
        repo.create(new_route)
    }

    /// Retrieves a shipping route by its ID
    pub fn get_route(&self, route_id: i32) -> Result<ShippingRoute> {
        let repo = ShippingRouteRepository::new(self.pool.clone());
        repo.get_by_id(route_id)
    }

    /// Lists all shipping routes, newest first
    pub fn list_routes(&self) -> Result<Vec<ShippingRoute>> {
        let repo = ShippingRouteRepository::new(self.pool.clone());
        repo.list()
    }

    /// Updates an existing shipping route
    pub fn update_route(&self, route_id: i32, update: ShippingRouteUpdate) -> Result<ShippingRoute> {
        let repo = ShippingRouteRepository::new(self.pool.clone());
        repo.update(route_id, update)
    }

    /// Deletes a shipping route; deleting an absent id is a no-op
    pub fn delete_route(&self, route_id: i32) -> Result<()> {
        let repo = ShippingRouteRepository::new(self.pool.clone());
        repo.delete(route_id)?;
        Ok(())
    }

    /// Case-insensitive substring search over region, auction label and
    /// the rate's string form, applied over the full listing
    pub fn search_routes(&self, query: &str) -> Result<Vec<ShippingRoute>> {
        let repo = ShippingRouteRepository::new(self.pool.clone());
        Ok(filter_routes(repo.list()?, query))
    }
}

fn filter_routes(routes: Vec<ShippingRoute>, query: &str) -> Vec<ShippingRoute> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return routes;
    }

    routes
        .into_iter()
        .filter(|r| {
            r.region.to_lowercase().contains(&needle)
                || r.auction_label.to_lowercase().contains(&needle)
                || r.rate.to_string().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: i32, region: &str, auction: &str, rate: f64) -> ShippingRoute {
        ShippingRoute {
            id,
            region: region.to_string(),
            auction_label: auction.to_string(),
            rate,
        }
    }

    #[test]
    fn search_matches_text_fields() {
        let all = vec![
            route(1, "California", "Copart LA", 1450.0),
            route(2, "Texas", "IAAI Houston", 1300.0),
        ];

        let hits = filter_routes(all.clone(), "copart");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let hits = filter_routes(all, "TEXAS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn search_matches_rate_string_form() {
        let all = vec![
            route(1, "California", "Copart LA", 1450.0),
            route(2, "Texas", "IAAI Houston", 1300.0),
        ];

        let hits = filter_routes(all, "1450");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }
}

use carimport_core::pricing::{NewFinalPriceRecord, FinalPriceRepository, PricingError, PricingService};
use carimport_core::rates::RateService;
use carimport_core::shipping::{NewShippingRoute, ShippingService};
use carimport_core::vehicles::{NewVehicle, VehicleService};

mod common;

fn seed_vehicle(pool: &std::sync::Arc<carimport_core::db::DbPool>, tax: f64) -> i32 {
	let vehicles = VehicleService::new(pool.clone());
	vehicles
		.add_vehicle(NewVehicle {
			name: "Toyota".to_string(),
			model: "Corolla".to_string(),
			import_tax: tax,
		})
		.unwrap()
		.id
}

fn seed_route(pool: &std::sync::Arc<carimport_core::db::DbPool>, rate: f64) -> i32 {
	let shipping = ShippingService::new(pool.clone());
	shipping
		.add_route(NewShippingRoute {
			region: "California".to_string(),
			auction_label: "Copart LA".to_string(),
			rate,
		})
		.unwrap()
		.id
}

#[test]
fn test_final_price_combines_the_three_contributions() {
	let pool = common::setup_test_db("final_price_calc");

	RateService::new(pool.clone()).set_rate(80.0).unwrap();
	let vehicle_id = seed_vehicle(&pool, 8000.0);
	let route_id = seed_route(&pool, 50.0);

	let pricing = PricingService::new(pool.clone());
	let record = pricing
		.calculate("1000", Some(vehicle_id), Some(route_id))
		.unwrap();

	assert_eq!(record.vehicle_price, 1000.0);
	assert_eq!(record.shipping_rate, 50.0);
	assert_eq!(record.tax_in_foreign_currency, 100.0);
	assert_eq!(record.final_price, 1150.0);
	assert!(
		(record.final_price
			- (record.vehicle_price + record.shipping_rate + record.tax_in_foreign_currency))
			.abs()
			< 1e-9
	);

	// Exactly one ledger row per successful call
	let history = pricing.history().unwrap();
	assert_eq!(history.len(), 1);
	assert_eq!(history[0].id, record.id);
}

#[test]
fn test_missing_rate_is_rejected_before_persisting() {
	let pool = common::setup_test_db("final_price_no_rate");

	let vehicle_id = seed_vehicle(&pool, 8000.0);
	let route_id = seed_route(&pool, 50.0);

	let pricing = PricingService::new(pool.clone());
	let err = pricing
		.calculate("1000", Some(vehicle_id), Some(route_id))
		.unwrap_err();

	assert!(matches!(err, PricingError::RateNotSet));
	assert_eq!(err.to_string(), "rate not set");
	assert!(pricing.history().unwrap().is_empty());
}

#[test]
fn test_invalid_vehicle_price_is_rejected_before_computation() {
	let pool = common::setup_test_db("final_price_bad_input");

	RateService::new(pool.clone()).set_rate(80.0).unwrap();
	let vehicle_id = seed_vehicle(&pool, 8000.0);
	let route_id = seed_route(&pool, 50.0);

	let pricing = PricingService::new(pool.clone());

	for bad in ["-5", "0", "abc", ""] {
		let err = pricing
			.calculate(bad, Some(vehicle_id), Some(route_id))
			.unwrap_err();
		assert!(matches!(err, PricingError::InvalidVehiclePrice), "input {:?}", bad);
	}

	assert!(pricing.history().unwrap().is_empty());
}

#[test]
fn test_missing_selection_is_rejected() {
	let pool = common::setup_test_db("final_price_no_selection");

	RateService::new(pool.clone()).set_rate(80.0).unwrap();
	let vehicle_id = seed_vehicle(&pool, 8000.0);
	let route_id = seed_route(&pool, 50.0);

	let pricing = PricingService::new(pool.clone());

	let err = pricing.calculate("1000", None, Some(route_id)).unwrap_err();
	assert!(matches!(err, PricingError::SelectionRequired));

	let err = pricing.calculate("1000", Some(vehicle_id), None).unwrap_err();
	assert!(matches!(err, PricingError::SelectionRequired));

	// A selection pointing at a deleted row is a distinct failure
	let err = pricing.calculate("1000", Some(9999), Some(route_id)).unwrap_err();
	assert!(matches!(err, PricingError::NotFound(_)));

	assert!(pricing.history().unwrap().is_empty());
}

#[test]
fn test_ledger_rows_survive_source_deletion() {
	let pool = common::setup_test_db("final_price_denormalized");

	let rates = RateService::new(pool.clone());
	let rate = rates.set_rate(80.0).unwrap();
	let vehicle_id = seed_vehicle(&pool, 8000.0);
	let route_id = seed_route(&pool, 50.0);

	let pricing = PricingService::new(pool.clone());
	let record = pricing
		.calculate("1000", Some(vehicle_id), Some(route_id))
		.unwrap();

	// Remove all three inputs
	VehicleService::new(pool.clone()).delete_vehicle(vehicle_id).unwrap();
	ShippingService::new(pool.clone()).delete_route(route_id).unwrap();
	rates.delete_rate(rate.id).unwrap();

	let history = pricing.history().unwrap();
	assert_eq!(history.len(), 1);
	assert_eq!(history[0], record);
}

#[test]
fn test_ledger_delete_and_bulk_delete() {
	let pool = common::setup_test_db("final_price_ledger_delete");

	let ledger = FinalPriceRepository::new(pool.clone());
	let mut ids = Vec::new();
	for i in 1..=3 {
		let record = ledger
			.append(NewFinalPriceRecord {
				vehicle_price: 1000.0 * i as f64,
				shipping_rate: 50.0,
				tax_in_foreign_currency: 100.0,
				final_price: 1000.0 * i as f64 + 150.0,
				timestamp: None,
			})
			.unwrap();
		ids.push(record.id);
	}

	let pricing = PricingService::new(pool.clone());
	pricing.delete_record(ids[1]).unwrap();

	let remaining: Vec<i32> = pricing.history().unwrap().iter().map(|r| r.id).collect();
	assert_eq!(remaining, vec![ids[2], ids[0]]);

	// Bulk delete counts only the rows that still exist
	let removed = pricing.delete_records(&[ids[0], ids[1], ids[2]]).unwrap();
	assert_eq!(removed, 2);
	assert!(pricing.history().unwrap().is_empty());

	// Deleting an already-deleted id stays a no-op
	pricing.delete_record(ids[0]).unwrap();
}

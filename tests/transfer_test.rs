use carimport_core::shipping::{NewShippingRoute, ShippingService};
use carimport_core::transfer::{
	ImportOptions, NumericPolicy, RowPolicy, TransferError, TransferService, TransferTable,
};
use carimport_core::vehicles::{NewVehicle, VehicleService};

mod common;

fn seed_vehicles(pool: &std::sync::Arc<carimport_core::db::DbPool>) {
	let vehicles = VehicleService::new(pool.clone());
	vehicles
		.add_vehicle(NewVehicle {
			name: "Toyota".to_string(),
			model: "Corolla".to_string(),
			import_tax: 8000.0,
		})
		.unwrap();
	vehicles
		.add_vehicle(NewVehicle {
			name: "Honda".to_string(),
			model: "Civic".to_string(),
			import_tax: 7500.0,
		})
		.unwrap();
}

#[test]
fn test_export_then_import_round_trips_values() {
	let source = common::setup_test_db("transfer_export");
	let target = common::setup_test_db("transfer_import");

	seed_vehicles(&source);

	let mut buffer = Vec::new();
	TransferService::new(source.clone())
		.export(TransferTable::Vehicles, &mut buffer)
		.unwrap();

	let text = String::from_utf8(buffer.clone()).unwrap();
	assert!(text.starts_with("id,name,model,import_tax"));

	let summary = TransferService::new(target.clone())
		.import(TransferTable::Vehicles, buffer.as_slice(), ImportOptions::default())
		.unwrap();
	assert_eq!(summary.imported, 2);
	assert_eq!(summary.failed, 0);

	// Export is newest-first, so Honda is inserted first and Toyota ends
	// up newest in the target
	let imported = VehicleService::new(target.clone()).list_vehicles().unwrap();
	let names: Vec<&str> = imported.iter().map(|v| v.name.as_str()).collect();
	assert_eq!(names, vec!["Toyota", "Honda"]);
}

#[test]
fn test_missing_required_column_aborts_before_inserting() {
	let pool = common::setup_test_db("transfer_missing_column");

	// No "rate" column
	let csv = "region,auction_label\nCalifornia,Copart LA\n";
	let err = TransferService::new(pool.clone())
		.import(
			TransferTable::ShippingRoutes,
			csv.as_bytes(),
			ImportOptions::default(),
		)
		.unwrap_err();

	match err {
		TransferError::MissingColumns(cols) => assert_eq!(cols, vec!["rate".to_string()]),
		other => panic!("expected MissingColumns, got {:?}", other),
	}

	assert!(ShippingService::new(pool).list_routes().unwrap().is_empty());
}

#[test]
fn test_strict_policy_skips_invalid_rows_and_reports_them() {
	let pool = common::setup_test_db("transfer_strict");

	let csv = "name,model,import_tax\n Toyota ,Corolla,8000\nGhost,Car,abc\nHonda,Civic,7500\n";
	let summary = TransferService::new(pool.clone())
		.import(TransferTable::Vehicles, csv.as_bytes(), ImportOptions::default())
		.unwrap();

	assert_eq!(summary.imported, 2);
	assert_eq!(summary.failed, 1);
	assert_eq!(summary.errors.len(), 1);
	assert!(summary.errors[0].starts_with("row 2:"));

	let imported = VehicleService::new(pool).list_vehicles().unwrap();
	assert_eq!(imported.len(), 2);
	// Imported rows land with the same trimming as rows added directly
	assert_eq!(imported[1].name, "Toyota");
}

#[test]
fn test_coerced_zero_still_fails_row_validation() {
	let pool = common::setup_test_db("transfer_coerce");

	let csv = "name,model,import_tax\nGhost,Car,abc\n";
	let summary = TransferService::new(pool.clone())
		.import(
			TransferTable::Vehicles,
			csv.as_bytes(),
			ImportOptions {
				numeric_policy: NumericPolicy::CoerceToZero,
				row_policy: RowPolicy::ContinueAndReport,
			},
		)
		.unwrap();

	// "abc" became 0, and a zero import tax is not a valid vehicle
	assert_eq!(summary.imported, 0);
	assert_eq!(summary.failed, 1);
	assert!(VehicleService::new(pool).list_vehicles().unwrap().is_empty());
}

#[test]
fn test_abort_policy_rolls_back_the_whole_import() {
	let pool = common::setup_test_db("transfer_abort");

	let csv = "name,model,import_tax\nToyota,Corolla,8000\nGhost,Car,abc\nHonda,Civic,7500\n";
	let err = TransferService::new(pool.clone())
		.import(
			TransferTable::Vehicles,
			csv.as_bytes(),
			ImportOptions {
				numeric_policy: NumericPolicy::Strict,
				row_policy: RowPolicy::Abort,
			},
		)
		.unwrap_err();

	assert!(matches!(err, TransferError::RowFailed { row: 2, .. }));

	// The row inserted before the failure is rolled back too
	assert!(VehicleService::new(pool).list_vehicles().unwrap().is_empty());
}

#[test]
fn test_rate_export_includes_all_rows_newest_first() {
	let pool = common::setup_test_db("transfer_rates");

	let rates = carimport_core::rates::RateService::new(pool.clone());
	rates.set_rate(78.5).unwrap();
	rates.set_rate(80.0).unwrap();

	let mut buffer = Vec::new();
	TransferService::new(pool)
		.export(TransferTable::Rates, &mut buffer)
		.unwrap();

	let text = String::from_utf8(buffer).unwrap();
	let lines: Vec<&str> = text.lines().collect();
	assert_eq!(lines[0], "id,value");
	assert!(lines[1].ends_with(",80"));
	assert!(lines[2].ends_with(",78.5"));
}

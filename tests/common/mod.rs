use carimport_core::db;
use carimport_core::db::DbPool;
use chrono::Local;
use std::sync::Arc;

pub fn get_test_db_path(test_id: &str) -> String {
	let now = Local::now();

	let formatted_date_path =
		now.format(&format!("./tests/output/%Y%m%d/%H%M%S-{}/", test_id)).to_string();

	formatted_date_path
}

pub fn setup_test_db(test_id: &str) -> Arc<DbPool> {
	let dir = get_test_db_path(test_id);

	let db_path = db::init(&dir).expect("Failed to initialize database");

	let pool = db::create_pool(&db_path).expect("Failed to create database pool");

	db::run_migrations(&pool).expect("Failed to run migrations");

	pool
}

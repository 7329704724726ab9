use vouch_config::Postgres;
use vouch_domain::{
	dates::DateRange,
	record::{field_number, field_text},
};
use vouch_store::{
	filter::FilterQuery,
	models::Invoice,
	records::{Collection, RecordStore},
};
use vouch_testkit::TestDatabase;

fn invoice(invoice_id: &str, vendor_id: &str, amount: f64, invoice_date: &str) -> Invoice {
	Invoice {
		engagement_id: "eng-001".to_string(),
		invoice_id: invoice_id.to_string(),
		vendor_id: vendor_id.to_string(),
		invoice_date: invoice_date.to_string(),
		amount,
		currency: Some("USD".to_string()),
		po_id: None,
		receipt_id: None,
		status: "Open".to_string(),
	}
}

async fn seed_invoices(store: &RecordStore, dsn: &str, invoices: &[Invoice]) {
	store.ensure_schema().await.expect("Failed to ensure schema.");

	let pool = sqlx::postgres::PgPoolOptions::new()
		.max_connections(1)
		.connect(dsn)
		.await
		.expect("Failed to connect for seeding.");

	for invoice in invoices {
		let record = serde_json::to_value(invoice).expect("Failed to encode invoice.");

		sqlx::query("INSERT INTO invoices (engagement_id, business_key, record) VALUES ($1, $2, $3)")
			.bind(&invoice.engagement_id)
			.bind(&invoice.invoice_id)
			.bind(record)
			.execute(&pool)
			.await
			.expect("Failed to seed invoice.");
	}
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set VOUCH_PG_DSN to run."]
async fn point_lookup_distinguishes_absent_from_present() {
	let Some(base_dsn) = vouch_testkit::env_dsn() else {
		eprintln!("Skipping point_lookup_distinguishes_absent_from_present; set VOUCH_PG_DSN.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 2 };
	let store = RecordStore::new(&cfg);

	seed_invoices(
		&store,
		test_db.dsn(),
		&[invoice("INV-7000", "VEN-1000", 1250.0, "2025-08-12T00:00:00Z")],
	)
	.await;

	let found = store
		.get_by_key(Collection::Invoices, "eng-001", "INV-7000")
		.await
		.expect("Lookup failed.");
	let found = found.expect("Expected the seeded invoice.");

	assert_eq!(field_text(&found, "vendor_id"), Some("VEN-1000"));
	assert_eq!(field_number(&found, "amount"), Some(1250.0));

	let missing = store
		.get_by_key(Collection::Invoices, "eng-001", "INV-9999")
		.await
		.expect("Lookup failed.");

	assert!(missing.is_none());

	let wrong_tenant = store
		.get_by_key(Collection::Invoices, "eng-002", "INV-7000")
		.await
		.expect("Lookup failed.");

	assert!(wrong_tenant.is_none());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set VOUCH_PG_DSN to run."]
async fn filtered_scan_applies_criteria_and_limit() {
	let Some(base_dsn) = vouch_testkit::env_dsn() else {
		eprintln!("Skipping filtered_scan_applies_criteria_and_limit; set VOUCH_PG_DSN.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 2 };
	let store = RecordStore::new(&cfg);

	seed_invoices(
		&store,
		test_db.dsn(),
		&[
			invoice("INV-7000", "VEN-1000", 1250.0, "2025-08-12T00:00:00Z"),
			invoice("INV-7001", "VEN-1000", 499.0, "2025-08-14T00:00:00Z"),
			invoice("INV-7002", "VEN-1001", 4999.0, "2025-09-05T00:00:00Z"),
			invoice("INV-7003", "VEN-1000", 9900.0, "2025-10-02T00:00:00Z"),
		],
	)
	.await;

	let range = DateRange {
		lower: Some("2025-07-01T00:00:00Z".to_string()),
		upper: Some("2025-10-01T00:00:00Z".to_string()),
	};
	let filter = FilterQuery::scoped("eng-001", 50)
		.date_range("invoice_date", &range)
		.eq_text("vendor_id", Some("VEN-1000"))
		.min_number("amount", Some(1000.0));
	let results = store.query(Collection::Invoices, &filter).await.expect("Scan failed.");

	assert_eq!(results.len(), 1);
	assert_eq!(field_text(&results[0], "invoice_id"), Some("INV-7000"));

	let unfiltered = store
		.query(Collection::Invoices, &FilterQuery::scoped("eng-001", 2))
		.await
		.expect("Scan failed.");

	assert_eq!(unfiltered.len(), 2, "limit must cap the result set");

	let bad_limit = store
		.query(Collection::Invoices, &FilterQuery::scoped("eng-001", 0))
		.await;

	assert!(bad_limit.is_err(), "non-positive limits must be rejected");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

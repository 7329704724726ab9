const INIT_SQL: &str = "\
CREATE TABLE IF NOT EXISTS vendors (
	engagement_id TEXT NOT NULL,
	business_key TEXT NOT NULL,
	record JSONB NOT NULL,
	PRIMARY KEY (engagement_id, business_key)
);

CREATE TABLE IF NOT EXISTS invoices (
	engagement_id TEXT NOT NULL,
	business_key TEXT NOT NULL,
	record JSONB NOT NULL,
	PRIMARY KEY (engagement_id, business_key)
);

CREATE INDEX IF NOT EXISTS invoices_vendor_idx ON invoices ((record->>'vendor_id'));

CREATE INDEX IF NOT EXISTS invoices_date_idx ON invoices ((record->>'invoice_date'));

CREATE TABLE IF NOT EXISTS payments (
	engagement_id TEXT NOT NULL,
	business_key TEXT NOT NULL,
	record JSONB NOT NULL,
	PRIMARY KEY (engagement_id, business_key)
);

CREATE INDEX IF NOT EXISTS payments_invoice_idx ON payments ((record->>'invoice_id'));

CREATE INDEX IF NOT EXISTS payments_date_idx ON payments ((record->>'paid_at'));
";

pub fn render_schema() -> &'static str {
	INIT_SQL
}

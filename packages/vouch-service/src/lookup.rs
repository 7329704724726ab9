use vouch_domain::Record;
use vouch_store::{filter::FilterQuery, records::Collection};

use crate::{AuditService, Result, require_id};

impl AuditService {
	pub async fn get_invoice(
		&self,
		engagement_id: &str,
		invoice_id: &str,
	) -> Result<Option<Record>> {
		self.lookup(Collection::Invoices, engagement_id, invoice_id).await
	}

	pub async fn get_vendor(
		&self,
		engagement_id: &str,
		vendor_id: &str,
	) -> Result<Option<Record>> {
		self.lookup(Collection::Vendors, engagement_id, vendor_id).await
	}

	pub async fn get_payment(
		&self,
		engagement_id: &str,
		payment_id: &str,
	) -> Result<Option<Record>> {
		self.lookup(Collection::Payments, engagement_id, payment_id).await
	}

	/// Payments referencing one specific invoice. A filtered scan, not a
	/// point lookup: an invoice may have zero or several payments.
	pub async fn get_payments_for_invoice(
		&self,
		engagement_id: &str,
		invoice_id: &str,
	) -> Result<Vec<Record>> {
		require_id("engagement_id", engagement_id)?;
		require_id("invoice_id", invoice_id)?;

		let filter = FilterQuery::scoped(engagement_id.trim(), self.cfg.query.default_limit)
			.eq_text("invoice_id", Some(invoice_id));

		Ok(self.records.query(Collection::Payments, &filter).await?)
	}

	async fn lookup(
		&self,
		collection: Collection,
		engagement_id: &str,
		key: &str,
	) -> Result<Option<Record>> {
		require_id("engagement_id", engagement_id)?;
		require_id(collection.key_field(), key)?;

		Ok(self.records.get_by_key(collection, engagement_id.trim(), key.trim()).await?)
	}
}

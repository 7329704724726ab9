use vouch_domain::{Record, dates};
use vouch_store::{filter::FilterQuery, records::Collection};

use crate::{AuditService, Result, require_id};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct InvoiceQuery {
	pub engagement_id: String,
	pub date_from: Option<String>,
	pub date_to: Option<String>,
	pub vendor_id: Option<String>,
	pub status: Option<String>,
	pub min_amount: Option<f64>,
	pub max_amount: Option<f64>,
	pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct PaymentQuery {
	pub engagement_id: String,
	pub date_from: Option<String>,
	pub date_to: Option<String>,
	pub vendor_id: Option<String>,
	pub invoice_id: Option<String>,
	pub limit: Option<i64>,
}

impl AuditService {
	pub async fn query_invoices(&self, req: InvoiceQuery) -> Result<Vec<Record>> {
		require_id("engagement_id", &req.engagement_id)?;

		let range = dates::normalize_range(req.date_from.as_deref(), req.date_to.as_deref())?;
		let filter = FilterQuery::scoped(req.engagement_id.trim(), self.resolve_limit(req.limit))
			.date_range("invoice_date", &range)
			.eq_text("vendor_id", req.vendor_id.as_deref())
			.eq_text("status", req.status.as_deref())
			.min_number("amount", req.min_amount)
			.max_number("amount", req.max_amount);

		Ok(self.records.query(Collection::Invoices, &filter).await?)
	}

	pub async fn query_payments(&self, req: PaymentQuery) -> Result<Vec<Record>> {
		require_id("engagement_id", &req.engagement_id)?;

		let range = dates::normalize_range(req.date_from.as_deref(), req.date_to.as_deref())?;
		let filter = FilterQuery::scoped(req.engagement_id.trim(), self.resolve_limit(req.limit))
			.date_range("paid_at", &range)
			.eq_text("vendor_id", req.vendor_id.as_deref())
			.eq_text("invoice_id", req.invoice_id.as_deref());

		Ok(self.records.query(Collection::Payments, &filter).await?)
	}

	/// Absent limits take the configured default; oversized requests are
	/// clamped to the configured ceiling. Non-positive values pass through
	/// for the store boundary to reject.
	fn resolve_limit(&self, limit: Option<i64>) -> i64 {
		match limit {
			Some(limit) if limit > self.cfg.query.max_limit => self.cfg.query.max_limit,
			Some(limit) => limit,
			None => self.cfg.query.default_limit,
		}
	}
}

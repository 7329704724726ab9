use serde::{Deserialize, Serialize};

// Typed shapes for the four known entity kinds. The query core stays
// schema-agnostic (`vouch_domain::Record`); these exist for
// collaborator-facing code such as fixtures and ingestion pipelines.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
	pub engagement_id: String,
	pub vendor_id: String,
	pub name: String,
	pub risk_tier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
	pub engagement_id: String,
	pub invoice_id: String,
	pub vendor_id: String,
	pub invoice_date: String,
	pub amount: f64,
	pub currency: Option<String>,
	pub po_id: Option<String>,
	pub receipt_id: Option<String>,
	pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
	pub engagement_id: String,
	pub payment_id: String,
	pub invoice_id: String,
	pub vendor_id: String,
	pub paid_at: String,
	pub amount: f64,
	pub method: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyDocument {
	pub id: String,
	pub doc_type: String,
	pub engagement_id: String,
	pub policy_id: Option<String>,
	pub section: Option<String>,
	pub effective_date: Option<String>,
	pub content: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub content_vector: Option<Vec<f32>>,
}

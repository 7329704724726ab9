use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	routing::{get, post},
};
use serde::Deserialize;

use vouch_domain::Record;
use vouch_service::{InvoiceQuery, PaymentQuery, ScoredDocument, SearchRequest};

use crate::{boundary, state::AppState};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/records/invoice", post(get_invoice))
		.route("/v1/records/vendor", post(get_vendor))
		.route("/v1/records/payment", post(get_payment))
		.route("/v1/records/invoice_payments", post(get_payments_for_invoice))
		.route("/v1/records/invoices/query", post(query_invoices))
		.route("/v1/records/payments/query", post(query_payments))
		.route("/v1/search/policies", post(search_policies))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

#[derive(Debug, Deserialize)]
struct InvoiceLookup {
	engagement_id: String,
	invoice_id: String,
}

#[derive(Debug, Deserialize)]
struct VendorLookup {
	engagement_id: String,
	vendor_id: String,
}

#[derive(Debug, Deserialize)]
struct PaymentLookup {
	engagement_id: String,
	payment_id: String,
}

async fn get_invoice(
	State(state): State<AppState>,
	Json(payload): Json<InvoiceLookup>,
) -> Json<Option<Record>> {
	let result = state.service.get_invoice(&payload.engagement_id, &payload.invoice_id).await;

	Json(boundary::recover(
		"get_invoice",
		&payload.engagement_id,
		&[("invoice_id", &payload.invoice_id)],
		result,
	))
}

async fn get_vendor(
	State(state): State<AppState>,
	Json(payload): Json<VendorLookup>,
) -> Json<Option<Record>> {
	let result = state.service.get_vendor(&payload.engagement_id, &payload.vendor_id).await;

	Json(boundary::recover(
		"get_vendor",
		&payload.engagement_id,
		&[("vendor_id", &payload.vendor_id)],
		result,
	))
}

async fn get_payment(
	State(state): State<AppState>,
	Json(payload): Json<PaymentLookup>,
) -> Json<Option<Record>> {
	let result = state.service.get_payment(&payload.engagement_id, &payload.payment_id).await;

	Json(boundary::recover(
		"get_payment",
		&payload.engagement_id,
		&[("payment_id", &payload.payment_id)],
		result,
	))
}

async fn get_payments_for_invoice(
	State(state): State<AppState>,
	Json(payload): Json<InvoiceLookup>,
) -> Json<Vec<Record>> {
	let result = state
		.service
		.get_payments_for_invoice(&payload.engagement_id, &payload.invoice_id)
		.await;

	Json(boundary::recover(
		"get_payments_for_invoice",
		&payload.engagement_id,
		&[("invoice_id", &payload.invoice_id)],
		result,
	))
}

async fn query_invoices(
	State(state): State<AppState>,
	Json(payload): Json<InvoiceQuery>,
) -> Json<Vec<Record>> {
	let engagement_id = payload.engagement_id.clone();
	let result = state.service.query_invoices(payload).await;

	Json(boundary::recover("query_invoices", &engagement_id, &[], result))
}

async fn query_payments(
	State(state): State<AppState>,
	Json(payload): Json<PaymentQuery>,
) -> Json<Vec<Record>> {
	let engagement_id = payload.engagement_id.clone();
	let result = state.service.query_payments(payload).await;

	Json(boundary::recover("query_payments", &engagement_id, &[], result))
}

async fn search_policies(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Json<Vec<ScoredDocument>> {
	let engagement_id = payload.engagement_id.clone().unwrap_or_default();
	let result = state.service.search_policies(payload).await;

	Json(boundary::recover("search_policies", &engagement_id, &[], result))
}

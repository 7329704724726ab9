use std::{
	collections::HashMap,
	sync::Mutex,
};

use serde_json::Value;

use vouch_domain::Record;

use crate::{
	Error, Result,
	db::Db,
	filter::{FilterQuery, Predicate, Scalar},
};

/// Entity collections the store serves. The set is closed; field names fed
/// into SQL only ever come from here and from the builders in the service
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
	Vendors,
	Invoices,
	Payments,
}
impl Collection {
	pub fn name(self) -> &'static str {
		match self {
			Self::Vendors => "vendors",
			Self::Invoices => "invoices",
			Self::Payments => "payments",
		}
	}

	pub fn key_field(self) -> &'static str {
		match self {
			Self::Vendors => "vendor_id",
			Self::Invoices => "invoice_id",
			Self::Payments => "payment_id",
		}
	}
}

#[derive(Debug, Clone)]
struct CollectionHandle {
	select_base: String,
	key_lookup: String,
}
impl CollectionHandle {
	fn resolve(collection: Collection) -> Self {
		let select_base = format!("SELECT record FROM {}", collection.name());
		let key_lookup = format!(
			"{select_base} WHERE engagement_id = $1 AND record->>'{}' = $2 LIMIT 1",
			collection.key_field(),
		);

		Self { select_base, key_lookup }
	}
}

/// Gateway over the structured record store. Connection setup is lazy and
/// single-flight (see [`Db::pool`]); collection handles are resolved once
/// and reused.
pub struct RecordStore {
	db: Db,
	handles: Mutex<HashMap<Collection, CollectionHandle>>,
}
impl RecordStore {
	pub fn new(cfg: &vouch_config::Postgres) -> Self {
		Self { db: Db::new(cfg), handles: Mutex::new(HashMap::new()) }
	}

	pub async fn ensure_schema(&self) -> Result<()> {
		self.db.ensure_schema().await
	}

	fn handle(&self, collection: Collection) -> CollectionHandle {
		let mut handles = self.handles.lock().unwrap_or_else(|err| err.into_inner());

		handles.entry(collection).or_insert_with(|| CollectionHandle::resolve(collection)).clone()
	}

	/// Point lookup by composite business key. Zero rows is `None`. Business
	/// keys are assumed unique; if the store holds duplicates the first row
	/// in native order wins.
	pub async fn get_by_key(
		&self,
		collection: Collection,
		engagement_id: &str,
		key: &str,
	) -> Result<Option<Record>> {
		let handle = self.handle(collection);
		let pool = self.db.pool().await?;
		let row: Option<(Value,)> = sqlx::query_as(&handle.key_lookup)
			.bind(engagement_id)
			.bind(key)
			.fetch_optional(pool)
			.await?;

		row.map(|(value,)| into_record(collection, value)).transpose()
	}

	/// Filtered scan. The limit is enforced here: this is the execution
	/// boundary, and an unbounded or non-positive cap never reaches the
	/// store.
	pub async fn query(
		&self,
		collection: Collection,
		filter: &FilterQuery,
	) -> Result<Vec<Record>> {
		if filter.limit() <= 0 {
			return Err(Error::InvalidArgument(format!(
				"Scan limit must be positive, got {}.",
				filter.limit(),
			)));
		}

		tracing::debug!(
			collection = collection.name(),
			clauses = filter.predicates().len(),
			limit = filter.limit(),
			"Executing filtered scan."
		);

		let handle = self.handle(collection);
		let pool = self.db.pool().await?;
		let mut builder = sqlx::QueryBuilder::<sqlx::Postgres>::new(&handle.select_base);

		builder.push(" WHERE ");
		push_predicates(&mut builder, filter.predicates());
		builder.push(" OFFSET 0 LIMIT ");
		builder.push_bind(filter.limit());

		let rows: Vec<(Value,)> = builder.build_query_as().fetch_all(pool).await?;

		rows.into_iter().map(|(value,)| into_record(collection, value)).collect()
	}
}

fn push_predicates(
	builder: &mut sqlx::QueryBuilder<'_, sqlx::Postgres>,
	predicates: &[Predicate],
) {
	let mut separated = builder.separated(" AND ");

	for predicate in predicates {
		match &predicate.value {
			Scalar::Text(value) => {
				separated.push(format!(
					"{} {} ",
					text_expr(predicate.field),
					predicate.op.sql(),
				));
				separated.push_bind_unseparated(value.clone());
			},
			Scalar::Number(value) => {
				separated.push(format!(
					"(record->>'{}')::float8 {} ",
					predicate.field,
					predicate.op.sql(),
				));
				separated.push_bind_unseparated(*value);
			},
		}
	}
}

fn text_expr(field: &str) -> String {
	// The tenant partition is a real column; everything else lives in the
	// JSONB document.
	if field == "engagement_id" {
		field.to_string()
	} else {
		format!("record->>'{field}'")
	}
}

fn into_record(collection: Collection, value: Value) -> Result<Record> {
	match value {
		Value::Object(map) => Ok(map),
		_ => Err(Error::Unavailable(format!(
			"Collection {} returned a non-object record payload.",
			collection.name(),
		))),
	}
}

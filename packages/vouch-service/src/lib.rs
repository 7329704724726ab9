pub mod lookup;
pub mod query;
pub mod search;

mod error;

pub use error::{Error, Result};
pub use query::{InvoiceQuery, PaymentQuery};
pub use search::{ScoredDocument, SearchRequest};

use std::{future::Future, pin::Pin, sync::Arc};

use vouch_config::{Config, EmbeddingProviderConfig};
use vouch_providers::embedding;
use vouch_store::{records::RecordStore, search_index::SearchIndex};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, vouch_providers::Result<Vec<Vec<f32>>>>;
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
}
impl Providers {
	pub fn new(embedding: Arc<dyn EmbeddingProvider>) -> Self {
		Self { embedding }
	}
}
impl Default for Providers {
	fn default() -> Self {
		Self { embedding: Arc::new(DefaultProviders) }
	}
}

struct DefaultProviders;
impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, vouch_providers::Result<Vec<Vec<f32>>>> {
		Box::pin(embedding::embed(cfg, texts))
	}
}

pub struct AuditService {
	pub cfg: Config,
	pub records: RecordStore,
	pub index: SearchIndex,
	pub providers: Providers,
}
impl AuditService {
	pub fn new(cfg: Config, records: RecordStore, index: SearchIndex) -> Self {
		Self { cfg, records, index, providers: Providers::default() }
	}

	pub fn with_providers(
		cfg: Config,
		records: RecordStore,
		index: SearchIndex,
		providers: Providers,
	) -> Self {
		Self { cfg, records, index, providers }
	}
}

pub(crate) fn require_id(field: &str, value: &str) -> Result<()> {
	if value.trim().is_empty() {
		return Err(Error::InvalidRequest { message: format!("{field} is required.") });
	}

	Ok(())
}

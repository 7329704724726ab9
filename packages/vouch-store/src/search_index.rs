pub const CONTENT_VECTOR_NAME: &str = "content_vector";
pub const BM25_VECTOR_NAME: &str = "bm25";
pub const BM25_MODEL: &str = "qdrant/bm25";

use crate::Result;

/// Handle to the policy-document index. Like [`crate::db::Db`], building the
/// client performs no I/O; the first query does.
pub struct SearchIndex {
	pub client: qdrant_client::Qdrant,
	pub collection: String,
	pub vector_dim: u32,
	/// Server-side vectorizer model bound at index-build time, when present.
	pub vectorizer: Option<String>,
}
impl SearchIndex {
	pub fn new(cfg: &vouch_config::SearchIndex) -> Result<Self> {
		let client = qdrant_client::Qdrant::from_url(&cfg.url).build()?;

		Ok(Self {
			client,
			collection: cfg.collection.clone(),
			vector_dim: cfg.vector_dim,
			vectorizer: cfg.vectorizer.clone(),
		})
	}
}

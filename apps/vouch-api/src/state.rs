use std::sync::Arc;

use vouch_service::AuditService;
use vouch_store::{records::RecordStore, search_index::SearchIndex};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<AuditService>,
}
impl AppState {
	/// Construction does no I/O; the record store connects on first use and
	/// an unreachable store degrades to empty results at the boundary
	/// instead of failing startup.
	pub fn new(config: vouch_config::Config) -> color_eyre::Result<Self> {
		let records = RecordStore::new(&config.storage.postgres);
		let index = SearchIndex::new(&config.storage.search_index)?;
		let service = AuditService::new(config, records, index);

		Ok(Self { service: Arc::new(service) })
	}
}

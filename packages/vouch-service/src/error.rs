pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Record store unavailable: {message}")]
	StoreUnavailable { message: String },
	#[error("Embedding service error: {message}")]
	EmbeddingService { message: String },
	#[error("Search unavailable: {message}")]
	SearchUnavailable { message: String },
}
impl Error {
	/// Stable kind label for boundary logging.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::InvalidRequest { .. } => "validation",
			Self::StoreUnavailable { .. } => "store_unavailable",
			Self::EmbeddingService { .. } => "embedding_service",
			Self::SearchUnavailable { .. } => "search_unavailable",
		}
	}
}

impl From<vouch_domain::Error> for Error {
	fn from(err: vouch_domain::Error) -> Self {
		Self::InvalidRequest { message: err.to_string() }
	}
}

impl From<vouch_store::Error> for Error {
	fn from(err: vouch_store::Error) -> Self {
		match err {
			vouch_store::Error::Unavailable(message) => Self::StoreUnavailable { message },
			vouch_store::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			vouch_store::Error::Qdrant(inner) =>
				Self::SearchUnavailable { message: inner.to_string() },
		}
	}
}

impl From<vouch_providers::Error> for Error {
	fn from(err: vouch_providers::Error) -> Self {
		Self::EmbeddingService { message: err.to_string() }
	}
}

mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, EmbeddingProviderConfig, Postgres, Providers, Query, Search, SearchIndex, Service,
	Storage,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.storage.search_index.url.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.search_index.url must be non-empty.".to_string(),
		});
	}
	if cfg.storage.search_index.collection.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.search_index.collection must be non-empty.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions != cfg.storage.search_index.vector_dim {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must match storage.search_index.vector_dim."
				.to_string(),
		});
	}
	if cfg.providers.embedding.api_key.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.embedding.api_key must be non-empty.".to_string(),
		});
	}
	if cfg.query.default_limit <= 0 {
		return Err(Error::Validation {
			message: "query.default_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.query.max_limit < cfg.query.default_limit {
		return Err(Error::Validation {
			message: "query.max_limit must be greater than or equal to query.default_limit."
				.to_string(),
		});
	}
	if cfg.search.top == 0 {
		return Err(Error::Validation {
			message: "search.top must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg
		.storage
		.search_index
		.vectorizer
		.as_deref()
		.map(|model| model.trim().is_empty())
		.unwrap_or(false)
	{
		cfg.storage.search_index.vectorizer = None;
	}
}

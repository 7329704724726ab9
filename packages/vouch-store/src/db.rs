use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::sync::OnceCell;

use crate::{Error, Result, schema};

/// Lazily-connected Postgres handle. Nothing touches the network until the
/// first operation asks for the pool.
pub struct Db {
	cfg: vouch_config::Postgres,
	pool: OnceCell<PgPool>,
}
impl Db {
	pub fn new(cfg: &vouch_config::Postgres) -> Self {
		Self { cfg: cfg.clone(), pool: OnceCell::new() }
	}

	/// Single-flight: the first caller runs the connect, concurrent callers
	/// await that attempt instead of opening their own pools. A failed
	/// attempt leaves the cell empty so a later call can try again.
	pub async fn pool(&self) -> Result<&PgPool> {
		self.pool
			.get_or_try_init(|| async {
				PgPoolOptions::new()
					.max_connections(self.cfg.pool_max_conns)
					.connect(&self.cfg.dsn)
					.await
					.map_err(|err| Error::Unavailable(err.to_string()))
			})
			.await
	}

	pub async fn ensure_schema(&self) -> Result<()> {
		let pool = self.pool().await?;
		let lock_id: i64 = 8_609_114;
		// Advisory locks are held per connection. Use a single transaction so
		// the lock is scoped to one connection and released when it ends.
		let mut tx = pool.begin().await?;

		sqlx::query("SELECT pg_advisory_xact_lock($1)").bind(lock_id).execute(&mut *tx).await?;

		for statement in schema::render_schema().split(';') {
			let trimmed = statement.trim();

			if trimmed.is_empty() {
				continue;
			}

			sqlx::query(trimmed).execute(&mut *tx).await?;
		}

		tx.commit().await?;

		Ok(())
	}
}

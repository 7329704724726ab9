pub mod db;
pub mod filter;
pub mod models;
pub mod records;
pub mod schema;
pub mod search_index;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

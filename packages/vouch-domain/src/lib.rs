pub mod dates;
pub mod record;

mod error;

pub use error::Error;
pub use record::Record;

pub type Result<T, E = Error> = std::result::Result<T, E>;

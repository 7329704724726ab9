#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid date boundary {value:?}: {message}")]
	InvalidDate { value: String, message: String },
}
impl Error {
	pub(crate) fn invalid_date(value: &str, message: &str) -> Self {
		Self::InvalidDate { value: value.to_string(), message: message.to_string() }
	}
}

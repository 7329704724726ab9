use vouch_service::Error;

/// The "no result" shape of an operation: absent for point lookups, empty
/// for scans and search.
pub trait EmptyShape {
	fn empty() -> Self;
}
impl<T> EmptyShape for Option<T> {
	fn empty() -> Self {
		None
	}
}
impl<T> EmptyShape for Vec<T> {
	fn empty() -> Self {
		Vec::new()
	}
}

/// The boundary trades error visibility for availability: every failure is
/// logged with full context here, then surfaces to the caller as the
/// operation's empty shape. Components below this line never swallow
/// errors themselves.
pub fn recover<T>(
	operation: &'static str,
	engagement_id: &str,
	keys: &[(&str, &str)],
	result: Result<T, Error>,
) -> T
where
	T: EmptyShape,
{
	match result {
		Ok(value) => value,
		Err(err) => {
			tracing::error!(
				operation,
				engagement_id,
				keys = ?keys,
				kind = err.kind(),
				error = %err,
				"Operation failed; returning an empty result."
			);

			T::empty()
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ok_results_pass_through() {
		let value = recover("get_invoice", "eng-001", &[], Ok(Some("INV-7000".to_string())));

		assert_eq!(value.as_deref(), Some("INV-7000"));
	}

	#[test]
	fn lookup_failures_become_absent() {
		let result: Result<Option<String>, Error> = Err(Error::StoreUnavailable {
			message: "connection refused".to_string(),
		});
		let value = recover("get_invoice", "eng-001", &[("invoice_id", "INV-7000")], result);

		assert!(value.is_none());
	}

	#[test]
	fn scan_failures_become_empty_sequences() {
		let result: Result<Vec<String>, Error> = Err(Error::InvalidRequest {
			message: "Invalid date boundary".to_string(),
		});
		let value = recover("query_invoices", "eng-001", &[], result);

		assert!(value.is_empty());
	}
}

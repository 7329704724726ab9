use time::{
	Date, UtcOffset,
	format_description::{BorrowedFormatItem, well_known::Rfc3339},
	macros::format_description,
};

use crate::{Error, Result};

const BARE_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Canonical UTC boundaries for a date-filtered scan: inclusive lower,
/// exclusive upper. A `None` side emits no predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
	pub lower: Option<String>,
	pub upper: Option<String>,
}

pub fn normalize_range(date_from: Option<&str>, date_to: Option<&str>) -> Result<DateRange> {
	Ok(DateRange { lower: normalize_lower(date_from)?, upper: normalize_upper(date_to)? })
}

/// A bare date maps to midnight UTC of that day; a full timestamp is kept
/// as the same instant rendered in UTC.
pub fn normalize_lower(raw: Option<&str>) -> Result<Option<String>> {
	let Some(raw) = non_empty(raw) else {
		return Ok(None);
	};

	if let Ok(date) = Date::parse(raw, BARE_DATE) {
		return render_midnight(raw, date).map(Some);
	}

	normalize_timestamp(raw).map(Some)
}

/// A bare date maps to midnight UTC of the *following* day, turning the
/// caller's inclusive "through this date" into an exclusive boundary.
pub fn normalize_upper(raw: Option<&str>) -> Result<Option<String>> {
	let Some(raw) = non_empty(raw) else {
		return Ok(None);
	};

	if let Ok(date) = Date::parse(raw, BARE_DATE) {
		let next = date
			.next_day()
			.ok_or_else(|| Error::invalid_date(raw, "date is outside the supported calendar"))?;

		return render_midnight(raw, next).map(Some);
	}

	normalize_timestamp(raw).map(Some)
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
	raw.map(str::trim).filter(|value| !value.is_empty())
}

fn normalize_timestamp(raw: &str) -> Result<String> {
	let parsed = time::OffsetDateTime::parse(raw, &Rfc3339).map_err(|_| {
		Error::invalid_date(raw, "expected YYYY-MM-DD or an RFC 3339 timestamp")
	})?;

	parsed
		.to_offset(UtcOffset::UTC)
		.format(&Rfc3339)
		.map_err(|err| Error::invalid_date(raw, &err.to_string()))
}

fn render_midnight(raw: &str, date: Date) -> Result<String> {
	date.midnight()
		.assume_utc()
		.format(&Rfc3339)
		.map_err(|err| Error::invalid_date(raw, &err.to_string()))
}

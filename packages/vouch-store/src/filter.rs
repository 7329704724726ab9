use vouch_domain::dates::DateRange;

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
	Text(String),
	Number(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
	Eq,
	Gte,
	Lte,
	Lt,
}
impl Op {
	pub fn sql(self) -> &'static str {
		match self {
			Self::Eq => "=",
			Self::Gte => ">=",
			Self::Lte => "<=",
			Self::Lt => "<",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
	pub field: &'static str,
	pub op: Op,
	pub value: Scalar,
}

/// Ordered predicate clauses plus bound values for one filtered scan.
/// Clause order is append order, so repeated builds from the same criteria
/// render the same query text.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
	predicates: Vec<Predicate>,
	limit: i64,
}
impl FilterQuery {
	/// Tenant equality is always the first clause; nothing in this module
	/// can build a query without it.
	pub fn scoped(engagement_id: &str, limit: i64) -> Self {
		let predicate = Predicate {
			field: "engagement_id",
			op: Op::Eq,
			value: Scalar::Text(engagement_id.to_string()),
		};

		Self { predicates: vec![predicate], limit }
	}

	pub fn eq_text(mut self, field: &'static str, value: Option<&str>) -> Self {
		if let Some(value) = non_empty(value) {
			self.predicates.push(Predicate {
				field,
				op: Op::Eq,
				value: Scalar::Text(value.to_string()),
			});
		}

		self
	}

	/// Inclusive lower, exclusive upper. The bounds arrive already
	/// normalized to canonical UTC strings.
	pub fn date_range(mut self, field: &'static str, range: &DateRange) -> Self {
		if let Some(lower) = range.lower.as_deref() {
			self.predicates.push(Predicate {
				field,
				op: Op::Gte,
				value: Scalar::Text(lower.to_string()),
			});
		}
		if let Some(upper) = range.upper.as_deref() {
			self.predicates.push(Predicate {
				field,
				op: Op::Lt,
				value: Scalar::Text(upper.to_string()),
			});
		}

		self
	}

	pub fn min_number(mut self, field: &'static str, value: Option<f64>) -> Self {
		if let Some(value) = value {
			self.predicates.push(Predicate { field, op: Op::Gte, value: Scalar::Number(value) });
		}

		self
	}

	pub fn max_number(mut self, field: &'static str, value: Option<f64>) -> Self {
		if let Some(value) = value {
			self.predicates.push(Predicate { field, op: Op::Lte, value: Scalar::Number(value) });
		}

		self
	}

	pub fn predicates(&self) -> &[Predicate] {
		&self.predicates
	}

	pub fn limit(&self) -> i64 {
		self.limit
	}
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|value| !value.is_empty())
}

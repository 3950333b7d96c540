use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{booking::BookingRequest, validate::{self, FieldError}};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
	Date,
	Time,
	FullName,
	Phone,
	Email,
	Service,
}

impl Field {
	pub const ALL: [Self; 6] = [
		Self::Date,
		Self::Time,
		Self::FullName,
		Self::Phone,
		Self::Email,
		Self::Service,
	];

	/// Used as the html `id`/`name` of the input
	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			Self::Date => "fecha",
			Self::Time => "hora",
			Self::FullName => "nombre",
			Self::Phone => "telefono",
			Self::Email => "email",
			Self::Service => "servicio",
		}
	}

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Date => "Fecha",
			Self::Time => "Hora",
			Self::FullName => "Nombre completo",
			Self::Phone => "Teléfono",
			Self::Email => "Email",
			Self::Service => "Servicio",
		}
	}

	/// Runs this field's validator, throwing away the parsed value
	pub fn check(self, value: &str, today: NaiveDate) -> Result<(), FieldError> {
		match self {
			Self::Date => validate::date(value, today).map(drop),
			Self::Time => validate::time(value).map(drop),
			Self::FullName => validate::full_name(value).map(drop),
			Self::Phone => validate::phone(value).map(drop),
			Self::Email => validate::email(value).map(drop),
			Self::Service => validate::service(value).map(drop),
		}
	}
}

/// What the user has typed so far, plus whatever's currently wrong with it.
///
/// Values are kept raw (exactly as typed) so that a failed submission gives the user back their
/// input untouched. Only [`FormState::validate`] turns them into a typed [`BookingRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
	values: BTreeMap<Field, String>,
	errors: BTreeMap<Field, FieldError>,
}

impl FormState {
	#[must_use]
	pub fn value(&self, field: Field) -> &str {
		self.values.get(&field).map_or("", String::as_str)
	}

	#[must_use]
	pub fn error(&self, field: Field) -> Option<&FieldError> {
		self.errors.get(&field)
	}

	#[must_use]
	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	/// Records a new value for `field` and re-checks just that field
	pub fn set(&mut self, field: Field, value: impl Into<String>, today: NaiveDate) {
		let value = value.into();
		self.mark(field, field.check(&value, today));
		self.values.insert(field, value);
	}

	fn mark(&mut self, field: Field, res: Result<(), FieldError>) {
		match res {
			Ok(()) => { self.errors.remove(&field); },
			Err(err) => { self.errors.insert(field, err); }
		}
	}

	/// Re-checks every field, regardless of whether it's been touched, and marks every failure.
	/// Returns the fields that failed if there were any.
	pub fn validate(&mut self, today: NaiveDate) -> Result<BookingRequest, Vec<Field>> {
		for field in Field::ALL {
			let res = field.check(self.value(field), today);
			self.mark(field, res);
		}

		self.build(today)
			.map_err(|_| self.errors.keys().copied().collect())
	}

	fn build(&self, today: NaiveDate) -> Result<BookingRequest, FieldError> {
		Ok(BookingRequest {
			date: validate::date(self.value(Field::Date), today)?,
			time: validate::time(self.value(Field::Time))?,
			full_name: validate::full_name(self.value(Field::FullName))?.to_string(),
			phone: validate::phone(self.value(Field::Phone))?.to_string(),
			email: validate::email(self.value(Field::Email))?.to_string(),
			service: validate::service(self.value(Field::Service))?,
		})
	}

	pub fn reset(&mut self) {
		self.values.clear();
		self.errors.clear();
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::catalog::Service;

	pub fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
	}

	pub fn filled() -> FormState {
		let mut form = FormState::default();
		form.set(Field::Date, "2026-10-20", today());
		form.set(Field::Time, "11:00", today());
		form.set(Field::FullName, "  Lucía Fernández ", today());
		form.set(Field::Phone, "612345678", today());
		form.set(Field::Email, "lucia@example.com", today());
		form.set(Field::Service, Service::Dermapen.name(), today());
		form
	}

	#[test]
	fn edits_are_checked_inline() {
		let mut form = FormState::default();
		form.set(Field::Phone, "12345", today());
		assert_eq!(form.error(Field::Phone), Some(&FieldError::PhoneInvalid));
		assert_eq!(form.value(Field::Phone), "12345");

		form.set(Field::Phone, "612345678", today());
		assert_eq!(form.error(Field::Phone), None);
		assert_eq!(form.value(Field::Phone), "612345678");

		// untouched fields aren't flagged until submission
		assert_eq!(form.error(Field::Email), None);
		assert!(!form.has_errors());
	}

	#[test]
	fn last_write_wins() {
		let mut form = FormState::default();
		form.set(Field::FullName, "A", today());
		form.set(Field::FullName, "Ana", today());
		assert_eq!(form.value(Field::FullName), "Ana");
		assert_eq!(form.error(Field::FullName), None);
	}

	#[test]
	fn validate_builds_request_from_clean_form() {
		let req = filled().validate(today()).unwrap();
		assert_eq!(req.full_name(), "Lucía Fernández");
		assert_eq!(req.service(), Service::Dermapen);
		assert_eq!(req.time().to_string(), "11:00");
		assert_eq!(req.date(), NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
	}

	#[test]
	fn validate_marks_every_bad_field() {
		let mut form = FormState::default();
		form.set(Field::FullName, "Lucía", today());

		let failed = form.validate(today()).unwrap_err();
		assert_eq!(failed, [Field::Date, Field::Time, Field::Phone, Field::Email, Field::Service]);
		assert_eq!(form.error(Field::Service), Some(&FieldError::ServiceMissing));
		assert_eq!(form.error(Field::FullName), None);
	}

	#[test]
	fn validate_catches_stale_dates() {
		// the date was fine when it was typed, but the day has since rolled over
		let mut form = filled();
		let later = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
		assert_eq!(form.validate(later).unwrap_err(), [Field::Date]);
		assert_eq!(form.error(Field::Date), Some(&FieldError::DateNotInFuture));
	}

	#[test]
	fn reset_clears_everything() {
		let mut form = filled();
		form.set(Field::Email, "nope", today());
		form.reset();
		assert_eq!(form, FormState::default());
		for field in Field::ALL {
			assert_eq!(form.value(field), "");
		}
	}
}

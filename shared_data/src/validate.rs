//! Per-field predicates for the booking form.
//!
//! Every function here is pure: the same input (and the same `today`) always produces the same
//! answer, so the form can run them on every keystroke. Rejection reasons are written in Spanish
//! because they're shown directly next to the offending input.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::catalog::{Service, TimeSlot};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

// what an `<input type="date">` hands back
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
	#[error("Selecciona una fecha")]
	DateMissing,
	#[error("La fecha no es válida")]
	DateMalformed,
	#[error("La fecha debe ser posterior a hoy")]
	DateNotInFuture,
	#[error("Selecciona un horario")]
	TimeMissing,
	#[error("Selecciona un horario entre las 09:00 y las 20:00")]
	TimeNotOffered,
	#[error("El nombre debe tener al menos 2 caracteres")]
	NameTooShort,
	#[error("El nombre no puede superar los 100 caracteres")]
	NameTooLong,
	#[error("Introduce un número de móvil español válido")]
	PhoneInvalid,
	#[error("El email es obligatorio")]
	EmailMissing,
	#[error("Introduce un email válido")]
	EmailInvalid,
	#[error("Selecciona un servicio")]
	ServiceMissing,
	#[error("Ese servicio no está disponible")]
	ServiceUnknown,
}

fn phone_regex() -> &'static Regex {
	static PHONE: OnceLock<Regex> = OnceLock::new();
	// the patterns are constant, so if these compile once they always compile.
	// `[0-9]` rather than `\d` since the latter would also let through non-ascii digits
	PHONE.get_or_init(|| Regex::new(r"^(\+34|0034|34)?[6789][0-9]{8}$").unwrap())
}

fn email_regex() -> &'static Regex {
	static EMAIL: OnceLock<Regex> = OnceLock::new();
	// the domain needs at least two labels and none of them may be empty
	EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").unwrap())
}

/// `value` is the `yyyy-mm-dd` string from the date picker. It has to land strictly after
/// `today`, so a booking for today is turned away just like one in the past.
pub fn date(value: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
	let value = value.trim();
	if value.is_empty() {
		return Err(FieldError::DateMissing);
	}

	let date = NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT)
		.map_err(|_| FieldError::DateMalformed)?;

	if date > today {
		Ok(date)
	} else {
		Err(FieldError::DateNotInFuture)
	}
}

pub fn time(value: &str) -> Result<TimeSlot, FieldError> {
	if value.is_empty() {
		return Err(FieldError::TimeMissing);
	}
	TimeSlot::parse(value).ok_or(FieldError::TimeNotOffered)
}

/// Returns the trimmed name. Length is counted in chars, not bytes, so accents don't count double.
pub fn full_name(value: &str) -> Result<&str, FieldError> {
	let trimmed = value.trim();
	match trimmed.chars().count() {
		n if n < NAME_MIN_CHARS => Err(FieldError::NameTooShort),
		n if n > NAME_MAX_CHARS => Err(FieldError::NameTooLong),
		_ => Ok(trimmed),
	}
}

pub fn phone(value: &str) -> Result<&str, FieldError> {
	if phone_regex().is_match(value) {
		Ok(value)
	} else {
		Err(FieldError::PhoneInvalid)
	}
}

pub fn email(value: &str) -> Result<&str, FieldError> {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		Err(FieldError::EmailMissing)
	} else if email_regex().is_match(trimmed) {
		Ok(trimmed)
	} else {
		Err(FieldError::EmailInvalid)
	}
}

pub fn service(value: &str) -> Result<Service, FieldError> {
	if value.is_empty() {
		return Err(FieldError::ServiceMissing);
	}
	Service::from_name(value).ok_or(FieldError::ServiceUnknown)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
	}

	#[test]
	fn phone_accepts_spanish_mobiles() {
		for ok in [
			"603381502",
			"+34603381502",
			"0034603381502",
			"34603381502",
			"712345678",
			"812345678",
			"912345678",
		] {
			assert_eq!(phone(ok), Ok(ok), "{ok} should be accepted");
		}
	}

	#[test]
	fn phone_rejects_everything_else() {
		for bad in [
			"123456789",
			"+34512345678",
			"60338150",
			"6033815022",
			"+33603381502",
			"+3460338150",
			"603 381 502",
			" 603381502",
			"+34 603381502",
			"",
			"6o3381502",
			"٦٠٣٣٨١٥٠٢",
		] {
			assert_eq!(phone(bad), Err(FieldError::PhoneInvalid), "{bad:?} should be rejected");
		}
	}

	#[test]
	fn date_must_be_strictly_after_today() {
		assert_eq!(date("2026-10-16", today()), Err(FieldError::DateNotInFuture));
		assert_eq!(date("2026-10-15", today()), Err(FieldError::DateNotInFuture));
		assert_eq!(date("2020-01-01", today()), Err(FieldError::DateNotInFuture));
		assert_eq!(date("2026-10-17", today()), NaiveDate::from_ymd_opt(2026, 10, 17).ok_or(FieldError::DateMalformed));
		assert!(date("2027-03-01", today()).is_ok());
	}

	#[test]
	fn date_rejects_garbage() {
		assert_eq!(date("", today()), Err(FieldError::DateMissing));
		assert_eq!(date("   ", today()), Err(FieldError::DateMissing));
		assert_eq!(date("17/10/2026", today()), Err(FieldError::DateMalformed));
		assert_eq!(date("2026-02-30", today()), Err(FieldError::DateMalformed));
	}

	#[test]
	fn name_length_bounds() {
		assert_eq!(full_name("Jo"), Ok("Jo"));
		assert_eq!(full_name("  Jo  "), Ok("Jo"));
		assert_eq!(full_name(&"a".repeat(100)).map(str::len), Ok(100));
		assert_eq!(full_name("J"), Err(FieldError::NameTooShort));
		assert_eq!(full_name(" J "), Err(FieldError::NameTooShort));
		assert_eq!(full_name(""), Err(FieldError::NameTooShort));
		assert_eq!(full_name(&"a".repeat(101)), Err(FieldError::NameTooLong));
		// 100 chars but 200 bytes
		assert!(full_name(&"é".repeat(100)).is_ok());
		// no restrictions on what the characters actually are
		assert!(full_name("María-José O'Neill 3º").is_ok());
	}

	#[test]
	fn email_format() {
		assert_eq!(email("grether.aesthetics86@gmail.com"), Ok("grether.aesthetics86@gmail.com"));
		assert_eq!(email(" ana@example.es "), Ok("ana@example.es"));
		assert_eq!(email(""), Err(FieldError::EmailMissing));
		assert_eq!(email("ana"), Err(FieldError::EmailInvalid));
		assert_eq!(email("ana@example"), Err(FieldError::EmailInvalid));
		assert_eq!(email("ana maria@example.com"), Err(FieldError::EmailInvalid));
		assert_eq!(email("ana@@example.com"), Err(FieldError::EmailInvalid));
		assert_eq!(email("a@.b.c"), Err(FieldError::EmailInvalid));
		assert_eq!(email("a@b..c"), Err(FieldError::EmailInvalid));
		assert_eq!(email("ana@example."), Err(FieldError::EmailInvalid));
		assert_eq!(email("ana@mail.example.es"), Ok("ana@mail.example.es"));
	}

	#[test]
	fn time_and_service_must_be_listed() {
		assert!(time("09:00").is_ok());
		assert_eq!(time(""), Err(FieldError::TimeMissing));
		assert_eq!(time("21:00"), Err(FieldError::TimeNotOffered));
		assert_eq!(service(""), Err(FieldError::ServiceMissing));
		assert_eq!(service("Peeling Químico"), Ok(Service::ChemicalPeel));
		assert_eq!(service("Botox"), Err(FieldError::ServiceUnknown));
	}

	#[test]
	fn validators_have_no_hidden_state() {
		for input in ["603381502", "nope", "+34912345678"] {
			assert_eq!(phone(input), phone(input));
		}
		for input in ["2026-10-16", "2026-10-17", "x"] {
			assert_eq!(date(input, today()), date(input, today()));
		}
		for input in ["J", "Jo", ""] {
			assert_eq!(full_name(input), full_name(input));
		}
		assert_eq!(email("a@b.co"), email("a@b.co"));
	}
}

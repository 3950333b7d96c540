use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::catalog::{Service, TimeSlot};

// the spreadsheet is read by people in Spain, so dates go in the local day-first order
const SHEET_DATE_FORMAT: &str = "%d/%m/%Y";

/// A booking that has passed every field check. The only way to get one is
/// [`crate::form::FormState::validate`], so holding one means it's safe to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingRequest {
	pub(crate) date: NaiveDate,
	pub(crate) time: TimeSlot,
	pub(crate) full_name: String,
	pub(crate) phone: String,
	pub(crate) email: String,
	pub(crate) service: Service,
}

impl BookingRequest {
	#[must_use]
	pub fn date(&self) -> NaiveDate {
		self.date
	}

	#[must_use]
	pub fn time(&self) -> TimeSlot {
		self.time
	}

	#[must_use]
	pub fn full_name(&self) -> &str {
		&self.full_name
	}

	#[must_use]
	pub fn phone(&self) -> &str {
		&self.phone
	}

	#[must_use]
	pub fn email(&self) -> &str {
		&self.email
	}

	#[must_use]
	pub fn service(&self) -> Service {
		self.service
	}

	/// The flat key/value shape the booking sheet expects, in the order its columns appear.
	/// `submitted_at` becomes the `timestamp` column.
	#[must_use]
	pub fn form_fields(&self, submitted_at: DateTime<Utc>) -> Vec<(&'static str, String)> {
		vec![
			("fecha", self.date.format(SHEET_DATE_FORMAT).to_string()),
			("hora", self.time.to_string()),
			("nombre", self.full_name.clone()),
			("telefono", self.phone.clone()),
			("email", self.email.clone()),
			("servicio", self.service.name().to_string()),
			("timestamp", submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
		]
	}

	/// `application/x-www-form-urlencoded` body for the booking endpoint
	pub fn encode(&self, submitted_at: DateTime<Utc>) -> Result<String, serde_urlencoded::ser::Error> {
		serde_urlencoded::to_string(self.form_fields(submitted_at))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::{tests::{filled, today}, Field};

	fn request() -> BookingRequest {
		BookingRequest {
			date: NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
			time: TimeSlot::parse("09:30").unwrap(),
			full_name: "María López".into(),
			phone: "+34603381502".into(),
			email: "maria@example.com".into(),
			service: Service::ChemicalPeel,
		}
	}

	fn submitted_at() -> DateTime<Utc> {
		DateTime::from_timestamp_millis(1_792_152_000_123).unwrap()
	}

	#[test]
	fn fields_are_flat_text() {
		let fields = request().form_fields(submitted_at());
		let keys = fields.iter().map(|(k, _)| *k).collect::<Vec<_>>();
		assert_eq!(keys, ["fecha", "hora", "nombre", "telefono", "email", "servicio", "timestamp"]);

		assert_eq!(fields[0].1, "03/11/2026");
		assert_eq!(fields[1].1, "09:30");
		assert_eq!(fields[5].1, "Peeling Químico");
		assert_eq!(fields[6].1, "2026-10-16T12:00:00.123Z");
	}

	#[test]
	fn encoded_body_escapes_values() {
		let body = request().encode(submitted_at()).unwrap();
		assert!(body.starts_with("fecha=03%2F11%2F2026&hora=09%3A30&"));
		assert!(body.contains("nombre=Mar%C3%ADa+L%C3%B3pez"));
		assert!(body.contains("telefono=%2B34603381502"));
		assert!(body.contains("email=maria%40example.com"));

		let decoded: Vec<(String, String)> = serde_urlencoded::from_str(&body).unwrap();
		assert_eq!(decoded[2], ("nombre".to_string(), "María López".to_string()));
	}

	#[test]
	fn sheet_only_sees_offered_slots() {
		for slot in TimeSlot::all() {
			let mut form = filled();
			form.set(Field::Time, slot.to_string(), today());
			let req = form.validate(today()).unwrap();

			let fields = req.form_fields(submitted_at());
			assert_eq!(TimeSlot::parse(&fields[1].1), Some(slot));
		}

		let mut form = filled();
		form.set(Field::Time, "00:05", today());
		assert_eq!(form.validate(today()), Err(vec![Field::Time]));
	}
}

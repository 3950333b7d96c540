use std::{cell::Cell, rc::Rc};

use chrono::{DateTime, FixedOffset, Utc};
use tracing::{info, warn};

use crate::{
	form::{Field, FormState},
	interpret::{self, RawResponse, SubmissionOutcome, CONNECTION_ERROR},
	notice::Notice,
};

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Gets an encoded booking to the sheet. The frontend implements this with a browser fetch; tests
/// implement it with a fake.
#[allow(async_fn_in_trait)]
pub trait BookingTransport {
	/// `body` is already `application/x-www-form-urlencoded`. Exactly one attempt, no retries.
	async fn send(&self, body: String) -> Result<RawResponse, TransportError>;
}

pub trait Notifier {
	fn notify(&self, notice: Notice);
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
	#[error("the form has errors in {0:?}")]
	Invalid(Vec<Field>),
	#[error("a booking is already being sent")]
	InFlight,
}

/// Whether a booking is currently on its way. Clones share the same flag, so the ui can hold one
/// to grey out the submit button while the controller holds another.
#[derive(Clone, Debug, Default)]
pub struct InFlight(Rc<Cell<bool>>);

impl InFlight {
	#[must_use]
	pub fn get(&self) -> bool {
		self.0.get()
	}

	/// Raises the flag, unless it's already up. It comes back down when the guard is dropped.
	#[must_use]
	pub fn begin(&self) -> Option<InFlightGuard> {
		if self.0.replace(true) {
			None
		} else {
			Some(InFlightGuard(self.0.clone()))
		}
	}
}

#[must_use]
pub struct InFlightGuard(Rc<Cell<bool>>);

impl Drop for InFlightGuard {
	fn drop(&mut self) {
		self.0.set(false);
	}
}

pub struct SubmitController<T, N> {
	transport: T,
	notifier: N,
	fallback_contact: String,
	in_flight: InFlight,
}

impl<T: BookingTransport, N: Notifier> SubmitController<T, N> {
	pub fn new(transport: T, notifier: N, fallback_contact: impl Into<String>) -> Self {
		Self {
			transport,
			notifier,
			fallback_contact: fallback_contact.into(),
			in_flight: InFlight::default(),
		}
	}

	#[must_use]
	pub fn in_flight(&self) -> InFlight {
		self.in_flight.clone()
	}

	/// Validates and sends whatever's in `form`.
	///
	/// `now` is the user's local time: its date decides what counts as "in the future" and its
	/// instant becomes the booking's timestamp. On success the form is cleared; on failure it's
	/// left alone so they can fix things and try again. Nothing goes over the network unless the
	/// whole form is valid and no other booking is in flight.
	pub async fn submit(
		&self,
		form: &mut FormState,
		now: DateTime<FixedOffset>
	) -> Result<SubmissionOutcome, SubmitError> {
		if self.in_flight.get() {
			warn!("Ignoring booking submission while another is in flight");
			return Err(SubmitError::InFlight);
		}

		let request = match form.validate(now.date_naive()) {
			Ok(req) => req,
			Err(fields) => {
				info!(?fields, "Booking form failed validation");
				self.notifier.notify(Notice::invalid_form());
				return Err(SubmitError::Invalid(fields));
			}
		};

		let Some(_guard) = self.in_flight.begin() else {
			return Err(SubmitError::InFlight);
		};

		info!(service = %request.service, date = %request.date, time = %request.time, "Sending booking");

		let outcome = match request.encode(now.with_timezone(&Utc)) {
			Err(e) => {
				warn!("Couldn't encode booking: {e}");
				SubmissionOutcome::Failure(format!("No se pudo preparar la reserva ({e})"))
			},
			Ok(body) => match self.transport.send(body).await {
				Ok(response) => interpret::interpret(&response),
				Err(e) => {
					warn!("Booking request failed to complete: {e}");
					SubmissionOutcome::Failure(CONNECTION_ERROR.into())
				}
			}
		};

		match &outcome {
			SubmissionOutcome::Success | SubmissionOutcome::AmbiguousSuccess => {
				info!(?outcome, "Booking accepted");
				form.reset();
				self.notifier.notify(Notice::booking_sent());
			},
			SubmissionOutcome::Failure(reason) => {
				warn!(%reason, "Booking was not accepted");
				self.notifier.notify(Notice::booking_failed(reason, &self.fallback_contact));
			}
		}

		Ok(outcome)
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use chrono::NaiveDate;

	use super::*;
	use crate::{
		form::tests::{filled, today},
		notice::NoticeKind,
		validate::FieldError,
	};

	struct FakeSheet {
		calls: Cell<usize>,
		bodies: RefCell<Vec<String>>,
		reply: Result<RawResponse, TransportError>,
		// records whether the flag was up while we were "on the network"
		watch: RefCell<Option<InFlight>>,
		seen_in_flight: Cell<Option<bool>>,
	}

	impl FakeSheet {
		fn replying(reply: Result<RawResponse, TransportError>) -> Self {
			Self {
				calls: Cell::new(0),
				bodies: RefCell::default(),
				reply,
				watch: RefCell::default(),
				seen_in_flight: Cell::new(None),
			}
		}

		fn ok(content_type: Option<&str>, body: &str) -> Self {
			Self::replying(Ok(RawResponse {
				status: 200,
				content_type: content_type.map(str::to_string),
				body: body.into()
			}))
		}
	}

	impl BookingTransport for &FakeSheet {
		async fn send(&self, body: String) -> Result<RawResponse, TransportError> {
			self.calls.set(self.calls.get() + 1);
			self.bodies.borrow_mut().push(body);
			if let Some(flag) = self.watch.borrow().as_ref() {
				self.seen_in_flight.set(Some(flag.get()));
			}
			self.reply.clone()
		}
	}

	#[derive(Default)]
	struct Toasts(RefCell<Vec<Notice>>);

	impl Notifier for &Toasts {
		fn notify(&self, notice: Notice) {
			self.0.borrow_mut().push(notice);
		}
	}

	fn now() -> DateTime<FixedOffset> {
		// 2026-10-16 10:00 in Palma (CEST)
		NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
			.and_hms_opt(10, 0, 0).unwrap()
			.and_local_timezone(FixedOffset::east_opt(2 * 3600).unwrap())
			.unwrap()
	}

	#[tokio::test]
	async fn invalid_form_never_touches_the_network() {
		let sheet = FakeSheet::ok(None, "");
		let toasts = Toasts::default();
		let controller = SubmitController::new(&sheet, &toasts, "+34 603 381 502");

		let mut form = filled();
		form.set(Field::Service, "", today());

		let res = controller.submit(&mut form, now()).await;
		assert_eq!(res, Err(SubmitError::Invalid(vec![Field::Service])));
		assert_eq!(sheet.calls.get(), 0);
		assert_eq!(form.error(Field::Service), Some(&FieldError::ServiceMissing));
		// what they typed is still there
		assert_eq!(form.value(Field::Phone), "612345678");
		assert_eq!(toasts.0.borrow().as_slice(), [Notice::invalid_form()]);
		assert!(!controller.in_flight().get());
	}

	#[tokio::test]
	async fn success_resets_the_form() {
		let sheet = FakeSheet::ok(Some("application/json"), r#"{"status":"success"}"#);
		let toasts = Toasts::default();
		let controller = SubmitController::new(&sheet, &toasts, "+34 603 381 502");
		*sheet.watch.borrow_mut() = Some(controller.in_flight());

		let mut form = filled();
		let res = controller.submit(&mut form, now()).await;

		assert_eq!(res, Ok(SubmissionOutcome::Success));
		assert_eq!(sheet.calls.get(), 1);
		assert_eq!(sheet.seen_in_flight.get(), Some(true));
		assert!(!controller.in_flight().get());
		assert_eq!(form, FormState::default());
		assert_eq!(toasts.0.borrow().as_slice(), [Notice::booking_sent()]);

		let body = sheet.bodies.borrow()[0].clone();
		assert!(body.starts_with("fecha=20%2F10%2F2026&hora=11%3A00&nombre=Luc%C3%ADa+Fern%C3%A1ndez&"));
		assert!(body.contains("servicio=Dermapen+%2F+Microagujas"));
		// 10:00 in +02:00 is 08:00 utc
		assert!(body.ends_with("timestamp=2026-10-16T08%3A00%3A00.000Z"));
	}

	#[tokio::test]
	async fn unreadable_ok_counts_as_sent() {
		let sheet = FakeSheet::ok(None, "");
		let toasts = Toasts::default();
		let controller = SubmitController::new(&sheet, &toasts, "+34 603 381 502");

		let mut form = filled();
		assert_eq!(controller.submit(&mut form, now()).await, Ok(SubmissionOutcome::AmbiguousSuccess));
		assert_eq!(form, FormState::default());
		assert_eq!(toasts.0.borrow()[0].kind, NoticeKind::Success);
		assert!(!controller.in_flight().get());
	}

	#[tokio::test]
	async fn server_failure_keeps_input() {
		let sheet = FakeSheet::ok(Some("application/json"), r#"{"status":"error","message":"Servidor ocupado"}"#);
		let toasts = Toasts::default();
		let controller = SubmitController::new(&sheet, &toasts, "+34 603 381 502");

		let mut form = filled();
		let before = form.clone();
		let res = controller.submit(&mut form, now()).await;

		assert_eq!(res, Ok(SubmissionOutcome::Failure("Servidor ocupado".into())));
		assert_eq!(form, before);
		assert!(!controller.in_flight().get());

		let toasts = toasts.0.borrow();
		assert_eq!(toasts.len(), 1);
		assert!(toasts[0].is_error());
		assert!(toasts[0].description.contains("Servidor ocupado"));
		assert!(toasts[0].description.contains("+34 603 381 502"));
	}

	#[tokio::test]
	async fn network_error_is_a_generic_failure() {
		let sheet = FakeSheet::replying(Err(TransportError("TypeError: Failed to fetch".into())));
		let toasts = Toasts::default();
		let controller = SubmitController::new(&sheet, &toasts, "+34 603 381 502");

		let mut form = filled();
		let res = controller.submit(&mut form, now()).await;

		assert_eq!(res, Ok(SubmissionOutcome::Failure(CONNECTION_ERROR.into())));
		assert_eq!(sheet.calls.get(), 1);
		assert_eq!(form.value(Field::Email), "lucia@example.com");
		assert!(!controller.in_flight().get());
		assert!(toasts.0.borrow()[0].description.starts_with(CONNECTION_ERROR));
	}

	#[tokio::test]
	async fn no_second_submission_while_one_is_in_flight() {
		let sheet = FakeSheet::ok(None, "");
		let toasts = Toasts::default();
		let controller = SubmitController::new(&sheet, &toasts, "+34 603 381 502");

		let held = controller.in_flight().begin();
		assert!(held.is_some());

		let mut form = filled();
		assert_eq!(controller.submit(&mut form, now()).await, Err(SubmitError::InFlight));
		assert_eq!(sheet.calls.get(), 0);
		assert!(toasts.0.borrow().is_empty());

		drop(held);
		assert!(!controller.in_flight().get());
		assert!(controller.submit(&mut form, now()).await.is_ok());
		assert_eq!(sheet.calls.get(), 1);
	}

	#[test]
	fn guard_lowers_flag_on_drop() {
		let flag = InFlight::default();
		let guard = flag.begin();
		assert!(flag.get());
		assert!(flag.begin().is_none());
		drop(guard);
		assert!(!flag.get());
		assert!(flag.begin().is_some());
	}
}

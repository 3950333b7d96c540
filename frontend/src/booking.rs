use std::{cell::Cell, rc::Rc};

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use gloo_console::{error, log};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use shared_data::{
	submit::{BookingTransport, Notifier, SubmitController, SubmitError, TransportError},
	Field,
	FormState,
	Notice,
	NoticeKind,
	RawResponse,
	Service,
	TimeSlot,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::{layout::{scroll_to, Page}, use_site_config};

// how long a toast stays up if nobody closes it
const TOAST_MILLIS: u32 = 5000;

static BOOKING_STYLE: &str = r"
#booking {
	padding: 120px 0 64px 0;
	background: linear-gradient(135deg, var(--soft-background), var(--background));
}
#booking-box {
	max-width: 760px;
	margin: 0 auto;
}
#booking-form {
	background-color: var(--card-background);
	border: 1px solid var(--border-color);
	border-radius: 16px;
	padding: 32px;
	box-shadow: 0 12px 30px rgba(58, 42, 47, 0.12);
}
#booking-form fieldset {
	border: none;
	padding: 0;
	margin: 0;
	display: grid;
	gap: 20px;
	grid-template-columns: 1fr 1fr;
}
.field.wide {
	grid-column: 1 / -1;
}
.field label {
	display: block;
	font-weight: 600;
	margin-bottom: 6px;
}
.field input, .field select {
	width: 100%;
	padding: 10px 12px;
	font-size: 1rem;
	border: 1px solid var(--border-color);
	border-radius: 8px;
	background-color: var(--background);
	color: var(--main-text);
}
.field.invalid input, .field.invalid select {
	border-color: var(--error);
}
.field-error {
	color: var(--error);
	font-size: 0.85rem;
	margin: 4px 0 0 0;
}
#booking-form .btn {
	width: 100%;
	margin-top: 24px;
}
#unconfigured {
	border-left: 3px solid var(--accent);
	padding-left: 12px;
}
#other-contact {
	text-align: center;
	margin-top: 32px;
}
#other-contact div {
	display: flex;
	gap: 20px;
	justify-content: center;
	flex-wrap: wrap;
}
#toasts {
	position: fixed;
	top: 96px;
	right: 24px;
	z-index: 60;
	display: flex;
	flex-direction: column;
	gap: 12px;
	max-width: 380px;
}
.toast {
	background-color: var(--card-background);
	border: 1px solid var(--border-color);
	border-left: 4px solid var(--primary);
	border-radius: 10px;
	padding: 14px 40px 14px 16px;
	position: relative;
	box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
}
.toast.error {
	border-left-color: var(--error);
}
.toast p {
	margin: 4px 0 0 0;
	font-size: 0.9rem;
	color: var(--muted-text);
}
.toast button {
	position: absolute;
	top: 8px;
	right: 10px;
	background: none;
	border: none;
	cursor: pointer;
	font-size: 1.1rem;
}
";

/// The user's clock, in their own timezone. "Tomorrow" for the date check means tomorrow where
/// they are, not where the server is.
fn local_now() -> DateTime<FixedOffset> {
	let now = js_sys::Date::new_0();
	// getTimezoneOffset is minutes *behind* utc, so it's backwards from what chrono wants
	let offset = FixedOffset::east_opt(-(now.get_timezone_offset() as i32) * 60)
		.unwrap_or_else(|| Utc.fix());

	DateTime::from_timestamp_millis(now.get_time() as i64)
		.unwrap_or_default()
		.with_timezone(&offset)
}

fn local_today() -> NaiveDate {
	local_now().date_naive()
}

/// Posts bookings to the configured endpoint with the browser's fetch
struct GlooTransport {
	endpoint: String,
}

impl BookingTransport for GlooTransport {
	async fn send(&self, body: String) -> Result<RawResponse, TransportError> {
		if self.endpoint.trim().is_empty() {
			return Err(TransportError("no booking endpoint is configured".into()));
		}

		let res = Request::post(&self.endpoint)
			.header("Content-Type", "application/x-www-form-urlencoded")
			.body(body)
			.map_err(|e| TransportError(e.to_string()))?
			.send()
			.await
			.map_err(|e| TransportError(e.to_string()))?;

		let status = res.status();
		let content_type = res.headers().get("content-type");
		// a body we can't read is treated the same as an empty one
		let body = res.text().await.unwrap_or_else(|e| {
			log!(format!("Couldn't read booking response body: {e}"));
			String::new()
		});

		Ok(RawResponse { status, content_type, body })
	}
}

#[derive(Clone, Default, PartialEq)]
struct Toasts(Vec<(u32, Notice)>);

enum ToastMsg {
	Show(u32, Notice),
	Dismiss(u32),
}

impl Reducible for Toasts {
	type Action = ToastMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut toasts = Rc::unwrap_or_clone(self);
		match action {
			ToastMsg::Show(id, notice) => toasts.0.push((id, notice)),
			ToastMsg::Dismiss(id) => toasts.0.retain(|(toast_id, _)| *toast_id != id),
		}
		toasts.into()
	}
}

struct ToastNotifier {
	toasts: UseReducerDispatcher<Toasts>,
	next_id: Cell<u32>,
}

impl Notifier for ToastNotifier {
	fn notify(&self, notice: Notice) {
		let id = self.next_id.get();
		self.next_id.set(id.wrapping_add(1));

		match notice.kind {
			NoticeKind::Success => log!(format!("{}: {}", notice.title, notice.description)),
			NoticeKind::Error => error!(format!("{}: {}", notice.title, notice.description)),
		}

		self.toasts.dispatch(ToastMsg::Show(id, notice));

		let toasts = self.toasts.clone();
		Timeout::new(TOAST_MILLIS, move || toasts.dispatch(ToastMsg::Dismiss(id))).forget();
	}
}

#[derive(Clone, Default, PartialEq)]
struct BookingForm {
	state: FormState,
}

enum FormMsg {
	Edit(Field, String, NaiveDate),
	// after a submission, whatever the controller left the form as
	Replace(FormState),
}

impl Reducible for BookingForm {
	type Action = FormMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		match action {
			FormMsg::Edit(field, value, today) => {
				let mut form = Rc::unwrap_or_clone(self);
				form.state.set(field, value, today);
				form.into()
			},
			FormMsg::Replace(state) => Self { state }.into(),
		}
	}
}

#[derive(Properties, PartialEq)]
struct FieldRowProps {
	field: Field,
	error: Option<String>,
	#[prop_or_default]
	wide: bool,
	children: Html,
}

#[function_component(FieldRow)]
fn field_row(props: &FieldRowProps) -> Html {
	let id = props.field.id();
	let classes = classes!(
		"field",
		props.wide.then_some("wide"),
		props.error.is_some().then_some("invalid")
	);

	html! {
		<div class={ classes }>
			<label for={ id }>{ props.field.label() }</label>
			{ props.children.clone() }
			if let Some(err) = &props.error {
				<p class="field-error" id={ format!("{id}-error") }>{ err }</p>
			}
		</div>
	}
}

#[function_component(BookingPage)]
pub fn booking_page() -> Html {
	let config = use_site_config();
	let form = use_reducer_eq(BookingForm::default);
	let toasts = use_reducer_eq(Toasts::default);
	// yew can't see the controller's InFlight flag change, so this mirrors it to get the button
	// re-rendered; the flag itself is what stops a second send
	let submitting = use_state_eq(|| false);

	let controller = {
		let toasts = toasts.dispatcher();
		use_memo(config.clone(), move |config| SubmitController::new(
			GlooTransport { endpoint: config.booking_endpoint.clone() },
			ToastNotifier { toasts, next_id: Cell::new(0) },
			config.fallback_contact(),
		))
	};

	let onsubmit = {
		let form = form.clone();
		let submitting = submitting.clone();
		let controller = controller.clone();

		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			if controller.in_flight().get() {
				return;
			}

			let form = form.clone();
			let submitting = submitting.clone();
			let controller = controller.clone();
			let mut state = form.state.clone();

			submitting.set(true);
			wasm_bindgen_futures::spawn_local(async move {
				match controller.submit(&mut state, local_now()).await {
					Ok(outcome) => log!(format!("Booking finished: {outcome:?}")),
					Err(SubmitError::Invalid(fields)) => {
						if let Some(first) = fields.first() {
							scroll_to(first.id());
						}
					},
					// another submission got there first and owns the form until it's done
					Err(e @ SubmitError::InFlight) => {
						log!(format!("Booking not sent: {e}"));
						return;
					},
				}

				form.dispatch(FormMsg::Replace(state));
				submitting.set(false);
			});
		})
	};

	let edit = |field: Field| {
		let form = form.clone();
		move |value: String| form.dispatch(FormMsg::Edit(field, value, local_today()))
	};

	let error_of = |field: Field| form.state.error(field).map(ToString::to_string);

	let text_input = |field: Field, kind: &'static str, placeholder: &'static str| {
		let set = edit(field);
		let oninput = Callback::from(move |e: InputEvent| {
			if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
				set(input.value());
			}
		});

		html! {
			<input
				id={ field.id() }
				name={ field.id() }
				type={ kind }
				{ placeholder }
				value={ form.state.value(field).to_owned() }
				aria-invalid={ form.state.error(field).is_some().to_string() }
				{ oninput }
			/>
		}
	};

	let select = |field: Field, placeholder: &'static str, options: Vec<String>| {
		let set = edit(field);
		let onchange = Callback::from(move |e: Event| {
			if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
				set(select.value());
			}
		});
		let current = form.state.value(field);

		html! {
			<select id={ field.id() } name={ field.id() } { onchange }>
				<option value="" disabled={ true } selected={ current.is_empty() }>{ placeholder }</option>
				{
					options.into_iter().map(|opt| {
						let selected = opt == current;
						html! { <option value={ opt.clone() } { selected }>{ opt.clone() }</option> }
					}).collect::<Html>()
				}
			</select>
		}
	};

	let date_input = {
		let set = edit(Field::Date);
		let oninput = Callback::from(move |e: InputEvent| {
			if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
				set(input.value());
			}
		});
		// the picker won't offer anything before tomorrow, but typed dates still go through the
		// validator
		let min = local_today().succ_opt().map(|d| d.format("%Y-%m-%d").to_string());

		html! {
			<input
				id={ Field::Date.id() }
				name={ Field::Date.id() }
				type="date"
				{ min }
				value={ form.state.value(Field::Date).to_owned() }
				{ oninput }
			/>
		}
	};

	let times = TimeSlot::all().map(|slot| slot.to_string()).collect();
	let services = Service::ALL.into_iter().map(|s| s.name().to_string()).collect();

	let busy = *submitting || controller.in_flight().get();

	let toast_list = toasts.0.iter().map(|(id, notice)| {
		let dismiss = {
			let toasts = toasts.dispatcher();
			let id = *id;
			Callback::from(move |_: MouseEvent| toasts.dispatch(ToastMsg::Dismiss(id)))
		};
		let role = if notice.is_error() { "alert" } else { "status" };

		html! {
			<div class={ classes!("toast", notice.is_error().then_some("error")) } { role }>
				<strong>{ &notice.title }</strong>
				<p>{ &notice.description }</p>
				<button onclick={ dismiss } aria-label="Cerrar">{ "×" }</button>
			</div>
		}
	}).collect::<Html>();

	html! {
		<Page floating_whatsapp={ false }>
			<style>{ BOOKING_STYLE }</style>
			<div id="toasts">{ toast_list }</div>
			<section id="booking">
				<div id="booking-box" class="container">
					<div class="section-title">
						<h1>{ "Reserva tu Cita" }</h1>
						<p>{ "Completa el formulario para agendar tu tratamiento. Te contactaremos para confirmar tu cita." }</p>
						if !config.can_book_online() {
							<p id="unconfigured" class="muted">
								{ format!(
									"Las reservas online no están disponibles en este momento. Escríbenos por WhatsApp o llámanos al {}.",
									config.phone_display
								) }
							</p>
						}
					</div>

					<form id="booking-form" { onsubmit } novalidate={ true }>
						<fieldset disabled={ busy }>
							<FieldRow field={ Field::Date } error={ error_of(Field::Date) }>
								{ date_input }
							</FieldRow>
							<FieldRow field={ Field::Time } error={ error_of(Field::Time) }>
								{ select(Field::Time, "Selecciona una hora", times) }
							</FieldRow>
							<FieldRow field={ Field::FullName } error={ error_of(Field::FullName) } wide={ true }>
								{ text_input(Field::FullName, "text", "Tu nombre y apellidos") }
							</FieldRow>
							<FieldRow field={ Field::Phone } error={ error_of(Field::Phone) }>
								{ text_input(Field::Phone, "tel", "603381502") }
							</FieldRow>
							<FieldRow field={ Field::Email } error={ error_of(Field::Email) }>
								{ text_input(Field::Email, "email", "tu@email.com") }
							</FieldRow>
							<FieldRow field={ Field::Service } error={ error_of(Field::Service) } wide={ true }>
								{ select(Field::Service, "Selecciona un servicio", services) }
							</FieldRow>
						</fieldset>
						<button class="btn" type="submit" disabled={ busy }>
							{ if busy { "Enviando..." } else { "Reservar Cita" } }
						</button>
					</form>

					<div id="other-contact">
						<p class="muted">{ "¿Tienes dudas? También puedes contactarnos por:" }</p>
						<div>
							<a href={ config.tel_url() }>{ format!("📞 {}", config.phone_display) }</a>
							<a href={ config.whatsapp_url(None) } target="_blank" rel="noopener noreferrer">{ "💬 WhatsApp" }</a>
							<a href={ config.mailto_url() }>{ "✉️ Email" }</a>
						</div>
					</div>
				</div>
			</section>
		</Page>
	}
}

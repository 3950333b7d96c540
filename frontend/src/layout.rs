use gloo_console::{error, log};
use shared_data::content::{NAV_SECTIONS, OPENING_HOURS};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{calendly, style::SharedStyle, use_site_config, Route};

// header gets a background once you've scrolled a bit
const HEADER_SOLID_AFTER: f64 = 20.;
const FLOATING_WHATSAPP_AFTER: f64 = 300.;

static LAYOUT_STYLE: &str = r"
header {
	position: fixed;
	top: 0;
	left: 0;
	right: 0;
	z-index: 50;
	transition: background-color 0.3s, box-shadow 0.3s;
}
header.solid {
	background-color: rgba(253, 248, 245, 0.95);
	box-shadow: 0 2px 12px rgba(58, 42, 47, 0.08);
}
#header-bar {
	display: flex;
	align-items: center;
	justify-content: space-between;
	height: 80px;
}
#logo {
	font-family: Georgia, serif;
	font-size: 1.5rem;
	color: var(--primary);
}
#header-bar nav, #header-actions {
	display: flex;
	gap: 28px;
	align-items: center;
}
.nav-link {
	background: none;
	border: none;
	cursor: pointer;
	font-size: 0.95rem;
	color: var(--main-text);
	padding: 0;
}
.nav-link:hover {
	color: var(--primary);
}
#menu-toggle {
	background: none;
	border: none;
	font-size: 1.6rem;
	cursor: pointer;
}
#mobile-menu {
	background-color: var(--background);
	border-top: 1px solid var(--border-color);
	display: flex;
	flex-direction: column;
	gap: 16px;
	padding: 24px 16px;
}
#mobile-menu .nav-link {
	text-align: left;
}
footer {
	background-color: var(--primary);
	color: var(--primary-text);
	padding: 64px 0 32px 0;
}
footer a {
	color: var(--primary-text);
}
#footer-columns {
	display: grid;
	gap: 48px;
	grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
	margin-bottom: 48px;
}
#footer-columns p {
	margin: 4px 0;
	font-size: 0.9rem;
}
#footer-columns .btn {
	background-color: var(--primary-text);
	color: var(--primary);
	border-color: var(--primary-text);
	width: 100%;
}
#copyright {
	border-top: 1px solid rgba(255, 250, 247, 0.2);
	padding-top: 32px;
	text-align: center;
	font-size: 0.85rem;
	opacity: 0.7;
}
#floating-whatsapp {
	position: fixed;
	bottom: 24px;
	right: 24px;
	z-index: 50;
	width: 60px;
	height: 60px;
	border-radius: 50%;
	background-color: var(--whatsapp);
	color: white;
	font-size: 1.8rem;
	display: flex;
	align-items: center;
	justify-content: center;
	box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
	transition: transform 0.3s, opacity 0.3s;
}
#floating-whatsapp.hidden {
	transform: translateY(80px);
	opacity: 0;
	pointer-events: none;
}
main {
	min-height: 60vh;
}
";

/// Smoothly scrolls the element with `id` into view, if it's on this page
pub fn scroll_to(id: &str) {
	let Some(el) = web_sys::window()
		.and_then(|win| win.document())
		.and_then(|doc| doc.get_element_by_id(id)) else {
		log!(format!("No #{id} on this page to scroll to"));
		return;
	};

	let opts = ScrollIntoViewOptions::new();
	opts.set_behavior(ScrollBehavior::Smooth);
	el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Whether the window is currently scrolled further down than `threshold` pixels
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
	let past = use_state_eq(|| false);

	{
		let past = past.clone();
		use_effect_with(threshold, move |&threshold| {
			let listener = web_sys::window().map(|window| {
				let check = move || {
					let y = web_sys::window()
						.and_then(|win| win.scroll_y().ok())
						.unwrap_or_default();
					past.set(y > threshold);
				};
				// the page might already be scrolled (e.g. on reload)
				check();

				let callback = Closure::<dyn Fn()>::new(check);
				if let Err(e) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
					error!("Couldn't listen for scroll events:", e);
				}
				(window, callback)
			});

			move || {
				if let Some((window, callback)) = listener {
					_ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
				}
			}
		});
	}

	*past
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
	/// On the landing page the nav scrolls; anywhere else it links back to the landing page
	pub on_home: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
	let config = use_site_config();
	let menu_open = use_state(|| false);
	let solid = use_scrolled_past(HEADER_SOLID_AFTER);

	let nav_item = |(id, label): (&'static str, &'static str)| {
		if props.on_home {
			let menu_open = menu_open.clone();
			let onclick = Callback::from(move |_: MouseEvent| {
				scroll_to(id);
				menu_open.set(false);
			});
			html! { <button class="nav-link" { onclick }>{ label }</button> }
		} else {
			html! { <a class="nav-link" href={ format!("/#{id}") }>{ label }</a> }
		}
	};

	let calendly_url = config.calendly_url.clone();
	let book = Callback::from(move |_: MouseEvent| calendly::open_popup(&calendly_url));

	let toggle = {
		let menu_open = menu_open.clone();
		Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
	};

	let mobile_menu = menu_open.then(|| html! {
		<nav id="mobile-menu" class="mobile-only">
			{ NAV_SECTIONS.into_iter().map(nav_item).collect::<Html>() }
			<button class="btn" onclick={ book.clone() }>{ "Reservar Cita" }</button>
		</nav>
	});

	html! {
		<header class={ classes!(solid.then_some("solid")) }>
			<div id="header-bar" class="container">
				<Link<Route> to={ Route::Home }>
					<span id="logo">{ &config.business_name }</span>
				</Link<Route>>
				<nav class="desktop-only">
					{ NAV_SECTIONS.into_iter().map(nav_item).collect::<Html>() }
				</nav>
				<div id="header-actions" class="desktop-only">
					<button class="btn" onclick={ book }>{ "Reservar Cita" }</button>
					<a class="btn outline" href={ config.whatsapp_url(None) } target="_blank" rel="noopener noreferrer">
						{ "WhatsApp" }
					</a>
				</div>
				<button id="menu-toggle" class="mobile-only" onclick={ toggle } aria-label="Menú">
					{ if *menu_open { "✕" } else { "☰" } }
				</button>
			</div>
			{ mobile_menu }
		</header>
	}
}

#[function_component(Footer)]
pub fn footer() -> Html {
	let config = use_site_config();
	let calendly_url = config.calendly_url.clone();
	let book = Callback::from(move |_: MouseEvent| calendly::open_popup(&calendly_url));

	html! {
		<footer>
			<div class="container">
				<div id="footer-columns">
					<div>
						<h3>{ &config.business_name }</h3>
						<p>{ "Tu piel es única, dale el cuidado que merece." }</p>
					</div>
					<div>
						<h3>{ "Contacto" }</h3>
						<p><a href={ config.tel_url() }>{ &config.phone_display }</a></p>
						<p><a href={ config.mailto_url() }>{ &config.contact_email }</a></p>
						{ config.address_lines.iter().map(|line| html! { <p>{ line }</p> }).collect::<Html>() }
					</div>
					<div>
						<h3>{ "Horario" }</h3>
						{
							OPENING_HOURS.into_iter()
								.map(|(days, hours)| html! { <p>{ format!("{days}: {hours}") }</p> })
								.collect::<Html>()
						}
					</div>
					<div>
						<h3>{ "Agenda tu cita" }</h3>
						<p>{ "Reserva tu tratamiento y comienza a transformar tu piel hoy" }</p>
						<button class="btn" onclick={ book }>{ "Agendar Cita" }</button>
					</div>
				</div>
				<div id="copyright">
					{ format!("© {} {}. Todos los derechos reservados.", current_year(), config.business_name) }
				</div>
			</div>
		</footer>
	}
}

fn current_year() -> u32 {
	js_sys::Date::new_0().get_full_year()
}

#[function_component(FloatingWhatsApp)]
pub fn floating_whatsapp() -> Html {
	let config = use_site_config();
	let visible = use_scrolled_past(FLOATING_WHATSAPP_AFTER);

	html! {
		<a
			id="floating-whatsapp"
			class={ classes!((!visible).then_some("hidden")) }
			href={ config.whatsapp_url(None) }
			target="_blank"
			rel="noopener noreferrer"
			aria-label="Contactar por WhatsApp"
		>{ "💬" }</a>
	}
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
	pub children: Html,
	#[prop_or_default]
	pub on_home: bool,
	#[prop_or(true)]
	pub floating_whatsapp: bool,
}

/// Header, footer and the shared styles around a page's own content
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
	html! {
		<>
			<SharedStyle />
			<style>{ LAYOUT_STYLE }</style>
			<Header on_home={ props.on_home } />
			<main>{ props.children.clone() }</main>
			<Footer />
			if props.floating_whatsapp {
				<FloatingWhatsApp />
			}
		</>
	}
}

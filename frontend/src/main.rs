use std::rc::Rc;

use gloo_console::error;
use shared_data::{SiteConfig, CONFIG_ELEMENT_ID};
use yew::prelude::*;
use yew_router::prelude::*;

use booking::BookingPage;
use consultation::ConsultationPage;
use home::Home;

mod booking;
mod calendly;
mod consultation;
mod home;
mod layout;
mod style;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
	#[not_found]
	#[at("/")]
	Home,
	#[at("/asesoria-online")]
	Consultation,
	#[at("/reservar")]
	Booking,
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Home /> },
		Route::Consultation => html! { <ConsultationPage /> },
		Route::Booking => html! { <BookingPage /> },
	}
}

/// The server writes our config into the page as json; if it's missing or garbled we still want
/// a working site, just with the built-in contact details.
fn load_config() -> SiteConfig {
	let text = web_sys::window()
		.and_then(|win| win.document())
		.and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
		.and_then(|el| el.text_content());

	let Some(text) = text else {
		error!(format!("No #{CONFIG_ELEMENT_ID} element on the page; using default config"));
		return SiteConfig::default();
	};

	serde_json::from_str(&text).unwrap_or_else(|e| {
		error!(format!("Couldn't parse site config ({e}); using default config"));
		SiteConfig::default()
	})
}

#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
	use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	let config = use_memo((), |_| load_config());

	html! {
		<ContextProvider<Rc<SiteConfig>> context={ config }>
			<BrowserRouter>
				<Switch<Route> render={switch} />
			</BrowserRouter>
		</ContextProvider<Rc<SiteConfig>>>
	}
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}

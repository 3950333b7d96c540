use axum::{
	body::Bytes,
	extract::State,
	http::{header, StatusCode},
	response::{Html, IntoResponse},
	routing::get,
	Router,
};
use shared_data::SiteConfig;
use std::{
	net::SocketAddr,
	path::{Path, PathBuf},
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info, warn};

mod robots;
mod shell;

/// Everything we send is decided at startup, so the handlers just hand out copies of these
#[derive(Clone)]
struct AppState {
	shell: Bytes,
	robots: Bytes,
	sitemap: Bytes,
}

impl AppState {
	fn new(config: &SiteConfig) -> Result<Self, horrorshow::Error> {
		Ok(Self {
			shell: shell::Shell { config }.render()?.into(),
			robots: robots::robots_txt(&config.site_url).into(),
			sitemap: robots::sitemap_xml(&config.site_url).into(),
		})
	}
}

/// Starts from the built-in contact details and swaps in whatever's set in `.env`
fn site_config() -> SiteConfig {
	site_config_from(|key| dotenv::var(key).ok())
}

fn site_config_from(get: impl Fn(&str) -> Option<String>) -> SiteConfig {
	let mut config = SiteConfig::default();

	macro_rules! from_env{
		($($key:expr => $field:ident),* $(,)?) => {
			$(
				if let Some(val) = get($key).filter(|v| !v.trim().is_empty()) {
					config.$field = val;
				}
			)*
		}
	}

	from_env!(
		"BOOKING_ENDPOINT" => booking_endpoint,
		"WHATSAPP_NUMBER" => whatsapp_number,
		"PHONE_DISPLAY" => phone_display,
		"CONTACT_EMAIL" => contact_email,
		"CALENDLY_URL" => calendly_url,
		"INSTAGRAM_URL" => instagram_url,
		"FACEBOOK_URL" => facebook_url,
		"SITE_URL" => site_url,
	);

	// wa.me wants the bare digits
	config.whatsapp_number.retain(|c| c.is_ascii_digit());
	config.site_url = config.site_url.trim_end_matches('/').to_string();

	config
}

fn app(state: AppState, site_dir: &Path) -> Router {
	Router::new()
		.route("/", get(page))
		.route("/asesoria-online", get(page))
		.route("/reservar", get(page))
		.route("/robots.txt", get(robots_txt))
		.route("/sitemap.xml", get(sitemap_xml))
		.nest_service("/pkg", ServeDir::new(site_dir.join("pkg")))
		.nest_service("/assets", ServeDir::new(site_dir.join("assets")))
		.fallback(not_found)
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

async fn page(State(state): State<AppState>) -> Html<Bytes> {
	Html(state.shell)
}

// the frontend router shows the landing page for anything it doesn't know, but crawlers should
// still hear that the url is wrong
async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<Bytes>) {
	(StatusCode::NOT_FOUND, Html(state.shell))
}

async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
	([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], state.robots)
}

async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
	([(header::CONTENT_TYPE, "application/xml")], state.sitemap)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt::init();

	macro_rules! dotenv_num{
		($key:expr, $default:expr, $type:ident) => {
			dotenv::var($key).ok()
				.and_then(|v| v.parse::<$type>().ok())
				.unwrap_or($default)
		}
	}

	let port = dotenv_num!("PORT", 8080, u16);
	let site_dir = PathBuf::from(dotenv::var("SITE_DIR").unwrap_or_else(|_| "site".into()));

	if !site_dir.is_dir() {
		error!(
			"SITE_DIR ({}) isn't a directory. It needs to hold the built frontend in pkg/ and the images \
			in assets/; please set it and retry.",
			site_dir.display()
		);
		return Ok(());
	}

	let config = site_config();
	if !config.can_book_online() {
		warn!("BOOKING_ENDPOINT isn't set, so the booking form will send people to {} instead", config.fallback_contact());
	}

	info!("Serving {} from {}", config.site_url, site_dir.display());

	let state = AppState::new(&config)?;
	let addr = SocketAddr::from(([127, 0, 0, 1], port));
	let listener = tokio::net::TcpListener::bind(addr).await?;

	info!("Listening on {addr}");

	axum::serve(listener, app(state, &site_dir)).await?;

	Ok(())
}

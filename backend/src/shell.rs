use horrorshow::{helper::doctype, html, Raw, RenderOnce, Template, TemplateBuffer};
use shared_data::{SiteConfig, BASE_STYLE, CONFIG_ELEMENT_ID};

const CALENDLY_SCRIPT: &str = "https://assets.calendly.com/assets/external/widget.js";
const CALENDLY_STYLE: &str = "https://assets.calendly.com/assets/external/widget.css";

// wasm-bindgen --target web output, served from SITE_DIR/pkg
const LOADER: &str = "import init from '/pkg/frontend.js'; init('/pkg/frontend_bg.wasm');";

/// The one html document every route gets; the wasm bundle takes over from here and picks the
/// page to show from the url.
pub struct Shell<'c> {
	pub config: &'c SiteConfig,
}

impl Shell<'_> {
	pub fn render(self) -> Result<String, horrorshow::Error> {
		self.into_string()
	}
}

/// The config goes inside a `<script>`, so nothing in it can be allowed to close that tag early
fn config_json(config: &SiteConfig) -> Result<String, serde_json::Error> {
	serde_json::to_string(config)
		.map(|json| json.replace("</", "<\\/"))
}

impl RenderOnce for Shell<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let json = match config_json(self.config) {
			Ok(json) => json,
			Err(e) => {
				// the frontend falls back to its built-in config when this doesn't parse
				tracing::error!("Couldn't serialize site config: {e}");
				String::new()
			}
		};
		let title = format!("{} | Estética Avanzada en Palma", self.config.business_name);

		tmpl << html! {
			: doctype::HTML;
			html(lang = "es") {
				head {
					meta(charset = "utf-8");
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					meta(
						name = "description",
						content = "Tratamientos faciales, medicina estética y asesoría de piel online en Palma de Mallorca."
					);
					title : &title;
					link(rel = "canonical", href = &self.config.site_url);
					link(rel = "stylesheet", href = CALENDLY_STYLE);
					style : Raw(BASE_STYLE);
					script(id = CONFIG_ELEMENT_ID, type = "application/json") : Raw(&json);
					script(src = CALENDLY_SCRIPT, defer = "defer") {}
					script(type = "module") : Raw(LOADER);
				}
				body {
					noscript : "Esta página necesita JavaScript. Escríbenos por WhatsApp o llámanos mientras tanto.";
				}
			}
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn embeds_config_as_json() {
		let config = SiteConfig {
			booking_endpoint: "https://script.example/exec".into(),
			..SiteConfig::default()
		};
		let page = Shell { config: &config }.render().unwrap();

		assert!(page.starts_with("<!DOCTYPE html>"));
		assert!(page.contains(r#"<script id="site-config" type="application/json">"#));
		assert!(page.contains(r#""booking_endpoint":"https://script.example/exec""#));
		assert!(page.contains("/pkg/frontend.js"));
		assert!(page.contains(CALENDLY_SCRIPT));
	}

	#[test]
	fn config_cannot_close_its_script_tag() {
		let config = SiteConfig {
			business_name: "</script><script>alert(1)</script>".into(),
			..SiteConfig::default()
		};
		let json = config_json(&config).unwrap();

		assert!(!json.contains("</script>"));
		let back: SiteConfig = serde_json::from_str(&json).unwrap();
		assert_eq!(back, config);
	}
}

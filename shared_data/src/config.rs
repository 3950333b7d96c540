use serde::{Deserialize, Serialize};

/// Everything about the practice that the pages link out to. The backend fills this in from its
/// environment at startup and hands it to the frontend inside the page shell, so none of these
/// need to be baked into the wasm.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
	pub business_name: String,
	/// Where the booking form posts to. Empty means bookings can't be sent (yet).
	pub booking_endpoint: String,
	/// International format without the leading `+`, the way wa.me wants it
	pub whatsapp_number: String,
	pub phone_display: String,
	pub contact_email: String,
	pub calendly_url: String,
	pub instagram_url: String,
	pub instagram_handle: String,
	pub facebook_url: String,
	pub facebook_handle: String,
	pub address_lines: Vec<String>,
	pub maps_embed_url: String,
	/// Public origin of the site, no trailing slash
	pub site_url: String,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			business_name: "Grether Aesthetics".into(),
			booking_endpoint: String::new(),
			whatsapp_number: "34603381502".into(),
			phone_display: "+34 603 381 502".into(),
			contact_email: "grether.aesthetics86@gmail.com".into(),
			calendly_url: "https://calendly.com/tu-usuario".into(),
			instagram_url: "https://instagram.com".into(),
			instagram_handle: "@gretheraesthetics".into(),
			facebook_url: "https://facebook.com".into(),
			facebook_handle: "Grether Aesthetics".into(),
			address_lines: vec![
				"Carrer de Victòria Ramis d'Ayreflor, 10, A".into(),
				"Poniente, 07011 Palma, Islas Baleares".into(),
			],
			maps_embed_url: "https://www.google.com/maps?q=Carrer%20de%20Vict%C3%B2ria%20Ramis%20d%27Ayreflor%2010%2C%2007011%20Palma&output=embed".into(),
			site_url: "https://gretheraesthetics.com".into(),
		}
	}
}

impl SiteConfig {
	/// `https://wa.me/<number>`, optionally with a message already typed out for them
	#[must_use]
	pub fn whatsapp_url(&self, message: Option<&str>) -> String {
		let base = format!("https://wa.me/{}", self.whatsapp_number);
		match message {
			None => base,
			Some(msg) => {
				// serde_urlencoded only fails on non-pair shapes, which this isn't
				let query = serde_urlencoded::to_string(&[("text", msg)]).unwrap_or_default();
				// form encoding turns spaces into `+`, which whatsapp keeps literally. Any `+` that
				// was actually in the message has already been escaped to %2B, so this is safe
				format!("{base}?{}", query.replace('+', "%20"))
			}
		}
	}

	#[must_use]
	pub fn tel_url(&self) -> String {
		format!("tel:+{}", self.whatsapp_number)
	}

	#[must_use]
	pub fn mailto_url(&self) -> String {
		format!("mailto:{}", self.contact_email)
	}

	#[must_use]
	pub fn can_book_online(&self) -> bool {
		!self.booking_endpoint.trim().is_empty()
	}

	/// What to tell people to do instead when the form doesn't work out
	#[must_use]
	pub fn fallback_contact(&self) -> &str {
		&self.phone_display
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn whatsapp_links() {
		let config = SiteConfig::default();
		assert_eq!(config.whatsapp_url(None), "https://wa.me/34603381502");
		assert_eq!(
			config.whatsapp_url(Some("Hola, me interesa el Pack Básico de Asesoría Online")),
			"https://wa.me/34603381502?text=Hola%2C%20me%20interesa%20el%20Pack%20B%C3%A1sico%20de%20Asesor%C3%ADa%20Online"
		);
		assert_eq!(config.whatsapp_url(Some("1+1")), "https://wa.me/34603381502?text=1%2B1");
		assert_eq!(config.tel_url(), "tel:+34603381502");
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config: SiteConfig = serde_json::from_str(r#"{"booking_endpoint":"https://example.com/exec"}"#).unwrap();
		assert!(config.can_book_online());
		assert_eq!(config.whatsapp_number, "34603381502");
		assert!(!SiteConfig::default().can_book_online());
	}
}

use chrono::Utc;
use sitewriter::{ChangeFreq, UrlEntry};

// every page the frontend router knows about, with how often we expect it to change
const PAGES: [(&str, ChangeFreq, f32); 3] = [
	("/", ChangeFreq::Weekly, 1.0),
	("/asesoria-online", ChangeFreq::Monthly, 0.8),
	("/reservar", ChangeFreq::Monthly, 0.8),
];

pub fn robots_txt(site_url: &str) -> String {
	format!("User-agent: *\nAllow: /\n\nSitemap: {site_url}/sitemap.xml\n")
}

pub fn sitemap_xml(site_url: &str) -> String {
	let now = Utc::now();

	let urls = PAGES.into_iter()
		.filter_map(|(path, changefreq, priority)| {
			let loc = format!("{site_url}{path}");
			match loc.parse() {
				Ok(loc) => Some(UrlEntry {
					loc,
					lastmod: Some(now),
					changefreq: Some(changefreq),
					priority: Some(priority)
				}),
				Err(e) => {
					tracing::warn!("Leaving {loc} out of the sitemap, it isn't a valid url: {e}");
					None
				}
			}
		})
		.collect::<Vec<_>>();

	sitewriter::generate_str(&urls)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sitemap_lists_every_page() {
		let xml = sitemap_xml("https://gretheraesthetics.com");

		assert!(xml.contains("https://gretheraesthetics.com/"));
		assert!(xml.contains("https://gretheraesthetics.com/asesoria-online"));
		assert!(xml.contains("https://gretheraesthetics.com/reservar"));
	}

	#[test]
	fn bad_site_url_gives_empty_sitemap() {
		let xml = sitemap_xml("not a url");
		assert!(!xml.contains("not a url"));
	}

	#[test]
	fn robots_points_at_sitemap() {
		let robots = robots_txt("https://gretheraesthetics.com");
		assert!(robots.contains("Sitemap: https://gretheraesthetics.com/sitemap.xml"));
	}
}

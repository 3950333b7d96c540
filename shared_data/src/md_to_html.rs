use pulldown_cmark::{Event, Options};

/// Renders the site's markdown copy (faq answers, the about blurb) to html.
///
/// Raw html in the source is shown as text rather than passed through. Everything that goes
/// through here is our own copy, but the output is injected with `from_html_unchecked`, so
/// it's nicer if a stray `<` in a sentence can't break the page.
#[must_use]
pub fn md_to_html(input: &str) -> String {
	let mut opts = Options::empty();
	opts.insert(Options::ENABLE_STRIKETHROUGH);
	opts.insert(Options::ENABLE_SMART_PUNCTUATION);

	let events = pulldown_cmark::Parser::new_ext(input, opts)
		.map(|ev| match ev {
			Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
			e => e
		});

	let mut html = String::with_capacity(input.len() * 3 / 2);
	pulldown_cmark::html::push_html(&mut html, events);
	html
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn renders_emphasis_and_lists() {
		let html = md_to_html("Al menos **24 horas**.\n\n- uno\n- dos\n");
		assert_eq!(html, "<p>Al menos <strong>24 horas</strong>.</p>\n<ul>\n<li>uno</li>\n<li>dos</li>\n</ul>\n");
	}

	#[test]
	fn raw_html_is_escaped() {
		let html = md_to_html("hola <script>alert(1)</script>");
		assert!(!html.contains("<script>"));
		assert!(html.contains("&lt;script&gt;"));
	}
}

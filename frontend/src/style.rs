use yew::prelude::*;

// small screens get single-column sections and smaller headings
static NARROW_STYLE: &str = r"
@media (max-width: 768px) {
	section {
		padding: 56px 0;
	}
	.section-title h2 {
		font-size: 2rem;
	}
	.two-column {
		grid-template-columns: 1fr !important;
	}
	.desktop-only {
		display: none !important;
	}
}
@media (min-width: 769px) {
	.mobile-only {
		display: none !important;
	}
}
";

/// Every page puts this first so the shared variables and button classes exist
#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! {
		<>
			<style>{ shared_data::BASE_STYLE }</style>
			<style>{ NARROW_STYLE }</style>
		</>
	}
}

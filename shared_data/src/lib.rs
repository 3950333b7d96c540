pub mod booking;
pub mod catalog;
pub mod config;
pub mod content;
pub mod form;
pub mod interpret;
pub mod notice;
pub mod submit;
pub mod validate;

mod md_to_html;
pub use md_to_html::md_to_html;

pub use booking::BookingRequest;
pub use catalog::{Service, TimeSlot};
pub use config::SiteConfig;
pub use form::{Field, FormState};
pub use interpret::{RawResponse, SubmissionOutcome};
pub use notice::{Notice, NoticeKind};

/// Id of the `<script type="application/json">` element the server puts the [`SiteConfig`] in
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub static BASE_STYLE: &str = r#"
* {
	--background: #fdf8f5;
	--soft-background: #f6ece6;
	--card-background: #ffffff;
	--main-text: #3a2a2f;
	--muted-text: #7d6a70;
	--primary: #a0526d;
	--primary-dark: #82405a;
	--primary-text: #fffaf7;
	--accent: #d9b36c;
	--border-color: #ead9d1;
	--error: #c0392b;
	--whatsapp: #25d366;
	--whatsapp-dark: #20ba59;
	box-sizing: border-box;
}
html {
	scroll-behavior: smooth;
}
body {
	margin: 0;
	font-family: "Helvetica Neue", Arial, sans-serif;
	background-color: var(--background);
	color: var(--main-text);
	line-height: 1.5;
}
h1, h2, h3 {
	font-family: Georgia, "Times New Roman", serif;
	margin: 0 0 0.5em 0;
}
a {
	color: var(--primary);
	text-decoration: none;
}
a:hover {
	text-decoration: underline;
}
.container {
	max-width: 1200px;
	margin: 0 auto;
	padding: 0 16px;
}
section {
	padding: 80px 0;
}
section.soft {
	background-color: var(--soft-background);
}
.section-title {
	text-align: center;
	max-width: 760px;
	margin: 0 auto 56px auto;
}
.section-title h2 {
	font-size: 2.6rem;
}
.section-title p, .muted {
	color: var(--muted-text);
}
.grid {
	display: grid;
	gap: 24px;
	grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
}
.card {
	background-color: var(--card-background);
	border: 1px solid var(--border-color);
	border-radius: 16px;
	overflow: hidden;
	transition: transform 0.3s, box-shadow 0.3s;
}
.card:hover {
	transform: translateY(-4px);
	box-shadow: 0 12px 30px rgba(58, 42, 47, 0.12);
}
.card-body {
	padding: 20px;
}
.button-row {
	display: flex;
	flex-wrap: wrap;
	gap: 16px;
	justify-content: center;
}
.btn {
	display: inline-block;
	border: 2px solid var(--primary);
	border-radius: 8px;
	padding: 12px 28px;
	font-size: 1rem;
	cursor: pointer;
	background-color: var(--primary);
	color: var(--primary-text);
	text-decoration: none;
	transition: background-color 0.2s;
}
.btn:hover {
	background-color: var(--primary-dark);
	text-decoration: none;
}
.btn:disabled {
	opacity: 0.6;
	cursor: not-allowed;
}
.btn.outline {
	background-color: transparent;
	color: var(--primary);
}
.btn.outline:hover {
	background-color: var(--soft-background);
}
.btn.whatsapp {
	background-color: var(--whatsapp);
	border-color: var(--whatsapp);
	color: white;
}
.btn.whatsapp:hover {
	background-color: var(--whatsapp-dark);
}
.badge {
	display: inline-block;
	background-color: var(--accent);
	color: var(--main-text);
	border-radius: 999px;
	padding: 4px 12px;
	font-size: 0.8rem;
	font-weight: 600;
}
"#;

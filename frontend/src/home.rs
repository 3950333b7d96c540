use shared_data::content::{
	Faq,
	ABOUT_FEATURES,
	ABOUT_MARKDOWN,
	ABOUT_NAME,
	ABOUT_ROLE,
	BEFORE_AFTER,
	BOOKING_STEPS,
	CONSULTATION_HIGHLIGHTS,
	FAQS,
	GETTING_THERE,
	OPENING_HOURS,
	REASONS,
	SERVICE_CARDS,
	TESTIMONIALS,
	WHATSAPP_HOURS,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
	calendly,
	layout::{scroll_to, Page},
	use_site_config,
	Route,
};

static HOME_STYLE: &str = r"
#hero {
	min-height: 100vh;
	display: flex;
	align-items: center;
	padding-top: 100px;
	background: linear-gradient(135deg, var(--soft-background), var(--background));
}
.two-column {
	display: grid;
	grid-template-columns: 1fr 1fr;
	gap: 56px;
	align-items: center;
}
#hero h1 {
	font-size: 3.6rem;
	line-height: 1.1;
}
#hero h1 span {
	color: var(--primary);
}
.portrait {
	width: 100%;
	max-width: 380px;
	aspect-ratio: 9 / 16;
	object-fit: cover;
	border-radius: 24px;
	box-shadow: 0 20px 40px rgba(58, 42, 47, 0.18);
	justify-self: center;
}
.hero-note {
	border-top: 1px solid var(--border-color);
	padding-top: 20px;
	font-size: 0.9rem;
}
.feature-chip {
	background-color: var(--soft-background);
	border-radius: 12px;
	padding: 14px 16px;
	font-size: 0.9rem;
}
.service-card {
	cursor: pointer;
	display: block;
	color: inherit;
}
.service-card:hover {
	text-decoration: none;
}
.service-card.online {
	border: 2px solid var(--accent);
}
.service-card img {
	width: 100%;
	aspect-ratio: 4 / 3;
	object-fit: cover;
	display: block;
}
.service-card .image-box {
	position: relative;
}
.service-card .badge {
	position: absolute;
	top: 12px;
	right: 12px;
}
.price {
	color: var(--primary);
	font-weight: 600;
	font-size: 0.9rem;
}
#online-teaser .card {
	display: grid;
	grid-template-columns: 1fr 1fr;
}
#online-teaser img {
	width: 100%;
	height: 100%;
	object-fit: cover;
}
.before-after img {
	width: 100%;
	display: block;
}
.before-after figcaption {
	padding: 16px 20px;
	font-weight: 600;
}
.stars {
	color: var(--accent);
	letter-spacing: 2px;
}
.reason {
	padding: 32px;
	border-radius: 16px;
	border: 1px solid var(--border-color);
	background: linear-gradient(135deg, var(--soft-background), var(--background));
}
#reservar {
	background: linear-gradient(135deg, var(--primary), var(--primary-dark));
	color: var(--primary-text);
	text-align: center;
}
#reservar .section-title p {
	color: var(--primary-text);
	opacity: 0.9;
}
#reservar .step {
	background-color: rgba(255, 250, 247, 0.1);
	border-radius: 12px;
	padding: 24px;
}
#reservar .btn {
	background-color: var(--primary-text);
	color: var(--primary);
	border-color: var(--primary-text);
	margin-top: 32px;
}
.cta-box {
	max-width: 760px;
	margin: 0 auto;
	text-align: center;
	padding: 48px;
	border-radius: 24px;
	border: 1px solid var(--border-color);
	background: linear-gradient(135deg, var(--soft-background), var(--background));
}
.faq {
	max-width: 860px;
	margin: 0 auto;
}
.faq-item {
	margin-bottom: 16px;
}
.faq-question {
	width: 100%;
	text-align: left;
	background: none;
	border: none;
	font-size: 1.05rem;
	font-weight: 600;
	padding: 20px;
	cursor: pointer;
	display: flex;
	justify-content: space-between;
	color: var(--main-text);
}
.faq-answer {
	padding: 0 20px 8px 20px;
	color: var(--muted-text);
}
.map {
	width: 100%;
	height: 500px;
	border: 0;
	border-radius: 16px;
}
.info-box {
	margin-bottom: 16px;
}
.info-box h3 {
	font-size: 1rem;
	margin-bottom: 4px;
}
.info-box p {
	margin: 0;
}
";

#[function_component(Home)]
pub fn home() -> Html {
	// Links from the other pages come in as `/#section`, which the browser can't scroll to by
	// itself since the section doesn't exist until we've rendered
	use_effect_with((), |_| {
		let hash = web_sys::window()
			.and_then(|win| win.location().hash().ok())
			.unwrap_or_default();
		if let Some(id) = hash.strip_prefix('#').filter(|id| !id.is_empty()) {
			scroll_to(id);
		}

		|| ()
	});

	html! {
		<Page on_home={ true }>
			<style>{ HOME_STYLE }</style>
			<Hero />
			<About />
			<Services />
			<OnlineTeaser />
			<BeforeAfterSection />
			<Testimonials />
			<WhyChoose />
			<BookingCta />
			<WhatsAppCta />
			<FaqSection />
			<Location />
			<Social />
		</Page>
	}
}

#[function_component(Hero)]
fn hero() -> Html {
	let config = use_site_config();
	let calendly_url = config.calendly_url.clone();
	let book = Callback::from(move |_: MouseEvent| calendly::open_popup(&calendly_url));

	html! {
		<section id="hero">
			<div class="container two-column">
				<div>
					<h1>{ "Tu piel en manos " }<span>{ "expertas" }</span></h1>
					<p class="muted">
						{ "Estética avanzada y medicina estética con resultados visibles, seguros y personalizados para cada tipo de piel." }
					</p>
					<div class="button-row" style="justify-content: flex-start; margin: 32px 0;">
						<button class="btn" onclick={ book }>{ "Agendar Cita Online" }</button>
						<a class="btn outline" href={ config.whatsapp_url(None) } target="_blank" rel="noopener noreferrer">
							{ "Escribir por WhatsApp" }
						</a>
					</div>
					<p class="hero-note muted">
						{ "Tratamientos con protocolos clínicos, equipos modernos y productos dermatológicamente aprobados." }
					</p>
				</div>
				<img class="portrait" src="/assets/hero-grether.jpg" alt={ format!("Esteticista profesional {ABOUT_NAME}") } />
			</div>
		</section>
	}
}

#[function_component(About)]
fn about() -> Html {
	let about_html = use_memo((), |_| shared_data::md_to_html(ABOUT_MARKDOWN));

	html! {
		<section>
			<div class="container two-column">
				<img class="portrait" src="/assets/grether-working.jpg" alt={ format!("{ABOUT_NAME} - Esteticista Profesional") } />
				<div>
					<p class="price">{ "SOBRE MÍ" }</p>
					<h2>{ ABOUT_NAME }</h2>
					<p class="muted" style="font-size: 1.2rem;">{ ABOUT_ROLE }</p>
					<div class="muted">
						{ Html::from_html_unchecked(about_html.as_str().to_owned().into()) }
					</div>
					<div class="grid" style="grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px;">
						{ ABOUT_FEATURES.into_iter().map(|f| html! { <div class="feature-chip">{ f }</div> }).collect::<Html>() }
					</div>
				</div>
			</div>
		</section>
	}
}

#[function_component(Services)]
fn services() -> Html {
	let cards = SERVICE_CARDS.iter().map(|card| {
		let route = Route::recognize(card.link()).unwrap_or(Route::Booking);
		let classes = classes!("card", "service-card", card.service.is_online().then_some("online"));

		html! {
			<Link<Route> to={ route } { classes }>
				<div class="image-box">
					<img src={ card.image } alt={ card.service.name() } />
					if card.service.is_online() {
						<span class="badge">{ "Online" }</span>
					}
				</div>
				<div class="card-body">
					<h3>{ card.service.name() }</h3>
					<p class="muted">{ format!("Duración: {}", card.duration) }</p>
					<p class="muted">{ card.description }</p>
					<p class="price">{ card.price }</p>
				</div>
			</Link<Route>>
		}
	}).collect::<Html>();

	html! {
		<section id="servicios" class="soft">
			<div class="container">
				<div class="section-title">
					<h2>{ "Servicios Profesionales" }</h2>
					<p>{ "Tratamientos personalizados con resultados visibles y garantizados" }</p>
				</div>
				<div class="grid" style="margin-bottom: 48px;">{ cards }</div>
				<div class="button-row">
					<Link<Route> to={ Route::Booking } classes="btn">{ "Ver Todos los Servicios" }</Link<Route>>
					<Link<Route> to={ Route::Booking } classes="btn outline">{ "Reservar Cita" }</Link<Route>>
				</div>
			</div>
		</section>
	}
}

#[function_component(OnlineTeaser)]
fn online_teaser() -> Html {
	let config = use_site_config();

	html! {
		<section id="online-teaser">
			<div class="container">
				<div class="card two-column" style="gap: 0;">
					<img src="/assets/service-online-consultation.jpg" alt="Asesoría de Piel Online" />
					<div class="card-body" style="padding: 48px;">
						<span class="badge">{ "Nuevo Servicio Online" }</span>
						<h2 style="margin-top: 16px;">{ "Asesoría de Piel Online" }</h2>
						<p class="muted">
							{ "Descubre exactamente qué necesita tu piel con un análisis profesional y recibe tu rutina 100% personalizada desde casa." }
						</p>
						<ul>
							{ CONSULTATION_HIGHLIGHTS.into_iter().map(|h| html! { <li>{ h }</li> }).collect::<Html>() }
						</ul>
						<p>
							<span class="muted">{ "Desde " }</span>
							<strong class="price" style="font-size: 1.8rem;">{ "25€" }</strong>
							<span class="muted">{ " hasta 90€" }</span>
						</p>
						<div class="button-row" style="justify-content: flex-start;">
							<Link<Route> to={ Route::Consultation } classes="btn">{ "Conocer Más" }</Link<Route>>
							<a class="btn outline" href={ config.whatsapp_url(None) } target="_blank" rel="noopener noreferrer">
								{ "Consultar" }
							</a>
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}

#[function_component(BeforeAfterSection)]
fn before_after_section() -> Html {
	html! {
		<section id="antes-despues">
			<div class="container">
				<div class="section-title">
					<h2>{ "Antes y Después" }</h2>
					<p>{ "Resultados reales, sin filtros. Cada piel tiene una historia, y aquí verás lo que un tratamiento profesional puede lograr." }</p>
				</div>
				<div class="grid" style="grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));">
					{
						BEFORE_AFTER.iter().map(|item| html! {
							<figure class="card before-after" style="margin: 0;">
								<img src={ item.image } alt={ format!("Antes y después - {}", item.treatment) } />
								<figcaption>{ item.treatment }</figcaption>
							</figure>
						}).collect::<Html>()
					}
				</div>
				<p class="muted" style="text-align: center; font-style: italic; margin-top: 48px;">
					{ "Los resultados pueden variar según el tipo de piel y el tratamiento aplicado" }
				</p>
			</div>
		</section>
	}
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
	let config = use_site_config();
	let calendly_url = config.calendly_url.clone();
	let book = Callback::from(move |_: MouseEvent| calendly::open_popup(&calendly_url));

	html! {
		<section id="testimonios" class="soft">
			<div class="container">
				<div class="section-title">
					<h2>{ "Lo Que Dicen Mis Clientas" }</h2>
					<p>{ "Experiencias reales de personas que confiaron en mi trabajo" }</p>
				</div>
				<div class="grid" style="margin-bottom: 48px;">
					{
						TESTIMONIALS.iter().map(|t| html! {
							<div class="card">
								<div class="card-body">
									<div class="stars" aria-label={ format!("{} de 5", t.rating) }>{ t.stars() }</div>
									<p>{ format!("\u{201c}{}\u{201d}", t.text) }</p>
									<p class="price">{ t.name }</p>
								</div>
							</div>
						}).collect::<Html>()
					}
				</div>
				<div class="button-row">
					<button class="btn" onclick={ book }>{ "Reservar Ahora" }</button>
					<a class="btn outline" href={ config.whatsapp_url(None) } target="_blank" rel="noopener noreferrer">
						{ "Escribir por WhatsApp" }
					</a>
				</div>
			</div>
		</section>
	}
}

#[function_component(WhyChoose)]
fn why_choose() -> Html {
	html! {
		<section>
			<div class="container">
				<div class="section-title">
					<h2>{ "¿Por Qué Elegirme?" }</h2>
					<p>{ "Compromiso con la excelencia y tu bienestar" }</p>
				</div>
				<div class="grid">
					{
						REASONS.iter().map(|r| html! {
							<div class="reason">
								<h3>{ r.title }</h3>
								<p class="muted">{ r.description }</p>
							</div>
						}).collect::<Html>()
					}
				</div>
				<h2 style="text-align: center; margin-top: 64px;">{ "Tu piel merece lo mejor." }</h2>
			</div>
		</section>
	}
}

#[function_component(BookingCta)]
fn booking_cta() -> Html {
	let config = use_site_config();
	let calendly_url = config.calendly_url.clone();
	let book = Callback::from(move |_: MouseEvent| calendly::open_popup(&calendly_url));

	html! {
		<section id="reservar">
			<div class="container">
				<div class="section-title">
					<h2>{ "Agenda Tu Cita" }</h2>
					<p>{ "Reserva fácilmente desde tu móvil o computadora. Selecciona el servicio, elige fecha y horario, y listo." }</p>
				</div>
				<div class="grid">
					{
						BOOKING_STEPS.iter().map(|step| html! {
							<div class="step">
								<h3>{ step.title }</h3>
								<p>{ step.description }</p>
							</div>
						}).collect::<Html>()
					}
				</div>
				<button class="btn" onclick={ book }>{ "Reservar Cita Ahora" }</button>
				<p style="opacity: 0.8; font-size: 0.9rem;">
					{ "* También puedes agendar llamando, escribiendo por WhatsApp o desde nuestro " }
					<Link<Route> to={ Route::Booking }>
						<span style="color: var(--primary-text); text-decoration: underline;">{ "formulario de reserva" }</span>
					</Link<Route>>
				</p>
			</div>
		</section>
	}
}

#[function_component(WhatsAppCta)]
fn whatsapp_cta() -> Html {
	let config = use_site_config();

	html! {
		<section>
			<div class="container">
				<div class="cta-box">
					<h2>{ "¿Tienes Dudas?" }</h2>
					<p class="muted">
						{ "Escríbeme y te ayudo a elegir el mejor tratamiento para tu piel. Respuesta rápida garantizada." }
					</p>
					<a class="btn whatsapp" href={ config.whatsapp_url(None) } target="_blank" rel="noopener noreferrer">
						{ "Hablar por WhatsApp" }
					</a>
					<p class="muted" style="font-size: 0.9rem;">{ format!("Horario de atención: {WHATSAPP_HOURS}") }</p>
				</div>
			</div>
		</section>
	}
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
	index: usize,
	open: bool,
	on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
	let Faq { question, answer } = FAQS[props.index];
	let answer_html = use_memo(answer, |answer| shared_data::md_to_html(answer));

	let onclick = {
		let on_toggle = props.on_toggle.clone();
		let index = props.index;
		Callback::from(move |_: MouseEvent| on_toggle.emit(index))
	};

	html! {
		<div class="card faq-item">
			<button class="faq-question" { onclick } aria-expanded={ props.open.to_string() }>
				<span>{ question }</span>
				<span>{ if props.open { "−" } else { "+" } }</span>
			</button>
			if props.open {
				<div class="faq-answer">
					{ Html::from_html_unchecked(answer_html.as_str().to_owned().into()) }
				</div>
			}
		</div>
	}
}

#[function_component(FaqSection)]
fn faq_section() -> Html {
	// only one answer is open at a time; clicking the open one closes it
	let open = use_state_eq(|| Option::<usize>::None);
	let on_toggle = {
		let open = open.clone();
		Callback::from(move |idx: usize| open.set((*open != Some(idx)).then_some(idx)))
	};

	html! {
		<section>
			<div class="container">
				<div class="section-title">
					<h2>{ "Preguntas Frecuentes" }</h2>
					<p>{ "Resolvemos tus dudas sobre tratamientos, cuidados y procedimientos" }</p>
				</div>
				<div class="faq">
					{
						(0..FAQS.len()).map(|index| html! {
							<FaqItem { index } open={ *open == Some(index) } on_toggle={ on_toggle.clone() } />
						}).collect::<Html>()
					}
					<div class="cta-box" style="margin-top: 48px;">
						<p>{ "¿No encuentras la respuesta a tu pregunta?" }</p>
						<p class="muted">{ "Contáctanos por WhatsApp o agenda una consulta gratuita y con gusto te ayudaremos." }</p>
					</div>
				</div>
			</div>
		</section>
	}
}

#[function_component(Location)]
fn location() -> Html {
	let config = use_site_config();

	html! {
		<section id="ubicacion" class="soft">
			<div class="container">
				<div class="section-title">
					<h2>{ "Estamos Aquí" }</h2>
					<p>{ "Un espacio cómodo, seguro e higiénico pensado para tu bienestar" }</p>
				</div>
				<div class="two-column">
					<div>
						<div class="card info-box"><div class="card-body">
							<h3>{ "Dirección" }</h3>
							{ config.address_lines.iter().map(|line| html! { <p class="muted">{ line }</p> }).collect::<Html>() }
						</div></div>
						<div class="card info-box"><div class="card-body">
							<h3>{ "Horario" }</h3>
							{
								OPENING_HOURS.into_iter()
									.map(|(days, hours)| html! { <p class="muted">{ format!("{days}: {hours}") }</p> })
									.collect::<Html>()
							}
						</div></div>
						<div class="card info-box"><div class="card-body">
							<h3>{ "Cómo llegar" }</h3>
							{ GETTING_THERE.into_iter().map(|line| html! { <p class="muted">{ line }</p> }).collect::<Html>() }
						</div></div>
					</div>
					<iframe
						class="map"
						src={ config.maps_embed_url.clone() }
						loading="lazy"
						referrerpolicy="no-referrer-when-downgrade"
						title={ format!("Ubicación de {}", config.business_name) }
					/>
				</div>
			</div>
		</section>
	}
}

#[function_component(Social)]
fn social() -> Html {
	let config = use_site_config();

	let profiles = [
		("Instagram", &config.instagram_url, &config.instagram_handle),
		("Facebook", &config.facebook_url, &config.facebook_handle),
	];

	html! {
		<section>
			<div class="container">
				<div class="section-title">
					<h2>{ "Sígueme en Redes Sociales" }</h2>
					<p>{ "Descubre más resultados, tips de estética y promociones exclusivas" }</p>
				</div>
				<div class="button-row">
					{
						profiles.into_iter().map(|(network, url, handle)| html! {
							<a class="btn" href={ url.clone() } target="_blank" rel="noopener noreferrer">
								<small>{ network }</small>
								<br />
								<strong>{ handle }</strong>
							</a>
						}).collect::<Html>()
					}
				</div>
			</div>
		</section>
	}
}

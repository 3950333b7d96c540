use shared_data::content::{Pack, CONSULTATION_BENEFITS, PACKS, PROCESS_STEPS, REPORT_CONTENTS};
use yew::prelude::*;

use crate::{layout::{scroll_to, Page}, use_site_config};

static CONSULTATION_STYLE: &str = r"
#consultation-hero {
	padding: 140px 0 80px 0;
	text-align: center;
	background: linear-gradient(135deg, var(--soft-background), var(--background));
}
#consultation-hero h1 {
	font-size: 3.4rem;
}
#consultation-hero p {
	max-width: 640px;
	margin: 0 auto 32px auto;
}
.benefit {
	text-align: center;
}
.pack {
	position: relative;
	text-align: center;
}
.pack.highlight {
	border: 2px solid var(--accent);
	box-shadow: 0 0 0 4px rgba(217, 179, 108, 0.25);
}
.pack.selected {
	outline: 2px solid var(--primary);
}
.pack .badge {
	position: absolute;
	top: 0;
	right: 0;
	border-radius: 0 0 0 12px;
}
.pack-price {
	font-size: 2.6rem;
	font-weight: 700;
	color: var(--primary);
}
.pack ul, .report ul {
	list-style: none;
	padding: 0;
	text-align: left;
}
.pack li, .report li {
	margin-bottom: 10px;
}
.pack li::before, .report li::before {
	content: '✓ ';
	color: var(--primary);
	font-weight: 700;
}
.pack .btn {
	width: 100%;
}
.process-step {
	display: flex;
	gap: 16px;
}
.step-number {
	flex-shrink: 0;
	width: 56px;
	height: 56px;
	border-radius: 50%;
	background-color: rgba(217, 179, 108, 0.25);
	display: flex;
	align-items: center;
	justify-content: center;
	font-weight: 700;
	font-size: 1.3rem;
}
.report {
	max-width: 860px;
	margin: 0 auto;
}
.report li {
	background-color: var(--soft-background);
	border-radius: 8px;
	padding: 14px 16px;
}
#final-cta {
	max-width: 760px;
	margin: 0 auto;
	text-align: center;
	padding: 48px;
	border-radius: 24px;
	background: linear-gradient(135deg, #f3e2bd, var(--accent));
}
";

#[derive(Properties, PartialEq)]
struct PackCardProps {
	index: usize,
	selected: bool,
	on_select: Callback<usize>,
}

#[function_component(PackCard)]
fn pack_card(props: &PackCardProps) -> Html {
	let config = use_site_config();
	let pack: &Pack = &PACKS[props.index];

	let onclick = {
		let on_select = props.on_select.clone();
		let index = props.index;
		Callback::from(move |_: MouseEvent| on_select.emit(index))
	};

	let classes = classes!(
		"card",
		"pack",
		pack.highlight.then_some("highlight"),
		props.selected.then_some("selected")
	);

	html! {
		<div class={ classes } id={ format!("pack-{}", pack.id) }>
			if let Some(badge) = pack.badge {
				<span class="badge">{ badge }</span>
			}
			<div class="card-body">
				<h3>{ pack.name }</h3>
				<div class="pack-price">{ pack.price }</div>
				<p class="muted">{ pack.description }</p>
				<ul>
					{ pack.features.iter().map(|f| html! { <li class="muted">{ *f }</li> }).collect::<Html>() }
				</ul>
				<a
					class="btn"
					href={ config.whatsapp_url(Some(&pack.whatsapp_message())) }
					target="_blank"
					rel="noopener noreferrer"
					{ onclick }
				>{ "Seleccionar Plan" }</a>
			</div>
		</div>
	}
}

#[function_component(ConsultationPage)]
pub fn consultation_page() -> Html {
	let config = use_site_config();
	// only used to outline whichever pack they last picked
	let selected = use_state_eq(|| Option::<usize>::None);

	let on_select = {
		let selected = selected.clone();
		Callback::from(move |idx: usize| selected.set(Some(idx)))
	};

	let see_packs = Callback::from(|_: MouseEvent| scroll_to("packs"));

	html! {
		<Page>
			<style>{ CONSULTATION_STYLE }</style>

			<section id="consultation-hero">
				<div class="container">
					<span class="badge">{ "Servicio 100% Online" }</span>
					<h1>{ "Asesoría de Piel Online" }</h1>
					<p class="muted">
						{ "Descubre exactamente qué necesita tu piel. Analizo tu tipo de piel, tus necesidades y tus objetivos para crear una rutina 100% personalizada, sencilla y efectiva." }
					</p>
					<div class="button-row">
						<button class="btn" onclick={ see_packs.clone() }>{ "Ver Packs y Precios" }</button>
						<a class="btn outline" href={ config.whatsapp_url(None) } target="_blank" rel="noopener noreferrer">
							{ "Consultar por WhatsApp" }
						</a>
					</div>
				</div>
			</section>

			<section>
				<div class="container">
					<div class="section-title">
						<h2>{ "¿Qué Incluye?" }</h2>
						<p>{ "Todo lo que necesitas para transformar tu rutina de cuidado facial" }</p>
					</div>
					<div class="grid">
						{
							CONSULTATION_BENEFITS.iter().map(|b| html! {
								<div class="card benefit">
									<div class="card-body">
										<h3>{ b.title }</h3>
										<p class="muted">{ b.description }</p>
									</div>
								</div>
							}).collect::<Html>()
						}
					</div>
				</div>
			</section>

			<section id="packs" class="soft">
				<div class="container">
					<div class="section-title">
						<h2>{ "Elige Tu Pack" }</h2>
						<p>{ "Selecciona el plan que mejor se adapte a tus necesidades" }</p>
					</div>
					<div class="grid">
						{
							(0..PACKS.len()).map(|index| html! {
								<PackCard
									{ index }
									selected={ *selected == Some(index) }
									on_select={ on_select.clone() }
								/>
							}).collect::<Html>()
						}
					</div>
				</div>
			</section>

			<section>
				<div class="container">
					<div class="section-title">
						<h2>{ "El Proceso" }</h2>
						<p>{ "Simple, rápido y totalmente personalizado" }</p>
					</div>
					<div class="grid" style="max-width: 860px; margin: 0 auto; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));">
						{
							PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
								<div class="process-step">
									<div class="step-number">{ i + 1 }</div>
									<div>
										<p class="price" style="margin: 0;">{ format!("Paso {}", i + 1) }</p>
										<h3>{ step.title }</h3>
										<p class="muted">{ step.description }</p>
									</div>
								</div>
							}).collect::<Html>()
						}
					</div>
				</div>
			</section>

			<section class="soft">
				<div class="container report">
					<div class="section-title">
						<h2>{ "Tu Informe Personalizado" }</h2>
						<p>{ "Recibirás un análisis completo y detallado" }</p>
					</div>
					<div class="card">
						<div class="card-body">
							<h3>{ "Contenido del Informe" }</h3>
							<ul>
								{ REPORT_CONTENTS.into_iter().map(|item| html! { <li>{ item }</li> }).collect::<Html>() }
							</ul>
						</div>
					</div>
				</div>
			</section>

			<section>
				<div class="container">
					<div id="final-cta">
						<h2>{ "¿Lista para transformar tu piel?" }</h2>
						<p class="muted">{ "Agenda tu asesoría online y descubre la rutina perfecta para tu piel" }</p>
						<div class="button-row">
							<button class="btn" onclick={ see_packs }>{ "Ver Packs" }</button>
							<a class="btn outline" href={ config.whatsapp_url(None) } target="_blank" rel="noopener noreferrer" style="background-color: var(--background);">
								{ "Contactar Ahora" }
							</a>
						</div>
					</div>
				</div>
			</section>
		</Page>
	}
}

//! The words and pictures on the site, kept out of the components so the copy can be edited in
//! one place.

use crate::catalog::Service;

pub struct ServiceCard {
	pub service: Service,
	pub description: &'static str,
	pub duration: &'static str,
	pub price: &'static str,
	pub image: &'static str,
}

impl ServiceCard {
	/// Where clicking the card takes you. The online consultation has its own page; everything else
	/// goes straight to the booking form.
	#[must_use]
	pub fn link(&self) -> &'static str {
		if self.service.is_online() {
			"/asesoria-online"
		} else {
			"/reservar"
		}
	}
}

pub static SERVICE_CARDS: [ServiceCard; 8] = [
	ServiceCard {
		service: Service::OnlineSkinConsultation,
		description: "Análisis profesional de tu piel y rutina 100% personalizada desde casa.",
		duration: "Online",
		price: "Desde 25€",
		image: "/assets/service-online-consultation.jpg",
	},
	ServiceCard {
		service: Service::DeepFacialCleansing,
		description: "Elimina impurezas, destapa poros y revela una piel luminosa y fresca.",
		duration: "60 min",
		price: "Precio a consultar",
		image: "/assets/service-facial-cleaning.jpg",
	},
	ServiceCard {
		service: Service::Dermapen,
		description: "Estimula la producción de colágeno para una piel más firme y rejuvenecida.",
		duration: "45 min",
		price: "Precio a consultar",
		image: "/assets/service-dermapen.jpg",
	},
	ServiceCard {
		service: Service::ChemicalPeel,
		description: "Renovación celular profunda para mejorar textura, tono y luminosidad.",
		duration: "50 min",
		price: "Precio a consultar",
		image: "/assets/service-peeling.jpg",
	},
	ServiceCard {
		service: Service::AcneTreatment,
		description: "Controla brotes, reduce manchas y equilibra tu piel con tratamientos especializados.",
		duration: "55 min",
		price: "Precio a consultar",
		image: "/assets/service-acne.jpg",
	},
	ServiceCard {
		service: Service::PigmentationRemoval,
		description: "Trata hiperpigmentación y unifica el tono de tu piel de manera segura.",
		duration: "45 min",
		price: "Precio a consultar",
		image: "/assets/service-pigmentation.jpg",
	},
	ServiceCard {
		service: Service::FacialRejuvenation,
		description: "Tratamientos antiedad sin cirugía para recuperar firmeza y juventud.",
		duration: "60 min",
		price: "Precio a consultar",
		image: "/assets/service-antiaging.jpg",
	},
	ServiceCard {
		service: Service::FacialRadiofrequency,
		description: "Tecnología avanzada para tensar la piel y reducir arrugas sin dolor.",
		duration: "50 min",
		price: "Precio a consultar",
		image: "/assets/service-radiofrequency.jpg",
	},
];

/// A heading with a line of explanation under it. Most of the smaller grids on the site are lists
/// of these.
pub struct Blurb {
	pub title: &'static str,
	pub description: &'static str,
}

const fn blurb(title: &'static str, description: &'static str) -> Blurb {
	Blurb { title, description }
}

pub const ABOUT_NAME: &str = "Grether Gavilan Anias";
pub const ABOUT_ROLE: &str = "Esteticista Profesional & Auxiliar de Medicina Estética";
pub const ABOUT_MARKDOWN: &str = "\
Con años de experiencia en el cuidado de la piel, me especializo en tratamientos estéticos \
avanzados y medicina estética. Mi enfoque combina técnicas profesionales con un trato humano y \
cercano.

Cada piel es única y merece un tratamiento personalizado. Por eso, trabajo con **protocolos \
clínicos certificados**, equipos de última generación y productos dermatológicamente aprobados \
para garantizar tu seguridad y bienestar.
";

pub static ABOUT_FEATURES: [&str; 4] = [
	"Esteticista profesional certificada",
	"Protocolos clínicos y seguros",
	"Resultados visibles desde la primera sesión",
	"Atención personalizada y cercana",
];

pub static REASONS: [Blurb; 6] = [
	blurb("Certificación Profesional", "Esteticista profesional y auxiliar de medicina estética con formación certificada"),
	blurb("Protocolos Clínicos", "Tratamientos con protocolos médicos seguros y comprobados"),
	blurb("Productos Premium", "Productos de alta gama aprobados dermatológicamente"),
	blurb("Resultados Visibles", "Mejoras notables desde la primera sesión de tratamiento"),
	blurb("Atención Personalizada", "Trato cercano, humano y sin prisas para cada clienta"),
	blurb("Seguimiento Continuo", "Acompañamiento posterior para garantizar tu bienestar"),
];

pub struct BeforeAfter {
	pub image: &'static str,
	pub treatment: &'static str,
}

pub static BEFORE_AFTER: [BeforeAfter; 2] = [
	BeforeAfter { image: "/assets/before-after-1.jpg", treatment: "Tratamiento de pigmentación" },
	BeforeAfter { image: "/assets/before-after-2.jpg", treatment: "Tratamiento de acné y textura" },
];

pub struct Testimonial {
	pub name: &'static str,
	pub text: &'static str,
	// out of 5
	pub rating: u8,
}

impl Testimonial {
	#[must_use]
	pub fn stars(&self) -> String {
		"★".repeat(usize::from(self.rating.min(5)))
	}
}

pub static TESTIMONIALS: [Testimonial; 6] = [
	Testimonial {
		name: "Carolina M.",
		text: "Gracias a Grether mi piel cambió por completo. Después de mi primera limpieza facial ya se veía un brillo diferente. Totalmente recomendada.",
		rating: 5,
	},
	Testimonial {
		name: "Mariana R.",
		text: "Profesional, amable y con resultados garantizados. El dermapen fue increíble, mi piel se ve mucho más firme y luminosa.",
		rating: 5,
	},
	Testimonial {
		name: "Verónica T.",
		text: "El mejor trato y cero dolor. Me explicó todo el proceso y me sentí muy cómoda. Volveré sin duda para más tratamientos.",
		rating: 5,
	},
	Testimonial {
		name: "Isabel G.",
		text: "Me encantó el tratamiento de radiofrecuencia. Noté resultados desde la primera sesión. Grether es muy profesional y el ambiente es muy agradable.",
		rating: 5,
	},
	Testimonial {
		name: "Andrea L.",
		text: "Las manchas en mi cara han disminuido notablemente después del tratamiento de pigmentación. Estoy fascinada con los resultados y la atención recibida.",
		rating: 5,
	},
	Testimonial {
		name: "Patricia S.",
		text: "El peeling que me hizo Grether fue excelente. Mi piel se ve renovada y más joven. Sin duda seguiré viniendo para más tratamientos.",
		rating: 5,
	},
];

pub static BOOKING_STEPS: [Blurb; 3] = [
	blurb("Elige tu fecha", "Selecciona el día que mejor te convenga"),
	blurb("Selecciona horario", "Disponibilidad flexible para tu comodidad"),
	blurb("Confirma y listo", "Recibe confirmación inmediata"),
];

pub struct Faq {
	pub question: &'static str,
	/// markdown
	pub answer: &'static str,
}

pub static FAQS: [Faq; 8] = [
	Faq {
		question: "¿Cuánto tiempo dura cada tratamiento?",
		answer: "La duración varía según el tratamiento. Las limpiezas faciales duran aproximadamente **60 minutos**, mientras que tratamientos como dermapen o peeling químico toman entre **45-55 minutos**. Durante tu consulta, te informaremos del tiempo exacto según el tratamiento que elijas.",
	},
	Faq {
		question: "¿Los tratamientos son seguros para todo tipo de piel?",
		answer: "Sí, todos nuestros tratamientos están diseñados para adaptarse a diferentes tipos de piel. Realizamos una *evaluación personalizada* antes de cada tratamiento para determinar el protocolo más adecuado para tu tipo de piel y condición específica.",
	},
	Faq {
		question: "¿Cuántas sesiones necesito para ver resultados?",
		answer: "Depende del tratamiento y de tu objetivo. Algunos tratamientos como la limpieza facial profunda muestran resultados inmediatos, mientras que otros como dermapen o tratamientos antiacné pueden requerir de **4-6 sesiones** para resultados óptimos. Te proporcionaremos un plan personalizado en tu primera consulta.",
	},
	Faq {
		question: "¿Hay algún cuidado especial después del tratamiento?",
		answer: "Cada tratamiento tiene sus propias recomendaciones post-cuidado. Generalmente incluyen:\n\n- evitar la exposición solar directa\n- usar protector solar\n- mantener la piel hidratada\n- no usar ciertos productos durante las primeras 24-48 horas\n\nTe daremos instrucciones detalladas después de cada sesión.",
	},
	Faq {
		question: "¿Los tratamientos son dolorosos?",
		answer: "La mayoría de nuestros tratamientos son indoloros o causan molestias mínimas. Utilizamos técnicas y productos que minimizan cualquier incomodidad. En tratamientos como dermapen, aplicamos anestesia tópica para garantizar tu confort durante todo el procedimiento.",
	},
	Faq {
		question: "¿Puedo combinar varios tratamientos?",
		answer: "Sí, muchos tratamientos se pueden combinar para obtener mejores resultados. Sin embargo, esto debe ser evaluado caso por caso. Durante tu consulta, crearemos un plan de tratamiento personalizado que puede incluir la combinación de diferentes procedimientos de forma segura y efectiva.",
	},
	Faq {
		question: "¿Cuál es la política de cancelación de citas?",
		answer: "Te pedimos que nos notifiques con al menos **24 horas** de anticipación si necesitas cancelar o reprogramar tu cita. Esto nos permite ofrecer ese espacio a otros clientes. Las cancelaciones con menos de 24 horas pueden estar sujetas a un cargo.",
	},
	Faq {
		question: "¿Ofrecen consultas gratuitas?",
		answer: "Sí, ofrecemos una consulta inicial gratuita donde evaluamos tu piel, discutimos tus objetivos y te recomendamos el tratamiento más adecuado para ti. Puedes agendar tu consulta a través de nuestra plataforma de reservas online o por WhatsApp.",
	},
];

/// (days, hours)
pub static OPENING_HOURS: [(&str, &str); 3] = [
	("Lunes a Viernes", "9:00 AM - 7:00 PM"),
	("Sábados", "10:00 AM - 5:00 PM"),
	("Domingos", "Cerrado"),
];

pub const WHATSAPP_HOURS: &str = "Lunes a Sábado de 9:00 AM a 7:00 PM";

pub static GETTING_THERE: [&str; 2] = [
	"Estacionamiento disponible en la calle",
	"Cerca de transporte público",
];

pub static CONSULTATION_HIGHLIGHTS: [&str; 4] = [
	"100% online desde casa",
	"Rutina personalizada para tu piel",
	"Seguimiento incluido",
	"Resultados en 48-72h",
];

pub static CONSULTATION_BENEFITS: [Blurb; 7] = [
	blurb("Análisis profesional de tu piel", "Evaluación detallada de tu tipo de piel y necesidades"),
	blurb("Revisión de tus productos", "Analizamos los productos que ya usas"),
	blurb("Rutina personalizada", "Plan completo para mañana y noche"),
	blurb("Productos recomendados", "Lista específica adaptada a tu piel"),
	blurb("Consejos personalizados", "Hábitos y cuidados para tu día a día"),
	blurb("Seguimiento por WhatsApp", "15 días de acompañamiento continuo"),
	blurb("Informe completo", "Entrega en PDF o video explicativo"),
];

pub struct Pack {
	pub id: &'static str,
	pub name: &'static str,
	pub price: &'static str,
	pub description: &'static str,
	pub features: &'static [&'static str],
	pub badge: Option<&'static str>,
	pub highlight: bool,
}

impl Pack {
	/// What gets pre-typed into whatsapp when someone picks this pack
	#[must_use]
	pub fn whatsapp_message(&self) -> String {
		format!("Hola, me interesa el {} de Asesoría Online", self.name)
	}
}

pub static PACKS: [Pack; 3] = [
	Pack {
		id: "basico",
		name: "Pack Básico",
		price: "25€",
		description: "Análisis y rutina básica personalizada",
		features: &[
			"Análisis de tipo de piel",
			"Rutina básica (mañana y noche)",
			"Lista de productos esenciales",
			"Informe en PDF",
		],
		badge: None,
		highlight: false,
	},
	Pack {
		id: "completo",
		name: "Pack Completo",
		price: "65€",
		description: "Análisis profundo y seguimiento",
		features: &[
			"Todo lo del Pack Básico",
			"Análisis detallado de problemas",
			"Revisión de productos actuales",
			"Consejos de hábitos personalizados",
			"Seguimiento 15 días por WhatsApp",
			"Video explicativo personalizado",
		],
		badge: Some("Más Popular"),
		highlight: true,
	},
	Pack {
		id: "premium",
		name: "Pack Premium",
		price: "90€",
		description: "Experiencia completa con seguimiento extendido",
		features: &[
			"Todo lo del Pack Completo",
			"Análisis profesional avanzado",
			"Plan de tratamiento a largo plazo",
			"Seguimiento 30 días por WhatsApp",
			"Revisión y ajuste de rutina",
			"Prioridad en respuestas",
		],
		badge: Some("Premium"),
		highlight: false,
	},
];

/// In order; the page numbers them itself
pub static PROCESS_STEPS: [Blurb; 6] = [
	blurb("Compra del servicio", "Elige tu pack y completa el pago"),
	blurb("Formulario inicial", "Completa el cuestionario sobre tu piel"),
	blurb("Envío de fotos", "Envía fotos de tu piel para el análisis"),
	blurb("Análisis profesional", "Evaluamos tu caso en detalle"),
	blurb("Entrega del informe", "Recibes tu plan personalizado"),
	blurb("Seguimiento", "Acompañamiento durante el proceso"),
];

pub static REPORT_CONTENTS: [&str; 7] = [
	"Tipo de piel identificado",
	"Problemas principales detectados",
	"Rutina recomendada (mañana)",
	"Rutina recomendada (noche)",
	"Productos sugeridos con alternativas",
	"Consejos adicionales y hábitos",
	"Plan de seguimiento personalizado",
];

/// Sections of the landing page that the header links to, as (element id, label)
pub static NAV_SECTIONS: [(&str, &str); 4] = [
	("servicios", "Servicios"),
	("antes-despues", "Antes y Después"),
	("testimonios", "Testimonios"),
	("ubicacion", "Ubicación"),
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_service_has_exactly_one_card() {
		for service in Service::ALL {
			assert_eq!(SERVICE_CARDS.iter().filter(|c| c.service == service).count(), 1, "{service}");
		}
	}

	#[test]
	fn only_the_online_card_skips_the_form() {
		let online = SERVICE_CARDS.iter()
			.filter(|c| c.link() == "/asesoria-online")
			.map(|c| c.service)
			.collect::<Vec<_>>();
		assert_eq!(online, [Service::OnlineSkinConsultation]);
	}

	#[test]
	fn pack_message() {
		assert_eq!(PACKS[0].whatsapp_message(), "Hola, me interesa el Pack Básico de Asesoría Online");
		assert_eq!(PACKS.iter().filter(|p| p.highlight).count(), 1);
	}

	#[test]
	fn stars_are_capped() {
		let t = Testimonial { name: "x", text: "y", rating: 9 };
		assert_eq!(t.stars().chars().count(), 5);
		assert_eq!(TESTIMONIALS[0].stars(), "★★★★★");
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeKind {
	Success,
	Error,
}

/// A short-lived message for the user, shown as a toast on the booking page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
	pub kind: NoticeKind,
	pub title: String,
	pub description: String,
}

impl Notice {
	#[must_use]
	pub fn booking_sent() -> Self {
		Self {
			kind: NoticeKind::Success,
			title: "¡Reserva enviada!".into(),
			description: "Te contactaremos pronto para confirmar tu cita.".into(),
		}
	}

	/// `contact` is whatever we want to point people to instead, e.g. the whatsapp number
	#[must_use]
	pub fn booking_failed(reason: &str, contact: &str) -> Self {
		let reason = reason.trim().trim_end_matches('.');
		Self {
			kind: NoticeKind::Error,
			title: "No se pudo enviar la reserva".into(),
			description: format!(
				"{reason}. Por favor, inténtalo de nuevo o contáctanos por WhatsApp o llamando al {contact}."
			),
		}
	}

	#[must_use]
	pub fn invalid_form() -> Self {
		Self {
			kind: NoticeKind::Error,
			title: "Revisa el formulario".into(),
			description: "Hay campos incompletos o con errores.".into(),
		}
	}

	#[must_use]
	pub fn is_error(&self) -> bool {
		self.kind == NoticeKind::Error
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn failure_mentions_reason_and_fallback() {
		let notice = Notice::booking_failed("Servidor ocupado.", "+34 603 381 502");
		assert!(notice.is_error());
		assert_eq!(
			notice.description,
			"Servidor ocupado. Por favor, inténtalo de nuevo o contáctanos por WhatsApp o llamando al +34 603 381 502."
		);
	}
}

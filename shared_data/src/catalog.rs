use std::fmt;

/// The treatments that can be booked through the form. The display name is also what gets sent to
/// the booking sheet, so renaming a variant's `name()` changes what shows up in the spreadsheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Service {
	OnlineSkinConsultation,
	DeepFacialCleansing,
	Dermapen,
	ChemicalPeel,
	AcneTreatment,
	PigmentationRemoval,
	FacialRejuvenation,
	FacialRadiofrequency,
}

impl Service {
	pub const ALL: [Self; 8] = [
		Self::OnlineSkinConsultation,
		Self::DeepFacialCleansing,
		Self::Dermapen,
		Self::ChemicalPeel,
		Self::AcneTreatment,
		Self::PigmentationRemoval,
		Self::FacialRejuvenation,
		Self::FacialRadiofrequency,
	];

	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::OnlineSkinConsultation => "Asesoría de Piel Online",
			Self::DeepFacialCleansing => "Limpieza Facial Profunda",
			Self::Dermapen => "Dermapen / Microagujas",
			Self::ChemicalPeel => "Peeling Químico",
			Self::AcneTreatment => "Tratamientos Antiacné",
			Self::PigmentationRemoval => "Eliminación de Manchas",
			Self::FacialRejuvenation => "Rejuvenecimiento Facial",
			Self::FacialRadiofrequency => "Radiofrecuencia Facial",
		}
	}

	// exact match only; the select box always hands us one of these verbatim
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|s| s.name() == name)
	}

	#[must_use]
	pub const fn is_online(self) -> bool {
		matches!(self, Self::OnlineSkinConsultation)
	}
}

impl fmt::Display for Service {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

const FIRST_SLOT_MINUTES: u16 = 9 * 60;
const LAST_SLOT_MINUTES: u16 = 20 * 60;
const SLOT_LENGTH_MINUTES: u16 = 30;

/// A half-hour appointment start time between 09:00 and 20:00, both inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot {
	// minutes since midnight
	minutes: u16,
}

impl TimeSlot {
	pub fn all() -> impl Iterator<Item = Self> {
		(FIRST_SLOT_MINUTES..=LAST_SLOT_MINUTES)
			.step_by(SLOT_LENGTH_MINUTES as usize)
			.map(|minutes| Self { minutes })
	}

	/// Only accepts the canonical `HH:MM` spelling of a slot in the set, so `9:00` or `09:15` are
	/// both rejected.
	#[must_use]
	pub fn parse(s: &str) -> Option<Self> {
		Self::all().find(|slot| slot.to_string() == s)
	}

	#[must_use]
	pub const fn hour(self) -> u16 {
		self.minutes / 60
	}

	#[must_use]
	pub const fn minute(self) -> u16 {
		self.minutes % 60
	}
}

impl fmt::Display for TimeSlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:02}:{:02}", self.hour(), self.minute())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slots_cover_the_working_day() {
		let slots = TimeSlot::all().map(|s| s.to_string()).collect::<Vec<_>>();
		assert_eq!(slots.len(), 23);
		assert_eq!(slots.first().map(String::as_str), Some("09:00"));
		assert_eq!(slots.get(1).map(String::as_str), Some("09:30"));
		assert_eq!(slots.last().map(String::as_str), Some("20:00"));
	}

	#[test]
	fn slot_parsing_is_strict() {
		assert!(TimeSlot::parse("14:30").is_some());
		assert!(TimeSlot::parse("20:00").is_some());
		assert!(TimeSlot::parse("20:30").is_none());
		assert!(TimeSlot::parse("08:30").is_none());
		assert!(TimeSlot::parse("9:00").is_none());
		assert!(TimeSlot::parse("10:15").is_none());
		assert!(TimeSlot::parse("").is_none());
	}

	#[test]
	fn every_service_name_round_trips() {
		for service in Service::ALL {
			assert_eq!(Service::from_name(service.name()), Some(service));
		}
		assert_eq!(Service::from_name("limpieza facial profunda"), None);
		assert_eq!(Service::from_name("Masaje"), None);
	}
}

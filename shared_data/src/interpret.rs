//! Making sense of whatever the booking sheet sends back.
//!
//! The sheet endpoint isn't ours, and depending on how it's deployed it answers with json, with a
//! urlencoded blob, or with nothing readable at all. So rather than trusting one shape, we try a
//! fixed list of parsers in order and go with the first one that finds something we can act on.

use serde_json::{Map, Value};
use tracing::debug;

pub const CONNECTION_ERROR: &str = "Error de conexión con el servidor";

/// Just the parts of an http response that matter for deciding how a booking went
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawResponse {
	pub status: u16,
	pub content_type: Option<String>,
	pub body: String,
}

impl RawResponse {
	#[must_use]
	pub fn is_ok(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
	Success,
	// the sheet said 2xx but we couldn't read anything out of the body
	AmbiguousSuccess,
	Failure(String),
}

impl SubmissionOutcome {
	#[must_use]
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success | Self::AmbiguousSuccess)
	}
}

/// A response body normalized down to the two fields we care about
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedReply {
	pub status: Option<String>,
	pub message: Option<String>,
}

impl ParsedReply {
	// a reply with neither field set tells us nothing, so it doesn't stop the chain
	fn is_usable(&self) -> bool {
		self.status.is_some() || self.message.is_some()
	}

	fn is_success(&self) -> bool {
		self.status.as_deref()
			.is_some_and(|s| s.trim().eq_ignore_ascii_case("success"))
	}

	fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Option<String>)>) -> Self {
		let mut reply = Self::default();
		for (key, value) in pairs {
			let Some(value) = value else { continue };
			match key {
				// apps script templates tend to use `result` where we'd expect `status`
				"status" | "result" if reply.status.is_none() => reply.status = Some(value),
				"message" | "error" if reply.message.is_none() => reply.message = Some(value),
				_ => ()
			}
		}
		reply
	}

	fn from_json_object(obj: &Map<String, Value>) -> Self {
		Self::from_pairs(obj.iter().map(|(k, v)| (k.as_str(), json_text(v))))
	}
}

fn json_text(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Null => None,
		other => Some(other.to_string()),
	}
}

fn parse_json_object(body: &str) -> Option<ParsedReply> {
	match serde_json::from_str::<Value>(body.trim()) {
		Ok(Value::Object(obj)) => Some(ParsedReply::from_json_object(&obj)),
		_ => None
	}
}

pub trait ReplyParser {
	fn name(&self) -> &'static str;
	fn parse(&self, response: &RawResponse) -> Option<ParsedReply>;
}

/// Only tries json if the server actually said it was sending json
pub struct StructuredBody;

impl ReplyParser for StructuredBody {
	fn name(&self) -> &'static str {
		"structured"
	}

	fn parse(&self, response: &RawResponse) -> Option<ParsedReply> {
		let is_json = response.content_type.as_deref()
			.is_some_and(|ct| ct.to_ascii_lowercase().contains("json"));

		if is_json {
			parse_json_object(&response.body)
		} else {
			None
		}
	}
}

/// `status=success&message=...`
pub struct FlattenedBody;

impl ReplyParser for FlattenedBody {
	fn name(&self) -> &'static str {
		"flattened"
	}

	fn parse(&self, response: &RawResponse) -> Option<ParsedReply> {
		let body = response.body.trim();
		if !body.contains('=') || body.starts_with(['{', '[']) {
			return None;
		}

		let pairs: Vec<(String, String)> = serde_urlencoded::from_str(body).ok()?;
		Some(ParsedReply::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), Some(v.clone())))))
	}
}

/// One more go at json, ignoring the content-type, for servers that send json as text/plain or
/// text/html
pub struct LastResortStructured;

impl ReplyParser for LastResortStructured {
	fn name(&self) -> &'static str {
		"last-resort"
	}

	fn parse(&self, response: &RawResponse) -> Option<ParsedReply> {
		parse_json_object(&response.body)
	}
}

pub static PARSER_CHAIN: [&(dyn ReplyParser + Sync); 3] = [&StructuredBody, &FlattenedBody, &LastResortStructured];

/// Runs through `parsers` in order and returns the first usable reply
pub fn first_usable_reply(
	parsers: &[&(dyn ReplyParser + Sync)],
	response: &RawResponse
) -> Option<ParsedReply> {
	parsers.iter().find_map(|parser| {
		let reply = parser.parse(response).filter(ParsedReply::is_usable);
		if reply.is_some() {
			debug!(parser = parser.name(), "booking response parsed");
		}
		reply
	})
}

#[must_use]
pub fn interpret(response: &RawResponse) -> SubmissionOutcome {
	interpret_with(&PARSER_CHAIN, response)
}

#[must_use]
pub fn interpret_with(parsers: &[&(dyn ReplyParser + Sync)], response: &RawResponse) -> SubmissionOutcome {
	let raw_body = response.body.trim();

	match first_usable_reply(parsers, response) {
		Some(reply) if reply.is_success() => SubmissionOutcome::Success,
		Some(reply) => SubmissionOutcome::Failure(
			reply.message
				.filter(|m| !m.trim().is_empty())
				.unwrap_or_else(|| raw_body.to_string())
		),
		// the sheet often hands back an unreadable 200 on success. Calling that a failure would
		// have people booking twice, so we give it the benefit of the doubt
		None if response.is_ok() => SubmissionOutcome::AmbiguousSuccess,
		None if raw_body.is_empty() => SubmissionOutcome::Failure(format!("{CONNECTION_ERROR} (HTTP {})", response.status)),
		None => SubmissionOutcome::Failure(raw_body.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn resp(status: u16, content_type: Option<&str>, body: &str) -> RawResponse {
		RawResponse {
			status,
			content_type: content_type.map(str::to_string),
			body: body.to_string()
		}
	}

	const JSON: Option<&str> = Some("application/json; charset=utf-8");

	#[test]
	fn json_success() {
		assert_eq!(interpret(&resp(200, JSON, r#"{"status":"success"}"#)), SubmissionOutcome::Success);
		assert_eq!(interpret(&resp(200, JSON, r#"{"result":"success","row":12}"#)), SubmissionOutcome::Success);
		assert_eq!(interpret(&resp(200, JSON, r#"{"status":"SUCCESS"}"#)), SubmissionOutcome::Success);
	}

	#[test]
	fn json_failure_uses_server_message() {
		assert_eq!(
			interpret(&resp(200, JSON, r#"{"status":"error","message":"Servidor ocupado"}"#)),
			SubmissionOutcome::Failure("Servidor ocupado".into())
		);
		// even with no content-type, the last-resort parse should catch it
		assert_eq!(
			interpret(&resp(200, None, r#"{"status":"error","message":"Servidor ocupado"}"#)),
			SubmissionOutcome::Failure("Servidor ocupado".into())
		);
	}

	#[test]
	fn failure_without_message_falls_back_to_body() {
		let body = r#"{"status":"error"}"#;
		assert_eq!(interpret(&resp(200, JSON, body)), SubmissionOutcome::Failure(body.into()));
	}

	#[test]
	fn flattened_pairs() {
		let text = Some("text/plain");
		assert_eq!(interpret(&resp(200, text, "status=success&row=4")), SubmissionOutcome::Success);
		assert_eq!(
			interpret(&resp(200, text, "status=error&message=Hoja+llena")),
			SubmissionOutcome::Failure("Hoja llena".into())
		);
		// a message on its own is still something to report
		assert_eq!(
			interpret(&resp(200, text, "message=Cuota%20excedida")),
			SubmissionOutcome::Failure("Cuota excedida".into())
		);
	}

	#[test]
	fn unreadable_ok_is_ambiguous_success() {
		assert_eq!(interpret(&resp(200, None, "")), SubmissionOutcome::AmbiguousSuccess);
		assert_eq!(interpret(&resp(200, Some("text/html"), "<html>ok</html>")), SubmissionOutcome::AmbiguousSuccess);
		assert_eq!(interpret(&resp(200, JSON, "{not json")), SubmissionOutcome::AmbiguousSuccess);
		// json, but nothing in it we understand
		assert_eq!(interpret(&resp(204, JSON, r#"{"row":3}"#)), SubmissionOutcome::AmbiguousSuccess);
		// pairs, but not ones we know
		assert_eq!(interpret(&resp(200, None, "a=b")), SubmissionOutcome::AmbiguousSuccess);
	}

	#[test]
	fn unreadable_error_status_is_failure() {
		assert_eq!(
			interpret(&resp(500, Some("text/html"), " Internal error ")),
			SubmissionOutcome::Failure("Internal error".into())
		);
		assert_eq!(
			interpret(&resp(503, None, "")),
			SubmissionOutcome::Failure(format!("{CONNECTION_ERROR} (HTTP 503)"))
		);
	}

	#[test]
	fn parsed_reply_beats_status_code() {
		// whatever the server explicitly says wins over the http status
		assert_eq!(interpret(&resp(500, JSON, r#"{"status":"success"}"#)), SubmissionOutcome::Success);
		assert_eq!(
			interpret(&resp(200, JSON, r#"{"status":"error","message":""}"#)),
			SubmissionOutcome::Failure(r#"{"status":"error","message":""}"#.into())
		);
	}

	#[test]
	fn chain_order_matters() {
		struct Never;
		impl ReplyParser for Never {
			fn name(&self) -> &'static str { "never" }
			fn parse(&self, _: &RawResponse) -> Option<ParsedReply> { None }
		}

		struct AlwaysFails;
		impl ReplyParser for AlwaysFails {
			fn name(&self) -> &'static str { "always-fails" }
			fn parse(&self, _: &RawResponse) -> Option<ParsedReply> {
				Some(ParsedReply { status: Some("error".into()), message: Some("nope".into()) })
			}
		}

		let ok = resp(200, JSON, r#"{"status":"success"}"#);
		assert_eq!(interpret_with(&[&Never, &StructuredBody, &AlwaysFails], &ok), SubmissionOutcome::Success);
		assert_eq!(interpret_with(&[&AlwaysFails, &StructuredBody], &ok), SubmissionOutcome::Failure("nope".into()));
		assert_eq!(interpret_with(&[&Never], &ok), SubmissionOutcome::AmbiguousSuccess);
	}

	#[test]
	fn flattened_parser_skips_json_looking_bodies() {
		assert_eq!(FlattenedBody.parse(&resp(200, None, r#"{"a=b":1}"#)), None);
		assert_eq!(FlattenedBody.parse(&resp(200, None, "no pairs here")), None);
		assert!(StructuredBody.parse(&resp(200, Some("text/plain"), r#"{"status":"success"}"#)).is_none());
	}
}

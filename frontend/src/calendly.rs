use gloo_console::error;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Opens calendly's scheduling popup for `url`.
///
/// Their widget script is loaded by the page shell, not by us, so if it's blocked or hasn't
/// finished loading there's nothing to call and we just log it.
pub fn open_popup(url: &str) {
	if let Err(e) = try_open_popup(url) {
		error!(format!("Couldn't open calendly popup: {e}"));
	}
}

fn try_open_popup(url: &str) -> Result<(), String> {
	let window = web_sys::window().ok_or("no window")?;

	let calendly = Reflect::get(&window, &JsValue::from_str("Calendly"))
		.map_err(|e| format!("{e:?}"))?;
	if calendly.is_undefined() || calendly.is_null() {
		return Err("Calendly script not loaded".into());
	}

	let init = Reflect::get(&calendly, &JsValue::from_str("initPopupWidget"))
		.map_err(|e| format!("{e:?}"))?
		.dyn_into::<Function>()
		.map_err(|_| "Calendly.initPopupWidget isn't a function".to_string())?;

	let opts = Object::new();
	Reflect::set(&opts, &JsValue::from_str("url"), &JsValue::from_str(url))
		.map_err(|e| format!("{e:?}"))?;

	init.call1(&calendly, &opts)
		.map(drop)
		.map_err(|e| format!("{e:?}"))
}

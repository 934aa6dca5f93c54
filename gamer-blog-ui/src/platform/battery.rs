//! Battery level via `navigator.getBattery()`.
//!
//! The Battery Status API is missing from most browsers and from the
//! generated bindings, so it is reached through `Reflect`. When absent the
//! callback simply never fires.

use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

use super::web::{call_optional_method, js_failure, number_property};

/// Convert a `BatteryManager.level` (0.0..=1.0) to a whole percentage
pub fn battery_percent(level: f64) -> u8 {
    if !level.is_finite() {
        return 0;
    }
    (level * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Report the battery level once, then on every `levelchange` event
pub fn watch_battery(on_level: impl Fn(u8) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator: JsValue = window.navigator().into();

    let Some(pending) = call_optional_method(&navigator, "getBattery") else {
        log::debug!("Battery status unavailable");
        return;
    };
    let Ok(pending) = pending.dyn_into::<js_sys::Promise>() else {
        log::debug!("getBattery did not return a promise");
        return;
    };

    let on_level: Rc<dyn Fn(u8)> = Rc::new(on_level);

    spawn_local(async move {
        let manager = match JsFuture::from(pending).await {
            Ok(manager) => manager,
            Err(e) => {
                log::debug!("Battery status unavailable: {}", js_failure(e));
                return;
            }
        };

        report_level(&manager, on_level.as_ref());

        let Ok(target) = manager.clone().dyn_into::<web_sys::EventTarget>() else {
            return;
        };
        let listener = {
            let manager = manager.clone();
            let on_level = Rc::clone(&on_level);
            Closure::wrap(Box::new(move |_: web_sys::Event| {
                report_level(&manager, on_level.as_ref());
            }) as Box<dyn FnMut(web_sys::Event)>)
        };
        if let Err(e) =
            target.add_event_listener_with_callback("levelchange", listener.as_ref().unchecked_ref())
        {
            log::warn!("Could not watch battery level: {}", js_failure(e));
        }
        listener.forget();
    });
}

fn report_level(manager: &JsValue, on_level: &dyn Fn(u8)) {
    if let Some(level) = number_property(manager, "level") {
        on_level(battery_percent(level));
    }
}

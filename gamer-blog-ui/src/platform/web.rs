//! Browser implementation of the platform traits.
//!
//! Feature detection goes through `Reflect::has` on `window`/`navigator`,
//! since the generated bindings assume every API exists. Option objects are
//! filled with `Reflect::set` so they do not depend on binding setters.

use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::{
    Geolocator, Haptics, LocalTask, Notice, NotificationPermission, Notifier, PlatformError,
    PlatformResult, Scheduler,
};
use crate::model::GeoPoint;

/// The running browser
#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

fn has_property(target: &JsValue, name: &str) -> bool {
    Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

fn set_property(target: &JsValue, name: &str, value: &JsValue) -> PlatformResult<()> {
    Reflect::set(target, &JsValue::from_str(name), value)
        .map(|_| ())
        .map_err(js_failure)
}

fn get_property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

pub(crate) fn js_failure(err: JsValue) -> PlatformError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    PlatformError::Failed(message)
}

fn navigator() -> Option<web_sys::Navigator> {
    web_sys::window().map(|w| w.navigator())
}

fn notifications_supported() -> bool {
    web_sys::window()
        .map(|w| has_property(&w, "Notification"))
        .unwrap_or(false)
}

fn parse_permission(value: &str) -> NotificationPermission {
    match value {
        "granted" => NotificationPermission::Granted,
        "denied" => NotificationPermission::Denied,
        _ => NotificationPermission::Default,
    }
}

#[async_trait(?Send)]
impl Notifier for WebPlatform {
    fn permission(&self) -> NotificationPermission {
        if !notifications_supported() {
            return NotificationPermission::Unsupported;
        }
        match web_sys::Notification::permission() {
            web_sys::NotificationPermission::Granted => NotificationPermission::Granted,
            web_sys::NotificationPermission::Denied => NotificationPermission::Denied,
            _ => NotificationPermission::Default,
        }
    }

    async fn request_permission(&self) -> NotificationPermission {
        if !notifications_supported() {
            return NotificationPermission::Unsupported;
        }

        let promise = match web_sys::Notification::request_permission() {
            Ok(promise) => promise,
            Err(e) => {
                log::warn!("Notification permission request failed: {}", js_failure(e));
                return self.permission();
            }
        };

        match JsFuture::from(promise).await {
            Ok(value) => value
                .as_string()
                .map(|v| parse_permission(&v))
                .unwrap_or_else(|| self.permission()),
            Err(e) => {
                log::warn!("Notification permission request failed: {}", js_failure(e));
                self.permission()
            }
        }
    }

    fn show(&self, notice: &Notice) -> PlatformResult<()> {
        if !notifications_supported() {
            return Err(PlatformError::Unsupported("notifications"));
        }

        let options = web_sys::NotificationOptions::new();
        set_property(&options, "body", &JsValue::from_str(&notice.body))?;
        set_property(&options, "icon", &JsValue::from_str(&notice.icon))?;
        set_property(&options, "badge", &JsValue::from_str(&notice.badge))?;
        set_property(&options, "tag", &JsValue::from_str(&notice.tag))?;

        let notification =
            web_sys::Notification::new_with_options(&notice.title, &options).map_err(js_failure)?;

        // Clicking brings the app forward and dismisses the notification
        let handle = notification.clone();
        let on_click = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(window) = web_sys::window() {
                let _ = window.focus();
            }
            handle.close();
        }) as Box<dyn FnMut(web_sys::Event)>);
        notification.set_onclick(Some(on_click.as_ref().unchecked_ref()));
        on_click.forget();

        Ok(())
    }

    fn supports_background(&self) -> bool {
        notifications_supported()
            && navigator()
                .map(|n| has_property(&n, "serviceWorker"))
                .unwrap_or(false)
    }
}

#[async_trait(?Send)]
impl Geolocator for WebPlatform {
    async fn current_position(&self, timeout: Duration) -> PlatformResult<GeoPoint> {
        let navigator = navigator().ok_or(PlatformError::Unsupported("geolocation"))?;
        if !has_property(&navigator, "geolocation") {
            return Err(PlatformError::Unsupported("geolocation"));
        }
        let geolocation = navigator
            .geolocation()
            .map_err(|_| PlatformError::Unsupported("geolocation"))?;

        let options = web_sys::PositionOptions::new();
        set_property(&options, "timeout", &JsValue::from_f64(timeout.as_millis() as f64))?;
        set_property(&options, "maximumAge", &JsValue::from_f64(0.0))?;
        set_property(&options, "enableHighAccuracy", &JsValue::FALSE)?;

        let promise = Promise::new(&mut |resolve: Function, reject: Function| {
            if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
                &resolve,
                Some(&reject),
                &options,
            ) {
                let _ = reject.call1(&JsValue::NULL, &e);
            }
        });

        let position = JsFuture::from(promise).await.map_err(position_error)?;
        let coords = get_property(&position, "coords")
            .ok_or_else(|| PlatformError::Failed("position without coordinates".to_string()))?;

        let coordinate = |name: &str| {
            get_property(&coords, name)
                .and_then(|v| v.as_f64())
                .ok_or_else(|| PlatformError::Failed(format!("position without {}", name)))
        };

        Ok(GeoPoint {
            latitude: coordinate("latitude")?,
            longitude: coordinate("longitude")?,
        })
    }
}

/// Map a `GeolocationPositionError` by its code
fn position_error(err: JsValue) -> PlatformError {
    let code = get_property(&err, "code").and_then(|c| c.as_f64());
    let message = get_property(&err, "message")
        .and_then(|m| m.as_string())
        .unwrap_or_default();

    match code.map(|c| c as u32) {
        Some(1) => PlatformError::PermissionDenied(message),
        Some(3) => PlatformError::Timeout,
        _ if message.is_empty() => js_failure(err),
        _ => PlatformError::Failed(message),
    }
}

impl Haptics for WebPlatform {
    fn vibrate(&self, duration: Duration) -> bool {
        match navigator() {
            Some(navigator) if has_property(&navigator, "vibrate") => {
                navigator.vibrate_with_duration(duration.as_millis() as u32)
            }
            _ => false,
        }
    }
}

impl Scheduler for WebPlatform {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay.as_millis() as u32, task).forget();
    }

    fn spawn(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// Call a method that may be missing on `target`, returning its result
pub(crate) fn call_optional_method(target: &JsValue, name: &str) -> Option<JsValue> {
    let method = get_property(target, name)?.dyn_into::<Function>().ok()?;
    method.call0(target).ok()
}

/// Read a numeric property
pub(crate) fn number_property(target: &JsValue, name: &str) -> Option<f64> {
    get_property(target, name).and_then(|v| v.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_permission() {
        assert_eq!(parse_permission("granted"), NotificationPermission::Granted);
        assert_eq!(parse_permission("denied"), NotificationPermission::Denied);
        assert_eq!(parse_permission("default"), NotificationPermission::Default);
        assert_eq!(parse_permission("other"), NotificationPermission::Default);
    }
}

//! Reading picked files.

use js_sys::{Function, Promise};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::web::js_failure;
use super::{PlatformError, PlatformResult};

/// Read a file as a `data:` URL. No timeout.
pub async fn read_data_url(file: &web_sys::File) -> PlatformResult<String> {
    let reader = web_sys::FileReader::new().map_err(js_failure)?;

    let done = Promise::new(&mut |resolve: Function, reject: Function| {
        let reader_ref = reader.clone();
        let on_load_end = Closure::once_into_js(move || {
            let _ = match reader_ref.result() {
                Ok(value) => resolve.call1(&JsValue::NULL, &value),
                Err(e) => reject.call1(&JsValue::NULL, &e),
            };
        });
        reader.set_onloadend(Some(on_load_end.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(js_failure)?;
    let value = JsFuture::from(done).await.map_err(js_failure)?;

    value
        .as_string()
        .ok_or_else(|| PlatformError::Failed("file could not be read".to_string()))
}

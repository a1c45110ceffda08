//! One-shot viewport-intersection detection.
//!
//! Thin wrapper over the browser's `IntersectionObserver`: watch one
//! element, fire a callback the first time it crosses the visibility
//! threshold, then unobserve for good.

#[cfg(target_arch = "wasm32")]
pub fn observe_once(target: &web_sys::Element, threshold: f64, on_visible: impl FnOnce() + 'static) {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    let mut on_visible = Some(on_visible);
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    observer.disconnect();
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    if let Ok(observer) =
        web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        observer.observe(target);
        // The observer holds the page-lifetime callback.
        callback.forget();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn observe_once(
    _target: &web_sys::Element,
    _threshold: f64,
    _on_visible: impl FnOnce() + 'static,
) {
}

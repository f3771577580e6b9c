use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{Result, ViewError};
use crate::state::SectionId;

/// An `IntersectionObserver` watching one section. Disconnects on drop, so
/// no callback can fire after the owning component is gone.
pub struct SectionObserver {
    section: SectionId,
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SectionObserver {
    /// Starts observing `element`, calling `on_ratio` with the visible share
    /// of it whenever the browser crosses `threshold`.
    pub fn attach(
        section: SectionId,
        element: Option<Element>,
        threshold: f64,
        on_ratio: impl Fn(f64) + 'static,
    ) -> Result<Self> {
        let element = element.ok_or(ViewError::ObserverAttachFailure(section))?;

        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                on_ratio(ratio);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|_| ViewError::ObserverAttachFailure(section))?;
        observer.observe(&element);
        debug!("Observing section {}", section);

        Ok(Self {
            section,
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        debug!("Stopped observing section {}", self.section);
    }
}

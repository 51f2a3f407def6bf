use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

pub const REVEAL_SELECTOR: &str = ".feature-card, .timeline-item, .split-item";

const VISIBILITY_THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Fade-in-on-scroll for content cards. Elements start transparent and
/// shifted down; the first time one becomes sufficiently visible its final
/// styles are applied. Elements stay observed, so a re-entry re-applies the
/// same styles and never reverses them.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe(document: &Document) -> Result<RevealObserver, JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                    show(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
    if nodes.length() == 0 {
        warn!("no reveal targets matched '{}'", REVEAL_SELECTOR);
    }
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        hide(&element);
        observer.observe(&element);
    }

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

fn hide(element: &HtmlElement) {
    let style = element.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", "translateY(20px)");
    let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
}

fn show(element: &HtmlElement) {
    let style = element.style();
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", "translateY(0)");
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn hidden_then_shown_styles_round_trip() {
        let document = web_sys::window().unwrap().document().unwrap();
        let element: HtmlElement = document
            .create_element("div")
            .unwrap()
            .dyn_into()
            .unwrap();

        hide(&element);
        assert_eq!(element.style().get_property_value("opacity").unwrap(), "0");

        show(&element);
        assert_eq!(element.style().get_property_value("opacity").unwrap(), "1");
        assert_eq!(
            element.style().get_property_value("transform").unwrap(),
            "translateY(0)"
        );

        // Showing twice is idempotent; the hidden state never comes back.
        show(&element);
        assert_eq!(element.style().get_property_value("opacity").unwrap(), "1");
    }
}

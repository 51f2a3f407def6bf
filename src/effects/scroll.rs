use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, Window};
use yew::Callback;

const NAVBAR_THRESHOLD: f64 = 100.0;
const ACCENT_BORDER: &str = "rgba(20, 241, 149, 0.2)";
const NEUTRAL_BORDER: &str = "rgb(51, 65, 85)";
const PARALLAX_FACTOR: f64 = 0.5;

/// Smoothly scrolls the page so the section with the given id is in view.
/// Unknown ids are ignored.
pub fn scroll_to_section(document: &Document, section_id: &str) {
    if let Some(element) = document.get_element_by_id(section_id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Click handler for in-page navigation links.
pub fn scroll_callback(section_id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_event: MouseEvent| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            scroll_to_section(&document, section_id);
        }
    })
}

pub fn navbar_border_color(scroll_top: f64) -> &'static str {
    if scroll_top > NAVBAR_THRESHOLD {
        ACCENT_BORDER
    } else {
        NEUTRAL_BORDER
    }
}

pub fn parallax_offset(scroll_top: f64) -> f64 {
    scroll_top * PARALLAX_FACTOR
}

/// Scroll-driven styling: the navbar border tint and the parallax star layer.
/// Targets are resolved once at attach time so the listener never dereferences
/// an element that was missing at startup.
pub struct ScrollEffects {
    navbar: Option<HtmlElement>,
    stars: Option<HtmlElement>,
}

impl ScrollEffects {
    pub fn locate(document: &Document) -> Self {
        let navbar = query_html(document, ".navbar");
        if navbar.is_none() {
            warn!("navbar not found; border tint effect disabled");
        }
        let stars = query_html(document, ".stars");
        if stars.is_none() {
            warn!("star layer not found; parallax effect disabled");
        }
        Self { navbar, stars }
    }

    pub fn is_empty(&self) -> bool {
        self.navbar.is_none() && self.stars.is_none()
    }

    pub fn apply(&self, scroll_top: f64) {
        if let Some(navbar) = &self.navbar {
            let _ = navbar
                .style()
                .set_property("border-bottom-color", navbar_border_color(scroll_top));
        }
        if let Some(stars) = &self.stars {
            let _ = stars.style().set_property(
                "transform",
                &format!("translateY({}px)", parallax_offset(scroll_top)),
            );
        }
    }
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

/// Removes the scroll listener when dropped.
pub struct ScrollGuard {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

pub fn attach_scroll_effects(window: &Window, document: &Document) -> Option<ScrollGuard> {
    let effects = ScrollEffects::locate(document);
    if effects.is_empty() {
        return None;
    }

    // Apply once so the page is styled correctly before the first scroll.
    effects.apply(window.scroll_y().unwrap_or(0.0));

    let listener_window = window.clone();
    let callback = Closure::wrap(Box::new(move || {
        let scroll_top = listener_window.scroll_y().unwrap_or(0.0);
        effects.apply(scroll_top);
    }) as Box<dyn FnMut()>);

    match window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
        Ok(()) => Some(ScrollGuard {
            window: window.clone(),
            callback,
        }),
        Err(err) => {
            warn!("could not attach scroll listener: {:?}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_tint_follows_position_not_history() {
        assert_eq!(navbar_border_color(150.0), ACCENT_BORDER);
        assert_eq!(navbar_border_color(50.0), NEUTRAL_BORDER);
        // Exactly at the threshold the neutral tint still applies.
        assert_eq!(navbar_border_color(100.0), NEUTRAL_BORDER);
    }

    #[test]
    fn parallax_moves_at_half_scroll_speed() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(340.0), 170.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn unknown_section_id_is_a_no_op() {
        let document = web_sys::window().unwrap().document().unwrap();
        scroll_to_section(&document, "definitely-not-a-section");
    }
}

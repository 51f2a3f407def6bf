use std::collections::BTreeMap;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::config;
use crate::effects::interact;

pub const SUCCESS_LABEL: &str = "✓ Success! Check your email";
const SUCCESS_BACKGROUND: &str = "linear-gradient(135deg, #14f195 0%, #00d966 100%)";
const RESET_DELAY_MS: u32 = 3000;

/// Snapshot of the form at submit time, keyed by each input's `name`
/// attribute.
#[derive(Serialize, Debug, PartialEq)]
#[serde(transparent)]
pub struct Submission {
    fields: BTreeMap<String, String>,
}

/// Builds the submission snapshot. A duplicate field name keeps the first
/// captured value and is reported back to the caller.
pub fn capture_fields<I>(inputs: I) -> (Submission, Vec<String>)
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut fields = BTreeMap::new();
    let mut duplicates = Vec::new();
    for (name, value) in inputs {
        if fields.contains_key(&name) {
            duplicates.push(name);
            continue;
        }
        fields.insert(name, value);
    }
    (Submission { fields }, duplicates)
}

fn collect_inputs(form: &HtmlFormElement) -> Vec<(String, String)> {
    let mut captured = Vec::new();
    let Ok(nodes) = form.query_selector_all("input") else {
        return captured;
    };
    for index in 0..nodes.length() {
        let Some(input) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };
        let name = input.name();
        let key = if name.is_empty() {
            // Placeholder text is a fragile key; inputs should carry names.
            warn!("waitlist input without a name attribute; using its placeholder as the key");
            input.placeholder()
        } else {
            name
        };
        captured.push((key, input.value()));
    }
    captured
}

#[function_component(WaitlistForm)]
pub fn waitlist_form() -> Html {
    let form_ref = use_node_ref();
    let pending_reset = use_mut_ref(|| None::<Timeout>);
    let original_label = use_mut_ref(|| None::<String>);

    let onsubmit = {
        let form_ref = form_ref.clone();
        let pending_reset = pending_reset.clone();
        let original_label = original_label.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                warn!("waitlist form missing; ignoring submit");
                return;
            };

            let (submission, duplicates) = capture_fields(collect_inputs(&form));
            for name in &duplicates {
                warn!(
                    "duplicate waitlist field name '{}'; keeping the first value",
                    name
                );
            }
            match serde_json::to_string(&submission) {
                Ok(payload) => gloo_console::log!("Waitlist submission:", payload),
                Err(err) => warn!("could not serialize waitlist submission: {}", err),
            }
            // TODO: POST the submission to {backend}/api/waitlist once the
            // endpoint exists, and drive the button state off the response.
            info!(
                "waitlist backend not wired; submission would go to {}/api/waitlist",
                config::get_backend_url()
            );

            let Some(button) = form
                .query_selector("button")
                .ok()
                .flatten()
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            else {
                warn!("waitlist submit button missing; skipping success feedback");
                return;
            };

            // A resubmission inside the reset window must not capture the
            // success label as the original.
            if original_label.borrow().is_none() {
                *original_label.borrow_mut() = Some(button.text_content().unwrap_or_default());
            }

            button.set_text_content(Some(SUCCESS_LABEL));
            let _ = button.style().set_property("background", SUCCESS_BACKGROUND);

            pending_reset.borrow_mut().take();
            let reset = {
                let form = form.clone();
                let button = button.clone();
                let pending_reset = pending_reset.clone();
                let original_label = original_label.clone();
                Timeout::new(RESET_DELAY_MS, move || {
                    form.reset();
                    if let Some(label) = original_label.borrow_mut().take() {
                        button.set_text_content(Some(&label));
                    }
                    let _ = button.style().remove_property("background");
                    pending_reset.borrow_mut().take();
                })
            };
            *pending_reset.borrow_mut() = Some(reset);
        })
    };

    let (hover_enter, hover_leave) = interact::hover_spacing_callbacks();

    html! {
        <form id="waitlistForm" class="waitlist-form" ref={form_ref} onsubmit={onsubmit}>
            <input type="text" name="name" placeholder="Name" required={true} />
            <input type="email" name="email" placeholder="Email" required={true} />
            <button
                type="submit"
                class="btn btn-primary"
                onmouseenter={hover_enter}
                onmouseleave={hover_leave}
            >
                { "Join the Waitlist" }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_owned(), value.to_owned())
    }

    #[test]
    fn captures_fields_keyed_by_name() {
        let (submission, duplicates) =
            capture_fields([pair("name", "Ann"), pair("email", "a@x.com")]);
        assert!(duplicates.is_empty());
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            serde_json::json!({ "name": "Ann", "email": "a@x.com" })
        );
    }

    #[test]
    fn duplicate_names_keep_the_first_value_and_are_reported() {
        let (submission, duplicates) = capture_fields([
            pair("email", "first@x.com"),
            pair("email", "second@x.com"),
        ]);
        assert_eq!(duplicates, vec!["email".to_owned()]);
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            serde_json::json!({ "email": "first@x.com" })
        );
    }

    #[test]
    fn empty_form_serializes_to_an_empty_object() {
        let (submission, duplicates) = capture_fields(Vec::new());
        assert!(duplicates.is_empty());
        assert_eq!(
            serde_json::to_string(&submission).unwrap(),
            "{}"
        );
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};
use yew::Callback;

pub const DEFAULT_TYPE_SPEED_MS: u32 = 100;

const COUNTER_TICK_MS: u32 = 16;
const GLOW_DISTANCE_PX: f64 = 50.0;
const HOVER_SPACING: &str = "2px";
const REST_SPACING: &str = "1px";

// ---------------------------------------------------------------------------
// Animated counter
// ---------------------------------------------------------------------------

struct Counter {
    current: f64,
    increment: f64,
    target: f64,
}

enum CounterStep {
    Running(i64),
    Done(i64),
}

impl Counter {
    fn new(target: f64, duration_ms: u32) -> Self {
        let ticks = f64::from(duration_ms) / f64::from(COUNTER_TICK_MS);
        Self {
            current: 0.0,
            increment: target / ticks,
            target,
        }
    }

    /// Intermediate values are floored; the final value is pinned to the
    /// exact target.
    fn tick(&mut self) -> CounterStep {
        self.current += self.increment;
        if self.current >= self.target {
            CounterStep::Done(self.target as i64)
        } else {
            CounterStep::Running(self.current.floor() as i64)
        }
    }
}

/// Cancels the counter animation when dropped. The interval also cancels
/// itself once the target value is reached.
pub struct CounterHandle {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl Drop for CounterHandle {
    fn drop(&mut self) {
        self.interval.borrow_mut().take();
    }
}

pub fn animate_counter(element: HtmlElement, target: f64, duration_ms: u32) -> CounterHandle {
    let mut counter = Counter::new(target, duration_ms);
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let tick_slot = slot.clone();
    let interval = Interval::new(COUNTER_TICK_MS, move || match counter.tick() {
        CounterStep::Running(value) => element.set_text_content(Some(&value.to_string())),
        CounterStep::Done(value) => {
            element.set_text_content(Some(&value.to_string()));
            tick_slot.borrow_mut().take();
        }
    });
    slot.borrow_mut().replace(interval);

    CounterHandle { interval: slot }
}

// ---------------------------------------------------------------------------
// Typing effect
// ---------------------------------------------------------------------------

/// Aborts the typing chain when dropped; the chain also ends itself once the
/// full text is shown.
pub struct TypeHandle {
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Drop for TypeHandle {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}

/// Clears the element, then reveals `text` one character per tick.
pub fn type_effect(element: HtmlElement, text: &str, speed_ms: u32) -> TypeHandle {
    element.set_text_content(Some(""));
    let pending = Rc::new(RefCell::new(None));
    if !text.is_empty() {
        schedule_next_char(element, Rc::new(text.to_owned()), 0, speed_ms, pending.clone());
    }
    TypeHandle { pending }
}

fn schedule_next_char(
    element: HtmlElement,
    text: Rc<String>,
    shown: usize,
    speed_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
) {
    let slot = pending.clone();
    let timeout = Timeout::new(speed_ms, move || {
        let revealed = shown + 1;
        element.set_text_content(Some(&typed_prefix(&text, revealed)));
        if revealed < text.chars().count() {
            schedule_next_char(element, text, revealed, speed_ms, slot.clone());
        } else {
            slot.borrow_mut().take();
        }
    });
    pending.borrow_mut().replace(timeout);
}

fn typed_prefix(text: &str, revealed: usize) -> String {
    text.chars().take(revealed).collect()
}

// ---------------------------------------------------------------------------
// Hero glow
// ---------------------------------------------------------------------------

/// Offset for a floating card: a fixed distance along the angle from the
/// card center to the pointer.
pub fn glow_translation(
    pointer_x: f64,
    pointer_y: f64,
    center_x: f64,
    center_y: f64,
) -> (f64, f64) {
    let angle = (pointer_y - center_y).atan2(pointer_x - center_x);
    (angle.cos() * GLOW_DISTANCE_PX, angle.sin() * GLOW_DISTANCE_PX)
}

/// Removes the mousemove listener when dropped.
pub struct GlowGuard {
    hero: HtmlElement,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl Drop for GlowGuard {
    fn drop(&mut self) {
        let _ = self.hero.remove_event_listener_with_callback(
            "mousemove",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

pub fn attach_hero_glow(document: &Document) -> Option<GlowGuard> {
    let Some(hero) = document
        .query_selector(".hero")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        warn!("hero section missing; glow effect disabled");
        return None;
    };

    let listener_document = document.clone();
    let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
        let pointer_x = f64::from(event.client_x());
        let pointer_y = f64::from(event.client_y());

        let Ok(cards) = listener_document.query_selector_all(".floating-card") else {
            return;
        };
        for index in 0..cards.length() {
            let Some(card) = cards
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let rect = card.get_bounding_client_rect();
            let (dx, dy) = glow_translation(
                pointer_x,
                pointer_y,
                rect.left() + rect.width() / 2.0,
                rect.top() + rect.height() / 2.0,
            );
            let _ = card
                .style()
                .set_property("transform", &format!("translate({}px, {}px)", dx, dy));
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    match hero.add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref()) {
        Ok(()) => Some(GlowGuard { hero, callback }),
        Err(err) => {
            warn!("could not attach hero glow listener: {:?}", err);
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Button hover
// ---------------------------------------------------------------------------

/// Letter-spacing widens on hover and relaxes on leave.
pub fn hover_spacing_callbacks() -> (Callback<MouseEvent>, Callback<MouseEvent>) {
    let enter = Callback::from(|event: MouseEvent| set_letter_spacing(&event, HOVER_SPACING));
    let leave = Callback::from(|event: MouseEvent| set_letter_spacing(&event, REST_SPACING));
    (enter, leave)
}

fn set_letter_spacing(event: &MouseEvent, value: &str) {
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let _ = target.style().set_property("letter-spacing", value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter_values(target: f64, duration_ms: u32) -> Vec<i64> {
        let mut counter = Counter::new(target, duration_ms);
        let mut values = Vec::new();
        loop {
            match counter.tick() {
                CounterStep::Running(value) => values.push(value),
                CounterStep::Done(value) => {
                    values.push(value);
                    return values;
                }
            }
        }
    }

    #[test]
    fn counter_floors_intermediates_and_pins_final_value() {
        assert_eq!(
            counter_values(100.0, 160),
            vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]
        );
    }

    #[test]
    fn counter_with_fractional_increment_still_ends_exactly_on_target() {
        let values = counter_values(7.0, 2000);
        assert_eq!(*values.last().unwrap(), 7);
        for window in values.windows(2) {
            assert!(window[0] <= window[1]);
        }
    }

    #[test]
    fn counter_overshooting_increment_finishes_in_one_tick() {
        assert_eq!(counter_values(5.0, 16), vec![5]);
    }

    #[test]
    fn typed_prefix_respects_char_boundaries() {
        assert_eq!(typed_prefix("héllo", 2), "hé");
        assert_eq!(typed_prefix("héllo", 10), "héllo");
        assert_eq!(typed_prefix("", 3), "");
    }

    #[test]
    fn glow_pushes_along_the_pointer_angle() {
        // Pointer directly to the right of the card center.
        let (dx, dy) = glow_translation(200.0, 100.0, 100.0, 100.0);
        assert!((dx - GLOW_DISTANCE_PX).abs() < 1e-9);
        assert!(dy.abs() < 1e-9);

        // Pointer directly above.
        let (dx, dy) = glow_translation(100.0, 0.0, 100.0, 100.0);
        assert!(dx.abs() < 1e-9);
        assert!((dy + GLOW_DISTANCE_PX).abs() < 1e-9);

        // Offset magnitude is always the fixed distance.
        let (dx, dy) = glow_translation(37.0, -12.0, 250.0, 90.0);
        assert!((dx.hypot(dy) - GLOW_DISTANCE_PX).abs() < 1e-9);
    }
}

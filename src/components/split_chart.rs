use std::f64::consts::TAU;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

/// One slice of the revenue split: angles are derived from the fraction,
/// never hard-coded.
pub struct Slice {
    pub label: &'static str,
    pub fraction: f64,
    pub color: &'static str,
}

pub const REVENUE_SPLIT: [Slice; 2] = [
    Slice {
        label: "90%\nCommunity",
        fraction: 0.9,
        color: "#7851A9",
    },
    Slice {
        label: "10%\nDevs",
        fraction: 0.1,
        color: "#00FF00",
    },
];

const MAX_CANVAS_HEIGHT: f64 = 400.0;
const RADIUS_MARGIN: f64 = 20.0;
const LABEL_RADIUS_FACTOR: f64 = 0.65;
const LABEL_LINE_HEIGHT: f64 = 24.0;
const LABEL_FONT: &str = "bold 20px 'Segoe UI', sans-serif";
const LABEL_COLOR: &str = "#FFFFFF";
const BORDER_COLOR: &str = "#00BFFF";
const BORDER_WIDTH: f64 = 3.0;

pub struct Wedge {
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
    pub label: &'static str,
    pub label_x: f64,
    pub label_y: f64,
}

/// Geometry is computed separately from drawing so it can be recomputed (and
/// tested) without a canvas.
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub wedges: Vec<Wedge>,
}

impl ChartLayout {
    pub fn compute(container_width: f64) -> Self {
        let width = container_width.max(0.0);
        let height = width.min(MAX_CANVAS_HEIGHT);
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        let radius = width.min(height) / 2.0 - RADIUS_MARGIN;
        let label_radius = radius * LABEL_RADIUS_FACTOR;

        let mut wedges = Vec::with_capacity(REVENUE_SPLIT.len());
        let mut start_angle = 0.0;
        for slice in &REVENUE_SPLIT {
            let end_angle = start_angle + slice.fraction * TAU;
            let mid_angle = (start_angle + end_angle) / 2.0;
            wedges.push(Wedge {
                start_angle,
                end_angle,
                color: slice.color,
                label: slice.label,
                label_x: center_x + mid_angle.cos() * label_radius,
                label_y: center_y + mid_angle.sin() * label_radius,
            });
            start_angle = end_angle;
        }

        Self {
            width,
            height,
            center_x,
            center_y,
            radius,
            wedges,
        }
    }
}

fn draw(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let container_width = canvas
        .parent_element()
        .map(|parent| parent.client_width())
        .unwrap_or(0);
    let layout = ChartLayout::compute(f64::from(container_width));

    canvas.set_width(layout.width as u32);
    canvas.set_height(layout.height as u32);
    if layout.radius <= 0.0 {
        return Ok(());
    }

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    for wedge in &layout.wedges {
        draw_wedge(&context, &layout, wedge)?;
    }

    context.set_font(LABEL_FONT);
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_fill_style_str(LABEL_COLOR);
    for wedge in &layout.wedges {
        draw_label(&context, wedge)?;
    }

    Ok(())
}

fn draw_wedge(
    context: &CanvasRenderingContext2d,
    layout: &ChartLayout,
    wedge: &Wedge,
) -> Result<(), JsValue> {
    context.set_fill_style_str(wedge.color);
    context.begin_path();
    context.arc(
        layout.center_x,
        layout.center_y,
        layout.radius,
        wedge.start_angle,
        wedge.end_angle,
    )?;
    context.line_to(layout.center_x, layout.center_y);
    context.fill();

    // Border as a separate stroked pass over the same wedge.
    context.set_stroke_style_str(BORDER_COLOR);
    context.set_line_width(BORDER_WIDTH);
    context.begin_path();
    context.arc(
        layout.center_x,
        layout.center_y,
        layout.radius,
        wedge.start_angle,
        wedge.end_angle,
    )?;
    context.line_to(layout.center_x, layout.center_y);
    context.stroke();

    Ok(())
}

fn draw_label(context: &CanvasRenderingContext2d, wedge: &Wedge) -> Result<(), JsValue> {
    let lines: Vec<&str> = wedge.label.split('\n').collect();
    let line_count = lines.len();
    for (index, line) in lines.iter().enumerate() {
        let offset = (index as f64 - (line_count as f64 - 1.0) / 2.0) * LABEL_LINE_HEIGHT;
        context.fill_text(line, wedge.label_x, wedge.label_y + offset)?;
    }
    Ok(())
}

#[function_component(SplitChart)]
pub fn split_chart() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut resize_guard = None;
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(err) = draw(&canvas) {
                        warn!("split chart draw failed: {:?}", err);
                    }
                    if let Some(window) = web_sys::window() {
                        let listener_canvas = canvas.clone();
                        let callback = Closure::wrap(Box::new(move || {
                            if let Err(err) = draw(&listener_canvas) {
                                warn!("split chart redraw failed: {:?}", err);
                            }
                        })
                            as Box<dyn FnMut()>);
                        match window.add_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => resize_guard = Some((window, callback)),
                            Err(err) => warn!("could not attach resize listener: {:?}", err),
                        }
                    }
                } else {
                    warn!("split chart canvas missing; renderer not attached");
                }
                move || {
                    if let Some((window, callback)) = resize_guard {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <canvas id="splitChart" ref={canvas_ref} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_fractions_cover_the_whole_pie() {
        let total: f64 = REVENUE_SPLIT.iter().map(|slice| slice.fraction).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn wedge_spans_sum_to_a_full_turn_at_any_size() {
        for width in [120.0, 400.0, 1000.0] {
            let layout = ChartLayout::compute(width);
            let total: f64 = layout
                .wedges
                .iter()
                .map(|wedge| wedge.end_angle - wedge.start_angle)
                .sum();
            assert!((total - TAU).abs() < 1e-9, "width {}", width);
        }
    }

    #[test]
    fn ninety_ten_split_breaks_at_324_degrees() {
        let layout = ChartLayout::compute(400.0);
        assert_eq!(layout.wedges.len(), 2);
        assert!((layout.wedges[0].start_angle - 0.0).abs() < 1e-12);
        assert!((layout.wedges[0].end_angle - 0.9 * TAU).abs() < 1e-12);
        assert!((layout.wedges[1].start_angle - 0.9 * TAU).abs() < 1e-12);
        assert!((layout.wedges[1].end_angle - TAU).abs() < 1e-12);
    }

    #[test]
    fn labels_sit_at_the_angular_midpoint_at_65_percent_radius() {
        let layout = ChartLayout::compute(400.0);
        let label_radius = layout.radius * LABEL_RADIUS_FACTOR;
        for wedge in &layout.wedges {
            let mid = (wedge.start_angle + wedge.end_angle) / 2.0;
            let expected_x = layout.center_x + mid.cos() * label_radius;
            let expected_y = layout.center_y + mid.sin() * label_radius;
            assert!((wedge.label_x - expected_x).abs() < 1e-9);
            assert!((wedge.label_y - expected_y).abs() < 1e-9);
        }
    }

    #[test]
    fn height_is_capped_for_wide_containers() {
        let layout = ChartLayout::compute(1000.0);
        assert_eq!(layout.height, 400.0);
        assert_eq!(layout.center_y, 200.0);
        // Radius follows the smaller dimension.
        assert_eq!(layout.radius, 180.0);
    }

    #[test]
    fn tiny_containers_yield_a_non_drawable_radius() {
        let layout = ChartLayout::compute(30.0);
        assert!(layout.radius <= 0.0);
    }
}

use leptos::html::Canvas;
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::application::{FrameCoalescer, drag_delta, wheel_delta};
use crate::domain::chart::{Chart, ChartLayout, ChartTheme};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::StockRecord;
use crate::infrastructure::rendering::{CanvasRenderer, build_frame};

/// Schedule a callback for the next animation frame.
fn request_frame(callback: impl FnOnce() + 'static) {
    let closure = Closure::once_into_js(move || callback());
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(closure.unchecked_ref());
    }
}

/// Interactive candlestick chart over a pre-fetched record sequence.
///
/// Gesture handlers never draw directly: they push normalized deltas
/// into a coalescer and schedule at most one animation-frame redraw, so
/// dense wheel streams cannot starve the event loop. Each frame applies
/// the merged delta through the viewport, rebuilds the geometry and
/// replaces the surface.
#[component]
pub fn StockChart(
    records: Vec<StockRecord>,
    #[prop(default = "stock-chart-canvas".to_string())] canvas_id: String,
    #[prop(optional)] layout: Option<ChartLayout>,
    #[prop(optional)] theme: Option<ChartTheme>,
) -> impl IntoView {
    let layout = layout.unwrap_or_default();
    let theme = theme.unwrap_or_default();

    let mut chart = Chart::new(layout, theme);
    chart.set_records(records);
    let chart = Rc::new(RefCell::new(chart));

    let renderer = Rc::new(CanvasRenderer::new(
        canvas_id.clone(),
        layout.width as u32,
        layout.height as u32,
    ));
    let coalescer = Rc::new(RefCell::new(FrameCoalescer::new()));
    let frame_queued = Rc::new(Cell::new(false));
    let dragging = Rc::new(Cell::new(false));
    let last_pointer = Rc::new(Cell::new((0.0f64, 0.0f64)));

    let canvas_ref = create_node_ref::<Canvas>();

    let schedule_redraw: Rc<dyn Fn()> = {
        let chart = Rc::clone(&chart);
        let renderer = Rc::clone(&renderer);
        let coalescer = Rc::clone(&coalescer);
        let frame_queued = Rc::clone(&frame_queued);
        Rc::new(move || {
            if frame_queued.get() {
                return;
            }
            frame_queued.set(true);
            let chart = Rc::clone(&chart);
            let renderer = Rc::clone(&renderer);
            let coalescer = Rc::clone(&coalescer);
            let frame_queued = Rc::clone(&frame_queued);
            request_frame(move || {
                frame_queued.set(false);
                if let Some(delta) = coalescer.borrow_mut().take() {
                    chart.borrow_mut().apply_gesture(&delta);
                }
                let chart = chart.borrow();
                let frame = build_frame(&*chart);
                if let Err(e) = renderer.draw(&frame, chart.layout(), chart.theme()) {
                    get_logger().error(
                        LogComponent::Presentation("StockChart"),
                        &format!("draw failed: {e:?}"),
                    );
                }
            });
        })
    };

    // First frame once the canvas is in the DOM.
    {
        let schedule_redraw = Rc::clone(&schedule_redraw);
        create_effect(move |_| {
            if canvas_ref.get().is_some() {
                schedule_redraw();
            }
        });
    }

    let on_wheel = {
        let coalescer = Rc::clone(&coalescer);
        let schedule_redraw = Rc::clone(&schedule_redraw);
        move |ev: web_sys::WheelEvent| {
            ev.prevent_default();
            coalescer.borrow_mut().push(wheel_delta(ev.delta_y(), ev.offset_x() as f64));
            schedule_redraw();
        }
    };

    let on_mouse_down = {
        let dragging = Rc::clone(&dragging);
        let last_pointer = Rc::clone(&last_pointer);
        move |ev: web_sys::MouseEvent| {
            dragging.set(true);
            last_pointer.set((ev.client_x() as f64, ev.client_y() as f64));
        }
    };

    let on_mouse_move = {
        let dragging = Rc::clone(&dragging);
        let last_pointer = Rc::clone(&last_pointer);
        let coalescer = Rc::clone(&coalescer);
        let schedule_redraw = Rc::clone(&schedule_redraw);
        move |ev: web_sys::MouseEvent| {
            if !dragging.get() {
                return;
            }
            let (last_x, last_y) = last_pointer.get();
            let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
            last_pointer.set((x, y));
            coalescer.borrow_mut().push(drag_delta(x - last_x, y - last_y));
            schedule_redraw();
        }
    };

    let end_drag = {
        let dragging = Rc::clone(&dragging);
        move |_ev: web_sys::MouseEvent| dragging.set(false)
    };

    view! {
        <canvas
            id=canvas_id
            node_ref=canvas_ref
            width=layout.width as u32
            height=layout.height as u32
            style="cursor: crosshair; touch-action: none;"
            on:wheel=on_wheel
            on:mousedown=on_mouse_down
            on:mousemove=on_mouse_move
            on:mouseup=end_drag.clone()
            on:mouseleave=end_drag
        />
    }
}

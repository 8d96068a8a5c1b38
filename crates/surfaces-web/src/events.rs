use crate::constants::MAX_PIXEL_RATIO;
use crate::dom;
use std::rc::Rc;
use surfaces_core::{normalize_pointer, scroll_progress, InputState};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub host: web::Element,
    pub input: Rc<InputState>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_resize(&w);
    wire_pointermove(&w);
    wire_scroll(&w);
}

fn update_viewport(w: &InputWiring) {
    let (css_w, css_h) = dom::sync_canvas_backing_size(&w.canvas, MAX_PIXEL_RATIO);
    w.input.set_viewport(css_w, css_h);
}

fn wire_resize(w: &InputWiring) {
    update_viewport(w);
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::add_listener(window.unchecked_ref(), "resize", move |_: web::Event| {
        update_viewport(&w);
    });
}

fn wire_pointermove(w: &InputWiring) {
    let wiring = w.clone();
    dom::add_listener(
        w.host.unchecked_ref(),
        "pointermove",
        move |ev: web::PointerEvent| {
            let rect = dom::element_rect(&wiring.host);
            let pointer = normalize_pointer(ev.client_x() as f32, ev.client_y() as f32, &rect);
            wiring.input.set_pointer(pointer);
        },
    );
}

fn update_scroll(w: &InputWiring) {
    if let Some(window) = web::window() {
        let rect = dom::element_rect(&w.host);
        w.input
            .set_scroll(scroll_progress(&rect, dom::viewport_height(&window)));
    }
}

fn wire_scroll(w: &InputWiring) {
    update_scroll(w);
    let Some(document) = dom::window_document() else {
        return;
    };
    let w = w.clone();
    dom::add_passive_listener(document.unchecked_ref(), "scroll", move || update_scroll(&w));
}

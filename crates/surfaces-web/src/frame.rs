use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use surfaces_core::{FrameDriver, FrameTask, InputSource, InputState, LoopHandle, SceneLayout, SceneState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub input: Rc<InputState>,
    pub layout: SceneLayout,
    pub scene: SceneState,
    pub gpu: render::GpuState,
    viewport: [f32; 2],
}

impl FrameContext {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        input: Rc<InputState>,
        layout: SceneLayout,
        mut scene: SceneState,
        gpu: render::GpuState,
    ) -> Self {
        let [w, h] = input.snapshot().viewport;
        scene.camera.set_viewport(w, h);
        Self {
            canvas,
            input,
            layout,
            scene,
            gpu,
            viewport: [w, h],
        }
    }
}

impl FrameTask for FrameContext {
    fn frame(&mut self, time_sec: f32) {
        let input = self.input.snapshot();
        if input.viewport != self.viewport {
            self.viewport = input.viewport;
            self.scene
                .camera
                .set_viewport(input.viewport[0], input.viewport[1]);
        }

        self.scene.step(&input, time_sec);

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(&self.scene, &self.layout) {
            log::error!("[frame] render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, layout: &SceneLayout) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, layout).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `task` from requestAnimationFrame until `handle` is stopped.
pub fn start_loop<T: FrameTask + 'static>(task: T, handle: LoopHandle) {
    let origin = Instant::now();
    let mut driver = FrameDriver::new(task, handle);
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_next = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if driver.tick(origin.elapsed().as_secs_f64()) {
            request_frame(&tick_next);
        } else {
            log::info!(
                "[frame] loop stopped after {} frames",
                driver.handle().frames()
            );
            // Release the closure (and the task it owns) once this call has returned.
            let slot = tick_next.clone();
            spawn_local(async move {
                slot.borrow_mut().take();
            });
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

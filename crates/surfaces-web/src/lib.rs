#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use surfaces_core::{
    ConfigOverrides, CurveTable, InputState, LoopHandle, PresetTable, SceneLayout, SceneState,
    SurfaceConfig,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("surfaces-web loaded");
    Ok(())
}

/// Returned to JS by [`init`]; controls the running effect.
#[wasm_bindgen]
pub struct SurfaceHandle {
    handle: LoopHandle,
    variant: String,
    fell_back: bool,
    config: SurfaceConfig,
}

#[wasm_bindgen]
impl SurfaceHandle {
    /// Stop the frame loop. No frame runs after this returns.
    pub fn stop(&self) {
        if self.handle.is_running() {
            log::info!("[surface] stopping '{}'", self.variant);
        }
        self.handle.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }

    /// Variant actually used, after alias and fallback resolution.
    pub fn variant(&self) -> String {
        self.variant.clone()
    }

    /// Whether the requested variant was unknown and the default was used.
    #[wasm_bindgen(js_name = fellBack)]
    pub fn fell_back(&self) -> bool {
        self.fell_back
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.config).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Attach a particle surface to `canvas`.
///
/// `overrides` is a plain object using the camelCase option names; `undefined`
/// or `null` means no overrides.
#[wasm_bindgen]
pub fn init(
    canvas: web::HtmlCanvasElement,
    variant: Option<String>,
    overrides: JsValue,
) -> Result<SurfaceHandle, JsValue> {
    init_surface(canvas, variant, overrides).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn parse_overrides(value: &JsValue) -> anyhow::Result<ConfigOverrides> {
    if value.is_undefined() || value.is_null() {
        return Ok(ConfigOverrides::default());
    }
    let json = js_sys::JSON::stringify(value)
        .map_err(|e| anyhow::anyhow!(format!("overrides are not serialisable: {:?}", e)))?;
    let json: String = json.into();
    Ok(ConfigOverrides::from_json(&json)?)
}

fn init_surface(
    canvas: web::HtmlCanvasElement,
    variant: Option<String>,
    overrides: JsValue,
) -> anyhow::Result<SurfaceHandle> {
    let overrides = parse_overrides(&overrides)?;
    let table = PresetTable::builtin()?;
    let requested = variant.unwrap_or_else(|| table.fallback().to_string());
    let resolved = table.resolve(&requested, &overrides)?;
    let config = resolved.config;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let curves = CurveTable::builtin()?;
    let layout = SceneLayout::build(&config, &curves, &mut rng);
    log::info!(
        "[surface] variant '{}' with {} points, {} strokes, {} pulses",
        resolved.variant,
        layout.point_count(),
        layout.lines.len(),
        layout.pulses.len()
    );

    let input = Rc::new(InputState::default());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        host: dom::host_element(&canvas),
        input: input.clone(),
    });

    let handle = LoopHandle::new();
    let scene = SceneState::new(&config);
    {
        let handle = handle.clone();
        spawn_local(async move {
            let Some(gpu) = frame::init_gpu(&canvas, &layout).await else {
                return;
            };
            if !handle.is_running() {
                log::info!("[surface] stopped before the GPU was ready");
                return;
            }
            let ctx = frame::FrameContext::new(canvas, input, layout, scene, gpu);
            frame::start_loop(ctx, handle);
        });
    }

    Ok(SurfaceHandle {
        handle,
        variant: resolved.variant,
        fell_back: resolved.fell_back,
        config,
    })
}

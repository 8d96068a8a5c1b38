use crate::constants::{MIN_INSTANCE_CAPACITY, MSAA_SAMPLES, QUAD_VERTICES};
use surfaces_core::constants::PULSE_SEGMENTS;
use surfaces_core::{uv_sphere, SceneLayout, SceneState};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
pub mod pack;
mod pipelines;
mod targets;

use pack::{pack_globals, pack_lines, pack_points, pack_pulses, PulseInstance};
use pipelines::{create_scene_pipelines, ScenePipelines};
use targets::RenderTargets;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    pipelines: ScenePipelines,

    point_instances: wgpu::Buffer,
    point_count: u32,
    line_vertices: wgpu::Buffer,
    line_vertex_count: u32,
    sphere_vertices: wgpu::Buffer,
    sphere_indices: wgpu::Buffer,
    sphere_index_count: u32,
    pulse_instances: wgpu::Buffer,
    pulse_count: u32,

    width: u32,
    height: u32,
}

// Buffers may not be empty; pad with zeroed elements up to the minimum capacity.
fn padded<T: bytemuck::Pod>(mut items: Vec<T>) -> Vec<T> {
    if items.len() < MIN_INSTANCE_CAPACITY {
        items.resize(MIN_INSTANCE_CAPACITY, T::zeroed());
    }
    items
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, layout: &SceneLayout) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits on web avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                    label: Some("surfaces_device"),
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        // Colors are authored as sRGB hex and written through unchanged.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?}",
            config.width,
            config.height,
            format,
            alpha_mode
        );

        let targets = RenderTargets::new(&device, config.width, config.height, format, MSAA_SAMPLES);
        let pipelines = create_scene_pipelines(&device, format, MSAA_SAMPLES);

        let points = pack_points(layout);
        let point_count = points.len() as u32;
        let point_instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("point_instances"),
            contents: bytemuck::cast_slice(&padded(points)),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let lines = pack_lines(layout);
        let line_vertex_count = lines.len() as u32;
        let line_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("line_vertices"),
            contents: bytemuck::cast_slice(&padded(lines)),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let sphere = uv_sphere(layout.pulse_radius, PULSE_SEGMENTS, PULSE_SEGMENTS);
        let sphere_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_vertices"),
            contents: bytemuck::cast_slice(&sphere.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        // Index buffers must be 4-byte aligned in size
        let mut indices = sphere.indices.clone();
        let sphere_index_count = indices.len() as u32;
        if indices.len() % 2 == 1 {
            indices.push(0);
        }
        let sphere_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let pulse_count = layout.pulses.len() as u32;
        let pulse_capacity = layout.pulses.len().max(MIN_INSTANCE_CAPACITY);
        let pulse_instances = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("pulse_instances"),
            size: (pulse_capacity * std::mem::size_of::<PulseInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            pipelines,
            point_instances,
            point_count,
            line_vertices,
            line_vertex_count,
            sphere_vertices,
            sphere_indices,
            sphere_index_count,
            pulse_instances,
            pulse_count,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width.max(1);
        self.config.height = self.height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.targets
            .recreate(&self.device, self.config.width, self.config.height);
    }

    pub fn render(&mut self, scene: &SceneState, layout: &SceneLayout) -> Result<(), wgpu::SurfaceError> {
        let globals = pack_globals(&scene.camera, &scene.fabric, &scene.signals);
        self.queue.write_buffer(
            &self.pipelines.uniform_buffer,
            0,
            bytemuck::bytes_of(&globals),
        );
        if self.pulse_count > 0 {
            let pulses = pack_pulses(layout, &scene.pulses);
            self.queue
                .write_buffer(&self.pulse_instances, 0, bytemuck::cast_slice(&pulses));
        }

        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.pipelines.bind_group, &[]);

            if self.point_count > 0 {
                rpass.set_pipeline(&self.pipelines.points);
                rpass.set_vertex_buffer(0, self.point_instances.slice(..));
                rpass.draw(0..QUAD_VERTICES, 0..self.point_count);
            }
            if self.line_vertex_count > 0 {
                rpass.set_pipeline(&self.pipelines.lines);
                rpass.set_vertex_buffer(0, self.line_vertices.slice(..));
                rpass.draw(0..self.line_vertex_count, 0..1);
            }
            if self.pulse_count > 0 {
                rpass.set_pipeline(&self.pipelines.pulses);
                rpass.set_vertex_buffer(0, self.sphere_vertices.slice(..));
                rpass.set_vertex_buffer(1, self.pulse_instances.slice(..));
                rpass.set_index_buffer(self.sphere_indices.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..self.sphere_index_count, 0, 0..self.pulse_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

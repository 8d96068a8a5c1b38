use super::helpers::{self, PipelineDesc, ADDITIVE_BLENDING};
use super::pack::{Globals, LineVertex, PointInstance, PulseInstance};
use wgpu;

const POINT_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x4];
const LINE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];
const SPHERE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const PULSE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![1 => Float32x4, 2 => Float32x4];

pub(crate) struct ScenePipelines {
    pub(crate) points: wgpu::RenderPipeline,
    pub(crate) lines: wgpu::RenderPipeline,
    pub(crate) pulses: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_scene_pipelines(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
) -> ScenePipelines {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::SCENE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let point_buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PointInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &POINT_ATTRS,
    }];
    let points = helpers::make_scene_pipeline(
        device,
        &pl,
        &shader,
        color_format,
        sample_count,
        PipelineDesc {
            label: "points_pipeline",
            vs_entry: "vs_points",
            fs_entry: "fs_points",
            buffers: &point_buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            blend: ADDITIVE_BLENDING,
        },
    );

    let line_buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &LINE_ATTRS,
    }];
    let lines = helpers::make_scene_pipeline(
        device,
        &pl,
        &shader,
        color_format,
        sample_count,
        PipelineDesc {
            label: "lines_pipeline",
            vs_entry: "vs_lines",
            fs_entry: "fs_lines",
            buffers: &line_buffers,
            topology: wgpu::PrimitiveTopology::LineList,
            cull_mode: None,
            blend: wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
        },
    );

    let pulse_buffers = [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &SPHERE_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PulseInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &PULSE_ATTRS,
        },
    ];
    let pulses = helpers::make_scene_pipeline(
        device,
        &pl,
        &shader,
        color_format,
        sample_count,
        PipelineDesc {
            label: "pulses_pipeline",
            vs_entry: "vs_pulses",
            fs_entry: "fs_pulses",
            buffers: &pulse_buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: Some(wgpu::Face::Back),
            blend: wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
        },
    );

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_globals"),
        size: std::mem::size_of::<Globals>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    ScenePipelines {
        points,
        lines,
        pulses,
        uniform_buffer,
        bind_group,
    }
}

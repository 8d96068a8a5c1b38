// GPU-facing layouts for the scene, filled from `surfaces_core` types.
// Kept free of wgpu/web-sys so host tests can include it directly.

use surfaces_core::{Camera, GroupTransform, PulseVisual, SceneLayout};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub center: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PulseInstance {
    pub center_scale: [f32; 4],
    pub color: [f32; 4],
}

/// Matches `Globals` in scene.wgsl.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
    pub fabric: [[f32; 4]; 4],
    pub signals: [[f32; 4]; 4],
    pub cam_right: [f32; 4],
    pub cam_up: [f32; 4],
    pub point_scale: [f32; 4], // x = tan(fovy / 2)
}

/// One billboard instance per fabric point, all layers concatenated.
pub fn pack_points(layout: &SceneLayout) -> Vec<PointInstance> {
    let mut out = Vec::with_capacity(layout.point_count());
    for layer in &layout.fabric {
        let color = layer.color.with_alpha(layer.opacity);
        out.extend(layer.positions.iter().map(|p| PointInstance {
            center: p.to_array(),
            size: layer.size,
            color,
        }));
    }
    out
}

/// Strokes expanded into a line list: two vertices per segment.
pub fn pack_lines(layout: &SceneLayout) -> Vec<LineVertex> {
    let total: usize = layout.lines.iter().map(|s| s.segment_count() * 2).sum();
    let mut out = Vec::with_capacity(total);
    for stroke in &layout.lines {
        let color = stroke.color.with_alpha(stroke.opacity);
        for pair in stroke.points.windows(2) {
            out.push(LineVertex {
                position: pair[0].to_array(),
                color,
            });
            out.push(LineVertex {
                position: pair[1].to_array(),
                color,
            });
        }
    }
    out
}

pub fn pack_pulses(layout: &SceneLayout, visuals: &[PulseVisual]) -> Vec<PulseInstance> {
    layout
        .pulses
        .iter()
        .zip(visuals)
        .map(|(seed, v)| PulseInstance {
            center_scale: seed.position.extend(v.scale).to_array(),
            color: layout.pulse_color.with_alpha(v.opacity),
        })
        .collect()
}

/// Point sizes are screen-space like attenuated GL points: a point of `size`
/// at view depth `d` covers `size * (height / 2) / d` pixels. The billboard
/// quad is scaled by `tan(fovy / 2)` in the shader to match.
pub fn pack_globals(camera: &Camera, fabric: &GroupTransform, signals: &GroupTransform) -> Globals {
    let (right, up) = camera.billboard_axes();
    Globals {
        view_proj: camera.view_projection().to_cols_array_2d(),
        fabric: fabric.matrix().to_cols_array_2d(),
        signals: signals.matrix().to_cols_array_2d(),
        cam_right: right.extend(0.0).to_array(),
        cam_up: up.extend(0.0).to_array(),
        point_scale: [(camera.fovy_radians * 0.5).tan(), 0.0, 0.0, 0.0],
    }
}

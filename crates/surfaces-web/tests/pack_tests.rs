// Host-side tests for GPU instance packing.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod pack {
    include!("../src/render/pack.rs");
}

use pack::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use surfaces_core::{CurveTable, InputSnapshot, SceneLayout, SceneState, SurfaceConfig};

fn layout_for(config: &SurfaceConfig) -> SceneLayout {
    let curves = CurveTable::builtin().unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    SceneLayout::build(config, &curves, &mut rng)
}

#[test]
fn one_instance_per_fabric_point() {
    let config = SurfaceConfig::default();
    let layout = layout_for(&config);
    let points = pack_points(&layout);
    assert_eq!(points.len(), layout.point_count());

    let first = &layout.fabric[0];
    assert_eq!(points[0].center, first.positions[0].to_array());
    assert_eq!(points[0].size, config.size);
    assert_eq!(points[0].color[3], first.opacity);

    // Second layer starts right after the first one's points
    let second = &layout.fabric[1];
    let p = &points[first.positions.len()];
    assert_eq!(p.center, second.positions[0].to_array());
    assert_eq!(p.color, second.color.with_alpha(second.opacity));
}

#[test]
fn two_vertices_per_line_segment() {
    let layout = layout_for(&SurfaceConfig::default());
    let vertices = pack_lines(&layout);
    // Two strokes of 60 segments each
    assert_eq!(vertices.len(), 240);

    let stroke = &layout.lines[0];
    assert_eq!(vertices[0].position, stroke.points[0].to_array());
    assert_eq!(vertices[1].position, stroke.points[1].to_array());
    assert_eq!(vertices[2].position, stroke.points[1].to_array());
    assert_eq!(vertices[0].color[3], stroke.opacity);
}

#[test]
fn no_line_vertices_when_lines_disabled() {
    let config = SurfaceConfig {
        lines: false,
        ..SurfaceConfig::default()
    };
    assert!(pack_lines(&layout_for(&config)).is_empty());
}

#[test]
fn pulses_carry_scale_and_opacity() {
    let config = SurfaceConfig::default();
    let layout = layout_for(&config);
    let mut scene = SceneState::new(&config);
    scene.step(&InputSnapshot::default(), 1.25);

    let pulses = pack_pulses(&layout, &scene.pulses);
    assert_eq!(pulses.len(), config.pulse_count());
    for ((packed, seed), visual) in pulses.iter().zip(&layout.pulses).zip(&scene.pulses) {
        assert_eq!(packed.center_scale[3], visual.scale);
        assert_eq!(&packed.center_scale[..3], &seed.position.to_array()[..]);
        assert_eq!(packed.color[3], visual.opacity);
    }
}

#[test]
fn globals_carry_camera_and_groups() {
    let config = SurfaceConfig::default();
    let scene = SceneState::new(&config);
    let g = pack_globals(&scene.camera, &scene.fabric, &scene.signals);

    // Untouched groups pack as identity
    assert_eq!(g.fabric, glam::Mat4::IDENTITY.to_cols_array_2d());
    assert_eq!(g.signals, glam::Mat4::IDENTITY.to_cols_array_2d());
    assert_eq!(g.cam_right[3], 0.0);
    assert!((g.point_scale[0] - 27.5_f32.to_radians().tan()).abs() < 1e-6);
}

#[test]
fn point_quads_project_to_attenuated_point_size() {
    use glam::{Mat4, Vec3, Vec4};

    let (width, height) = (800.0_f32, 600.0_f32);
    let config = SurfaceConfig::default();
    let mut scene = SceneState::new(&config);
    scene.camera.set_viewport(width, height);
    let g = pack_globals(&scene.camera, &scene.fabric, &scene.signals);

    let view_proj = Mat4::from_cols_array_2d(&g.view_proj);
    let right = Vec3::from_slice(&g.cam_right[..3]);
    let center = Vec3::new(0.4, -0.3, 1.0);
    // Same half extent as vs_points
    let extent = config.size * 0.5 * g.point_scale[0];

    let c = view_proj * Vec4::from((center, 1.0));
    let e = view_proj * Vec4::from((center + right * extent, 1.0));
    let half_px = (e.x / e.w - c.x / c.w) * width / 2.0;

    // Attenuated GL point: size * (height / 2) / depth pixels across
    let expected = config.size * (height / 2.0) / c.w;
    assert!(
        ((2.0 * half_px) - expected).abs() < expected * 1e-3,
        "{} vs {}",
        2.0 * half_px,
        expected
    );
}

#[test]
fn gpu_struct_sizes_match_shader() {
    use std::mem::size_of;
    assert_eq!(size_of::<PointInstance>(), 32);
    assert_eq!(size_of::<LineVertex>(), 28);
    assert_eq!(size_of::<PulseInstance>(), 32);
    // Uniform buffers need 16-byte multiples
    assert_eq!(size_of::<Globals>(), 240);
    assert_eq!(size_of::<Globals>() % 16, 0);
}

const SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

#[test]
fn shader_globals_match_packed_struct() {
    let start = SCENE_WGSL.find("struct Globals {").unwrap();
    let body = &SCENE_WGSL[start..];
    let body = &body[..body.find("};").unwrap()];
    let fields: Vec<&str> = body
        .lines()
        .skip(1)
        .filter_map(|l| l.trim().split(':').next())
        .filter(|f| !f.is_empty())
        .collect();
    assert_eq!(
        fields,
        ["view_proj", "fabric", "signals", "cam_right", "cam_up", "point_scale"]
    );
}

#[test]
fn pulse_fragment_is_a_flat_fill() {
    let start = SCENE_WGSL.find("fn fs_pulses").unwrap();
    let body = &SCENE_WGSL[start..];
    let body = &body[..body.find('}').unwrap()];
    assert!(body.contains("in.color.rgb * in.color.a"));
    assert!(!body.contains("light"));
}

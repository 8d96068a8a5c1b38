// Scene layout, curve tessellation and sphere mesh generation.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use surfaces_core::{
    layer_point_count, uv_sphere, ConfigOverrides, CurveTable, PresetTable, QuadraticBezier, Rgb,
    SceneLayout, SurfaceConfig,
};

fn build(config: &SurfaceConfig, seed: u64) -> SceneLayout {
    let curves = CurveTable::builtin().unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    SceneLayout::build(config, &curves, &mut rng)
}

#[test]
fn layer_counts_follow_density_falloff() {
    assert_eq!(layer_point_count(160.0, 0), 160);
    assert_eq!(layer_point_count(160.0, 1), 128);
    assert_eq!(layer_point_count(320.0, 2), 192);
    assert_eq!(layer_point_count(110.0, 1), 88);
}

#[test]
fn layer_counts_never_drop_below_forty() {
    assert_eq!(layer_point_count(30.0, 0), 40);
    assert_eq!(layer_point_count(60.0, 2), 40);
    // beyond five layers the factor goes negative
    assert_eq!(layer_point_count(1000.0, 7), 40);
    assert_eq!(layer_point_count(-20.0, 0), 40);
}

#[test]
fn fractional_density_is_floored_per_layer() {
    assert_eq!(layer_point_count(150.5, 0), 150);
    assert_eq!(layer_point_count(150.5, 1), 120);

    let overrides = ConfigOverrides::from_json(r#"{"density": 150.5, "pulses": 1.5}"#).unwrap();
    let cfg = SurfaceConfig::default().merged(&overrides);
    let layout = build(&cfg, 3);
    assert_eq!(layout.fabric[0].positions.len(), 150);
    assert_eq!(layout.fabric[1].positions.len(), 120);
    // a `< 1.5` loop runs twice
    assert_eq!(layout.pulses.len(), 2);
}

#[test]
fn default_layout_builds_one_layer_per_color() {
    let layout = build(&SurfaceConfig::default(), 1);
    assert_eq!(layout.fabric.len(), 2);
    assert_eq!(layout.fabric[0].positions.len(), 160);
    assert_eq!(layout.fabric[1].positions.len(), 128);
    assert_eq!(layout.point_count(), 288);
    assert_eq!(layout.fabric[0].color, Rgb::new(0x60, 0xa5, 0xfa));
    assert!((layout.fabric[0].opacity - 0.85).abs() < 1e-6);
}

#[test]
fn points_stay_inside_their_layer_volume() {
    let cfg = PresetTable::builtin()
        .unwrap()
        .resolve("hero", &ConfigOverrides::default())
        .unwrap()
        .config;
    let layout = build(&cfg, 9);
    for (idx, layer) in layout.fabric.iter().enumerate() {
        let spread = 6.0 - idx as f32;
        let offset_y = idx as f32 * -0.15;
        for p in &layer.positions {
            assert!(p.x.abs() <= spread / 2.0, "x out of range: {p:?}");
            assert!(p.z.abs() <= spread / 2.0, "z out of range: {p:?}");
            assert!((p.y - offset_y).abs() <= spread / 4.0, "y out of range: {p:?}");
        }
    }
}

#[test]
fn same_seed_gives_identical_layout() {
    let cfg = SurfaceConfig::default();
    let a = build(&cfg, 42);
    let b = build(&cfg, 42);
    let c = build(&cfg, 43);
    assert_eq!(a.fabric[0].positions, b.fabric[0].positions);
    assert_eq!(a.fabric[1].positions, b.fabric[1].positions);
    let pa: Vec<Vec3> = a.pulses.iter().map(|p| p.position).collect();
    let pb: Vec<Vec3> = b.pulses.iter().map(|p| p.position).collect();
    assert_eq!(pa, pb);
    assert_ne!(a.fabric[0].positions, c.fabric[0].positions);
}

#[test]
fn strokes_use_line_color_then_second_palette_entry() {
    let cfg = SurfaceConfig {
        line_color: Rgb::new(1, 2, 3),
        ..Default::default()
    };
    let layout = build(&cfg, 3);
    assert_eq!(layout.lines.len(), 2);
    assert_eq!(layout.lines[0].color, Rgb::new(1, 2, 3));
    assert_eq!(layout.lines[1].color, cfg.colors[1]);
    for stroke in &layout.lines {
        assert_eq!(stroke.points.len(), 61);
        assert_eq!(stroke.segment_count(), 60);
        assert!((stroke.opacity - 0.55).abs() < 1e-6);
    }
}

#[test]
fn second_stroke_falls_back_to_line_color_with_single_color_palette() {
    let cfg = SurfaceConfig {
        colors: smallvec::smallvec![Rgb::new(9, 9, 9)],
        line_color: Rgb::new(1, 2, 3),
        ..Default::default()
    };
    let layout = build(&cfg, 3);
    assert_eq!(layout.lines[1].color, Rgb::new(1, 2, 3));
    assert_eq!(layout.lights.point_color, Rgb::new(9, 9, 9));
}

#[test]
fn lines_can_be_disabled() {
    let cfg = SurfaceConfig {
        lines: false,
        ..Default::default()
    };
    assert!(build(&cfg, 5).lines.is_empty());
}

#[test]
fn pulses_are_placed_in_their_box_with_index_phases() {
    let cfg = SurfaceConfig {
        pulses: 5.0,
        ..Default::default()
    };
    let layout = build(&cfg, 11);
    assert_eq!(layout.pulses.len(), 5);
    for (i, p) in layout.pulses.iter().enumerate() {
        assert_eq!(p.phase, i as f32);
        assert!(p.position.x.abs() <= 1.5);
        assert!(p.position.y.abs() <= 0.8);
        assert!(p.position.z.abs() <= 0.9);
    }
    assert!((layout.pulse_radius - 0.14).abs() < 1e-6);
    assert_eq!(layout.pulse_color, cfg.pulse_color);
}

#[test]
fn lights_follow_the_first_color() {
    let layout = build(&SurfaceConfig::default(), 2);
    let l = layout.lights;
    assert_eq!(l.ambient_color, Rgb::WHITE);
    assert!((l.ambient_intensity - 0.5).abs() < 1e-6);
    assert_eq!(l.point_color, Rgb::new(0x60, 0xa5, 0xfa));
    assert!((l.point_intensity - 0.9).abs() < 1e-6);
    assert!((l.point_range - 30.0).abs() < 1e-6);
    assert!(l.point_position.distance(Vec3::new(3.0, 4.0, 8.0)) < 1e-6);
}

#[test]
fn bezier_passes_through_its_endpoints() {
    let curve = QuadraticBezier::new(
        Vec3::new(-2.4, -0.5, -1.4),
        Vec3::new(0.0, 1.1, 0.0),
        Vec3::new(2.3, 0.5, 1.1),
    );
    let pts = curve.points(60);
    assert_eq!(pts.len(), 61);
    assert!(pts[0].distance(curve.start) < 1e-6);
    assert!(pts[60].distance(curve.end) < 1e-5);
    // midpoint of a quadratic bezier: (start + 2*control + end) / 4
    let mid = (curve.start + curve.control * 2.0 + curve.end) / 4.0;
    assert!(pts[30].distance(mid) < 1e-5);
}

#[test]
fn builtin_curves_match_the_decorative_strokes() {
    let t = CurveTable::builtin().unwrap();
    assert_eq!(t.segments, 60);
    assert_eq!(t.curves.len(), 2);
    assert!(t.curves[1].start.distance(Vec3::new(-2.6, 0.9, 1.1)) < 1e-6);
    assert!(t.curves[1].end.distance(Vec3::new(2.2, -0.2, -1.1)) < 1e-6);
}

#[test]
fn sphere_mesh_counts() {
    let mesh = uv_sphere(0.14, 28, 28);
    assert_eq!(mesh.positions.len(), 29 * 29);
    assert_eq!(mesh.indices.len(), 6 * 28 * 27);
    assert!(mesh
        .indices
        .iter()
        .all(|&i| (i as usize) < mesh.positions.len()));
    for p in &mesh.positions {
        let r = Vec3::from_array(*p).length();
        assert!((r - 0.14).abs() < 1e-5);
    }
}

#[test]
fn sphere_triangles_face_outwards() {
    let mesh = uv_sphere(1.0, 12, 8);
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(mesh.positions[i as usize]));
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(normal.dot(centroid) > 0.0, "inward facing triangle {tri:?}");
    }
}

//! Static scene description built once at init.
//!
//! Everything here is plain data: the renderer uploads it to the GPU and the
//! per-frame step only moves whole groups, the camera and pulse visuals.

use crate::color::Rgb;
use crate::config::SurfaceConfig;
use crate::constants::*;
use crate::geometry::CurveTable;
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;

/// One fabric point cloud.
#[derive(Clone, Debug)]
pub struct PointLayer {
    pub color: Rgb,
    pub size: f32,
    pub opacity: f32,
    pub positions: Vec<Vec3>,
}

/// Decorative polyline in the signal group.
#[derive(Clone, Debug)]
pub struct LineStroke {
    pub color: Rgb,
    pub opacity: f32,
    pub points: Vec<Vec3>,
}

impl LineStroke {
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PulseSeed {
    pub position: Vec3,
    /// Phase offset (radians) fed to the oscillators; the pulse's index.
    pub phase: f32,
}

/// Scene lights. Every material in the scene is unlit, so these are carried
/// for embedders and never reach the shaders.
#[derive(Clone, Copy, Debug)]
pub struct Lights {
    pub ambient_color: Rgb,
    pub ambient_intensity: f32,
    pub point_color: Rgb,
    pub point_intensity: f32,
    pub point_range: f32,
    pub point_position: Vec3,
}

#[derive(Clone, Debug)]
pub struct SceneLayout {
    pub fabric: SmallVec<[PointLayer; 4]>,
    pub lines: Vec<LineStroke>,
    pub pulses: Vec<PulseSeed>,
    pub pulse_color: Rgb,
    pub pulse_radius: f32,
    pub lights: Lights,
}

/// Points in fabric layer `index`: `max(40, floor(density * (1 - index * 0.2)))`.
pub fn layer_point_count(density: f64, index: usize) -> usize {
    let scaled = (density * (1.0 - index as f64 * LAYER_DENSITY_FALLOFF)).floor();
    if scaled > LAYER_MIN_POINTS as f64 {
        scaled as usize
    } else {
        LAYER_MIN_POINTS
    }
}

#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * extent
}

impl SceneLayout {
    /// Build every group for `config`. Placement draws from `rng` only, so a
    /// seeded generator yields the same scene every time.
    pub fn build<R: Rng + ?Sized>(config: &SurfaceConfig, curves: &CurveTable, rng: &mut R) -> Self {
        let fabric = config
            .colors
            .iter()
            .enumerate()
            .map(|(idx, &color)| {
                let count = layer_point_count(config.density, idx);
                let spread = LAYER_BASE_SPREAD - idx as f32;
                let offset_y = idx as f32 * LAYER_Y_STEP;
                let positions = (0..count)
                    .map(|_| {
                        let x = centered(rng, spread);
                        let y = centered(rng, spread * LAYER_Y_SQUASH) + offset_y;
                        let z = centered(rng, spread);
                        Vec3::new(x, y, z)
                    })
                    .collect();
                PointLayer {
                    color,
                    size: config.size,
                    opacity: POINT_OPACITY,
                    positions,
                }
            })
            .collect::<SmallVec<[PointLayer; 4]>>();

        let lines = if config.lines {
            curves
                .curves
                .iter()
                .enumerate()
                .map(|(idx, curve)| LineStroke {
                    color: stroke_color(config, idx),
                    opacity: LINE_OPACITY,
                    points: curve.points(curves.segments),
                })
                .collect()
        } else {
            Vec::new()
        };

        let pulses = (0..config.pulse_count())
            .map(|i| PulseSeed {
                position: Vec3::new(
                    centered(rng, PULSE_EXTENT[0]),
                    centered(rng, PULSE_EXTENT[1]),
                    centered(rng, PULSE_EXTENT[2]),
                ),
                phase: i as f32,
            })
            .collect::<Vec<_>>();

        let lights = Lights {
            ambient_color: Rgb::WHITE,
            ambient_intensity: AMBIENT_INTENSITY,
            point_color: config.key_color(),
            point_intensity: POINT_LIGHT_INTENSITY,
            point_range: POINT_LIGHT_RANGE,
            point_position: Vec3::from_array(POINT_LIGHT_POSITION),
        };

        log::debug!(
            "[layout] layers={} points={} strokes={} pulses={}",
            fabric.len(),
            fabric.iter().map(|l| l.positions.len()).sum::<usize>(),
            lines.len(),
            pulses.len()
        );

        Self {
            fabric,
            lines,
            pulses,
            pulse_color: config.pulse_color,
            pulse_radius: PULSE_RADIUS,
            lights,
        }
    }

    pub fn point_count(&self) -> usize {
        self.fabric.iter().map(|l| l.positions.len()).sum()
    }
}

// Stroke 0 takes the line color; later strokes take the palette entry at their
// index, falling back to the line color when the palette is shorter.
fn stroke_color(config: &SurfaceConfig, idx: usize) -> Rgb {
    if idx == 0 {
        config.line_color
    } else {
        config.colors.get(idx).copied().unwrap_or(config.line_color)
    }
}

use crate::error::ConfigError;
use glam::Vec3;
use serde::Deserialize;
use std::f32::consts::PI;

pub static CURVES_JSON: &str = include_str!("../data/curves.json");

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct QuadraticBezier {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl QuadraticBezier {
    pub fn new(start: Vec3, control: Vec3, end: Vec3) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        self.start * (u * u) + self.control * (2.0 * u * t) + self.end * (t * t)
    }

    /// `segments + 1` evenly spaced samples, both endpoints included.
    pub fn points(&self, segments: u32) -> Vec<Vec3> {
        let n = segments.max(1);
        (0..=n)
            .map(|i| self.point_at(i as f32 / n as f32))
            .collect()
    }
}

/// Decorative stroke curves and their tessellation.
#[derive(Clone, Debug, Deserialize)]
pub struct CurveTable {
    pub segments: u32,
    pub curves: Vec<QuadraticBezier>,
}

impl CurveTable {
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(CURVES_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Indexed triangle mesh with positions only; normals of a sphere centred on
/// the origin are its normalized positions.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
}

/// Latitude/longitude sphere, counter-clockwise when seen from outside.
///
/// Produces `(w + 1) * (h + 1)` vertices; the pole rows contribute one
/// triangle per column and every other row two.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut positions = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let theta = v * PI;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let phi = u * 2.0 * PI;
            positions.push([
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            ]);
        }
    }

    let row = w + 1;
    let at = |ix: u32, iy: u32| (iy * row + ix) as u16;
    let mut indices = Vec::with_capacity((6 * w * (h - 1)) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = at(ix + 1, iy);
            let b = at(ix, iy);
            let c = at(ix, iy + 1);
            let d = at(ix + 1, iy + 1);
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    MeshData { positions, indices }
}

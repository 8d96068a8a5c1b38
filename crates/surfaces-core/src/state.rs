//! Per-frame animation state.
//!
//! These types avoid platform-specific APIs. The web frontend advances a
//! [`SceneState`] once per animation frame and reads back the camera matrices,
//! group transforms and pulse visuals to fill its uniform buffers.

use crate::config::SurfaceConfig;
use crate::constants::*;
use crate::input::InputSnapshot;
use glam::{EulerRot, Mat4, Vec3};

#[inline]
pub fn lerp(from: f32, to: f32, factor: f32) -> f32 {
    from + (to - from) * factor
}

/// Right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(base_distance: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, CAMERA_START_Y, base_distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Match the aspect ratio to a surface of `width` × `height`.
    ///
    /// A zero height yields a non-finite aspect; callers skip GPU work for
    /// empty surfaces instead.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space right and up axes of the view, for billboarding.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let view = self.view_matrix();
        (view.row(0).truncate(), view.row(1).truncate())
    }
}

/// Euler rotation (XYZ order) applied to a whole group of drawables.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupTransform {
    pub rotation: Vec3,
}

impl GroupTransform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseVisual {
    pub opacity: f32,
    pub scale: f32,
}

impl Default for PulseVisual {
    fn default() -> Self {
        Self {
            opacity: PULSE_BASE_OPACITY,
            scale: 1.0,
        }
    }
}

/// Staggered heartbeat for the pulse with phase `phase` at `t` seconds.
pub fn pulse_visual(t: f32, phase: f32) -> PulseVisual {
    PulseVisual {
        opacity: PULSE_OPACITY_MID + (t * PULSE_OPACITY_RATE + phase).sin() * PULSE_OPACITY_SWING,
        scale: 1.0 + (t * PULSE_SCALE_RATE + phase).sin() * PULSE_SCALE_SWING,
    }
}

/// Motion-related slice of the configuration.
#[derive(Clone, Copy, Debug)]
pub struct MotionParams {
    pub motion: f32,
    pub parallax: f32,
    pub camera_base: f32,
    pub zoom_amount: f32,
}

impl From<&SurfaceConfig> for MotionParams {
    fn from(c: &SurfaceConfig) -> Self {
        Self {
            motion: c.motion,
            parallax: c.parallax,
            camera_base: c.camera_base,
            zoom_amount: c.zoom_amount,
        }
    }
}

pub struct SceneState {
    pub params: MotionParams,
    pub camera: Camera,
    pub fabric: GroupTransform,
    pub signals: GroupTransform,
    pub pulses: Vec<PulseVisual>,
}

impl SceneState {
    pub fn new(config: &SurfaceConfig) -> Self {
        Self {
            params: MotionParams::from(config),
            camera: Camera::new(config.camera_base),
            fabric: GroupTransform::default(),
            signals: GroupTransform::default(),
            pulses: vec![PulseVisual::default(); config.pulse_count()],
        }
    }

    /// Where the camera is heading for the given input.
    pub fn camera_target(&self, input: &InputSnapshot) -> Vec3 {
        let [px, py] = input.pointer;
        Vec3::new(
            px * CAMERA_POINTER_X,
            py * CAMERA_POINTER_Y + (input.scroll - 0.5) * CAMERA_SCROLL_Y,
            self.params.camera_base + input.scroll * self.params.zoom_amount,
        )
    }

    /// Advance one animation frame. `t` is elapsed time in seconds.
    pub fn step(&mut self, input: &InputSnapshot, t: f32) {
        let p = self.params;
        let [px, py] = input.pointer;

        self.fabric.rotation.y += FABRIC_SPIN_PER_FRAME * p.motion;
        self.signals.rotation.y -= SIGNAL_SPIN_PER_FRAME * p.motion;
        self.fabric.rotation.z = lerp(self.fabric.rotation.z, px * p.parallax, TILT_SMOOTHING);
        self.signals.rotation.x = lerp(self.signals.rotation.x, py * p.parallax, TILT_SMOOTHING);

        for (idx, pulse) in self.pulses.iter_mut().enumerate() {
            *pulse = pulse_visual(t, idx as f32);
        }

        let target = self.camera_target(input);
        let eye = &mut self.camera.eye;
        eye.x = lerp(eye.x, target.x, CAMERA_XY_SMOOTHING);
        eye.y = lerp(eye.y, target.y, CAMERA_XY_SMOOTHING);
        eye.z = lerp(eye.z, target.z, CAMERA_Z_SMOOTHING);
        self.camera.target = Vec3::ZERO;
    }
}

// Shared visual tuning constants used by the scene layout and animation step.

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 55.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 120.0;
pub const CAMERA_START_Y: f32 = 0.2; // initial eye height before the first frame eases it

// Fabric (point cloud) layers
pub const LAYER_MIN_POINTS: usize = 40;
pub const LAYER_DENSITY_FALLOFF: f64 = 0.2; // each later layer loses this share of density
pub const LAYER_BASE_SPREAD: f32 = 6.0; // spread of layer 0; shrinks by 1 per layer
pub const LAYER_Y_SQUASH: f32 = 0.5; // clouds are flatter than they are wide
pub const LAYER_Y_STEP: f32 = -0.15; // vertical offset per layer index
pub const POINT_OPACITY: f32 = 0.85;

// Signal strokes
pub const LINE_OPACITY: f32 = 0.55;

// Pulses
pub const PULSE_RADIUS: f32 = 0.14;
pub const PULSE_SEGMENTS: u32 = 28;
pub const PULSE_BASE_OPACITY: f32 = 0.26;
pub const PULSE_EXTENT: [f32; 3] = [3.0, 1.6, 1.8]; // placement box around the origin
pub const PULSE_OPACITY_MID: f32 = 0.22;
pub const PULSE_OPACITY_SWING: f32 = 0.16;
pub const PULSE_OPACITY_RATE: f32 = 2.0; // rad/s
pub const PULSE_SCALE_SWING: f32 = 0.35;
pub const PULSE_SCALE_RATE: f32 = 1.5; // rad/s

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const POINT_LIGHT_INTENSITY: f32 = 0.9;
pub const POINT_LIGHT_RANGE: f32 = 30.0;
pub const POINT_LIGHT_POSITION: [f32; 3] = [3.0, 4.0, 8.0];

// Per-frame motion (radians per frame, scaled by the motion multiplier)
pub const FABRIC_SPIN_PER_FRAME: f32 = 0.0006;
pub const SIGNAL_SPIN_PER_FRAME: f32 = 0.0005;

// Exponential smoothing factors (fraction of the remaining gap closed per frame)
pub const TILT_SMOOTHING: f32 = 0.08;
pub const CAMERA_XY_SMOOTHING: f32 = 0.06;
pub const CAMERA_Z_SMOOTHING: f32 = 0.04;

// Camera target mapping
pub const CAMERA_POINTER_X: f32 = 0.6;
pub const CAMERA_POINTER_Y: f32 = 0.4;
pub const CAMERA_SCROLL_Y: f32 = 0.5;

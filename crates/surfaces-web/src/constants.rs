// Rendering and DOM tuning constants for the web frontend.
// Scene-level values (spin rates, smoothing, materials) live in
// `surfaces_core::constants`; these only concern the browser and the GPU.

// Backing-store resolution: CSS size times devicePixelRatio, capped here
pub const MAX_PIXEL_RATIO: f64 = 1.8;

// Antialiasing
pub const MSAA_SAMPLES: u32 = 4;

// Billboard quad for fabric points (two triangles, expanded in the vertex shader)
pub const QUAD_VERTICES: u32 = 6;

// Minimum GPU buffer capacity (in elements) so empty groups still bind cleanly
pub const MIN_INSTANCE_CAPACITY: usize = 1;

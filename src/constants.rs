// Rendering and input tuning for the web front-end.

// Camera
// Z distance used by both rendering and pointer projection.
pub const CAMERA_Z: f32 = 6.0;

// Pointer projection: distance along the view ray, so the cursor lands on the
// sphere's front face at rest.
pub const POINTER_RAY_DISTANCE: f32 = CAMERA_Z - 1.6;

// Points
pub const POINT_SIZE: f32 = 0.018; // clip-space half extent of a sprite

// Background
pub const CLEAR_RGB: [f32; 3] = [0.02, 0.02, 0.05];
pub const AMBIENT_CLEAR_BOOST: f32 = 0.06; // brightening at full amplitude

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const FILE_INPUT_ID: &str = "file-input";
pub const HINT_ID: &str = "hint-overlay";

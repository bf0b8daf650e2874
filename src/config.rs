// Configuration file, all lengths in scene units
// This controls the initial generation parameter settings and the animation loop

pub const INITIAL_SEED: u64 = 1512086461918454205;

// Animation loop
pub const FRAMES: u32 = 60;        // frames per full rotation, also the capture length
pub const FRAMERATE: f32 = 20.0;   // preview speed when not capturing

// Camera
pub const CAMERA_DISTANCE: f32 = 12.0;
pub const CAMERA_FOV_DEGREES: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Lissajous knot tube
pub const LISSAJOUS_SEGMENTS: usize = 1000;
pub const LISSAJOUS_TUBE_RADIUS: f32 = 0.1;

// Path meshes
pub const PATH_TUBE_SEGMENTS: usize = 2000;
pub const PATH_TUBE_RADIUS: f32 = 0.05;
pub const TUBE_RADIAL_SEGMENTS: usize = 8;
pub const LINE_SAMPLES: usize = 2000;
pub const POINT_SIZE: f32 = 0.1;

// Sphere random walk
pub const SPHERE_PATH_POINTS: usize = 1000;
pub const SPHERE_PATH_RADIUS: f64 = 2.0;
pub const SPHERE_PATH_DT: f64 = 0.1;
pub const SPHERE_PATH_SPRING: f64 = 0.2;   // w, strength of the radial spring
pub const SPHERE_PATH_NOISE: f64 = 0.5;

// Metaball point sampler
pub const METABALL_POINTS_TRIALS: usize = 200;
pub const METABALL_POINTS_CENTROIDS: usize = 12;
pub const METABALL_POINTS_RADIUS: f64 = 2.0;
pub const METABALL_POINTS_THRESHOLD: f64 = 8.0;
pub const METABALL_POINTS_SHOW_TRACES: bool = true;
pub const METABALL_POINTS_DT: f64 = 0.03;

// Metaball attraction walk
pub const METABALL_PATH_POINTS: usize = 1000;
pub const METABALL_PATH_CENTROIDS: usize = 6;
pub const METABALL_PATH_RADIUS: f64 = 2.0;
pub const METABALL_PATH_DT: f64 = 0.1;
pub const METABALL_PATH_NOISE: f64 = 0.35;
pub const METABALL_PATH_THRESHOLD: f64 = 10.0;
pub const METABALL_PATH_FACTOR: f64 = 0.2;   // correction weight vs. damping of the tangential motion

// Capture output, one sub directory per capture
pub const CAPTURE_ROOT: &str = "captures";

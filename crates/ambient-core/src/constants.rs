// Shared visual tuning constants for the ambient renderers.
//
// Fractions are relative to the smaller viewport dimension unless noted.

// Noise
pub const HASH_X_WEIGHT: f64 = 127.1;
pub const HASH_Y_WEIGHT: f64 = 311.7;
pub const HASH_SCALE: f64 = 43758.5453;
pub const FBM_DEFAULT_OCTAVES: u32 = 4;

// Filled flame layers
pub const FIRE_DEPTH_FRACTION: f64 = 0.144;
pub const FIRE_LAYER_COUNT: usize = 5;
pub const FIRE_STEP_PX: f64 = 3.0;
pub const FIRE_SPATIAL_FREQ: f64 = 0.012;
pub const FIRE_LAYER_X_OFFSET: f64 = 7.3;
pub const FIRE_LAYER_Y_OFFSET: f64 = 3.1;
pub const FIRE_FLICKER_AMOUNT: f64 = 0.15;
pub const FIRE_ENVELOPE_FLOOR: f64 = 0.7; // envelope at the corners
pub const GLOW_BLUR_PX: f64 = 8.0;
pub const GLOW_SHARP_ALPHA: f64 = 0.4;

// Flame tongues
pub const TONGUE_COUNT: usize = 3;
pub const TONGUE_STEP_PX: f64 = 2.0;

// Waveform flame
pub const WAVE_COUNT: usize = 5;
pub const WAVE_DEPTH_FRACTION: f64 = 0.12;
pub const WAVE_STEP_PX: f64 = 2.0;

// Embers
pub const EMBER_CAP: usize = 80;
pub const EMBER_SPAWN_PROBABILITY: f64 = 0.4;
pub const EMBER_MIN_AGE: f64 = 30.0; // frames
pub const EMBER_MAX_AGE: f64 = 80.0; // frames, exclusive
pub const EMBER_MIN_SIZE: f64 = 0.8;
pub const EMBER_MAX_SIZE: f64 = 2.3; // exclusive
pub const EMBER_ATTACK_FRACTION: f64 = 0.15;
pub const EMBER_TURBULENCE: f64 = 0.3;
pub const EMBER_SHRINK: f64 = 0.6; // fraction of size lost by end of life

// Heartbeat
pub const BEAT_PERIOD_SEC: f64 = 1.0;
pub const BEAT_ATTACK_END: f64 = 0.08;
pub const BEAT_RELEASE_END: f64 = 0.15;
pub const BEAT_NOTCH_END: f64 = 0.22;
pub const BEAT_REST_START: f64 = 0.35;
pub const BEAT_RELEASE_LEVEL: f64 = 0.4;
pub const BEAT_NOTCH_LEVEL: f64 = 0.7;
pub const RING_THUMP_THRESHOLD: f64 = 0.1;

// Constellation
pub const CONSTELLATION_DEPTH: usize = 3;
pub const CONSTELLATION_SIDES: usize = 5;
pub const CHILD_SHRINK: f64 = 0.1; // fraction moved from vertex toward parent center
pub const MID_RADIUS_RATIO: f64 = 0.32;
pub const LEAF_RADIUS_RATIO: f64 = 0.3;
pub const CHILD_ROTATION_STEP: f64 = 0.3;
pub const EDGE_AGITATION_THRESHOLD: f64 = 0.1;

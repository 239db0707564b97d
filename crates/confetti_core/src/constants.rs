// Animation-time units:
// - Tick: 1/60 second, the unit for velocity, gravity, drift and decay
// - Frame delta: real elapsed ms, normalized against the 60 fps baseline
// Keeping all per-tick quantities in these units makes configurations
// behave identically at any refresh rate.

/// Ticks per second for configuration fields expressed as frame counts
pub const TICKS_PER_SECOND: f32 = 60.0;

/// Baseline frame duration the integrator normalizes against (ms)
pub const BASELINE_FRAME_MS: f32 = 1000.0 / 60.0;

/// Upper bound on the normalized integration delta (absorbs short stalls)
pub const MAX_DELTA: f32 = 2.0;

/// Raw frame deltas above this are skipped outright, not integrated
/// (resume-from-background produces multi-second deltas)
pub const FRAME_SKIP_MS: f32 = 1000.0;

/// Active-set size that arms truncation during a removal pass
pub const ACTIVE_HIGH_WATER: usize = 100;

/// Most-recent particles kept when the high-water mark is exceeded
pub const ACTIVE_KEEP: usize = 50;

/// Upper bound on the per-particle wobble phase speed (per tick)
pub const MAX_WOBBLE_SPEED: f32 = 0.11;

/// Tilt phase advance per tick
pub const TILT_STEP: f32 = 0.1;

/// Rotation speed boost divisor: boost = 1 + |velocity| / this
pub const SPEED_BOOST_DIVISOR: f32 = 35.0;

/// Wobble offset radius in px, per unit of the config scalar
pub const WOBBLE_RADIUS: f32 = 10.0;

/// Floor for the wobble-derived render scale factors
pub const MIN_RENDER_SCALE: f32 = 0.3;

/// Default palette: maximally distinct vibrant colors so overlapping
/// particles stay individually readable
pub const DEFAULT_COLORS: [&str; 19] = [
    "#26ccff", // bright cyan
    "#a25afd", // purple
    "#ff5e7e", // pink
    "#88ff5a", // lime green
    "#fcff42", // yellow
    "#ffa62d", // orange
    "#ff36ff", // magenta
    "#1e90ff", // dodger blue
    "#9400d3", // dark violet
    "#ff1493", // deep pink
    "#32cd32", // lime
    "#ffd700", // gold
    "#ff6347", // tomato
    "#00ffff", // cyan
    "#ff00ff", // fuchsia
    "#00ff00", // pure green
    "#ff0000", // pure red
    "#0000ff", // pure blue
    "#ffff00", // pure yellow
];

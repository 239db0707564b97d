use confetti_core::{ConfettiError, MAX_WOBBLE_SPEED, Particle, ResolvedConfig, Viewport};
use rand::Rng;
use uuid::Uuid;

/// Create one burst: exactly `particle_count` particles with randomized
/// initial kinematics, launched from the configured origin.
pub fn spawn_burst(
    config: &ResolvedConfig,
    viewport: Viewport,
    rng: &mut impl Rng,
) -> Result<Vec<Particle>, ConfettiError> {
    // Resolution already validates the pools, but the factory is also a
    // public entry point and must not index into nothing.
    if config.colors.is_empty() {
        return Err(ConfettiError::EmptyColors);
    }
    if config.shapes.is_empty() {
        return Err(ConfettiError::EmptyShapes);
    }

    let mut particles = Vec::with_capacity(config.particle_count as usize);
    for _ in 0..config.particle_count {
        particles.push(spawn_particle(config, viewport, rng));
    }
    Ok(particles)
}

fn spawn_particle(config: &ResolvedConfig, viewport: Viewport, rng: &mut impl Rng) -> Particle {
    let spread = config.spread.to_radians();
    // Launch angle: configured direction plus a uniform offset in ±spread/2
    let offset = if spread > 0.0 {
        rng.gen_range(-spread / 2.0..spread / 2.0)
    } else {
        0.0
    };
    let angle = config.angle.to_radians() + offset;

    // Speed in the upper half of the configured range; negative vy is up
    let speed = config.start_velocity * rng.gen_range(0.5..=1.0);

    // Strips are broader than tall, like a torn piece of paper
    let width = rng.gen_range(6.0..10.0) * config.scalar;
    let height = width * rng.gen_range(0.5..0.8);

    let color = config.colors[rng.gen_range(0..config.colors.len())];
    let shape = config.shapes[rng.gen_range(0..config.shapes.len())];

    let tilt_angle = if config.tilt && config.tilt_angle_increment > 0.0 {
        rng.gen_range(0.0..config.tilt_angle_increment)
    } else {
        0.0
    };

    Particle {
        id: Uuid::new_v4(),
        shape,
        color,
        x: config.origin.x * viewport.width,
        y: config.origin.y * viewport.height,
        width,
        height,
        vx: speed * angle.cos(),
        vy: -speed * angle.sin(),
        rotation: rng.gen_range(0.0..360.0),
        rotation_velocity: rng.gen_range(-50.0..50.0),
        wobble: rng.gen_range(0.0..10.0),
        wobble_speed: MAX_WOBBLE_SPEED.min(0.05 + rng.gen_range(0.0..0.1)),
        tilt_angle,
        tilt_sin: tilt_angle.sin(),
        tilt_cos: tilt_angle.cos(),
        tilt_radius: rng.gen_range(2.0..3.0),
        opacity: 1.0,
    }
}

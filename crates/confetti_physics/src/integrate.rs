use confetti_core::{
    BASELINE_FRAME_MS, FRAME_SKIP_MS, MAX_DELTA, MIN_RENDER_SCALE, Particle, ResolvedConfig,
    SPEED_BOOST_DIVISOR, TILT_STEP, WOBBLE_RADIUS,
};

/// Normalize a raw frame delta (ms) to 60-steps-per-second units.
///
/// Returns `None` for frames that must not be integrated at all:
/// non-positive deltas and implausibly large ones (app resumed from the
/// background). Anything else is clamped to [`MAX_DELTA`] so a short stall
/// never teleports particles.
pub fn normalize_delta(raw_ms: f32) -> Option<f32> {
    if !(raw_ms > 0.0) || raw_ms > FRAME_SKIP_MS {
        return None;
    }
    Some((raw_ms / BASELINE_FRAME_MS).min(MAX_DELTA))
}

/// Advance one particle by one normalized time-step.
///
/// `elapsed_ms` is the particle's total accumulated lifetime, used for the
/// fade only; opacity is derived from it rather than accumulated per step
/// so dropped frames cannot skew the fade against eviction.
pub fn step(p: &mut Particle, config: &ResolvedConfig, delta: f32, elapsed_ms: f32) {
    // Position first, from the velocity the previous step left behind
    p.x += p.vx * delta;
    p.y += p.vy * delta;

    // Gravity pulls down (screen y grows downward), drift pushes sideways
    p.vy += config.gravity * delta;
    p.vx += config.drift * delta;

    // Exponential air resistance: decay is a per-tick multiplier, so a
    // double-length step damps exactly as much as two single steps
    let damp = config.decay.powf(delta);
    p.vx *= damp;
    p.vy *= damp;

    // Fast pieces tumble harder
    let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
    let boost = 1.0 + speed / SPEED_BOOST_DIVISOR;
    p.rotation += p.rotation_velocity * boost * delta;

    // Cosmetic oscillators
    p.wobble += p.wobble_speed * delta;
    p.tilt_angle += TILT_STEP * delta;
    p.tilt_sin = p.tilt_angle.sin();
    p.tilt_cos = p.tilt_angle.cos();

    p.opacity = 1.0 - (elapsed_ms / config.duration_ms).min(1.0);
}

/// Screen-space transform for one particle, with the wobble/tilt overlay
/// applied. Derived at render time from the integrated state; recomputing
/// it never perturbs the physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTransform {
    /// Final position (px), wobble and tilt offsets included
    pub x: f32,
    pub y: f32,
    /// Rotation in degrees
    pub rotation: f32,
    /// Independent axis scales from the wobble, for pseudo-3D flutter
    pub scale_x: f32,
    pub scale_y: f32,
    pub opacity: f32,
}

/// Compute the rendered transform for a particle.
pub fn render_transform(p: &Particle, config: &ResolvedConfig) -> RenderTransform {
    let wobble_x = WOBBLE_RADIUS * config.scalar * p.wobble.cos();
    let wobble_y = WOBBLE_RADIUS * config.scalar * p.wobble.sin();
    let tilt_x = p.tilt_radius * p.tilt_cos;
    let tilt_y = p.tilt_radius * p.tilt_sin;

    RenderTransform {
        x: p.x + wobble_x + tilt_x,
        y: p.y + wobble_y + tilt_y,
        rotation: p.rotation,
        // 0.1 px of wobble displacement per unit of scale, floored so a
        // piece edge-on to the camera stays visible
        scale_x: (wobble_x.abs() * 0.1).max(MIN_RENDER_SCALE),
        scale_y: (wobble_y.abs() * 0.1).max(MIN_RENDER_SCALE),
        opacity: p.opacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confetti_core::{ColorRgba, ConfettiConfig, Shape};
    use uuid::Uuid;

    fn test_particle(vx: f32, vy: f32) -> Particle {
        Particle {
            id: Uuid::new_v4(),
            shape: Shape::Square,
            color: ColorRgba::WHITE,
            x: 0.0,
            y: 0.0,
            width: 8.0,
            height: 5.0,
            vx,
            vy,
            rotation: 0.0,
            rotation_velocity: 10.0,
            wobble: 0.0,
            wobble_speed: 0.1,
            tilt_angle: 0.0,
            tilt_sin: 0.0,
            tilt_cos: 1.0,
            tilt_radius: 2.5,
            opacity: 1.0,
        }
    }

    fn config(overrides: ConfettiConfig) -> ResolvedConfig {
        overrides.resolve().unwrap()
    }

    #[test]
    fn delta_normalizes_against_the_60fps_baseline() {
        let d = normalize_delta(1000.0 / 60.0).unwrap();
        assert!((d - 1.0).abs() < 1e-6);
        let d = normalize_delta(1000.0 / 120.0).unwrap();
        assert!((d - 0.5).abs() < 1e-6);
    }

    #[test]
    fn delta_clamps_to_two() {
        assert_eq!(normalize_delta(100.0), Some(MAX_DELTA));
        assert_eq!(normalize_delta(1000.0), Some(MAX_DELTA));
    }

    #[test]
    fn unusable_frames_are_skipped() {
        assert_eq!(normalize_delta(0.0), None);
        assert_eq!(normalize_delta(-5.0), None);
        assert_eq!(normalize_delta(f32::NAN), None);
        assert_eq!(normalize_delta(1000.1), None);
        assert_eq!(normalize_delta(60_000.0), None);
    }

    #[test]
    fn gravity_applies_after_the_position_update() {
        // Launch straight up at 45 px/tick with unit gravity and no decay:
        // one baseline step moves by the old velocity, then slows by 1
        let cfg = config(ConfettiConfig {
            gravity: Some(1.0),
            decay: Some(1.0),
            drift: Some(0.0),
            duration_ms: Some(1000.0),
            ..Default::default()
        });
        let mut p = test_particle(0.0, -45.0);
        step(&mut p, &cfg, 1.0, 16.67);
        assert_eq!(p.y, -45.0);
        assert_eq!(p.vy, -44.0);
        assert_eq!(p.vx, 0.0);
    }

    #[test]
    fn drift_accelerates_horizontally() {
        let cfg = config(ConfettiConfig {
            gravity: Some(0.0),
            decay: Some(1.0),
            drift: Some(2.0),
            ..Default::default()
        });
        let mut p = test_particle(1.0, 0.0);
        step(&mut p, &cfg, 1.0, 0.0);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.vx, 3.0);
    }

    #[test]
    fn ballistic_displacement_is_step_count_invariant() {
        // With no accelerations and no decay, two unit steps must land
        // exactly where one double step does
        let cfg = config(ConfettiConfig {
            gravity: Some(0.0),
            decay: Some(1.0),
            drift: Some(0.0),
            ..Default::default()
        });
        let mut twice = test_particle(12.0, -30.0);
        step(&mut twice, &cfg, 1.0, 16.67);
        step(&mut twice, &cfg, 1.0, 33.33);
        let mut once = test_particle(12.0, -30.0);
        step(&mut once, &cfg, 2.0, 33.33);
        assert!((twice.x - once.x).abs() < 1e-4);
        assert!((twice.y - once.y).abs() < 1e-4);
    }

    #[test]
    fn decay_is_exponential_in_delta() {
        // decay^1 applied twice == decay^2 applied once
        let cfg = config(ConfettiConfig {
            gravity: Some(0.0),
            decay: Some(0.9),
            drift: Some(0.0),
            ..Default::default()
        });
        let mut twice = test_particle(40.0, -40.0);
        step(&mut twice, &cfg, 1.0, 0.0);
        step(&mut twice, &cfg, 1.0, 0.0);
        let mut once = test_particle(40.0, -40.0);
        step(&mut once, &cfg, 2.0, 0.0);
        assert!((twice.vx - once.vx).abs() < 1e-3, "{} vs {}", twice.vx, once.vx);
        assert!((twice.vy - once.vy).abs() < 1e-3, "{} vs {}", twice.vy, once.vy);
    }

    #[test]
    fn rotation_scales_with_speed() {
        let cfg = config(ConfettiConfig {
            gravity: Some(0.0),
            decay: Some(1.0),
            drift: Some(0.0),
            ..Default::default()
        });
        // Speed equal to the divisor doubles the spin rate
        let mut p = test_particle(SPEED_BOOST_DIVISOR, 0.0);
        step(&mut p, &cfg, 1.0, 0.0);
        assert!((p.rotation - 20.0).abs() < 1e-4, "rotation = {}", p.rotation);

        let mut still = test_particle(0.0, 0.0);
        step(&mut still, &cfg, 1.0, 0.0);
        assert!((still.rotation - 10.0).abs() < 1e-4);
    }

    #[test]
    fn opacity_fades_linearly_and_bottoms_out() {
        let cfg = config(ConfettiConfig {
            duration_ms: Some(1000.0),
            ..Default::default()
        });
        let mut p = test_particle(0.0, 0.0);
        let mut last = 1.0;
        for elapsed in [0.0, 250.0, 500.0, 750.0, 999.0] {
            step(&mut p, &cfg, 1.0, elapsed);
            assert!(p.opacity <= last, "opacity increased at {elapsed}");
            last = p.opacity;
        }
        step(&mut p, &cfg, 1.0, 1000.0);
        assert_eq!(p.opacity, 0.0);
        // Past end of life it stays exactly 0, never negative
        step(&mut p, &cfg, 1.0, 1500.0);
        assert_eq!(p.opacity, 0.0);
    }

    #[test]
    fn opacity_is_exact_despite_dropped_frames() {
        let cfg = config(ConfettiConfig {
            duration_ms: Some(2000.0),
            ..Default::default()
        });
        // Same elapsed time reached with different step patterns gives the
        // same opacity: the fade reads the clock, not the step count
        let mut a = test_particle(0.0, 0.0);
        step(&mut a, &cfg, 1.0, 1000.0);
        let mut b = test_particle(0.0, 0.0);
        step(&mut b, &cfg, 2.0, 500.0);
        step(&mut b, &cfg, 2.0, 1000.0);
        assert_eq!(a.opacity, b.opacity);
        assert!((a.opacity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn tilt_trig_is_recomputed_each_step() {
        let cfg = config(ConfettiConfig::default());
        let mut p = test_particle(0.0, 0.0);
        step(&mut p, &cfg, 1.0, 0.0);
        assert!((p.tilt_angle - TILT_STEP).abs() < 1e-6);
        assert!((p.tilt_sin - p.tilt_angle.sin()).abs() < 1e-6);
        assert!((p.tilt_cos - p.tilt_angle.cos()).abs() < 1e-6);
    }

    #[test]
    fn wobble_overlay_is_bounded_and_pure() {
        let cfg = config(ConfettiConfig {
            scalar: Some(1.5),
            ..Default::default()
        });
        let mut p = test_particle(5.0, -5.0);
        for _ in 0..10 {
            step(&mut p, &cfg, 1.0, 100.0);
        }
        let before = p.clone();
        let t = render_transform(&p, &cfg);
        // Pure: rendering never mutates the integrated state
        assert_eq!(p, before);
        // Offset stays inside wobble radius + tilt radius of the position
        let max_r = WOBBLE_RADIUS * cfg.scalar + p.tilt_radius;
        assert!((t.x - p.x).abs() <= max_r + 1e-4);
        assert!((t.y - p.y).abs() <= max_r + 1e-4);
        assert!(t.scale_x >= MIN_RENDER_SCALE && t.scale_y >= MIN_RENDER_SCALE);
    }
}

use std::sync::Arc;

use bevy::log::{debug, info};
use bevy::prelude::Resource;
use confetti_core::{
    ACTIVE_HIGH_WATER, ACTIVE_KEEP, ConfettiConfig, ConfettiError, Particle, ResolvedConfig,
    Viewport,
};
use confetti_physics::{RenderTransform, normalize_delta, render_transform, spawn_burst, step};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::completion::{Completion, CompletionSender};

/// One live particle, the burst configuration it shares, and its lifetime
/// on the stage clock
struct ActiveParticle {
    particle: Particle,
    config: Arc<ResolvedConfig>,
    elapsed_ms: f32,
}

/// A completion signal not yet settled; counts down on the stage clock
struct PendingCompletion {
    remaining_ms: f32,
    sender: CompletionSender,
}

/// The burst controller: owns every live particle from creation to
/// eviction and drives them all on one frame-synchronous timeline.
///
/// There is a single clock here, accumulated from the raw frame deltas
/// `advance` accepts. Opacity fade, particle eviction and burst completion
/// all read it, so none of them can drift against the others.
#[derive(Resource)]
pub struct ConfettiStage {
    /// Insertion-ordered active set; membership == currently rendered
    active: Vec<ActiveParticle>,
    pending: Vec<PendingCompletion>,
    viewport: Viewport,
    rng: ChaCha8Rng,
}

impl ConfettiStage {
    /// Stage with an entropy-seeded rng.
    pub fn new(viewport: Viewport) -> Self {
        Self::from_rng(viewport, ChaCha8Rng::from_entropy())
    }

    /// Stage with a deterministic rng, for reproducible tests and replays.
    pub fn with_seed(viewport: Viewport, seed: u64) -> Self {
        Self::from_rng(viewport, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(viewport: Viewport, rng: ChaCha8Rng) -> Self {
        Self {
            active: Vec::new(),
            pending: Vec::new(),
            viewport,
            rng,
        }
    }

    /// Trigger one burst.
    ///
    /// Resolution and spawning happen before anything is registered, so a
    /// failed fire leaves the active set and other in-flight bursts
    /// untouched. Returns a [`Completion`] that settles once the resolved
    /// duration has elapsed; callers may ignore it.
    pub fn fire(&mut self, config: &ConfettiConfig) -> Result<Completion, ConfettiError> {
        let resolved = Arc::new(config.resolve()?);
        let batch = spawn_burst(&resolved, self.viewport, &mut self.rng)?;

        debug!(
            "fired burst: {} particles, {} ms",
            batch.len(),
            resolved.duration_ms
        );

        let (sender, completion) = Completion::channel();
        self.pending.push(PendingCompletion {
            remaining_ms: resolved.duration_ms,
            sender,
        });
        self.active.extend(batch.into_iter().map(|particle| ActiveParticle {
            particle,
            config: Arc::clone(&resolved),
            elapsed_ms: 0.0,
        }));
        Ok(completion)
    }

    /// Advance every live particle by one frame.
    ///
    /// Frames with a non-positive or implausibly large raw delta are
    /// skipped outright: neither the particles, their lifetimes, nor the
    /// pending completions observe them.
    pub fn advance(&mut self, raw_delta_ms: f32) {
        let Some(delta) = normalize_delta(raw_delta_ms) else {
            return;
        };

        for entry in &mut self.active {
            entry.elapsed_ms += raw_delta_ms;
            step(&mut entry.particle, &entry.config, delta, entry.elapsed_ms);
        }

        // Evict at elapsed >= duration; no further integration for those
        let before = self.active.len();
        self.active
            .retain(|entry| entry.elapsed_ms < entry.config.duration_ms);
        let removed = before - self.active.len();

        if removed > 0 {
            debug!("evicted {removed} expired particles");
            // Backpressure: fire-faster-than-expiry keeps the set bounded
            if before > ACTIVE_HIGH_WATER && self.active.len() > ACTIVE_KEEP {
                let excess = self.active.len() - ACTIVE_KEEP;
                self.active.drain(..excess);
                info!(
                    "active set passed {ACTIVE_HIGH_WATER}, kept the {ACTIVE_KEEP} most recent"
                );
            }
        }

        // Completions count down on the same clock the particles aged by
        let mut i = 0;
        while i < self.pending.len() {
            self.pending[i].remaining_ms -= raw_delta_ms;
            if self.pending[i].remaining_ms <= 0.0 {
                self.pending.swap_remove(i).sender.settle();
            } else {
                i += 1;
            }
        }
    }

    /// Clear all live particles and cancel every pending completion.
    /// Idempotent.
    pub fn reset(&mut self) {
        if !self.active.is_empty() || !self.pending.is_empty() {
            info!(
                "reset: dropping {} particles, {} pending bursts",
                self.active.len(),
                self.pending.len()
            );
        }
        self.active.clear();
        // Dropping the senders disconnects the handles -> Cancelled
        self.pending.clear();
    }

    /// Update the viewport future bursts spawn against.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particle_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Live particles in insertion order.
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.active.iter().map(|entry| &entry.particle)
    }

    /// Per-frame render snapshot: each live particle with its final screen
    /// transform (wobble/tilt overlay applied).
    pub fn visuals(&self) -> impl Iterator<Item = (&Particle, RenderTransform)> {
        self.active
            .iter()
            .map(|entry| (&entry.particle, render_transform(&entry.particle, &entry.config)))
    }
}

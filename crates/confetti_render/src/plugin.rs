use bevy::prelude::*;

use super::particles;

/// Rendering host for the confetti stage: mirrors the active particle set
/// into 2D entities and applies the per-frame transforms.
pub struct ConfettiRenderPlugin;

impl Plugin for ConfettiRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera).add_systems(
            Update,
            (
                particles::sync_viewport,
                particles::sync_particle_visuals,
                particles::update_particle_visuals,
                particles::fade_mesh_visuals,
                particles::fade_text_visuals,
            )
                .chain(),
        );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

use bevy::prelude::*;

use crate::stage::ConfettiStage;

/// Bevy plugin driving the burst stage from the render clock.
/// The app is expected to insert a [`ConfettiStage`] resource.
pub struct ConfettiSimPlugin;

impl Plugin for ConfettiSimPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, stage_tick);
    }
}

/// Per-frame tick — feeds the frame delta (ms) into the stage
fn stage_tick(mut stage: ResMut<ConfettiStage>, time: Res<Time>) {
    stage.advance(time.delta_secs() * 1000.0);
}

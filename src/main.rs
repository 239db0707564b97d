use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use confetti_core::{ConfettiConfig, Viewport, presets};
use confetti_render::ConfettiRenderPlugin;
use confetti_sim::{ConfettiSimPlugin, ConfettiStage};

const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 600.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Confetti — preset playground".into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.06, 0.06, 0.08)))
        .insert_resource(ConfettiStage::new(Viewport::new(WINDOW_WIDTH, WINDOW_HEIGHT)))
        .add_plugins(ConfettiSimPlugin)
        .add_plugins(ConfettiRenderPlugin)
        .add_systems(Update, keyboard_input)
        .run();
}

/// 1-9 fire the named presets, 0 fires a random direction, Space the
/// default burst, R resets the stage
fn keyboard_input(keys: Res<ButtonInput<KeyCode>>, mut stage: ResMut<ConfettiStage>) {
    const PRESET_KEYS: [(KeyCode, &str); 9] = [
        (KeyCode::Digit1, "basic_cannon"),
        (KeyCode::Digit2, "fireworks"),
        (KeyCode::Digit3, "realistic"),
        (KeyCode::Digit4, "stars"),
        (KeyCode::Digit5, "snow"),
        (KeyCode::Digit6, "left_cannon"),
        (KeyCode::Digit7, "right_cannon"),
        (KeyCode::Digit8, "bottom_cannon"),
        (KeyCode::Digit9, "school_pride"),
    ];

    for (key, name) in PRESET_KEYS {
        if keys.just_pressed(key) {
            if let Some(config) = presets::by_name(name) {
                fire(&mut stage, name, &config);
            }
        }
    }

    if keys.just_pressed(KeyCode::Digit0) {
        let mut rng = ChaCha8Rng::from_entropy();
        if let Some(config) = presets::by_name_with_rng("random_direction", &mut rng) {
            fire(&mut stage, "random_direction", &config);
        }
    }
    if keys.just_pressed(KeyCode::Space) {
        fire(&mut stage, "default", &ConfettiConfig::default());
    }
    if keys.just_pressed(KeyCode::KeyR) {
        info!("reset");
        stage.reset();
    }
}

fn fire(stage: &mut ConfettiStage, name: &str, config: &ConfettiConfig) {
    match stage.fire(config) {
        Ok(_) => info!("fired {name}"),
        Err(e) => warn!("fire {name} rejected: {e}"),
    }
}

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use confetti_core::{ColorRgba, Particle, Shape, Viewport};
use confetti_physics::RenderTransform;
use confetti_sim::ConfettiStage;

/// Marker for one particle's entity in the render world
#[derive(Component)]
pub struct ParticleVisual {
    pub id: Uuid,
}

/// Z layer confetti draws on, above ordinary 2D content
const CONFETTI_Z: f32 = 10.0;

/// Star glyphs render slightly larger than the strip width
const STAR_FONT_SCALE: f32 = 1.5;

/// Keep the stage's spawn viewport in sync with the primary window
pub fn sync_viewport(
    mut stage: ResMut<ConfettiStage>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let viewport = Viewport::new(window.width(), window.height());
    if stage.viewport() != viewport {
        debug!("viewport now {}x{}", viewport.width, viewport.height);
        stage.set_viewport(viewport);
    }
}

/// Mirror the active particle set into entities: spawn visuals for new
/// particles, despawn visuals whose particle was evicted.
pub fn sync_particle_visuals(
    mut commands: Commands,
    stage: Res<ConfettiStage>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    existing: Query<(Entity, &ParticleVisual)>,
) {
    let live: HashSet<Uuid> = stage.particles().map(|p| p.id).collect();

    let mut drawn = HashSet::with_capacity(live.len());
    for (entity, visual) in &existing {
        if live.contains(&visual.id) {
            drawn.insert(visual.id);
        } else {
            commands.entity(entity).despawn();
        }
    }

    let viewport = stage.viewport();
    for particle in stage.particles().filter(|p| !drawn.contains(&p.id)) {
        spawn_visual(&mut commands, &mut meshes, &mut materials, particle, viewport);
    }
}

fn spawn_visual(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    particle: &Particle,
    viewport: Viewport,
) {
    let color = bevy_color(particle.color);
    let transform =
        Transform::from_translation(screen_to_world(particle.x, particle.y, viewport));
    let visual = ParticleVisual { id: particle.id };

    match particle.shape {
        Shape::Square => {
            commands.spawn((
                Mesh2d(meshes.add(Rectangle::new(particle.width, particle.height))),
                MeshMaterial2d(materials.add(ColorMaterial::from(color))),
                transform,
                visual,
            ));
        }
        Shape::Circle => {
            commands.spawn((
                Mesh2d(meshes.add(Circle::new(particle.width / 2.0))),
                MeshMaterial2d(materials.add(ColorMaterial::from(color))),
                transform,
                visual,
            ));
        }
        Shape::Star => {
            commands.spawn((
                Text2d::new("★"),
                TextFont {
                    font_size: particle.width * STAR_FONT_SCALE,
                    ..default()
                },
                TextColor(color),
                transform,
                visual,
            ));
        }
    }
}

/// Apply each particle's computed transform: translation with the
/// wobble/tilt overlay, rotation, and the two independent scale factors.
pub fn update_particle_visuals(
    stage: Res<ConfettiStage>,
    mut query: Query<(&ParticleVisual, &mut Transform)>,
) {
    let frame: HashMap<Uuid, RenderTransform> =
        stage.visuals().map(|(p, t)| (p.id, t)).collect();
    let viewport = stage.viewport();

    for (visual, mut transform) in query.iter_mut() {
        let Some(t) = frame.get(&visual.id) else {
            continue;
        };
        transform.translation = screen_to_world(t.x, t.y, viewport);
        // Screen rotation is clockwise, bevy's z rotation counter-clockwise
        transform.rotation = Quat::from_rotation_z(-t.rotation.to_radians());
        transform.scale = Vec3::new(t.scale_x, t.scale_y, 1.0);
    }
}

/// Fade square/circle particles through their material's alpha
pub fn fade_mesh_visuals(
    stage: Res<ConfettiStage>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    query: Query<(&ParticleVisual, &MeshMaterial2d<ColorMaterial>)>,
) {
    let opacity: HashMap<Uuid, f32> =
        stage.visuals().map(|(p, t)| (p.id, t.opacity)).collect();

    for (visual, handle) in &query {
        let Some(&alpha) = opacity.get(&visual.id) else {
            continue;
        };
        if let Some(material) = materials.get_mut(&handle.0) {
            material.color.set_alpha(alpha);
        }
    }
}

/// Fade star glyphs through their text color's alpha
pub fn fade_text_visuals(
    stage: Res<ConfettiStage>,
    mut query: Query<(&ParticleVisual, &mut TextColor)>,
) {
    let opacity: HashMap<Uuid, f32> =
        stage.visuals().map(|(p, t)| (p.id, t.opacity)).collect();

    for (visual, mut text_color) in query.iter_mut() {
        if let Some(&alpha) = opacity.get(&visual.id) {
            text_color.0.set_alpha(alpha);
        }
    }
}

/// Map screen coordinates (origin top-left, y down) into bevy's 2D world
/// (origin center, y up)
fn screen_to_world(x: f32, y: f32, viewport: Viewport) -> Vec3 {
    Vec3::new(
        x - viewport.width / 2.0,
        viewport.height / 2.0 - y,
        CONFETTI_Z,
    )
}

fn bevy_color(c: ColorRgba) -> Color {
    Color::srgba(c.r, c.g, c.b, c.a)
}

//! Bevy 2D viewer and frame driver for the particle-life engine
//!
//! Renders one colored dot per particle, advances the engine once per frame
//! with the frame clock's elapsed time, and translates pointer/wheel input
//! into engine calls:
//! - cursor moved  -> external repulsive point at the cursor
//! - cursor left   -> external point cleared
//! - mouse wheel   -> adjust the selected force-matrix entry
//! - `A` / `B`     -> cycle the selected (source, target) color pair
//! - `R`           -> reset the force matrix to the scenario default

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

#[derive(Component)]
struct ParticleIndex(pub usize);

/// Matrix entry targeted by wheel adjustments: force of color `b` on color `a`
#[derive(Resource)]
struct SelectedPair {
    a: usize,
    b: usize,
}

/// Logical window side length in pixels; the square domain is scaled to fit
const WINDOW_SIZE: f32 = 800.0;

/// One wheel "line" in pixel-equivalent units, for mice that report lines
const WHEEL_LINE_PIXELS: f64 = 120.0;

/// Wheel pixels per unit of matrix adjustment
const WHEEL_SCALE: f64 = 500.0;

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} particles",
        scenario.engine.particles().len()
    );

    App::new()
        .insert_resource(scenario)
        .insert_resource(SelectedPair { a: 0, b: 0 })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "plife".into(),
                resolution: (WINDOW_SIZE, WINDOW_SIZE).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_particles_system)
        .add_systems(
            Update,
            (
                pointer_system,
                wheel_system,
                selection_system,
                physics_step_system,
                sync_transforms_system,
            )
                .chain(),
        )
        .run();
}

fn setup_particles_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // One shared dot mesh, one material per color class
    let dot = Mesh2dHandle(meshes.add(Circle::new(1.5)));
    let palette: Vec<Handle<ColorMaterial>> = scenario
        .palette
        .iter()
        .map(|name| materials.add(ColorMaterial::from(palette_color(name))))
        .collect();

    let size = scenario.engine.params().size;
    for (i, particle) in scenario.engine.particles().iter().enumerate() {
        let material = palette
            .get(particle.color)
            .cloned()
            .unwrap_or_else(|| materials.add(ColorMaterial::from(Color::WHITE)));

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: dot.clone(),
                material,
                transform: sim_to_screen(particle.x, size),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

/// Cursor position (logical pixels, origin top-left) -> simulation space
fn pointer_system(
    mut scenario: ResMut<Scenario>,
    mut moved: EventReader<CursorMoved>,
    mut left: EventReader<CursorLeft>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if left.read().last().is_some() {
        scenario.engine.set_external_point(None);
    }

    let Some(event) = moved.read().last() else {
        return;
    };
    let Ok(window) = windows.get_single() else {
        return;
    };

    let size = scenario.engine.params().size;
    let sim = NVec2::new(
        event.position.x as f64 / window.width() as f64 * size,
        event.position.y as f64 / window.height() as f64 * size,
    );
    scenario.engine.set_external_point(Some(sim));
}

fn wheel_system(
    mut scenario: ResMut<Scenario>,
    selected: Res<SelectedPair>,
    mut wheel: EventReader<MouseWheel>,
) {
    for event in wheel.read() {
        let pixels = match event.unit {
            MouseScrollUnit::Line => event.y as f64 * WHEEL_LINE_PIXELS,
            MouseScrollUnit::Pixel => event.y as f64,
        };
        scenario
            .engine
            .adjust_force(selected.a, selected.b, pixels / WHEEL_SCALE);
    }
}

fn selection_system(
    mut scenario: ResMut<Scenario>,
    mut selected: ResMut<SelectedPair>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    let n = scenario.engine.matrix().num_colors();
    if n == 0 {
        return;
    }

    if keys.just_pressed(KeyCode::KeyA) {
        selected.a = (selected.a + 1) % n;
    }
    if keys.just_pressed(KeyCode::KeyB) {
        selected.b = (selected.b + 1) % n;
    }
    if keys.just_pressed(KeyCode::KeyR) {
        scenario.engine.reset_forces();
        println!("selection: force matrix reset to defaults");
    }

    if keys.just_pressed(KeyCode::KeyA) || keys.just_pressed(KeyCode::KeyB) {
        println!(
            "selection: adjusting force[{}][{}] = {:.3}",
            selected.a,
            selected.b,
            scenario.engine.matrix().get(selected.a, selected.b)
        );
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>, time: Res<Time>) {
    scenario.engine.step(time.delta_seconds_f64());
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut query: Query<(&ParticleIndex, &mut Transform)>,
) {
    let size = scenario.engine.params().size;
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = scenario.engine.particles().get(*i) {
            *transform = sim_to_screen(p.x, size);
        }
    }
}

/// Simulation coordinates (y down, origin top-left) -> screen transform
/// (camera at the domain center, y up)
fn sim_to_screen(x: NVec2, size: f64) -> Transform {
    let scale = WINDOW_SIZE / size as f32;
    Transform::from_xyz(
        (x.x as f32 - size as f32 / 2.0) * scale,
        (size as f32 / 2.0 - x.y as f32) * scale,
        0.0,
    )
}

/// CSS-style palette names used by scenario files
fn palette_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "red" => Color::rgb(1.0, 0.0, 0.0),
        "chartreuse" => Color::rgb(0.5, 1.0, 0.0),
        "cornflowerblue" => Color::rgb(0.39, 0.58, 0.93),
        "yellow" => Color::rgb(1.0, 1.0, 0.0),
        "green" => Color::rgb(0.0, 0.5, 0.0),
        "blue" => Color::rgb(0.0, 0.0, 1.0),
        "magenta" => Color::rgb(1.0, 0.0, 1.0),
        "cyan" => Color::rgb(0.0, 1.0, 1.0),
        "orange" => Color::rgb(1.0, 0.65, 0.0),
        _ => Color::WHITE,
    }
}

//! Bevy 2D viewer for a finished trajectory
//!
//! Draws both orbit paths and a grid every frame, keeps the Sun at the
//! origin, and animates Earth and Moon markers through the recorded
//! positions, one entry per `FRAME_SECONDS`, looping. Space pauses.
//!
//! A title, axis labels and a color legend are drawn as 2D text.
//!
//! The viewer only ever sees a `Trajectory`; it never steps the system.

use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::trajectory::Trajectory;

/// World meters -> screen pixels
const SCALE: f64 = 1.0e-9;

/// Half-width of the view in meters, about 2 AU
const VIEW_HALF_WIDTH: f64 = 2.0 * 1.5e11;

/// Grid spacing in meters
const GRID_STEP: f64 = 0.5e11;

/// Time each trajectory entry stays on screen
const FRAME_SECONDS: f32 = 0.01;

const LABEL_SIZE: f32 = 16.0;

const SUN_RADIUS: f32 = 8.0;
const EARTH_RADIUS: f32 = 6.0;
const MOON_RADIUS: f32 = 3.0;

#[derive(Component, Clone, Copy, Debug)]
enum Marker {
    Earth,
    Moon,
}

#[derive(Resource)]
struct Playback {
    earth_path: Vec<Vec2>, // screen-space
    moon_path: Vec<Vec2>, // screen-space
    frame: usize,
    timer: Timer,
    paused: bool,
}

fn to_screen(p: &crate::simulation::states::NVec2) -> Vec2 {
    Vec2::new((p.x * SCALE) as f32, (p.y * SCALE) as f32)
}

pub fn run_2d(trajectory: &Trajectory) {
    log::info!("run_2d: starting viewer with {} frames", trajectory.len());

    if trajectory.is_empty() {
        log::warn!("run_2d: nothing to show");
        return;
    }

    let playback = Playback {
        earth_path: trajectory.earth.iter().map(to_screen).collect(),
        moon_path: trajectory.moon.iter().map(to_screen).collect(),
        frame: 0,
        timer: Timer::from_seconds(FRAME_SECONDS, TimerMode::Repeating),
        paused: false,
    };

    let side = (2.0 * VIEW_HALF_WIDTH * SCALE) as f32 + 100.0;

    App::new()
        .insert_resource(playback)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Earth-Moon-Sun Orbit".into(),
                        resolution: (side, side).into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // logging is already set up by the binary
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, (setup_markers, setup_labels))
        .add_systems(Update, (advance_playback, sync_markers, draw_orbits).chain())
        .run();
}

fn setup_markers(mut commands: Commands, playback: Res<Playback>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    // Sun, fixed at the origin
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(SUN_RADIUS))),
        material: materials.add(ColorMaterial::from(Color::srgb(1.0, 0.85, 0.0))),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    let bodies = [
        (Marker::Earth, EARTH_RADIUS, Color::srgb(0.2, 0.4, 1.0), playback.earth_path[0], 1.0),
        (Marker::Moon, MOON_RADIUS, Color::srgb(1.0, 0.2, 0.2), playback.moon_path[0], 2.0),
    ];

    for (marker, radius, color, start, z) in bodies {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(start.x, start.y, z),
                ..Default::default()
            },
            marker,
        ));
    }
}

fn label(text: &str, color: Color, pos: Vec2, anchor: Anchor) -> Text2dBundle {
    Text2dBundle {
        text: Text::from_section(
            text,
            TextStyle {
                font_size: LABEL_SIZE,
                color,
                ..Default::default()
            },
        ),
        text_anchor: anchor,
        transform: Transform::from_xyz(pos.x, pos.y, 3.0),
        ..Default::default()
    }
}

/// Title, axis labels and legend, placed in the margin around the grid
fn setup_labels(mut commands: Commands) {
    let half = (VIEW_HALF_WIDTH * SCALE) as f32;
    let white = Color::srgb(0.9, 0.9, 0.9);

    commands.spawn(label("Earth-Moon-Sun System", white, Vec2::new(0.0, half + 30.0), Anchor::Center));
    commands.spawn(label("x (meters)", white, Vec2::new(half, -half - 20.0), Anchor::CenterRight));
    commands.spawn(label("y (meters)", white, Vec2::new(-half, half + 10.0), Anchor::BottomLeft));

    let legend = [
        ("Earth Orbit", Color::srgb(0.2, 0.4, 1.0)),
        ("Moon Orbit", Color::srgb(1.0, 0.6, 0.6)),
        ("Sun", Color::srgb(1.0, 0.85, 0.0)),
    ];
    for (i, (text, color)) in legend.into_iter().enumerate() {
        let y = half - 10.0 - i as f32 * (LABEL_SIZE + 4.0);
        commands.spawn(label(text, color, Vec2::new(half - 10.0, y), Anchor::TopRight));
    }
}

fn advance_playback(time: Res<Time>, keys: Res<ButtonInput<KeyCode>>, mut playback: ResMut<Playback>) {
    if keys.just_pressed(KeyCode::Space) {
        playback.paused = !playback.paused;
    }
    if playback.paused {
        return;
    }

    let playback = &mut *playback;
    playback.timer.tick(time.delta());
    let ticks = playback.timer.times_finished_this_tick() as usize;
    playback.frame = (playback.frame + ticks) % playback.earth_path.len();
}

fn sync_markers(playback: Res<Playback>, mut query: Query<(&Marker, &mut Transform)>) {
    for (marker, mut transform) in &mut query {
        let p = match marker {
            Marker::Earth => playback.earth_path[playback.frame],
            Marker::Moon => playback.moon_path[playback.frame],
        };
        transform.translation.x = p.x;
        transform.translation.y = p.y;
    }
}

fn draw_orbits(mut gizmos: Gizmos, playback: Res<Playback>) {
    // grid + axes
    let half = (VIEW_HALF_WIDTH * SCALE) as f32;
    let step = (GRID_STEP * SCALE) as f32;
    let lines = (VIEW_HALF_WIDTH / GRID_STEP).round() as i32;
    for k in -lines..=lines {
        let c = k as f32 * step;
        let color = if k == 0 { Color::srgb(0.5, 0.5, 0.5) } else { Color::srgb(0.15, 0.15, 0.15) };
        gizmos.line_2d(Vec2::new(c, -half), Vec2::new(c, half), color);
        gizmos.line_2d(Vec2::new(-half, c), Vec2::new(half, c), color);
    }

    gizmos.linestrip_2d(playback.earth_path.iter().copied(), Color::srgb(0.2, 0.4, 1.0));
    gizmos.linestrip_2d(playback.moon_path.iter().copied(), Color::srgb(1.0, 0.6, 0.6));
}

//! Stride - third-person locomotion demo
//!
//! Runs a short headless session: a capsule walks, runs and jumps across a
//! floor toward a wall while a dialogue opens and closes mid-jump. Keyboard
//! and mouse input are fed through the same winit-facing handler a windowed
//! build would use.

mod save;
mod settings;

use std::rc::Rc;

use anyhow::{Context, Result};
use glam::{Vec2, Vec3};
use stride_core::{GameTime, Transform};
use stride_game::{
    BlendParameters, CameraController, CameraInputFreeze, DialogueChannel, InputHandler,
    LocomotionConfig, LocomotionController, SPEED_PERCENT_PARAM,
};
use stride_physics::{CharacterBody, PhysicsWorld};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use save::SaveError;
use settings::GameSettings;

const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 0.05, 0.0);
const DEMO_FRAMES: u32 = 360;

/// Something the scripted session does on a given frame
enum Cue {
    Press(KeyCode),
    Release(KeyCode),
    Look(f64, f64),
    DialogueStart,
    DialogueEnd,
}

fn script() -> Vec<(u32, Cue)> {
    vec![
        (0, Cue::Press(KeyCode::KeyW)),
        (30, Cue::Look(120.0, 0.0)),
        (90, Cue::Press(KeyCode::ShiftLeft)),
        (150, Cue::Press(KeyCode::Space)),
        (151, Cue::Release(KeyCode::Space)),
        (160, Cue::DialogueStart),
        // Ignored: the camera is frozen
        (170, Cue::Look(-400.0, 0.0)),
        (220, Cue::DialogueEnd),
        (280, Cue::Release(KeyCode::ShiftLeft)),
        (320, Cue::Release(KeyCode::KeyW)),
    ]
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    info!("Starting Stride...");

    let settings = GameSettings::load();
    // First run: write the defaults out so they can be tuned
    if GameSettings::settings_path().is_some_and(|path| !path.exists()) {
        if let Err(e) = settings.save() {
            warn!("Failed to write default settings: {}", e);
        }
    }
    let save_dir = save::default_save_dir();

    let spawn = match save::load_player(&save_dir) {
        Ok(data) => data.position(),
        Err(SaveError::NotFound(path)) => {
            warn!("No save at {:?}, starting at the default spawn", path);
            SPAWN_POSITION
        }
        Err(e) => {
            warn!("Could not load save: {}, starting at the default spawn", e);
            SPAWN_POSITION
        }
    };

    // Level: a floor and a wall ahead of the spawn
    let mut physics = PhysicsWorld::new();
    physics.create_ground(0.0);
    physics.create_static_box(Vec3::new(4.0, 2.0, 0.25), Vec3::new(0.0, 2.0, -12.0));

    let mut body = CharacterBody::new();
    let body_collider = body.spawn(&mut physics, spawn);
    physics.refresh_queries();

    let channel = DialogueChannel::new();
    let dialogue = Rc::downgrade(&channel);

    let mut locomotion = match LocomotionController::new(settings.locomotion.clone(), &dialogue) {
        Ok(controller) => controller,
        Err(e) => {
            warn!("Invalid locomotion settings: {}, using defaults", e);
            LocomotionController::new(LocomotionConfig::default(), &dialogue)?
        }
    };
    let look_freeze = CameraInputFreeze::new(&dialogue)?;

    let mut camera = CameraController::with_config(settings.camera.clone());
    camera.ignore_collider = Some(body_collider);

    let mut input = InputHandler::new();
    settings.input.apply(&mut input);

    let mut game_time = GameTime::new(settings.time.clone());
    let mut animator = BlendParameters::new();
    let cues = script();

    for frame in 0..DEMO_FRAMES {
        for (_, cue) in cues.iter().filter(|(at, _)| *at == frame) {
            match cue {
                Cue::Press(key) => input.handle_keyboard(PhysicalKey::Code(*key), ElementState::Pressed),
                Cue::Release(key) => {
                    input.handle_keyboard(PhysicalKey::Code(*key), ElementState::Released)
                }
                Cue::Look(dx, dy) => input.handle_mouse_motion((*dx, *dy)),
                Cue::DialogueStart => {
                    info!("Dialogue opened");
                    channel.publish_start();
                }
                Cue::DialogueEnd => {
                    info!("Dialogue closed");
                    channel.publish_end();
                }
            }
        }

        game_time.update(game_time.config.fixed_timestep);
        let dt = game_time.config.fixed_timestep;
        for _ in 0..game_time.fixed_steps() {
            let step = locomotion.tick(
                &input.state,
                &camera,
                &mut body.mover(&mut physics),
                &mut animator,
                dt,
            );
            physics.refresh_queries();

            if step.jumped {
                info!("Jumped at {:?}", body.position);
            }
        }

        let look: Vec2 = look_freeze.look_delta(&input.state);
        camera.update(
            look,
            input.state.scroll_delta,
            body.position,
            Some(&physics),
            game_time.delta_time,
        );
        input.end_frame();

        if frame % 60 == 0 {
            let state = locomotion.state();
            let transform = Transform {
                position: body.position,
                rotation: locomotion.facing(),
            };
            info!(
                "frame {}: position {:?}, forward {:?}, speed {:.2}, blend {:.2}, grounded {}",
                frame,
                transform.position,
                transform.forward(),
                state.horizontal_speed,
                animator.get(SPEED_PERCENT_PARAM),
                state.grounded
            );
        }
    }

    save::save_player(&save_dir, body.position)?;
    info!("Stride session finished");
    Ok(())
}

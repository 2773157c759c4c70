//! Headless demo: drives the orbit camera in real time through a short
//! scripted sequence of key presses and logs the emitted poses.
//!
//! ```text
//! RUST_LOG=info tactical-camera [options.toml]
//! ```

use std::path::Path;

use glam::Vec3;
use tactical_camera::camera::{OrbitCameraController, ViewCamera};
use tactical_camera::scene::SubjectRegistry;
use tactical_camera::util::frame_timing::FrameTiming;
use tactical_camera::{CameraError, CameraPose, Options, PoseSink};

/// Seconds into the run at which each key is "pressed".
const SCRIPT: &[(f32, &str)] = &[
    (1.5, "KeyE"),
    (1.8, "KeyE"), // swallowed by the rotation cooldown
    (3.0, "Tab"),
    (5.0, "KeyQ"),
    (6.5, "KeyQ"),
    (8.0, "Tab"),
];

/// Total simulated run time in seconds.
const RUN_SECONDS: f32 = 12.0;

/// Logs every pose it receives at trace level and keeps the last one for
/// the periodic summary.
struct LoggingSink {
    view: ViewCamera,
}

impl PoseSink for LoggingSink {
    fn set_camera_pose(&mut self, pose: CameraPose) {
        log::trace!(
            "pose: pos={} yaw={:.2}",
            pose.position,
            pose.orientation.yaw
        );
        self.view.set_camera_pose(pose);
    }
}

fn load_options() -> Result<Options, CameraError> {
    match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path)),
        None => Ok(Options::default()),
    }
}

fn run(options: &Options) -> Result<(), CameraError> {
    let mut registry = SubjectRegistry::new();
    let mut sink = LoggingSink {
        view: ViewCamera::default(),
    };
    let mut camera = OrbitCameraController::new(&options.camera)?;

    // Editor-style startup: nothing real exists yet.
    let placeholder = camera.initialize_for_preview(&mut registry, &mut sink)?;

    let hero = registry.spawn("hero", Vec3::new(0.0, 0.0, 0.0));
    let _scout = registry.spawn("scout", Vec3::new(2400.0, 800.0, 0.0));
    let _ = registry.despawn(placeholder);
    let _ = camera.initialize_for_play(hero, &registry, &mut sink)?;

    let mut timing = FrameTiming::new(60);
    let mut clock = 0.0_f32;
    let mut next_key = 0;
    let mut next_report = 0.0_f32;

    while clock < RUN_SECONDS {
        if !timing.should_render() {
            std::thread::sleep(timing.time_until_next_frame());
            continue;
        }
        let dt = timing.end_frame();
        clock += dt;

        while let Some(&(at, key)) = SCRIPT.get(next_key) {
            if at > clock {
                break;
            }
            next_key += 1;
            match options
                .keybindings
                .resolve(key, camera.followed(), &registry)
            {
                Some(cmd) => {
                    let accepted = camera.execute(cmd, &registry)?;
                    log::info!("{clock:>5.2}s {key} → {cmd:?} (accepted: {accepted})");
                }
                None => log::warn!("{clock:>5.2}s {key} is unbound"),
            }
        }

        // The hero wanders so following is visible in the log.
        let _ = registry.translate(hero, Vec3::new(60.0 * dt, 0.0, 0.0));

        let pose = camera.advance(dt, &registry, &mut sink)?;

        if clock >= next_report {
            next_report += 1.0;
            log::info!(
                "{clock:>5.2}s pos={:.1} yaw={:.1} target_yaw={:.1} fps={:.0}",
                pose.position,
                pose.orientation.yaw,
                camera.current_yaw(),
                timing.fps()
            );
            log::debug!("view forward={:.3}", sink.view.forward);
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

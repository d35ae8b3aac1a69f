//! Headless demo: attaches an orbital rig to an offscreen host, replays a
//! scripted gesture sequence and logs the resulting matrices.
//!
//! Usage: `orbitrig [options.toml]`

use std::path::Path;
use std::rc::Rc;

use glam::{DMat4, DVec3};
use orbitrig::camera::{CameraParameters, ParameterChange, RotationMode, Transforms};
use orbitrig::input::{GestureTracker, MouseButton, PointerEvent};
use orbitrig::math::Bounds3;
use orbitrig::options::RigOptions;
use orbitrig::{CameraRig, HeadlessHost, OrbitalRig, RigError, SharedHost};

/// Drag across the surface, press to release.
fn drag(button: MouseButton, from: (f64, f64), to: (f64, f64), steps: u32) -> Vec<PointerEvent> {
    let mut events = vec![
        PointerEvent::Moved { x: from.0, y: from.1 },
        PointerEvent::Button { button, pressed: true },
    ];
    for i in 1..=steps {
        let t = f64::from(i) / f64::from(steps);
        events.push(PointerEvent::Moved {
            x: from.0 + (to.0 - from.0) * t,
            y: from.1 + (to.1 - from.1) * t,
        });
    }
    events.push(PointerEvent::Button { button, pressed: false });
    events
}

fn log_matrix(label: &str, m: &DMat4) {
    log::info!("{label}:");
    for row in 0..4 {
        let r = m.row(row);
        log::info!("  [{:>10.4} {:>10.4} {:>10.4} {:>10.4}]", r.x, r.y, r.z, r.w);
    }
}

fn replay(rig: &mut OrbitalRig, tracker: &mut GestureTracker, events: Vec<PointerEvent>) -> Result<(), RigError> {
    for event in events {
        if let Some(gesture) = tracker.handle_event(event) {
            let _ = rig.handle_gesture(&gesture)?;
        }
    }
    Ok(())
}

fn run(options: RigOptions) -> Result<(), RigError> {
    let host: SharedHost = Rc::new(HeadlessHost::new(1280.0, 720.0));
    let mut rig = OrbitalRig::new(options)?;
    rig.attach(Rc::clone(&host));
    let _ = rig.subscribe(Box::new(|change: ParameterChange, params: &CameraParameters, _: &Transforms| {
        log::debug!("{change:?}: distance {:.4}", params.distance());
    }));

    let bounds = Bounds3::new(DVec3::new(-2.0, -1.0, 0.0), DVec3::new(2.0, 1.0, 3.0));
    let outcome = rig.fit_default(&bounds)?;
    log::info!("fit: {outcome:?}");

    let mut tracker = GestureTracker::new();
    replay(&mut rig, &mut tracker, drag(MouseButton::Left, (640.0, 360.0), (760.0, 300.0), 12))?;
    replay(&mut rig, &mut tracker, vec![PointerEvent::Scroll { delta: 20.0 }])?;
    log::info!("turntable: {:?}", rig.rotation());

    let _ = rig.set_rotation_mode(RotationMode::Arcball);
    replay(&mut rig, &mut tracker, drag(MouseButton::Left, (640.0, 360.0), (600.0, 420.0), 8))?;
    log::info!("arcball: {:?}", rig.rotation());

    let transforms = *rig.transforms();
    log::info!("eye: {}", transforms.eye());
    log_matrix("view", &transforms.view());
    log_matrix("scene to raster", &transforms.scene_to_raster());
    log::info!("origin on screen: {}", transforms.project(rig.parameters().origin()));

    rig.detach(&host);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match std::env::args().nth(1) {
        Some(path) => match RigOptions::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => RigOptions::default(),
    };

    if let Err(e) = run(options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

//! tween2d headless runner.
//!
//! Loads a scene file (or the built-in demo), plays it against a virtual
//! refresh clock with a recording backend, and logs where every shape ended
//! up. Pass `--json` to print the final report on stdout.

mod recording;
mod runner;
mod scene;

use std::path::Path;

use anyhow::Result;

use scene::{DEMO_SCENE, Scene};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut json = false;
    let mut scene_path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            scene_path = Some(arg);
        }
    }

    let scene = match &scene_path {
        Some(path) => {
            log::info!("Loading scene {path}");
            Scene::load(Path::new(path))?
        },
        None => {
            log::info!("No scene given, running the built-in demo");
            Scene::parse(DEMO_SCENE)?
        },
    };
    log::info!(
        "Running {} shapes at {} Hz for up to {} ms",
        scene.shapes.len(),
        scene.refresh_hz,
        scene.run_for,
    );

    let report = runner::run(&scene)?;
    log::info!(
        "Done at {:.1} ms: {} refreshes, {} ticks, {} draw calls, {} events",
        report.ended_at,
        report.refreshes,
        report.ticks,
        report.draw_calls,
        report.events_applied,
    );
    for shape in &report.shapes {
        match &shape.frame {
            Some(frame) => log::info!(
                "  {} [{}] {} at ({:.2}, {:.2}) {}",
                shape.name,
                shape.phase,
                frame.kind(),
                frame.anchor().x,
                frame.anchor().y,
                frame.color(),
            ),
            None => log::info!("  {} [{}] never drawn", shape.name, shape.phase),
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

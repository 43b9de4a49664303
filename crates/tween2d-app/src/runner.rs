//! Drives a scene against a virtual refresh clock.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use tween2d_anim::{BackendSink, ShapeId, ShapeParams, Stage, animate};
use tween2d_types::backend::ShapeBackend;
use tween2d_types::color::Rgb;
use tween2d_types::error::{Result, Tween2dError};

use crate::recording::RecordingBackend;
use crate::scene::{Action, Scene};

const BACKGROUND: Rgb = Rgb::WHITE;

/// Final state of one shape.
#[derive(Debug, Clone, Serialize)]
pub struct ShapeReport {
    pub name: String,
    pub phase: String,
    pub last_elapsed: f64,
    /// Last frame handed to the sink, if the shape ever ticked.
    pub frame: Option<ShapeParams>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Refreshes actually simulated. The run ends early once nothing is
    /// pending and no events remain.
    pub refreshes: usize,
    pub ticks: usize,
    pub events_applied: usize,
    /// Shape draw calls, excluding per-refresh clears.
    pub draw_calls: usize,
    /// Clock time of the last refresh.
    pub ended_at: f64,
    pub shapes: Vec<ShapeReport>,
}

/// Run `scene` to completion and report where every shape ended up.
pub fn run(scene: &Scene) -> Result<RunReport> {
    let backend = Rc::new(RefCell::new(RecordingBackend::new()));
    let mut stage = Stage::new();

    let mut ids: Vec<(&str, ShapeId)> = Vec::with_capacity(scene.shapes.len());
    for shape in &scene.shapes {
        let sink = BackendSink::new(Rc::clone(&backend));
        let animation = animate(shape.animation.clone(), sink)?;
        let id = stage.spawn(&animation, shape.params.clone());
        ids.push((shape.name.as_str(), id));
    }

    let mut events: Vec<_> = scene.events.iter().collect();
    events.sort_by(|a, b| a.at.total_cmp(&b.at));
    let mut events = events.into_iter().peekable();

    let interval = scene.frame_interval();
    let mut refreshes = 0;
    let mut ticks = 0;
    let mut events_applied = 0;
    let mut n: u64 = 0;
    loop {
        let ts = refresh_time(n, interval);
        if ts > scene.run_for {
            break;
        }
        backend.borrow_mut().clear(BACKGROUND)?;
        ticks += stage.refresh(ts);
        refreshes += 1;

        while let Some(event) = events.next_if(|e| e.at <= ts) {
            let id = lookup(&ids, &event.shape)?;
            log::info!("{ts:.1} ms: {:?} {}", event.action, event.shape);
            apply(&mut stage, id, event.action)?;
            events_applied += 1;
        }

        if stage.is_idle() && events.peek().is_none() {
            log::debug!("Nothing pending after {ts:.1} ms, ending run");
            break;
        }
        n += 1;
    }

    let shapes = ids
        .iter()
        .filter_map(|(name, id)| {
            stage.get(*id).map(|ctl| ShapeReport {
                name: (*name).to_string(),
                phase: format!("{:?}", ctl.phase()).to_lowercase(),
                last_elapsed: ctl.last_elapsed(),
                frame: ctl.current_frame().cloned(),
            })
        })
        .collect();

    let backend = backend.borrow();
    Ok(RunReport {
        refreshes,
        ticks,
        events_applied,
        draw_calls: backend.calls.len() - backend.clear_count(),
        ended_at: stage.now(),
        shapes,
    })
}

/// Timestamp of the `n`th refresh. Computed from the count rather than
/// accumulated so rounding error does not drift over long runs.
fn refresh_time(n: u64, interval: f64) -> f64 {
    n as f64 * interval
}

fn lookup(ids: &[(&str, ShapeId)], name: &str) -> Result<ShapeId> {
    ids.iter()
        .find(|(n, _)| *n == name)
        .map(|(_, id)| *id)
        .ok_or_else(|| Tween2dError::UnknownShape(name.to_string()))
}

fn apply(stage: &mut Stage, id: ShapeId, action: Action) -> Result<()> {
    let mut ctl = stage.try_control(id)?;
    match action {
        Action::Stop => ctl.stop(),
        Action::Pause => ctl.pause(),
        Action::Unpause => ctl.unpause(),
        Action::Restart => ctl.restart(),
        Action::Reverse => ctl.reverse(),
    }
    Ok(())
}

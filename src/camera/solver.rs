use crate::{
    animation::ease::Ease,
    camera::pose::CameraPose,
    composition::model::{CameraSettings, ZoomEvent},
    foundation::core::Point,
    foundation::math::{clamp, lerp},
};

/// Pre-roll before an event starts, in seconds.
pub const ANTICIPATION_SECS: f64 = 0.2;
/// Length of the zoom-in transition at the start of an event, in seconds.
pub const TRANSITION_SECS: f64 = 0.35;
/// Extra zoom reached by the end of the anticipation pre-roll.
pub const ANTICIPATION_ZOOM: f64 = 0.05;
/// Fraction of the pan toward the event target performed during anticipation.
pub const ANTICIPATION_PAN: f64 = 0.1;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "phase", content = "event_id", rename_all = "snake_case")]
/// Which part of the choreography produced a pose.
pub enum CameraPhase {
    /// No event is active or about to start.
    Idle,
    /// Pre-roll before the named event.
    Anticipation(String),
    /// Zooming into the named event.
    TransitionIn(String),
    /// Holding on the named event.
    Hold(String),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Target pose plus the phase that produced it.
pub struct SolvedCamera {
    /// Clamped target pose.
    pub pose: CameraPose,
    /// Choreography phase.
    pub phase: CameraPhase,
}

/// Stateless mapping from playback time and zoom events to a target camera pose.
///
/// Overlapping events resolve deterministically: among events active at `t`
/// the latest `start_time` wins (ties go to the later list entry); with none
/// active, the soonest upcoming event in its pre-roll wins.
pub struct CameraSolver;

impl CameraSolver {
    /// Target pose at time `t`.
    pub fn solve(t: f64, events: &[ZoomEvent], settings: &CameraSettings) -> CameraPose {
        Self::solve_detailed(t, events, settings).pose
    }

    /// Target pose at time `t` with the phase that produced it.
    pub fn solve_detailed(
        t: f64,
        events: &[ZoomEvent],
        settings: &CameraSettings,
    ) -> SolvedCamera {
        if !settings.auto_zoom {
            return SolvedCamera {
                pose: CameraPose::IDENTITY,
                phase: CameraPhase::Idle,
            };
        }
        let base = settings.static_zoom;
        let idle = SolvedCamera {
            pose: CameraPose::centered(base).clamped(),
            phase: CameraPhase::Idle,
        };
        if !t.is_finite() {
            return idle;
        }

        if let Some(event) = active_event(t, events) {
            let time_in = t - event.start_time;
            let target = effective_target(event, time_in);
            let (pose, phase) = if time_in < TRANSITION_SECS {
                let u = time_in / TRANSITION_SECS;
                let zoom_e = Ease::OutBack.apply(u);
                let pan_e = Ease::OutQuad.apply(u);
                (
                    CameraPose::new(
                        lerp(0.5, target.x, pan_e),
                        lerp(0.5, target.y, pan_e),
                        lerp(base + ANTICIPATION_ZOOM, event.scale, zoom_e),
                    ),
                    CameraPhase::TransitionIn(event.id.clone()),
                )
            } else {
                (
                    CameraPose::new(target.x, target.y, event.scale),
                    CameraPhase::Hold(event.id.clone()),
                )
            };
            return SolvedCamera {
                pose: pose.clamped(),
                phase,
            };
        }

        if let Some(event) = anticipated_event(t, events) {
            let u = (t - (event.start_time - ANTICIPATION_SECS)) / ANTICIPATION_SECS;
            let e = Ease::OutQuad.apply(u);
            let pose = CameraPose::new(
                0.5 + (event.x - 0.5) * ANTICIPATION_PAN * e,
                0.5 + (event.y - 0.5) * ANTICIPATION_PAN * e,
                base + ANTICIPATION_ZOOM * e,
            );
            return SolvedCamera {
                pose: pose.clamped(),
                phase: CameraPhase::Anticipation(event.id.clone()),
            };
        }

        idle
    }
}

/// Point the camera aims at `time_in` seconds into `event`.
///
/// Drag events travel linearly from `(x, y)` to `(x_end, y_end)` over the full
/// duration, independent of the zoom transition; other events aim at `(x, y)`.
pub fn effective_target(event: &ZoomEvent, time_in: f64) -> Point {
    match event.drag_end() {
        Some((x_end, y_end)) => {
            let progress = if event.duration > 0.0 {
                clamp(time_in / event.duration, 0.0, 1.0)
            } else {
                0.0
            };
            Point::new(
                lerp(event.x, x_end, progress),
                lerp(event.y, y_end, progress),
            )
        }
        None => Point::new(event.x, event.y),
    }
}

fn active_event(t: f64, events: &[ZoomEvent]) -> Option<&ZoomEvent> {
    let mut best: Option<&ZoomEvent> = None;
    for e in events.iter().filter(|e| e.is_active_at(t)) {
        if best.is_none_or(|b| e.start_time >= b.start_time) {
            best = Some(e);
        }
    }
    best
}

fn anticipated_event(t: f64, events: &[ZoomEvent]) -> Option<&ZoomEvent> {
    let mut best: Option<&ZoomEvent> = None;
    for e in events
        .iter()
        .filter(|e| e.start_time - ANTICIPATION_SECS <= t && t < e.start_time)
    {
        if best.is_none_or(|b| e.start_time < b.start_time) {
            best = Some(e);
        }
    }
    best
}

#[cfg(test)]
#[path = "../../tests/unit/camera/solver.rs"]
mod tests;

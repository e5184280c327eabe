use crate::{camera::pose::CameraPose, composition::model::CameraSpeed};

/// Frame duration the per-frame smoothing factors are tuned for.
pub const REFERENCE_FRAME_SECS: f64 = 1.0 / 60.0;

/// Displayed camera pose, smoothed toward the solver's target.
///
/// The integrator holds no clock of its own: the host's render loop calls
/// [`Self::tick`] (or [`Self::step`]) once per frame while playing and
/// [`Self::snap`] while paused or seeking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraIntegrator {
    current: CameraPose,
}

impl Default for CameraIntegrator {
    fn default() -> Self {
        Self::new(CameraPose::IDENTITY)
    }
}

impl CameraIntegrator {
    /// Start from `initial`.
    pub fn new(initial: CameraPose) -> Self {
        Self { current: initial }
    }

    /// Pose currently on screen.
    pub fn current(&self) -> CameraPose {
        self.current
    }

    /// Advance one reference frame: `current += (target - current) * factor`.
    pub fn step(&mut self, target: CameraPose, speed: CameraSpeed) -> CameraPose {
        self.blend(target, speed.factor())
    }

    /// Advance by `dt` seconds of playback.
    ///
    /// One [`REFERENCE_FRAME_SECS`] tick equals one [`Self::step`]; other frame
    /// durations compound the factor so the approach rate does not depend on
    /// the display refresh rate.
    pub fn tick(&mut self, target: CameraPose, speed: CameraSpeed, dt: f64) -> CameraPose {
        if !dt.is_finite() || dt <= 0.0 {
            return self.current;
        }
        let frames = dt / REFERENCE_FRAME_SECS;
        let factor = 1.0 - (1.0 - speed.factor()).powf(frames);
        tracing::trace!(dt, factor, "camera tick");
        self.blend(target, factor)
    }

    /// Jump straight to `target` with no smoothing lag.
    pub fn snap(&mut self, target: CameraPose) -> CameraPose {
        self.current = target;
        self.current
    }

    /// Whether every component is within `eps` of `target`.
    pub fn is_settled(&self, target: CameraPose, eps: f64) -> bool {
        self.current.max_abs_diff(target) <= eps
    }

    fn blend(&mut self, target: CameraPose, factor: f64) -> CameraPose {
        self.current = self.current.lerp(target, factor.clamp(0.0, 1.0));
        self.current
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/integrator.rs"]
mod tests;

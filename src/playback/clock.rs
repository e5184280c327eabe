use crate::{
    foundation::core::TimeRange,
    foundation::error::{ReframeError, ReframeResult},
};

/// Largest playback time accepted from the media element, in seconds.
pub const MAX_TIME_SECS: f64 = 1e6;

/// Media duration as reported by the playback element.
///
/// Streamed recordings report an infinite duration until the player has
/// seeked far ahead and back; until then it stays unresolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub enum MediaDuration {
    /// Not known yet.
    #[default]
    Unresolved,
    /// Known, finite and `> 0`.
    Resolved(f64),
}

impl MediaDuration {
    /// Classify a raw reported duration.
    pub fn from_reported(d: f64) -> Self {
        if d.is_finite() && d > 0.0 {
            Self::Resolved(d)
        } else {
            Self::Unresolved
        }
    }

    /// Resolved seconds, if any.
    pub fn secs(self) -> Option<f64> {
        match self {
            Self::Resolved(d) => Some(d),
            Self::Unresolved => None,
        }
    }
}

/// Validated playback position plus loop range.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackClock {
    current_time: f64,
    duration: MediaDuration,
    trim: Option<TimeRange>,
    playing: bool,
}

impl PlaybackClock {
    /// Clock at time 0, paused, duration unresolved, with an optional preset trim range.
    pub fn new(trim: Option<TimeRange>) -> Self {
        Self {
            trim,
            ..Self::default()
        }
    }

    /// Current playback time in seconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Reported media duration.
    pub fn duration(&self) -> MediaDuration {
        self.duration
    }

    /// Loop range, once known.
    pub fn trim(&self) -> Option<TimeRange> {
        self.trim
    }

    /// Whether playback is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start playback.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stop playback; the position is kept.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Accept a time update from the media element.
    ///
    /// NaN, infinite, negative and implausibly large values are rejected and
    /// leave the clock unchanged.
    pub fn set_time(&mut self, t: f64) -> ReframeResult<()> {
        validate_time(t)?;
        self.current_time = t;
        Ok(())
    }

    /// Seek to `t`, clamped into the trim range when one is set.
    pub fn seek(&mut self, t: f64) -> ReframeResult<()> {
        validate_time(t)?;
        self.current_time = match self.trim {
            Some(r) => r.clamp(t),
            None => t,
        };
        Ok(())
    }

    /// Record the reported media duration.
    ///
    /// The first time a duration resolves and no trim range exists yet, the
    /// trim range becomes the whole recording.
    pub fn set_duration(&mut self, reported: f64) {
        self.duration = MediaDuration::from_reported(reported);
        match self.duration {
            MediaDuration::Resolved(d) => {
                if self.trim.is_none() {
                    self.trim = TimeRange::new(0.0, d).ok();
                }
            }
            MediaDuration::Unresolved => {
                tracing::debug!(reported, "media duration unresolved");
            }
        }
    }

    /// Replace the trim range.
    pub fn set_trim(&mut self, trim: TimeRange) -> ReframeResult<()> {
        trim.validate()?;
        self.trim = Some(trim);
        Ok(())
    }

    /// Fraction of the recording played, `0` while the duration is unresolved.
    pub fn progress(&self) -> f64 {
        match self.duration {
            MediaDuration::Resolved(d) => (self.current_time / d).clamp(0.0, 1.0),
            MediaDuration::Unresolved => 0.0,
        }
    }

    /// Advance by `dt` seconds while playing, looping at the trim end.
    ///
    /// Returns the new current time. Paused clocks and invalid `dt` do not move.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if !self.playing || !dt.is_finite() || dt <= 0.0 {
            return self.current_time;
        }
        let mut next = self.current_time + dt;
        if let Some(r) = self.trim
            && (next >= r.end || next < r.start)
        {
            next = r.start;
        }
        if validate_time(next).is_ok() {
            self.current_time = next;
        } else {
            tracing::debug!(next, "playback reached the time ceiling; pausing");
            self.playing = false;
        }
        self.current_time
    }
}

fn validate_time(t: f64) -> ReframeResult<()> {
    if !t.is_finite() {
        tracing::debug!(t, "rejecting non-finite time update");
        return Err(ReframeError::playback("time must be finite"));
    }
    if t < 0.0 {
        tracing::debug!(t, "rejecting negative time update");
        return Err(ReframeError::playback("time must be >= 0"));
    }
    if t > MAX_TIME_SECS {
        tracing::debug!(t, "rejecting out-of-range time update");
        return Err(ReframeError::playback(format!(
            "time must be <= {MAX_TIME_SECS}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;

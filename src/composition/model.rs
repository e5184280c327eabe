use crate::{
    foundation::core::{MIN_RECT_SIZE, NormRect},
    foundation::error::{ReframeError, ReframeResult},
    foundation::math::is_unit,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Interaction that produced a zoom event.
pub enum ZoomEventKind {
    /// Single click.
    Click,
    /// Double click.
    DoubleClick,
    /// Focus change (e.g. a text field gaining focus).
    Focus,
    /// Pointer drag; the camera follows from `(x, y)` to `(x_end, y_end)`.
    Drag,
    /// Text or region selection.
    Selection,
    /// Anything else worth zooming on.
    Generic,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A time-indexed camera zoom request.
pub struct ZoomEvent {
    /// Event identifier (unique within a project).
    pub id: String,
    /// Interaction kind.
    #[serde(rename = "type")]
    pub kind: ZoomEventKind,
    /// Start time in seconds.
    pub start_time: f64,
    /// Active duration in seconds, `> 0`.
    pub duration: f64,
    /// Target x in normalized space.
    pub x: f64,
    /// Target y in normalized space.
    pub y: f64,
    /// Drag end x; only meaningful for [`ZoomEventKind::Drag`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_end: Option<f64>,
    /// Drag end y; only meaningful for [`ZoomEventKind::Drag`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_end: Option<f64>,
    /// Target magnification, `>= 1`.
    pub scale: f64,
}

impl ZoomEvent {
    /// End of the active window (exclusive).
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Active window `[start_time, start_time + duration)`.
    pub fn is_active_at(&self, t: f64) -> bool {
        self.start_time <= t && t < self.end_time()
    }

    /// Drag end point, present only for drag events carrying both coordinates.
    pub fn drag_end(&self) -> Option<(f64, f64)> {
        match (self.kind, self.x_end, self.y_end) {
            (ZoomEventKind::Drag, Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }

    /// Validate ranges and drag-only fields.
    pub fn validate(&self) -> ReframeResult<()> {
        let id = &self.id;
        if id.trim().is_empty() {
            return Err(ReframeError::validation("zoom event id must be non-empty"));
        }
        validate_window(self.start_time, self.duration, "zoom event", id)?;
        if !is_unit(self.x) || !is_unit(self.y) {
            return Err(ReframeError::validation(format!(
                "zoom event '{id}' x/y must be within [0, 1]"
            )));
        }
        if !self.scale.is_finite() || self.scale < 1.0 {
            return Err(ReframeError::validation(format!(
                "zoom event '{id}' scale must be finite and >= 1"
            )));
        }
        match (self.x_end, self.y_end) {
            (None, None) => {}
            (Some(xe), Some(ye)) => {
                if self.kind != ZoomEventKind::Drag {
                    return Err(ReframeError::validation(format!(
                        "zoom event '{id}' x_end/y_end are only allowed on drag events"
                    )));
                }
                if !is_unit(xe) || !is_unit(ye) {
                    return Err(ReframeError::validation(format!(
                        "zoom event '{id}' x_end/y_end must be within [0, 1]"
                    )));
                }
            }
            _ => {
                return Err(ReframeError::validation(format!(
                    "zoom event '{id}' must set both x_end and y_end or neither"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Visual effect applied inside an overlay rectangle.
pub enum OverlayKind {
    /// Blur the region.
    Blur,
    /// Dim everything except the region.
    Spotlight,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A time-scoped rectangle rendered on top of the video.
pub struct OverlayItem {
    /// Overlay identifier (unique within a project).
    pub id: String,
    /// Effect kind.
    #[serde(rename = "type")]
    pub kind: OverlayKind,
    /// Start time in seconds.
    pub start_time: f64,
    /// Duration in seconds, `> 0`.
    pub duration: f64,
    /// Left edge, normalized.
    pub x: f64,
    /// Top edge, normalized.
    pub y: f64,
    /// Width, normalized, `>= 0.05`.
    pub width: f64,
    /// Height, normalized, `>= 0.05`.
    pub height: f64,
}

impl OverlayItem {
    /// Geometry as a rectangle.
    pub fn rect(&self) -> NormRect {
        NormRect::new(self.x, self.y, self.width, self.height)
    }

    /// Overwrite geometry from a rectangle.
    pub fn set_rect(&mut self, r: NormRect) {
        self.x = r.x;
        self.y = r.y;
        self.width = r.width;
        self.height = r.height;
    }

    /// Display window `[start_time, start_time + duration)`.
    pub fn is_active_at(&self, t: f64) -> bool {
        self.start_time <= t && t < self.start_time + self.duration
    }

    /// Validate timing and geometry.
    ///
    /// Position is deliberately unbounded: overlays may be moved partly or
    /// fully off-frame.
    pub fn validate(&self) -> ReframeResult<()> {
        let id = &self.id;
        if id.trim().is_empty() {
            return Err(ReframeError::validation("overlay id must be non-empty"));
        }
        validate_window(self.start_time, self.duration, "overlay", id)?;
        if !self.rect().is_finite() {
            return Err(ReframeError::validation(format!(
                "overlay '{id}' geometry must be finite"
            )));
        }
        if self.width < MIN_RECT_SIZE || self.height < MIN_RECT_SIZE {
            return Err(ReframeError::validation(format!(
                "overlay '{id}' width/height must be >= {MIN_RECT_SIZE}"
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The single global crop rectangle.
pub struct CropState {
    /// Whether cropping is applied.
    pub active: bool,
    /// Left edge, normalized.
    pub x: f64,
    /// Top edge, normalized.
    pub y: f64,
    /// Width, normalized.
    pub width: f64,
    /// Height, normalized.
    pub height: f64,
}

impl Default for CropState {
    fn default() -> Self {
        Self {
            active: false,
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }
}

impl CropState {
    /// Geometry as a rectangle.
    pub fn rect(&self) -> NormRect {
        NormRect::new(self.x, self.y, self.width, self.height)
    }

    /// Overwrite geometry from a rectangle.
    pub fn set_rect(&mut self, r: NormRect) {
        self.x = r.x;
        self.y = r.y;
        self.width = r.width;
        self.height = r.height;
    }

    /// Validate geometry: finite with a positive size.
    ///
    /// Position is not bounded to the frame; corner resizes may push an edge
    /// past the border.
    pub fn validate(&self) -> ReframeResult<()> {
        if !self.rect().is_finite() {
            return Err(ReframeError::validation("crop geometry must be finite"));
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ReframeError::validation("crop width/height must be > 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How quickly the displayed camera chases its target during playback.
pub enum CameraSpeed {
    /// Factor 0.03 per frame.
    Slow,
    /// Factor 0.08 per frame.
    #[default]
    Default,
    /// Factor 0.15 per frame.
    Fast,
}

impl CameraSpeed {
    /// Per-frame lerp factor.
    pub fn factor(self) -> f64 {
        match self {
            Self::Slow => 0.03,
            Self::Default => 0.08,
            Self::Fast => 0.15,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Camera configuration shared by the solver and integrator.
pub struct CameraSettings {
    /// When `false`, zoom events are ignored and the camera shows the full frame.
    #[serde(default = "default_auto_zoom")]
    pub auto_zoom: bool,
    /// Resting zoom between events, `>= 1`.
    #[serde(default = "default_static_zoom")]
    pub static_zoom: f64,
    /// Smoothing speed.
    #[serde(default)]
    pub speed: CameraSpeed,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            auto_zoom: default_auto_zoom(),
            static_zoom: default_static_zoom(),
            speed: CameraSpeed::default(),
        }
    }
}

impl CameraSettings {
    /// Validate the static zoom level.
    pub fn validate(&self) -> ReframeResult<()> {
        if !self.static_zoom.is_finite() || self.static_zoom < 1.0 {
            return Err(ReframeError::validation(
                "settings static_zoom must be finite and >= 1",
            ));
        }
        Ok(())
    }
}

fn default_auto_zoom() -> bool {
    true
}

fn default_static_zoom() -> f64 {
    1.0
}

fn validate_window(start: f64, duration: f64, kind: &str, id: &str) -> ReframeResult<()> {
    if !start.is_finite() || start < 0.0 {
        return Err(ReframeError::validation(format!(
            "{kind} '{id}' start_time must be finite and >= 0"
        )));
    }
    if !duration.is_finite() || duration <= 0.0 {
        return Err(ReframeError::validation(format!(
            "{kind} '{id}' duration must be finite and > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;

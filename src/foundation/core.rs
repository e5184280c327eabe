use crate::foundation::error::{ReframeError, ReframeResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Minimum width/height of any editable rectangle, in normalized units.
pub const MIN_RECT_SIZE: f64 = 0.05;

/// Axis-aligned rectangle in normalized video space (origin top-left).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NormRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl NormRect {
    /// The full video frame `[0,1]x[0,1]`.
    pub const FULL: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    /// Build a rectangle from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not.
    pub fn contains(self, p: Point) -> bool {
        self.x <= p.x && p.x < self.right() && self.y <= p.y && p.y < self.bottom()
    }

    /// Convert to a kurbo rectangle in the same space.
    pub fn to_kurbo(self) -> Rect {
        Rect::new(self.x, self.y, self.right(), self.bottom())
    }

    /// Corner point for a handle position (`left`, `top` select the corner).
    pub fn corner(self, left: bool, top: bool) -> Point {
        Point::new(
            if left { self.x } else { self.right() },
            if top { self.y } else { self.bottom() },
        )
    }

    pub(crate) fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Pixel size of the element hosting the video plane.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContainerSize {
    /// Width in CSS/screen pixels.
    pub width: f64,
    /// Height in CSS/screen pixels.
    pub height: f64,
}

impl ContainerSize {
    /// Validate and build a container size; both sides must be finite and `> 0`.
    pub fn new(width: f64, height: f64) -> ReframeResult<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(ReframeError::validation(
                "container width/height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }
}

/// Time window in seconds, `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeRange {
    /// Inclusive start.
    pub start: f64,
    /// Exclusive end.
    pub end: f64,
}

impl TimeRange {
    /// Build a range; `start` must be finite, `>= 0` and strictly less than `end`.
    pub fn new(start: f64, end: f64) -> ReframeResult<Self> {
        let r = Self { start, end };
        r.validate()?;
        Ok(r)
    }

    /// Check the range invariants.
    pub fn validate(self) -> ReframeResult<()> {
        if !(self.start.is_finite() && self.end.is_finite()) {
            return Err(ReframeError::validation("time range must be finite"));
        }
        if self.start < 0.0 {
            return Err(ReframeError::validation("time range start must be >= 0"));
        }
        if self.start >= self.end {
            return Err(ReframeError::validation("time range start must be < end"));
        }
        Ok(())
    }

    /// Range length in seconds.
    pub fn len_secs(self) -> f64 {
        self.end - self.start
    }

    /// Half-open membership test.
    pub fn contains(self, t: f64) -> bool {
        self.start <= t && t < self.end
    }

    /// Clamp `t` into `[start, end]`.
    pub fn clamp(self, t: f64) -> f64 {
        t.clamp(self.start, self.end)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

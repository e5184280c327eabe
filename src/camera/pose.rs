use crate::foundation::core::{Affine, ContainerSize, Point, Vec2};
use crate::foundation::math::{clamp, lerp};

/// Virtual camera: the normalized point held at viewport center plus magnification.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraPose {
    /// Center x in normalized video space.
    pub x: f64,
    /// Center y in normalized video space.
    pub y: f64,
    /// Magnification, `>= 1`.
    pub zoom: f64,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CameraPose {
    /// Full frame, centered, unmagnified.
    pub const IDENTITY: Self = Self {
        x: 0.5,
        y: 0.5,
        zoom: 1.0,
    };

    /// Build a pose without clamping.
    pub fn new(x: f64, y: f64, zoom: f64) -> Self {
        Self { x, y, zoom }
    }

    /// Centered pose at the given zoom.
    pub fn centered(zoom: f64) -> Self {
        Self::new(0.5, 0.5, zoom)
    }

    /// Half extent of the visible window in normalized units (`0.5 / zoom`).
    pub fn half_extent(self) -> f64 {
        0.5 / self.zoom
    }

    /// Floor zoom at 1 and clamp the center so the viewport never shows
    /// anything outside `[0,1]x[0,1]`.
    pub fn clamped(self) -> Self {
        let zoom = if self.zoom.is_finite() {
            self.zoom.max(1.0)
        } else {
            1.0
        };
        let half = 0.5 / zoom;
        Self {
            x: clamp(self.x, half, 1.0 - half),
            y: clamp(self.y, half, 1.0 - half),
            zoom,
        }
    }

    /// Componentwise interpolation toward `to`.
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            zoom: lerp(self.zoom, to.zoom, t),
        }
    }

    /// Largest componentwise distance to `other`.
    pub fn max_abs_diff(self, other: Self) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.zoom - other.zoom).abs())
    }

    /// Translation applied before scaling, as fractions of the container size.
    pub fn translate_fraction(self) -> Vec2 {
        Vec2::new(0.5 - self.x * self.zoom, 0.5 - self.y * self.zoom)
    }

    /// CSS transform (origin top-left) that renders this pose.
    pub fn css_transform(self) -> String {
        let t = self.translate_fraction();
        format!(
            "translate({}%, {}%) scale({})",
            t.x * 100.0,
            t.y * 100.0,
            self.zoom
        )
    }
}

/// Pose bound to a container: maps between normalized content and screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pose: CameraPose,
    container: ContainerSize,
}

impl ViewTransform {
    /// Bind `pose` to `container`.
    pub fn new(pose: CameraPose, container: ContainerSize) -> Self {
        Self { pose, container }
    }

    /// Displayed camera zoom.
    pub fn zoom(self) -> f64 {
        self.pose.zoom
    }

    /// Normalized content space -> container pixels.
    pub fn to_screen(self) -> Affine {
        let t = self.pose.translate_fraction();
        Affine::scale_non_uniform(self.container.width, self.container.height)
            * Affine::translate(t)
            * Affine::scale(self.pose.zoom)
    }

    /// Container pixels -> normalized content space.
    pub fn to_normalized(self) -> Affine {
        self.to_screen().inverse()
    }

    /// Map a container pixel position to normalized content space.
    pub fn screen_to_normalized(self, p: Point) -> Point {
        Point::new(
            self.pose.x + (p.x / self.container.width - 0.5) / self.pose.zoom,
            self.pose.y + (p.y / self.container.height - 0.5) / self.pose.zoom,
        )
    }

    /// Convert a pixel delta into a normalized delta at the current zoom.
    ///
    /// Magnified content moves `zoom` times faster on screen, so one pixel
    /// covers `1 / (size * zoom)` normalized units. This is the linear part of
    /// [`Self::screen_to_normalized`], which keeps a dragged box under the pointer.
    pub fn screen_delta_to_normalized(self, d: Vec2) -> Vec2 {
        Vec2::new(
            d.x / (self.container.width * self.pose.zoom),
            d.y / (self.container.height * self.pose.zoom),
        )
    }

    /// Scale for handle visuals so they keep a constant on-screen size.
    /// Never apply this to hit-test geometry.
    pub fn handle_scale(self) -> f64 {
        1.0 / self.pose.zoom
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/pose.rs"]
mod tests;

use crate::{
    camera::pose::ViewTransform,
    composition::project::Project,
    editing::hit_test::{Handle, HitTarget},
    foundation::core::{MIN_RECT_SIZE, NormRect, Point, Vec2},
    foundation::error::{ReframeError, ReframeResult},
    foundation::math::clamp,
};

/// Kind of geometry edit a gesture performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditMode {
    /// Translate an overlay; position is not bounded.
    MoveOverlay,
    /// Drag an overlay corner.
    ResizeOverlay,
    /// Translate the crop, kept inside the frame.
    MoveCrop,
    /// Drag a crop corner; same edge rule as overlays.
    ResizeCrop,
}

/// Result of feeding one pointer move into a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionUpdate {
    /// Geometry was written; carries the new rectangle.
    Applied(NormRect),
    /// The target no longer exists; nothing was written and the session is finished.
    Aborted,
}

/// One in-progress drag gesture.
///
/// Created on pointer-down, fed pointer moves, consumed by [`Self::end`] on
/// pointer-up. Every update writes straight into the [`Project`]: there is no
/// preview buffer and nothing to commit or roll back.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEditSession {
    mode: EditMode,
    target_id: Option<String>,
    handle: Option<Handle>,
    origin: Point,
    initial: NormRect,
}

impl PointerEditSession {
    /// Start a gesture on `target` at `origin` (container pixels), snapshotting
    /// the target's current geometry.
    pub fn begin(target: &HitTarget, origin: Point, project: &Project) -> ReframeResult<Self> {
        let (mode, target_id, handle) = match target {
            HitTarget::OverlayBody { id } => (EditMode::MoveOverlay, Some(id.clone()), None),
            HitTarget::OverlayHandle { id, handle } => {
                (EditMode::ResizeOverlay, Some(id.clone()), Some(*handle))
            }
            HitTarget::CropBody => (EditMode::MoveCrop, None, None),
            HitTarget::CropHandle { handle } => (EditMode::ResizeCrop, None, Some(*handle)),
            HitTarget::Empty => {
                return Err(ReframeError::edit("nothing to edit under the pointer"));
            }
        };

        let initial = match &target_id {
            Some(id) => project
                .overlay(id)
                .ok_or_else(|| ReframeError::edit(format!("overlay '{id}' does not exist")))?
                .rect(),
            None => project.crop.rect(),
        };

        tracing::debug!(?mode, ?target_id, ?handle, "edit session begin");
        Ok(Self {
            mode,
            target_id,
            handle,
            origin,
            initial,
        })
    }

    /// Gesture kind.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Overlay being edited, if any.
    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    /// Grabbed corner for resize gestures.
    pub fn handle(&self) -> Option<Handle> {
        self.handle
    }

    /// Geometry captured at pointer-down.
    pub fn initial(&self) -> NormRect {
        self.initial
    }

    /// Apply the pointer at `pointer` (container pixels).
    ///
    /// The pixel delta from the origin is converted to normalized units through
    /// `view`, whose zoom is the displayed camera zoom.
    pub fn update(
        &self,
        pointer: Point,
        view: ViewTransform,
        project: &mut Project,
    ) -> SessionUpdate {
        let d = view.screen_delta_to_normalized(pointer - self.origin);
        let next = match self.mode {
            EditMode::MoveOverlay => moved(self.initial, d),
            EditMode::ResizeOverlay | EditMode::ResizeCrop => {
                resized(self.initial, self.handle_or_default(), d)
            }
            EditMode::MoveCrop => moved_within_frame(self.initial, d),
        };

        match &self.target_id {
            Some(id) => match project.overlay_mut(id) {
                Some(o) => o.set_rect(next),
                None => {
                    tracing::debug!(id = %id, "edit target vanished; aborting session");
                    return SessionUpdate::Aborted;
                }
            },
            None => project.crop.set_rect(next),
        }
        SessionUpdate::Applied(next)
    }

    /// Finish the gesture. The geometry already written stays as is.
    pub fn end(self) {
        tracing::debug!(mode = ?self.mode, target_id = ?self.target_id, "edit session end");
    }

    fn handle_or_default(&self) -> Handle {
        self.handle.unwrap_or(Handle::BottomRight)
    }
}

fn moved(r: NormRect, d: Vec2) -> NormRect {
    NormRect::new(r.x + d.x, r.y + d.y, r.width, r.height)
}

fn moved_within_frame(r: NormRect, d: Vec2) -> NormRect {
    NormRect::new(
        clamp(r.x + d.x, 0.0, 1.0 - r.width),
        clamp(r.y + d.y, 0.0, 1.0 - r.height),
        r.width,
        r.height,
    )
}

/// Move the grabbed edges by `d`, flooring the size at [`MIN_RECT_SIZE`].
fn resized(r: NormRect, handle: Handle, d: Vec2) -> NormRect {
    let mut out = r;
    if handle.is_left() {
        out.x += d.x;
        out.width -= d.x;
    } else {
        out.width += d.x;
    }
    if handle.is_top() {
        out.y += d.y;
        out.height -= d.y;
    } else {
        out.height += d.y;
    }
    out.width = out.width.max(MIN_RECT_SIZE);
    out.height = out.height.max(MIN_RECT_SIZE);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/editing/session.rs"]
mod tests;

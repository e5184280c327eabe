use crate::{
    composition::model::{CropState, OverlayItem},
    composition::project::Project,
    editing::selection::Selection,
};

#[derive(Clone, Debug, serde::Serialize)]
/// Items the rendering layer must draw at one instant.
pub struct VisibleItems<'a> {
    /// Overlays to draw, in project order (later entries on top).
    pub overlays: Vec<&'a OverlayItem>,
    /// The crop, when cropping is applied.
    pub crop: Option<&'a CropState>,
    /// Crop box and handles must be drawn for editing.
    pub crop_editable: bool,
}

impl VisibleItems<'_> {
    /// Ids of the visible overlays.
    pub fn overlay_ids(&self) -> impl Iterator<Item = &str> {
        self.overlays.iter().map(|o| o.id.as_str())
    }
}

/// Decides which overlays and crop state are shown at a playback time.
pub struct VisibilitySelector;

impl VisibilitySelector {
    /// Overlay rule: inside its `[start, start + duration)` window, or currently
    /// selected (so it can be positioned before its window is reached).
    pub fn is_overlay_visible(overlay: &OverlayItem, t: f64, selection: &Selection) -> bool {
        selection.is_overlay_selected(&overlay.id) || (t.is_finite() && overlay.is_active_at(t))
    }

    /// Everything visible at `t`.
    pub fn select<'a>(t: f64, project: &'a Project, selection: &Selection) -> VisibleItems<'a> {
        let overlays = project
            .overlays
            .iter()
            .filter(|o| Self::is_overlay_visible(o, t, selection))
            .collect();
        let crop_editable = selection.is_crop_selected();
        VisibleItems {
            overlays,
            crop: (project.crop.active && !crop_editable).then_some(&project.crop),
            crop_editable,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/visibility.rs"]
mod tests;

/// Exclusive editing selection: one overlay, the crop, or nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// One overlay, by id.
    Overlay(String),
    /// The crop rectangle is in editing mode.
    Crop,
}

impl Selection {
    /// Select an overlay, replacing any previous selection.
    pub fn select_overlay(&mut self, id: impl Into<String>) {
        *self = Self::Overlay(id.into());
    }

    /// Enter crop editing, replacing any previous selection.
    pub fn select_crop(&mut self) {
        *self = Self::Crop;
    }

    /// Drop the selection (empty-canvas click).
    pub fn clear(&mut self) {
        *self = Self::None;
    }

    /// Selected overlay id, if an overlay is selected.
    pub fn overlay_id(&self) -> Option<&str> {
        match self {
            Self::Overlay(id) => Some(id),
            _ => None,
        }
    }

    /// Whether the overlay `id` is selected.
    pub fn is_overlay_selected(&self, id: &str) -> bool {
        self.overlay_id() == Some(id)
    }

    /// Whether crop editing is active.
    pub fn is_crop_selected(&self) -> bool {
        matches!(self, Self::Crop)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editing/selection.rs"]
mod tests;

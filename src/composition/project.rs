use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::{
    composition::model::{CameraSettings, CropState, OverlayItem, ZoomEvent},
    foundation::core::TimeRange,
    foundation::error::{ReframeError, ReframeResult},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Editable project document: zoom events, overlays, crop and camera settings.
///
/// A project is plain data that can be:
/// - loaded from JSON ([`Project::from_path`], [`Project::from_reader`])
/// - edited from the canvas (see [`crate::Editor`]) or from timeline tracks
///   through [`Project::overlay_mut`] / [`Project::crop_mut`]
pub struct Project {
    /// Camera configuration.
    #[serde(default)]
    pub settings: CameraSettings,
    /// Playback loop range; `None` until known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<TimeRange>,
    /// Zoom events in timeline order.
    pub events: Vec<ZoomEvent>,
    /// Overlay rectangles.
    #[serde(default)]
    pub overlays: Vec<OverlayItem>,
    /// Global crop.
    #[serde(default)]
    pub crop: CropState,
}

impl Project {
    /// Parse a project from a JSON reader. The result is not validated.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReframeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ReframeError::serde(format!("parse project JSON: {e}")))
    }

    /// Parse a project from a JSON file on disk and validate it.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> ReframeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open project JSON '{}'", path.display()))?;
        let project = Self::from_reader(BufReader::new(f))?;
        project.validate()?;
        tracing::debug!(
            events = project.events.len(),
            overlays = project.overlays.len(),
            "project loaded"
        );
        Ok(project)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ReframeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReframeError::serde(format!("write project JSON: {e}")))
    }

    /// Validate every event, overlay, the crop, settings and id uniqueness.
    pub fn validate(&self) -> ReframeResult<()> {
        self.settings.validate()?;
        if let Some(trim) = self.trim {
            trim.validate()?;
        }

        let mut seen = BTreeSet::new();
        for e in &self.events {
            e.validate()?;
            if !seen.insert(e.id.as_str()) {
                return Err(ReframeError::validation(format!(
                    "duplicate zoom event id '{}'",
                    e.id
                )));
            }
        }

        let mut seen = BTreeSet::new();
        for o in &self.overlays {
            o.validate()?;
            if !seen.insert(o.id.as_str()) {
                return Err(ReframeError::validation(format!(
                    "duplicate overlay id '{}'",
                    o.id
                )));
            }
        }

        self.crop.validate()
    }

    /// Look up an overlay by id.
    pub fn overlay(&self, id: &str) -> Option<&OverlayItem> {
        self.overlays.iter().find(|o| o.id == id)
    }

    /// Look up an overlay by id for editing.
    pub fn overlay_mut(&mut self, id: &str) -> Option<&mut OverlayItem> {
        self.overlays.iter_mut().find(|o| o.id == id)
    }

    /// Remove an overlay, returning it if it existed.
    pub fn remove_overlay(&mut self, id: &str) -> Option<OverlayItem> {
        let idx = self.overlays.iter().position(|o| o.id == id)?;
        Some(self.overlays.remove(idx))
    }

    /// Mutable access to the crop.
    pub fn crop_mut(&mut self) -> &mut CropState {
        &mut self.crop
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/project.rs"]
mod tests;

use crate::{
    camera::integrator::CameraIntegrator,
    camera::pose::{CameraPose, ViewTransform},
    camera::solver::{CameraSolver, SolvedCamera},
    composition::project::Project,
    editing::hit_test::{HitTarget, hit_test},
    editing::selection::Selection,
    editing::session::{PointerEditSession, SessionUpdate},
    eval::visibility::{VisibilitySelector, VisibleItems},
    foundation::core::{ContainerSize, Point},
    foundation::error::ReframeResult,
    playback::clock::PlaybackClock,
};

/// Host-facing editor state for one project.
///
/// All mutation goes through `&mut self`, so the frame loop (which writes the
/// camera) and pointer handling (which only reads the camera zoom) are
/// serialized by ownership. Hosts on several threads wrap the editor in one
/// lock or drive it from one task.
pub struct Editor {
    project: Project,
    clock: PlaybackClock,
    camera: CameraIntegrator,
    target: SolvedCamera,
    selection: Selection,
    session: Option<PointerEditSession>,
    container: ContainerSize,
}

impl Editor {
    /// Validate `project` and build a paused editor at time 0 with the camera
    /// snapped to its target.
    #[tracing::instrument(skip(project))]
    pub fn new(project: Project, container: ContainerSize) -> ReframeResult<Self> {
        project.validate()?;
        let clock = PlaybackClock::new(project.trim);
        let target = CameraSolver::solve_detailed(
            clock.current_time(),
            &project.events,
            &project.settings,
        );
        let camera = CameraIntegrator::new(target.pose);
        Ok(Self {
            project,
            clock,
            camera,
            target,
            selection: Selection::default(),
            session: None,
            container,
        })
    }

    /// Project being edited.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Mutable project access for edits that originate outside the canvas
    /// (timeline tracks, sidebar). The camera target refreshes on the next frame.
    pub fn project_mut(&mut self) -> &mut Project {
        &mut self.project
    }

    /// Playback state.
    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Pose on screen.
    pub fn camera_pose(&self) -> CameraPose {
        self.camera.current()
    }

    /// Latest solver output.
    pub fn target(&self) -> &SolvedCamera {
        &self.target
    }

    /// Container size used for pointer mapping.
    pub fn container(&self) -> ContainerSize {
        self.container
    }

    /// Update the container size after a layout change.
    pub fn set_container(&mut self, container: ContainerSize) {
        self.container = container;
    }

    /// Current view transform (displayed pose bound to the container).
    pub fn view(&self) -> ViewTransform {
        ViewTransform::new(self.camera.current(), self.container)
    }

    /// Start playback; the camera resumes smoothing from where it is.
    pub fn play(&mut self) {
        self.clock.play();
    }

    /// Stop playback and snap the camera onto the exact target.
    pub fn pause(&mut self) {
        self.clock.pause();
        self.resolve_and_snap();
    }

    /// Record the media element's reported duration (may be unresolved).
    pub fn set_media_duration(&mut self, reported: f64) {
        self.clock.set_duration(reported);
    }

    /// Accept a time update from the media element without snapping.
    pub fn set_time(&mut self, t: f64) -> ReframeResult<()> {
        self.clock.set_time(t)
    }

    /// Seek to `t` and snap the camera so the still frame is exact.
    pub fn seek(&mut self, t: f64) -> ReframeResult<CameraPose> {
        self.clock.seek(t)?;
        Ok(self.resolve_and_snap())
    }

    /// One render-loop frame of `dt` seconds; returns the pose to draw.
    ///
    /// Playing frames advance the clock and smooth toward the target; paused
    /// frames snap.
    pub fn frame(&mut self, dt: f64) -> CameraPose {
        if !self.clock.is_playing() {
            return self.resolve_and_snap();
        }
        self.clock.advance(dt);
        self.resolve_target();
        self.camera
            .tick(self.target.pose, self.project.settings.speed, dt)
    }

    /// Items to render at the current time.
    pub fn visible_items(&self) -> VisibleItems<'_> {
        VisibilitySelector::select(self.clock.current_time(), &self.project, &self.selection)
    }

    /// Select an overlay (e.g. from the timeline).
    pub fn select_overlay(&mut self, id: impl Into<String>) {
        self.selection.select_overlay(id);
    }

    /// Enter crop editing.
    pub fn select_crop(&mut self) {
        self.selection.select_crop();
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Whether a drag gesture is in progress.
    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// Pointer pressed at `point` (container pixels).
    ///
    /// Updates the selection from what was hit and opens an edit session for
    /// anything editable. A press on empty canvas clears the selection.
    pub fn pointer_down(&mut self, point: Point) -> ReframeResult<HitTarget> {
        if let Some(stale) = self.session.take() {
            stale.end();
        }
        let hit = {
            let visible = self.visible_items();
            hit_test(point, &self.project, &visible, &self.selection, self.view())
        };
        match &hit {
            HitTarget::OverlayBody { id } | HitTarget::OverlayHandle { id, .. } => {
                self.selection.select_overlay(id.clone());
            }
            HitTarget::CropBody | HitTarget::CropHandle { .. } => {}
            HitTarget::Empty => {
                self.selection.clear();
                return Ok(hit);
            }
        }
        self.session = Some(PointerEditSession::begin(&hit, point, &self.project)?);
        Ok(hit)
    }

    /// Pointer moved to `point`; returns `None` when no gesture is active.
    pub fn pointer_move(&mut self, point: Point) -> Option<SessionUpdate> {
        let view = self.view();
        let session = self.session.as_ref()?;
        let update = session.update(point, view, &mut self.project);
        if update == SessionUpdate::Aborted {
            if let Some(s) = self.session.take() {
                s.end();
            }
        }
        Some(update)
    }

    /// Pointer released: end any gesture.
    pub fn pointer_up(&mut self) {
        if let Some(s) = self.session.take() {
            s.end();
        }
    }

    fn resolve_target(&mut self) {
        self.target = CameraSolver::solve_detailed(
            self.clock.current_time(),
            &self.project.events,
            &self.project.settings,
        );
    }

    fn resolve_and_snap(&mut self) -> CameraPose {
        self.resolve_target();
        self.camera.snap(self.target.pose)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/editor.rs"]
mod tests;

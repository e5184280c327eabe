//! reframe turns a recorded screen capture into a directed video: a virtual
//! camera pans and zooms over the static video plane, driven by a timeline of
//! interaction events, while the user repositions overlay regions and a crop.
//!
//! # Per-frame flow
//!
//! 1. **Clock**: the host feeds playback time into [`PlaybackClock`] (invalid
//!    times are rejected before they reach the camera math).
//! 2. **Solve**: [`CameraSolver`] maps `time + events -> target pose` (pure).
//! 3. **Integrate**: [`CameraIntegrator`] smooths toward the target while
//!    playing and snaps while paused or seeking.
//! 4. **Render** (host): apply [`CameraPose::css_transform`] or
//!    [`ViewTransform::to_screen`] and draw [`VisibleItems`].
//!
//! Independently, pointer gestures open a [`PointerEditSession`] that moves and
//! resizes overlays and the crop in normalized space, scaling pointer deltas by
//! the displayed zoom. [`Editor`] wires all of this together for a host.
//!
//! All geometry is in normalized video space: the frame spans `[0,1]x[0,1]`
//! with the origin at the top-left.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod camera;
mod composition;
mod editing;
mod eval;
mod foundation;
mod playback;
mod session;

pub use animation::ease::Ease;
pub use camera::integrator::{CameraIntegrator, REFERENCE_FRAME_SECS};
pub use camera::pose::{CameraPose, ViewTransform};
pub use camera::solver::{
    ANTICIPATION_PAN, ANTICIPATION_SECS, ANTICIPATION_ZOOM, CameraPhase, CameraSolver,
    SolvedCamera, TRANSITION_SECS, effective_target,
};
pub use composition::model::{
    CameraSettings, CameraSpeed, CropState, OverlayItem, OverlayKind, ZoomEvent, ZoomEventKind,
};
pub use composition::project::Project;
pub use editing::hit_test::{HANDLE_HIT_RADIUS_PX, Handle, HitTarget, hit_test};
pub use editing::selection::Selection;
pub use editing::session::{EditMode, PointerEditSession, SessionUpdate};
pub use eval::visibility::{VisibilitySelector, VisibleItems};
pub use foundation::core::{
    Affine, ContainerSize, MIN_RECT_SIZE, NormRect, Point, Rect, TimeRange, Vec2,
};
pub use foundation::error::{ReframeError, ReframeResult};
pub use foundation::math::{clamp, lerp};
pub use playback::clock::{MAX_TIME_SECS, MediaDuration, PlaybackClock};
pub use session::editor::Editor;

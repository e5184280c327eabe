use super::*;
use crate::{
    camera::solver::CameraPhase,
    composition::model::{CameraSettings, OverlayItem, OverlayKind, ZoomEvent, ZoomEventKind},
    foundation::core::TimeRange,
};

fn project() -> Project {
    Project {
        settings: CameraSettings::default(),
        trim: None,
        events: vec![ZoomEvent {
            id: "e1".to_string(),
            kind: ZoomEventKind::Click,
            start_time: 2.0,
            duration: 2.5,
            x: 0.5,
            y: 0.5,
            x_end: None,
            y_end: None,
            scale: 2.0,
        }],
        overlays: vec![OverlayItem {
            id: "o1".to_string(),
            kind: OverlayKind::Blur,
            start_time: 5.0,
            duration: 1.0,
            x: 0.25,
            y: 0.25,
            width: 0.5,
            height: 0.5,
        }],
        crop: Default::default(),
    }
}

fn editor() -> Editor {
    Editor::new(project(), ContainerSize::new(1000.0, 500.0).unwrap()).unwrap()
}

#[test]
fn new_rejects_invalid_projects() {
    let mut p = project();
    p.events[0].scale = 0.5;
    assert!(Editor::new(p, ContainerSize::new(10.0, 10.0).unwrap()).is_err());
}

#[test]
fn seek_snaps_to_exact_target() {
    let mut ed = editor();
    let pose = ed.seek(3.0).unwrap();
    assert_eq!(pose, CameraPose::new(0.5, 0.5, 2.0));
    assert_eq!(ed.camera_pose(), pose);
    assert_eq!(ed.target().phase, CameraPhase::Hold("e1".to_string()));
}

#[test]
fn rejected_seek_keeps_state() {
    let mut ed = editor();
    ed.seek(3.0).unwrap();
    assert!(ed.seek(f64::NAN).is_err());
    assert!(ed.set_time(-1.0).is_err());
    assert_eq!(ed.clock().current_time(), 3.0);
}

#[test]
fn playing_frames_smooth_and_pause_snaps() {
    let mut ed = editor();
    ed.seek(2.9).unwrap();
    ed.seek(0.0).unwrap();
    assert_eq!(ed.camera_pose(), CameraPose::IDENTITY);

    ed.play();
    // Jump the clock into the hold phase; the camera lags behind.
    ed.set_time(3.0).unwrap();
    let pose = ed.frame(crate::camera::integrator::REFERENCE_FRAME_SECS);
    assert!(pose.zoom > 1.0 && pose.zoom < 2.0);

    ed.pause();
    assert_eq!(ed.camera_pose(), ed.target().pose);
}

#[test]
fn paused_frame_does_not_advance_time() {
    let mut ed = editor();
    ed.seek(1.0).unwrap();
    ed.frame(0.5);
    assert_eq!(ed.clock().current_time(), 1.0);
}

#[test]
fn playback_loops_inside_trim() {
    let mut p = project();
    p.trim = Some(TimeRange::new(1.0, 1.5).unwrap());
    let mut ed = Editor::new(p, ContainerSize::new(100.0, 100.0).unwrap()).unwrap();
    ed.seek(1.4).unwrap();
    ed.play();
    ed.frame(0.2);
    assert_eq!(ed.clock().current_time(), 1.0);
}

#[test]
fn drag_overlay_before_its_window() {
    let mut ed = editor();
    ed.seek(0.0).unwrap();
    // Not visible yet, so a press on it hits nothing and clears selection.
    let hit = ed.pointer_down(Point::new(500.0, 250.0)).unwrap();
    assert_eq!(hit, HitTarget::Empty);
    assert!(!ed.is_editing());

    // Selecting it from the timeline makes it visible and draggable.
    ed.select_overlay("o1");
    let hit = ed.pointer_down(Point::new(500.0, 250.0)).unwrap();
    assert_eq!(
        hit,
        HitTarget::OverlayBody {
            id: "o1".to_string()
        }
    );
    assert!(ed.is_editing());
    let update = ed.pointer_move(Point::new(600.0, 250.0)).unwrap();
    assert!(matches!(update, SessionUpdate::Applied(_)));
    assert!((ed.project().overlay("o1").unwrap().x - 0.35).abs() < 1e-9);

    ed.pointer_up();
    assert!(!ed.is_editing());
    assert_eq!(ed.pointer_move(Point::new(700.0, 250.0)), None);
}

#[test]
fn pointer_delta_uses_displayed_zoom() {
    let mut ed = editor();
    ed.seek(3.0).unwrap();
    ed.select_overlay("o1");
    ed.pointer_down(Point::new(500.0, 250.0)).unwrap();
    ed.pointer_move(Point::new(600.0, 250.0)).unwrap();
    // 100 px at zoom 2 over 1000 px = 0.05.
    assert!((ed.project().overlay("o1").unwrap().x - 0.30).abs() < 1e-9);
}

#[test]
fn deleting_target_mid_drag_aborts_session() {
    let mut ed = editor();
    ed.select_overlay("o1");
    ed.pointer_down(Point::new(500.0, 250.0)).unwrap();
    ed.project_mut().remove_overlay("o1");
    assert_eq!(
        ed.pointer_move(Point::new(550.0, 250.0)),
        Some(SessionUpdate::Aborted)
    );
    assert!(!ed.is_editing());
}

#[test]
fn empty_click_clears_selection() {
    let mut ed = editor();
    ed.seek(5.5).unwrap();
    ed.pointer_down(Point::new(500.0, 250.0)).unwrap();
    assert_eq!(ed.selection().overlay_id(), Some("o1"));
    ed.pointer_up();
    ed.pointer_down(Point::new(10.0, 10.0)).unwrap();
    assert_eq!(ed.selection(), &Selection::None);
}

#[test]
fn crop_editing_moves_crop_inside_frame() {
    let mut ed = editor();
    {
        let crop = ed.project_mut().crop_mut();
        crop.active = true;
        crop.x = 0.25;
        crop.y = 0.25;
        crop.width = 0.5;
        crop.height = 0.5;
    }
    ed.select_crop();
    let hit = ed.pointer_down(Point::new(500.0, 250.0)).unwrap();
    assert_eq!(hit, HitTarget::CropBody);
    ed.pointer_move(Point::new(2000.0, 250.0)).unwrap();
    assert_eq!(ed.project().crop.x, 0.5);
    assert!(ed.visible_items().crop_editable);
}

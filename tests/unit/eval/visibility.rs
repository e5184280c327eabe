use super::*;
use crate::composition::model::OverlayKind;

fn overlay(id: &str, start: f64, duration: f64) -> OverlayItem {
    OverlayItem {
        id: id.to_string(),
        kind: OverlayKind::Blur,
        start_time: start,
        duration,
        x: 0.1,
        y: 0.1,
        width: 0.2,
        height: 0.2,
    }
}

fn project() -> Project {
    Project {
        overlays: vec![overlay("a", 1.0, 2.0), overlay("b", 2.0, 2.0)],
        ..Project::default()
    }
}

#[test]
fn window_is_half_open() {
    let o = overlay("a", 1.0, 2.0);
    let none = Selection::None;
    assert!(!VisibilitySelector::is_overlay_visible(&o, 0.99, &none));
    assert!(VisibilitySelector::is_overlay_visible(&o, 1.0, &none));
    assert!(VisibilitySelector::is_overlay_visible(&o, 2.99, &none));
    assert!(!VisibilitySelector::is_overlay_visible(&o, 3.0, &none));
}

#[test]
fn selected_overlay_stays_visible_outside_window() {
    let p = project();
    let sel = Selection::Overlay("b".to_string());
    let ids: Vec<_> = VisibilitySelector::select(0.0, &p, &sel)
        .overlay_ids()
        .map(str::to_string)
        .collect();
    assert_eq!(ids, vec!["b".to_string()]);
}

#[test]
fn overlapping_windows_keep_project_order() {
    let p = project();
    let v = VisibilitySelector::select(2.5, &p, &Selection::None);
    assert_eq!(v.overlay_ids().collect::<Vec<_>>(), vec!["a", "b"]);
    assert!(v.crop.is_none());
    assert!(!v.crop_editable);
}

#[test]
fn crop_is_applied_unless_being_edited() {
    let mut p = project();
    p.crop.active = true;
    assert!(VisibilitySelector::select(0.0, &p, &Selection::None).crop.is_some());

    let editing = VisibilitySelector::select(0.0, &p, &Selection::Crop);
    assert!(editing.crop.is_none());
    assert!(editing.crop_editable);
}

#[test]
fn non_finite_time_shows_only_selection() {
    let p = project();
    let v = VisibilitySelector::select(f64::NAN, &p, &Selection::Overlay("a".to_string()));
    assert_eq!(v.overlay_ids().collect::<Vec<_>>(), vec!["a"]);
}

use super::*;

#[test]
fn selecting_replaces_previous() {
    let mut sel = Selection::default();
    sel.select_overlay("a");
    assert!(sel.is_overlay_selected("a"));
    sel.select_overlay("b");
    assert!(!sel.is_overlay_selected("a"));
    assert_eq!(sel.overlay_id(), Some("b"));
}

#[test]
fn crop_and_overlay_are_exclusive() {
    let mut sel = Selection::default();
    sel.select_overlay("a");
    sel.select_crop();
    assert!(sel.is_crop_selected());
    assert_eq!(sel.overlay_id(), None);
    sel.select_overlay("a");
    assert!(!sel.is_crop_selected());
}

#[test]
fn clear_drops_everything() {
    let mut sel = Selection::Overlay("a".to_string());
    sel.clear();
    assert_eq!(sel, Selection::None);
}

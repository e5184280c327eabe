use super::*;
use crate::composition::model::{CameraSpeed, OverlayKind, ZoomEventKind};

const JSON: &str = r#"{
  "settings": { "static_zoom": 1.2, "speed": "slow" },
  "trim": { "start": 0.0, "end": 12.0 },
  "events": [
    { "id": "e1", "type": "click", "start_time": 2.0, "duration": 2.5,
      "x": 0.15, "y": 0.2, "scale": 1.6 },
    { "id": "e2", "type": "drag", "start_time": 11.0, "duration": 4.0,
      "x": 0.2, "y": 0.5, "x_end": 0.8, "y_end": 0.5, "scale": 2.0 }
  ],
  "overlays": [
    { "id": "o1", "type": "spotlight", "start_time": 0.0, "duration": 4.0,
      "x": 0.1, "y": 0.1, "width": 0.3, "height": 0.2 }
  ]
}"#;

#[test]
fn parses_and_defaults_missing_sections() {
    let p = Project::from_reader(JSON.as_bytes()).unwrap();
    p.validate().unwrap();
    assert!(p.settings.auto_zoom);
    assert_eq!(p.settings.speed, CameraSpeed::Slow);
    assert_eq!(p.events[1].kind, ZoomEventKind::Drag);
    assert_eq!(p.overlays[0].kind, OverlayKind::Spotlight);
    assert!(!p.crop.active);
    assert_eq!(p.trim.unwrap().end, 12.0);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut p = Project::from_reader(JSON.as_bytes()).unwrap();
    let dup = p.events[0].clone();
    p.events.push(dup);
    let err = p.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate zoom event id 'e1'"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Project::from_reader("{ \"events\": 3 }".as_bytes()).unwrap_err();
    assert!(matches!(err, ReframeError::Serde(_)));
}

#[test]
fn overlay_lookup_and_removal() {
    let mut p = Project::from_reader(JSON.as_bytes()).unwrap();
    p.overlay_mut("o1").unwrap().x = 0.4;
    assert_eq!(p.overlay("o1").unwrap().x, 0.4);
    assert!(p.remove_overlay("o1").is_some());
    assert!(p.overlay("o1").is_none());
    assert!(p.remove_overlay("o1").is_none());
}

#[test]
fn json_survives_a_write_and_reparse() {
    let p = Project::from_reader(JSON.as_bytes()).unwrap();
    let text = p.to_json_pretty().unwrap();
    let again = Project::from_reader(text.as_bytes()).unwrap();
    assert_eq!(p, again);
}

#[test]
fn missing_file_is_an_io_error_not_invalid_data() {
    let err = Project::from_path("tests/data/does_not_exist.json").unwrap_err();
    assert!(matches!(err, ReframeError::Other(_)));
    assert!(err.to_string().contains("does_not_exist.json"));
}

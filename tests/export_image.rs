use eframe_doodle::{ActionKind, DrawingSurface, ExportFormat, TouchEvent, save_image};
use egui::{Color32, pos2};

fn surface_with_drawing() -> DrawingSurface {
    let mut surface = DrawingSurface::new(64, 48, Color32::WHITE);
    surface.set_tool(ActionKind::Circle);
    surface.set_color("#ff0000").unwrap();
    surface.handle_event(TouchEvent::Down(pos2(8.0, 8.0)));
    surface.handle_event(TouchEvent::Move(pos2(40.0, 40.0)));
    surface.handle_event(TouchEvent::Up);
    surface
}

#[test]
fn test_export_twice_is_identical() {
    let surface = surface_with_drawing();
    let first = surface.export_image().unwrap();
    let second = surface.export_image().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_export_matches_buffer() {
    let surface = surface_with_drawing();
    let bytes = surface.export_image().unwrap();

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (64, 48));
    assert_eq!(&decoded, surface.pixels());
}

#[test]
fn test_export_mid_gesture_includes_current_action() {
    let mut surface = DrawingSurface::new(32, 32, Color32::WHITE);
    surface.set_tool(ActionKind::FilledRect);
    surface.handle_event(TouchEvent::Down(pos2(0.0, 0.0)));
    surface.handle_event(TouchEvent::Move(pos2(32.0, 32.0)));

    let decoded = image::load_from_memory(&surface.export_image().unwrap())
        .unwrap()
        .to_rgba8();
    assert_eq!(decoded.get_pixel(16, 16).0, [0, 0, 0, 255]);
    assert!(surface.actions().is_empty());
}

#[test]
fn test_save_image_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let surface = surface_with_drawing();

    let path = save_image(&surface, dir.path().join("nested"), ExportFormat::Png).unwrap();
    assert!(path.starts_with(dir.path().join("nested")));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));

    let saved = image::open(&path).unwrap().to_rgba8();
    assert_eq!(&saved, surface.pixels());
}

#[test]
fn test_save_failure_leaves_surface_usable() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("taken");
    std::fs::write(&blocker, b"file").unwrap();

    let mut surface = surface_with_drawing();
    assert!(save_image(&surface, &blocker, ExportFormat::Jpeg).is_err());

    surface.handle_event(TouchEvent::Down(pos2(1.0, 1.0)));
    surface.handle_event(TouchEvent::Up);
    assert_eq!(surface.actions().len(), 2);
}

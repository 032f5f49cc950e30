use chrono::{TimeZone, Utc};
use eframe_pixel_art::export::{Destination, encode_artifact};
use eframe_pixel_art::{
    CellPos, Color, EditorConfig, EditorContext, EditorEvent, ExportEvent, ExportSettings, Tool,
};

fn memory_settings(size: u32) -> ExportSettings {
    ExportSettings {
        size,
        quality: 0.9,
        destination: Destination::Memory,
    }
}

#[test]
fn test_default_export_is_512_square() {
    let mut editor = EditorContext::default();
    editor.apply_tool_at(CellPos::new(0, 0)).unwrap();
    assert_eq!((editor.surface().width(), editor.surface().height()), (512, 512));

    let artifact = encode_artifact(&editor.surface().snapshot(), &memory_settings(512), Utc::now()).unwrap();
    assert_eq!((artifact.width, artifact.height), (512, 512));

    let decoded = image::load_from_memory(&artifact.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (512, 512));
    assert!(artifact.file_name.starts_with("pixel-art-"));
    assert!(artifact.file_name.ends_with(".jpg"));
}

#[test]
fn test_export_resamples_small_canvas() {
    let mut editor = EditorContext::new(EditorConfig {
        dimension: 4,
        cell_size: 1,
        ..EditorConfig::default()
    });
    editor.select_tool(Tool::Fill);
    editor.select_color(Color::rgb(0, 0, 0xFF));
    editor.apply_tool_at(CellPos::new(0, 0)).unwrap();

    let artifact = encode_artifact(&editor.surface().snapshot(), &memory_settings(64), Utc::now()).unwrap();
    let decoded = image::load_from_memory(&artifact.bytes).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (64, 64));

    // JPEG is lossy, so only check the dominant channel
    let pixel = decoded.get_pixel(32, 32);
    assert!(pixel[2] > 200 && pixel[0] < 60, "unexpected pixel {:?}", pixel);
}

#[test]
fn test_export_uses_snapshot_from_request_time() {
    let mut editor = EditorContext::default();
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 13, 45, 9).unwrap();
    let snapshot = editor.surface().snapshot();
    let before = encode_artifact(&snapshot, &memory_settings(512), at).unwrap();

    editor.select_tool(Tool::Fill);
    editor.apply_tool_at(CellPos::new(0, 0)).unwrap();

    let again = encode_artifact(&snapshot, &memory_settings(512), at).unwrap();
    assert_eq!(before, again);

    let live = encode_artifact(&editor.surface().snapshot(), &memory_settings(512), at).unwrap();
    assert_ne!(before.bytes, live.bytes);
}

#[test]
fn test_background_export_reports_ready() {
    let mut editor = EditorContext::default();
    editor.drain_events();

    let id = editor.request_export_with(memory_settings(512));
    // Drawing while the export runs must not disturb it
    editor.apply_tool_at(CellPos::new(3, 3)).unwrap();

    assert_eq!(editor.wait_for_exports(), 1);
    assert_eq!(editor.exports_in_flight(), 0);

    let events = editor.drain_events();
    assert_eq!(events[0], EditorEvent::ExportEvent(ExportEvent::Started { id }));
    assert!(matches!(
        &events[1],
        EditorEvent::ExportEvent(ExportEvent::Ready { id: ready, location, .. })
            if *ready == id && location == "memory"
    ));
}

#[test]
fn test_failed_export_leaves_editor_intact() {
    let mut editor = EditorContext::default();
    editor.apply_tool_at(CellPos::new(1, 1)).unwrap();
    let grid_before = editor.grid().clone();
    editor.drain_events();

    // Nothing can be resampled to a zero-sized output
    let id = editor.request_export_with(memory_settings(0));
    editor.wait_for_exports();

    let events = editor.drain_events();
    assert!(matches!(
        events.last(),
        Some(EditorEvent::ExportEvent(ExportEvent::Failed { id: failed, .. })) if *failed == id
    ));
    assert_eq!(*editor.grid(), grid_before);

    // Retrying straight away works
    editor.request_export_with(memory_settings(32));
    editor.wait_for_exports();
    assert!(matches!(
        editor.drain_events().last(),
        Some(EditorEvent::ExportEvent(ExportEvent::Ready { .. }))
    ));
}

#[test]
fn test_export_to_directory_writes_file() {
    let dir = std::env::temp_dir().join(format!("pixel-art-export-test-{}", std::process::id()));
    let mut editor = EditorContext::new(EditorConfig {
        export_dir: Some(dir.clone()),
        ..EditorConfig::default()
    });
    editor.drain_events();

    editor.request_export();
    editor.wait_for_exports();

    let location = editor
        .drain_events()
        .into_iter()
        .find_map(|event| match event {
            EditorEvent::ExportEvent(ExportEvent::Ready { location, .. }) => Some(location),
            _ => None,
        })
        .expect("export should succeed");

    let bytes = std::fs::read(&location).unwrap();
    assert!(!bytes.is_empty());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_waiting_reports_every_export_in_flight() {
    let mut editor = EditorContext::new(EditorConfig {
        dimension: 4,
        cell_size: 1,
        ..EditorConfig::default()
    });
    editor.drain_events();

    let first = editor.request_export_with(memory_settings(8));
    let second = editor.request_export_with(memory_settings(0));
    assert_eq!(editor.exports_in_flight(), 2);

    assert_eq!(editor.wait_for_exports(), 2);
    assert_eq!(editor.exports_in_flight(), 0);

    let events = editor.drain_events();
    assert!(events.iter().any(|event| matches!(
        event,
        EditorEvent::ExportEvent(ExportEvent::Ready { id, .. }) if *id == first
    )));
    assert!(events.iter().any(|event| matches!(
        event,
        EditorEvent::ExportEvent(ExportEvent::Failed { id, .. }) if *id == second
    )));
}

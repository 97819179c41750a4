use std::io::Write;

use serde_json::json;
use tree_panel_core::{Document, RangePolicy, render_node};
use tree_panel_egui::app::{PanelConfig, TreePanelApp};
use tree_panel_egui::components::form::EguiForm;

fn options() -> serde_json::Value {
    json!({
        "name": "oak",
        "growth": { "num_trials": 12, "max_angle": 45.5, "enabled": true },
        "mesh": { "iso_level": 75.0, "tags": [1, 2] }
    })
}

fn run_frames(frames: usize, mut draw: impl FnMut(&egui::Context)) {
    let ctx = egui::Context::default();
    for _ in 0..frames {
        let _ = ctx.run(egui::RawInput::default(), &mut draw);
    }
}

#[test]
fn egui_pass_leaves_values_alone() {
    let original = options();
    let mut value = original.clone();
    let policy = RangePolicy::default();

    run_frames(3, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            render_node(&mut EguiForm::new(ui, true), &policy, &mut value, "Options");
        });
    });

    // iso_level is above its slider range and still untouched
    assert_eq!(value, original);
}

#[test]
fn collapsed_sections_leave_values_alone() {
    let original = options();
    let mut value = original.clone();
    let policy = RangePolicy::default();

    run_frames(2, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            render_node(&mut EguiForm::new(ui, false), &policy, &mut value, "Options");
        });
    });

    assert_eq!(value, original);
}

#[test]
fn app_frames_keep_document_and_save() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    serde_json::to_writer(&mut file, &options()).unwrap();
    file.flush().unwrap();

    let document = Document::load(file.path()).unwrap();
    let mut app = TreePanelApp::new(document, RangePolicy::default(), PanelConfig::default());

    run_frames(3, |ctx| app.show(ctx));
    assert_eq!(app.document.root(), &options());
    assert!(app.session.frame() >= 3);
    assert!(!app.session.left_active());

    app.document.root_mut()["growth"]["enabled"] = json!(false);
    assert!(app.write_to_file());

    let reloaded = Document::load(file.path()).unwrap();
    let mut expected = options();
    expected["growth"]["enabled"] = json!(false);
    assert_eq!(reloaded.root(), &expected);
}

#[test]
fn failed_save_keeps_running() {
    let dir = tempfile::tempdir().unwrap();
    let document = Document::new(dir.path().join("gone/options.json"), options());
    let mut app = TreePanelApp::new(document, RangePolicy::default(), PanelConfig::default());

    assert!(!app.write_to_file());
    run_frames(1, |ctx| app.show(ctx));
    assert_eq!(app.document.root(), &options());
}

#[test]
fn default_config_matches_window() {
    let config = PanelConfig::default();
    assert_eq!((config.width, config.height), (800.0, 800.0));
    assert_eq!(config.title, "TreePanel (PANEL)");
    assert_eq!(config.root_section, "Options");
    assert!(config.sections_open);
}

fn input_at(events: Vec<egui::Event>) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(800.0, 800.0),
        )),
        events,
        ..Default::default()
    }
}

fn click(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

/// Runs one frame with `value` as the only form content and returns the area
/// the form occupied.
fn form_frame(
    ctx: &egui::Context,
    input: egui::RawInput,
    value: &mut serde_json::Value,
    name: &str,
) -> egui::Rect {
    let policy = RangePolicy::default();
    let mut rect = egui::Rect::NOTHING;
    let _ = ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            rect = ui
                .scope(|ui| {
                    render_node(&mut EguiForm::new(ui, true), &policy, value, name);
                })
                .response
                .rect;
        });
    });
    rect
}

#[test]
fn clicking_a_checkbox_writes_the_node() {
    let ctx = egui::Context::default();
    let mut value = json!(false);

    let rect = form_frame(&ctx, input_at(Vec::new()), &mut value, "enabled");
    assert_eq!(value, json!(false));

    let target = rect.center();
    let pressed = vec![egui::Event::PointerMoved(target), click(target, true)];
    form_frame(&ctx, input_at(pressed), &mut value, "enabled");
    form_frame(&ctx, input_at(vec![click(target, false)]), &mut value, "enabled");

    assert_eq!(value, json!(true));
    assert!(value.is_boolean());
}

use egui::{PointerButton, RichText, ScrollArea};
use egui_notify::Toasts;
use tree_panel_core::{Document, InputEvent, MouseButton, RangePolicy, Session, render_node};

use crate::components::{form::EguiForm, status_bar::StatusBar};
use crate::consts::{text, window};

/// Static presentation settings for the panel.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub heading: String,
    /// Name shown on the section for the document root
    pub root_section: String,
    pub sections_open: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: window::WIDTH,
            height: window::HEIGHT,
            title: window::TITLE.to_string(),
            heading: text::HEADING.to_string(),
            root_section: text::ROOT_SECTION.to_string(),
            sections_open: true,
        }
    }
}

impl PanelConfig {
    pub fn viewport(&self) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title(&self.title)
            .with_inner_size([self.width, self.height])
            .with_resizable(false)
    }
}

#[derive(Default)]
pub struct ViewState {
    pub show_logs: bool,
    pub notifications: Toasts,
}

pub struct TreePanelApp {
    /// The options file being edited
    pub document: Document,
    pub policy: RangePolicy,
    /// Pointer state for anything drawing in this window besides the panel
    pub session: Session,
    pub config: PanelConfig,
    pub view_state: ViewState,
}

impl TreePanelApp {
    pub fn new(document: Document, policy: RangePolicy, config: PanelConfig) -> Self {
        let session = Session::new(config.width, config.height);
        Self {
            document,
            policy,
            session,
            config,
            view_state: Default::default(),
        }
    }

    /// Write the in-memory document over its source file.
    ///
    /// Failure is reported and otherwise ignored; the document is untouched
    /// either way. Returns whether the write went through.
    pub fn write_to_file(&mut self) -> bool {
        let path = self.document.path().display().to_string();
        match self.document.save() {
            Ok(()) => {
                log::info!("wrote options to {path}");
                self.view_state
                    .notifications
                    .success(format!("Saved {path}"));
                true
            }
            Err(e) => {
                log::error!("Cannot edit options file {path}: {e}");
                self.view_state
                    .notifications
                    .error(format!("Could not write {path}"));
                false
            }
        }
    }

    /// Forward this frame's pointer and window events to the session.
    ///
    /// Must run once per frame, before anything queries the session.
    fn track_input(&mut self, ctx: &egui::Context) {
        self.session.advance_frame();

        let wants_pointer = ctx.wants_pointer_input();
        let size = ctx.viewport_rect().size();

        let mut events = Vec::new();
        if [size.x, size.y] != self.session.window_size().to_array() {
            events.push(InputEvent::Resized {
                width: size.x,
                height: size.y,
            });
        }

        ctx.input(|i| {
            for event in &i.events {
                match event {
                    egui::Event::PointerMoved(pos) => {
                        events.push(InputEvent::CursorMoved { x: pos.x, y: pos.y });
                    }
                    egui::Event::PointerButton {
                        button, pressed, ..
                    } => {
                        let button = match button {
                            PointerButton::Primary => MouseButton::Left,
                            PointerButton::Secondary => MouseButton::Right,
                            PointerButton::Middle => MouseButton::Middle,
                            PointerButton::Extra1 | PointerButton::Extra2 => continue,
                        };
                        events.push(InputEvent::MouseButton {
                            button,
                            pressed: *pressed,
                        });
                    }
                    _ => {}
                }
            }
        });

        for event in events {
            self.session.handle_input(event, wants_pointer);
        }
    }

    /// Draw one frame of the panel. Editing happens in place on the document.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.track_input(ctx);
        self.handle_keypress(ctx);

        egui::Window::new("Log")
            .open(&mut self.view_state.show_logs)
            .show(ctx, |ui| {
                egui_logger::logger_ui().show(ui);
            });

        StatusBar::show(ctx, &self.document, &self.session);

        let mut save = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(RichText::new(&self.config.heading).strong());
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let mut form = EguiForm::new(ui, self.config.sections_open);
                    render_node(
                        &mut form,
                        &self.policy,
                        self.document.root_mut(),
                        &self.config.root_section,
                    );

                    save = ui.button(text::SAVE_BUTTON).clicked();
                });
        });

        if save {
            self.write_to_file();
        }

        self.view_state.notifications.show(ctx);
    }
}

impl eframe::App for TreePanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

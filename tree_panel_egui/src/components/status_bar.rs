use egui::{Context, RichText};
use tree_panel_core::{Document, Session};

pub struct StatusBar;

impl StatusBar {
    pub fn show(ctx: &Context, document: &Document, session: &Session) {
        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(document.path().display().to_string()).weak());
                    ui.separator();
                    ui.label(RichText::new(format!("{} leaves", document.leaf_count())).weak());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let cursor = session.cursor_ndc();
                        ui.label(
                            RichText::new(format!(
                                "frame {} | ndc ({:.3}, {:.3})",
                                session.frame(),
                                cursor.x,
                                cursor.y
                            ))
                            .weak(),
                        );
                    });
                });
            });
    }
}

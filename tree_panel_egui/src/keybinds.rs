use egui::{Key, KeyboardShortcut, Modifiers};

use crate::app::TreePanelApp;

const SAVE: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);

impl TreePanelApp {
    pub fn handle_keypress(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE)) {
            self.write_to_file();
        }
        if ctx.input(|i| i.key_pressed(Key::F12)) {
            self.view_state.show_logs = !self.view_state.show_logs;
        }
    }
}

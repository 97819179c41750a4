use egui::{CollapsingHeader, Slider, SliderClamping, Ui};
use tree_panel_core::{FloatRange, FormBuilder, IntRange};

use crate::consts::layout;

/// [FormBuilder] backed by egui widgets.
pub struct EguiForm<'a> {
    ui: &'a mut Ui,
    sections_open: bool,
}

impl<'a> EguiForm<'a> {
    pub fn new(ui: &'a mut Ui, sections_open: bool) -> Self {
        Self { ui, sections_open }
    }
}

impl FormBuilder for EguiForm<'_> {
    fn section(&mut self, id: &str, title: &str, body: &mut dyn FnMut(&mut dyn FormBuilder)) {
        let sections_open = self.sections_open;
        CollapsingHeader::new(title)
            .id_salt(id)
            .default_open(sections_open)
            .show(self.ui, |ui| body(&mut EguiForm { ui, sections_open }));
    }

    // Only user edits are clamped so an out-of-range value loaded from disk
    // is left alone until someone drags it.
    fn int_slider(&mut self, label: &str, value: &mut i64, range: IntRange) {
        self.ui.add(
            Slider::new(value, range.as_inclusive())
                .text(label)
                .clamping(SliderClamping::Edits),
        );
    }

    fn float_slider(&mut self, label: &str, value: &mut f64, range: FloatRange) {
        self.ui.add(
            Slider::new(value, range.as_inclusive())
                .text(label)
                .clamping(SliderClamping::Edits),
        );
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) {
        self.ui.checkbox(value, label);
    }

    fn separator(&mut self) {
        self.ui.separator();
        self.ui.add_space(layout::SECTION_GAP);
    }
}

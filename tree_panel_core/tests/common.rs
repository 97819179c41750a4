#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io::Write;

use serde_json::Value;
use tempfile::NamedTempFile;
use tree_panel_core::{FloatRange, FormBuilder, IntRange};

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Section(String),
    IntSlider { label: String, value: i64, range: IntRange },
    FloatSlider { label: String, value: f64, range: FloatRange },
    Checkbox { label: String, value: bool },
    Separator,
}

/// A form that records what it was asked to draw and plays back scripted
/// user edits, keyed by widget label.
#[derive(Debug, Default)]
pub struct ScriptedForm {
    pub widgets: Vec<Widget>,
    pub collapsed: HashSet<String>,
    pub int_edits: HashMap<String, i64>,
    pub float_edits: HashMap<String, f64>,
    pub toggles: HashSet<String>,
}

impl ScriptedForm {
    pub fn sliders(&self) -> Vec<&Widget> {
        self.widgets
            .iter()
            .filter(|w| matches!(w, Widget::IntSlider { .. } | Widget::FloatSlider { .. }))
            .collect()
    }
}

impl FormBuilder for ScriptedForm {
    fn section(&mut self, id: &str, _title: &str, body: &mut dyn FnMut(&mut dyn FormBuilder)) {
        self.widgets.push(Widget::Section(id.to_string()));
        if !self.collapsed.contains(id) {
            body(self);
        }
    }

    fn int_slider(&mut self, label: &str, value: &mut i64, range: IntRange) {
        self.widgets.push(Widget::IntSlider {
            label: label.to_string(),
            value: *value,
            range,
        });
        if let Some(edit) = self.int_edits.get(label) {
            *value = range.clamp(*edit);
        }
    }

    fn float_slider(&mut self, label: &str, value: &mut f64, range: FloatRange) {
        self.widgets.push(Widget::FloatSlider {
            label: label.to_string(),
            value: *value,
            range,
        });
        if let Some(edit) = self.float_edits.get(label) {
            *value = range.clamp(*edit);
        }
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) {
        self.widgets.push(Widget::Checkbox {
            label: label.to_string(),
            value: *value,
        });
        if self.toggles.contains(label) {
            *value = !*value;
        }
    }

    fn separator(&mut self) {
        self.widgets.push(Widget::Separator);
    }
}

pub fn options_file(contents: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    serde_json::to_writer(&mut file, contents).unwrap();
    file.flush().unwrap();
    file
}

pub fn tree_options() -> Value {
    serde_json::json!({
        "name": "oak",
        "growth": {
            "num_trials": 12,
            "num_per": 3,
            "max_angle": 45.5,
            "enabled": true
        },
        "mesh": {
            "iso_level": 2.5,
            "segment_length": 0.05,
            "tags": [1, 2, 3],
            "smooth": false
        }
    })
}

//! Walks a JSON tree and turns every editable leaf into a widget.
//!
//! The walk knows nothing about a concrete GUI. It talks to a [`FormBuilder`],
//! which the front end implements on top of its widget library, and writes
//! whatever value the widget reports straight back into the node. The pass
//! runs in full every frame.

use serde_json::Value;

use crate::range::{FloatRange, IntRange, RangePolicy};

/// Widget surface the tree walk draws onto.
///
/// Each value method receives the node's current value and leaves the
/// widget's value in it when it returns.
pub trait FormBuilder {
    /// A collapsible group. `body` runs only while the group is expanded.
    ///
    /// `id` is unique per node path and stable across frames; `title` is the
    /// key the object was reached under.
    fn section(&mut self, id: &str, title: &str, body: &mut dyn FnMut(&mut dyn FormBuilder));

    fn int_slider(&mut self, label: &str, value: &mut i64, range: IntRange);

    fn float_slider(&mut self, label: &str, value: &mut f64, range: FloatRange);

    fn checkbox(&mut self, label: &str, value: &mut bool);

    fn separator(&mut self);
}

enum Leaf {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Leaf {
    fn of(node: &Value) -> Option<Self> {
        match node {
            Value::Bool(b) => Some(Leaf::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Leaf::Int(i)),
                None if n.is_f64() => n.as_f64().map(Leaf::Float),
                // u64 above i64::MAX has no slider that keeps it an integer
                None => None,
            },
            _ => None,
        }
    }
}

/// Display `node` under `name` and apply any edit back into it, recursively.
///
/// Strings, arrays and nulls produce no widgets. A leaf never changes type:
/// integers are written back as integers, floats as floats.
pub fn render_node(form: &mut dyn FormBuilder, policy: &RangePolicy, node: &mut Value, name: &str) {
    render_at(form, policy, node, name, name);
}

fn render_at(
    form: &mut dyn FormBuilder,
    policy: &RangePolicy,
    node: &mut Value,
    name: &str,
    path: &str,
) {
    if let Value::Object(map) = node {
        form.section(path, name, &mut |form: &mut dyn FormBuilder| {
            for (key, child) in map.iter_mut() {
                let child_path = format!("{path}/{key}");
                render_at(form, policy, child, key, &child_path);
            }
            form.separator();
        });
        return;
    }

    let Some(leaf) = Leaf::of(node) else {
        return;
    };

    *node = match leaf {
        Leaf::Int(mut value) => {
            form.int_slider(name, &mut value, policy.int_range(name));
            Value::from(value)
        }
        Leaf::Float(mut value) => {
            form.float_slider(name, &mut value, policy.float_range(name));
            Value::from(value)
        }
        Leaf::Bool(mut value) => {
            form.checkbox(name, &mut value);
            Value::from(value)
        }
    };
}

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::Result;

/// An options file held in memory while it is being edited.
///
/// Edits land directly in [`Document::root_mut`]; nothing reaches disk until
/// [`Document::save`] is called.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    root: Value,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, root: Value) -> Self {
        Self {
            path: path.into(),
            root,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let root = serde_json::from_reader(reader)?;
        Ok(Self::new(path, root))
    }

    /// Overwrite the source file with the current tree as compact JSON.
    pub fn save(&self) -> Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut writer, &self.root)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    /// Number of leaves the form can edit: integers, floats and booleans.
    pub fn leaf_count(&self) -> usize {
        fn count(value: &Value) -> usize {
            match value {
                Value::Object(map) => map.values().map(count).sum(),
                Value::Bool(_) => 1,
                Value::Number(n) if n.is_f64() || n.is_i64() => 1,
                _ => 0,
            }
        }
        count(&self.root)
    }
}

use std::ffi::OsString;
use std::path::PathBuf;

use tree_panel_core::error::{Error, Result};

use crate::consts::text;

/// Pull the options file path out of the process arguments, program name
/// already skipped. Exactly one argument is accepted. Paths are taken as raw
/// OS strings, so names that are not UTF-8 still load.
pub fn options_path(args: impl IntoIterator<Item = OsString>) -> Result<PathBuf> {
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(path), None) => Ok(PathBuf::from(path)),
        _ => Err(Error::Usage(text::USAGE.to_string())),
    }
}

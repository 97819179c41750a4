use anyhow::Result;
use log::{LevelFilter, Log};

use crate::consts::logging::QUIET_MODULES;

/// Fans every record out to two loggers.
pub struct CombineLogger<L1, L2>(pub L1, pub L2);

impl<L1: Log, L2: Log> Log for CombineLogger<L1, L2> {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.0.enabled(metadata) || self.1.enabled(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        self.0.log(record);
        self.1.log(record);
    }

    fn flush(&self) {
        self.0.flush();
        self.1.flush();
    }
}

/// Records shown in the panel's log window.
fn panel_logger(level: LevelFilter) -> impl Log + 'static {
    egui_logger::Builder::default().max_level(level).build()
}

/// Install a logger that writes to stderr and to the panel's log window.
///
/// `RUST_LOG` still overrides per-module levels on the stderr side.
#[cfg(feature = "native")]
pub fn init(level: LevelFilter) -> Result<()> {
    let mut stderr = env_logger::Builder::new();
    stderr.filter_level(level);
    for module in QUIET_MODULES {
        stderr.filter_module(module, LevelFilter::Warn);
    }
    stderr.parse_default_env();
    stderr.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "[{} {}:{}] {}",
            record.level(),
            record.module_path().unwrap_or("tree_panel"),
            record.line().unwrap_or(0),
            record.args()
        )
    });

    log::set_max_level(level);
    log::set_boxed_logger(Box::new(CombineLogger(stderr.build(), panel_logger(level))))?;

    Ok(())
}

#[cfg(not(feature = "native"))]
pub fn init(level: LevelFilter) -> Result<()> {
    log::set_max_level(level);
    log::set_boxed_logger(Box::new(panel_logger(level)))?;

    Ok(())
}

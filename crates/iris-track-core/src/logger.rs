//! Minimal stderr logger for the viewer and examples.
//!
//! Format: `LEVEL +elapsed target: message`, e.g.
//! `DEBUG +0.042s iris_track_core::iris: iris circles: ...`.
//! Binaries call `init_with_level` once at startup; later calls are
//! no-ops so library consumers can install their own logger first.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let _ = writeln!(
            std::io::stderr(),
            "{:>5} +{:.3}s {}: {}",
            record.level(),
            self.started.elapsed().as_secs_f64(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger with the provided level filter.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| StderrLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_noop() {
        init_with_level(LevelFilter::Warn).unwrap();
        // Second call must not panic or re-register.
        init_with_level(LevelFilter::Debug).unwrap();
        assert_eq!(log::max_level(), LevelFilter::Warn);
    }

    #[test]
    fn level_filter_gates_records() {
        let logger = StderrLogger {
            level: LevelFilter::Info,
            started: Instant::now(),
        };
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let info = Metadata::builder().level(log::Level::Info).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&info));
    }
}

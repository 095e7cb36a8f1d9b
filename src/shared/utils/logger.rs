use log::{debug, error, info, LevelFilter};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Install the `env_logger` backend once per process.
///
/// `RUST_LOG` wins over the defaults below. Safe to call from tests and from
/// hosts that already installed a logger.
pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::new()
            .filter_level(LevelFilter::Info)
            .filter_module("catalog_relations", LevelFilter::Debug)
            .filter_module("diesel", LevelFilter::Warn)
            .filter_module("r2d2", LevelFilter::Warn)
            .filter_module("tokio", LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_millis()
            .format_module_path(false)
            .try_init();

        info!("Logging initialized");
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// One-line log formats shared by the persistence layer
pub struct LogContext;

impl LogContext {
    pub fn db_operation(operation: &str, table: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!("DB: {} on {} completed in {}ms", operation, table, duration),
            None => debug!("DB: Starting {} on {}", operation, table),
        }
    }

    /// Progress of a partitioned lookup, `index` is 0-based
    pub fn partition_progress(index: usize, total: usize, values: usize) {
        debug!("Partition {}/{}: {} values", index + 1, total, values);
    }

    pub fn page_window(page: u32, page_size: u32, text_filter: &str) {
        if text_filter.trim().is_empty() {
            debug!("Page {} (size {}) of all relationships", page, page_size);
        } else {
            debug!(
                "Page {} (size {}) of relationships matching '{}'",
                page, page_size, text_filter
            );
        }
    }

    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(extra) => info!("Performance: {} took {}ms ({})", operation, duration_ms, extra),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Measures one repository call from construction to `finish_with_info`
pub struct TimedOperation {
    start: Instant,
    operation: &'static str,
}

impl TimedOperation {
    pub fn new(operation: &'static str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: Instant::now(),
            operation,
        }
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(self.operation, duration, Some(info));
        duration
    }
}

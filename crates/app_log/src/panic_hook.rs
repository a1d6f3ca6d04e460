//! Panic hook for crash reporting

use backtrace::Backtrace;
use chrono::{DateTime, Local};
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

/// Everything recorded about one panic
#[derive(Debug, Clone)]
pub struct CrashReport {
    pub timestamp: DateTime<Local>,
    pub thread: String,
    pub location: Option<String>,
    pub message: String,
    pub backtrace: String,
}

impl CrashReport {
    fn capture(info: &PanicHookInfo) -> Self {
        Self {
            timestamp: Local::now(),
            thread: std::thread::current()
                .name()
                .unwrap_or("<unnamed>")
                .to_string(),
            location: info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column())),
            message: payload_message(info.payload()),
            backtrace: format!("{:?}", Backtrace::new()),
        }
    }

    /// Plain-text report as written to stderr and the dump file
    pub fn render(&self) -> String {
        format!(
            "=== Portfolio Viewer crash ===\n\
             Version: {}\n\
             Timestamp: {}\n\
             Thread: {}\n\
             Location: {}\n\
             Message: {}\n\n\
             Stack Trace:\n{}",
            env!("CARGO_PKG_VERSION"),
            self.timestamp.to_rfc3339(),
            self.thread,
            self.location.as_deref().unwrap_or("<unknown>"),
            self.message,
            self.backtrace
        )
    }

    /// Dump file name, unique per second
    pub fn file_name(&self) -> String {
        format!("portfolio_viewer_crash_{}.txt", self.timestamp.format("%Y%m%d_%H%M%S"))
    }

    /// Write the report into `dir`, returning the file path
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, self.render())?;
        Ok(path)
    }
}

/// Initialize the panic hook for crash reporting
pub fn init_panic_hook() {
    std::panic::set_hook(Box::new(panic_handler));
    tracing::debug!("Panic hook initialized");
}

fn panic_handler(info: &PanicHookInfo) {
    let report = CrashReport::capture(info);
    let text = report.render();

    eprintln!("{}", text);
    tracing::error!(
        thread = %report.thread,
        location = report.location.as_deref().unwrap_or("<unknown>"),
        "Panic: {}",
        report.message
    );

    // Next to the logs if possible, else the temp dir
    let written = report
        .write_to(&crate::log_dir())
        .or_else(|_| report.write_to(&std::env::temp_dir()));
    match written {
        Ok(path) => eprintln!("Crash report written to {}", path.display()),
        Err(e) => eprintln!("Failed to write crash dump: {}", e),
    }
}

/// Panic payloads are either `&str` (literal) or `String` (formatted)
fn payload_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<unknown>".to_string()
    }
}

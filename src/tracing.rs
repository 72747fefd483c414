use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::configuration::Configuration;

/// Sends log records to the log file when one is configured, to stderr
/// otherwise. stdout stays reserved for command output.
#[derive(Clone)]
struct LogWriter {
    file: Option<Arc<Mutex<File>>>,
}

struct LogSink {
    file: Option<Arc<Mutex<File>>>,
}

impl LogWriter {
    fn new(log_file: Option<&Path>) -> Self {
        let file = log_file.and_then(open_log_file).map(|f| Arc::new(Mutex::new(f)));
        Self { file }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogWriter {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        LogSink {
            file: self.file.clone(),
        }
    }
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.file {
            Some(file) => match file.lock() {
                Ok(mut file) => file.write(buf),
                Err(_) => Ok(buf.len()),
            },
            None => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &self.file {
            Some(file) => match file.lock() {
                Ok(mut file) => file.flush(),
                Err(_) => Ok(()),
            },
            None => io::stderr().flush(),
        }
    }
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        let _ = std::fs::create_dir_all(parent);
    }
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("unable to open the log file {}: {e}", path.display());
            None
        }
    }
}

fn default_filter(config: &Configuration) -> &'static str {
    if config.debug {
        "debug"
    } else {
        "warn"
    }
}

pub fn init(config: &Configuration) {
    let _ = tracing_log::LogTracer::init();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter(config)));

    let writer = LogWriter::new(config.log_file.as_deref());
    let file_output = writer.file.is_some();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(!file_output)
        .with_writer(writer)
        .try_init();
}

use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::sync::Mutex;

/// Writes log lines to stderr or to a file, leaving stdout for results.
pub struct InspectorLogger {
    sink: Mutex<Box<dyn Write + Send>>,
}

static LOGGER: OnceCell<InspectorLogger> = OnceCell::new();

/// Install the process logger. `log_file` appends to a file instead of
/// writing to stderr.
pub fn install(log_file: Option<&str>, level: LevelFilter) -> std::io::Result<()> {
    let logger = LOGGER.get_or_try_init(|| {
        let sink: Box<dyn Write + Send> = match log_file {
            None => Box::new(std::io::stderr()),
            Some(path) => Box::new(BufWriter::new(
                OpenOptions::new().create(true).append(true).open(path)?,
            )),
        };
        Ok::<_, std::io::Error>(InspectorLogger {
            sink: Mutex::new(sink),
        })
    })?;

    log::set_logger(logger)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        chrono::Local::now().format("%T%.3f"),
        record.level(),
        record.target(),
        record.args(),
    )
}

impl Log for InspectorLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut sink) = self.sink.lock() {
            if let Err(e) = writeln!(sink, "{}", format_line(record)) {
                eprintln!("Log write failure: {}", e);
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            if let Err(e) = sink.flush() {
                eprintln!("Log flush failure: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_line_format() {
        let line = format_line(
            &Record::builder()
                .args(format_args!("URL prefix changed"))
                .level(Level::Info)
                .target("deeplinker::config")
                .build(),
        );

        assert!(line.ends_with(" INFO  deeplinker::config: URL prefix changed"));
    }
}

use log::Level;

/// Installs a logger that forwards this crate's records over a channel.
///
/// Fails if another logger has already been installed.
pub fn init_logger(
    level: log::LevelFilter,
) -> Result<flume::Receiver<Record>, log::SetLoggerError> {
    let (sender, receiver) = flume::unbounded();
    log::set_boxed_logger(Box::new(Logger::new(sender)))?;
    log::set_max_level(level);
    Ok(receiver)
}

/// A log line captured by [`init_logger`]
#[derive(Debug)]
pub struct Record {
    pub timestamp: time::OffsetDateTime,
    pub start: time::OffsetDateTime,
    pub target: Box<str>,
    pub level: Level,
    pub file: Option<&'static str>,
    pub line: Option<u32>,
    pub data: Box<str>,
}

impl Record {
    const fn level(&self) -> &'static str {
        match self.level {
            Level::Error => "error",
            Level::Warn => "warn ",
            Level::Info => "info ",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }

    /// Milliseconds since the logger started, as `sss.sss.sss`
    fn elapsed(&self) -> String {
        let ms = (self.timestamp - self.start).whole_milliseconds().max(0);
        let ts = format!("{ms:0>9}");
        let split = ts.len().saturating_sub(9);
        let (head, tail) = ts.split_at(split);

        // NOTE anything past 9 digits stays attached to the first group
        let mut parts = tail
            .as_bytes()
            .chunks(3)
            .filter_map(|c| std::str::from_utf8(c).ok());
        let first = parts.next().unwrap_or_default();
        std::iter::once(format!("{head}{first}"))
            .chain(parts.map(ToString::to_string))
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{ts} {level} {target} {data}",
            ts = self.elapsed(),
            level = self.level(),
            target = self.target,
            data = self.data,
        )?;

        if let Some((file, line)) = self.file.and_then(|file| Some((file, self.line?))) {
            write!(f, " ({file}:{line})")?;
        }
        Ok(())
    }
}

/// Ships records to whoever holds the receiver
struct Logger {
    sender: flume::Sender<Record>,
    start: time::OffsetDateTime,
}

impl Logger {
    fn new(sender: flume::Sender<Record>) -> Self {
        Self {
            sender,
            start: time::OffsetDateTime::now_utc(),
        }
    }

    fn log_it(&self, record: &log::Record<'_>) {
        let metadata = record.metadata();
        let args = record.args();

        let _ = self.sender.send(Record {
            timestamp: time::OffsetDateTime::now_utc(),
            start: self.start,
            target: Box::from(metadata.target()),
            level: metadata.level(),
            data: Box::from(&*args.to_string()),
            file: record.file_static(),
            line: record.line(),
        });
    }

    fn is_from_our_pkg(record: &log::Record<'_>) -> bool {
        record
            .module_path()
            .map(|module| module.split_once("::").map_or(module, |(head, _)| head))
            .filter(|&head| head == env!("CARGO_CRATE_NAME"))
            .is_some()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) || !Self::is_from_our_pkg(record) {
            return;
        }

        self.log_it(record)
    }

    fn flush(&self) {}
}

use std::{
    io::Write,
    sync::{Mutex, OnceLock},
};

use core::str::FromStr;

use termcolor::{WriteColor, StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

use rustc_hash::FxHashMap;

use compact_str::CompactString;

use crate::*;

use fmt::SegmentSpec;

/// Verbosity of a record, or of a filter.
///
/// `Always` is a record level only: such records pass every filter and are
/// written untagged. Filters are parsed from the five named levels.
#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Level {
    Always = -1,
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

/// Per-target verbosity parsed from a `RUST_LOG` style string.
///
/// Directives are comma separated and either `level` or `target=level`.
#[derive(Clone, Debug)]
pub struct Filters {
    base: Level,
    targets: FxHashMap<CompactString, Level>,
}

impl Default for Filters {

    fn default() -> Self {
        Self {
            base: Level::Error,
            targets: FxHashMap::default(),
        }
    }
}

impl Filters {

    pub fn parse(spec: &str) -> Self {
        let mut filters = Self::default();
        for directive in spec.split(',') {
            let (target, level) = match directive.find('=') {
                Some(j) => (Some(directive[..j].trim()), directive[j + 1..].trim()),
                None => (None, directive.trim()),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            if let Some(target) = target {
                let entry = filters.targets
                    .entry(CompactString::new(target))
                    .or_insert(level);
                *entry = (*entry).min(level);
            } else {
                filters.base = level;
            }
        }
        filters
    }

    #[inline(always)]
    pub fn base(&self) -> Level {
        self.base
    }

    /// Level for `target`, falling back through its `::` parents to the base level.
    pub fn level_for(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.targets.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[0..i];
            if let Some(&level) = self.targets.get(substr) {
                return level
            }
        }
        self.base
    }
}

struct Logger {
    stderr: StandardStream,
    always_fmt: LogFmt,
    error_fmt: LogFmt,
    warn_fmt: LogFmt,
    info_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    filters: Filters,
}

impl Logger {

    fn new(filters: Filters) -> Self {
        Self {
            stderr: StandardStream::stderr(ColorChoice::Auto),
            always_fmt: LogFmt::plain(),
            error_fmt: LogFmt::tagged("error", Color::Red),
            warn_fmt: LogFmt::tagged("warn", Color::Yellow),
            info_fmt: LogFmt::tagged("info", Color::Green),
            debug_fmt: LogFmt::tagged("debug", Color::Blue),
            trace_fmt: LogFmt::tagged("trace", Color::Magenta),
            filters,
        }
    }

    fn log(&mut self, target: &str, level: Level, msg: core::fmt::Arguments) -> Result<bool> {
        if self.filters.level_for(target) < level {
            return Ok(false)
        }
        let fmt = match level {
            Level::Always => &self.always_fmt,
            Level::Error => &self.error_fmt,
            Level::Warn => &self.warn_fmt,
            Level::Info => &self.info_fmt,
            Level::Debug => &self.debug_fmt,
            Level::Trace => &self.trace_fmt,
        };
        Self::write_record(&mut self.stderr, fmt, msg)?;
        Ok(true)
    }

    fn write_record(
        out: &mut impl WriteColor,
        fmt: &LogFmt,
        msg: core::fmt::Arguments,
    ) -> Result<()> {
        for segment in fmt {
            match segment {
                SegmentSpec::Message(log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        out.set_color(color_spec)?;
                        write!(out, "{}", msg)?;
                        out.reset()?;
                    } else {
                        write!(out, "{}", msg)?;
                    }
                },
                SegmentSpec::Text(text, log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        out.set_color(color_spec)?;
                        out.write_all(text.as_bytes())?;
                        out.reset()?;
                    } else {
                        out.write_all(text.as_bytes())?;
                    }
                },
            }
        }
        out.write_all(b"\n")?;
        Ok(())
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Installs the global logger, reading filters from `RUST_LOG`.
///
/// Calling this more than once has no effect.
pub fn init() {
    LOGGER.get_or_init(|| {
        let filters = std::env::var("RUST_LOG")
            .map(|env| Filters::parse(&env))
            .unwrap_or_default();
        Mutex::new(Logger::new(filters))
    });
}

fn with_logger<R>(f: impl FnOnce(&mut Logger) -> R) -> Result<R> {
    let mut logger = LOGGER
        .get()
        .ok_or(LogError::NotInitialized)?
        .lock()
        .map_err(|_| LogError::Poisoned)?;
    Ok(f(&mut logger))
}

#[inline(always)]
pub fn error_fmt(mut f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    with_logger(|logger| f(&mut LogFmtBuilder::new(&mut logger.error_fmt)))
}

#[inline(always)]
pub fn warn_fmt(mut f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    with_logger(|logger| f(&mut LogFmtBuilder::new(&mut logger.warn_fmt)))
}

#[inline(always)]
pub fn info_fmt(mut f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    with_logger(|logger| f(&mut LogFmtBuilder::new(&mut logger.info_fmt)))
}

#[inline(always)]
pub fn debug_fmt(mut f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    with_logger(|logger| f(&mut LogFmtBuilder::new(&mut logger.debug_fmt)))
}

#[inline(always)]
pub fn trace_fmt(mut f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    with_logger(|logger| f(&mut LogFmtBuilder::new(&mut logger.trace_fmt)))
}

/// Writes one record if `level` passes the filter for `target`.
///
/// Returns whether anything was written.
#[inline(always)]
pub fn log(target: &str, level: Level, args: core::fmt::Arguments) -> Result<bool> {
    with_logger(|logger| logger.log(target, level, args))?
}

#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Error, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Warn, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Info, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Debug, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Trace, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[cfg(test)]
mod tests {

    use pretty_assertions::assert_eq;

    use termcolor::Buffer;

    use super::*;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(Level::from_str("TRACE"), Ok(Level::Trace));
        assert_eq!(Level::from_str("Warn"), Ok(Level::Warn));
        assert_eq!(Level::from_str("always"), Err(()));
        assert_eq!(Level::from_str("loud"), Err(()));
    }

    #[test]
    fn base_level_defaults_to_error() {
        let filters = Filters::parse("");
        assert_eq!(filters.base(), Level::Error);
        assert_eq!(filters.level_for("anything"), Level::Error);
    }

    #[test]
    fn targets_fall_back_through_parents() {
        let filters = Filters::parse("warn, resarr_demo=trace ,resarr_demo::vec3=info");
        assert_eq!(filters.base(), Level::Warn);
        assert_eq!(filters.level_for("resarr_demo"), Level::Trace);
        assert_eq!(filters.level_for("resarr_demo::scenarios"), Level::Trace);
        assert_eq!(filters.level_for("resarr_demo::vec3"), Level::Info);
        assert_eq!(filters.level_for("resarr_demo::vec3::census"), Level::Info);
        assert_eq!(filters.level_for("other"), Level::Warn);
    }

    #[test]
    fn repeated_targets_keep_the_quietest_level() {
        let filters = Filters::parse("app=trace,app=warn,app=debug");
        assert_eq!(filters.level_for("app"), Level::Warn);
    }

    #[test]
    fn unknown_levels_are_ignored() {
        let filters = Filters::parse("info,app=chatty");
        assert_eq!(filters.base(), Level::Info);
        assert_eq!(filters.level_for("app"), Level::Info);
    }

    #[test]
    fn filtered_records_are_not_written() {
        let mut logger = Logger::new(Filters::parse("warn,noisy=error"));
        assert!(!logger.log("app", Level::Info, format_args!("hidden")).unwrap());
        assert!(!logger.log("noisy", Level::Warn, format_args!("hidden")).unwrap());
        assert!(logger.log("noisy", Level::Error, format_args!("shown")).unwrap());
        assert!(logger.log("app", Level::Warn, format_args!("shown")).unwrap());
    }

    #[test]
    fn always_records_pass_every_filter() {
        let mut logger = Logger::new(Filters::parse("error,quiet=error"));
        assert!(logger.log("quiet", Level::Always, format_args!("shown")).unwrap());
        assert!(logger.log("app::deep", Level::Always, format_args!("shown")).unwrap());
        let mut out = Buffer::no_color();
        Logger::write_record(&mut out, &logger.always_fmt, format_args!("plain")).unwrap();
        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "plain\n");
    }

    #[test]
    fn default_formats_tag_the_message() {
        let logger = Logger::new(Filters::default());
        let mut out = Buffer::no_color();
        Logger::write_record(&mut out, &logger.warn_fmt, format_args!("low on {}", "slots")).unwrap();
        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "[warn] low on slots\n");
    }

    // The only test touching the global logger: it must observe the
    // uninitialized state before installing it.
    #[test]
    fn level_formats_are_replaced_after_init() {
        assert!(matches!(info_fmt(|_| {}), Err(LogError::NotInitialized)));
        assert!(matches!(
            log("app", Level::Error, format_args!("dropped")),
            Err(LogError::NotInitialized),
        ));
        init();
        init();
        error_fmt(|builder| {
            builder
                .text("> ", |spec| spec)
                .message(|spec| spec);
        }).unwrap();
        warn_fmt(|builder| { builder.message(|spec| spec); }).unwrap();
        info_fmt(|builder| { builder.message(|spec| spec); }).unwrap();
        debug_fmt(|builder| { builder.message(|spec| spec); }).unwrap();
        trace_fmt(|builder| { builder.message(|spec| spec); }).unwrap();
        let (lens, written) = with_logger(|logger| {
            let lens = [
                logger.error_fmt.len(),
                logger.warn_fmt.len(),
                logger.info_fmt.len(),
                logger.debug_fmt.len(),
                logger.trace_fmt.len(),
            ];
            let mut out = Buffer::no_color();
            Logger::write_record(&mut out, &logger.error_fmt, format_args!("grew to {}", 6)).unwrap();
            (lens, out.into_inner())
        }).unwrap();
        assert_eq!(lens, [2, 1, 1, 1, 1]);
        assert_eq!(String::from_utf8(written).unwrap(), "> grew to 6\n");
        assert!(log("app", Level::Always, format_args!("kept")).unwrap());
    }
}

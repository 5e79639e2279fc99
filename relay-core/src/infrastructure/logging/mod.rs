//! Logging infrastructure using `log` + `log4rs`.

mod consts;

pub use consts::*;

use crate::foundation::{RelayError, Result};
use crate::infrastructure::config::LoggingConfig;
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            policy::compound::{roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger, CompoundPolicy},
            RollingFileAppender,
        },
    },
    config::{Appender, Logger, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::io::IsTerminal;
use std::path::Path;

const CONSOLE_APPENDER: &str = "stderr";
const LOG_FILE_APPENDER: &str = "log_file";
const ERR_LOG_FILE_APPENDER: &str = "err_log_file";

/// Initialize the relay logger with optional file output.
///
/// # Arguments
/// - `log_dir`: Optional directory for log files. If `None`, only console output is used.
/// - `filters`: Filter expression (e.g. `"info"`, `"relay_core=debug"`, `"root=info"`).
///
/// # Filtering Strategy (Whitelist)
/// - Root level defaults to OFF
/// - `relay_core` and the `relay::*` notification targets log at the requested app level (default INFO)
/// - Third party crates are opted in via `<crate>=<level>`, or all of them via `root=<level>`
///
/// The logger is global; repeated calls are ignored.
pub fn init_logger(log_dir: Option<&str>, filters: &str) -> Result<()> {
    let LogFilters { app_level, root_level, modules: module_levels } = LogFilters::parse(filters);

    let use_ansi = std::io::stderr().is_terminal();
    let console_pattern = if use_ansi { LOG_LINE_PATTERN_COLORED } else { LOG_LINE_PATTERN };

    let console = ConsoleAppender::builder().target(Target::Stderr).encoder(Box::new(PatternEncoder::new(console_pattern))).build();

    let mut config_builder = Config::builder().appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(console)));

    let mut root_appenders: Vec<&str> = vec![CONSOLE_APPENDER];

    if let Some(dir) = log_dir.map(str::trim).filter(|s| !s.is_empty()) {
        let file_appender = rolling_appender(Path::new(dir), LOG_FILE_NAME)?;
        config_builder = config_builder.appender(Appender::builder().build(LOG_FILE_APPENDER, Box::new(file_appender)));
        root_appenders.push(LOG_FILE_APPENDER);

        let err_file_appender = rolling_appender(Path::new(dir), ERR_LOG_FILE_NAME)?;
        config_builder = config_builder.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Warn)))
                .build(ERR_LOG_FILE_APPENDER, Box::new(err_file_appender)),
        );
        root_appenders.push(ERR_LOG_FILE_APPENDER);
    }

    let appender_names: Vec<String> = root_appenders.iter().map(|name| (*name).to_string()).collect();

    for crate_name in WHITELISTED_CRATES {
        if !module_levels.iter().any(|(m, _)| m == *crate_name) {
            config_builder =
                config_builder.logger(Logger::builder().appenders(appender_names.clone()).additive(false).build(*crate_name, app_level));
        }
    }

    for (module, level) in &module_levels {
        config_builder = config_builder.logger(Logger::builder().appenders(appender_names.clone()).additive(false).build(module, *level));
    }

    let config = config_builder
        .build(Root::builder().appenders(root_appenders).build(root_level))
        .map_err(|err| RelayError::ConfigError(format!("invalid logger config: {}", err)))?;
    if log4rs::init_config(config).is_err() {
        log::debug!("logging: logger already initialized, ignoring");
    }
    Ok(())
}

/// Initialize the relay logger from the `[logging]` config section.
pub fn init_logger_from_config(config: &LoggingConfig) -> Result<()> {
    init_logger(config.log_dir.as_deref(), &config.level)
}

fn rolling_appender(dir: &Path, file_name: &str) -> Result<RollingFileAppender> {
    let archive_pattern = dir.join(format!("{file_name}.{{}}.gz"));
    let archive_pattern = archive_pattern
        .to_str()
        .ok_or_else(|| RelayError::ConfigError(format!("log dir is not valid UTF-8: {}", dir.display())))?;
    let roller = FixedWindowRoller::builder()
        .base(1)
        .build(archive_pattern, LOG_FILE_MAX_ROLLS)
        .map_err(|err| RelayError::ConfigError(format!("log roller for {}: {}", file_name, err)))?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(LOG_FILE_MAX_SIZE)), Box::new(roller));
    RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_LINE_PATTERN)))
        .build(dir.join(file_name), Box::new(policy))
        .map_err(|err| crate::storage_err!(format!("open log file {}", file_name), err))
}

/// Parsed filter expression: a bare level for the whitelisted targets, `root=<level>`,
/// and `<target>=<level>` overrides. The first bare level and the first `root=` win.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogFilters {
    pub app_level: LevelFilter,
    pub root_level: LevelFilter,
    pub modules: Vec<(String, LevelFilter)>,
}

impl LogFilters {
    /// Malformed directives are skipped.
    pub fn parse(filters: &str) -> Self {
        Self::parse_with(filters, |_| {})
    }

    /// Directives `parse` would skip.
    pub fn invalid_directives(filters: &str) -> Vec<String> {
        let mut invalid = Vec::new();
        Self::parse_with(filters, |directive| invalid.push(directive.to_string()));
        invalid
    }

    fn parse_with(filters: &str, mut on_invalid: impl FnMut(&str)) -> Self {
        let mut app_level = None;
        let mut root_level = None;
        let mut modules = Vec::new();
        for directive in filters.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            let (target, level) = match directive.split_once('=') {
                Some((target, level)) => (Some(target.trim()), level.trim()),
                None => (None, directive),
            };
            let Ok(level) = level.parse::<LevelFilter>() else {
                on_invalid(directive);
                continue;
            };
            match target {
                None => {
                    app_level.get_or_insert(level);
                }
                Some("root") => {
                    root_level.get_or_insert(level);
                }
                Some("") => on_invalid(directive),
                Some(target) => modules.push((target.to_string(), level)),
            }
        }
        Self { app_level: app_level.unwrap_or(LevelFilter::Info), root_level: root_level.unwrap_or(LevelFilter::Off), modules }
    }
}

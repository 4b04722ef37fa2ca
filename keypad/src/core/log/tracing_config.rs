// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::try_create_layers;

/// Where log output goes, and how verbose it is.
///
/// ```no_run
/// use soft_keypad::{DisplayPreference, TracingConfig, WriterConfig};
/// use tracing_core::LevelFilter;
///
/// # fn main() -> miette::Result<()> {
/// TracingConfig {
///     writer_config: WriterConfig::DisplayAndFile(
///         DisplayPreference::Stderr,
///         "keypad_log.txt".to_string(),
///     ),
///     level_filter: LevelFilter::DEBUG,
/// }
/// .install_global()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    /// Path of the log file.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

impl WriterConfig {
    /// Picks the variant that writes to every destination given.
    #[must_use]
    pub fn from_destinations(
        maybe_display: Option<DisplayPreference>,
        maybe_log_file_path: Option<String>,
    ) -> Self {
        match (maybe_display, maybe_log_file_path) {
            (None, None) => WriterConfig::None,
            (Some(display), None) => WriterConfig::Display(display),
            (None, Some(path)) => WriterConfig::File(path),
            (Some(display), Some(path)) => WriterConfig::DisplayAndFile(display, path),
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new(writer_config: WriterConfig) -> Self {
        Self {
            writer_config,
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file_only(log_file_path: impl Into<String>) -> Self {
        Self::new(WriterConfig::File(log_file_path.into()))
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    /// Installs the layers as the process wide default subscriber. Can only be called
    /// once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or a global subscriber is
    /// already installed.
    pub fn install_global(self) -> miette::Result<()> {
        let Some(layers) = try_create_layers(self)? else {
            return Ok(());
        };
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|err| miette::miette!("Could not install global subscriber: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(None, None, WriterConfig::None; "nothing")]
    #[test_case(
        Some(DisplayPreference::Stderr),
        None,
        WriterConfig::Display(DisplayPreference::Stderr);
        "display only"
    )]
    #[test_case(
        None,
        Some("log.txt"),
        WriterConfig::File("log.txt".to_string());
        "file only"
    )]
    #[test_case(
        Some(DisplayPreference::Stdout),
        Some("log.txt"),
        WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "log.txt".to_string());
        "display and file"
    )]
    fn test_writer_config_from_destinations(
        maybe_display: Option<DisplayPreference>,
        maybe_log_file_path: Option<&str>,
        expected: WriterConfig,
    ) {
        assert_eq!(
            WriterConfig::from_destinations(
                maybe_display,
                maybe_log_file_path.map(str::to_string)
            ),
            expected
        );
    }

    #[test]
    fn test_no_writer_installs_nothing() {
        assert!(TracingConfig::new(WriterConfig::None).install_global().is_ok());
    }
}

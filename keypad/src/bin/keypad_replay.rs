// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Replays a JSON script of keypad input events and prints the final state as JSON.
//!
//! ```text
//! keypad_replay --script session.json
//! keypad_replay --script session.json --store-folder /tmp/keypad_store --enable-logging
//! keypad_replay --script session.json --in-memory
//! keypad_replay --script session.json --reset-position --log-display stderr
//! ```
//!
//! See [`soft_keypad::ReplayScript`] for the script format.

use std::path::PathBuf;

use clap::{Args, Parser};
use miette::Context;
use soft_keypad::{DisplayPreference, InMemoryPositionStorage, KvPositionStorage,
                  PositionStorage, ReplayErrorCouldNot, ReplayScript, TracingConfig,
                  WriterConfig};

#[derive(Debug, Parser)]
#[command(bin_name = "keypad_replay")]
#[command(about = "🔢 Replay keypad input events and print where the keypad ended up")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
pub struct CLIArg {
    #[arg(long, short = 's', help = "Path to the JSON replay script")]
    pub script: PathBuf,

    #[arg(
        long,
        help = "Folder of the on disk position store. Defaults to the user's config folder"
    )]
    pub store_folder: Option<PathBuf>,

    #[arg(
        long,
        conflicts_with = "store_folder",
        help = "Keep the overlay position in memory, don't touch the disk"
    )]
    pub in_memory: bool,

    #[arg(
        long,
        help = "Forget the stored overlay position before the script runs"
    )]
    pub reset_position: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = "keypad_replay_log.txt",
        help = "Log file used with --enable-logging"
    )]
    pub log_file: String,

    #[arg(
        global = true,
        long,
        value_enum,
        help = "Also log to stdout or stderr. Works without --enable-logging"
    )]
    pub log_display: Option<DisplayPreference>,
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    let writer_config = WriterConfig::from_destinations(
        cli_arg.global_options.log_display,
        cli_arg
            .global_options
            .enable_logging
            .then(|| cli_arg.global_options.log_file.clone()),
    );
    let enable_logging = writer_config != WriterConfig::None;
    TracingConfig::new(writer_config).install_global()?;
    enable_logging.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let script = ReplayScript::try_read(&cli_arg.script)?;

    let report = if cli_arg.in_memory {
        script.run(InMemoryPositionStorage::default())
    } else {
        let mut storage = match &cli_arg.store_folder {
            Some(store_folder) => KvPositionStorage::try_open(store_folder),
            None => KvPositionStorage::try_open_in_config_folder(),
        }
        .wrap_err(ReplayErrorCouldNot::OpenPositionStore)?;
        if cli_arg.reset_position {
            storage
                .try_remove_item(&script.config.storage_key)
                .wrap_err(ReplayErrorCouldNot::ResetPosition)?;
        }
        script.run(storage)
    };

    println!("{}", report.try_to_json()?);

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    Ok(())
}

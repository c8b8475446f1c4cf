use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::{self, LogTarget};

use self::{about::AboutArg, classify::ClassifyArg, ui::UiArg};

mod about;
mod classify;
mod ui;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log filter used when `RUST_LOG` is unset (e.g. `info`, `kelas_stats=debug`)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write logs to this file instead of stderr; the terminal UI only logs
    /// when this is given
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Open the interactive terminal interface
    Ui(#[clap(flatten)] UiArg),
    /// Classify a CSV score table and print the result
    Classify(#[clap(flatten)] ClassifyArg),
    /// Print an informational page
    About(#[clap(flatten)] AboutArg),
}

pub fn run() -> anyhow::Result<()> {
    let CommandArgs {
        log_level,
        log_file,
        mode,
    } = CommandArgs::parse();
    let mode = mode.unwrap_or(Mode::Ui(UiArg::default()));

    let target = match (&log_file, &mode) {
        (Some(path), _) => LogTarget::File(path),
        (None, Mode::Ui(_)) => LogTarget::Disabled,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(&log_level, target)?;

    match mode {
        Mode::Ui(arg) => ui::run(&arg)?,
        Mode::Classify(arg) => classify::run(&arg)?,
        Mode::About(arg) => about::run(&arg),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_cluster_range_is_enforced() {
        for k in ["0", "11"] {
            let result = CommandArgs::try_parse_from(["kelas", "classify", "siswa.csv", "-k", k]);
            assert!(result.is_err(), "k={k} should be rejected");
        }
        let args =
            CommandArgs::try_parse_from(["kelas", "classify", "siswa.csv", "-k", "10"]).unwrap();
        assert!(matches!(args.mode, Some(Mode::Classify(ref arg)) if arg.clusters == 10));
    }

    #[test]
    fn test_ui_is_the_default_mode() {
        let args = CommandArgs::try_parse_from(["kelas"]).unwrap();
        assert!(args.mode.is_none());
        assert_eq!(args.log_level, "info");
    }
}

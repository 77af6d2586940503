//! CLI argument definitions for the save-data tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use owm_model::CharacterClass;

#[derive(Parser)]
#[command(
    name = "owm-save",
    version,
    about = "Of Witches and Mazes save-data tool",
    long_about = "Inspect, validate, and create .rawdata character save files.\n\n\
                  Save files are fixed-layout binary buffers framed by magic\n\
                  header and footer bytes; see the check command for damage\n\
                  diagnosis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all save files in a directory.
    List(ListArgs),

    /// Decode and print a single save file.
    Show(ShowArgs),

    /// Diagnose a save file, reporting every issue found.
    Check(CheckArgs),

    /// Create a fresh save file for a new character.
    New(NewArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Directory holding .rawdata save files.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the save file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the decoded record as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the save file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct NewArgs {
    /// Directory to create the save file in.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Character name.
    #[arg(long = "name", value_name = "NAME")]
    pub name: String,

    /// Character class (fighter, rogue, wizard, cleric, ranger).
    #[arg(long = "class", value_name = "CLASS")]
    pub class: CharacterClass,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

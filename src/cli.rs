use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Koyomi Japanese calendar viewer.
#[derive(Parser)]
#[command(
    name = "koyomi",
    version,
    about = "Monthly calendar with Japanese national holidays and era labels"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render one month as a grid with events and holidays.
    Month(MonthArgs),
    /// List the national holidays of a year.
    Holidays(HolidaysArgs),
    /// Convert a date to Japanese era form.
    Era(EraArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "koyomi.toml")]
    pub config: PathBuf,

    /// Year to render (defaults to the current JST year).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Month to render, 1..=12 (defaults to the current JST month).
    #[arg(short, long)]
    pub month: Option<u8>,

    /// Override events JSON file from config.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Label the month in era form (era from config otherwise).
    #[arg(long)]
    pub era: bool,

    /// Highlight this date (YYYY-MM-DD).
    #[arg(short, long)]
    pub selected: Option<String>,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Year to list (defaults to the current JST year).
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Arguments for the `era` subcommand.
#[derive(clap::Args)]
pub struct EraArgs {
    /// Date to convert (YYYY-MM-DD).
    pub date: String,
}

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Organize photos and videos by camera brand or capture date")]
pub struct Cli {
    /// Camera brand (EXIF make) to keep, e.g. "Canon". Required unless --mode bydate
    #[arg(long)]
    pub brand: Option<String>,

    /// Directory containing the media to organize
    #[arg(long, required = true)]
    pub srcdir: PathBuf,

    /// Directory the kept files are moved into
    #[arg(long, required = true)]
    pub outdir: PathBuf,

    /// Camera model filter, e.g. "EOS 80D" (optional)
    #[arg(long)]
    pub model: Option<String>,

    /// Only process files with this extension (default: jpg)
    #[arg(long)]
    pub filetype: Option<String>,

    /// Organizing strategy
    #[arg(long, value_enum, default_value_t = Mode::ByBrand)]
    pub mode: Mode,

    /// Rename files to a normalized date-time name before organizing
    #[arg(long)]
    pub normalize: bool,

    /// Enable file logging to camsort.log
    #[arg(long = "log")]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Keep files whose camera make matches --brand, move them flat into outdir
    #[value(name = "bybrand")]
    ByBrand,
    /// Move files into outdir subfolders named by their filename date prefix
    #[value(name = "bydate")]
    ByDate,
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the SQLite catalog database
    #[arg(long, default_value = "steamrip.db")]
    pub db_path: PathBuf,

    /// Directory the snapshot files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

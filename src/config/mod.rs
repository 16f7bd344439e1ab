use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use tracing::info;

pub(crate) mod cli;

pub struct Config {
    pub args: Args,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();
        Ok(Self { args })
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.output_dir.exists() {
            std::fs::create_dir_all(&self.args.output_dir)?;
        }
        if let Some(parent) = self.args.db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        info!("Output and database dirs exist");
        Ok(())
    }
}

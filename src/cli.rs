//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Scrub through a repository's commit history in the terminal
#[derive(Debug, Parser)]
#[command(name = "commitscope", version, about)]
pub struct Cli {
    /// Per-line commit records (CSV)
    #[arg(default_value = "loc.csv")]
    pub path: PathBuf,

    /// Repository used for commit links (owner/name)
    #[arg(long, env = "COMMITSCOPE_REPO")]
    pub repo: Option<String>,

    /// Config file (default: ~/.config/commitscope/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Initial time cursor position (0-100)
    #[arg(long, value_parser = parse_progress)]
    pub progress: Option<f64>,
}

fn parse_progress(value: &str) -> Result<f64, String> {
    let progress: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if (0.0..=100.0).contains(&progress) {
        Ok(progress)
    } else {
        Err(format!("{progress} is outside 0-100"))
    }
}

impl Cli {
    /// Apply flags on top of file config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(repo) = &self.repo {
            config.repository.name = repo.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
        config.normalized()
    }
}

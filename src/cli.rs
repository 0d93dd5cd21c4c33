//! Command-line flags and interactive fallback prompts
//!
//! Each run input is taken from its flag, then its environment variable, then
//! the config file (directory and skip-existing only), and finally asked for
//! on stdin.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::config::{ExportConfig, DEFAULT_CONFIG_PATH};
use crate::export::RunConfig;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "plaud-export",
    version,
    about = "Bulk-download recordings, transcripts and summaries into a folder per tag"
)]
pub struct Args {
    /// Account username
    #[arg(short, long, env = "PlaudUserName")]
    pub username: Option<String>,

    /// Account password
    #[arg(short, long, env = "PlaudPassword", hide_env_values = true)]
    pub password: Option<String>,

    /// Directory to download files to
    #[arg(short, long, env = "PlaudDownloadDirectory")]
    pub directory: Option<String>,

    /// Only download recordings that started on or after this date (yyyy-MM-dd)
    #[arg(short = 's', long = "startdate", env = "PlaudStartDate")]
    pub start_date: Option<String>,

    /// Skip recordings whose folder already exists
    #[arg(
        long,
        env = "PlaudSkipExisting",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub skip_existing: Option<bool>,

    /// Download every recording again, even if its folder exists
    #[arg(long, conflicts_with = "skip_existing")]
    pub overwrite: bool,

    /// Config file (TOML), extension optional
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

/// Fully resolved run inputs
#[derive(Debug, Clone)]
pub struct UserInput {
    pub username: String,
    pub password: String,
    pub run: RunConfig,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Args {
    fn skip_existing(&self) -> Option<bool> {
        if self.overwrite {
            Some(false)
        } else {
            self.skip_existing
        }
    }

    /// Fill in missing values from `defaults`, then from the prompt
    pub fn resolve<R: BufRead, W: Write>(
        self,
        defaults: &ExportConfig,
        input: &mut R,
        output: &mut W,
    ) -> Result<UserInput> {
        let skip_existing = self.skip_existing().or(defaults.skip_existing);

        let username = match non_blank(self.username) {
            Some(u) => u,
            None => prompt(input, output, "Enter username: ")?,
        };
        let password = match non_blank(self.password) {
            Some(p) => p,
            None => prompt(input, output, "Enter password: ")?,
        };
        let directory = non_blank(self.directory).or_else(|| non_blank(defaults.directory.clone()));
        let directory = match directory {
            Some(d) => d,
            None => prompt(input, output, "Enter directory: ")?,
        };

        if username.is_empty() || password.is_empty() || directory.is_empty() {
            bail!("Invalid user input: username, password and directory are required");
        }

        let skip_existing = match skip_existing {
            Some(skip) => skip,
            None => prompt_skip_existing(input, output)?,
        };

        let root = shellexpand::full(&directory)
            .with_context(|| format!("Cannot expand directory {:?}", directory))?
            .into_owned();

        Ok(UserInput {
            username,
            password,
            run: RunConfig {
                root: root.into(),
                start_date: non_blank(self.start_date),
                skip_existing,
            },
        })
    }
}

/// Print `text` and read one trimmed line; end of input yields an empty string
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<String> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read from stdin")?;

    Ok(line.trim().to_string())
}

/// Ask whether to skip existing recordings; anything but an explicit no means yes
pub fn prompt_skip_existing<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    let answer = prompt(input, output, "Skip recordings that already exist? [Y/n]: ")?;

    Ok(!matches!(answer.to_ascii_lowercase().as_str(), "n" | "no"))
}

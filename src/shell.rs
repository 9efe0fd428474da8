//! Interactive command shell
//!
//! Reads one command per line:
//!
//! | Command | Effect |
//! |---------|--------|
//! | `set <param> <value>` | Update one setting, then show the configuration |
//! | `show` | Show the configuration |
//! | `run` | Crawl with the current configuration and write reports |
//! | `help` | List the commands |
//! | `exit`, `quit` | Leave the shell (end of input does the same) |
//!
//! Every `run` crawls with its own copy of the shell's configuration; errors
//! are printed and the shell keeps going.

use crate::config::{CrawlConfig, SETTING_NAMES};
use crate::crawler::{crawl, CrawlReport};
use crate::output::write_summary;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Prompt printed before each command
pub const PROMPT: &str = "(crawler) > ";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `set <param> <value>`; the value may contain spaces
    Set { key: String, value: String },
    Show,
    Run,
    Help,
    Exit,
    /// Blank line
    Empty,
    /// `set` without both a parameter and a value
    SetUsage,
    Unknown(String),
}

/// Parses one input line into a command
pub fn parse_command(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Command::Empty;
    };

    match cmd {
        "set" => {
            let args: Vec<&str> = parts.collect();
            if args.len() < 2 {
                return Command::SetUsage;
            }
            Command::Set {
                key: args[0].to_string(),
                value: args[1..].join(" "),
            }
        }
        "show" => Command::Show,
        "run" => Command::Run,
        "help" => Command::Help,
        "exit" | "quit" => Command::Exit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Whether the shell should keep reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Shell state: the draft configuration edited by `set`
pub struct Shell {
    config: CrawlConfig,
}

impl Shell {
    /// Creates a shell starting from `config`
    pub fn new(config: CrawlConfig) -> Self {
        Self { config }
    }

    /// Returns the current draft configuration
    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Executes one command, writing its output to `out`
    pub async fn execute(&mut self, command: Command, out: &mut dyn Write) -> io::Result<Flow> {
        match command {
            Command::Empty => {}
            Command::Set { key, value } => match self.config.apply_setting(&key, &value) {
                Ok(()) => write_config(&self.config, out)?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            Command::SetUsage => writeln!(out, "Usage: set [param] [value]")?,
            Command::Show => write_config(&self.config, out)?,
            Command::Run => match crawl(self.config.clone()).await {
                Ok(report) => write_report(&report, out)?,
                Err(e) => {
                    tracing::error!("Crawl failed: {}", e);
                    writeln!(out, "Error: {}", e)?;
                }
            },
            Command::Help => write_help(out)?,
            Command::Exit => {
                writeln!(out, "Bye!")?;
                return Ok(Flow::Exit);
            }
            Command::Unknown(cmd) => {
                writeln!(out, "Unknown command: {}. Type 'help'.", cmd)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Reads and executes commands until `exit`/`quit` or end of input
    pub async fn run<R>(&mut self, input: R, out: &mut dyn Write) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                writeln!(out, "Bye!")?;
                return Ok(());
            };

            if self.execute(parse_command(&line), out).await? == Flow::Exit {
                return Ok(());
            }
        }
    }
}

/// Writes the configuration as aligned `name: value` lines
pub fn write_config(config: &CrawlConfig, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n[ Current configuration ]")?;
    for (name, value) in config.entries() {
        writeln!(out, "  {:<14}: {}", name, value)?;
    }
    writeln!(out)
}

/// Writes the outcome of a finished run
pub fn write_report(report: &CrawlReport, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\nDone. Total found: {} pages.", report.results.len())?;
    writeln!(out, "Reports:")?;
    for path in report.files.paths() {
        writeln!(out, "  - {}", path.display())?;
    }
    writeln!(out)?;
    write_summary(&report.summary, out)
}

fn write_help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\nCommands:")?;
    writeln!(out, "  set <param> <value>   update a setting")?;
    writeln!(out, "  show                  show the current configuration")?;
    writeln!(out, "  run                   start crawling")?;
    writeln!(out, "  help                  show this help")?;
    writeln!(out, "  exit | quit           leave the shell")?;
    writeln!(out, "\nParameters: {}", SETTING_NAMES.join(", "))?;
    writeln!(out, "\nExample:")?;
    writeln!(out, "  set url https://example.com")?;
    writeln!(out, "  set depth 3")?;
    writeln!(out, "  run\n")
}

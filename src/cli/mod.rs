//! Command-line front end for the `course-qa` binary.

pub mod repl;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::engine::Tokenizer;
use crate::store::ContentStore;

use repl::{run_repl, Piped, Terminal};

/// Ask questions about the English course unit.
#[derive(Parser, Debug)]
#[command(name = "course-qa", version, about)]
pub struct Cli {
    /// TOML config file with data paths and prompt.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Knowledge base JSON document.
    #[arg(long, global = true)]
    pub knowledge: Option<PathBuf>,

    /// Search index JSON document.
    #[arg(long, global = true)]
    pub index: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive question loop (the default).
    Repl,

    /// Answer a single question and exit.
    Ask {
        #[arg(required = true)]
        question: Vec<String>,

        /// Print keywords, source and answer as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the keywords extracted from a question.
    Keywords {
        #[arg(required = true)]
        question: Vec<String>,
    },

    /// Show index statistics.
    Stats {
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Effective configuration: file (or defaults) with flag overrides applied.
    pub fn resolve_config(&self) -> Result<Config> {
        let config = Config::load(self.config.as_deref())?;
        Ok(config.with_overrides(self.knowledge.clone(), self.index.clone()))
    }

    /// The subcommand to run; `repl` when none was given.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Repl)
    }

    /// Run against the process's stdout.
    pub fn run(self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute(&mut out)
    }

    /// Run the selected command, writing everything it prints to `out`.
    pub fn execute<W: Write>(self, out: &mut W) -> Result<()> {
        let config = self.resolve_config()?;

        match self.into_command() {
            Command::Keywords { question } => {
                for keyword in Tokenizer::new().extract_keywords(&question.join(" ")) {
                    writeln!(out, "{keyword}")?;
                }
            }
            Command::Ask { question, json } => {
                let store = load_store(&config)?;
                let answer = store.answerer().answer(&question.join(" "));
                if json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&answer)?)?;
                } else {
                    writeln!(out, "{}", answer.text)?;
                }
            }
            Command::Stats { json } => {
                let store = load_store(&config)?;
                let stats = store.index().stats();
                if json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
                } else {
                    writeln!(out, "Keywords:      {}", stats.keywords)?;
                    writeln!(out, "QA items:      {}", stats.qa)?;
                    writeln!(out, "Vocabulary:    {}", stats.vocabulary)?;
                    writeln!(out, "Paragraphs:    {}", stats.paragraph)?;
                    writeln!(out, "Unrecognized:  {}", stats.unrecognized)?;
                    writeln!(out, "Skipped:       {}", stats.skipped)?;
                }
            }
            Command::Repl => {
                let store = load_store(&config)?;
                let answerer = store.answerer();
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    let mut terminal = Terminal::new()?;
                    run_repl(&answerer, &config.prompt, &mut terminal, out)?;
                } else {
                    let mut piped = Piped::new(stdin.lock());
                    run_repl(&answerer, &config.prompt, &mut piped, out)?;
                }
            }
        }

        Ok(())
    }
}

fn load_store(config: &Config) -> Result<ContentStore> {
    ContentStore::load(config).with_context(|| {
        format!(
            "loading {} and {}",
            config.knowledge_path.display(),
            config.index_path.display()
        )
    })
}

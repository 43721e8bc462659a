//! Tool to author and inspect SQLite build configurations.
//!
//! Use with:
//!
//! ```
//! cargo run -p tools -- render --profile sandboxed -o sqlite_cfg.h
//! cargo run -p tools -- check sqlite_cfg.h
//! cargo run -p tools -- options
//! ```

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use sqcfg::Config;

#[derive(Parser)]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a configuration header.
    Render {
        /// The preset to start from.
        #[clap(long, value_enum, default_value_t = Profile::Sandboxed)]
        profile: Profile,
        /// Set an option, as `NAME` or `NAME=VALUE`.
        #[clap(long = "set", value_name = "NAME[=VALUE]")]
        set: Vec<String>,
        /// Remove an option.
        #[clap(long = "unset", value_name = "NAME")]
        unset: Vec<String>,
        /// Write the header here instead of standard output.
        #[clap(short, long)]
        output: Option<PathBuf>,
        /// Render even if the configuration has conflicts.
        #[clap(long)]
        allow_conflicts: bool,
    },
    /// Parse a configuration header and report conflicts.
    Check {
        /// The header to check.
        path: PathBuf,
    },
    /// List the recognized options.
    Options,
}

#[derive(Clone, Copy, ValueEnum)]
enum Profile {
    Empty,
    Recommended,
    Sandboxed,
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    match entry(&opts) {
        Ok(code) => code,
        Err(e) => {
            println!("Error: {e}");

            let mut cause = e.source();

            while let Some(c) = cause {
                println!("Caused by: {c}");
                cause = c.source();
            }

            ExitCode::FAILURE
        }
    }
}

fn entry(opts: &Opts) -> Result<ExitCode> {
    match &opts.command {
        Command::Render {
            profile,
            set,
            unset,
            output,
            allow_conflicts,
        } => {
            let mut config = match profile {
                Profile::Empty => Config::new(),
                Profile::Recommended => Config::recommended(),
                Profile::Sandboxed => Config::sandboxed(),
            };

            for entry in set {
                match entry.split_once('=') {
                    Some((name, value)) => match value.parse::<i64>() {
                        Ok(value) => config.set_int(name, value),
                        Err(..) => config.set_text(name, value),
                    },
                    None => config.set(entry),
                };
            }

            for name in unset {
                config.unset(name);
            }

            if !allow_conflicts {
                let conflicts = config.conflicts();

                if !conflicts.is_empty() {
                    for conflict in &conflicts {
                        println!("{conflict}");
                    }

                    bail!("refusing to render a configuration with conflicts");
                }
            }

            match output {
                Some(path) => {
                    config
                        .write_header(path)
                        .with_context(|| format!("writing {}", path.display()))?;
                }
                None => {
                    print!("{}", config.to_header());
                }
            }

            Ok(ExitCode::SUCCESS)
        }
        Command::Check { path } => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;

            let config = Config::parse_header(&text)
                .with_context(|| format!("parsing {}", path.display()))?;

            let conflicts = config.conflicts();

            if conflicts.is_empty() {
                println!("{}: {} options, no conflicts", path.display(), config.len());
                return Ok(ExitCode::SUCCESS);
            }

            for conflict in &conflicts {
                println!("{conflict}");
            }

            Ok(ExitCode::FAILURE)
        }
        Command::Options => {
            for option in sqcfg::known_options() {
                println!(
                    "{:<34} {:<16} {}",
                    option.name(),
                    option.shape().to_string(),
                    option.effect()
                );
            }

            Ok(ExitCode::SUCCESS)
        }
    }
}

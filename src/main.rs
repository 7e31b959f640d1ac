//! REST Security Guide - headless simulator CLI
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use restsec_app::config::{load_settings, load_settings_strict, settings_path, SimSettings};
use restsec_app::Mode;
use restsec_core::prelude::*;
use restsec_guide::{HeadlessEvent, RateLimitOptions, StdoutSink};

/// REST Security Guide - play the interactive simulators headlessly
#[derive(Parser, Debug)]
#[command(name = "restsec")]
#[command(about = "Headless driver for the REST API security guide simulators", long_about = None)]
struct Args {
    /// Settings file (defaults to ./restsec.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one of the timed simulators
    Play {
        #[command(subcommand)]
        sim: PlayCommand,
    },

    /// Evaluate the permission matrix
    Authz {
        /// Role name (admin, manager, guest, no-auth); all roles when omitted
        #[arg(long)]
        role: Option<String>,

        /// Endpoint path such as /api/billing; all endpoints when omitted
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Print the content store as JSON
    Content,

    /// Check every table for consistency
    Check,

    /// Print a code sample tab with syntax spans
    Sample {
        /// Tab id (jwt, authz, ratelimit, validation, https)
        tab: String,
    },

    /// Write a default restsec.toml
    Init {
        /// Target directory
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum PlayCommand {
    /// Packet flood against the rate limiter
    RateLimit {
        #[arg(long, value_enum, default_value_t = ModeArg::Normal)]
        mode: ModeArg,

        /// How long to run before printing the summary
        #[arg(long, default_value_t = 5000)]
        duration_ms: u64,

        /// Seed for lane selection
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Scan a request payload
    Validation {
        /// Case id (valid-json, sql-injection, xss, missing-fields)
        #[arg(long = "case", default_value = "valid-json")]
        case_id: String,
    },

    /// Walk a request through the middleware chain
    Middleware,

    /// Play an authentication sequence
    Authn {
        /// Scenario id (login-success, wrong-password, token-expired, no-token)
        #[arg(long, default_value = "login-success")]
        scenario: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Normal,
    Attack,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Normal => Mode::Normal,
            ModeArg::Attack => Mode::Attack,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    restsec_core::logging::init()?;

    let args = Args::parse();
    let settings = resolve_settings(args.config.as_deref())?;

    if let Err(e) = run(args.command, &settings).await {
        HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
        return Err(e.into());
    }
    Ok(())
}

/// An explicit `--config` must load; the implicit file is best-effort.
fn resolve_settings(config: Option<&std::path::Path>) -> Result<SimSettings> {
    match config {
        Some(path) => load_settings_strict(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(load_settings(&settings_path(&cwd)))
        }
    }
}

async fn run(command: Command, settings: &SimSettings) -> Result<()> {
    let mut sink = StdoutSink;
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    match command {
        Command::Play { sim } => {
            let end = match sim {
                PlayCommand::RateLimit {
                    mode,
                    duration_ms,
                    seed,
                } => {
                    let options = RateLimitOptions {
                        mode: mode.into(),
                        duration_ms,
                        seed,
                    };
                    restsec_guide::play_rate_limit(settings, options, &mut sink, shutdown).await?
                }
                PlayCommand::Validation { case_id } => {
                    restsec_guide::play_validation(settings, &case_id, &mut sink, shutdown).await?
                }
                PlayCommand::Middleware => {
                    restsec_guide::play_middleware(settings, &mut sink, shutdown).await?
                }
                PlayCommand::Authn { scenario } => {
                    restsec_guide::play_authn(settings, &scenario, &mut sink, shutdown).await?
                }
            };
            info!("Run ended: {:?}", end);
            Ok(())
        }
        Command::Authz { role, endpoint } => {
            restsec_guide::evaluate_authz(role.as_deref(), endpoint.as_deref(), &mut sink)
        }
        Command::Content => restsec_guide::print_content(&mut sink),
        Command::Check => restsec_guide::check_tables(&mut sink),
        Command::Sample { tab } => restsec_guide::print_sample(&tab, &mut sink),
        Command::Init { dir } => restsec_guide::write_settings(&dir, &mut sink),
    }
}

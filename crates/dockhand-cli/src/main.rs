use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use dockhand_core::{CommandKind, Configuration, Invocation};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod handlers;
mod styles;

/// The command-line interface for Dockhand.
#[derive(Debug, Parser)]
#[command(name = "dkh")]
#[command(version)]
#[command(styles = styles::clap_styles())]
#[command(about = "Start, stop, and build docker-compose project stacks by name")]
#[command(
    long_about = "Dockhand keeps a registry of local docker-compose projects and runs the
usual lifecycle subcommands in the right directory for you. Projects are
declared in <cwd>/.config/dockhand/dockhand.json as a name-to-directory map."
)]
#[command(
    after_help = "Examples:
  dkh start api web        # start two projects
  dkh start -a -b          # rebuild and start everything
  dkh stop --all           # stop every stack that is running

The registry lives at <cwd>/.config/dockhand/dockhand.json."
)]
struct Cli {
    /// Raise dockhand's own log output to debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Apply the command to every project in the registry.
    #[arg(short, long, global = true)]
    all: bool,

    /// Directory whose .config/dockhand registry is used [default: $HOME].
    #[arg(long, global = true, value_name = "DIR")]
    cwd: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Bring project stacks up in detached mode.
    Start {
        /// Project names from the registry.
        targets: Vec<String>,

        /// Rebuild images before starting.
        #[arg(short, long)]
        build: bool,
    },
    /// Tear down project stacks that report running services.
    Stop {
        /// Project names from the registry.
        targets: Vec<String>,
    },
    /// Rebuild project images without starting them.
    Build {
        /// Project names from the registry.
        targets: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    debug!("parsed cli arguments: {:?}", cli);
    run(cli)
}

/// Loads the registry and dispatches the parsed command.
fn run(cli: Cli) -> Result<()> {
    let invocation = normalize(cli)?;
    debug!(
        "dispatching {} ({} explicit target(s), all={})",
        invocation.command,
        invocation.targets.len(),
        invocation.apply_all
    );

    let cfg = Configuration::load(&invocation.cwd)
        .with_context(|| format!("unable to load registry under '{}'", invocation.cwd.display()))?;

    match invocation.command {
        CommandKind::Start => handlers::start(&invocation, &cfg),
        CommandKind::Stop => handlers::stop(&invocation, &cfg),
        CommandKind::Build => handlers::build(&invocation, &cfg),
    }
}

/// Folds the clap output into the immutable [`Invocation`] record.
fn normalize(cli: Cli) -> Result<Invocation> {
    let cwd = resolve_cwd(cli.cwd)?;

    let (command, targets, build) = match cli.command {
        Commands::Start { targets, build } => (CommandKind::Start, targets, build),
        Commands::Stop { targets } => (CommandKind::Stop, targets, false),
        Commands::Build { targets } => (CommandKind::Build, targets, false),
    };

    Ok(Invocation {
        command,
        targets,
        build,
        apply_all: cli.all,
        cwd,
    })
}

/// The registry is per-user, so an unset `--cwd` falls back to `$HOME`.
fn resolve_cwd(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }

    std::env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("HOME is not set; pass --cwd to locate the registry"))
}

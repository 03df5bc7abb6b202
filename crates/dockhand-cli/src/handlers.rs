use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use dockhand_core::{
    has_running_services, resolve_targets, runner, ComposeAction, Configuration, Invocation,
};

use crate::styles;

/// Brings each resolved target's stack up, in order.
///
/// With `invocation.build` set, images are rebuilt before starting. A
/// failing target aborts the whole command; targets after it are never
/// attempted and nothing already started is rolled back.
#[instrument(skip(cfg))]
pub fn start(invocation: &Invocation, cfg: &Configuration) -> Result<()> {
    let action = ComposeAction::Up {
        rebuild: invocation.build,
    };

    for target in resolved(invocation, cfg) {
        let root = cfg.project_root(&target)?;
        run_action(cfg, action, root, &target)?;
        println!("{}", styles::success(&format!("Started {target}")));
    }

    Ok(())
}

/// Rebuilds each resolved target's images without starting anything.
#[instrument(skip(cfg))]
pub fn build(invocation: &Invocation, cfg: &Configuration) -> Result<()> {
    for target in resolved(invocation, cfg) {
        let root = cfg.project_root(&target)?;
        run_action(cfg, ComposeAction::Build, root, &target)?;
        println!("{}", styles::success(&format!("Built fresh {target}")));
    }

    Ok(())
}

/// Tears down each resolved target that reports running services.
///
/// Targets whose `ps` shows nothing running are skipped with a notice
/// instead of failing, so a mixed fleet stops cleanly.
#[instrument(skip(cfg))]
pub fn stop(invocation: &Invocation, cfg: &Configuration) -> Result<()> {
    for target in resolved(invocation, cfg) {
        let root = cfg.project_root(&target)?;

        let ps = runner::run_captured(&cfg.compose_bin, &ComposeAction::Ps.args(), root)
            .with_context(|| format!("ps failed for {target}"))?;

        if !has_running_services(&ps) {
            println!("{}", styles::warning(&format!("{target} is not running.")));
            continue;
        }

        run_action(cfg, ComposeAction::Down, root, &target)?;
        println!("{}", styles::success(&format!("{target} stopped.")));
    }

    Ok(())
}

fn resolved(invocation: &Invocation, cfg: &Configuration) -> Vec<String> {
    let targets = resolve_targets(invocation, cfg);
    if targets.is_empty() {
        warn!("no targets selected; pass project names or --all");
    }
    targets
}

fn run_action(cfg: &Configuration, action: ComposeAction, root: &Path, target: &str) -> Result<()> {
    info!(target: "dockhand", "run {} for {} in {}", action.as_str(), target, root.display());
    runner::run(&cfg.compose_bin, &action.args(), root)
        .with_context(|| format!("{} failed for {}", action.as_str(), target))
}

use crate::command::Invocation;
use crate::config::Configuration;

/// Computes the project names a command applies to.
///
/// Under `--all` this is every configured project, in registry (name)
/// order, and any explicit targets are ignored. Otherwise the explicit
/// list is returned exactly as given, with no filtering and no
/// deduplication; membership is checked at lookup time by the handlers.
pub fn resolve_targets(invocation: &Invocation, cfg: &Configuration) -> Vec<String> {
    if invocation.apply_all {
        cfg.projects.keys().cloned().collect()
    } else {
        invocation.targets.clone()
    }
}

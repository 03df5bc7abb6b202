use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Runs `program args..` in `dir`, streaming child output through.
/// Fails when the process cannot be spawned or exits non-zero.
pub fn run(program: &str, args: &[String], dir: &Path) -> Result<()> {
    debug!("spawn {} {} in {}", program, args.join(" "), dir.display());

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("failed to start command '{} {}'", program, args.join(" ")))?;

    if !status.success() {
        bail!(
            "command failed with status {}: {} {}",
            status,
            program,
            args.join(" ")
        );
    }

    Ok(())
}

/// Runs the command with output captured and returns its stdout as
/// text, for callers that parse it. On non-zero exit the captured
/// stderr is folded into the error since it never reached the terminal.
pub fn run_captured(program: &str, args: &[String], dir: &Path) -> Result<String> {
    debug!(
        "spawn (captured) {} {} in {}",
        program,
        args.join(" "),
        dir.display()
    );

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("failed to start command '{} {}'", program, args.join(" ")))?;

    if !output.status.success() {
        bail!(
            "command failed with status {}: {} {}\n{}",
            output.status,
            program,
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
